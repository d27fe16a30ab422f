//! Unit test modules.

mod record_format_test;
