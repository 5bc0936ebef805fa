//! Integration tests for sqlsplit.

pub mod pipeline_test;
