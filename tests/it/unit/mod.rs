//! Single-component unit tests against the public canvas API.

mod query_tests;
