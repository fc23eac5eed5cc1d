//! Unit tests for request parsing and error mapping.
