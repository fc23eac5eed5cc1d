//! Unit tests for the board client and the local mirror gateway.
