//! Utilities shared by the binary and the tests

pub mod testing;
