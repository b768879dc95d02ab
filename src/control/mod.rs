//! Control logic: pure functions, no I/O.

pub mod bands;
