//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem.
//! All tests run on the host (x86_64) with no real hardware required:
//! either against mock port adapters or against the real drivers over the
//! simulated register file.

mod controller_tests;
mod end_to_end_tests;
mod mock_hw;
