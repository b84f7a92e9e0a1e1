//! Library exports for integration testing.
//!
//! The `tsort` binary is a thin CLI wrapper over [`sort::run`]; the
//! integration tests under `tests/` drive the same entry points in-process.

pub mod graph;
pub mod multiset;
pub mod queue;
pub mod set;
pub mod sort;
