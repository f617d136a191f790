//! Engine systems.
//!
//! `assignment` runs at the assignment cadence (each registry commit),
//! `steering` once per render frame, `snapshot` after steering.

pub mod assignment;
pub mod snapshot;
pub mod steering;
