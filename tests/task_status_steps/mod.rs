//! Step definitions for task status cycle scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
