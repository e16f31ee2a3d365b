//! Core building blocks: run configuration (`params`) and the resize
//! primitives (`processing`). These are consumed by the high-level `api` module.
pub mod params;
pub mod processing;
