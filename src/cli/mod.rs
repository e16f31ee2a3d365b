//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`), CLI-level errors (`errors`),
//! and the orchestration logic (`runner`) that resolves a `ResizeConfig`,
//! drives the batch, and prints progress lines.
//!
//! If you are embedding the resizer into another application, prefer the
//! high-level `emblem_resize::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
