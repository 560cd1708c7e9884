//! Use case orchestration for sevgate.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! and render layers, plus the two filesystem touch points (read the scan report, write the
//! decision record).
//!
//! The CLI crate depends on this; it only handles argument parsing, logging setup, and exit codes.

#![forbid(unsafe_code)]

mod gate;
mod load;
mod render;
mod write;

pub use gate::{
    EXIT_TOOL_ERROR, GateInput, GateOutput, decision_exit_code, resolve_paths, run_gate,
};
pub use load::{LoadError, load_report, try_load_report};
pub use render::{
    console_line, read_decision_file, render_annotation, render_markdown, to_renderable,
};
pub use write::{serialize_decision, write_decision, write_record};
