//! Rendering utilities for CI surfaces (console, Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod console;
mod gha;
mod markdown;
mod model;

pub use console::render_console_line;
pub use gha::render_github_annotation;
pub use markdown::render_markdown;
pub use model::{RenderableCounts, RenderableDecision, RenderableReport};
