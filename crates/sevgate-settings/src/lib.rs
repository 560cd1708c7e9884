//! Config parsing and path resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.
//! Gate thresholds are not configurable; only where the gate reads and writes.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::SevgateConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `sevgate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SevgateConfigV1> {
    let cfg: SevgateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective paths (overrides > config > defaults).
pub fn resolve_config(
    cfg: SevgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
