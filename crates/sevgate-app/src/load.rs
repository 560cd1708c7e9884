//! The loader: read the scanner's summary, tolerating every failure mode.

use camino::{Utf8Path, Utf8PathBuf};
use sevgate_domain::ScanReport;

/// Why a scan report could not be used. Callers of [`load_report`] never see this; it exists
/// so the fallback is explicit and loggable.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("scan report not found: {path}")]
    Missing { path: Utf8PathBuf },

    #[error("read scan report: {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse scan report: {path}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("scan report is not a JSON object: {path} (found {found})")]
    NotAnObject { path: Utf8PathBuf, found: &'static str },
}

/// Read and parse a scan report, reporting exactly why it was unusable.
pub fn try_load_report(path: &Utf8Path) -> Result<ScanReport, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::Missing {
                path: path.to_owned(),
            }
        } else {
            LoadError::Read {
                path: path.to_owned(),
                source,
            }
        }
    })?;

    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
            path: path.to_owned(),
            source,
        })?;

    if !value.is_object() {
        return Err(LoadError::NotAnObject {
            path: path.to_owned(),
            found: json_kind(&value),
        });
    }

    Ok(ScanReport::from_value(value))
}

/// Read a scan report; any failure yields an empty report. Never fails.
pub fn load_report(path: &Utf8Path) -> ScanReport {
    match try_load_report(path) {
        Ok(report) => {
            tracing::debug!(%path, empty = report.is_empty(), "loaded scan report");
            report
        }
        Err(err @ LoadError::Missing { .. }) => {
            tracing::debug!(error = %err, "no scan report; treating as empty");
            ScanReport::empty()
        }
        Err(err) => {
            let cause = std::error::Error::source(&err).map(ToString::to_string);
            tracing::warn!(error = %err, ?cause, "unusable scan report; treating as empty");
            ScanReport::empty()
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
