use crate::coerce::to_int;
use serde_json::{Map, Value};

/// A loaded scan summary: severity label -> raw value.
///
/// Values are kept raw so coercion happens in one place. Anything that is not a JSON object
/// becomes an empty report, which evaluates to all-zero counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanReport {
    entries: Map<String, Value>,
}

impl ScanReport {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a report from any JSON value; non-objects yield an empty report.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(entries) => Self { entries },
            _ => Self::empty(),
        }
    }

    pub fn get(&self, label: &str) -> Option<&Value> {
        self.entries.get(label)
    }

    /// Coerced count for a severity label; absent labels count as 0.
    pub fn count(&self, label: &str) -> u64 {
        self.get(label).map(to_int).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
