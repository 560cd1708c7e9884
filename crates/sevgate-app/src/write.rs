//! The decision writer. Failures here are fatal and propagate to the caller.

use anyhow::Context;
use camino::Utf8Path;
use sevgate_types::{Decision, GateDecisionRecord, SeverityCounts};
use time::OffsetDateTime;

/// Stamp the decision with the current UTC time and persist it, overwriting `destination`.
pub fn write_decision(
    decision: Decision,
    counts: SeverityCounts,
    destination: &Utf8Path,
) -> anyhow::Result<GateDecisionRecord> {
    let record = GateDecisionRecord::new(decision, counts, OffsetDateTime::now_utc());
    write_record(&record, destination)?;
    Ok(record)
}

pub fn write_record(record: &GateDecisionRecord, destination: &Utf8Path) -> anyhow::Result<()> {
    if let Some(parent) = destination.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory: {}", parent))?;
    }

    let data = serialize_decision(record)?;
    std::fs::write(destination, data)
        .with_context(|| format!("write decision: {}", destination))?;

    tracing::debug!(path = %destination, decision = %record.decision, "wrote gate decision");
    Ok(())
}

/// Pretty JSON (two-space indent) with a trailing newline.
pub fn serialize_decision(record: &GateDecisionRecord) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(record).context("serialize decision")?;
    data.push(b'\n');
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use time::macros::datetime;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
        (tmp, root)
    }

    fn read_json(path: &Utf8Path) -> serde_json::Value {
        let text = std::fs::read_to_string(path).expect("read decision");
        serde_json::from_str(&text).expect("parse decision")
    }

    #[test]
    fn writes_contract_shape() {
        let (_tmp, root) = temp_root();
        let path = root.join("gate_decision.json");

        let record = write_decision(Decision::Block, SeverityCounts::new(1, 0, 2), &path)
            .expect("write decision");

        let value = read_json(&path);
        assert_eq!(value["decision"], "BLOCK");
        assert_eq!(value["counts"]["critical"], 1);
        assert_eq!(value["counts"]["high"], 0);
        assert_eq!(value["counts"]["medium"], 2);

        let stamp = value["generated_at_utc"].as_str().expect("timestamp string");
        assert!(stamp.ends_with('Z'), "timestamp must end in Z: {stamp}");
        assert!(stamp.contains('T'));
        assert_eq!(record.decision, Decision::Block);
    }

    #[test]
    fn overwrites_existing_content() {
        let (_tmp, root) = temp_root();
        let path = root.join("gate_decision.json");
        std::fs::write(&path, "x".repeat(4096)).expect("seed file");

        write_decision(Decision::Allow, SeverityCounts::default(), &path).expect("write");

        let value = read_json(&path);
        assert_eq!(value["decision"], "ALLOW");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let (_tmp, root) = temp_root();
        let path = root.join("artifacts/sevgate/gate_decision.json");

        write_decision(Decision::Warn, SeverityCounts::new(0, 1, 0), &path).expect("write");
        assert!(path.exists());
    }

    #[test]
    fn write_failure_propagates() {
        let (_tmp, root) = temp_root();
        let blocker = root.join("not-a-dir");
        std::fs::write(&blocker, "file").expect("seed file");

        let err = write_decision(
            Decision::Allow,
            SeverityCounts::default(),
            &blocker.join("gate_decision.json"),
        )
        .expect_err("writing beneath a file must fail");
        assert!(format!("{err:#}").contains("not-a-dir"));
    }

    #[test]
    fn serialization_is_pretty_with_trailing_newline() {
        let record = GateDecisionRecord::new(
            Decision::Warn,
            SeverityCounts::new(0, 0, 5),
            datetime!(2025-06-01 08:00:00 UTC),
        );
        let text =
            String::from_utf8(serialize_decision(&record).expect("serialize")).expect("utf8");

        assert_eq!(
            text,
            "{\n  \"decision\": \"WARN\",\n  \"counts\": {\n    \"critical\": 0,\n    \"high\": 0,\n    \"medium\": 5\n  },\n  \"generated_at_utc\": \"2025-06-01T08:00:00Z\"\n}\n"
        );
    }
}
