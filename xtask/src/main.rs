//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use sevgate_test_util::{TIMESTAMP_PLACEHOLDER, is_utc_z_timestamp, normalize_nondeterministic};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            // Fallback: assume we're in xtask dir or use current dir
            std::env::current_dir().expect("Cannot determine current directory")
        });

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .expect("xtask has no parent")
            .to_path_buf()
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_decision_schema() -> schemars::Schema {
    schema_for!(sevgate_types::GateDecisionRecord)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(sevgate_settings::SevgateConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "sevgate.decision.v1.json",
            generate: generate_decision_schema,
        },
        SchemaSpec {
            filename: "sevgate.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that committed schemas match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        // Compare as JSON values: key order depends on serde_json features, not on the schema.
        let expected =
            serde_json::to_value((spec.generate)()).context("Failed to serialize schema")?;
        let actual = read_json(&path)?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture expectations against the decision schema");
    eprintln!("  conform-full      Run sevgate on every fixture and validate the real output");
}

fn compile_decision_schema() -> anyhow::Result<jsonschema::Validator> {
    let schema_value =
        serde_json::to_value(generate_decision_schema()).context("serialize decision schema")?;
    jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile decision schema: {}", e))
}

/// Fixture directories, sorted for stable output.
fn fixture_dirs() -> anyhow::Result<Vec<PathBuf>> {
    let dir = fixtures_dir();
    let mut dirs = Vec::new();
    for entry in fs::read_dir(&dir).with_context(|| format!("read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn fixture_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Check every `expected.decision.json`:
/// 1. it validates against the decision schema (placeholder swapped for a real timestamp)
/// 2. it uses the timestamp placeholder, so goldens never pin a wall-clock time
fn conform() -> anyhow::Result<()> {
    let compiled = compile_decision_schema()?;
    println!("✓ decision schema compiles");

    let mut errors = Vec::new();
    let mut count = 0;

    for dir in fixture_dirs()? {
        let name = fixture_name(&dir);
        let expected_path = dir.join("expected.decision.json");
        if !expected_path.exists() {
            errors.push(format!("{}: missing expected.decision.json", name));
            continue;
        }

        let mut value = read_json(&expected_path)?;

        if value.get("generated_at_utc").and_then(|v| v.as_str()) != Some(TIMESTAMP_PLACEHOLDER) {
            errors.push(format!(
                "{}: generated_at_utc must be {}",
                name, TIMESTAMP_PLACEHOLDER
            ));
        }

        if let Some(obj) = value.as_object_mut() {
            obj.insert(
                "generated_at_utc".to_string(),
                serde_json::Value::String("2025-01-01T00:00:00Z".to_string()),
            );
        }

        for err in compiled.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", name, err));
        }

        count += 1;
    }

    report_conformance(count, errors)
}

/// Run the built `sevgate` binary on every fixture and validate what it actually writes.
fn conform_full() -> anyhow::Result<()> {
    conform()?;

    let sevgate_bin = project_root()
        .join("target")
        .join("debug")
        .join(format!("sevgate{}", std::env::consts::EXE_SUFFIX));
    if !sevgate_bin.exists() {
        bail!(
            "sevgate binary not found at {}\n\nRun `cargo build -p sevgate-cli` first.",
            sevgate_bin.display()
        );
    }

    let compiled = compile_decision_schema()?;
    let mut errors = Vec::new();
    let mut count = 0;

    for dir in fixture_dirs()? {
        let name = fixture_name(&dir);
        let tmp = tempfile::tempdir().context("create temp dir")?;
        let scan = dir.join("scan_result.json");
        if scan.exists() {
            fs::copy(&scan, tmp.path().join("scan_result.json"))
                .with_context(|| format!("{}: copy scan report", name))?;
        }

        let output = std::process::Command::new(&sevgate_bin)
            .current_dir(tmp.path())
            .env_remove("SEVGATE_INPUT")
            .env_remove("SEVGATE_OUTPUT")
            .arg("check")
            .output()
            .with_context(|| format!("{}: run sevgate", name))?;

        let actual = read_json(&tmp.path().join("gate_decision.json"))?;

        for err in compiled.iter_errors(&actual) {
            errors.push(format!("{}: schema validation: {}", name, err));
        }

        match actual.get("generated_at_utc").and_then(|v| v.as_str()) {
            Some(stamp) if is_utc_z_timestamp(stamp) => {}
            other => errors.push(format!("{}: bad generated_at_utc: {:?}", name, other)),
        }

        let expected = read_json(&dir.join("expected.decision.json"))?;
        if normalize_nondeterministic(actual.clone()) != expected {
            errors.push(format!("{}: output does not match expected.decision.json", name));
        }

        let blocked = expected.get("decision").and_then(|v| v.as_str()) == Some("BLOCK");
        let expected_code = if blocked { 1 } else { 0 };
        if output.status.code() != Some(expected_code) {
            errors.push(format!(
                "{}: exit code {:?}, expected {}",
                name,
                output.status.code(),
                expected_code
            ));
        }

        count += 1;
    }

    report_conformance(count, errors)
}

fn report_conformance(count: usize, errors: Vec<String>) -> anyhow::Result<()> {
    if errors.is_empty() {
        println!("✓ {} fixtures conform", count);
        return Ok(());
    }

    eprintln!("Conformance errors:");
    for err in &errors {
        eprintln!("  - {}", err);
    }
    bail!("Conformance failed with {} errors", errors.len())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "conform-full" => conform_full(),
        "print-schema-ids" => {
            println!("{}", sevgate_types::SCHEMA_DECISION_V1);
            println!("{}", sevgate_types::SCHEMA_CONFIG_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
