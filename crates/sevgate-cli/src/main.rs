//! CLI entry point for sevgate.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, I/O, and exit
//! codes. All business logic lives in the `sevgate-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use sevgate_app::{
    EXIT_TOOL_ERROR, GateInput, console_line, decision_exit_code, read_decision_file,
    render_annotation, render_markdown, resolve_paths, run_gate,
};
use sevgate_settings::Overrides;
use sevgate_types::ids;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sevgate",
    version,
    about = "Severity-threshold security gate for CI pipelines"
)]
struct Cli {
    /// Path to sevgate config TOML (missing file means defaults).
    ///
    /// Relative paths inside it resolve against the file's directory.
    #[arg(long, global = true, default_value = ids::DEFAULT_CONFIG_PATH)]
    config: Utf8PathBuf,

    /// Scan report to read (default: scan_result.json).
    #[arg(long, global = true, env = "SEVGATE_INPUT")]
    input: Option<Utf8PathBuf>,

    /// Where the decision is written (default: gate_decision.json).
    #[arg(long, global = true, env = "SEVGATE_OUTPUT")]
    output: Option<Utf8PathBuf>,

    /// Defaults to `check`.
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the scan report, write the decision, and exit with the gate status.
    Check,

    /// Render markdown from an existing decision file.
    Md {
        /// Path to the decision file (default: the resolved output path).
        #[arg(long)]
        decision: Option<Utf8PathBuf>,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,
    },

    /// Print a GitHub Actions annotation for an existing decision file.
    Annotations {
        /// Path to the decision file (default: the resolved output path).
        #[arg(long)]
        decision: Option<Utf8PathBuf>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("sevgate error: {err:#}");
            EXIT_TOOL_ERROR
        }
    };

    std::process::exit(code);
}

/// Logs go to stderr so stdout carries only the decision line (or rendered output).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("SEVGATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config_text = read_config(&cli.config)?;
    let config = ConfigSource {
        text: &config_text,
        dir: cli.config.parent().unwrap_or(Utf8Path::new("")),
    };
    let overrides = Overrides {
        input_path: cli.input,
        output_path: cli.output,
    };

    match cli.cmd.unwrap_or(Commands::Check) {
        Commands::Check => cmd_check(config, overrides),
        Commands::Md {
            decision,
            markdown_out,
        } => cmd_md(config, overrides.with_decision(decision), markdown_out),
        Commands::Annotations { decision } => {
            cmd_annotations(config, overrides.with_decision(decision))
        }
    }
}

/// Config file contents plus the directory its relative paths are anchored at.
#[derive(Clone, Copy)]
struct ConfigSource<'a> {
    text: &'a str,
    dir: &'a Utf8Path,
}

/// Missing config is allowed (defaults apply); an unreadable one is not.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn cmd_check(config: ConfigSource<'_>, overrides: Overrides) -> anyhow::Result<i32> {
    let output = run_gate(GateInput {
        config_text: config.text,
        config_dir: config.dir,
        overrides,
    })?;

    println!("{}", console_line(output.outcome.decision));
    Ok(decision_exit_code(output.outcome.decision))
}

fn cmd_md(
    config: ConfigSource<'_>,
    overrides: Overrides,
    markdown_out: Option<Utf8PathBuf>,
) -> anyhow::Result<i32> {
    let path = resolve_paths(config.text, config.dir, overrides)?.output_path;
    let record = read_decision_file(&path)?;
    let md = render_markdown(&record);

    if let Some(out_path) = markdown_out {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(0)
}

fn cmd_annotations(config: ConfigSource<'_>, overrides: Overrides) -> anyhow::Result<i32> {
    let path = resolve_paths(config.text, config.dir, overrides)?.output_path;
    let record = read_decision_file(&path)?;
    println!("{}", render_annotation(&record));
    Ok(0)
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
