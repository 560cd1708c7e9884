use crate::model::SevgateConfigV1;
use camino::{Utf8Path, Utf8PathBuf};
use sevgate_types::{SCHEMA_CONFIG_V1, ids};

/// Values supplied on the command line (or via env through clap).
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub input_path: Option<Utf8PathBuf>,
    pub output_path: Option<Utf8PathBuf>,
}

impl Overrides {
    /// An explicit decision-file path wins over the output override.
    pub fn with_decision(mut self, decision: Option<Utf8PathBuf>) -> Self {
        if decision.is_some() {
            self.output_path = decision;
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub input_path: Utf8PathBuf,
    pub output_path: Utf8PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            input_path: Utf8PathBuf::from(ids::DEFAULT_INPUT_PATH),
            output_path: Utf8PathBuf::from(ids::DEFAULT_OUTPUT_PATH),
        }
    }
}

impl SevgateConfigV1 {
    /// Anchor relative paths at `config_dir`, the directory holding the config file.
    ///
    /// An empty `config_dir` (a bare file name) leaves paths relative to the working directory.
    pub fn rebased(mut self, config_dir: &Utf8Path) -> Self {
        if config_dir.as_str().is_empty() {
            return self;
        }
        self.input_path = self.input_path.map(|p| rebase_path(config_dir, p));
        self.output_path = self.output_path.map(|p| rebase_path(config_dir, p));
        self
    }
}

fn rebase_path(config_dir: &Utf8Path, path: String) -> String {
    // Blank values stay blank so `pick_path` still rejects them.
    if path.trim().is_empty() || Utf8Path::new(&path).is_absolute() {
        return path;
    }
    config_dir.join(&path).into_string()
}

pub fn resolve_config(
    cfg: SevgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unknown config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let defaults = ResolvedConfig::default();

    let input_path = pick_path(
        "input_path",
        overrides.input_path,
        cfg.input_path,
        defaults.input_path,
    )?;
    let output_path = pick_path(
        "output_path",
        overrides.output_path,
        cfg.output_path,
        defaults.output_path,
    )?;

    tracing::debug!(%input_path, %output_path, "resolved gate paths");

    Ok(ResolvedConfig {
        input_path,
        output_path,
    })
}

fn pick_path(
    key: &str,
    overridden: Option<Utf8PathBuf>,
    configured: Option<String>,
    default: Utf8PathBuf,
) -> anyhow::Result<Utf8PathBuf> {
    let path = overridden
        .or(configured.map(Utf8PathBuf::from))
        .unwrap_or(default);

    if path.as_str().trim().is_empty() {
        anyhow::bail!("{key} must not be empty");
    }

    Ok(path)
}
