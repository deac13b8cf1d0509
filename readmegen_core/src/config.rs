use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ReadmeError;
use crate::ReadmeResult;
use crate::workflow::WORKFLOW_FILE_PATH;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"readmegen.toml",
	".readmegen.toml",
	".config/readmegen.toml",
];

/// Default README location, relative to the project root.
pub const DEFAULT_README_PATH: &str = "README.md";

/// Configuration loaded from a `readmegen.toml` file.
///
/// ```toml
/// [output]
/// readme = "README.md"
/// workflow = ".github/workflows/blog-post-workflow.yml"
///
/// [render]
/// seed = 42
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadmegenConfig {
	/// Where generated files are written.
	#[serde(default)]
	pub output: OutputConfig,
	/// Rendering options.
	#[serde(default)]
	pub render: RenderConfig,
}

/// Output paths, relative to the project root.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
	#[serde(default = "default_readme_path")]
	pub readme: PathBuf,
	#[serde(default = "default_workflow_path")]
	pub workflow: PathBuf,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			readme: default_readme_path(),
			workflow: default_workflow_path(),
		}
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
	/// Seed for skill badge colors. When absent, every render draws fresh
	/// colors.
	#[serde(default)]
	pub seed: Option<u64>,
}

fn default_readme_path() -> PathBuf {
	PathBuf::from(DEFAULT_README_PATH)
}

fn default_workflow_path() -> PathBuf {
	PathBuf::from(WORKFLOW_FILE_PATH)
}

impl ReadmegenConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> ReadmeResult<Option<ReadmegenConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: ReadmegenConfig =
			toml::from_str(&content).map_err(|e| ReadmeError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Like [`ReadmegenConfig::load`], falling back to the defaults when no
	/// config file exists.
	pub fn load_or_default(root: &Path) -> ReadmeResult<ReadmegenConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}
}
