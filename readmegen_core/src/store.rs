//! The saved profile snapshot.
//!
//! The snapshot lives at `.readmegen/profile.json` under the project root
//! and records the schema version it was written with:
//!
//! ```json
//! { "schemaVersion": 1, "profile": { "userName": "Ada" } }
//! ```
//!
//! Loading never fails because of the snapshot's shape. A snapshot that is
//! unreadable as JSON, was written by a different schema version, or is
//! missing one of the profile groups is replaced by the default profile and
//! reported through [`LoadStatus::Reset`]. The file itself is left alone
//! until the caller saves.

use std::path::Path;
use std::path::PathBuf;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use tracing::debug;
use tracing::warn;

use crate::ReadmeError;
use crate::ReadmeResult;
use crate::profile::ProfileConfig;
use crate::template::import_template;

pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;
pub const SNAPSHOT_DIR: &str = ".readmegen";
pub const SNAPSHOT_FILE_NAME: &str = "profile.json";

/// Profile groups a snapshot must contain as JSON objects.
const REQUIRED_GROUPS: [&str; 5] = ["social", "stats", "blog", "achievements", "custom"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
	schema_version: u32,
	profile: &'a ProfileConfig,
}

/// How a profile was obtained from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
	/// No snapshot exists yet; the default profile was returned.
	Missing,
	Loaded,
	/// The snapshot was incompatible and the default profile was returned.
	Reset { reason: String },
}

#[derive(Debug, Clone)]
pub struct LoadedProfile {
	pub profile: ProfileConfig,
	pub status: LoadStatus,
}

impl LoadedProfile {
	pub fn was_reset(&self) -> bool {
		matches!(self.status, LoadStatus::Reset { .. })
	}

	fn reset(reason: impl Into<String>) -> Self {
		let reason = reason.into();
		warn!(%reason, "discarding incompatible profile snapshot");
		Self {
			profile: ProfileConfig::default(),
			status: LoadStatus::Reset { reason },
		}
	}
}

/// Validate and deserialize snapshot contents.
pub fn parse_snapshot(content: &str) -> LoadedProfile {
	let value: serde_json::Value = match serde_json::from_str(content) {
		Ok(value) => value,
		Err(e) => return LoadedProfile::reset(format!("snapshot is not valid JSON: {e}")),
	};

	let version = value
		.get("schemaVersion")
		.and_then(serde_json::Value::as_u64);
	if version != Some(u64::from(SNAPSHOT_SCHEMA_VERSION)) {
		return LoadedProfile::reset(format!(
			"unsupported schema version {version:?}, expected {SNAPSHOT_SCHEMA_VERSION}"
		));
	}

	let Some(profile) = value.get("profile").filter(|profile| profile.is_object()) else {
		return LoadedProfile::reset("snapshot has no profile object");
	};

	if let Some(group) = REQUIRED_GROUPS
		.iter()
		.find(|group| !profile.get(**group).is_some_and(serde_json::Value::is_object))
	{
		return LoadedProfile::reset(format!("profile is missing the `{group}` group"));
	}

	match serde_json::from_value::<ProfileConfig>(profile.clone()) {
		Ok(profile) => {
			LoadedProfile {
				profile,
				status: LoadStatus::Loaded,
			}
		}
		Err(e) => LoadedProfile::reset(format!("profile has an invalid shape: {e}")),
	}
}

/// Reads and writes the profile snapshot of a project.
#[derive(Debug, Clone)]
pub struct ProfileStore {
	path: PathBuf,
}

impl ProfileStore {
	/// The store for the project rooted at `root`.
	pub fn new(root: &Path) -> Self {
		Self {
			path: root.join(SNAPSHOT_DIR).join(SNAPSHOT_FILE_NAME),
		}
	}

	/// A store backed by an explicit snapshot file.
	pub fn at(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn exists(&self) -> bool {
		self.path.is_file()
	}

	/// Load the snapshot. Only I/O failures other than a missing file are
	/// errors.
	pub fn load(&self) -> ReadmeResult<LoadedProfile> {
		let content = match std::fs::read_to_string(&self.path) {
			Ok(content) => content,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %self.path.display(), "no profile snapshot, using defaults");
				return Ok(LoadedProfile {
					profile: ProfileConfig::default(),
					status: LoadStatus::Missing,
				});
			}
			Err(e) => return Err(e.into()),
		};

		Ok(parse_snapshot(&content))
	}

	/// Write the snapshot atomically.
	pub fn save(&self, profile: &ProfileConfig) -> ReadmeResult<()> {
		let snapshot = SnapshotRef {
			schema_version: SNAPSHOT_SCHEMA_VERSION,
			profile,
		};
		let payload = serde_json::to_vec_pretty(&snapshot)
			.map_err(|e| ReadmeError::Serialize(e.to_string()))?;

		if let Some(dir) = self.path.parent() {
			std::fs::create_dir_all(dir)?;
		}

		let temp_path = self.path.with_extension(format!(
			"json.tmp-{}-{}",
			std::process::id(),
			std::time::SystemTime::now()
				.duration_since(UNIX_EPOCH)
				.map_or(0, |duration| duration.as_nanos())
		));

		std::fs::write(&temp_path, payload)?;
		if let Err(e) = std::fs::rename(&temp_path, &self.path) {
			let _ = std::fs::remove_file(&temp_path);
			return Err(e.into());
		}

		debug!(path = %self.path.display(), "saved profile snapshot");
		Ok(())
	}

	/// Restore and save the default profile.
	pub fn reset(&self) -> ReadmeResult<ProfileConfig> {
		let profile = ProfileConfig::default();
		self.save(&profile)?;
		Ok(profile)
	}

	/// Import a template and save it. The existing snapshot is untouched when
	/// the template is invalid.
	pub fn import(&self, content: &str) -> ReadmeResult<ProfileConfig> {
		let profile = import_template(content)?;
		self.save(&profile)?;
		Ok(profile)
	}
}
