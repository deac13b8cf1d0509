//! Shareable JSON templates.
//!
//! An exported template is the full profile with each skill reduced to its
//! identifier and category. Importing resolves the remaining skill fields
//! from the [taxonomy](crate::taxonomy) and merges the payload onto the
//! default profile.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::ReadmeError;
use crate::ReadmeResult;
use crate::profile::ProfileConfig;
use crate::profile::Skill;
use crate::taxonomy::find_skill;

/// Default file name used when exporting.
pub const TEMPLATE_FILE_NAME: &str = "readme-template.json";

#[derive(Serialize)]
struct ExportedSkill<'a> {
	name: &'a str,
	category: &'a str,
}

/// Serialize the profile into the export template format.
pub fn export_template(profile: &ProfileConfig) -> ReadmeResult<String> {
	let mut value =
		serde_json::to_value(profile).map_err(|e| ReadmeError::Serialize(e.to_string()))?;

	let skills: Vec<ExportedSkill<'_>> = profile
		.skills
		.iter()
		.map(|skill| {
			ExportedSkill {
				name: &skill.name,
				category: &skill.category,
			}
		})
		.collect();
	value["skills"] =
		serde_json::to_value(skills).map_err(|e| ReadmeError::Serialize(e.to_string()))?;

	serde_json::to_string_pretty(&value).map_err(|e| ReadmeError::Serialize(e.to_string()))
}

/// Parse a template and merge it onto the default profile.
///
/// Fails with [`ReadmeError::TemplateParse`] when the payload is not a JSON
/// object or a field has the wrong shape. Unknown skills are kept as
/// imported.
pub fn import_template(content: &str) -> ReadmeResult<ProfileConfig> {
	let value: serde_json::Value =
		serde_json::from_str(content).map_err(|e| ReadmeError::TemplateParse(e.to_string()))?;

	if !value.is_object() {
		return Err(ReadmeError::TemplateParse(
			"expected a JSON object at the top level".to_string(),
		));
	}

	let mut profile: ProfileConfig =
		serde_json::from_value(value).map_err(|e| ReadmeError::TemplateParse(e.to_string()))?;
	profile.skills = resolve_skills(profile.skills);

	Ok(profile)
}

/// Restore icon and display name for taxonomy skills and drop duplicate
/// identifiers, keeping the first occurrence.
pub fn resolve_skills(skills: Vec<Skill>) -> Vec<Skill> {
	let mut seen = HashSet::new();
	let mut resolved = Vec::with_capacity(skills.len());

	for skill in skills {
		if !seen.insert(skill.name.clone()) {
			debug!(skill = %skill.name, "dropping duplicate skill");
			continue;
		}

		let Some((category, entry)) = find_skill(&skill.name) else {
			debug!(skill = %skill.name, "skill is not in the taxonomy, keeping it as imported");
			resolved.push(skill);
			continue;
		};

		let mut restored = Skill::from_entry(entry, category);
		if !skill.category.is_empty() {
			restored.category = skill.category;
		}
		resolved.push(restored);
	}

	resolved
}
