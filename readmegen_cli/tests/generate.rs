mod common;

use predicates::prelude::*;
use readmegen_core::AnyEmptyResult;
use readmegen_core::ProfileConfig;
use readmegen_core::WORKFLOW_FILE_PATH;
use readmegen_core::store::ProfileStore;
use readmegen_core::store::SNAPSHOT_DIR;
use readmegen_core::store::SNAPSHOT_FILE_NAME;
use readmegen_core::taxonomy::find_skill;

fn save_profile(root: &std::path::Path, profile: &ProfileConfig) -> AnyEmptyResult {
	ProfileStore::new(root).save(profile)?;
	Ok(())
}

fn blogger() -> ProfileConfig {
	let mut profile = ProfileConfig::default();
	profile.user_name = "Ada".to_string();
	profile.social.github = "ada".to_string();
	profile.blog.show_rss_posts = true;
	profile.blog.rss_url = "https://ada.dev/feed.xml".to_string();
	for name in ["rust", "go", "python"] {
		if let Some((category, entry)) = find_skill(name) {
			profile.toggle_skill(entry, category);
		}
	}
	profile
}

#[test]
fn generate_writes_readme() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let mut profile = ProfileConfig::default();
	profile.user_name = "Ada".to_string();
	save_profile(tmp.path(), &profile)?;

	common::readmegen_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("Wrote README.md"));

	let readme = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert!(readme.contains("I'm+Ada"));
	assert!(readme.contains("Thanks for visiting"));
	assert!(!tmp.path().join(WORKFLOW_FILE_PATH).exists());

	Ok(())
}

#[test]
fn generate_without_snapshot_uses_defaults() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::readmegen_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicate::str::contains("no saved profile found"));

	let readme = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert!(readme.contains("text=GitHub%20Profile"));

	Ok(())
}

#[test]
fn generate_writes_workflow_when_blog_is_enabled() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	save_profile(tmp.path(), &blogger())?;

	common::readmegen_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicate::str::contains(WORKFLOW_FILE_PATH));

	let readme = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert!(readme.contains("<!-- BLOG-POST-LIST:START -->"));

	let workflow = std::fs::read_to_string(tmp.path().join(WORKFLOW_FILE_PATH))?;
	assert!(workflow.contains("feed_list: \"https://ada.dev/feed.xml\""));

	Ok(())
}

#[test]
fn seeded_generate_is_reproducible() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	save_profile(tmp.path(), &blogger())?;
	let readme_path = tmp.path().join("README.md");

	let mut outputs = Vec::new();
	for _ in 0..2 {
		common::readmegen_cmd()
			.arg("generate")
			.arg("--seed")
			.arg("7")
			.arg("--path")
			.arg(tmp.path())
			.assert()
			.success();
		outputs.push(std::fs::read_to_string(&readme_path)?);
	}

	similar_asserts::assert_eq!(outputs[0], outputs[1]);

	Ok(())
}

#[test]
fn dry_run_writes_nothing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	save_profile(tmp.path(), &blogger())?;

	common::readmegen_cmd()
		.arg("generate")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("Dry run: would write README.md"))
		.stdout(predicate::str::contains("gautamkrishnar/blog-post-workflow@v1"))
		.stdout(predicate::str::contains("skillicons.dev/icons?i=rust,go,python"));

	assert!(!tmp.path().join("README.md").exists());
	assert!(!tmp.path().join(".github").exists());

	Ok(())
}

#[test]
fn generate_honors_config_output_paths() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	save_profile(tmp.path(), &blogger())?;
	std::fs::write(
		tmp.path().join("readmegen.toml"),
		"[output]\nreadme = \"profile/README.md\"\nworkflow = \"ci/blog.yml\"\n",
	)?;

	common::readmegen_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert!(tmp.path().join("profile/README.md").exists());
	assert!(tmp.path().join("ci/blog.yml").exists());
	assert!(!tmp.path().join("README.md").exists());

	Ok(())
}

#[test]
fn invalid_config_is_reported() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("readmegen.toml"), "[render]\nseed = \"x\"\n")?;

	common::readmegen_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicate::str::contains("failed to parse config file"));

	Ok(())
}

#[test]
fn incompatible_snapshot_falls_back_to_defaults() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let dir = tmp.path().join(SNAPSHOT_DIR);
	std::fs::create_dir_all(&dir)?;
	std::fs::write(
		dir.join(SNAPSHOT_FILE_NAME),
		r#"{ "schemaVersion": 1, "profile": { "userName": "Ada" } }"#,
	)?;

	common::readmegen_cmd()
		.arg("generate")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicate::str::contains("incompatible"));

	let readme = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert!(!readme.contains("Ada"));

	Ok(())
}

#[test]
fn workflow_prints_yaml() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let mut profile = blogger();
	profile.social.devto = "ada".to_string();
	profile.blog.show_devto_posts = true;
	save_profile(tmp.path(), &profile)?;

	common::readmegen_cmd()
		.arg("workflow")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"feed_list: \"https://dev.to/feed/ada,https://ada.dev/feed.xml\"",
		));

	Ok(())
}

#[test]
fn preview_prints_html() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let mut profile = blogger();
	profile.custom.show_goals = true;
	profile.custom.goals = "Ship it".to_string();
	save_profile(tmp.path(), &profile)?;

	common::readmegen_cmd()
		.arg("preview")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("<li>Ship it</li>"))
		.stdout(predicate::str::contains("<div align=\"center\">"));

	Ok(())
}
