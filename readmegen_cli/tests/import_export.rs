mod common;

use predicates::prelude::*;
use readmegen_core::AnyEmptyResult;
use readmegen_core::ProfileConfig;
use readmegen_core::store::ProfileStore;
use readmegen_core::template::TEMPLATE_FILE_NAME;

const TEMPLATE: &str = r#"{
  "userName": "Grace",
  "social": { "github": "grace" },
  "skills": [
    { "name": "python", "category": "Programming Languages" },
    { "name": "docker", "category": "DevOps" }
  ],
  "stats": { "showStats": true, "statsTheme": "dark" }
}"#;

#[test]
fn import_saves_the_template() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let template_path = tmp.path().join("shared.json");
	std::fs::write(&template_path, TEMPLATE)?;

	common::readmegen_cmd()
		.arg("import")
		.arg(&template_path)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("Imported template"))
		.stdout(predicate::str::contains("skills: 2"));

	let profile = ProfileStore::new(tmp.path()).load()?.profile;
	assert_eq!(profile.user_name, "Grace");
	assert_eq!(profile.skills[1].display_name, "Docker");

	Ok(())
}

#[test]
fn invalid_import_leaves_the_profile_untouched() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let store = ProfileStore::new(tmp.path());
	let mut profile = ProfileConfig::default();
	profile.user_name = "Ada".to_string();
	store.save(&profile)?;
	let before = std::fs::read_to_string(store.path())?;

	let template_path = tmp.path().join("broken.json");
	std::fs::write(&template_path, "[1, 2, 3]")?;

	common::readmegen_cmd()
		.arg("import")
		.arg(&template_path)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicate::str::contains("invalid template file format"));

	assert_eq!(std::fs::read_to_string(store.path())?, before);

	Ok(())
}

#[test]
fn missing_import_file_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::readmegen_cmd()
		.arg("import")
		.arg(tmp.path().join("nope.json"))
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2);

	assert!(!ProfileStore::new(tmp.path()).exists());

	Ok(())
}

#[test]
fn export_then_import_round_trips() -> AnyEmptyResult {
	let source = tempfile::tempdir()?;
	let template_path = source.path().join("shared.json");
	std::fs::write(&template_path, TEMPLATE)?;
	common::readmegen_cmd()
		.arg("import")
		.arg(&template_path)
		.arg("--path")
		.arg(source.path())
		.assert()
		.success();

	common::readmegen_cmd()
		.arg("export")
		.arg("--path")
		.arg(source.path())
		.assert()
		.success()
		.stdout(predicate::str::contains(TEMPLATE_FILE_NAME));

	let exported_path = source.path().join(TEMPLATE_FILE_NAME);
	let exported: serde_json::Value =
		serde_json::from_str(&std::fs::read_to_string(&exported_path)?)?;
	assert_eq!(
		exported["skills"][0],
		serde_json::json!({ "name": "python", "category": "Programming Languages" })
	);

	let target = tempfile::tempdir()?;
	common::readmegen_cmd()
		.arg("import")
		.arg(&exported_path)
		.arg("--path")
		.arg(target.path())
		.assert()
		.success();

	similar_asserts::assert_eq!(
		ProfileStore::new(target.path()).load()?.profile,
		ProfileStore::new(source.path()).load()?.profile
	);

	Ok(())
}

#[test]
fn export_to_custom_path() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::readmegen_cmd()
		.arg("export")
		.arg("--output")
		.arg("out/profile.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let exported = std::fs::read_to_string(tmp.path().join("out/profile.json"))?;
	assert!(exported.contains("\"userName\": \"\""));

	Ok(())
}

#[test]
fn reset_restores_defaults() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let store = ProfileStore::new(tmp.path());
	let mut profile = ProfileConfig::default();
	profile.user_name = "Ada".to_string();
	store.save(&profile)?;

	common::readmegen_cmd()
		.arg("reset")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicate::str::contains("Restored the default profile"));

	assert_eq!(store.load()?.profile, ProfileConfig::default());

	Ok(())
}
