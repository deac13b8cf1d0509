mod common;

use readmegen_core::AnyEmptyResult;
use readmegen_core::ProfileConfig;
use readmegen_core::store::ProfileStore;

#[test]
fn can_init() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::readmegen_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created profile snapshot"))
		.stdout(predicates::str::contains("Created readmegen.toml"))
		.stdout(predicates::str::contains("Next steps"));

	let store = ProfileStore::new(tmp.path());
	assert!(store.exists());
	assert_eq!(store.load()?.profile, ProfileConfig::default());

	let config = std::fs::read_to_string(tmp.path().join("readmegen.toml"))?;
	assert!(config.contains("[output]"));
	assert!(config.contains("[render]"));

	Ok(())
}

#[test]
fn init_does_not_overwrite() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let store = ProfileStore::new(tmp.path());
	let mut profile = ProfileConfig::default();
	profile.user_name = "Ada".to_string();
	store.save(&profile)?;

	let config_path = tmp.path().join(".readmegen.toml");
	std::fs::write(&config_path, "[render]\nseed = 1\n")?;

	common::readmegen_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already exists"));

	assert_eq!(store.load()?.profile.user_name, "Ada");
	assert_eq!(std::fs::read_to_string(&config_path)?, "[render]\nseed = 1\n");
	assert!(!tmp.path().join("readmegen.toml").exists());

	Ok(())
}
