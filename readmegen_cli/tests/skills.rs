mod common;

use predicates::prelude::*;
use readmegen_core::AnyEmptyResult;
use rstest::rstest;

#[test]
fn skills_lists_categories() {
	common::readmegen_cmd()
		.arg("skills")
		.assert()
		.success()
		.stdout(predicate::str::contains("Programming Languages"))
		.stdout(predicate::str::contains("Software & Tools"))
		.stdout(predicate::str::is_match(r"react-native\s+React Native").unwrap_or_else(|e| panic!("{e}")));
}

#[test]
fn skills_json_is_machine_readable() -> AnyEmptyResult {
	let output = common::readmegen_cmd()
		.arg("skills")
		.arg("--format")
		.arg("json")
		.output()?;
	assert!(output.status.success());

	let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(value["version"], 1);
	let categories = value["categories"].as_array().map_or(0, Vec::len);
	assert_eq!(categories, 9);
	assert_eq!(value["categories"][4]["category"], "AI/ML");

	Ok(())
}

#[rstest]
#[case::no_subcommand(&[], 1)]
#[case::unknown_format(&["skills", "--format", "yaml"], 2)]
fn bad_invocations_fail(#[case] args: &[&str], #[case] code: i32) {
	common::readmegen_cmd().args(args).assert().code(code);
}
