use assert_cmd::Command;

pub fn readmegen_cmd() -> Command {
	let mut cmd = Command::cargo_bin("readmegen").unwrap_or_else(|e| panic!("{e}"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}
