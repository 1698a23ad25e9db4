use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn lit2md_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("lit2md"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("LIT2MD_LOG");
	cmd
}
