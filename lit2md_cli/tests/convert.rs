mod common;

use lit2md_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use rstest::rstest;
use similar_asserts::assert_eq;

const COUNTER_VHD: &str = concat!(
	"--] # Counter\n",
	"--] A free running counter.\n",
	"\n",
	"library ieee;\n",
	"use ieee.numeric_std.all;\n",
	"\n",
	"--] The entity only has a clock.\n",
	"entity counter is\n",
	"  port (clk : in bit);\n",
	"end entity;\n",
);

const COUNTER_MD: &str = concat!(
	"# Counter\n",
	"A free running counter.\n",
	"\n",
	"```vhdl\n",
	"library ieee;\n",
	"use ieee.numeric_std.all;\n",
	"\n",
	"```\n",
	"The entity only has a clock.\n",
	"\n",
	"```vhdl\n",
	"entity counter is\n",
	"  port (clk : in bit);\n",
	"end entity;\n",
	"```\n",
);

#[test]
fn converts_vhdl_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("counter.vhd");
	let output = tmp.path().join("counter.md");
	std::fs::write(&input, COUNTER_VHD)?;

	common::lit2md_cmd()
		.arg("--input")
		.arg(&input)
		.arg("--output")
		.arg(&output)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("");

	assert_eq!(std::fs::read_to_string(&output)?, COUNTER_MD);

	Ok(())
}

#[test]
fn overwrites_existing_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("counter.vhd");
	let output = tmp.path().join("counter.md");
	std::fs::write(&input, "null;\n")?;
	std::fs::write(&output, "stale content that is much longer than the new output\n")?;

	common::lit2md_cmd()
		.arg("-i")
		.arg(&input)
		.arg("-o")
		.arg(&output)
		.arg("-p")
		.arg(tmp.path())
		.assert()
		.success();

	assert_eq!(std::fs::read_to_string(&output)?, "```vhdl\nnull;\n```\n");

	Ok(())
}

#[test]
fn reads_stdin_and_writes_stdout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::lit2md_cmd()
		.args(["--input", "-", "--output", "-", "--lang", "vhd", "--path"])
		.arg(tmp.path())
		.write_stdin(COUNTER_VHD)
		.assert()
		.success()
		.stdout(COUNTER_MD);

	Ok(())
}

#[test]
fn empty_input_gives_empty_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::lit2md_cmd()
		.args(["-i", "-", "-o", "-", "-l", "go", "-p"])
		.arg(tmp.path())
		.write_stdin("")
		.assert()
		.success()
		.stdout("");

	Ok(())
}

#[rstest]
#[case::go("main.go", "//] Entry point.\nfunc main() {}\n", "Entry point.\n\n```go\nfunc main() {}\n```\n")]
#[case::python("tool.py", "#] Docs\nprint(1)\n", "Docs\n\n```python\nprint(1)\n```\n")]
#[case::rust("lib.rs", "fn a() {}\n//] After\n", "```rust\nfn a() {}\n```\nAfter\n")]
#[case::lua("init.lua", "--]Setup\nlocal x = 1\n", "Setup\n\n```lua\nlocal x = 1\n```\n")]
#[case::uppercase_extension("TOP.VHD", "--] Top\n", "Top\n")]
fn picks_language_from_extension(
	#[case] file_name: &str,
	#[case] source: &str,
	#[case] expected: &str,
) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join(file_name);
	let output = tmp.path().join("out.md");
	std::fs::write(&input, source)?;

	common::lit2md_cmd()
		.arg("--input")
		.arg(&input)
		.arg("--output")
		.arg(&output)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert_eq!(std::fs::read_to_string(&output)?, expected);

	Ok(())
}

#[test]
fn flags_override_language() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::lit2md_cmd()
		.args([
			"-i",
			"-",
			"-o",
			"-",
			"--comment",
			";;",
			"--fence",
			"",
			"--delimiter",
			"!",
			"-p",
		])
		.arg(tmp.path())
		.write_stdin(";;! Prose\n;;] not prose\n")
		.assert()
		.success()
		.stdout("Prose\n\n```\n;;] not prose\n```\n");

	Ok(())
}

#[test]
fn config_file_overrides_builtin_table() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("lit2md.toml"),
		"delimiter = \"|\"\n\n[languages.tpl]\ncomment = \"#\"\nfence = \"jinja\"\n\n[languages.\
		 vhd]\nfence = \"vhdl2008\"\n",
	)?;
	let template = tmp.path().join("page.tpl");
	let vhdl = tmp.path().join("top.vhd");
	std::fs::write(&template, "#| Template\n{{ name }}\n")?;
	std::fs::write(&vhdl, "--| Top\nnull;\n")?;

	common::lit2md_cmd()
		.arg("-i")
		.arg(&template)
		.args(["-o", "-", "-p"])
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("Template\n\n```jinja\n{{ name }}\n```\n");

	common::lit2md_cmd()
		.arg("-i")
		.arg(&vhdl)
		.args(["-o", "-", "-p"])
		.arg(tmp.path())
		.assert()
		.success()
		.stdout("Top\n\n```vhdl2008\nnull;\n```\n");

	Ok(())
}

#[test]
fn invalid_config_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join(".lit2md.toml"), "delimiter = [")?;

	common::lit2md_cmd()
		.args(["-i", "-", "-o", "-", "-l", "vhd", "-p"])
		.arg(tmp.path())
		.write_stdin("null;\n")
		.assert()
		.code(1)
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}

#[test]
fn missing_input_fails_without_touching_output() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let output = tmp.path().join("out.md");
	std::fs::write(&output, "keep me\n")?;

	common::lit2md_cmd()
		.arg("--input")
		.arg(tmp.path().join("missing.vhd"))
		.arg("--output")
		.arg(&output)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("error while opening"))
		.stderr(predicates::str::contains("missing.vhd"));

	assert_eq!(std::fs::read_to_string(&output)?, "keep me\n");

	Ok(())
}

#[rstest]
#[case::same_spelling(&["a.vhd"], &["a.vhd"])]
#[case::dot_segment(&["a.vhd"], &[".", "a.vhd"])]
#[case::parent_segment(&["src", "a.vhd"], &["src", "..", "src", "a.vhd"])]
fn output_matching_input_is_rejected(
	#[case] input_parts: &[&str],
	#[case] output_parts: &[&str],
) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("src"))?;
	let input = input_parts
		.iter()
		.fold(tmp.path().to_path_buf(), |path, part| path.join(part));
	let output = output_parts
		.iter()
		.fold(tmp.path().to_path_buf(), |path, part| path.join(part));
	std::fs::write(&input, "--] Doc\nnull;\n")?;

	common::lit2md_cmd()
		.arg("-i")
		.arg(&input)
		.arg("-o")
		.arg(&output)
		.arg("-p")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("input and output are the same file"));

	assert_eq!(std::fs::read_to_string(&input)?, "--] Doc\nnull;\n");

	Ok(())
}

#[test]
fn unwritable_output_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("top.vhd");
	std::fs::write(&input, "null;\n")?;

	common::lit2md_cmd()
		.arg("--input")
		.arg(&input)
		.arg("--output")
		.arg(tmp.path().join("no/such/dir/out.md"))
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("error while creating"));

	Ok(())
}

#[test]
fn unknown_extension_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("notes.xyz");
	let output = tmp.path().join("notes.md");
	std::fs::write(&input, "text\n")?;

	common::lit2md_cmd()
		.arg("--input")
		.arg(&input)
		.arg("--output")
		.arg(&output)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(predicates::str::contains("no comment style known for extension"))
		.stderr(predicates::str::contains("xyz"));

	assert!(!output.exists());

	Ok(())
}

#[test]
fn stdin_requires_language() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::lit2md_cmd()
		.args(["-i", "-", "-o", "-", "-p"])
		.arg(tmp.path())
		.write_stdin("null;\n")
		.assert()
		.code(1)
		.stderr(predicates::str::contains("no comment style known"));

	Ok(())
}

#[rstest]
#[case::missing_input(&["--output", "-"], "--input")]
#[case::missing_output(&["--input", "-"], "--output")]
fn required_flags(#[case] args: &[&str], #[case] missing: &str) {
	common::lit2md_cmd()
		.args(args)
		.assert()
		.failure()
		.stderr(predicates::str::contains("required").and(predicates::str::contains(missing)));
}

#[test]
fn verbose_reports_summary() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("counter.vhd");
	let output = tmp.path().join("counter.md");
	std::fs::write(&input, COUNTER_VHD)?;

	common::lit2md_cmd()
		.arg("--input")
		.arg(&input)
		.arg("--output")
		.arg(&output)
		.arg("--path")
		.arg(tmp.path())
		.arg("--verbose")
		.assert()
		.success()
		.stderr(predicates::str::contains("Converted"))
		.stderr(predicates::str::contains("code blocks    2"))
		.stderr(predicates::str::contains("conversion finished"));

	Ok(())
}

#[test]
fn log_filter_comes_from_environment() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::lit2md_cmd()
		.env("LIT2MD_LOG", "trace")
		.args(["-i", "-", "-o", "-", "-l", "vhd", "-p"])
		.arg(tmp.path())
		.write_stdin("--] doc\nnull;\n")
		.assert()
		.success()
		.stdout("doc\n\n```vhdl\nnull;\n```\n")
		.stderr(predicates::str::contains("state change"));

	Ok(())
}
