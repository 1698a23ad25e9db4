use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use lit2md_core::OptionOverrides;

/// Path value that stands for stdin (as `--input`) or stdout (as `--output`).
pub const STDIO_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about = "Convert literate comments in source files into Markdown.",
	long_about = "lit2md turns a source file into a Markdown document. Lines that start with \
	              the language's comment marker followed by the delimiter (for example `--]` \
	              in VHDL or `//]` in Go) become prose. Everything else is placed in fenced \
	              code blocks, in the order it appears.\n\nThe comment style and fence label \
	              come from the input's file extension, a `lit2md.toml` file, or the \
	              `--comment` and `--fence` flags."
)]
pub struct Lit2mdCli {
	/// Source file to convert. Use `-` to read from stdin.
	#[arg(long, short)]
	pub input: PathBuf,

	/// Markdown file to write. Use `-` to write to stdout. An existing file
	/// is overwritten.
	#[arg(long, short)]
	pub output: PathBuf,

	/// File extension used to pick the comment style, instead of the input's
	/// own extension. Required when reading from stdin without `--comment`.
	#[arg(long, short)]
	pub lang: Option<String>,

	/// Comment marker that starts documentation lines, e.g. `--` or `//`.
	#[arg(long, short)]
	pub comment: Option<String>,

	/// Label placed on opening code fences. Pass an empty string for plain
	/// fences.
	#[arg(long, short)]
	pub fence: Option<String>,

	/// Marker that follows the comment start on documentation lines.
	/// Defaults to `]`.
	#[arg(long, short)]
	pub delimiter: Option<String>,

	/// Directory searched for `lit2md.toml`. Defaults to the current
	/// directory.
	#[arg(long, short)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl Lit2mdCli {
	pub fn reads_stdin(&self) -> bool {
		self.input.as_os_str() == STDIO_PATH
	}

	pub fn writes_stdout(&self) -> bool {
		self.output.as_os_str() == STDIO_PATH
	}

	/// The extension used for the language lookup: `--lang` if given,
	/// otherwise the input file's extension.
	pub fn extension(&self) -> Option<String> {
		if let Some(lang) = &self.lang {
			return Some(lang.clone());
		}

		if self.reads_stdin() {
			return None;
		}

		self.input
			.extension()
			.map(|extension| extension.to_string_lossy().into_owned())
	}

	pub fn overrides(&self) -> OptionOverrides {
		OptionOverrides {
			comment: self.comment.clone(),
			fence: self.fence.clone(),
			delimiter: self.delimiter.clone(),
		}
	}

	pub fn root(&self) -> PathBuf {
		self.path.clone().unwrap_or_else(|| {
			std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf())
		})
	}
}
