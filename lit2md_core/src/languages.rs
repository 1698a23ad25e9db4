use std::path::Path;

use crate::ConvertOptions;

/// Comment style and fence label for a family of file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
	/// Lowercase extensions without the leading dot.
	pub extensions: &'static [&'static str],
	/// Line comment marker.
	pub comment_start: &'static str,
	/// Info string for opening code fences.
	pub fence_label: &'static str,
}

/// Built-in languages, searched in order.
pub const LANGUAGES: &[Language] = &[
	Language {
		extensions: &["vhd", "vhdl"],
		comment_start: "--",
		fence_label: "vhdl",
	},
	Language {
		extensions: &["go"],
		comment_start: "//",
		fence_label: "go",
	},
	Language {
		extensions: &["rs"],
		comment_start: "//",
		fence_label: "rust",
	},
	Language {
		extensions: &["c", "h"],
		comment_start: "//",
		fence_label: "c",
	},
	Language {
		extensions: &["cc", "cpp", "cxx", "hh", "hpp", "hxx"],
		comment_start: "//",
		fence_label: "cpp",
	},
	Language {
		extensions: &["cs"],
		comment_start: "//",
		fence_label: "csharp",
	},
	Language {
		extensions: &["java"],
		comment_start: "//",
		fence_label: "java",
	},
	Language {
		extensions: &["kt", "kts"],
		comment_start: "//",
		fence_label: "kotlin",
	},
	Language {
		extensions: &["scala", "sc"],
		comment_start: "//",
		fence_label: "scala",
	},
	Language {
		extensions: &["swift"],
		comment_start: "//",
		fence_label: "swift",
	},
	Language {
		extensions: &["js", "mjs", "cjs", "jsx"],
		comment_start: "//",
		fence_label: "javascript",
	},
	Language {
		extensions: &["ts", "mts", "cts", "tsx"],
		comment_start: "//",
		fence_label: "typescript",
	},
	Language {
		extensions: &["zig"],
		comment_start: "//",
		fence_label: "zig",
	},
	Language {
		extensions: &["v", "vh"],
		comment_start: "//",
		fence_label: "verilog",
	},
	Language {
		extensions: &["sv", "svh"],
		comment_start: "//",
		fence_label: "systemverilog",
	},
	Language {
		extensions: &["py", "pyi"],
		comment_start: "#",
		fence_label: "python",
	},
	Language {
		extensions: &["rb"],
		comment_start: "#",
		fence_label: "ruby",
	},
	Language {
		extensions: &["pl", "pm"],
		comment_start: "#",
		fence_label: "perl",
	},
	Language {
		extensions: &["r"],
		comment_start: "#",
		fence_label: "r",
	},
	Language {
		extensions: &["sh", "bash"],
		comment_start: "#",
		fence_label: "bash",
	},
	Language {
		extensions: &["zsh"],
		comment_start: "#",
		fence_label: "zsh",
	},
	Language {
		extensions: &["nix"],
		comment_start: "#",
		fence_label: "nix",
	},
	Language {
		extensions: &["toml"],
		comment_start: "#",
		fence_label: "toml",
	},
	Language {
		extensions: &["yaml", "yml"],
		comment_start: "#",
		fence_label: "yaml",
	},
	Language {
		extensions: &["tcl", "xdc", "sdc"],
		comment_start: "#",
		fence_label: "tcl",
	},
	Language {
		extensions: &["lua"],
		comment_start: "--",
		fence_label: "lua",
	},
	Language {
		extensions: &["sql"],
		comment_start: "--",
		fence_label: "sql",
	},
	Language {
		extensions: &["hs"],
		comment_start: "--",
		fence_label: "haskell",
	},
	Language {
		extensions: &["elm"],
		comment_start: "--",
		fence_label: "elm",
	},
	Language {
		extensions: &["adb", "ads"],
		comment_start: "--",
		fence_label: "ada",
	},
	Language {
		extensions: &["lisp", "lsp", "cl"],
		comment_start: ";",
		fence_label: "lisp",
	},
	Language {
		extensions: &["el"],
		comment_start: ";",
		fence_label: "elisp",
	},
	Language {
		extensions: &["clj", "cljs", "cljc"],
		comment_start: ";",
		fence_label: "clojure",
	},
	Language {
		extensions: &["scm", "ss"],
		comment_start: ";",
		fence_label: "scheme",
	},
	Language {
		extensions: &["asm", "s"],
		comment_start: ";",
		fence_label: "asm",
	},
	Language {
		extensions: &["tex", "sty"],
		comment_start: "%",
		fence_label: "latex",
	},
	Language {
		extensions: &["erl", "hrl"],
		comment_start: "%",
		fence_label: "erlang",
	},
	Language {
		extensions: &["m"],
		comment_start: "%",
		fence_label: "matlab",
	},
];

/// Normalize an extension for lookup: no leading dot, lowercase.
pub fn normalize_extension(extension: &str) -> String {
	extension.trim_start_matches('.').to_ascii_lowercase()
}

impl Language {
	/// Look up a built-in language by file extension (case-insensitive, with
	/// or without the leading dot).
	pub fn for_extension(extension: &str) -> Option<&'static Language> {
		let extension = normalize_extension(extension);
		LANGUAGES.iter().find(|language| {
			language
				.extensions
				.iter()
				.any(|candidate| *candidate == extension)
		})
	}

	/// Look up a built-in language from the extension of `path`.
	pub fn for_path(path: &Path) -> Option<&'static Language> {
		path.extension()
			.and_then(|extension| extension.to_str())
			.and_then(Self::for_extension)
	}

	pub fn to_options(&self, delimiter: &str) -> ConvertOptions {
		ConvertOptions::new(self.comment_start, self.fence_label).with_delimiter(delimiter)
	}
}
