use std::ops::Range;

/// Whitespace skipped before a documentation prefix and ignored by [`is_blank`].
const INLINE_WHITESPACE: [u8; 2] = [b' ', b'\t'];

fn trim_inline_start(line: &[u8]) -> usize {
	line.iter()
		.position(|byte| !INLINE_WHITESPACE.contains(byte))
		.unwrap_or(line.len())
}

/// Recognizes documentation lines by their comment prefix.
///
/// A line is documentation when, after leading spaces and tabs, it begins with
/// `comment_start + delimiter`. A single space directly after the delimiter is
/// treated as part of the prefix, so `--] text` and `--]text` both strip to
/// `text`.
///
/// Matching works on bytes, so lines that are not valid UTF-8 (Latin-1
/// comments in old sources, for instance) are classified like any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPrefix {
	/// `comment_start + delimiter`.
	short: String,
	/// `comment_start + delimiter + " "`.
	long: String,
}

impl DocPrefix {
	pub fn new(comment_start: &str, delimiter: &str) -> Self {
		let short = format!("{comment_start}{delimiter}");
		let long = format!("{short} ");
		Self { short, long }
	}

	/// The prefix without the optional separating space.
	pub fn as_str(&self) -> &str {
		&self.short
	}

	/// Returns true when `line` is a documentation line.
	pub fn is_doc_line(&self, line: impl AsRef<[u8]>) -> bool {
		let line = line.as_ref();
		let trimmed = &line[trim_inline_start(line)..];
		trimmed.starts_with(self.long.as_bytes()) || trimmed.starts_with(self.short.as_bytes())
	}

	/// Byte range of `line` left after stripping. Every cut lands on ASCII
	/// bytes or after the whole prefix, so the range is a valid `str` slice
	/// whenever `line` is.
	fn stripped_range(&self, line: &[u8]) -> Range<usize> {
		let start = trim_inline_start(line);
		let trimmed = &line[start..];

		for prefix in [self.long.as_bytes(), self.short.as_bytes()] {
			if trimmed.starts_with(prefix) {
				return start + prefix.len()..line.len();
			}
		}

		let end = line
			.iter()
			.rposition(|byte| !matches!(*byte, b'\n' | b'\r'))
			.map_or(start, |last| (last + 1).max(start));

		start..end
	}

	/// Strip leading whitespace and the documentation prefix from `line`.
	///
	/// The longer prefix wins so that exactly one separating space is
	/// consumed. Lines without a prefix come back with only their leading
	/// whitespace and trailing line terminators removed.
	pub fn strip_prefix<'a>(&self, line: &'a str) -> &'a str {
		&line[self.stripped_range(line.as_bytes())]
	}

	/// Byte-level [`DocPrefix::strip_prefix`].
	pub fn strip_prefix_bytes<'a>(&self, line: &'a [u8]) -> &'a [u8] {
		&line[self.stripped_range(line)]
	}
}

/// Returns true when `line` contains nothing but spaces and tabs.
pub fn is_blank(line: impl AsRef<[u8]>) -> bool {
	line.as_ref()
		.iter()
		.all(|byte| INLINE_WHITESPACE.contains(byte))
}
