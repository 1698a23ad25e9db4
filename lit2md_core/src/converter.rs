use std::io::BufRead;
use std::io::Write;

use crate::Lit2mdResult;
use crate::prefix::DocPrefix;
use crate::prefix::is_blank;

/// Delimiter appended to the comment start when none is configured.
pub const DEFAULT_DELIMITER: &str = "]";

const FENCE: &str = "```";

/// Settings for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
	/// The language's line comment marker, e.g. `--` or `//`. May be empty.
	pub comment_start: String,
	/// Marker following `comment_start` that turns a comment into
	/// documentation. Defaults to [`DEFAULT_DELIMITER`].
	pub delimiter: String,
	/// Info string placed on opening fences. Empty for a plain fence.
	pub fence_label: String,
}

impl ConvertOptions {
	pub fn new(comment_start: impl Into<String>, fence_label: impl Into<String>) -> Self {
		Self {
			comment_start: comment_start.into(),
			delimiter: DEFAULT_DELIMITER.to_string(),
			fence_label: fence_label.into(),
		}
	}

	#[must_use]
	pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
		self.delimiter = delimiter.into();
		self
	}

	pub fn doc_prefix(&self) -> DocPrefix {
		DocPrefix::new(&self.comment_start, &self.delimiter)
	}
}

/// Where the scanner currently is in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
	/// Nothing but blank lines seen so far.
	None,
	/// Inside a fenced code region.
	Code,
	/// Inside a documentation region.
	Text,
}

/// Counters collected while converting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
	/// Lines read from the input.
	pub lines: usize,
	/// Documentation lines written without their prefix.
	pub doc_lines: usize,
	/// Source lines written inside code fences.
	pub code_lines: usize,
	/// Fenced code blocks opened (and closed).
	pub code_blocks: usize,
}

/// Drives the three-state scanner over one line at a time.
struct Scanner<'a, W> {
	out: W,
	prefix: DocPrefix,
	fence_label: &'a str,
	state: ScanState,
	summary: ConvertSummary,
}

impl<'a, W: Write> Scanner<'a, W> {
	fn new(out: W, options: &'a ConvertOptions) -> Self {
		Self {
			out,
			prefix: options.doc_prefix(),
			fence_label: &options.fence_label,
			state: ScanState::None,
			summary: ConvertSummary::default(),
		}
	}

	fn open_fence(&mut self) -> Lit2mdResult<()> {
		writeln!(self.out, "{FENCE}{}", self.fence_label)?;
		self.summary.code_blocks += 1;
		Ok(())
	}

	fn close_fence(&mut self) -> Lit2mdResult<()> {
		writeln!(self.out, "{FENCE}")?;
		Ok(())
	}

	fn write_line(&mut self, line: &[u8]) -> Lit2mdResult<()> {
		self.out.write_all(line)?;
		self.out.write_all(b"\n")?;
		Ok(())
	}

	fn transition(&mut self, next: ScanState) {
		if self.state != next {
			tracing::trace!(from = ?self.state, to = ?next, line = self.summary.lines, "state change");
			self.state = next;
		}
	}

	fn process(&mut self, line: &[u8]) -> Lit2mdResult<()> {
		self.summary.lines += 1;

		// Leaving `None` re-examines the same line in the new state. `None` is
		// never re-entered, so this runs at most twice.
		loop {
			match self.state {
				ScanState::None => {
					if is_blank(line) {
						return Ok(());
					}

					if self.prefix.is_doc_line(line) {
						self.transition(ScanState::Text);
					} else {
						self.open_fence()?;
						self.transition(ScanState::Code);
					}
				}
				ScanState::Code => {
					if self.prefix.is_doc_line(line) {
						self.close_fence()?;
						self.write_line(self.prefix.strip_prefix_bytes(line))?;
						self.summary.doc_lines += 1;
						self.transition(ScanState::Text);
					} else {
						self.write_line(line)?;
						self.summary.code_lines += 1;
					}

					return Ok(());
				}
				ScanState::Text => {
					if self.prefix.is_doc_line(line) {
						self.write_line(self.prefix.strip_prefix_bytes(line))?;
						self.summary.doc_lines += 1;
					} else if !is_blank(line) {
						writeln!(self.out)?;
						self.open_fence()?;
						self.write_line(self.prefix.strip_prefix_bytes(line))?;
						self.summary.code_lines += 1;
						self.transition(ScanState::Code);
					}

					return Ok(());
				}
			}
		}
	}

	fn finish(mut self) -> Lit2mdResult<ConvertSummary> {
		if self.state == ScanState::Code {
			self.close_fence()?;
		}

		self.out.flush()?;
		Ok(self.summary)
	}
}

/// Convert a literate source stream into Markdown.
///
/// Lines are pulled from `input` one at a time and written to `output` as
/// soon as they are classified, so memory use does not grow with the input.
/// Lines are handled as bytes: text that is not valid UTF-8 is copied through
/// untouched. Any read or write failure stops the conversion and is returned
/// unchanged.
///
/// ```rust
/// use lit2md_core::ConvertOptions;
/// use lit2md_core::convert;
///
/// let input = "--] # Title\n--] Some prose.\nentity top is\n";
/// let mut output = Vec::new();
/// convert(input.as_bytes(), &mut output, &ConvertOptions::new("--", "vhdl")).unwrap();
///
/// assert_eq!(
/// 	String::from_utf8(output).unwrap(),
/// 	"# Title\nSome prose.\n\n```vhdl\nentity top is\n```\n"
/// );
/// ```
#[tracing::instrument(
	level = "debug",
	skip_all,
	fields(comment = %options.comment_start, delimiter = %options.delimiter, fence = %options.fence_label)
)]
pub fn convert<R, W>(
	mut input: R,
	output: W,
	options: &ConvertOptions,
) -> Lit2mdResult<ConvertSummary>
where
	R: BufRead,
	W: Write,
{
	let mut scanner = Scanner::new(output, options);
	let mut buffer = Vec::new();

	loop {
		buffer.clear();
		if input.read_until(b'\n', &mut buffer)? == 0 {
			break;
		}

		let end = buffer
			.iter()
			.rposition(|byte| !matches!(*byte, b'\n' | b'\r'))
			.map_or(0, |last| last + 1);
		scanner.process(&buffer[..end])?;
	}

	let summary = scanner.finish()?;
	tracing::debug!(
		lines = summary.lines,
		doc_lines = summary.doc_lines,
		code_lines = summary.code_lines,
		code_blocks = summary.code_blocks,
		"conversion finished"
	);

	Ok(summary)
}

/// Convert an in-memory string. Mostly useful for tests and small inputs.
pub fn convert_str(input: &str, options: &ConvertOptions) -> Lit2mdResult<String> {
	let mut output = Vec::with_capacity(input.len() + 16);
	convert(input.as_bytes(), &mut output, options)?;

	String::from_utf8(output)
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}
