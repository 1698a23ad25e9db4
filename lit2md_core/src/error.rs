use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum Lit2mdError {
	#[error(transparent)]
	#[diagnostic(code(lit2md::io_error))]
	Io(#[from] std::io::Error),

	#[error("error while opening `{path}`: {source}")]
	#[diagnostic(code(lit2md::open_input), help("check that the input file exists and is readable"))]
	OpenInput {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("error while creating `{path}`: {source}")]
	#[diagnostic(
		code(lit2md::create_output),
		help("check that the output directory exists and is writable")
	)]
	CreateOutput {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("input and output are the same file: `{path}`")]
	#[diagnostic(
		code(lit2md::same_input_output),
		help("choose a different --output path")
	)]
	SameInputAndOutput { path: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(lit2md::config_parse),
		help("check that lit2md.toml is valid TOML with an optional `delimiter` and [languages] tables")
	)]
	ConfigParse(String),

	#[error("no comment style known for extension: `{0}`")]
	#[diagnostic(
		code(lit2md::unknown_language),
		help("pass `--comment` (and optionally `--fence`), or add a [languages.{0}] entry to lit2md.toml")
	)]
	UnknownLanguage(String),
}

pub type Lit2mdResult<T> = Result<T, Lit2mdError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
