use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::process;

use clap::Parser;
use lit2md_cli::Lit2mdCli;
use lit2md_core::ConvertSummary;
use lit2md_core::Lit2mdConfig;
use lit2md_core::Lit2mdError;
use lit2md_core::Lit2mdResult;
use lit2md_core::convert;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "LIT2MD_LOG";

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = Lit2mdCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose, use_color);

	match run(&args) {
		Ok(summary) => {
			if args.verbose {
				print_summary(&args, &summary);
			}
		}
		Err(error) => {
			let report: miette::Report = error.into();
			eprintln!("{report:?}");
			process::exit(1);
		}
	}
}

fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.try_init()
		.ok();
}

fn run(args: &Lit2mdCli) -> Lit2mdResult<ConvertSummary> {
	let root = args.root();
	let config = Lit2mdConfig::load(&root)?.unwrap_or_default();
	let extension = args.extension();
	let options = config.resolve(extension.as_deref(), &args.overrides())?;

	tracing::debug!(
		input = %args.input.display(),
		output = %args.output.display(),
		extension = extension.as_deref().unwrap_or_default(),
		"resolved options"
	);

	// The input is opened before the output so that a missing source never
	// truncates an existing destination.
	let input: Box<dyn BufRead> = if args.reads_stdin() {
		Box::new(std::io::stdin().lock())
	} else {
		let file = File::open(&args.input).map_err(|source| {
			Lit2mdError::OpenInput {
				path: args.input.display().to_string(),
				source,
			}
		})?;
		Box::new(BufReader::new(file))
	};

	let output: Box<dyn Write> = if args.writes_stdout() {
		Box::new(std::io::stdout().lock())
	} else {
		if !args.reads_stdin() && same_file(&args.input, &args.output) {
			return Err(Lit2mdError::SameInputAndOutput {
				path: args.output.display().to_string(),
			});
		}

		let file = File::create(&args.output).map_err(|source| {
			Lit2mdError::CreateOutput {
				path: args.output.display().to_string(),
				source,
			}
		})?;
		Box::new(file)
	};

	convert(input, BufWriter::new(output), &options)
}

/// True when both paths resolve to the same existing file. A missing output
/// can never be the input.
fn same_file(input: &Path, output: &Path) -> bool {
	match (std::fs::canonicalize(input), std::fs::canonicalize(output)) {
		(Ok(input), Ok(output)) => input == output,
		_ => false,
	}
}

fn print_summary(args: &Lit2mdCli, summary: &ConvertSummary) {
	let destination = if args.writes_stdout() {
		"stdout".to_string()
	} else {
		args.output.display().to_string()
	};

	eprintln!(
		"{} {}",
		colored!("Converted", green),
		colored!(destination, bold)
	);
	eprintln!("  {:<14} {}", "lines", summary.lines);
	eprintln!("  {:<14} {}", "doc lines", summary.doc_lines);
	eprintln!("  {:<14} {}", "code lines", summary.code_lines);
	eprintln!("  {:<14} {}", "code blocks", summary.code_blocks);
}
