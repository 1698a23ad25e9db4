//! `lit2md_core` turns "literate" source files into Markdown.
//!
//! Lines whose comment starts with a documentation marker (by default the
//! comment start followed by `]`, e.g. `--]` or `//]`) become Markdown prose.
//! Everything else is wrapped in fenced code blocks, in the order it appears.
//! There is no tangling and no chunk reordering.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source file
//!   → Language lookup (extension → comment start + fence label, lit2md.toml overrides)
//!   → DocPrefix (comment start + delimiter, with an optional single space)
//!   → Scanner (None / Code / Text states, one line at a time)
//!   → Markdown (prose lines verbatim, code in labelled fences)
//! ```
//!
//! ## Modules
//!
//! - [`prefix`] recognizes documentation lines and strips their prefix.
//! - [`converter`] holds the streaming scanner that writes Markdown.
//! - [`languages`] maps file extensions to comment styles and fence labels.
//! - [`config`] loads `lit2md.toml` overrides and resolves the options for a
//!   run.
//!
//! ## Quick Start
//!
//! ```rust
//! use lit2md_core::Language;
//! use lit2md_core::convert_str;
//!
//! let options = Language::for_extension("go").unwrap().to_options("]");
//! let markdown = convert_str("//] Adds numbers.\nfunc add(a, b int) int { return a + b }\n", &options).unwrap();
//!
//! assert!(markdown.starts_with("Adds numbers.\n\n```go\n"));
//! ```

pub use config::*;
pub use converter::*;
pub use error::*;
pub use languages::*;
pub use prefix::*;

pub mod config;
pub mod converter;
#[allow(unused_assignments)]
mod error;
pub mod languages;
pub mod prefix;
