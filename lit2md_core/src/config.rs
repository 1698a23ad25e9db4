use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ConvertOptions;
use crate::DEFAULT_DELIMITER;
use crate::Lit2mdError;
use crate::Lit2mdResult;
use crate::languages::Language;
use crate::languages::normalize_extension;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["lit2md.toml", ".lit2md.toml", ".config/lit2md.toml"];

/// Per-extension override for the built-in language table.
///
/// ```toml
/// [languages.vhd]
/// comment = "--"
/// fence = "vhdl"
/// ```
///
/// Either field may be left out, in which case the built-in value for that
/// extension (if any) is used.
#[derive(Debug, Clone, Default, Deserialize, Eq, PartialEq)]
pub struct LanguageOverride {
	#[serde(default)]
	pub comment: Option<String>,
	#[serde(default)]
	pub fence: Option<String>,
}

/// Configuration loaded from a `lit2md.toml` file.
///
/// ```toml
/// delimiter = "]"
///
/// [languages.tpl]
/// comment = "#"
/// fence = "jinja"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lit2mdConfig {
	/// Delimiter that follows the comment start on documentation lines.
	#[serde(default)]
	pub delimiter: Option<String>,
	/// Overrides keyed by normalized file extension (no dot, lowercase).
	#[serde(default)]
	pub languages: HashMap<String, LanguageOverride>,
}

/// Values given explicitly on the command line. They win over both the config
/// file and the built-in table.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
	pub comment: Option<String>,
	pub fence: Option<String>,
	pub delimiter: Option<String>,
}

impl Lit2mdConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> Lit2mdResult<Option<Lit2mdConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;

		Self::from_toml(&content).map(Some)
	}

	/// Parse a config file. Extension keys are normalized (leading dot removed,
	/// lowercased), and two keys that normalize to the same extension are
	/// rejected.
	pub fn from_toml(content: &str) -> Lit2mdResult<Lit2mdConfig> {
		let mut config: Lit2mdConfig =
			toml::from_str(content).map_err(|e| Lit2mdError::ConfigParse(e.to_string()))?;

		let mut entries: Vec<_> = std::mem::take(&mut config.languages).into_iter().collect();
		entries.sort_by(|a, b| a.0.cmp(&b.0));

		let mut languages = HashMap::with_capacity(entries.len());
		for (key, value) in entries {
			let extension = normalize_extension(&key);
			if languages.insert(extension.clone(), value).is_some() {
				return Err(Lit2mdError::ConfigParse(format!(
					"more than one [languages] entry for extension `{extension}` (found `{key}`)"
				)));
			}
		}

		config.languages = languages;
		Ok(config)
	}

	fn language_override(&self, extension: &str) -> Option<&LanguageOverride> {
		self.languages.get(&normalize_extension(extension))
	}

	/// Build the conversion options for a file with the given extension.
	///
	/// Each field is taken from `overrides` first, then from this config, then
	/// from the built-in [`Language`] table. A missing comment style is an
	/// error. A missing fence label falls back to a plain fence.
	pub fn resolve(
		&self,
		extension: Option<&str>,
		overrides: &OptionOverrides,
	) -> Lit2mdResult<ConvertOptions> {
		let configured = extension.and_then(|ext| self.language_override(ext));
		let builtin = extension.and_then(Language::for_extension);

		let comment = overrides
			.comment
			.clone()
			.or_else(|| configured.and_then(|c| c.comment.clone()))
			.or_else(|| builtin.map(|b| b.comment_start.to_string()))
			.ok_or_else(|| Lit2mdError::UnknownLanguage(extension.unwrap_or_default().to_string()))?;

		let fence = overrides
			.fence
			.clone()
			.or_else(|| configured.and_then(|c| c.fence.clone()))
			.or_else(|| builtin.map(|b| b.fence_label.to_string()))
			.unwrap_or_default();

		let delimiter = overrides
			.delimiter
			.clone()
			.or_else(|| self.delimiter.clone())
			.unwrap_or_else(|| DEFAULT_DELIMITER.to_string());

		Ok(ConvertOptions::new(comment, fence).with_delimiter(delimiter))
	}
}
