/// Configuration loading and management for the suggestion engine
use crate::candidates::CandidateList;
use crate::error::{CompletionError, CompletionResult};
use crate::ghost_text::DEFAULT_SUGGESTION_CLASS;
use crate::types::AcceptKey;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// File names looked up by [`ConfigLoader::load_from_directory`], in order
pub const CONFIG_FILE_NAMES: [&str; 3] = ["mailhint.yaml", "mailhint.yml", "mailhint.json"];

/// Construction configuration for a field session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Style identifier applied to the overlay
    #[serde(alias = "suggClass")]
    pub suggestion_class: String,
    /// Candidate domains; anything other than a list of strings is ignored
    #[serde(deserialize_with = "lenient_domains", skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    /// Replace the built-in domains instead of prepending to them
    #[serde(alias = "overwriteDomains")]
    pub replace_default_domains: bool,
    /// Keys that accept the displayed suggestion
    pub accept_keys: Vec<AcceptKey>,
}

impl CompletionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domains<I, S>(mut self, domains: I, replace_defaults: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = Some(domains.into_iter().map(Into::into).collect());
        self.replace_default_domains = replace_defaults;
        self
    }

    /// The candidate list this configuration resolves to
    pub fn candidates(&self) -> CandidateList {
        CandidateList::merged(self.domains.as_deref(), self.replace_default_domains)
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            suggestion_class: DEFAULT_SUGGESTION_CLASS.to_string(),
            domains: None,
            replace_default_domains: true,
            accept_keys: AcceptKey::defaults(),
        }
    }
}

fn lenient_domains<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DomainsField {
        List(Vec<String>),
        Other(serde::de::IgnoredAny),
    }

    match DomainsField::deserialize(deserializer)? {
        DomainsField::List(domains) => Ok(Some(domains)),
        DomainsField::Other(_) => {
            warn!("Ignoring `domains`: expected a list of strings, using built-in domains");
            Ok(None)
        }
    }
}

/// Configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

/// Suggestion configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub fn load_from_yaml(path: &Path) -> CompletionResult<CompletionConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_string(&content, ConfigFormat::Yaml)
    }

    /// Load configuration from a JSON file
    pub fn load_from_json(path: &Path) -> CompletionResult<CompletionConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_string(&content, ConfigFormat::Json)
    }

    /// Load configuration from a string
    pub fn load_from_string(content: &str, format: ConfigFormat) -> CompletionResult<CompletionConfig> {
        let config = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Load a file, picking the format from its extension
    pub fn load_from_path(path: &Path) -> CompletionResult<CompletionConfig> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::load_from_yaml(path),
            Some("json") => Self::load_from_json(path),
            _ => Err(CompletionError::ConfigError(format!(
                "Unsupported configuration file: {}",
                path.display()
            ))),
        }
    }

    /// Load the first configuration file found in a directory
    pub fn load_from_directory(dir: &Path) -> CompletionResult<CompletionConfig> {
        if !dir.is_dir() {
            return Err(CompletionError::ConfigError(format!(
                "Configuration directory not found: {}",
                dir.display()
            )));
        }

        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if path.exists() {
                debug!("Loading suggestion configuration from {}", path.display());
                return Self::load_from_path(&path);
            }
        }

        Err(CompletionError::ConfigError(format!(
            "No configuration found in: {}",
            dir.display()
        )))
    }

    /// Load from a directory, falling back to defaults on any failure
    pub fn load_or_default(dir: &Path) -> CompletionConfig {
        match Self::load_from_directory(dir) {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default suggestion configuration: {}", e);
                CompletionConfig::default()
            }
        }
    }

    /// Validate configuration
    fn validate_config(config: &CompletionConfig) -> CompletionResult<()> {
        if config.suggestion_class.trim().is_empty() {
            return Err(CompletionError::ConfigError(
                "Suggestion class cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
