//! Configuration for the assistant

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable holding the completion API credential
pub const API_KEY_ENV: &str = "TOGETHER_API_KEY";

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_ENV: &str = "ROBOSOC_CONFIG";

/// Main assistant configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Completion API configuration
    pub llm: LlmConfig,
    /// Knowledge base documents
    pub documents: DocumentsConfig,
    /// Institutional facts embedded in the system prompt
    pub institute: InstituteFacts,
}

impl AssistantConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads the TOML file named by `ROBOSOC_CONFIG` when set, then overlays
    /// `TOGETHER_API_KEY`, `HOST` and `PORT`.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`AssistantConfig::load`] with an injectable variable lookup
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match lookup(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.with_env(lookup)
    }

    /// Parse a TOML configuration file; omitted fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&raw)
            .map_err(|e| Error::Config(format!("Invalid config {}: {}", path.display(), e)))
    }

    /// Parse TOML text
    pub fn from_toml(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Overlay environment values. The API key is mandatory.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingApiKey(API_KEY_ENV))?;
        self.llm.api_key = api_key;

        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| Error::Config(format!("Invalid PORT '{}': {}", port, e)))?;
        }

        Ok(self)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// `host:port` string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Completion API configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// OpenAI-compatible API base URL
    pub base_url: String,
    /// Generation model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens in the reply
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Bearer credential, only ever taken from the environment
    #[serde(skip)]
    pub api_key: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.together.xyz/v1".to_string(),
            model: "meta-llama/Llama-3.3-70B-Instruct-Turbo".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            timeout_secs: 120,
            api_key: String::new(),
        }
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// One labeled knowledge base document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Section heading used in the knowledge base
    pub label: String,
    /// File path, relative paths resolve against the static directory
    pub path: PathBuf,
}

impl SourceDocument {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Knowledge base document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Directory holding the documents; relative to the working directory
    pub static_dir: PathBuf,
    /// Documents in knowledge base order
    pub sources: Vec<SourceDocument>,
    /// Upper bound on extracting a single document, in seconds
    pub extract_timeout_secs: u64,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            sources: vec![SourceDocument::new(
                "Robotics Society Information",
                "robosoc information.pdf",
            )],
            extract_timeout_secs: 60,
        }
    }
}

impl DocumentsConfig {
    pub fn extract_timeout(&self) -> Duration {
        Duration::from_secs(self.extract_timeout_secs)
    }

    /// Static directory resolved against the current working directory
    pub fn static_root(&self) -> PathBuf {
        if self.static_dir.is_absolute() {
            return self.static_dir.clone();
        }
        std::env::current_dir()
            .map(|cwd| cwd.join(&self.static_dir))
            .unwrap_or_else(|_| self.static_dir.clone())
    }

    /// Sources with their paths joined onto the static root
    pub fn resolved_sources(&self) -> Vec<SourceDocument> {
        let root = self.static_root();
        self.sources
            .iter()
            .map(|source| SourceDocument {
                label: source.label.clone(),
                path: root.join(&source.path),
            })
            .collect()
    }
}

/// Fixed facts about the society and its institute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstituteFacts {
    /// Society name as used in the persona ("Robotics Society")
    pub society: String,
    /// Short institute name ("NITH")
    pub institute_short: String,
    /// Full institute name ("NIT Hamirpur")
    pub institute_name: String,
    /// Director's name including title
    pub director: String,
    /// Director's email
    pub director_email: String,
    /// Institute website
    pub website: String,
    /// Founding year
    pub founded: u16,
    /// Location
    pub location: String,
}

impl Default for InstituteFacts {
    fn default() -> Self {
        Self {
            society: "Robotics Society".to_string(),
            institute_short: "NITH".to_string(),
            institute_name: "NIT Hamirpur".to_string(),
            director: "Prof. Hiralal Murlidhar Suryawanshi".to_string(),
            director_email: "director@nith.ac.in".to_string(),
            website: "https://nith.ac.in/".to_string(),
            founded: 1986,
            location: "Hamirpur, Himachal Pradesh".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let err = AssistantConfig::load_with(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::MissingApiKey(API_KEY_ENV)));
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let err = AssistantConfig::load_with(lookup(&[(API_KEY_ENV, "   ")])).unwrap_err();
        assert!(matches!(err, Error::MissingApiKey(_)));
    }

    #[test]
    fn defaults_target_together_and_nith() {
        let config = AssistantConfig::load_with(lookup(&[(API_KEY_ENV, "key")])).unwrap();
        assert_eq!(config.llm.api_key, "key");
        assert_eq!(config.llm.model, "meta-llama/Llama-3.3-70B-Instruct-Turbo");
        assert_eq!(config.llm.max_tokens, 500);
        assert!((config.llm.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.server.address(), "0.0.0.0:5000");
        assert_eq!(config.documents.sources.len(), 1);
        assert_eq!(config.documents.sources[0].label, "Robotics Society Information");
    }

    #[test]
    fn host_and_port_overlay() {
        let config = AssistantConfig::load_with(lookup(&[
            (API_KEY_ENV, "key"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
        ]))
        .unwrap();
        assert_eq!(config.server.address(), "127.0.0.1:8081");
    }

    #[test]
    fn bad_port_is_config_error() {
        let err = AssistantConfig::load_with(lookup(&[(API_KEY_ENV, "key"), ("PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn toml_overlay_keeps_defaults() {
        let config = AssistantConfig::from_toml(
            r#"
            [llm]
            max_tokens = 256

            [documents]
            sources = [
                { label = "Robotics Society Information", path = "robosoc information.pdf" },
                { label = "RoboWeek Brochure", path = "roboweek.pdf" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.max_tokens, 256);
        assert_eq!(config.llm.model, LlmConfig::default().model);
        assert_eq!(config.documents.static_dir, PathBuf::from("static"));
        assert_eq!(config.documents.extract_timeout(), Duration::from_secs(60));
        assert_eq!(config.documents.sources[1].label, "RoboWeek Brochure");
        assert_eq!(config.institute, InstituteFacts::default());
    }

    #[test]
    fn config_file_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assistant.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let config = AssistantConfig::load_with(lookup(&[
            (API_KEY_ENV, "key"),
            (CONFIG_PATH_ENV, path.to_str().unwrap()),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn unreadable_config_file_is_config_error() {
        let err = AssistantConfig::load_with(lookup(&[
            (API_KEY_ENV, "key"),
            (CONFIG_PATH_ENV, "/definitely/not/here.toml"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn sources_resolve_under_static_dir() {
        let docs = DocumentsConfig {
            static_dir: PathBuf::from("/srv/static"),
            ..Default::default()
        };
        let resolved = docs.resolved_sources();
        assert_eq!(
            resolved[0].path,
            PathBuf::from("/srv/static/robosoc information.pdf")
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let llm = LlmConfig {
            api_key: "secret-value".into(),
            ..Default::default()
        };
        assert!(!format!("{:?}", llm).contains("secret-value"));
    }
}
