//! Configuration management with YAML support

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DOCS_DIR: &str = "docs";
pub const CHAT_DIR: &str = "chat";
pub const META_DIR: &str = "meta";
pub const HISTORY_DIR: &str = "history";

/// Top-level folders created inside every project
pub const PROJECT_DIRS: [&str; 4] = [DOCS_DIR, CHAT_DIR, META_DIR, HISTORY_DIR];

/// Folders created under `history/`
pub const HISTORY_DIRS: [&str; 2] = [DOCS_DIR, META_DIR];

/// Files a healthy project must contain, relative to the project root
pub const REQUIRED_FILES: [&str; 3] = ["meta/project.yaml", "meta/summary.md", "chat/main.json"];

pub const META_FILE: &str = "project.yaml";
pub const SUMMARY_FILE: &str = "summary.md";
pub const CHAT_FILE: &str = "main.json";
pub const INDEX_FILE: &str = "index.md";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub projects: ProjectsConfig,

    #[serde(default)]
    pub llm: LlmConfig,
}

/// Where projects live on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsConfig {
    #[serde(default = "default_projects_root")]
    pub root: String,
}

/// LLM endpoint settings. Read by external tooling only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
}

fn default_projects_root() -> String {
    "~/.local/share/forge/projects".to_string()
}

fn default_llm_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            root: default_projects_root(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    /// Searches in order:
    /// 1. Provided path
    /// 2. ./forge.yaml (current directory)
    /// 3. ~/.config/forge/forge.yaml
    pub fn load(path: &str) -> Result<Self> {
        let search_paths = vec![
            shellexpand::tilde(path).to_string(),
            "forge.yaml".to_string(),
            shellexpand::tilde("~/.config/forge/forge.yaml").to_string(),
        ];

        for search_path in &search_paths {
            if std::path::Path::new(search_path).exists() {
                tracing::debug!("Loading config from {}", search_path);
                let content = std::fs::read_to_string(search_path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Get the projects root, expanding ~ to home directory
    pub fn projects_root(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.projects.root).to_string();
        PathBuf::from(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.projects.root, "~/.local/share/forge/projects");
        assert_eq!(config.llm.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
projects:
  root: /srv/forge/projects

llm:
  base_url: http://127.0.0.1:9000
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.projects_root(), PathBuf::from("/srv/forge/projects"));
        assert_eq!(config.llm.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("projects: {}\n").unwrap();
        assert_eq!(config.projects.root, "~/.local/share/forge/projects");
        assert_eq!(config.llm.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "projects:\n  root: /tmp/forge-test\n").unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.projects.root, "/tmp/forge-test");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "projects: [not, a, mapping\n").unwrap();

        assert!(Config::load(path.to_str().unwrap()).is_err());
    }
}
