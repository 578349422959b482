//! Project metadata, persisted as `meta/project.yaml`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::timestamp;
use crate::error::{ForgeError, Result};

pub const MAX_NAME_LEN: usize = 100;
pub const DEFAULT_EDIT_SCOPE: &str = "markdown_only";
/// Line count
pub const DEFAULT_MAX_EDIT_SIZE: u32 = 500;

/// Check that an identifier matches `^[a-z0-9-]+$`
pub fn validate_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(ForgeError::InvalidIdentifier(id.to_string()))
    }
}

fn validate_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(ForgeError::InvalidName(format!(
            "must be 1-{} characters, got {}",
            MAX_NAME_LEN, len
        )));
    }
    Ok(())
}

/// Project lifecycle status. Stored, never transitioned here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Paused,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Paused => "paused",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Constraints for tools that edit the project's files.
///
/// Descriptive only: nothing in this crate enforces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRules {
    #[serde(default)]
    pub allow_cross_project_access: bool,

    #[serde(rename = "llm_edit_scope", default = "default_edit_scope")]
    pub edit_scope: String,

    #[serde(rename = "max_llm_edit_size", default = "default_max_edit_size")]
    pub max_edit_size: u32,
}

fn default_edit_scope() -> String {
    DEFAULT_EDIT_SCOPE.to_string()
}

fn default_max_edit_size() -> u32 {
    DEFAULT_MAX_EDIT_SIZE
}

impl Default for ProjectRules {
    fn default() -> Self {
        Self {
            allow_cross_project_access: false,
            edit_scope: default_edit_scope(),
            max_edit_size: default_max_edit_size(),
        }
    }
}

/// What a project is, not what is in it.
///
/// `id` doubles as the folder name, so it is immutable once created.
/// Field order here is the field order written to `project.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub last_opened_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub rules: ProjectRules,
}

impl ProjectMeta {
    /// Build a validated record for a new project, created now
    pub fn new(id: &str, name: &str, description: &str) -> Result<Self> {
        let meta = Self {
            id: id.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
            last_opened_at: None,
            description: description.to_string(),
            status: ProjectStatus::default(),
            rules: ProjectRules::default(),
        };
        meta.validate()?;
        Ok(meta)
    }

    /// Re-check field constraints, e.g. after loading from disk
    pub fn validate(&self) -> Result<()> {
        validate_id(&self.id)?;
        validate_name(&self.name)
    }

    /// Mark the project as opened now
    pub fn touch(&mut self) {
        self.last_opened_at = Some(Utc::now());
    }

    /// Most recent of open/creation, used for ordering listings
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_opened_at.unwrap_or(self.created_at)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let meta: ProjectMeta = serde_yaml::from_str(content)?;
        meta.validate()?;
        Ok(meta)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
