//! File-backed project store
//!
//! Each project is a folder under the projects root named by its id:
//! - `meta/project.yaml` holds the `ProjectMeta` record
//! - `meta/summary.md` and `docs/index.md` are seeded from templates
//! - `chat/main.json` holds the single `main` conversation
//! - `history/docs` and `history/meta` are reserved, created empty
//!
//! Folder existence is the only uniqueness check. There is no locking:
//! callers must not race `create` or `open` on the same id.

mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Config, HISTORY_DIRS, PROJECT_DIRS, REQUIRED_FILES};
use crate::error::{ForgeError, Result};
use crate::model::{validate_id, Conversation, ProjectMeta};
use crate::paths::ProjectPaths;

pub struct ProjectStore {
    paths: ProjectPaths,
}

impl ProjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            paths: ProjectPaths::new(root),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.projects_root())
    }

    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    // ============================================
    // LIFECYCLE
    // ============================================

    /// Create a new project with the canonical folder structure
    pub fn create(&self, id: &str, name: &str, description: &str) -> Result<ProjectMeta> {
        self.create_with(id, name, description, Self::scaffold)
    }

    fn create_with<F>(
        &self,
        id: &str,
        name: &str,
        description: &str,
        scaffold: F,
    ) -> Result<ProjectMeta>
    where
        F: FnOnce(&Self, &ProjectMeta) -> Result<()>,
    {
        let meta = ProjectMeta::new(id, name, description)?;

        if self.paths.exists(id) {
            return Err(ForgeError::AlreadyExists(id.to_string()));
        }

        let project_path = self.paths.project(id);
        fs::create_dir_all(&project_path)?;

        if let Err(e) = scaffold(self, &meta) {
            return Err(self.cleanup_failed_create(&project_path, e));
        }

        tracing::info!("Created project '{}' at {}", id, project_path.display());
        Ok(meta)
    }

    /// Remove a half-built project folder, handing back the error that stopped it.
    ///
    /// The folder did not exist before `create`, so removing it cannot touch
    /// anything `create` did not write.
    fn cleanup_failed_create(&self, project_path: &Path, err: ForgeError) -> ForgeError {
        tracing::warn!(
            "Creating project at {} failed ({}), removing it",
            project_path.display(),
            err
        );
        if let Err(cleanup) = fs::remove_dir_all(project_path) {
            tracing::warn!("Cleanup of {} failed: {}", project_path.display(), cleanup);
        }
        err
    }

    fn scaffold(&self, meta: &ProjectMeta) -> Result<()> {
        let id = meta.id.as_str();
        let project_path = self.paths.project(id);

        for dir in PROJECT_DIRS {
            fs::create_dir_all(project_path.join(dir))?;
        }
        for dir in HISTORY_DIRS {
            fs::create_dir_all(self.paths.history(id).join(dir))?;
        }

        self.write_meta(meta)?;
        fs::write(
            self.paths.summary_file(id),
            templates::summary(&meta.description),
        )?;

        let conversation = Conversation::new();
        fs::write(
            self.paths.chat_file(id),
            serde_json::to_string_pretty(&conversation)?,
        )?;

        fs::write(
            self.paths.index_file(id),
            templates::index(&meta.name, &meta.description),
        )?;

        Ok(())
    }

    /// List all readable projects, most recently opened or created first.
    ///
    /// Folders without a metadata file, or whose metadata does not parse or
    /// validate, are skipped rather than failing the whole listing.
    pub fn list(&self) -> Result<Vec<ProjectMeta>> {
        let root = self.paths.root();
        if !root.exists() {
            return Ok(Vec::new());
        }

        let mut projects = Vec::new();

        for entry in fs::read_dir(root)? {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }

            let Some(id) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let meta_file = self.paths.meta_file(id);
            if !meta_file.exists() {
                tracing::debug!("Skipping {}: no metadata file", path.display());
                continue;
            }

            match self.read_meta(id) {
                Ok(meta) => projects.push(meta),
                Err(e) => tracing::debug!("Skipping {}: {}", path.display(), e),
            }
        }

        projects.sort_by(|a, b| b.last_activity().cmp(&a.last_activity()));
        Ok(projects)
    }

    /// Load a project and stamp `last_opened_at` with the current time
    pub fn open(&self, id: &str) -> Result<ProjectMeta> {
        self.ensure_exists(id)?;

        let mut meta = self.read_meta(id)?;
        meta.touch();
        self.write_meta(&meta)?;

        tracing::info!("Opened project '{}'", id);
        Ok(meta)
    }

    /// Load a project's metadata without updating timestamps
    pub fn get(&self, id: &str) -> Result<ProjectMeta> {
        self.ensure_exists(id)?;
        self.read_meta(id)
    }

    /// Load the project's `main` conversation
    pub fn conversation(&self, id: &str) -> Result<Conversation> {
        self.ensure_exists(id)?;

        let path = self.paths.chat_file(id);
        tracing::debug!("Reading conversation from {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Required files missing from a project; empty when the project is intact
    pub fn check(&self, id: &str) -> Result<Vec<PathBuf>> {
        self.ensure_exists(id)?;

        let project_path = self.paths.project(id);
        Ok(REQUIRED_FILES
            .iter()
            .map(|file| project_path.join(file))
            .filter(|path| !path.is_file())
            .collect())
    }

    // ============================================
    // METADATA FILE
    // ============================================

    fn ensure_exists(&self, id: &str) -> Result<()> {
        // An invalid id cannot name a project, and must not escape the root
        if validate_id(id).is_err() || !self.paths.exists(id) {
            return Err(ForgeError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn read_meta(&self, id: &str) -> Result<ProjectMeta> {
        let path = self.paths.meta_file(id);
        tracing::debug!("Reading metadata from {}", path.display());
        let content = fs::read_to_string(&path)?;
        let meta = ProjectMeta::from_yaml(&content)?;

        if meta.id != id {
            return Err(ForgeError::InvalidMetadata(format!(
                "{} declares id '{}'",
                path.display(),
                meta.id
            )));
        }
        Ok(meta)
    }

    fn write_meta(&self, meta: &ProjectMeta) -> Result<()> {
        fs::write(self.paths.meta_file(&meta.id), meta.to_yaml()?)?;
        Ok(())
    }
}
