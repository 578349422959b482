//! Canonical on-disk locations for a project
//!
//! Pure path arithmetic over one projects root. Identifiers are not
//! validated here.

use std::path::{Path, PathBuf};

use crate::config::{
    CHAT_DIR, CHAT_FILE, DOCS_DIR, HISTORY_DIR, INDEX_FILE, META_DIR, META_FILE, SUMMARY_FILE,
};

#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The projects root all project folders live under
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }

    pub fn docs(&self, id: &str) -> PathBuf {
        self.project(id).join(DOCS_DIR)
    }

    pub fn chat(&self, id: &str) -> PathBuf {
        self.project(id).join(CHAT_DIR)
    }

    pub fn meta(&self, id: &str) -> PathBuf {
        self.project(id).join(META_DIR)
    }

    pub fn history(&self, id: &str) -> PathBuf {
        self.project(id).join(HISTORY_DIR)
    }

    pub fn meta_file(&self, id: &str) -> PathBuf {
        self.meta(id).join(META_FILE)
    }

    pub fn summary_file(&self, id: &str) -> PathBuf {
        self.meta(id).join(SUMMARY_FILE)
    }

    pub fn chat_file(&self, id: &str) -> PathBuf {
        self.chat(id).join(CHAT_FILE)
    }

    pub fn index_file(&self, id: &str) -> PathBuf {
        self.docs(id).join(INDEX_FILE)
    }

    /// True iff the project root exists and is a directory
    pub fn exists(&self, id: &str) -> bool {
        self.project(id).is_dir()
    }
}
