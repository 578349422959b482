pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod store;

pub use config::Config;
pub use error::{ForgeError, Result};
pub use model::{ChatMessage, Conversation, ProjectMeta, ProjectRules, ProjectStatus, Role};
pub use paths::ProjectPaths;
pub use store::ProjectStore;
