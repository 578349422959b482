//! Record types stored inside a project folder

mod chat;
mod project;
mod timestamp;

pub use chat::{ChatMessage, Conversation, Role, MAIN_CONVERSATION_ID};
pub use project::{
    validate_id, ProjectMeta, ProjectRules, ProjectStatus, DEFAULT_EDIT_SCOPE,
    DEFAULT_MAX_EDIT_SIZE, MAX_NAME_LEN,
};
