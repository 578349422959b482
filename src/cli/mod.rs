pub mod project;
pub mod read;
