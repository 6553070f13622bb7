pub mod chat;
pub mod config;
pub mod db;
pub mod models;
pub mod reflection;
pub mod status;

pub use chat::{ChatClient, ChatConfig, ChatError};
pub use config::OneThingConfig;
pub use reflection::{build_reflection_prompt, ReflectionError, ReflectionPrompt};
