use crate::config::GardenConfig;
use crate::index::DisplayPlant;
use crate::model::Plant;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod water;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_plants: Vec<Plant>,
    pub listed_plants: Vec<DisplayPlant>,
    pub config: Option<GardenConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_plants(mut self, plants: Vec<DisplayPlant>) -> Self {
        self.listed_plants = plants;
        self
    }

    pub fn with_config(mut self, config: GardenConfig) -> Self {
        self.config = Some(config);
        self
    }
}
