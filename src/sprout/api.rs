//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for UI
//! clients. It normalizes raw user input (selector strings) and dispatches to
//! `commands/*.rs`; it holds no business logic and does no I/O of its own.
//!
//! `GardenApi<P: Persistence>` is generic over the persistence hook:
//! - Production: `GardenApi<KvPersistence<FileStore>>`
//! - Testing: `GardenApi<KvPersistence<MemStore>>` or `NoopStore`

use crate::commands;
use crate::error::Result;
use crate::index::parse_selectors;
use crate::persistence::Persistence;
use crate::registry::Registry;
use crate::status::Status;
use chrono::Local;
use std::path::PathBuf;

/// The main API facade for sprout operations.
pub struct GardenApi<P: Persistence> {
    registry: Registry<P>,
    config_dir: PathBuf,
}

impl<P: Persistence> GardenApi<P> {
    pub fn new(registry: Registry<P>, config_dir: PathBuf) -> Self {
        Self {
            registry,
            config_dir,
        }
    }

    pub fn create_plant(&mut self, name: &str, frequency: i64) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.registry, name, frequency)
    }

    pub fn water_plants<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors);
        commands::water::run(&mut self.registry, &selectors)
    }

    pub fn delete_plants<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors);
        commands::delete::run(&mut self.registry, &selectors)
    }

    /// Lists plants with status taken against today's local calendar day.
    pub fn list_plants(&self, status: Option<Status>) -> Result<commands::CmdResult> {
        let reference = self.registry.now().with_timezone(&Local);
        commands::list::run(&self.registry, status, &reference)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn registry(&self) -> &Registry<P> {
        &self.registry
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
