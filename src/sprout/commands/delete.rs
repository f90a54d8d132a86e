use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::PlantSelector;
use crate::persistence::Persistence;
use crate::registry::Registry;

use super::helpers::resolve_selectors;

pub fn run<P: Persistence>(
    registry: &mut Registry<P>,
    selectors: &[PlantSelector],
) -> Result<CmdResult> {
    let ids = resolve_selectors(registry, selectors)?;
    let mut result = CmdResult::default();

    for id in ids {
        let Some(plant) = registry.get(id).cloned() else {
            continue;
        };
        if registry.delete(id) {
            result.add_message(CmdMessage::success(format!("Plant deleted: {}", plant.name)));
            result.affected_plants.push(plant);
        }
    }

    Ok(result)
}
