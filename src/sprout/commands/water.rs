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
        if !registry.mark_watered(id) {
            continue;
        }
        if let Some(plant) = registry.get(id) {
            result.add_message(CmdMessage::success(format!(
                "Watered: {} (next in {})",
                plant.name,
                super::create::days(plant.frequency)
            )));
            result.affected_plants.push(plant.clone());
        }
    }

    Ok(result)
}
