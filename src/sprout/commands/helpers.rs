use crate::error::{Result, SproutError};
use crate::index::PlantSelector;
use crate::model::PlantId;
use crate::persistence::Persistence;
use crate::registry::Registry;

/// Resolves selectors to plant ids against the current list.
///
/// Fails without side effects if any selector matches nothing. Plants picked
/// by more than one selector are returned once.
pub fn resolve_selectors<P: Persistence>(
    registry: &Registry<P>,
    selectors: &[PlantSelector],
) -> Result<Vec<PlantId>> {
    if selectors.is_empty() {
        return Err(SproutError::Api("No plant selected".to_string()));
    }

    let plants = registry.list();
    let mut ids = Vec::new();
    for selector in selectors {
        let hits = selector.matches(plants);
        if hits.is_empty() {
            return Err(SproutError::Api(match selector {
                PlantSelector::Position(n) => format!("No plant at position {}", n),
                PlantSelector::Name(name) => format!("No plant matching \"{}\"", name),
            }));
        }
        for (_, plant) in hits {
            if !ids.contains(&plant.id) {
                ids.push(plant.id);
            }
        }
    }
    Ok(ids)
}
