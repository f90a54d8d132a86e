use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MAX_FREQUENCY;
use crate::persistence::Persistence;
use crate::registry::Registry;

pub fn run<P: Persistence>(registry: &mut Registry<P>, name: &str, frequency: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(id) = registry.create(name, frequency) else {
        result.add_message(CmdMessage::warning(format!(
            "Plant not added: name must not be blank and frequency must be 1 to {} days",
            MAX_FREQUENCY
        )));
        return Ok(result);
    };

    if let Some(plant) = registry.get(id) {
        result.add_message(CmdMessage::success(format!(
            "Plant added: {} (every {})",
            plant.name,
            days(plant.frequency)
        )));
        result.affected_plants.push(plant.clone());
    }
    Ok(result)
}

pub(crate) fn days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}
