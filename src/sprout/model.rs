use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest watering interval a plant may have, about a century.
pub const MAX_FREQUENCY: u32 = 36_500;

/// Stable identifier of a plant. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(pub u64);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked plant.
///
/// Field names follow the persisted record layout (`id`, `name`, `frequency`,
/// `lastWatered`), with `lastWatered` as an RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    /// Watering interval in whole days, in `1..=MAX_FREQUENCY`.
    pub frequency: u32,
    pub last_watered: DateTime<Utc>,
}

impl Plant {
    pub fn new(
        id: PlantId,
        name: impl Into<String>,
        frequency: u32,
        last_watered: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            frequency,
            last_watered,
        }
    }

    /// `last_watered` advanced by `frequency` days, saturating at the latest
    /// representable instant.
    pub fn next_watering(&self) -> DateTime<Utc> {
        self.checked_next_watering().unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    fn checked_next_watering(&self) -> Option<DateTime<Utc>> {
        self.last_watered
            .checked_add_signed(Duration::days(i64::from(self.frequency)))
    }

    /// Whether the stored fields satisfy the plant invariants.
    pub fn is_valid(&self) -> bool {
        (1..=MAX_FREQUENCY).contains(&self.frequency)
            && !self.name.trim().is_empty()
            && self.checked_next_watering().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn next_watering_adds_whole_days() {
        let plant = Plant::new(PlantId(1), "Fern", 3, at(2024, 2, 27, 18));
        assert_eq!(plant.next_watering(), at(2024, 3, 1, 18));
    }

    #[test]
    fn serializes_with_record_field_names() {
        let plant = Plant::new(PlantId(1717000000000), "Basil", 2, at(2024, 5, 29, 16));
        let json = serde_json::to_value(&plant).unwrap();

        assert_eq!(json["id"], 1717000000000u64);
        assert_eq!(json["name"], "Basil");
        assert_eq!(json["frequency"], 2);
        assert_eq!(json["lastWatered"], "2024-05-29T16:00:00Z");
    }

    #[test]
    fn parses_millisecond_iso_timestamps() {
        let raw = r#"{"id":1,"name":"Mint","frequency":4,"lastWatered":"2024-05-29T16:00:00.123Z"}"#;
        let plant: Plant = serde_json::from_str(raw).unwrap();
        assert_eq!(plant.last_watered.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn zero_frequency_is_invalid() {
        let plant = Plant::new(PlantId(1), "Cactus", 0, at(2024, 1, 1, 0));
        assert!(!plant.is_valid());
    }

    #[test]
    fn frequency_above_the_limit_is_invalid() {
        let at_limit = Plant::new(PlantId(1), "Oak", MAX_FREQUENCY, at(2024, 1, 1, 0));
        let over = Plant::new(PlantId(1), "Oak", MAX_FREQUENCY + 1, at(2024, 1, 1, 0));
        assert!(at_limit.is_valid());
        assert!(!over.is_valid());
    }

    #[test]
    fn huge_frequency_saturates_instead_of_panicking() {
        let plant = Plant::new(PlantId(1), "Oak", 1_000_000_000, at(2024, 1, 1, 0));
        assert_eq!(plant.next_watering(), DateTime::<Utc>::MAX_UTC);
        assert!(!plant.is_valid());
    }

    #[test]
    fn blank_name_is_invalid() {
        let plant = Plant::new(PlantId(1), "   ", 2, at(2024, 1, 1, 0));
        assert!(!plant.is_valid());
    }
}
