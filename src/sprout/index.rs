//! # Display Positions and Selectors
//!
//! Plant ids are creation timestamps, which nobody wants to type. The CLI
//! instead refers to plants by their 1-based position in the newest-first list
//! (`sprout water 2`) or by a piece of their name (`sprout water basil`).
//!
//! Positions are recomputed from the current list on every invocation, so they
//! shift when a plant is added or removed. Commands always resolve selectors to
//! [`PlantId`]s before mutating anything.

use crate::model::{Plant, PlantId};
use crate::status::{days_until, status_at, Status};
use chrono::{DateTime, TimeZone};
use std::fmt;

/// A user input to select plants, either by list position or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlantSelector {
    Position(usize),
    Name(String),
}

impl fmt::Display for PlantSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlantSelector::Position(n) => write!(f, "{}", n),
            PlantSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl PlantSelector {
    /// Plants (with their positions) this selector refers to.
    pub fn matches<'a>(&self, plants: &'a [Plant]) -> Vec<(usize, &'a Plant)> {
        match self {
            PlantSelector::Position(n) => plants
                .get(n.wrapping_sub(1))
                .map(|p| vec![(*n, p)])
                .unwrap_or_default(),
            PlantSelector::Name(term) => {
                let needle = term.to_lowercase();
                plants
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.name.to_lowercase().contains(&needle))
                    .map(|(i, p)| (i + 1, p))
                    .collect()
            }
        }
    }
}

/// Turns raw CLI arguments into selectors.
///
/// If every input is a positive integer they are all positions. Otherwise the
/// inputs are joined with spaces into a single name query, so
/// `sprout water peace lily` works without quoting.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<PlantSelector> {
    let positions: Option<Vec<usize>> = inputs
        .iter()
        .map(|s| s.as_ref().trim().parse::<usize>().ok().filter(|n| *n > 0))
        .collect();

    match positions {
        Some(positions) if !positions.is_empty() => {
            positions.into_iter().map(PlantSelector::Position).collect()
        }
        _ => {
            let term = inputs
                .iter()
                .map(|s| s.as_ref().trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<&str>>()
                .join(" ");
            if term.is_empty() {
                Vec::new()
            } else {
                vec![PlantSelector::Name(term)]
            }
        }
    }
}

/// A plant as presented to a user: its list position and derived status.
#[derive(Debug, Clone)]
pub struct DisplayPlant {
    pub plant: Plant,
    pub position: usize,
    pub status: Status,
    /// Calendar days until the next watering; negative when overdue.
    pub days_until: i64,
}

impl DisplayPlant {
    pub fn id(&self) -> PlantId {
        self.plant.id
    }
}

/// Assigns positions and derives status for every plant, keeping list order.
pub fn index_plants<Tz: TimeZone>(plants: &[Plant], reference: &DateTime<Tz>) -> Vec<DisplayPlant> {
    plants
        .iter()
        .enumerate()
        .map(|(i, plant)| DisplayPlant {
            plant: plant.clone(),
            position: i + 1,
            status: status_at(plant, reference),
            days_until: days_until(plant, reference),
        })
        .collect()
}
