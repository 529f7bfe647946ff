use crate::domain::{Fuels, PlantType, PowerPlant};

use super::round_mw;

/// Tons of CO₂ emitted per MWh produced by a gas-fired plant. Fixed model
/// parameter, deliberately not configurable.
pub const CO2_TONS_PER_MWH: f64 = 0.3;

/// Per-request view of a plant: marginal cost and usable capacity under one
/// request's fuel context. Built fresh for every request and discarded once
/// the plan is assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantCandidate {
    pub name: String,
    /// Marginal cost of production (euro/MWh); zero for wind
    pub cost: f64,
    /// Minimum output when committed (MW), copied unscaled from the plant
    pub pmin: f64,
    /// Capacity after availability derating, rounded to one decimal (MW).
    /// Can fall below pmin for wind plants at low availability; the
    /// commitment search has to cope with that.
    pub effective_pmax: f64,
}

impl PlantCandidate {
    /// Normalize a plant against the request's fuel context.
    ///
    /// Capacity is rounded to one decimal here, before anything downstream
    /// sees it: the commitment tolerance and the allocator's cumulative
    /// rounding both assume capacities already on the one-decimal grid.
    pub fn new(plant: &PowerPlant, fuels: &Fuels) -> Self {
        let (cost, pmax) = match plant.plant_type {
            PlantType::WindTurbine => (0.0, plant.pmax * fuels.wind_percent / 100.0),
            PlantType::GasFired => (
                fuels.gas_price / plant.efficiency + CO2_TONS_PER_MWH * fuels.co2_price,
                plant.pmax,
            ),
            PlantType::Turbojet => (fuels.kerosine_price / plant.efficiency, plant.pmax),
        };

        Self {
            name: plant.name.clone(),
            cost,
            pmin: plant.pmin,
            effective_pmax: round_mw(pmax),
        }
    }
}
