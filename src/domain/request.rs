use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::{Validate, ValidationError};

use super::plant::{Fuels, PowerPlant};

/// A complete dispatch request: the load to meet plus the plant fleet and
/// fuel context it must be met with.
///
/// Validation is the boundary's job; the dispatch core assumes a request
/// that has already passed `validate()`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_unique_names))]
pub struct DispatchRequest {
    /// Total load to meet (MW)
    #[validate(range(min = 0.0))]
    pub load: f64,

    #[validate(nested)]
    pub fuels: Fuels,

    #[validate(nested)]
    pub powerplants: Vec<PowerPlant>,
}

fn validate_unique_names(request: &DispatchRequest) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for plant in &request.powerplants {
        if !seen.insert(plant.name.as_str()) {
            return Err(ValidationError::new("duplicate_plant_name"));
        }
    }
    Ok(())
}
