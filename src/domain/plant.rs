use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Supported plant technologies (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    GasFired,
    Turbojet,
    WindTurbine,
}

impl PlantType {
    /// Plants that burn fuel and therefore need a meaningful efficiency
    pub fn is_thermal(self) -> bool {
        matches!(self, PlantType::GasFired | PlantType::Turbojet)
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::GasFired => "gasfired",
            Self::Turbojet => "turbojet",
            Self::WindTurbine => "windturbine",
        };
        write!(f, "{s}")
    }
}

/// A single power plant as declared in a dispatch request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_plant))]
pub struct PowerPlant {
    #[validate(length(min = 1, message = "plant name must not be empty"))]
    pub name: String,

    #[serde(rename = "type")]
    pub plant_type: PlantType,

    /// Fraction of fuel energy converted to electricity; only meaningful
    /// for gas-fired and turbojet plants
    pub efficiency: f64,

    /// Minimum sustained output once running (MW)
    #[validate(range(min = 0.0))]
    pub pmin: f64,

    /// Maximum sustained output (MW)
    #[validate(range(min = 0.0))]
    pub pmax: f64,
}

fn validate_plant(plant: &PowerPlant) -> Result<(), ValidationError> {
    if plant.pmax < plant.pmin {
        return Err(ValidationError::new("pmax_below_pmin"));
    }
    if plant.plant_type.is_thermal() && plant.efficiency <= 0.0 {
        return Err(ValidationError::new("non_positive_efficiency"));
    }
    Ok(())
}

/// Fuel prices and wind availability, one record per dispatch request.
///
/// Wire names follow the established payload format; the snake_case field
/// names are accepted as aliases.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Fuels {
    #[serde(rename = "gas(euro/MWh)", alias = "gas_price")]
    #[validate(range(min = 0.0))]
    pub gas_price: f64,

    #[serde(rename = "kerosine(euro/MWh)", alias = "kerosine_price")]
    #[validate(range(min = 0.0))]
    pub kerosine_price: f64,

    #[serde(rename = "co2(euro/ton)", alias = "co2_price")]
    #[validate(range(min = 0.0))]
    pub co2_price: f64,

    #[serde(rename = "wind(%)", alias = "wind_percent")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub wind_percent: f64,
}

/// One line of the production plan: the output assigned to a plant (MW),
/// rounded to one decimal, zero when the plant is not committed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPlan {
    pub name: String,
    pub p: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gas_plant() -> PowerPlant {
        PowerPlant {
            name: "gasfiredbig1".to_string(),
            plant_type: PlantType::GasFired,
            efficiency: 0.53,
            pmin: 100.0,
            pmax: 460.0,
        }
    }

    #[test]
    fn test_plant_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&PlantType::GasFired).unwrap(),
            "\"gasfired\""
        );
        assert_eq!(
            serde_json::to_string(&PlantType::WindTurbine).unwrap(),
            "\"windturbine\""
        );
        let parsed: PlantType = serde_json::from_str("\"turbojet\"").unwrap();
        assert_eq!(parsed, PlantType::Turbojet);
    }

    #[test]
    fn test_plant_type_thermal() {
        assert!(PlantType::GasFired.is_thermal());
        assert!(PlantType::Turbojet.is_thermal());
        assert!(!PlantType::WindTurbine.is_thermal());
    }

    #[test]
    fn test_valid_plant_passes() {
        assert!(gas_plant().validate().is_ok());
    }

    #[test]
    fn test_pmax_below_pmin_rejected() {
        let mut plant = gas_plant();
        plant.pmax = 50.0;
        assert!(plant.validate().is_err());
    }

    #[test]
    fn test_zero_efficiency_rejected_for_thermal() {
        let mut plant = gas_plant();
        plant.efficiency = 0.0;
        assert!(plant.validate().is_err());
    }

    #[test]
    fn test_zero_efficiency_allowed_for_wind() {
        let plant = PowerPlant {
            name: "windpark1".to_string(),
            plant_type: PlantType::WindTurbine,
            efficiency: 0.0,
            pmin: 0.0,
            pmax: 150.0,
        };
        assert!(plant.validate().is_ok());
    }

    #[test]
    fn test_fuels_wire_names() {
        let json = r#"{
            "gas(euro/MWh)": 13.4,
            "kerosine(euro/MWh)": 50.8,
            "co2(euro/ton)": 20,
            "wind(%)": 60
        }"#;
        let fuels: Fuels = serde_json::from_str(json).unwrap();
        assert_eq!(fuels.gas_price, 13.4);
        assert_eq!(fuels.kerosine_price, 50.8);
        assert_eq!(fuels.co2_price, 20.0);
        assert_eq!(fuels.wind_percent, 60.0);
    }

    #[test]
    fn test_fuels_snake_case_aliases() {
        let json = r#"{
            "gas_price": 13.4,
            "kerosine_price": 50.8,
            "co2_price": 20,
            "wind_percent": 60
        }"#;
        let fuels: Fuels = serde_json::from_str(json).unwrap();
        assert_eq!(fuels.gas_price, 13.4);
        assert_eq!(fuels.wind_percent, 60.0);
    }

    #[test]
    fn test_fuels_wind_percent_range() {
        let fuels = Fuels {
            gas_price: 13.4,
            kerosine_price: 50.8,
            co2_price: 20.0,
            wind_percent: 120.0,
        };
        assert!(fuels.validate().is_err());
    }

    #[test]
    fn test_production_plan_wire_shape() {
        let entry = ProductionPlan {
            name: "windpark1".to_string(),
            p: 21.6,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"windpark1","p":21.6}"#);
    }
}
