use axum::Json;
use validator::Validate;

use crate::{
    api::error::ApiError,
    dispatch,
    domain::{DispatchRequest, ProductionPlan},
};

/// POST /productionplan - Compute the production plan for a dispatch request
///
/// The response body is a bare array of `{name, p}` entries in merit order,
/// the shape existing consumers of the plan expect. An unsatisfiable load is
/// not an error: it yields a plan with every plant at zero.
pub async fn production_plan(
    Json(request): Json<DispatchRequest>,
) -> Result<Json<Vec<ProductionPlan>>, ApiError> {
    request.validate()?;

    tracing::info!(
        load = request.load,
        plants = request.powerplants.len(),
        "computing production plan"
    );

    Ok(Json(dispatch::plan(&request)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Fuels, PlantType, PowerPlant};

    fn request(load: f64) -> DispatchRequest {
        DispatchRequest {
            load,
            fuels: Fuels {
                gas_price: 20.0,
                kerosine_price: 50.0,
                co2_price: 10.0,
                wind_percent: 50.0,
            },
            powerplants: vec![PowerPlant {
                name: "gasfiredbig1".to_string(),
                plant_type: PlantType::GasFired,
                efficiency: 0.5,
                pmin: 100.0,
                pmax: 400.0,
            }],
        }
    }

    #[tokio::test]
    async fn test_handler_returns_plan() {
        let Json(body) = production_plan(Json(request(150.0))).await.unwrap();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].name, "gasfiredbig1");
        assert_eq!(body[0].p, 150.0);
    }

    #[tokio::test]
    async fn test_handler_rejects_degenerate_input() {
        let mut req = request(150.0);
        req.powerplants[0].efficiency = 0.0;
        let err = production_plan(Json(req)).await.unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_unsatisfiable_load_is_not_an_error() {
        let Json(body) = production_plan(Json(request(900.0))).await.unwrap();
        assert_eq!(body[0].p, 0.0);
    }
}
