use axum::Json;
use smartpos_shared::plans::{pricing_plans, PricingPlan};

/// `GET /api/plans`
pub async fn get_plans() -> Json<&'static [PricingPlan]> {
    Json(pricing_plans())
}
