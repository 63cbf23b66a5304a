//! Customer API handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use honeyrae_core::{Customer, CustomerDetail, EntityId};
use std::sync::Arc;

use super::ApiError;
use crate::state::AppState;

/// List all customers
pub async fn list_customers(State(state): State<Arc<AppState>>) -> Json<Vec<Customer>> {
    Json(state.registry().list_customers())
}

/// Get a customer with all of their tickets
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<CustomerDetail>, ApiError> {
    Ok(Json(state.registry().get_customer(id)?))
}

/// Customers without a completed ticket in the past year
pub async fn inactive(State(state): State<Arc<AppState>>) -> Json<Vec<Customer>> {
    Json(state.registry().inactive_customers())
}
