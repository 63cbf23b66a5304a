//! Employee API handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use honeyrae_core::{Customer, Employee, EmployeeDetail, EntityId};
use std::sync::Arc;

use super::ApiError;
use crate::state::AppState;

/// List all employees
pub async fn list_employees(State(state): State<Arc<AppState>>) -> Json<Vec<Employee>> {
    Json(state.registry().list_employees())
}

/// Employees with no open ticket
pub async fn available(State(state): State<Arc<AppState>>) -> Json<Vec<Employee>> {
    Json(state.registry().available_employees())
}

/// Get an employee with their assigned tickets
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<EmployeeDetail>, ApiError> {
    Ok(Json(state.registry().get_employee(id)?))
}

/// Customers an employee has tickets for
pub async fn customers(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(state.registry().employee_customers(id)?))
}

/// Most tickets completed last month
pub async fn of_the_month(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Employee>, ApiError> {
    Ok(Json(state.registry().employee_of_the_month()?))
}
