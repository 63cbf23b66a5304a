//! Service ticket API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use honeyrae_core::{EntityId, NewServiceTicket, ServiceTicket, ServiceTicketDetail};
use std::sync::Arc;

use super::ApiError;
use crate::metrics::TICKETS_CREATED_TOTAL;
use crate::state::AppState;

// ============================================================================
// Queries
// ============================================================================

/// List all tickets
pub async fn list_tickets(State(state): State<Arc<AppState>>) -> Json<Vec<ServiceTicket>> {
    Json(state.registry().list_tickets())
}

/// Get a ticket with its customer and employee
pub async fn get_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<ServiceTicketDetail>, ApiError> {
    Ok(Json(state.registry().get_ticket(id)?))
}

/// Open emergency tickets
pub async fn open_emergencies(State(state): State<Arc<AppState>>) -> Json<Vec<ServiceTicket>> {
    Json(state.registry().open_emergencies())
}

/// Open tickets in work order
pub async fn prioritized(State(state): State<Arc<AppState>>) -> Json<Vec<ServiceTicket>> {
    Json(state.registry().prioritized_tickets())
}

/// Tickets without an employee
pub async fn unassigned(State(state): State<Arc<AppState>>) -> Json<Vec<ServiceTicket>> {
    Json(state.registry().unassigned_tickets())
}

/// Completed tickets, oldest first
pub async fn past(State(state): State<Arc<AppState>>) -> Json<Vec<ServiceTicket>> {
    Json(state.registry().past_tickets())
}

// ============================================================================
// Commands
// ============================================================================

/// Create a new ticket
pub async fn create_ticket(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewServiceTicket>,
) -> Json<ServiceTicket> {
    let ticket = state.registry().create_ticket(body);
    TICKETS_CREATED_TOTAL.inc();
    Json(ticket)
}

/// Mark a ticket completed today
pub async fn complete_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<ServiceTicket>, ApiError> {
    Ok(Json(state.registry().complete_ticket(id)?))
}

/// Replace a ticket entirely
pub async fn replace_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
    Json(body): Json<ServiceTicket>,
) -> Result<Json<ServiceTicket>, ApiError> {
    Ok(Json(state.registry().replace_ticket(id, body)?))
}

/// Delete a ticket (no error when it does not exist)
pub async fn delete_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> StatusCode {
    state.registry().delete_ticket(id);
    StatusCode::NO_CONTENT
}
