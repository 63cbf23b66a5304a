use axum::{
    middleware,
    routing::{get, patch},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{customers, employees, handlers, middleware::metrics_middleware, service_tickets};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health, config and metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Service tickets
        .route(
            "/servicetickets",
            get(service_tickets::list_tickets).post(service_tickets::create_ticket),
        )
        .route(
            "/servicetickets/openemergencies",
            get(service_tickets::open_emergencies),
        )
        .route("/servicetickets/prioritized", get(service_tickets::prioritized))
        .route("/servicetickets/unassigned", get(service_tickets::unassigned))
        .route("/servicetickets/past", get(service_tickets::past))
        .route(
            "/servicetickets/{id}",
            get(service_tickets::get_ticket)
                .put(service_tickets::replace_ticket)
                .delete(service_tickets::delete_ticket),
        )
        .route(
            "/servicetickets/{id}/complete",
            patch(service_tickets::complete_ticket),
        )
        // Employees
        .route("/employees", get(employees::list_employees))
        .route("/employees/available", get(employees::available))
        .route("/employees/of-the-month", get(employees::of_the_month))
        .route("/employees/{id}", get(employees::get_employee))
        .route("/employees/{id}/customers", get(employees::customers))
        // Customers
        .route("/customers", get(customers::list_customers))
        .route("/customers/inactive", get(customers::inactive))
        .route("/customers/{id}", get(customers::get_customer))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
