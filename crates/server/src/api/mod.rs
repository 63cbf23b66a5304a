pub mod customers;
pub mod employees;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod service_tickets;

pub use error::ApiError;
pub use routes::create_router;
