//! Repair shop registry: customers, employees and service tickets.

mod collections;
mod memory_store;
mod seed;
mod store;
mod types;

pub use collections::Registry;
pub use memory_store::InMemoryRegistryStore;
pub use store::{RegistryError, RegistryStore};
pub use types::{
    completion_date, Customer, CustomerDetail, Employee, EmployeeDetail, EntityId,
    NewServiceTicket, ServiceTicket, ServiceTicketDetail, TicketCounts,
};
