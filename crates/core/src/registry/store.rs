//! Registry storage trait and error type.

use thiserror::Error;

use super::{
    Customer, CustomerDetail, Employee, EmployeeDetail, EntityId, NewServiceTicket,
    ServiceTicket, ServiceTicketDetail, TicketCounts,
};

/// Error type for registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Service ticket not found: {0}")]
    TicketNotFound(EntityId),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(EntityId),

    #[error("Customer not found: {0}")]
    CustomerNotFound(EntityId),

    #[error("Ticket id in body ({body_id}) does not match id in path ({path_id})")]
    IdMismatch {
        path_id: EntityId,
        body_id: EntityId,
    },

    #[error("No employees registered")]
    NoEmployees,
}

/// Trait for registry storage backends.
///
/// Every method runs to completion against one consistent snapshot of the
/// three collections.
pub trait RegistryStore: Send + Sync {
    // Service tickets

    /// All tickets in insertion order.
    fn list_tickets(&self) -> Vec<ServiceTicket>;

    /// A ticket with its customer and employee attached.
    fn get_ticket(&self, id: EntityId) -> Result<ServiceTicketDetail, RegistryError>;

    /// Open tickets flagged as emergencies.
    fn open_emergencies(&self) -> Vec<ServiceTicket>;

    /// Open tickets, emergencies first, unassigned before assigned.
    fn prioritized_tickets(&self) -> Vec<ServiceTicket>;

    /// Tickets without an assigned employee.
    fn unassigned_tickets(&self) -> Vec<ServiceTicket>;

    /// Completed tickets, oldest completion first.
    fn past_tickets(&self) -> Vec<ServiceTicket>;

    /// Store a new ticket under the next free id.
    fn create_ticket(&self, new_ticket: NewServiceTicket) -> ServiceTicket;

    /// Mark a ticket completed today. Completed tickets are left untouched.
    fn complete_ticket(&self, id: EntityId) -> Result<ServiceTicket, RegistryError>;

    /// Overwrite a ticket entirely with `ticket`, whose id must equal `id`.
    fn replace_ticket(
        &self,
        id: EntityId,
        ticket: ServiceTicket,
    ) -> Result<ServiceTicket, RegistryError>;

    /// Remove every ticket with this id. Returns how many were removed.
    fn delete_ticket(&self, id: EntityId) -> usize;

    /// Open and completed ticket totals.
    fn ticket_counts(&self) -> TicketCounts;

    // Employees

    fn list_employees(&self) -> Vec<Employee>;

    /// An employee with their assigned tickets attached.
    fn get_employee(&self, id: EntityId) -> Result<EmployeeDetail, RegistryError>;

    /// Employees without any open assigned ticket.
    fn available_employees(&self) -> Vec<Employee>;

    /// Distinct customers served by an employee.
    fn employee_customers(&self, id: EntityId) -> Result<Vec<Customer>, RegistryError>;

    /// Employee with the most tickets completed last calendar month.
    fn employee_of_the_month(&self) -> Result<Employee, RegistryError>;

    // Customers

    fn list_customers(&self) -> Vec<Customer>;

    /// A customer with all of their tickets attached.
    fn get_customer(&self, id: EntityId) -> Result<CustomerDetail, RegistryError>;

    /// Customers with no completed ticket in the past year.
    fn inactive_customers(&self) -> Vec<Customer>;
}
