//! The three registry collections and the operations over them.

use chrono::{Datelike, Months, NaiveDate};

use super::{
    Customer, CustomerDetail, Employee, EmployeeDetail, EntityId, NewServiceTicket,
    RegistryError, ServiceTicket, ServiceTicketDetail, TicketCounts,
};

/// Customers, employees and service tickets, each kept in insertion order.
///
/// Lookups are linear scans. Operations that depend on the current date take
/// it as an argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    tickets: Vec<ServiceTicket>,
}

impl Registry {
    pub fn new(
        customers: Vec<Customer>,
        employees: Vec<Employee>,
        tickets: Vec<ServiceTicket>,
    ) -> Self {
        Self {
            customers,
            employees,
            tickets,
        }
    }

    fn find_customer(&self, id: EntityId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    fn find_employee(&self, id: EntityId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    fn find_ticket_mut(&mut self, id: EntityId) -> Option<&mut ServiceTicket> {
        self.tickets.iter_mut().find(|t| t.id == id)
    }

    fn filter_tickets(&self, predicate: impl Fn(&ServiceTicket) -> bool) -> Vec<ServiceTicket> {
        self.tickets.iter().filter(|t| predicate(t)).cloned().collect()
    }

    // ========================================================================
    // Service tickets
    // ========================================================================

    pub fn tickets(&self) -> &[ServiceTicket] {
        &self.tickets
    }

    pub fn ticket_detail(&self, id: EntityId) -> Result<ServiceTicketDetail, RegistryError> {
        let ticket = self
            .tickets
            .iter()
            .find(|t| t.id == id)
            .ok_or(RegistryError::TicketNotFound(id))?;

        Ok(ServiceTicketDetail {
            employee: ticket
                .employee_id
                .and_then(|employee_id| self.find_employee(employee_id))
                .cloned(),
            customer: self.find_customer(ticket.customer_id).cloned(),
            ticket: ticket.clone(),
        })
    }

    pub fn open_emergencies(&self) -> Vec<ServiceTicket> {
        self.filter_tickets(|t| t.is_open() && t.emergency)
    }

    pub fn prioritized_tickets(&self) -> Vec<ServiceTicket> {
        let mut open = self.filter_tickets(ServiceTicket::is_open);
        // Stable: emergencies first, then unassigned before assigned.
        open.sort_by_key(|t| (!t.emergency, t.is_assigned()));
        open
    }

    pub fn unassigned_tickets(&self) -> Vec<ServiceTicket> {
        self.filter_tickets(|t| !t.is_assigned())
    }

    pub fn past_tickets(&self) -> Vec<ServiceTicket> {
        let mut completed = self.filter_tickets(|t| !t.is_open());
        completed.sort_by_key(|t| t.date_completed);
        completed
    }

    /// Ids continue from the highest existing id; an empty registry starts at 1.
    pub fn next_ticket_id(&self) -> EntityId {
        self.tickets.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    pub fn create_ticket(&mut self, new_ticket: NewServiceTicket) -> ServiceTicket {
        let ticket = new_ticket.into_ticket(self.next_ticket_id());
        self.tickets.push(ticket.clone());
        ticket
    }

    pub fn complete_ticket(
        &mut self,
        id: EntityId,
        today: NaiveDate,
    ) -> Result<ServiceTicket, RegistryError> {
        let ticket = self
            .find_ticket_mut(id)
            .ok_or(RegistryError::TicketNotFound(id))?;

        if ticket.date_completed.is_none() {
            ticket.date_completed = Some(today);
        }

        Ok(ticket.clone())
    }

    pub fn replace_ticket(
        &mut self,
        id: EntityId,
        ticket: ServiceTicket,
    ) -> Result<ServiceTicket, RegistryError> {
        if ticket.id != id {
            return Err(RegistryError::IdMismatch {
                path_id: id,
                body_id: ticket.id,
            });
        }

        let slot = self
            .find_ticket_mut(id)
            .ok_or(RegistryError::TicketNotFound(id))?;
        *slot = ticket;

        Ok(slot.clone())
    }

    pub fn delete_ticket(&mut self, id: EntityId) -> usize {
        let before = self.tickets.len();
        self.tickets.retain(|t| t.id != id);
        before - self.tickets.len()
    }

    pub fn ticket_counts(&self) -> TicketCounts {
        let open = self.tickets.iter().filter(|t| t.is_open()).count();
        TicketCounts {
            open,
            completed: self.tickets.len() - open,
        }
    }

    // ========================================================================
    // Employees
    // ========================================================================

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn employee_detail(&self, id: EntityId) -> Result<EmployeeDetail, RegistryError> {
        let employee = self
            .find_employee(id)
            .ok_or(RegistryError::EmployeeNotFound(id))?;

        Ok(EmployeeDetail {
            employee: employee.clone(),
            service_tickets: self.filter_tickets(|t| t.employee_id == Some(id)),
        })
    }

    pub fn available_employees(&self) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|e| {
                !self
                    .tickets
                    .iter()
                    .any(|t| t.employee_id == Some(e.id) && t.is_open())
            })
            .cloned()
            .collect()
    }

    pub fn employee_customers(&self, id: EntityId) -> Result<Vec<Customer>, RegistryError> {
        if self.find_employee(id).is_none() {
            return Err(RegistryError::EmployeeNotFound(id));
        }

        Ok(self
            .customers
            .iter()
            .filter(|c| {
                self.tickets
                    .iter()
                    .any(|t| t.customer_id == c.id && t.employee_id == Some(id))
            })
            .cloned()
            .collect())
    }

    /// Counts tickets completed in the calendar month before `today`. Ties go
    /// to the employee listed first.
    pub fn employee_of_the_month(&self, today: NaiveDate) -> Result<Employee, RegistryError> {
        let last_month = today.checked_sub_months(Months::new(1)).unwrap_or(today);
        let completed_last_month = |employee_id: EntityId| {
            self.tickets
                .iter()
                .filter(|t| t.employee_id == Some(employee_id))
                .filter_map(|t| t.date_completed)
                .filter(|d| d.year() == last_month.year() && d.month() == last_month.month())
                .count()
        };

        let mut best: Option<(&Employee, usize)> = None;
        for employee in &self.employees {
            let count = completed_last_month(employee.id);
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((employee, count)),
            }
        }

        best.map(|(employee, _)| employee.clone())
            .ok_or(RegistryError::NoEmployees)
    }

    // ========================================================================
    // Customers
    // ========================================================================

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn customer_detail(&self, id: EntityId) -> Result<CustomerDetail, RegistryError> {
        let customer = self
            .find_customer(id)
            .ok_or(RegistryError::CustomerNotFound(id))?;

        Ok(CustomerDetail {
            customer: customer.clone(),
            service_tickets: self.filter_tickets(|t| t.customer_id == id),
        })
    }

    /// A customer is inactive when more than a year has passed since their
    /// latest completed ticket. Customers with no completed ticket always are.
    pub fn inactive_customers(&self, today: NaiveDate) -> Vec<Customer> {
        let cutoff = today.checked_sub_months(Months::new(12)).unwrap_or(NaiveDate::MIN);

        self.customers
            .iter()
            .filter(|c| {
                let latest = self
                    .tickets
                    .iter()
                    .filter(|t| t.customer_id == c.id)
                    .filter_map(|t| t.date_completed)
                    .max()
                    .unwrap_or(NaiveDate::MIN);
                latest < cutoff
            })
            .cloned()
            .collect()
    }
}
