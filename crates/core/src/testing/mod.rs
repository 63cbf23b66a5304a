//! Testing utilities: a controllable clock and entity fixtures.
//!
//! # Example
//!
//! ```rust,ignore
//! use honeyrae_core::testing::{fixtures, FixedClock};
//!
//! let clock = Arc::new(FixedClock::ymd(2024, 3, 15));
//! let store = InMemoryRegistryStore::with_clock(Registry::sample(), clock.clone());
//!
//! store.complete_ticket(2)?;
//! clock.set(clock.today() + Months::new(1));
//! ```

use std::sync::{Mutex, PoisonError};

use chrono::NaiveDate;

use crate::clock::Clock;

/// Clock that reports a date chosen by the test.
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    /// Clock fixed at the given calendar date.
    ///
    /// # Panics
    ///
    /// Panics if the date does not exist.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date"))
    }

    /// Move the clock to another date.
    pub fn set(&self, today: NaiveDate) {
        *self.today.lock().unwrap_or_else(PoisonError::into_inner) = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::NaiveDate;

    use crate::registry::{Customer, Employee, EntityId, NewServiceTicket, ServiceTicket};

    pub fn customer(id: EntityId, name: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            address: format!("{} Test Street", id),
        }
    }

    pub fn employee(id: EntityId, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            specialty: "General Repair".to_string(),
        }
    }

    /// Unassigned, non-emergency open ticket.
    pub fn open_ticket(id: EntityId, customer_id: EntityId) -> ServiceTicket {
        ServiceTicket {
            id,
            customer_id,
            employee_id: None,
            description: format!("Ticket {}", id),
            emergency: false,
            date_completed: None,
        }
    }

    /// Unassigned ticket completed on `date`.
    pub fn completed_ticket(id: EntityId, customer_id: EntityId, date: NaiveDate) -> ServiceTicket {
        ServiceTicket {
            date_completed: Some(date),
            ..open_ticket(id, customer_id)
        }
    }

    /// Assign `ticket` to an employee.
    pub fn assigned(ticket: ServiceTicket, employee_id: EntityId) -> ServiceTicket {
        ServiceTicket {
            employee_id: Some(employee_id),
            ..ticket
        }
    }

    /// Creation payload for an unassigned, non-emergency ticket.
    pub fn new_ticket(customer_id: EntityId, description: &str) -> NewServiceTicket {
        NewServiceTicket {
            customer_id,
            employee_id: None,
            description: description.to_string(),
            emergency: false,
            date_completed: None,
        }
    }
}
