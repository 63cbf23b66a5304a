//! Sample data loaded at startup.

use chrono::NaiveDate;

use super::{Customer, Employee, EntityId, Registry, ServiceTicket};

fn customer(id: EntityId, name: &str, address: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        address: address.to_string(),
    }
}

fn employee(id: EntityId, name: &str, specialty: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        specialty: specialty.to_string(),
    }
}

fn ticket(
    id: EntityId,
    customer_id: EntityId,
    employee_id: Option<EntityId>,
    description: &str,
    emergency: bool,
) -> ServiceTicket {
    ServiceTicket {
        id,
        customer_id,
        employee_id,
        description: description.to_string(),
        emergency,
        date_completed: None,
    }
}

impl Registry {
    /// The shop's sample customers, employees and tickets.
    pub fn sample() -> Self {
        let customers = vec![
            customer(1, "Canton Thurgood", "541 Pine Grass Lane"),
            customer(2, "Georgina Florentine", "3 Nobility Drive"),
            customer(3, "Candelabra Muddlebuster", "10938 Hwy 40 W"),
        ];

        let employees = vec![
            employee(1, "Split", "Motor Refurb"),
            employee(2, "Hannah Marshall", "Window Repair"),
            employee(3, "Colonel Mustard", "Pugnacious Litigation"),
        ];

        let tickets = vec![
            ServiceTicket {
                date_completed: NaiveDate::from_ymd_opt(2021, 12, 12),
                ..ticket(1, 3, Some(1), "Timing Belt Replacement", false)
            },
            ticket(2, 2, None, "Pistons Seized", true),
            ticket(3, 3, None, "Torn Rotator Cuff", false),
            ticket(4, 1, Some(2), "Chipped Windscreen", false),
            ticket(5, 1, Some(3), "Chipped Rearscreen", false),
            ticket(
                6,
                1,
                Some(2),
                "Attempted Vehicle Theft with Full Glass Loss",
                true,
            ),
            ticket(7, 1, None, "Minor Graffiti", true),
        ];

        Self::new(customers, employees, tickets)
    }
}
