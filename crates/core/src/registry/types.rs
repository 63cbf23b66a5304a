//! Registry entity types and joined views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier shared by customers, employees and service tickets.
pub type EntityId = i32;

// ============================================================================
// Entities
// ============================================================================

/// A customer of the shop. Read-only through the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
    pub address: String,
}

/// A shop employee. Read-only through the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub specialty: String,
}

/// A repair request raised for a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicket {
    pub id: EntityId,
    pub customer_id: EntityId,
    /// Assigned employee (None = unassigned).
    #[serde(default)]
    pub employee_id: Option<EntityId>,
    pub description: String,
    #[serde(default)]
    pub emergency: bool,
    /// Completion date (None = open).
    #[serde(default, with = "completion_date")]
    pub date_completed: Option<NaiveDate>,
}

impl ServiceTicket {
    /// Whether the ticket still awaits completion.
    pub fn is_open(&self) -> bool {
        self.date_completed.is_none()
    }

    /// Whether an employee is assigned.
    pub fn is_assigned(&self) -> bool {
        self.employee_id.is_some()
    }
}

/// Payload for creating a ticket. Any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceTicket {
    pub customer_id: EntityId,
    #[serde(default)]
    pub employee_id: Option<EntityId>,
    pub description: String,
    #[serde(default)]
    pub emergency: bool,
    #[serde(default, with = "completion_date")]
    pub date_completed: Option<NaiveDate>,
}

impl NewServiceTicket {
    pub(crate) fn into_ticket(self, id: EntityId) -> ServiceTicket {
        ServiceTicket {
            id,
            customer_id: self.customer_id,
            employee_id: self.employee_id,
            description: self.description,
            emergency: self.emergency,
            date_completed: self.date_completed,
        }
    }
}

// ============================================================================
// Joined Views
// ============================================================================

/// A ticket with its customer and employee resolved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicketDetail {
    #[serde(flatten)]
    pub ticket: ServiceTicket,
    pub employee: Option<Employee>,
    pub customer: Option<Customer>,
}

/// An employee with the tickets assigned to them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    #[serde(flatten)]
    pub employee: Employee,
    pub service_tickets: Vec<ServiceTicket>,
}

/// A customer with all of their tickets.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetail {
    #[serde(flatten)]
    pub customer: Customer,
    pub service_tickets: Vec<ServiceTicket>,
}

/// Open/completed ticket totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketCounts {
    pub open: usize,
    pub completed: usize,
}

// ============================================================================
// Date Serialization
// ============================================================================

/// Completion dates are written as `YYYY-MM-DD`. On input, full timestamps
/// (RFC 3339 or naive `YYYY-MM-DDTHH:MM:SS`) are accepted and truncated to
/// their date.
pub mod completion_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse(&raw).map_err(de::Error::custom))
            .transpose()
    }

    /// Parse a date or timestamp string down to its calendar date.
    pub fn parse(raw: &str) -> Result<NaiveDate, String> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            return Ok(date);
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Ok(timestamp.date_naive());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|timestamp| timestamp.date())
            .map_err(|_| format!("invalid completion date: {}", raw))
    }
}
