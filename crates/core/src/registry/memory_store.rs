//! In-memory registry store guarded by a single lock.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use super::{
    Customer, CustomerDetail, Employee, EmployeeDetail, EntityId, NewServiceTicket, Registry,
    RegistryError, RegistryStore, ServiceTicket, ServiceTicketDetail, TicketCounts,
};
use crate::clock::{Clock, SystemClock};

/// Registry store that keeps all collections in process memory.
///
/// One `RwLock` covers customers, employees and tickets together: queries
/// share the read lock, commands take the write lock.
pub struct InMemoryRegistryStore {
    registry: RwLock<Registry>,
    clock: Arc<dyn Clock>,
}

impl InMemoryRegistryStore {
    /// Create a store over `registry` using the system clock.
    pub fn new(registry: Registry) -> Self {
        Self::with_clock(registry, Arc::new(SystemClock))
    }

    /// Create a store over `registry` with a custom clock.
    pub fn with_clock(registry: Registry, clock: Arc<dyn Clock>) -> Self {
        Self {
            registry: RwLock::new(registry),
            clock,
        }
    }

    /// Create an empty store.
    pub fn empty() -> Self {
        Self::new(Registry::default())
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current registry state.
    pub fn snapshot(&self) -> Registry {
        self.read().clone()
    }
}

impl RegistryStore for InMemoryRegistryStore {
    fn list_tickets(&self) -> Vec<ServiceTicket> {
        self.read().tickets().to_vec()
    }

    fn get_ticket(&self, id: EntityId) -> Result<ServiceTicketDetail, RegistryError> {
        self.read().ticket_detail(id).inspect_err(|e| debug!("{}", e))
    }

    fn open_emergencies(&self) -> Vec<ServiceTicket> {
        self.read().open_emergencies()
    }

    fn prioritized_tickets(&self) -> Vec<ServiceTicket> {
        self.read().prioritized_tickets()
    }

    fn unassigned_tickets(&self) -> Vec<ServiceTicket> {
        self.read().unassigned_tickets()
    }

    fn past_tickets(&self) -> Vec<ServiceTicket> {
        self.read().past_tickets()
    }

    fn create_ticket(&self, new_ticket: NewServiceTicket) -> ServiceTicket {
        let ticket = self.write().create_ticket(new_ticket);
        info!(
            ticket_id = ticket.id,
            customer_id = ticket.customer_id,
            emergency = ticket.emergency,
            "Created service ticket"
        );
        ticket
    }

    fn complete_ticket(&self, id: EntityId) -> Result<ServiceTicket, RegistryError> {
        let today = self.clock.today();
        let ticket = self.write().complete_ticket(id, today)?;
        info!(
            ticket_id = id,
            date_completed = ?ticket.date_completed,
            "Completed service ticket"
        );
        Ok(ticket)
    }

    fn replace_ticket(
        &self,
        id: EntityId,
        ticket: ServiceTicket,
    ) -> Result<ServiceTicket, RegistryError> {
        let ticket = self.write().replace_ticket(id, ticket)?;
        info!(ticket_id = id, "Replaced service ticket");
        Ok(ticket)
    }

    fn delete_ticket(&self, id: EntityId) -> usize {
        let removed = self.write().delete_ticket(id);
        info!(ticket_id = id, removed, "Deleted service ticket");
        removed
    }

    fn ticket_counts(&self) -> TicketCounts {
        self.read().ticket_counts()
    }

    fn list_employees(&self) -> Vec<Employee> {
        self.read().employees().to_vec()
    }

    fn get_employee(&self, id: EntityId) -> Result<EmployeeDetail, RegistryError> {
        self.read().employee_detail(id).inspect_err(|e| debug!("{}", e))
    }

    fn available_employees(&self) -> Vec<Employee> {
        self.read().available_employees()
    }

    fn employee_customers(&self, id: EntityId) -> Result<Vec<Customer>, RegistryError> {
        self.read()
            .employee_customers(id)
            .inspect_err(|e| debug!("{}", e))
    }

    fn employee_of_the_month(&self) -> Result<Employee, RegistryError> {
        let today = self.clock.today();
        self.read().employee_of_the_month(today)
    }

    fn list_customers(&self) -> Vec<Customer> {
        self.read().customers().to_vec()
    }

    fn get_customer(&self, id: EntityId) -> Result<CustomerDetail, RegistryError> {
        self.read().customer_detail(id).inspect_err(|e| debug!("{}", e))
    }

    fn inactive_customers(&self) -> Vec<Customer> {
        let today = self.clock.today();
        self.read().inactive_customers(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, FixedClock};
    use chrono::NaiveDate;
    use std::thread;

    fn create_test_store(today: NaiveDate) -> InMemoryRegistryStore {
        InMemoryRegistryStore::with_clock(Registry::sample(), Arc::new(FixedClock::new(today)))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_then_get() {
        let store = create_test_store(date(2024, 5, 20));
        let created = store.create_ticket(fixtures::new_ticket(1, "Test"));

        let fetched = store.get_ticket(created.id).unwrap();
        assert_eq!(fetched.ticket.description, "Test");
        assert!(fetched.ticket.date_completed.is_none());
        assert_eq!(fetched.customer.unwrap().id, 1);
    }

    #[test]
    fn test_complete_uses_clock() {
        let store = create_test_store(date(2024, 5, 20));
        let ticket = store.complete_ticket(2).unwrap();
        assert_eq!(ticket.date_completed, Some(date(2024, 5, 20)));

        let again = store.complete_ticket(2).unwrap();
        assert_eq!(again.date_completed, ticket.date_completed);
    }

    #[test]
    fn test_employee_of_the_month_uses_clock() {
        let store = create_test_store(date(2024, 5, 20));
        store.complete_ticket(5).unwrap();

        // Completed this month: only counts once the clock moves on.
        assert_eq!(store.employee_of_the_month().unwrap().id, 1);

        let next_month = InMemoryRegistryStore::with_clock(
            store.snapshot(),
            Arc::new(FixedClock::new(date(2024, 6, 2))),
        );
        assert_eq!(next_month.employee_of_the_month().unwrap().id, 3);
    }

    #[test]
    fn test_inactive_customers_uses_clock() {
        let store = create_test_store(date(2022, 1, 1));
        let inactive: Vec<_> = store.inactive_customers().iter().map(|c| c.id).collect();
        assert_eq!(inactive, vec![1, 2]);

        let later = InMemoryRegistryStore::with_clock(
            Registry::sample(),
            Arc::new(FixedClock::new(date(2023, 1, 1))),
        );
        assert_eq!(later.inactive_customers().len(), 3);
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryRegistryStore::empty();
        assert!(store.list_tickets().is_empty());
        assert_eq!(
            store.employee_of_the_month(),
            Err(RegistryError::NoEmployees)
        );
        assert_eq!(store.create_ticket(fixtures::new_ticket(1, "first")).id, 1);
    }

    #[test]
    fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(create_test_store(date(2024, 5, 20)));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..25)
                        .map(|j| {
                            store
                                .create_ticket(fixtures::new_ticket(1, &format!("{}-{}", i, j)))
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<EntityId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 200);
        assert_eq!(store.list_tickets().len(), 207);
        assert_eq!(ids.first(), Some(&8));
        assert_eq!(ids.last(), Some(&207));
    }

    #[test]
    fn test_delete_missing_ticket_is_not_an_error() {
        let store = create_test_store(date(2024, 5, 20));
        assert_eq!(store.delete_ticket(404), 0);
        assert_eq!(store.delete_ticket(7), 1);
        assert_eq!(store.ticket_counts().open, 5);
    }
}
