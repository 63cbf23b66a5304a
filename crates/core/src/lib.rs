pub mod clock;
pub mod config;
pub mod registry;
pub mod testing;

pub use clock::{Clock, SystemClock};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, LogFormat,
    LoggingConfig, RegistryConfig, ServerConfig,
};
pub use registry::{
    Customer, CustomerDetail, Employee, EmployeeDetail, EntityId, InMemoryRegistryStore,
    NewServiceTicket, Registry, RegistryError, RegistryStore, ServiceTicket, ServiceTicketDetail,
    TicketCounts,
};
