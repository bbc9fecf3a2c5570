// Workforce Domain Model - Core Library
// Persons, jobs, companies with payroll, and roster reporting

pub mod entities;
pub mod fifo;
pub mod reports;

// Re-export commonly used types
pub use entities::{Company, CompanyRegistry, Job, Person, WebshopCompany};
pub use fifo::Fifo;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
