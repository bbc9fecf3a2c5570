// Entity Models - persons, jobs, companies
//
// Each entity couples a stable identity with mutable values. Persons
// carry UUID identity; companies get creation-order ids from an
// explicit CompanyRegistry.

pub mod company;
pub mod job;
pub mod person;

pub use company::{Company, CompanyRegistry, WebshopCompany};
pub use job::Job;
pub use person::Person;
