// 🏢 Company Entity + Registry - roster, payroll, monotonic ids
//
// Company ids are creation-order numbers handed out by an explicit
// CompanyRegistry owned by the caller; there is no hidden global
// counter. The Nth company a registry creates gets id N, 1-indexed,
// webshops included.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::job::Job;
use super::person::Person;

// ============================================================================
// COMPANY ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// 1-indexed creation order within the registry that made this company
    pub id: u64,

    pub name: String,

    /// Fixed company-wide salary figure; None means each employee is
    /// paid their job's figure instead
    salary: Option<f64>,

    /// The company owns its roster
    employees: Vec<Person>,

    pub created_at: DateTime<Utc>,
}

impl Company {
    fn new(id: u64, name: &str, salary: Option<f64>) -> Self {
        Company {
            id,
            name: name.to_string(),
            salary,
            employees: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Fixed salary figure, when the company has one
    pub fn salary(&self) -> Option<f64> {
        self.salary
    }

    /// Hire a person into the company, keeping their current job
    pub fn hire(&mut self, person: Person) {
        self.employees.push(person);
    }

    /// Hire a person into the company for a specific role
    pub fn hire_as(&mut self, mut person: Person, job: Job) {
        person.set_job(job);
        self.employees.push(person);
    }

    /// Pay salary to the whole roster
    ///
    /// Each member receives the company's fixed figure when one is set,
    /// otherwise their job's figure. Amounts route through
    /// `give_salary`, so a zero figure (Unemployed) moves nothing.
    pub fn pay_salary(&mut self) {
        for person in &mut self.employees {
            let amount = match self.salary {
                Some(figure) => figure,
                None => person.job().salary(),
            };
            person.give_salary(amount);
        }
    }

    pub fn employees(&self) -> &[Person] {
        &self.employees
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

// Companies hash and compare by id; the roster is workaday state, not
// part of the company's key.
impl PartialEq for Company {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Company {}

impl Hash for Company {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Company")?;
        writeln!(f, "  Name: {}", self.name)?;
        if let Some(figure) = self.salary {
            writeln!(f, "  Salary: {}", figure)?;
        }
        writeln!(f, "  Workers: {}", self.employee_count())
    }
}

// ============================================================================
// WEBSHOP COMPANY
// ============================================================================

/// A company that also carries a product catalogue
///
/// Composition instead of subclassing: the inner Company handles the
/// roster and payroll, the wrapper adds products and extends the
/// printed summary with them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebshopCompany {
    company: Company,
    products: Vec<String>,
}

impl WebshopCompany {
    fn new(company: Company, products: Vec<String>) -> Self {
        WebshopCompany { company, products }
    }

    pub fn id(&self) -> u64 {
        self.company.id
    }

    pub fn name(&self) -> &str {
        &self.company.name
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn company_mut(&mut self) -> &mut Company {
        &mut self.company
    }

    pub fn hire(&mut self, person: Person) {
        self.company.hire(person);
    }

    pub fn hire_as(&mut self, person: Person, job: Job) {
        self.company.hire_as(person, job);
    }

    pub fn pay_salary(&mut self) {
        self.company.pay_salary();
    }

    pub fn employees(&self) -> &[Person] {
        self.company.employees()
    }

    pub fn employee_count(&self) -> usize {
        self.company.employee_count()
    }

    pub fn is_empty(&self) -> bool {
        self.company.is_empty()
    }
}

impl fmt::Display for WebshopCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.company)?;
        writeln!(f, "  Products: {:?}", self.products)
    }
}

// ============================================================================
// COMPANY REGISTRY
// ============================================================================

/// Hands out company ids in creation order
///
/// The registry is the only way to create companies, so the id
/// sequence is complete: no gaps, no duplicates, starting at 1.
#[derive(Debug, Default)]
pub struct CompanyRegistry {
    created: u64,
}

impl CompanyRegistry {
    pub fn new() -> Self {
        CompanyRegistry { created: 0 }
    }

    /// Create a company; the Nth creation gets id N
    pub fn create(&mut self, name: &str, salary: Option<f64>) -> Company {
        self.created += 1;
        Company::new(self.created, name, salary)
    }

    /// Create a webshop company; draws from the same id sequence
    pub fn create_webshop(
        &mut self,
        name: &str,
        salary: Option<f64>,
        products: Vec<String>,
    ) -> WebshopCompany {
        WebshopCompany::new(self.create(name, salary), products)
    }

    /// Number of companies this registry has created so far
    pub fn total_created(&self) -> u64 {
        self.created
    }
}

// ============================================================================
// TESTS
// ============================================================================
