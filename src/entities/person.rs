// 👤 Person Entity - Identity + mutable money balance
//
// "A person's name is a VALUE (can change), their UUID is IDENTITY (never changes)"
//
// Equality deliberately ignores identity: two persons are equal when
// their full name and age match, and hashing keys on the full name
// alone. An unkeyed sort orders by age, youngest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::job::Job;

// ============================================================================
// PERSON ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Stable identity (UUID) - NEVER changes
    pub id: String,

    // ========================================================================
    // VALUES (can change over time)
    // ========================================================================
    pub first_name: String,
    pub last_name: String,
    pub age: u32,

    /// Money in the bank; changes only through spend_money / give_salary
    balance: f64,

    /// Current role; Unemployed until someone hires this person
    job: Job,

    pub created_at: DateTime<Utc>,
}

impl Person {
    /// Create a new person with a zero balance and no job
    pub fn new(first_name: &str, last_name: &str, age: u32) -> Self {
        Person {
            id: uuid::Uuid::new_v4().to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            balance: 0.0,
            job: Job::Unemployed,
            created_at: Utc::now(),
        }
    }

    /// Full name, the equality/hash key: "{first} {last}"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// How much money the person has in the bank
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// The person spends this amount of money
    ///
    /// Non-positive amounts are ignored; the balance never moves on a
    /// zero or negative spend.
    pub fn spend_money(&mut self, amount: f64) {
        if amount > 0.0 {
            self.balance -= amount;
        }
    }

    /// The person receives this amount as salary
    ///
    /// Non-positive amounts are ignored, so paying an Unemployed figure
    /// of 0 leaves the balance untouched.
    pub fn give_salary(&mut self, amount: f64) {
        if amount > 0.0 {
            self.balance += amount;
        }
    }

    pub fn job(&self) -> Job {
        self.job
    }

    pub fn set_job(&mut self, job: Job) {
        self.job = job;
    }
}

// Equality keys on (full name, age); identity, balance, and job are
// values that may differ between otherwise-equal persons.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.full_name() == other.full_name() && self.age == other.age
    }
}

impl Eq for Person {}

// Hash keys on the full name only, consistent with Eq: equal persons
// share a full name.
impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_name().hash(state);
    }
}

// Age first so an unkeyed sort orders youngest to oldest; full name
// breaks ties to stay consistent with Eq.
impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.age
            .cmp(&other.age)
            .then_with(|| self.full_name().cmp(&other.full_name()))
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Person")?;
        writeln!(f, "  Name: {}", self.full_name())?;
        writeln!(f, "  Age: {}", self.age)?;
        writeln!(f, "  Balance: {}", self.balance)
    }
}

// ============================================================================
// TESTS
// ============================================================================
