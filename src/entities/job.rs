// 💼 Job - closed set of roles with fixed salary figures
//
// The role set is closed, so a sum type carries the salary table and
// the per-role work description directly. There is no "unassigned"
// hole: a person without work is `Unemployed`, which earns 0.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// JOB TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Job {
    /// Chief executive
    Ceo,

    /// Software developer
    Programmer,

    /// No employer; earns nothing
    #[default]
    Unemployed,
}

impl Job {
    /// Fixed salary figure for this role
    pub fn salary(&self) -> f64 {
        match self {
            Job::Ceo => 75_000.0,
            Job::Programmer => 45_000.0,
            Job::Unemployed => 0.0,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Job::Ceo => "CEO",
            Job::Programmer => "Programmer",
            Job::Unemployed => "Unemployed",
        }
    }

    /// One-line description of what this role spends the day on
    pub fn do_work(&self) -> &'static str {
        match self {
            Job::Ceo => "Creating a strategy or something",
            Job::Programmer => "Making some code",
            Job::Unemployed => "Searching for work",
        }
    }

    pub fn is_employed(&self) -> bool {
        !matches!(self, Job::Unemployed)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

// ============================================================================
// TESTS
// ============================================================================
