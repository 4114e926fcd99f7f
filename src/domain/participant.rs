use crate::domain::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A party to a project contract.
///
/// Closed set: a project pairs exactly one client with one freelancer.
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Participant {
    Client {
        name: String,
        email: String,
        company: String,
    },
    Freelancer {
        name: String,
        email: String,
        skills: String,
        hourly_rate: Money,
    },
}

impl Participant {
    pub fn client(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self::Client {
            name: name.into(),
            email: email.into(),
            company: company.into(),
        }
    }

    pub fn freelancer(
        name: impl Into<String>,
        email: impl Into<String>,
        skills: impl Into<String>,
        hourly_rate: Money,
    ) -> Self {
        Self::Freelancer {
            name: name.into(),
            email: email.into(),
            skills: skills.into(),
            hourly_rate,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Client { name, .. } | Self::Freelancer { name, .. } => name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Self::Client { email, .. } | Self::Freelancer { email, .. } => email,
        }
    }

    /// Only freelancers bill by the hour.
    pub fn hourly_rate(&self) -> Option<Money> {
        match self {
            Self::Client { .. } => None,
            Self::Freelancer { hourly_rate, .. } => Some(*hourly_rate),
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client {
                name,
                email,
                company,
            } => {
                write!(f, "Client: {name} ({company}) - {email}")
            }
            Self::Freelancer {
                name,
                email,
                skills,
                hourly_rate,
            } => {
                write!(
                    f,
                    "Freelancer: {name} - Skills: {skills} - Rate: {hourly_rate}/hr - {email}"
                )
            }
        }
    }
}
