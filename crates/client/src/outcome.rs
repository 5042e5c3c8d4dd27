//! Tagged per-operation results.
//!
//! Non-success HTTP statuses are data for the caller to branch on, not
//! errors, so Insert and Query return these enums instead of bare strings.
//! Delete and Update hand back the raw [`reqwest::StatusCode`] directly and
//! need no type of their own.

use std::fmt;

use reqwest::StatusCode;

/// Result of inserting an entity into a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// HTTP 201: the service created the record and returned its id.
    Created {
        /// Identifier assigned by the service.
        id: String,
    },
    /// HTTP 401: check your application key.
    Unauthorized,
    /// Any other status, including a 201 whose body carried no usable id.
    Failed {
        /// Raw HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status, e.g. `"Not Found"`.
        description: String,
    },
}

impl InsertOutcome {
    pub(crate) fn failed(status: StatusCode) -> Self {
        Self::Failed { status: status.as_u16(), description: describe(status) }
    }
}

impl fmt::Display for InsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { id } => f.write_str(id),
            Self::Unauthorized => f.write_str("Please check your Application Key"),
            Self::Failed { status, description } => write!(f, "{status} {description}"),
        }
    }
}

/// Result of querying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// HTTP 200: the raw response body, left for the caller to parse.
    Results {
        /// Response body text as returned by the service.
        body: String,
    },
    /// HTTP 401: check your application key.
    Unauthorized,
    /// Any other status.
    Failed {
        /// Raw HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        description: String,
    },
}

impl QueryOutcome {
    pub(crate) fn failed(status: StatusCode) -> Self {
        Self::Failed { status: status.as_u16(), description: describe(status) }
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Results { body } => f.write_str(body),
            Self::Unauthorized => f.write_str("Please check your Application Key"),
            Self::Failed { status, description } => write!(f, "{status} {description}"),
        }
    }
}

fn describe(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}
