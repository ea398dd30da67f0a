//! Port for writing a single outbound login response.
//!
//! A sink stands in for an HTTP response writer: the gateway hands it one
//! value per login and never looks at how the value is encoded.

use serde::{Deserialize, Serialize};

use crate::domain::UserRecord;

/// Value written to a [`ResponseSink`] by a login.
///
/// Serialises untagged, so a success is the bare record object and a
/// failure is a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoginResponse {
    /// The authenticated user, passed through unchanged.
    User(UserRecord),
    /// Human-readable failure message.
    Message(String),
}

impl LoginResponse {
    /// Return the record when the login succeeded.
    #[must_use]
    pub const fn user(&self) -> Option<&UserRecord> {
        match self {
            Self::User(record) => Some(record),
            Self::Message(_) => None,
        }
    }

    /// Return the failure message when the login failed.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::User(_) => None,
            Self::Message(message) => Some(message.as_str()),
        }
    }
}

impl From<UserRecord> for LoginResponse {
    fn from(value: UserRecord) -> Self {
        Self::User(value)
    }
}

/// Outbound response writer.
///
/// Implementations accept both the success and failure shapes; they have no
/// error channel back to the gateway.
#[cfg_attr(test, mockall::automock)]
pub trait ResponseSink: Send + Sync {
    /// Write `response` to the underlying transport.
    fn send(&self, response: LoginResponse);
}
