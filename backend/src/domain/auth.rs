//! Authentication request primitives.
//!
//! Keep inbound payload parsing outside the gateway: adapters deserialise a
//! [`LoginRequest`] and hand it to the service untouched.

use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Inbound login request carrying the identifier to authenticate.
///
/// Example JSON: `{"userId":123}`
///
/// # Examples
/// ```
/// use auth_gateway::domain::{LoginRequest, UserId};
///
/// let request: LoginRequest = serde_json::from_str(r#"{"userId":123}"#).unwrap();
/// assert_eq!(request.user_id(), UserId::new(123));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    user_id: UserId,
}

impl LoginRequest {
    /// Build a request for `user_id`.
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// Identifier the caller wants to authenticate as.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }
}
