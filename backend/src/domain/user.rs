//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable numeric user identifier.
///
/// Serialises transparently as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User record resolved by a [`UserDirectory`](crate::domain::ports::UserDirectory).
///
/// ## Invariants
/// - Records are immutable once built; adapters hand out clones.
///
/// # Examples
/// ```
/// use auth_gateway::domain::{UserId, UserRecord};
///
/// let record = UserRecord::new(123, "Obi-wan");
/// assert_eq!(record.id(), UserId::new(123));
/// assert_eq!(record.name(), "Obi-wan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRecord {
    id: UserId,
    name: String,
}

impl UserRecord {
    /// Build a record from its identifier and display name.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Stable user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
