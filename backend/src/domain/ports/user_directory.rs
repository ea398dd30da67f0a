//! Driven port resolving user identifiers to records.
//!
//! The gateway only ever talks to this trait, so a real storage backend can
//! replace the fixture without touching the service, and tests can supply
//! deterministic doubles.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{UserId, UserRecord};

use super::define_port_error;

define_port_error! {
    /// Failures reported by [`UserDirectory`] adapters.
    pub enum LookupError {
        /// No record matches the requested identifier.
        NotFound { id: UserId } => "User not found",
    }
}

/// Port for resolving an identifier to a [`UserRecord`].
///
/// # Completion contract
///
/// - Implementations must not resolve on the first poll: callers can never
///   observe the outcome inside the turn that created the lookup.
/// - Each lookup resolves once, to exactly one of a record or an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the record stored under `id`.
    async fn find_by_id(&self, id: UserId) -> Result<UserRecord, LookupError>;
}

/// Identifier of the single record served by [`FixtureUserDirectory`].
pub const FIXTURE_USER_ID: UserId = UserId::new(123);
/// Display name of the single record served by [`FixtureUserDirectory`].
pub const FIXTURE_USER_NAME: &str = "Obi-wan";

/// Fixture directory holding exactly one user.
///
/// Stands in for a database query; swap in a storage-backed adapter for
/// anything beyond demonstrations.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserDirectory;

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn find_by_id(&self, id: UserId) -> Result<UserRecord, LookupError> {
        tokio::task::yield_now().await;

        if id == FIXTURE_USER_ID {
            Ok(UserRecord::new(FIXTURE_USER_ID, FIXTURE_USER_NAME))
        } else {
            debug!(user_id = %id, "fixture directory has no matching record");
            Err(LookupError::not_found(id))
        }
    }
}
