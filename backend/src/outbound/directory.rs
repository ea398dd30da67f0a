//! In-memory `UserDirectory` adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{LookupError, UserDirectory};
use crate::domain::{UserId, UserRecord};

/// Read-only directory backed by a map built at construction time.
///
/// Later records with a duplicate identifier replace earlier ones.
///
/// # Examples
/// ```
/// use auth_gateway::domain::UserRecord;
/// use auth_gateway::outbound::InMemoryUserDirectory;
///
/// let directory = InMemoryUserDirectory::new([
///     UserRecord::new(123, "Obi-wan"),
///     UserRecord::new(66, "Cody"),
/// ]);
/// assert_eq!(directory.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    records: HashMap<UserId, UserRecord>,
}

impl InMemoryUserDirectory {
    /// Seed the directory with `records`.
    pub fn new(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.id(), record))
            .collect();
        Self { records }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: UserId) -> Result<UserRecord, LookupError> {
        tokio::task::yield_now().await;

        let outcome = self
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| LookupError::not_found(id));
        debug!(user_id = %id, found = outcome.is_ok(), "in-memory directory lookup");
        outcome
    }
}
