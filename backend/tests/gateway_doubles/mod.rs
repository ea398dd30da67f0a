//! Recording test doubles for the gateway's driven ports.
//!
//! `StubUserDirectory` returns a configured outcome and records every
//! identifier it was asked for; `RecordingResponseSink` records every value
//! written to it. Both are cheap to clone and share their state.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use auth_gateway::domain::ports::{LoginResponse, LookupError, ResponseSink, UserDirectory};
use auth_gateway::domain::{UserId, UserRecord};

/// Configurable success or failure outcome for `StubUserDirectory`.
#[derive(Clone)]
pub(crate) enum DirectoryResponse {
    Found(UserRecord),
    Missing(LookupError),
}

#[derive(Clone)]
pub(crate) struct StubUserDirectory {
    calls: Arc<Mutex<Vec<UserId>>>,
    response: Arc<Mutex<DirectoryResponse>>,
}

impl StubUserDirectory {
    pub(crate) fn new(response: DirectoryResponse) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new(response)),
        }
    }

    pub(crate) fn calls(&self) -> Vec<UserId> {
        self.calls.lock().expect("directory calls lock").clone()
    }

    pub(crate) fn set_response(&self, response: DirectoryResponse) {
        *self.response.lock().expect("directory response lock") = response;
    }
}

#[async_trait]
impl UserDirectory for StubUserDirectory {
    async fn find_by_id(&self, id: UserId) -> Result<UserRecord, LookupError> {
        self.calls.lock().expect("directory calls lock").push(id);
        tokio::task::yield_now().await;
        match self.response.lock().expect("directory response lock").clone() {
            DirectoryResponse::Found(record) => Ok(record),
            DirectoryResponse::Missing(error) => Err(error),
        }
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingResponseSink {
    sent: Arc<Mutex<Vec<LoginResponse>>>,
}

impl RecordingResponseSink {
    pub(crate) fn sent(&self) -> Vec<LoginResponse> {
        self.sent.lock().expect("sink lock").clone()
    }
}

impl ResponseSink for RecordingResponseSink {
    fn send(&self, response: LoginResponse) {
        self.sent.lock().expect("sink lock").push(response);
    }
}
