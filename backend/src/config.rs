//! Gateway configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `AUTH_GATEWAY_*` environment variables over
//! the defaults applied by the accessors below.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ports::{FIXTURE_USER_ID, FIXTURE_USER_NAME};
use crate::domain::{LoginRequest, UserId, UserRecord};

/// Configuration for the `auth-gateway` binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AUTH_GATEWAY")]
pub struct GatewaySettings {
    /// Identifier to authenticate.
    pub user_id: Option<i64>,
    /// Deliver the outcome through a continuation instead of the sink.
    #[ortho_config(default = false)]
    pub callback: bool,
    /// Emit logs as JSON.
    #[ortho_config(default = false)]
    pub json_logs: bool,
    /// Identifier of the record seeded into the directory.
    pub directory_user_id: Option<i64>,
    /// Display name of the record seeded into the directory.
    pub directory_user_name: Option<String>,
}

impl GatewaySettings {
    /// Build the login request, falling back to the fixture user.
    #[must_use]
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest::new(self.user_id.map_or(FIXTURE_USER_ID, UserId::new))
    }

    /// Build the record seeded into the directory, falling back to the
    /// fixture user.
    #[must_use]
    pub fn directory_record(&self) -> UserRecord {
        let id = self.directory_user_id.map_or(FIXTURE_USER_ID, UserId::new);
        let name = self
            .directory_user_name
            .as_deref()
            .unwrap_or(FIXTURE_USER_NAME);
        UserRecord::new(id, name)
    }
}
