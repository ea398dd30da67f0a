//! Authentication gateway over an asynchronous user directory.
//!
//! - [`domain`]: user model, ports, and the [`domain::AuthenticationGateway`]
//! - [`outbound`]: directory and response-sink adapters
//! - [`config`]: settings for the `auth-gateway` binary

pub mod config;
pub mod domain;
pub mod outbound;

pub use config::GatewaySettings;
