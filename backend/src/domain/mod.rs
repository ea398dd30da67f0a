//! Domain primitives, ports, and services.
//!
//! Purpose: define the user model, the ports adapters implement, and the
//! authentication gateway that drives them. Nothing in here knows how a
//! directory is stored or how a response is encoded.
//!
//! Public surface:
//! - UserId / UserRecord: identifier and immutable user value.
//! - LoginRequest: inbound request naming the user to authenticate.
//! - AuthenticationGateway: service exposing sink and continuation logins.
//! - ports: `UserDirectory`, `ResponseSink`, and their fixture adapters.

mod auth;
mod authentication_gateway;
pub mod ports;
mod user;

pub use self::auth::LoginRequest;
pub use self::authentication_gateway::AuthenticationGateway;
pub use self::user::{UserId, UserRecord};
