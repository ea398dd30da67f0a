//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod response_sink;
mod user_directory;

#[cfg(test)]
pub use response_sink::MockResponseSink;
pub use response_sink::{LoginResponse, ResponseSink};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{
    FIXTURE_USER_ID, FIXTURE_USER_NAME, FixtureUserDirectory, LookupError, UserDirectory,
};
