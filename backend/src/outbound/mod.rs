//! Outbound adapters implementing domain ports.
//!
//! - **directory**: in-memory `UserDirectory` seeded at construction time
//! - **sink**: `ResponseSink` writing JSON lines to any `std::io::Write`
//!
//! Adapters are thin translators that convert between domain types and
//! their storage or wire representations. They contain no business logic.

pub mod directory;
pub mod sink;

pub use directory::InMemoryUserDirectory;
pub use sink::JsonLinesSink;
