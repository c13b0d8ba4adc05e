//! System lifecycle: actor startup, dependency wiring, graceful shutdown,
//! and tracing setup.

pub mod ordering_system;
pub mod tracing;

pub use ordering_system::OrderingSystem;
pub use tracing::setup_tracing;
