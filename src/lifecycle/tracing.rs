//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole system:
//! hierarchical spans from the client wrappers down into the actor loops,
//! with levels configured through the `RUST_LOG` environment variable.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`);
//! log lines carry an `aggregate` field instead, so filtering by resource
//! stays possible without long module paths.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full request payloads at function entry points
//! RUST_LOG=debug cargo run
//!
//! # Filter to the actor plumbing only
//! RUST_LOG=mealdrop::framework=debug cargo run
//! ```
//!
//! ## What a confirmation looks like
//!
//! With `RUST_LOG=info`, one `confirm_order` produces roughly:
//!
//! ```text
//! INFO Created aggregate="Cart" id=cart_1 size=1
//! INFO Created aggregate="Profile" id=profile_1 size=1
//! INFO ordering:confirm_order: Order placed order_id="ORD-1A2B3C4D5E" total=19.29
//! INFO Command ok aggregate="Profile" id=profile_1
//! INFO Command ok aggregate="Cart" id=cart_1
//! ```
//!
//! With `RUST_LOG=debug` the same flow also shows each command payload once,
//! recorded via the `?field` syntax as a structured `Debug` field.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths are noise here; the aggregate field identifies the resource
        .compact() // Compact format shows spans inline (e.g., "ordering:confirm_order")
        .init();
}
