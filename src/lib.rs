#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # MealDrop
//!
//! > **A single-user food-ordering workflow on resource-oriented actors.**
//!
//! Build a cart, validate it against the menu, charge a payment method,
//! record the order, and manage history, favorites, and post-delivery
//! reviews. Each stateful resource lives in its own actor, so every
//! read-modify-write on a user's data happens sequentially inside one task.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why actors for a shopping cart?
//!
//! The profile ledger is classic shared mutable state: appending an order,
//! flipping a status, and gating a review all read current state before
//! writing. Putting the aggregate behind a message channel gives:
//! - **Single-writer discipline**: no locks, no torn read-modify-write.
//! - **Type safety**: a cart command cannot be sent to the profile actor.
//! - **One engine**: the message loop is written once in [`framework`] and
//!   reused for both aggregates.
//!
//! ### Transactional checkout
//!
//! `confirm_order` runs validate → price → charge → record → clear. The
//! ordering is load-bearing: a declined charge changes nothing, and a paid
//! order is appended to the ledger before the cart is cleared, so a store
//! failure can never silently drop a charged order. See [`checkout`].
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each aggregate defines its own error enum (`CartError`, `ProfileError`).
//! Domain errors cross the actor channel boxed and are downcast back to the
//! concrete enum in the client wrappers, so callers match on variants, not
//! message strings.
//!
//! ### 2. Async Context Injection
//! Dependencies arrive at `run()`, not at construction. The profile actor
//! receives its [`store::ProfileStore`] this way; the cart needs nothing.
//!
//! ### 3. Write-Through Persistence
//! The profile actor mirrors its full state to the store after every
//! mutation. Hydration happens once, in the `on_create` hook.
//!
//! ### 4. Observability
//! `tracing` with structured fields everywhere; each operation logs under an
//! `aggregate` field. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`AggregateActor`](framework::AggregateActor) and the
//! [`Aggregate`](framework::Aggregate) trait: plumbing only, no domain rules.
//!
//! ### 2. The Domain ([`model`], [`cart_actor`], [`profile_actor`])
//! Pure data types in [`model`]; the two `Aggregate` implementations with
//! their command enums and errors in the actor modules.
//!
//! ### 3. The Interface ([`clients`])
//! Domain clients ([`CartClient`](clients::CartClient),
//! [`ProfileClient`](clients::ProfileClient)) that hide message passing and
//! unwrap command results into plain values.
//!
//! ### 4. The Workflow ([`checkout`])
//! [`OrderPlacement`](checkout::OrderPlacement) composes cart, menu, payment,
//! and profile into the confirmation sequence.
//!
//! ### 5. The Boundaries ([`menu`], [`payment`], [`store`])
//! One-method traits for the catalog and the payment gateway, and the
//! profile persistence contract with in-memory and JSON file adapters.
//!
//! ### 6. The Conductor ([`lifecycle`])
//! [`OrderingSystem`](lifecycle::OrderingSystem) starts the actors, wires the
//! store, and shuts everything down gracefully.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo flow with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the test suite
//! cargo test
//! ```

pub mod cart_actor;
pub mod checkout;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod payment;
pub mod profile_actor;
pub mod store;
