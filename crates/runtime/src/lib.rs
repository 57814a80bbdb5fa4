//! Runtime orchestration for the space sugoroku turn engine.
//!
//! This crate wires together oracle access and the session worker into a
//! cohesive runtime API. Consumers embed [`Runtime`] to start sessions,
//! request rolls, and subscribe to events through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`workers`] keeps background tasks internal to the crate
//! - [`oracle`] adapts static content for the engine
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle, SessionSnapshot};
pub use events::{Event, EventBus, SessionEvent, Topic};
pub use oracle::OracleManager;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
