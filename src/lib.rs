#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Event Relay
//!
//! HTTP listener and typed dispatch core for continuous-delivery lifecycle
//! event notifications.
//!
//! ## Overview
//!
//! Downstream automation (a continuous-delivery controller, a ticketing
//! integration, a chat notifier) wants to react uniformly to a fixed
//! vocabulary of lifecycle events without re-implementing HTTP listening
//! and envelope parsing. Event Relay receives structured event envelopes
//! over HTTP, identifies each event's semantic type from its type tag,
//! decodes the type-specific payload, and invokes a single registered
//! callback with the decoded value.
//!
//! ## Architecture
//!
//! Dispatch is data-driven: a closed, immutable schema table maps each of
//! the six recognized type identifiers to a decode function. The
//! [`EventDispatcher`] resolves the tag, decodes the payload, and forwards
//! it; each envelope ends in exactly one of three terminal states —
//! rejected as unrecognized, rejected as undecodable, or delivered with the
//! callback's own result. There is no persistence, no retry, and no
//! ordering guarantee across events.
//!
//! ## Module Organization
//!
//! - [`events`] - Envelope, event-type identifiers, and payload shapes
//! - [`registry`] - Closed schema table keyed by type identifier
//! - [`dispatcher`] - Decode-and-forward core
//! - [`web`] - axum transport: listener, intake handler, status mapping
//! - [`config`] - Listener configuration from the environment
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use event_relay::{EventDispatcher, EventPayload, ListenerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let dispatcher = Arc::new(EventDispatcher::new());
//!     dispatcher.register_callback(|payload| {
//!         if let EventPayload::NewArtifact(artifact) = payload {
//!             println!("new artifact for {}: {}", artifact.service, artifact.image);
//!         }
//!         Ok(())
//!     });
//!
//!     event_relay::web::listen(ListenerConfig::from_env()?, dispatcher).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod logging;
pub mod registry;
pub mod web;

pub use config::ListenerConfig;
pub use dispatcher::{DispatchCallback, EventDispatcher};
pub use error::{BoxError, RelayError, Result};
pub use events::{
    ConfigurationChangedPayload, DeploymentFinishedPayload, Envelope, EvaluationDetails,
    EvaluationDonePayload, EvaluationWindow, EventPayload, EventType, IndicatorResult,
    NewArtifactPayload, ObjectiveCounts, ProblemPayload, TestsFinishedPayload, Violation,
};
pub use registry::{schema_for, PayloadSchema};
pub use web::listen;
