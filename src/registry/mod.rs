//! # Schema Registry
//!
//! Registry infrastructure for payload shape resolution. The registry is a
//! fixed table, separate from the dispatcher so that shape lookup stays a
//! pure function of the wire identifier.

pub mod schema_registry;

pub use schema_registry::{schema_for, schemas, PayloadSchema};
