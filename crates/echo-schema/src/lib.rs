//! # echo-schema: ECHO Record Validation
//!
//! Validates building lifecycle-carbon assessment records ("ECHO"
//! payloads) and turns them into typed, immutable Rust values.
//!
//! ## Layers
//!
//! - [`sections`]: the fourteen metadata sections (project information,
//!   size, structure, LCA method, inclusions, ...).
//! - [`impacts`]: GWP vectors, life-cycle-stage records and the LCA
//!   results section.
//! - [`record`]: [`NestedEcho`] and [`FlatEcho`], the two equivalent
//!   shapes of a complete record, plus the cross-section invariant.
//! - [`dispatch`]: [`parse`], the single entry point for untyped payloads.
//! - [`export`]: JSON Schema documents generated from the same tables.
//!
//! Every record type is declared once as a constraint table and validated
//! by the generic routine in [`validate`], which reports every violation
//! rather than the first.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//!
//! let err = echo_schema::parse(&json!({"project_name": "Depot"})).unwrap_err();
//! assert_eq!(err.shape, echo_schema::Shape::Flat);
//! assert!(err.to_string().starts_with("payload doesn't match flat schema"));
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `echo-core` internally.
//! - Pure and synchronous: no I/O, no global state. Logging is `tracing`
//!   at `debug`/`trace` level only.

#[macro_use]
mod macros;

pub mod dispatch;
pub mod export;
pub mod impacts;
pub mod record;
pub mod sections;
pub mod validate;

pub use dispatch::{detect_shape, parse, parse_as, EchoRecord, ParseError, Shape, NESTED_MARKER};
pub use export::{json_schema, record_schema};
pub use impacts::{GwpVector, LcaResults, LifeCycleStages};
pub use record::{flat_name_collisions, FlatEcho, NestedEcho, SECTIONS};
pub use validate::{Record, ValidationError, ValidationViolations, Violation, ViolationKind};
