//! # echo-core: Foundational Types for the ECHO Schema
//!
//! Leaf crate of the workspace. It defines the value domains and the
//! declarative constraint descriptors that every ECHO record is built from;
//! `echo-schema` assembles them into section, result and composite records.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enumerated domains.** Every categorical field is a Rust enum
//!    generated together with its literal table, so `serde`, `FromStr` and the
//!    validator's membership check cannot disagree.
//!
//! 2. **Constraints are data.** Bounds, precision, length limits, domain
//!    membership and required-ness are described by `const` tables
//!    ([`RecordSpec`]) and interpreted by one routine, never re-implemented
//!    per field.
//!
//! 3. **Program-lifetime constants.** Nothing here is mutable or registered at
//!    runtime; every type is `Send + Sync` and free to share across threads.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `echo-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod constraint;
pub mod decimal;
pub mod error;
pub mod registry;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use constraint::{Bound, FieldKind, FieldSpec, Length, Range, RecordSpec, RequiredWhen};
pub use decimal::{Decimal, Reading};
pub use error::EchoError;
pub use registry::{all_domains, Domain};
pub use temporal::ConstructionDate;
