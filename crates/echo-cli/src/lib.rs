//! # echo-cli: ECHO Record Command-Line Interface
//!
//! Provides the `echo-lca` binary.
//!
//! ## Subcommands
//!
//! - `echo-lca validate`: Validate a JSON or YAML payload in either shape.
//! - `echo-lca schema`: Export the JSON Schema of a shape.
//!
//! ```bash
//! echo-lca validate project.json
//! echo-lca validate project.yaml --shape flat --format json
//! echo-lca schema --shape nested --output echo-nested.schema.json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `echo-schema`; no validation logic lives here.

pub mod load;
pub mod schema;
pub mod validate;
