//! Exemplar code generator library.
//!
//! This crate reads a Postman-style collection of example requests and emits
//! typed Rust client bindings for the `exemplar-client` runtime. Types are
//! inferred from the example bodies; names come from the request labels.
//!
//! ## Pipeline
//!
//! 1. [`collection`] - Load and parse the collection document
//! 2. [`operation`] - Walk the tree and build one operation per request
//! 3. [`dedupe`] - Collapse operations with identical signatures
//! 4. [`model`] - Group by namespace, sort, and [`disambiguate`] method names
//! 5. [`codegen`] - Render body, params and service code as token streams
//! 6. [`output`] - Validate, format and atomically write the bindings
//!
//! Supporting modules: [`naming`] (identifier normalization), [`inference`]
//! (shape inference from example JSON), [`parser`] (URL handling),
//! [`config`] and [`errors`].
//!
//! ## Example Usage
//!
//! ```no_run
//! use exemplar_gen::config::GeneratorConfig;
//! use exemplar_gen::naming::NamingTables;
//! use exemplar_gen::output::generate_and_write;
//!
//! let summary = generate_and_write(&GeneratorConfig::default(), &NamingTables::default()).unwrap();
//! println!(
//!     "generated {} with {} operations across {} services",
//!     summary.path.display(),
//!     summary.operations,
//!     summary.services
//! );
//! ```
//!
//! ## Generated Code Structure
//!
//! For a `Controls` namespace with a "Get control by an ID" request:
//!
//! ```text
//! pub struct Services<'a> { ... }
//! impl<'a> Services<'a> {
//!     pub fn controls(&self) -> ControlsService<'a>;
//! }
//!
//! pub struct ControlsGetControlByIDResponse { pub id: Option<String> }
//! pub struct ControlsGetControlByIDParams { pub control_id: String }
//!
//! pub struct ControlsService<'a> { ... }
//! impl ControlsService<'_> {
//!     pub async fn get_control_by_id(
//!         &self,
//!         params: &ControlsGetControlByIDParams,
//!     ) -> Result<ControlsGetControlByIDResponse, ClientError>;
//! }
//! ```

pub mod codegen;
pub mod collection;
pub mod config;
pub mod dedupe;
pub mod disambiguate;
pub mod errors;
pub mod inference;
pub mod model;
pub mod naming;
pub mod operation;
pub mod output;
pub mod parser;

#[cfg(test)]
pub(crate) mod test_utils;
