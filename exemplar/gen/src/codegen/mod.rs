//! Code generation modules for exemplar.
//!
//! This module contains generators that produce Rust source code from the
//! grouped [`ApiModel`](crate::model::ApiModel). Each submodule handles a
//! specific component of the emitted bindings.
//!
//! ## Submodules
//!
//! - [`body_types`] - Request and response body structs from inferred shapes
//! - [`params`] - Per-operation params structs and member naming
//! - [`service`] - `{Ns}Service` structs and their async callables
//! - [`registry`] - The `Services` registry
//! - [`module_docs`] - Module-level documentation
//!
//! ## Output Format
//!
//! All generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn::parse2` to ensure correctness
//! - Formatted with `prettyplease` for consistent style
//!
//! See [`crate::output`] for the assembly and file writing logic.

pub mod body_types;
pub mod module_docs;
pub mod params;
pub mod registry;
pub mod service;

pub use body_types::generate_shape_struct;
pub use module_docs::ModuleDocBuilder;
pub use params::{ParamLayout, generate_params_struct};
pub use registry::generate_registry;
pub use service::{OperationTypeNames, build_format_string, generate_service};
