//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of code generation: assembling all
//! generated pieces into a single Rust file, validating the output, formatting
//! it, and writing it to disk atomically.
//!
//! ## Output Structure
//!
//! The generator produces one module file for the runtime crate:
//!
//! ```text
//! exemplar/client/src/
//! ├── client.rs      # Runtime client (hand-written)
//! ├── error.rs       # ClientError (hand-written)
//! └── generated.rs   # Services registry, service structs, body/params types
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is validated with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes
//! - **Determinism**: Identical input yields byte-identical output

use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use quote::quote;
use tracing::{debug, info};

use crate::codegen::{ModuleDocBuilder, generate_registry, generate_service};
use crate::collection::{Collection, load_collection};
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::model::ApiModel;
use crate::naming::NamingTables;
use crate::operation::walk_collection;

/// Notice placed above the generated code.
const GENERATED_NOTICE: &str =
    "// This code was automatically generated by exemplar-gen. Do not edit manually.";

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// The output path (written unless this was a dry run).
    pub path: PathBuf,
    pub operations: usize,
    pub services: usize,
    /// The formatted file contents.
    pub code: String,
}

/// Assembles the complete bindings module.
///
/// The module contains:
/// - Module documentation
/// - Imports of the runtime `Client` and `ClientError`
/// - The `Services` registry
/// - Per namespace: body, response and params types, then the service struct
pub fn assemble_bindings(model: &ApiModel, tables: &NamingTables) -> TokenStream {
    let module_docs = ModuleDocBuilder::new(model, tables).build();
    let registry = generate_registry(model, tables);
    let services = model
        .services
        .iter()
        .map(|service| generate_service(service, tables));

    quote! {
        #module_docs

        use crate::client::Client;
        use crate::error::ClientError;

        #registry

        #(#services)*
    }
}

/// Validates generated code by parsing it with syn.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the code is not a valid Rust file.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats a parsed file with prettyplease and prepends the generated notice.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!("{GENERATED_NOTICE}\n\n{formatted}")
}

/// Writes `content` to `path` via a temporary file and rename.
///
/// Parent directories are created as needed.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if any filesystem step fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Runs the pipeline over a parsed collection and returns the model and the
/// formatted code.
///
/// ## Errors
///
/// Returns `GeneratorError::NoOperations` when the collection yields no
/// operations and `GeneratorError::CodeGenError` when the rendered code does
/// not parse.
pub fn render_collection(
    collection: &Collection,
    tables: &NamingTables,
) -> Result<(ApiModel, String), GeneratorError> {
    let operations = walk_collection(&collection.items, tables);
    info!(operations = operations.len(), "walked collection");

    let model = ApiModel::build(operations, tables)?;
    let tokens = assemble_bindings(&model, tables);
    let file = validate_code(&tokens)?;
    Ok((model, format_code(&file)))
}

/// Reads the configured collection, generates the bindings and writes them.
///
/// Nothing is written when any step fails or when `config.dry_run` is set.
///
/// ## Errors
///
/// Propagates configuration, read, parse, generation and write errors.
pub fn generate_and_write(
    config: &GeneratorConfig,
    tables: &NamingTables,
) -> Result<GenerationSummary, GeneratorError> {
    config.validate()?;

    let collection = load_collection(&config.input)?;
    let (model, code) = render_collection(&collection, tables)?;

    if config.dry_run {
        debug!(path = %config.output.display(), "dry run, skipping write");
    } else {
        write_atomic(&config.output, &code)?;
        info!(path = %config.output.display(), bytes = code.len(), "wrote bindings");
    }

    Ok(GenerationSummary {
        path: config.output.clone(),
        operations: model.operation_count(),
        services: model.services.len(),
        code,
    })
}
