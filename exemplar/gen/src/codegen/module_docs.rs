//! Module documentation generation for the emitted bindings.
//!
//! This module provides the [`ModuleDocBuilder`] struct for generating the
//! module-level documentation at the top of the generated file: an
//! introduction, a per-service summary, and a usage example.

use proc_macro2::TokenStream;
use quote::quote;

use crate::model::ApiModel;
use crate::naming::{NamingTables, to_snake_case};

/// Builds module-level documentation for the generated bindings.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::codegen::ModuleDocBuilder;
/// use exemplar_gen::model::ApiModel;
/// use exemplar_gen::naming::NamingTables;
///
/// let model = ApiModel { services: vec![] };
/// let tables = NamingTables::default();
/// let tokens = ModuleDocBuilder::new(&model, &tables).build();
/// assert!(tokens.to_string().contains("Generated service bindings"));
/// ```
pub struct ModuleDocBuilder<'a> {
    model: &'a ApiModel,
    tables: &'a NamingTables,
}

impl<'a> ModuleDocBuilder<'a> {
    /// Creates a new module documentation builder for the given model.
    pub fn new(model: &'a ApiModel, tables: &'a NamingTables) -> Self {
        Self { model, tables }
    }

    /// Builds the complete module documentation as a token stream.
    ///
    /// Each line becomes its own `#![doc = "..."]` attribute so the
    /// formatted output reads as ordinary `//!` comments.
    pub fn build(&self) -> TokenStream {
        let mut lines = self.intro_lines();
        lines.push(String::new());
        lines.extend(self.services_lines());
        lines.push(String::new());
        lines.extend(self.example_lines());

        let lines = lines.iter().map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!(" {line}")
            }
        });

        quote! {
            #( #![doc = #lines] )*
        }
    }

    fn intro_lines(&self) -> Vec<String> {
        vec![
            "Generated service bindings.".to_string(),
            String::new(),
            format!(
                "{} operations across {} services, reachable through [`Services`].",
                self.model.operation_count(),
                self.model.services.len()
            ),
        ]
    }

    /// Lists every service with its operation count.
    fn services_lines(&self) -> Vec<String> {
        if self.model.services.is_empty() {
            return vec!["## Services".to_string(), String::new(), "None.".to_string()];
        }

        let mut lines = vec!["## Services".to_string(), String::new()];
        for service in &self.model.services {
            lines.push(format!(
                "- `{}` ({})",
                service.struct_name(),
                service.operations.len()
            ));
        }
        lines
    }

    /// Uses the first paramless operation, or the first operation of the
    /// first service when every operation takes params.
    fn example_lines(&self) -> Vec<String> {
        let candidate = self
            .model
            .services
            .iter()
            .flat_map(|s| s.operations.iter().map(move |op| (s, op)))
            .find(|(_, op)| !op.needs_params())
            .or_else(|| {
                self.model
                    .services
                    .iter()
                    .find_map(|s| s.operations.first().map(|op| (s, op)))
            });

        let Some((service, op)) = candidate else {
            return vec!["## Example".to_string(), String::new(), "No operations available.".to_string()];
        };

        let accessor = service.accessor_name(self.tables);
        let method = to_snake_case(&op.method_name, self.tables);
        let call = if op.needs_params() {
            format!(
                "client.services().{accessor}().{method}(&{}{}Params::default()).await?;",
                service.name, op.method_name
            )
        } else {
            format!("client.services().{accessor}().{method}().await?;")
        };

        vec![
            "## Example".to_string(),
            String::new(),
            "```ignore".to_string(),
            "let client = Client::builder().bearer_token(token).build()?;".to_string(),
            format!("let response = {call}"),
            "```".to_string(),
        ]
    }
}
