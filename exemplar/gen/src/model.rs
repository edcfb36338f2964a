//! The grouped, ordered model handed to the code emitter.
//!
//! Operations are grouped by namespace, namespaces sorted alphabetically,
//! operations within a namespace sorted by `(method_name, path)` and then
//! disambiguated. Everything downstream iterates this model in order, so the
//! emitted file never depends on map iteration order.

use std::collections::{BTreeMap, HashSet};

use tracing::info;

use crate::dedupe::dedupe_operations;
use crate::disambiguate::unique_method_names;
use crate::errors::GeneratorError;
use crate::naming::{NamingTables, to_snake_case};
use crate::operation::Operation;

/// Member names the `Services` registry defines itself.
const REGISTRY_RESERVED: &[&str] = &["new"];

/// All operations of one namespace, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    /// PascalCase namespace (`Controls`).
    pub name: String,
    pub operations: Vec<Operation>,
}

impl Service {
    /// Name of the generated service struct (`ControlsService`).
    pub fn struct_name(&self) -> String {
        format!("{}Service", self.name)
    }

    /// Name of the accessor on the `Services` registry (`controls`).
    ///
    /// `new` is the registry's constructor, so a `New` namespace is reached
    /// through `new_service` instead.
    pub fn accessor_name(&self, tables: &NamingTables) -> String {
        let name = to_snake_case(&self.name, tables);
        if REGISTRY_RESERVED.contains(&name.as_str()) {
            format!("{name}_service")
        } else {
            name
        }
    }
}

/// The complete set of services to emit.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiModel {
    pub services: Vec<Service>,
}

impl ApiModel {
    /// Builds the model from walked operations.
    ///
    /// Duplicates are collapsed, operations grouped and sorted, and method
    /// names made unique within each namespace.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::NoOperations` when `operations` is empty and
    /// `GeneratorError::CodeGenError` when two operations would produce the
    /// same type or method names, or two namespaces the same accessor.
    pub fn build(operations: Vec<Operation>, tables: &NamingTables) -> Result<Self, GeneratorError> {
        if operations.is_empty() {
            return Err(GeneratorError::NoOperations);
        }

        let walked = operations.len();
        let operations = dedupe_operations(operations);
        info!(
            walked,
            retained = operations.len(),
            "deduplicated operations"
        );

        let mut grouped: BTreeMap<String, Vec<Operation>> = BTreeMap::new();
        for op in operations {
            grouped.entry(op.namespace.clone()).or_default().push(op);
        }

        let services: Vec<Service> = grouped
            .into_iter()
            .map(|(name, mut ops)| {
                ops.sort_by(|a, b| {
                    a.method_name
                        .cmp(&b.method_name)
                        .then_with(|| a.path.cmp(&b.path))
                });
                unique_method_names(&mut ops, &name, tables);
                Service {
                    name,
                    operations: ops,
                }
            })
            .collect();

        let model = ApiModel { services };
        model.check_names(tables)?;

        info!(
            operations = model.operation_count(),
            services = model.services.len(),
            "built service model"
        );
        Ok(model)
    }

    /// Total number of operations across all services.
    pub fn operation_count(&self) -> usize {
        self.services.iter().map(|s| s.operations.len()).sum()
    }

    /// Generated type names are `{Namespace}{Method}...`, so distinct pairs can
    /// still concatenate to the same prefix (`Foo` + `BarList` and `FooBar` +
    /// `List`). Methods and accessors are emitted in snake_case, which folds
    /// some distinct names together (`FooBar` and `FooBAR`).
    fn check_names(&self, tables: &NamingTables) -> Result<(), GeneratorError> {
        let mut prefixes: HashSet<String> = HashSet::new();
        let mut accessors: HashSet<String> = HashSet::new();
        for service in &self.services {
            let accessor = service.accessor_name(tables);
            if !accessors.insert(accessor.clone()) {
                return Err(GeneratorError::CodeGenError(format!(
                    "registry accessor '{accessor}' is produced by more than one namespace"
                )));
            }

            let mut methods: HashSet<String> = HashSet::new();
            for op in &service.operations {
                let prefix = format!("{}{}", service.name, op.method_name);
                if !prefixes.insert(prefix.clone()) {
                    return Err(GeneratorError::CodeGenError(format!(
                        "type name prefix '{prefix}' is produced by more than one operation"
                    )));
                }

                let method = to_snake_case(&op.method_name, tables);
                if !methods.insert(method.clone()) {
                    return Err(GeneratorError::CodeGenError(format!(
                        "method '{}::{method}' is produced by more than one operation",
                        service.struct_name()
                    )));
                }
            }
        }
        Ok(())
    }
}
