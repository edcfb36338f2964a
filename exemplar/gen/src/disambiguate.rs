//! Unique method names within a namespace.
//!
//! Distinct operations frequently share a display name ("Update" on both
//! `/vendors/:id` and `/vendors/:id/state`). The first claimant keeps the
//! name; later claimants get a suffix derived from their path, then `Alt`,
//! then a counter. Names are compared in the snake_case form the emitter
//! uses, since `GetXY` and `GetXy` both become `get_xy`.

use std::collections::HashSet;

use tracing::debug;

use crate::naming::{NamingTables, normalize, to_snake_case};
use crate::operation::Operation;
use crate::parser::VERSION_SEGMENT;

/// Number of trailing path segments used for a suffix.
const SUFFIX_SEGMENTS: usize = 2;

/// Renames colliding operations so every method name in `operations` is unique.
///
/// `operations` must all belong to `namespace` and already be in their final
/// emission order; the result depends only on that order and the paths.
///
/// ## Examples
///
/// ```
/// use exemplar_gen::disambiguate::disambiguator_suffix;
/// use exemplar_gen::naming::NamingTables;
///
/// let tables = NamingTables::default();
/// assert_eq!(disambiguator_suffix("/foo/:id/state", "Foo", &tables), "ForState");
/// assert_eq!(disambiguator_suffix("/foo/:id", "Foo", &tables), "");
/// ```
pub fn unique_method_names(operations: &mut [Operation], namespace: &str, tables: &NamingTables) {
    let mut emitted: HashSet<String> = HashSet::with_capacity(operations.len());
    let taken =
        |emitted: &HashSet<String>, name: &str| emitted.contains(&to_snake_case(name, tables));

    for op in operations.iter_mut() {
        if !taken(&emitted, &op.method_name) {
            emitted.insert(to_snake_case(&op.method_name, tables));
            continue;
        }

        let suffix = disambiguator_suffix(&op.path, namespace, tables);
        let mut candidate = format!("{}{}", op.method_name, suffix);
        if suffix.is_empty() {
            candidate.push_str("Alt");
        }
        if taken(&emitted, &candidate) {
            let mut n = 2;
            while taken(&emitted, &format!("{candidate}{n}")) {
                n += 1;
            }
            candidate = format!("{candidate}{n}");
        }

        debug!(
            namespace,
            from = %op.method_name,
            to = %candidate,
            path = %op.path,
            "renamed colliding method"
        );
        emitted.insert(to_snake_case(&candidate, tables));
        op.method_name = candidate;
    }
}

/// Builds the `For...` suffix for a path, or `""` when nothing usable remains.
///
/// Empty segments, the version segment, `:params` and segments equal to the
/// namespace (ignoring ASCII case) are skipped; the last two remaining segments
/// are normalized with stopwords dropped.
pub fn disambiguator_suffix(path: &str, namespace: &str, tables: &NamingTables) -> String {
    let candidates: Vec<&str> = path
        .split('/')
        .filter(|s| !s.is_empty() && *s != VERSION_SEGMENT && !s.starts_with(':'))
        .filter(|s| !s.eq_ignore_ascii_case(namespace))
        .collect();

    let tail = &candidates[candidates.len().saturating_sub(SUFFIX_SEGMENTS)..];
    let name = normalize(&tail.join(" "), true, tables);
    if name.is_empty() {
        String::new()
    } else {
        format!("For{name}")
    }
}
