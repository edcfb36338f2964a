//! Identifier normalization.
//!
//! Turns free-text labels ("List a control's documents") and JSON keys
//! (`controlId`) into canonical PascalCase identifiers, and renders those
//! identifiers as Rust member names.
//!
//! ## Examples
//!
//! ```
//! use exemplar_gen::naming::{NamingTables, normalize, to_snake_case};
//!
//! let tables = NamingTables::default();
//! assert_eq!(normalize("Get control by an ID", true, &tables), "GetControlByID");
//! assert_eq!(normalize("controlId", false, &tables), "ControlID");
//! assert_eq!(to_snake_case("GetControlByID", &tables), "get_control_by_id");
//! ```

use std::collections::HashSet;

use proc_macro2::{Ident, Span};

/// Words dropped from display names when stopword removal is requested.
const DEFAULT_STOPWORDS: &[&str] = &["a", "an", "the"];

/// Title-cased words rewritten to their conventional spelling.
const DEFAULT_INITIALISMS: &[(&str, &str)] = &[
    ("Id", "ID"),
    ("Url", "URL"),
    ("Api", "API"),
    ("Oauth", "OAuth"),
];

/// Rust keywords that can be written as raw identifiers (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers and get a trailing underscore.
const RESERVED_NON_RAW: &[&str] = &["crate", "self", "super", "Self", "_"];

/// Fixed lookup tables consulted by [`normalize`].
///
/// The tables are plain data handed to the normalizer so it stays a pure
/// function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingTables {
    /// Lowercase words removed when `drop_stopwords` is set.
    pub stopwords: Vec<String>,
    /// `(title_cased, canonical)` whole-word replacements.
    pub initialisms: Vec<(String, String)>,
}

impl Default for NamingTables {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
            initialisms: DEFAULT_INITIALISMS
                .iter()
                .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
                .collect(),
        }
    }
}

impl NamingTables {
    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.iter().any(|w| w == word)
    }

    fn canonical<'a>(&'a self, word: &'a str) -> &'a str {
        self.initialisms
            .iter()
            .find(|(from, _)| from == word)
            .map_or(word, |(_, to)| to.as_str())
    }
}

/// Normalizes an arbitrary label into a PascalCase identifier.
///
/// Returns an empty string only when `label` has no alphanumeric content;
/// callers treat that as "no usable name" and fall back to another source.
pub fn normalize(label: &str, drop_stopwords: bool, tables: &NamingTables) -> String {
    let words = split_words(label);
    if words.is_empty() {
        return String::new();
    }

    let kept: Vec<&String> = if drop_stopwords {
        let filtered: Vec<&String> = words.iter().filter(|w| !tables.is_stopword(w)).collect();
        if filtered.is_empty() {
            words.iter().collect()
        } else {
            filtered
        }
    } else {
        words.iter().collect()
    };

    let mut name = String::new();
    for word in kept {
        let titled = title_case(word);
        name.push_str(tables.canonical(&titled));
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, 'N');
    }
    name
}

/// Splits a label into lowercase words.
///
/// Possessive `'s` collapses into the word, other apostrophes vanish, a
/// lowercase or digit followed by an uppercase letter is a word break, and
/// any run of non-alphanumeric characters separates words.
fn split_words(label: &str) -> Vec<String> {
    let collapsed = label.replace("'s", "s").replace('\'', "");

    let mut spaced = String::with_capacity(collapsed.len() + 8);
    let mut prev: Option<char> = None;
    for c in collapsed.chars() {
        if let Some(p) = prev
            && (p.is_ascii_lowercase() || p.is_ascii_digit())
            && c.is_ascii_uppercase()
        {
            spaced.push(' ');
        }
        if c.is_ascii_alphanumeric() {
            spaced.push(c);
        } else {
            spaced.push(' ');
        }
        prev = Some(c);
    }

    spaced
        .to_ascii_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut titled = first.to_ascii_uppercase().to_string();
            titled.extend(chars);
            titled
        }
        None => String::new(),
    }
}

/// Converts a PascalCase identifier into snake_case.
///
/// Mixed-case initialisms from the tables (`OAuth`) are folded back to their
/// title-cased form first so they stay a single word. Runs of capitals are
/// kept together, breaking before the last capital when a lowercase letter
/// follows (`URLPath` becomes `url_path`).
pub fn to_snake_case(identifier: &str, tables: &NamingTables) -> String {
    let mut folded = identifier.to_string();
    for (from, to) in &tables.initialisms {
        if to.chars().any(|c| c.is_ascii_lowercase()) {
            folded = folded.replace(to.as_str(), from);
        }
    }

    let chars: Vec<char> = folded.chars().collect();
    let mut result = String::with_capacity(chars.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
                if prev.is_ascii_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_ascii_uppercase() && next_lower)
                {
                    result.push('_');
                }
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Builds an identifier for a struct field, method or binding.
///
/// Keywords become raw identifiers (`r#type`); the few keywords that cannot
/// be raw get a trailing underscore.
pub fn member_ident(name: &str) -> Ident {
    if RESERVED_NON_RAW.contains(&name) {
        Ident::new(&format!("{name}_"), Span::call_site())
    } else if RAW_KEYWORDS.contains(&name) {
        Ident::new_raw(name, Span::call_site())
    } else {
        Ident::new(name, Span::call_site())
    }
}

/// Builds an identifier for a generated type.
pub fn type_ident(name: &str) -> Ident {
    Ident::new(name, Span::call_site())
}

/// Claims `base` in `used`, appending `_2`, `_3`, ... until the name is free.
///
/// Returns the claimed name. Used wherever several snake_case members share
/// one scope, since distinct identifiers can snake-case to the same name.
pub fn claim_unique(base: &str, used: &mut HashSet<String>) -> String {
    let mut name = base.to_string();
    let mut n = 2;
    while used.contains(&name) {
        name = format!("{base}_{n}");
        n += 1;
    }
    used.insert(name.clone());
    name
}

/// Normalizes `label` and falls back to `fallback` when nothing usable remains.
pub fn normalize_or(label: &str, fallback: &str, tables: &NamingTables) -> String {
    let name = normalize(label, false, tables);
    if name.is_empty() {
        fallback.to_string()
    } else {
        name
    }
}
