//! Compile a style tree into CSS text.
//!
//! Nested rules are flattened into plain rules with fully resolved selectors.
//! Property names are converted from camelCase and numeric values get a `px`
//! unit unless the property is unitless.

use crate::style::{CssValue, Interpolation, StyleEntry, StyleObject, format_number};

/// Properties whose numeric values are printed without a unit.
const UNITLESS_PROPERTIES: &[&str] = &[
    "lineHeight",
    "fontWeight",
    "opacity",
    "zIndex",
    "flex",
    "flexGrow",
    "flexShrink",
    "order",
    "zoom",
];

/// Options controlling CSS output.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Class appended to the first compound selector of every rule.
    pub hash_class: Option<String>,
    /// One declaration per line instead of compact output.
    pub pretty: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            hash_class: None,
            pretty: true,
        }
    }
}

/// A flattened rule: resolved selector plus its declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    /// Value of a declaration by its CSS (kebab-case) property name.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }
}

/// Compile an interpolation to CSS text.
pub fn compile(styles: &Interpolation, options: &CompileOptions) -> String {
    let rules = flatten(styles);
    let mut out = String::new();

    for rule in &rules {
        let selector = match options.hash_class {
            Some(ref hash) => hash_selector(&rule.selector, hash),
            None => rule.selector.clone(),
        };

        if options.pretty {
            out.push_str(&selector);
            out.push_str(" {\n");
            for (prop, value) in &rule.declarations {
                out.push_str("  ");
                out.push_str(prop);
                out.push_str(": ");
                out.push_str(value);
                out.push_str(";\n");
            }
            out.push_str("}\n");
        } else {
            out.push_str(&selector.replace(", ", ","));
            out.push('{');
            let body: Vec<String> = rule
                .declarations
                .iter()
                .map(|(p, v)| format!("{}:{}", p, v))
                .collect();
            out.push_str(&body.join(";"));
            out.push('}');
        }
    }

    tracing::trace!(rules = rules.len(), bytes = out.len(), "compiled stylesheet");
    out
}

/// Flatten an interpolation into rules with resolved selectors.
///
/// A rule's own declarations come before the rules nested inside it. Rules
/// without declarations are dropped.
pub fn flatten(styles: &Interpolation) -> Vec<CssRule> {
    let mut rules = Vec::new();
    for object in styles {
        for (key, entry) in object.iter() {
            match entry {
                StyleEntry::Nested(child) => flatten_rule(key, child, &mut rules),
                StyleEntry::Value(_) => {
                    tracing::warn!(property = key, "ignoring declaration outside of any selector");
                }
            }
        }
    }
    rules
}

fn flatten_rule(selector: &str, object: &StyleObject, rules: &mut Vec<CssRule>) {
    let declarations: Vec<(String, String)> = object
        .iter()
        .filter_map(|(key, entry)| match entry {
            StyleEntry::Value(value) => Some((property_name(key), format_value(key, value))),
            StyleEntry::Nested(_) => None,
        })
        .collect();

    if !declarations.is_empty() {
        rules.push(CssRule {
            selector: selector.to_string(),
            declarations,
        });
    }

    for (key, entry) in object.iter() {
        if let StyleEntry::Nested(child) = entry {
            flatten_rule(&resolve_selector(selector, key), child, rules);
        }
    }
}

/// Resolve a nested selector against its parent.
///
/// `&` is replaced by the parent; anything else becomes a descendant of it.
/// Comma lists on either side expand to every combination.
pub fn resolve_selector(parent: &str, key: &str) -> String {
    let parents = split_selector_list(parent);
    let keys = split_selector_list(key);
    let mut resolved = Vec::with_capacity(parents.len() * keys.len());

    for p in &parents {
        for k in &keys {
            if k.contains('&') {
                resolved.push(k.replace('&', p));
            } else {
                resolved.push(format!("{} {}", p, k));
            }
        }
    }

    resolved.join(", ")
}

/// Split a selector list on top-level commas.
fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in selector.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(selector[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(selector[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

/// Append `.hash` to the first compound selector of each list entry.
pub fn hash_selector(selector: &str, hash: &str) -> String {
    split_selector_list(selector)
        .into_iter()
        .map(|part| {
            let end = first_compound_end(part);
            format!("{}.{}{}", &part[..end], hash, &part[end..])
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn first_compound_end(selector: &str) -> usize {
    let mut depth = 0usize;
    for (i, c) in selector.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            // Pseudo-classes stay after the hash class.
            ' ' | '>' | '+' | '~' | ':' if depth == 0 && i > 0 => return i,
            _ => {}
        }
    }
    selector.len()
}

/// Convert a camelCase property name to CSS kebab-case.
///
/// Names that already contain a dash (including custom properties) are kept.
pub fn property_name(key: &str) -> String {
    if key.contains('-') {
        return key.to_string();
    }

    let mut name = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

fn format_value(key: &str, value: &CssValue) -> String {
    match value {
        CssValue::Str(s) => s.clone(),
        CssValue::Num(n) if *n == 0.0 || UNITLESS_PROPERTIES.contains(&key) => format_number(*n),
        CssValue::Num(n) => format!("{}px", format_number(*n)),
    }
}
