//! Style registration.
//!
//! Generated styles are registered under a component path together with the
//! token they were generated from. The compiled CSS is cached per (path,
//! token fingerprint), so registering the same component twice with the same
//! token does not run the generator again.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::button::button_style;
use crate::compile::{CompileOptions, compile};
use crate::style::Interpolation;
use crate::token::DesignToken;

/// Length of the fingerprint prefix used in hash class names.
const HASH_ID_LEN: usize = 6;

/// Output of a registration.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredStyle {
    /// Hash class scoping the rules, when hashing is enabled.
    pub hash_id: Option<String>,
    pub css: String,
}

#[derive(Debug, Default)]
struct RegistryState {
    cache: HashMap<(String, String), RegisteredStyle>,
    /// Cache keys in first-registration order.
    order: Vec<(String, String)>,
}

/// Cache of compiled component styles.
#[derive(Debug)]
pub struct StyleRegistry {
    hashed: bool,
    pretty: bool,
    state: Mutex<RegistryState>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl StyleRegistry {
    pub fn new(hashed: bool, pretty: bool) -> Self {
        Self {
            hashed,
            pretty,
            state: Mutex::new(RegistryState::default()),
        }
    }

    /// Hash class for a token: `css-` plus the start of its fingerprint.
    pub fn hash_id(token: &DesignToken) -> String {
        format!("css-{}", &token.fingerprint()[..HASH_ID_LEN])
    }

    /// Register styles for `path`, generating them only on a cache miss.
    pub fn register<F>(&self, path: &[&str], token: &DesignToken, generate: F) -> RegisteredStyle
    where
        F: FnOnce() -> Interpolation,
    {
        let key = (path.join("|"), token.fingerprint());

        if let Some(hit) = self.state.lock().cache.get(&key) {
            tracing::trace!(path = %key.0, "style cache hit");
            return hit.clone();
        }

        let hash_id = self.hashed.then(|| Self::hash_id(token));
        let options = CompileOptions {
            hash_class: hash_id.clone(),
            pretty: self.pretty,
        };
        let css = compile(&generate(), &options);
        let registered = RegisteredStyle { hash_id, css };

        let mut state = self.state.lock();
        // Another caller may have registered the same key while we generated.
        if let Some(existing) = state.cache.get(&key) {
            return existing.clone();
        }
        tracing::debug!(path = %key.0, bytes = registered.css.len(), "registered style");
        state.order.push(key.clone());
        state.cache.insert(key, registered.clone());
        registered
    }

    /// All registered CSS, in registration order.
    pub fn styles(&self) -> String {
        let state = self.state.lock();
        state
            .order
            .iter()
            .filter_map(|key| state.cache.get(key))
            .map(|style| style.css.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.state.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.cache.clear();
        state.order.clear();
    }
}

/// Register the button stylesheet for `prefix_cls` with icons under `icon_prefix_cls`.
pub fn use_button_style(
    registry: &StyleRegistry,
    prefix_cls: &str,
    icon_prefix_cls: &str,
    token: &DesignToken,
) -> RegisteredStyle {
    registry.register(&[prefix_cls, icon_prefix_cls], token, || {
        button_style(prefix_cls, icon_prefix_cls, token)
    })
}
