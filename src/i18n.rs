//! Translation dictionary: one JSON tree per language code.
//!
//! Lookups use dotted paths (`"hero.title"`). Anything that is missing or has
//! the wrong shape degrades to `None` or an empty list instead of an error, so
//! a broken dictionary renders as blank content rather than a crash.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::constants::{DEFAULT_LANGUAGE, TESTIMONIALS_KEY};
use crate::slide::SlideItem;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read translations from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("translations are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("translations root must be an object keyed by language")]
    NotAnObject,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    languages: Map<String, Value>,
}

impl Dictionary {
    pub fn from_json(json: &str) -> Result<Self, I18nError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(languages) => Ok(Self { languages }),
            _ => Err(I18nError::NotAnObject),
        }
    }

    pub fn load(path: &Path) -> Result<Self, I18nError> {
        let json = fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dictionary = Self::from_json(&json)?;
        info!(path = %path.display(), languages = dictionary.languages.len(), "translations loaded");
        Ok(dictionary)
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.languages.contains_key(lang)
    }

    /// Language codes in sorted order.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// The preferred language when present, the default language otherwise.
    pub fn resolve_language<'a>(&self, preferred: Option<&'a str>) -> &'a str {
        match preferred {
            Some(lang) if !lang.is_empty() && self.has_language(lang) => lang,
            _ => DEFAULT_LANGUAGE,
        }
    }

    pub fn lookup(&self, lang: &str, path: &str) -> Option<&Value> {
        let root = self.languages.get(lang)?;
        path.split('.').try_fold(root, |node, key| {
            let child = match node {
                Value::Array(list) => list.get(key.parse::<usize>().ok()?),
                _ => node.get(key),
            };
            match child {
                Some(Value::Null) | None => None,
                Some(child) => Some(child),
            }
        })
    }

    pub fn text(&self, lang: &str, key: &str) -> Option<&str> {
        self.lookup(lang, key).and_then(Value::as_str)
    }

    /// Deserializes the array at `key`; missing or malformed data gives an empty list.
    pub fn list<T: DeserializeOwned>(&self, lang: &str, key: &str) -> Vec<T> {
        let Some(value) = self.lookup(lang, key) else {
            return Vec::new();
        };
        if !value.is_array() {
            warn!(lang, key, "expected a list in translations");
            return Vec::new();
        }
        match serde_json::from_value(value.clone()) {
            Ok(items) => items,
            Err(e) => {
                warn!(lang, key, error = %e, "malformed list in translations");
                Vec::new()
            }
        }
    }

    pub fn testimonials(&self, lang: &str) -> Vec<SlideItem> {
        self.list(lang, TESTIMONIALS_KEY)
    }

    /// Fills every binding whose key resolves to a string; returns how many changed.
    pub fn localize(&self, lang: &str, bindings: &mut [Binding]) -> usize {
        let mut updated = 0;
        for binding in bindings.iter_mut() {
            if let Some(text) = self.text(lang, &binding.key) {
                binding.value = Some(text.to_string());
                updated += 1;
            }
        }
        updated
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Text,        // Element text content
    Placeholder, // Input placeholder attribute
}

/// A page location that takes its text from the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: String,
    pub kind: BindingKind,
    pub value: Option<String>,
}

impl Binding {
    pub fn text(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: BindingKind::Text,
            value: None,
        }
    }

    pub fn placeholder(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: BindingKind::Placeholder,
            value: None,
        }
    }
}
