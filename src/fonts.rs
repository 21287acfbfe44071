//! Arabic math font registry
//!
//! The registry only tracks which fonts are loaded. Fetching is done by a
//! loader closure supplied by the embedding environment.

use std::collections::BTreeSet;

use crate::utils::error::{ArabicMathError, Result};

/// A named web font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub name: &'static str,
    pub url: &'static str,
}

/// Fonts loaded by [`FontRegistry::load_defaults`].
pub const DEFAULT_FONTS: &[FontSpec] = &[
    FontSpec {
        name: "Amiri",
        url: "https://fonts.googleapis.com/css2?family=Amiri:ital,wght@0,400;0,700;1,400;1,700&display=swap",
    },
    FontSpec {
        name: "Cairo",
        url: "https://fonts.googleapis.com/css2?family=Cairo:wght@200;300;400;600;700;900&display=swap",
    },
    FontSpec {
        name: "Scheherazade New",
        url: "https://fonts.googleapis.com/css2?family=Scheherazade+New:wght@400;700&display=swap",
    },
];

/// Per-instance set of loaded fonts.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    loaded: BTreeSet<String>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `name` through `loader` unless it is already loaded.
    ///
    /// A failed load leaves the registry unchanged so a later call retries.
    pub fn load<F, E>(&mut self, name: &str, url: &str, loader: F) -> Result<()>
    where
        F: FnOnce(&str, &str) -> std::result::Result<(), E>,
        E: std::fmt::Display,
    {
        if self.is_loaded(name) {
            return Ok(());
        }
        match loader(name, url) {
            Ok(()) => {
                log::info!("loaded font {}", name);
                self.loaded.insert(name.to_string());
                Ok(())
            }
            Err(err) => {
                log::error!("failed to load font {}: {}", name, err);
                Err(ArabicMathError::font(name, err.to_string()))
            }
        }
    }

    /// Try every default font. Failures are logged and returned; they do
    /// not stop the remaining loads.
    pub fn load_defaults<F, E>(&mut self, mut loader: F) -> Vec<ArabicMathError>
    where
        F: FnMut(&str, &str) -> std::result::Result<(), E>,
        E: std::fmt::Display,
    {
        let mut failures = Vec::new();
        for font in DEFAULT_FONTS {
            if let Err(err) = self.load(font.name, font.url, &mut loader) {
                log::warn!("font {} not loaded", font.name);
                failures.push(err);
            }
        }
        failures
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.contains(name)
    }

    /// Loaded font names, sorted.
    pub fn loaded(&self) -> impl Iterator<Item = &str> {
        self.loaded.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.loaded.clear();
    }
}
