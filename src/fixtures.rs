//! Fixtures
//!
//! Scripted sessions: a currency and the list of [`Event`]s a user produced,
//! stored as YAML.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rusty_money::iso::{self, Currency};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::state::{CartState, Event};

/// Default directory session fixture sets are resolved against.
pub const DEFAULT_BASE_PATH: &str = "./fixtures/sessions";

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Session Fixture
#[derive(Debug, Clone, Deserialize)]
pub struct SessionFixture {
    /// ISO 4217 currency code used to display prices
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Events in the order they happened, each a single-key map such as `increment: 0`
    #[serde(default, with = "serde_norway::with::singleton_map_recursive")]
    pub events: Vec<Event>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl SessionFixture {
    /// Parse a session from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Yaml`] if the document is not a valid session.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: SessionFixture = serde_norway::from_str(yaml)?;

        debug!(
            currency = %fixture.currency,
            events = fixture.events.len(),
            "parsed session fixture"
        );

        Ok(fixture)
    }

    /// Load a session from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();

        debug!(path = %path.display(), "loading session fixture");

        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Load the named session from [`DEFAULT_BASE_PATH`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in(DEFAULT_BASE_PATH, name)
    }

    /// Load the named session from `base_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        Self::from_path(base_path.into().join(format!("{name}.yml")))
    }

    /// Resolve the currency code.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::UnknownCurrency`] if the code is not an ISO 4217 currency.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        iso::find(&self.currency).ok_or_else(|| FixtureError::UnknownCurrency(self.currency.clone()))
    }

    /// Apply every event to a fresh state.
    pub fn replay(&self) -> CartState {
        let mut state = CartState::new();
        let changed = state.apply_all(self.events.iter().cloned());

        debug!(events = self.events.len(), changed, "replayed session fixture");

        state
    }
}
