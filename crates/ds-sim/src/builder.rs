//! Fluent builder for constructing a [`Sim`].

use ds_catalog::ActionCatalog;
use ds_core::SimConfig;

use crate::{Sim, SimError, SimResult, SimulationState};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                        |
/// |-----------------------|--------------------------------|
/// | `.catalog(c)`         | `ActionCatalog::builtin()`     |
/// | `.initial_state(s)`   | `SimulationState::new()`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .initial_state(SimulationState::new().with_location(Room::Kitchen))
///     .build()?;
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    catalog: Option<ActionCatalog>,
    state:   Option<SimulationState>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, catalog: None, state: None }
    }

    /// Use a custom action table instead of the built-in one.
    pub fn catalog(mut self, catalog: ActionCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Start from `state` instead of the story start.
    ///
    /// Only the first story uses it; `reset` always returns to
    /// `SimulationState::new()`.
    pub fn initial_state(mut self, state: SimulationState) -> Self {
        self.state = Some(state);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        Ok(Sim {
            config:         self.config,
            catalog:        self.catalog.unwrap_or_else(ActionCatalog::builtin),
            state:          self.state.unwrap_or_default(),
            ticks:          0,
            revert_seq:     0,
            pending_revert: None,
        })
    }
}

impl Default for Sim {
    fn default() -> Self {
        Self {
            config:         SimConfig::default(),
            catalog:        ActionCatalog::builtin(),
            state:          SimulationState::new(),
            ticks:          0,
            revert_seq:     0,
            pending_revert: None,
        }
    }
}
