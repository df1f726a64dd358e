//! Grid constants and runtime maze configuration.
//!
//! The constants bound every internal buffer. `MazeConfig` lets a caller pick
//! a smaller or larger grid (up to [`MAX_DIMENSION`]) and tune the random
//! generators without touching the constants.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};
use crate::graph::Weight;

/// Default number of grid rows.
pub const ROWS: usize = 15;

/// Default number of grid columns.
pub const COLUMNS: usize = 15;

/// Node count of the default grid (one node per cell).
pub const MAX_NODES: usize = ROWS * COLUMNS;

/// Largest accepted grid side.
pub const MAX_DIMENSION: usize = 63;

/// Sentinel distance for "not reached yet".
pub const INFINITY: Weight = Weight::MAX;

/// Percent chance that a random grid graph keeps an orthogonal edge.
pub const PATH_PROBABILITY: u32 = 65;

/// Percent chance that a random grid graph keeps a diagonal shortcut attempt.
pub const DIAGONAL_PROBABILITY: u32 = 20;

/// Runtime configuration for maze generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub columns: usize,
    /// Probability in `[0, 1]` that Kruskal generation removes a wall that
    /// would close a cycle.
    pub cycle_probability: f64,
    /// Percent chance (0..=100) of keeping an orthogonal edge in random graphs.
    pub path_probability: u32,
    /// Percent chance (0..=100) of keeping a diagonal shortcut in random graphs.
    pub diagonal_probability: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            columns: COLUMNS,
            cycle_probability: 0.0,
            path_probability: PATH_PROBABILITY,
            diagonal_probability: DIAGONAL_PROBABILITY,
        }
    }
}

impl MazeConfig {
    /// Returns a config for a `rows × columns` grid with default tuning.
    pub fn with_size(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Number of graph nodes a grid of this size maps to.
    pub fn node_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Checks that every field is inside its accepted range.
    ///
    /// # Errors
    /// Returns [`MazeError::Config`] describing the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_DIMENSION).contains(&self.rows) {
            return Err(MazeError::config(format!(
                "rows must be in 2..={MAX_DIMENSION}, got {}",
                self.rows
            )));
        }
        if !(2..=MAX_DIMENSION).contains(&self.columns) {
            return Err(MazeError::config(format!(
                "columns must be in 2..={MAX_DIMENSION}, got {}",
                self.columns
            )));
        }
        if !(0.0..=1.0).contains(&self.cycle_probability) {
            return Err(MazeError::config(format!(
                "cycle_probability must be in [0, 1], got {}",
                self.cycle_probability
            )));
        }
        if self.path_probability > 100 || self.diagonal_probability > 100 {
            return Err(MazeError::config(
                "path_probability and diagonal_probability are percentages (0..=100)",
            ));
        }
        Ok(())
    }

    /// Loads a JSON config file; missing fields take their defaults.
    ///
    /// # Errors
    /// Fails on I/O errors, malformed JSON or a config that does not validate.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = MazeConfig::default();
        assert_eq!(config.rows, ROWS);
        assert_eq!(config.columns, COLUMNS);
        assert_eq!(config.node_count(), MAX_NODES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(MazeConfig::with_size(1, 15).validate().is_err());
        assert!(MazeConfig::with_size(15, MAX_DIMENSION + 1).validate().is_err());

        let mut config = MazeConfig::default();
        config.cycle_probability = 1.5;
        assert!(matches!(config.validate(), Err(MazeError::Config(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MazeConfig = serde_json::from_str(r#"{ "rows": 21 }"#).unwrap();
        assert_eq!(config.rows, 21);
        assert_eq!(config.columns, COLUMNS);
        assert_eq!(config.path_probability, PATH_PROBABILITY);
    }
}
