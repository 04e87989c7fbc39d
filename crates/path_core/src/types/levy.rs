//! Lévy-area capability tags.
//!
//! Higher-order integration schemes need auxiliary stochastic-area terms
//! alongside the increment. Only [`LevyArea::BrownianIncrement`] is ever
//! produced by the paths in this workspace; the other variants name what a
//! richer path would report.

use std::fmt;

/// Auxiliary stochastic-area representation carried by a Brownian path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LevyArea {
    /// Increment only, no area term.
    #[default]
    BrownianIncrement,
    /// Increment plus space-time Lévy area.
    SpaceTime,
    /// Increment plus space-time and space-time-time Lévy areas.
    SpaceTimeTime,
}

impl LevyArea {
    /// Short identifier used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            LevyArea::BrownianIncrement => "brownian_increment",
            LevyArea::SpaceTime => "space_time",
            LevyArea::SpaceTimeTime => "space_time_time",
        }
    }
}

impl fmt::Display for LevyArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
