//! Health bookkeeping for the two combatants.
use crate::constants::{DAMAGE_STEP, HEALTH_MAX};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the fight a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combatant {
    Player,
    Enemy,
}

impl Combatant {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Enemy => "enemy",
        }
    }

    /// Parse an actor label reported by the scene host.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "player" => Some(Self::Player),
            "enemy" => Some(Self::Enemy),
            _ => None,
        }
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hit points in `0..=100`, only ever reduced in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Health(u8);

impl Health {
    #[must_use]
    pub const fn full() -> Self {
        Self(HEALTH_MAX)
    }

    /// Clamps to the valid range.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > HEALTH_MAX {
            Self(HEALTH_MAX)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Apply one hit, flooring at zero.
    #[must_use]
    pub const fn hit(self) -> Self {
        Self(self.0.saturating_sub(DAMAGE_STEP))
    }

    #[must_use]
    pub const fn is_depleted(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / f32::from(HEALTH_MAX)
    }

    #[must_use]
    pub fn band(self) -> HealthBand {
        let fraction = self.fraction();
        if fraction > 0.5 {
            HealthBand::Healthy
        } else if fraction > 0.25 {
            HealthBand::Wounded
        } else {
            HealthBand::Critical
        }
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}HP", self.0)
    }
}

/// Coarse health bracket used to colour health bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    Healthy,
    Wounded,
    Critical,
}
