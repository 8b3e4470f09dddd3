//! Side effects requested by the encounter state machine.
//!
//! The machine never touches a DOM or a scene graph. It returns these
//! commands and a presenter carries them out, which keeps every transition
//! testable as plain data.
use crate::combat::{Combatant, Health, HealthBand};
use crate::constants::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, ENEMY_BREATHING_DELAY_FIRST_LEVEL_MS,
    ENEMY_SCALE_DEFAULT, ENEMY_SCALE_LEVEL_TWO, ENEMY_SPRITE_DEFAULT, ENEMY_SPRITE_LEVEL_THREE,
    ENEMY_SPRITE_LEVEL_TWO,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Sprite selection for the enemy of a given level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyLook {
    pub sprite: String,
    pub scale: f32,
    pub mirrored: bool,
    pub breathing_delay_ms: u32,
}

impl EnemyLook {
    #[must_use]
    pub fn for_level(level: u32) -> Self {
        let (sprite, scale, mirrored) = match level {
            2 => (ENEMY_SPRITE_LEVEL_TWO, ENEMY_SCALE_LEVEL_TWO, true),
            3 => (ENEMY_SPRITE_LEVEL_THREE, ENEMY_SCALE_DEFAULT, true),
            _ => (ENEMY_SPRITE_DEFAULT, ENEMY_SCALE_DEFAULT, false),
        };
        let breathing_delay_ms = if level <= 1 {
            ENEMY_BREATHING_DELAY_FIRST_LEVEL_MS
        } else {
            0
        };
        Self {
            sprite: sprite.to_string(),
            scale,
            mirrored,
            breathing_delay_ms,
        }
    }
}

/// Centered overlay messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Banner {
    Victory,
    GameOver,
    CheatSkip { level: u32 },
    Level { level: u32, cheat: bool },
}

impl Banner {
    #[must_use]
    pub fn text(self) -> String {
        match self {
            Self::Victory => String::from("VICTORY!"),
            Self::GameOver => String::from("GAME OVER"),
            Self::CheatSkip { level } => format!("SKIPPING TO LEVEL {level}"),
            Self::Level { level, .. } => format!("LEVEL {level}"),
        }
    }

    /// Victory and cheat banners are cleared when the next level begins.
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Victory | Self::CheatSkip { .. })
    }

    /// Whether the banner carries the restart affordance.
    #[must_use]
    pub const fn offers_restart(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DisplayCommand {
    ShowQuestion { text: String },
    ShowQuestionBox,
    HideQuestionBox,
    ClearAnswer,
    FocusAnswer,
    BindQuestionControls,
    HaltActors,
    SetGameplayActive { active: bool },
    UpdateHealth {
        side: Combatant,
        value: u8,
        band: HealthBand,
    },
    PlayAttack { attacker: Combatant },
    HideEnemy,
    SpawnEnemy { look: EnemyLook },
    SetLevelLabel { level: u32 },
    ShowBanner { banner: Banner },
    ClearTransientBanners,
    FadeLevelBanner,
    ResetScene,
    ResizeViewport { size: ViewportSize },
}

impl DisplayCommand {
    #[must_use]
    pub fn health(side: Combatant, health: Health) -> Self {
        Self::UpdateHealth {
            side,
            value: health.value(),
            band: health.band(),
        }
    }

    #[must_use]
    pub fn show_question(text: &str) -> Self {
        Self::ShowQuestion {
            text: text.to_string(),
        }
    }
}
