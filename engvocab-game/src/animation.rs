//! Attack animations expressed as timed step lists.
//!
//! A presenter replays a script on its own [`Scheduler`](crate::Scheduler),
//! so the sequence can be checked by advancing a virtual clock.
use crate::combat::Combatant;
use crate::command::ViewportSize;
use crate::constants::{
    FLASH_ALPHA_STEP, FLASH_FRAME_MS, FLASH_RADIUS, FLASH_SCALE_STEP, FLASH_START_ALPHA,
    LUNGE_FRACTION, LUNGE_HOLD_MS, SHAKE_COUNT, SHAKE_DISTANCE, SHAKE_FRAME_MS, SHAKE_SETTLE_MS,
};
use crate::scheduler::Scheduler;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    Cyan,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashColor {
    Yellow,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum AnimationAction {
    SetBodiesEnabled { enabled: bool },
    Tint { target: Combatant, tint: Tint },
    ClearTints,
    /// Horizontal offset from the actor's resting position.
    Offset { target: Combatant, dx: f32 },
    FlashSpawn {
        target: Combatant,
        color: FlashColor,
        radius: f32,
        alpha: f32,
    },
    FlashFrame { scale: f32, alpha: f32 },
    FlashDone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedStep {
    pub at_ms: u64,
    pub action: AnimationAction,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationScript {
    pub steps: Vec<TimedStep>,
}

const fn tint_for(actor: Combatant) -> Tint {
    match actor {
        Combatant::Player => Tint::Cyan,
        Combatant::Enemy => Tint::Red,
    }
}

impl AnimationScript {
    /// Lunge, flash and shake sequence for one hit by `attacker`.
    #[must_use]
    pub fn attack(attacker: Combatant, viewport: ViewportSize) -> Self {
        let target = attacker.opponent();
        let lunge = viewport.width * LUNGE_FRACTION;
        let dx = match attacker {
            Combatant::Player => lunge,
            Combatant::Enemy => -lunge,
        };
        let flash_color = match attacker {
            Combatant::Player => FlashColor::Yellow,
            Combatant::Enemy => FlashColor::Red,
        };

        let mut script = Self::default();
        script.push(0, AnimationAction::SetBodiesEnabled { enabled: false });
        script.push(
            0,
            AnimationAction::Tint {
                target: attacker,
                tint: tint_for(attacker),
            },
        );
        script.push(0, AnimationAction::Offset { target: attacker, dx });

        let impact = LUNGE_HOLD_MS;
        script.push(
            impact,
            AnimationAction::Offset {
                target: attacker,
                dx: 0.0,
            },
        );
        script.push(
            impact,
            AnimationAction::FlashSpawn {
                target,
                color: flash_color,
                radius: FLASH_RADIUS,
                alpha: FLASH_START_ALPHA,
            },
        );
        script.push(
            impact,
            AnimationAction::Tint {
                target,
                tint: tint_for(target),
            },
        );

        let mut scale = 1.0_f32;
        let mut alpha = FLASH_START_ALPHA;
        let mut frame_at = impact;
        loop {
            scale += FLASH_SCALE_STEP;
            alpha -= FLASH_ALPHA_STEP;
            if alpha <= f32::EPSILON {
                script.push(frame_at, AnimationAction::FlashDone);
                break;
            }
            script.push(frame_at, AnimationAction::FlashFrame { scale, alpha });
            frame_at += FLASH_FRAME_MS;
        }

        let mut shake_at = impact;
        for shake in 0..SHAKE_COUNT {
            let dx = if shake % 2 == 0 {
                -SHAKE_DISTANCE
            } else {
                SHAKE_DISTANCE
            };
            script.push(shake_at, AnimationAction::Offset { target, dx });
            shake_at += SHAKE_FRAME_MS;
        }
        script.push(shake_at, AnimationAction::Offset { target, dx: 0.0 });

        let settle_at = shake_at + SHAKE_SETTLE_MS;
        script.push(settle_at, AnimationAction::ClearTints);
        script.push(settle_at, AnimationAction::SetBodiesEnabled { enabled: true });
        script
    }

    fn push(&mut self, at_ms: u64, action: AnimationAction) {
        self.steps.push(TimedStep { at_ms, action });
    }

    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.steps.iter().map(|step| step.at_ms).max().unwrap_or(0)
    }

    /// Queue every step on `scheduler`, relative to its current time.
    pub fn schedule_on(self, scheduler: &mut Scheduler<AnimationAction>) {
        for step in self.steps {
            scheduler.schedule(step.at_ms, step.action);
        }
    }
}
