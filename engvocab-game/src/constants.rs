//! Centralized balance and timing constants for EngVocab game logic.
//!
//! Combat math and the pacing of every delayed transition live here so that
//! tuning happens in one reviewed place rather than across the state machine.

// Combat -------------------------------------------------------------------
pub const HEALTH_MAX: u8 = 100;
pub const DAMAGE_STEP: u8 = 20;

// Question flow ------------------------------------------------------------
pub const DEFAULT_BATCH_SIZE: usize = 5;
pub const FIRST_LEVEL: u32 = 1;
pub const DEFAULT_QUESTION_TEXT: &str = "What is the opposite of 'big'?";
pub const DEFAULT_QUESTION_ANSWER: &str = "small";

// Transition delays (milliseconds) ----------------------------------------
pub const INITIAL_ENCOUNTER_DELAY_MS: u64 = 1_000;
pub const INPUT_FOCUS_DELAY_MS: u64 = 100;
pub const VICTORY_REVEAL_DELAY_MS: u64 = 1_500;
pub const VICTORY_ADVANCE_DELAY_MS: u64 = 2_000;
pub const GAME_OVER_REVEAL_DELAY_MS: u64 = 1_000;
pub const CHEAT_TRANSITION_DELAY_MS: u64 = 1_000;
pub const LEVEL_SETUP_DELAY_MS: u64 = 2_000;
pub const LEVEL_BANNER_FADE_MS: u64 = 1_000;
pub const ENCOUNTER_RESUME_DELAY_MS: u64 = 500;

// Viewport -----------------------------------------------------------------
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 450.0;

// Attack animation ---------------------------------------------------------
pub(crate) const LUNGE_FRACTION: f32 = 0.25;
pub(crate) const LUNGE_HOLD_MS: u64 = 250;
pub(crate) const FLASH_RADIUS: f32 = 60.0;
pub(crate) const FLASH_START_ALPHA: f32 = 0.8;
pub(crate) const FLASH_ALPHA_STEP: f32 = 0.05;
pub(crate) const FLASH_SCALE_STEP: f32 = 0.1;
pub(crate) const FLASH_FRAME_MS: u64 = 30;
pub(crate) const SHAKE_COUNT: u32 = 5;
pub(crate) const SHAKE_DISTANCE: f32 = 20.0;
pub(crate) const SHAKE_FRAME_MS: u64 = 80;
pub(crate) const SHAKE_SETTLE_MS: u64 = 100;

// Enemy presentation -------------------------------------------------------
pub(crate) const ENEMY_SPRITE_DEFAULT: &str = "enemy";
pub(crate) const ENEMY_SPRITE_LEVEL_TWO: &str = "enemy-sprite2";
pub(crate) const ENEMY_SPRITE_LEVEL_THREE: &str = "enemy-sprite3";
pub(crate) const ENEMY_SCALE_DEFAULT: f32 = 0.35;
pub(crate) const ENEMY_SCALE_LEVEL_TWO: f32 = 0.174;
pub(crate) const ENEMY_BREATHING_DELAY_FIRST_LEVEL_MS: u32 = 800;
