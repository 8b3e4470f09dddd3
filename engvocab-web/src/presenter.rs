//! Applies display commands to the host page and the scene host.
use crate::dom;
use crate::listeners::{
    ANSWER_INPUT_ID, QUESTION_BOX_ID, QUESTION_TEXT_ID, QuestionControls, SubmitHandler,
};
use crate::scene::{self, method};
use engvocab_game::constants::LEVEL_BANNER_FADE_MS;
use engvocab_game::{
    AnimationAction, AnimationScript, Banner, CombatPresenter, DisplayCommand, EnemyLook,
    HealthBand, Scheduler, ViewportSize,
};
use wasm_bindgen::JsValue;

pub const LEVEL_BANNER_ID: &str = "level";

#[must_use]
pub const fn health_color(band: HealthBand) -> &'static str {
    match band {
        HealthBand::Healthy => "#00FF00",
        HealthBand::Wounded => "#FFFF00",
        HealthBand::Critical => "#FF0000",
    }
}

#[must_use]
pub const fn banner_id(banner: Banner) -> &'static str {
    match banner {
        Banner::Victory => "victory",
        Banner::GameOver => "game-over",
        Banner::CheatSkip { .. } => "cheat",
        Banner::Level { .. } => LEVEL_BANNER_ID,
    }
}

#[must_use]
pub const fn banner_color(banner: Banner) -> &'static str {
    match banner {
        Banner::Victory => "#FFFFFF",
        Banner::GameOver => "#FF0000",
        Banner::CheatSkip { .. } | Banner::Level { cheat: true, .. } => "#FF00FF",
        Banner::Level { cheat: false, .. } => "#FFFF00",
    }
}

#[must_use]
pub fn level_label(level: u32) -> String {
    format!("LEVEL {level}")
}

/// Presenter for the browser build.
pub struct DomPresenter {
    controls: QuestionControls,
    on_submit: SubmitHandler,
    animations: Scheduler<AnimationAction>,
    viewport: ViewportSize,
}

impl DomPresenter {
    #[must_use]
    pub fn new(on_submit: SubmitHandler) -> Self {
        Self {
            controls: QuestionControls::new(),
            on_submit,
            animations: Scheduler::new(),
            viewport: ViewportSize::default(),
        }
    }

    #[must_use]
    pub fn has_pending_animation(&self) -> bool {
        !self.animations.is_idle()
    }

    #[must_use]
    pub const fn controls(&self) -> &QuestionControls {
        &self.controls
    }

    /// Play every animation step that became due within `elapsed_ms`.
    pub fn advance_animations(&mut self, elapsed_ms: u64) {
        for action in self.animations.advance(elapsed_ms) {
            match serde_json::to_string(&action) {
                Ok(step) => scene::call(method::ANIMATE, &[JsValue::from_str(&step)]),
                Err(err) => log::warn!("could not encode animation step: {err}"),
            }
        }
    }

    fn set_question_box_visible(visible: bool) {
        let Some(question_box) = dom::html_element(QUESTION_BOX_ID) else {
            return;
        };
        let display = if visible { "flex" } else { "none" };
        if question_box
            .style()
            .set_property("display", display)
            .is_err()
        {
            log::warn!("could not toggle #{QUESTION_BOX_ID}");
        }
    }

    fn show_question(text: &str) {
        if let Some(el) = dom::html_element(QUESTION_TEXT_ID) {
            el.set_text_content(Some(text));
        }
    }

    fn spawn_enemy(look: &EnemyLook) {
        scene::call(
            method::SPAWN_ENEMY,
            &[
                JsValue::from_str(&look.sprite),
                JsValue::from_f64(f64::from(look.scale)),
                JsValue::from_bool(look.mirrored),
                JsValue::from_f64(f64::from(look.breathing_delay_ms)),
            ],
        );
    }

    fn show_banner(banner: Banner) {
        scene::call(
            method::SHOW_BANNER,
            &[
                JsValue::from_str(banner_id(banner)),
                JsValue::from_str(&banner.text()),
                JsValue::from_str(banner_color(banner)),
                JsValue::from_bool(banner.offers_restart()),
            ],
        );
    }
}

impl CombatPresenter for DomPresenter {
    fn apply(&mut self, command: &DisplayCommand) {
        log::debug!("apply {command:?}");
        match command {
            DisplayCommand::ShowQuestion { text } => Self::show_question(text),
            DisplayCommand::ShowQuestionBox => Self::set_question_box_visible(true),
            DisplayCommand::HideQuestionBox => Self::set_question_box_visible(false),
            DisplayCommand::ClearAnswer => {
                if let Some(input) = dom::input_element(ANSWER_INPUT_ID) {
                    input.set_value("");
                }
            }
            DisplayCommand::FocusAnswer => {
                if let Some(input) = dom::input_element(ANSWER_INPUT_ID)
                    && input.focus().is_err()
                {
                    log::debug!("answer input refused focus");
                }
            }
            DisplayCommand::BindQuestionControls => self.controls.bind(&self.on_submit),
            DisplayCommand::HaltActors => scene::call(method::HALT_ACTORS, &[]),
            DisplayCommand::SetGameplayActive { active } => {
                scene::call(method::SET_GAMEPLAY_ACTIVE, &[JsValue::from_bool(*active)]);
            }
            DisplayCommand::UpdateHealth { side, value, band } => scene::call(
                method::UPDATE_HEALTH,
                &[
                    JsValue::from_str(side.label()),
                    JsValue::from_f64(f64::from(*value)),
                    JsValue::from_str(health_color(*band)),
                ],
            ),
            DisplayCommand::PlayAttack { attacker } => {
                AnimationScript::attack(*attacker, self.viewport).schedule_on(&mut self.animations);
            }
            DisplayCommand::HideEnemy => scene::call(method::HIDE_ENEMY, &[]),
            DisplayCommand::SpawnEnemy { look } => Self::spawn_enemy(look),
            DisplayCommand::SetLevelLabel { level } => scene::call(
                method::SET_LEVEL_LABEL,
                &[JsValue::from_str(&level_label(*level))],
            ),
            DisplayCommand::ShowBanner { banner } => Self::show_banner(*banner),
            DisplayCommand::ClearTransientBanners => scene::call(method::CLEAR_BANNERS, &[]),
            DisplayCommand::FadeLevelBanner => scene::call(
                method::FADE_BANNER,
                &[
                    JsValue::from_str(LEVEL_BANNER_ID),
                    JsValue::from_f64(LEVEL_BANNER_FADE_MS as f64),
                ],
            ),
            DisplayCommand::ResetScene => {
                self.animations.cancel_all();
                scene::call(method::RESET_SCENE, &[]);
            }
            DisplayCommand::ResizeViewport { size } => {
                self.viewport = *size;
                scene::call(
                    method::RESIZE,
                    &[
                        JsValue::from_f64(f64::from(size.width)),
                        JsValue::from_f64(f64::from(size.height)),
                    ],
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_colors_follow_bands() {
        assert_eq!(health_color(HealthBand::Healthy), "#00FF00");
        assert_eq!(health_color(HealthBand::Wounded), "#FFFF00");
        assert_eq!(health_color(HealthBand::Critical), "#FF0000");
    }

    #[test]
    fn cheat_banners_use_magenta() {
        assert_eq!(banner_color(Banner::CheatSkip { level: 2 }), "#FF00FF");
        assert_eq!(
            banner_color(Banner::Level {
                level: 2,
                cheat: true
            }),
            "#FF00FF"
        );
        assert_eq!(
            banner_color(Banner::Level {
                level: 2,
                cheat: false
            }),
            "#FFFF00"
        );
        assert_eq!(banner_id(Banner::GameOver), "game-over");
        assert_eq!(level_label(3), "LEVEL 3");
    }
}
