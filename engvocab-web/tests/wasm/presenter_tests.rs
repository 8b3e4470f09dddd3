use crate::fixtures::{html, input, mount_question_box};
use engvocab_game::{CombatPresenter, Combatant, DisplayCommand};
use engvocab_web::listeners::{QUESTION_BOX_ID, QUESTION_TEXT_ID};
use engvocab_web::presenter::DomPresenter;
use std::rc::Rc;
use wasm_bindgen_test::*;

fn presenter() -> DomPresenter {
    DomPresenter::new(Rc::new(|_raw| {}))
}

#[wasm_bindgen_test]
fn question_commands_update_the_box() {
    mount_question_box();
    let mut presenter = presenter();
    input().set_value("typed");

    presenter.apply_all(&[
        DisplayCommand::show_question("What color is grass?"),
        DisplayCommand::ShowQuestionBox,
        DisplayCommand::ClearAnswer,
    ]);
    assert_eq!(
        html(QUESTION_TEXT_ID).text_content().as_deref(),
        Some("What color is grass?")
    );
    assert_eq!(
        html(QUESTION_BOX_ID)
            .style()
            .get_property_value("display")
            .expect("display"),
        "flex"
    );
    assert_eq!(input().value(), "");

    presenter.apply(&DisplayCommand::HideQuestionBox);
    assert_eq!(
        html(QUESTION_BOX_ID)
            .style()
            .get_property_value("display")
            .expect("display"),
        "none"
    );
}

#[wasm_bindgen_test]
fn attacks_queue_animation_until_played_out() {
    let mut presenter = presenter();
    presenter.apply(&DisplayCommand::PlayAttack {
        attacker: Combatant::Player,
    });
    assert!(presenter.has_pending_animation());
    presenter.advance_animations(10_000);
    assert!(!presenter.has_pending_animation());

    presenter.apply(&DisplayCommand::PlayAttack {
        attacker: Combatant::Enemy,
    });
    presenter.apply(&DisplayCommand::ResetScene);
    assert!(!presenter.has_pending_animation());
}

#[wasm_bindgen_test]
fn missing_elements_are_skipped() {
    if let Some(existing) = engvocab_web::dom::document()
        .and_then(|doc| doc.get_element_by_id(QUESTION_BOX_ID))
    {
        existing.remove();
    }
    let mut presenter = presenter();
    presenter.apply_all(&[
        DisplayCommand::show_question("ignored"),
        DisplayCommand::ShowQuestionBox,
        DisplayCommand::FocusAnswer,
        DisplayCommand::BindQuestionControls,
    ]);
    assert!(presenter.controls().is_bound());
}
