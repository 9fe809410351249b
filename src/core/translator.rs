use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::core::{
    msg::{pointer::PointerMsg, system::SystemMsg, ui::UiMsg, Msg},
    raw_msg::RawMsg,
    state::AppState,
    widget::WidgetId,
};
use crate::presentation::config::keybindings::Action;

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse),

        // Ticks drive the ticker in the runner, renders are the runner's business
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn translate_mouse_event(mouse: MouseEvent) -> Vec<Msg> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            vec![Msg::Pointer(PointerMsg::Moved { x, y })]
        }
        MouseEventKind::Down(MouseButton::Left) => vec![Msg::Pointer(PointerMsg::Clicked { x, y })],
        MouseEventKind::ScrollUp => vec![Msg::Ui(UiMsg::ScrollUp)],
        MouseEventKind::ScrollDown => vec![Msg::Ui(UiMsg::ScrollDown)],
        _ => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if state.topmost_overlay() == Some(WidgetId::Contacts) {
        translate_form_keys(key, state)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while the contact form has focus
///
/// Plain characters are typed into the focused field; only bindings with a
/// modifier or on a non-character key stay active.
fn translate_form_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let typed = matches!(key.code, KeyCode::Char(_))
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    if !typed {
        if let Some(action) = state.config.keybindings.action_for(&key) {
            return action_to_msgs(action, state);
        }
    }

    match key.code {
        KeyCode::Char(c) if typed => vec![Msg::Ui(UiMsg::FormInput(c))],
        KeyCode::Enter => vec![Msg::Ui(UiMsg::FormInput('\n'))],
        KeyCode::Backspace => vec![Msg::Ui(UiMsg::FormBackspace)],
        _ => vec![],
    }
}

fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match state.config.keybindings.action_for(&key) {
        Some(action) => action_to_msgs(action, state),
        None => vec![],
    }
}

fn action_to_msgs(action: Action, state: &AppState) -> Vec<Msg> {
    let open = |widget: WidgetId| {
        // Overlays are modal: cards underneath cannot be opened from the keyboard
        if state.topmost_overlay().is_some() {
            vec![]
        } else {
            vec![Msg::Ui(UiMsg::OpenOverlay(widget))]
        }
    };

    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::CloseOverlay => vec![Msg::Ui(UiMsg::CloseTopmost)],
        Action::OpenAbout => open(WidgetId::About),
        Action::OpenSkills => open(WidgetId::Skills),
        Action::OpenProjects => open(WidgetId::Projects),
        Action::OpenCertificates => open(WidgetId::Certificates),
        Action::OpenContacts => open(WidgetId::Contacts),
        Action::FlipProfile => vec![Msg::Ui(UiMsg::FlipProfile)],
        Action::NextCategory => vec![Msg::Ui(UiMsg::NextCategory)],
        Action::ToggleProjectsView => vec![Msg::Ui(UiMsg::ToggleProjectsView)],
        Action::NextPage => vec![Msg::Ui(UiMsg::NextPage)],
        Action::PrevPage => vec![Msg::Ui(UiMsg::PrevPage)],
        Action::ScrollUp => vec![Msg::Ui(UiMsg::ScrollUp)],
        Action::ScrollDown => vec![Msg::Ui(UiMsg::ScrollDown)],
        Action::NextField => vec![Msg::Ui(UiMsg::NextField)],
        Action::PrevField => vec![Msg::Ui(UiMsg::PrevField)],
        Action::Submit => vec![Msg::Ui(UiMsg::SubmitContact)],
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyEventKind;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::core::update::update;
    use crate::infrastructure::config::Config;

    fn state() -> AppState {
        let config = Config::embedded().unwrap_or_else(|e| panic!("embedded config: {e}"));
        let mut state = AppState::new(config, 120, 40);
        let fired: Vec<Msg> = state.ticker.advance(Duration::from_secs(2)).collect();
        for msg in fired {
            update(msg, &mut state);
        }
        state
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> RawMsg {
        RawMsg::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    #[rstest]
    #[case(key(KeyCode::Char('q')), vec![Msg::System(SystemMsg::Quit)])]
    #[case(key(KeyCode::Esc), vec![Msg::Ui(UiMsg::CloseTopmost)])]
    #[case(key(KeyCode::Char('2')), vec![Msg::Ui(UiMsg::OpenOverlay(WidgetId::Skills))])]
    #[case(key(KeyCode::Char('f')), vec![Msg::Ui(UiMsg::FlipProfile)])]
    #[case(key(KeyCode::Char('x')), vec![])]
    #[case(mouse(MouseEventKind::Moved, 3, 4), vec![Msg::Pointer(PointerMsg::Moved { x: 3, y: 4 })])]
    #[case(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4), vec![Msg::Pointer(PointerMsg::Clicked { x: 3, y: 4 })])]
    #[case(mouse(MouseEventKind::Down(MouseButton::Right), 3, 4), vec![])]
    #[case(mouse(MouseEventKind::ScrollDown, 0, 0), vec![Msg::Ui(UiMsg::ScrollDown)])]
    #[case(RawMsg::Resize(90, 30), vec![Msg::System(SystemMsg::Resize(90, 30))])]
    #[case(RawMsg::Tick, vec![])]
    fn test_translate(#[case] raw: RawMsg, #[case] expected: Vec<Msg>) {
        assert_eq!(translate_raw_to_domain(raw, &state()), expected);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(raw, &state()),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[test]
    fn test_open_keys_ignored_while_overlay_open() {
        let mut state = state();
        update(Msg::Ui(UiMsg::OpenOverlay(WidgetId::About)), &mut state);

        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('3')), &state),
            vec![]
        );
    }

    #[test]
    fn test_contact_form_captures_plain_characters() {
        let mut state = state();
        update(Msg::Ui(UiMsg::OpenOverlay(WidgetId::Contacts)), &mut state);

        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('q')), &state),
            vec![Msg::Ui(UiMsg::FormInput('q'))]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Tab), &state),
            vec![Msg::Ui(UiMsg::NextField)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Backspace), &state),
            vec![Msg::Ui(UiMsg::FormBackspace)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Esc), &state),
            vec![Msg::Ui(UiMsg::CloseTopmost)]
        );
        let submit = RawMsg::Key(KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        });
        assert_eq!(
            translate_raw_to_domain(submit, &state),
            vec![Msg::Ui(UiMsg::SubmitContact)]
        );
    }
}
