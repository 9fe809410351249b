use chrono::Local;

use crate::{
    core::cmd::Cmd,
    core::msg::{pointer::PointerMsg, system::SystemMsg, timer::TimerMsg, ui::UiMsg, Msg},
    core::markers::Marker,
    core::scope::EventKind,
    core::state::{AppState, Dashboard, Page},
    core::widget::WidgetId,
    domain::viewport::ViewportMode,
};

/// Element name of the profile card, used for hover detection
pub const PROFILE_CARD: &str = "profile-card";

/// Elm-like update function
///
/// Widget and overlay state is owned by RAII guards and cannot be cloned, so
/// the state is updated in place; the returned commands are the side effects
/// for the runtime to carry out.
pub fn update(msg: Msg, state: &mut AppState) -> Vec<Cmd> {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }
    match msg {
        Msg::System(SystemMsg::Resize(width, height)) => {
            let mut commands = state.system.update(SystemMsg::Resize(width, height));
            commands.extend(on_resize(state, width));
            commands
        }
        Msg::System(system_msg) => state.system.update(system_msg),
        Msg::Timer(timer_msg) => update_timer(timer_msg, state),
        Msg::Pointer(pointer_msg) => update_pointer(pointer_msg, state),
        Msg::Ui(ui_msg) => update_ui(ui_msg, state),
    }
}

/// Re-classify the viewport and notify resize listeners on a crossing
fn on_resize(state: &mut AppState, columns: u16) -> Vec<Cmd> {
    let width = state.config.layout.width_px(columns);
    let Some(mode) = state.breakpoint.observe(width) else {
        return vec![];
    };
    state.pointer.on_viewport(mode);
    for owner in state.listeners.owners(EventKind::Resize) {
        notify_viewport(state, owner, mode);
    }
    vec![Cmd::log_info(format!("viewport is now {mode:?} ({width}px)"))]
}

fn notify_viewport(state: &mut AppState, owner: WidgetId, mode: ViewportMode) {
    if let (WidgetId::Profile, Some(dashboard)) = (owner, state.page.dashboard_mut()) {
        dashboard.profile.on_viewport(mode);
    }
}

fn update_timer(msg: TimerMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        TimerMsg::LoadingFinished => {
            if !state.page.is_loading() {
                return vec![];
            }
            match Dashboard::mount(
                &state.ticker,
                &state.listeners,
                &state.markers,
                &state.config,
                state.breakpoint.mode(),
            ) {
                Ok(dashboard) => {
                    state.page = Page::Ready(Box::new(dashboard));
                    vec![Cmd::log_info("dashboard mounted")]
                }
                Err(e) => vec![Cmd::log_error(format!("failed to mount dashboard: {e}"))],
            }
        }
        TimerMsg::ClockTick => {
            if let Some(dashboard) = state.dashboard_mut() {
                dashboard.clock.tick(Local::now());
            }
            vec![]
        }
        TimerMsg::RotateTitle => {
            if let Some(dashboard) = state.dashboard_mut() {
                dashboard.profile.rotate();
            }
            vec![]
        }
        TimerMsg::RotateQuote => {
            if let Some(dashboard) = state.dashboard_mut() {
                dashboard.quote.rotate();
            }
            vec![]
        }
    }
}

fn update_pointer(msg: PointerMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        PointerMsg::Moved { x, y } => {
            state.pointer.on_move(x, y);
            let Some(target) = state.scene.hit_test(x, y) else {
                return vec![];
            };
            state.pointer.on_hover_check(&state.scene, target);
            let over_profile = state.scene.is_within(target, PROFILE_CARD);
            for owner in state.listeners.owners(EventKind::PointerOver) {
                if let (WidgetId::Profile, Some(dashboard)) = (owner, state.page.dashboard_mut()) {
                    dashboard.profile.on_pointer_over(over_profile);
                }
            }
            vec![]
        }
        PointerMsg::Clicked { x, y } => {
            let messages = state.scene.click_at(x, y);
            messages
                .into_iter()
                .flat_map(|msg| update(msg, state))
                .collect()
        }
    }
}

fn update_ui(msg: UiMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        UiMsg::OpenLink(href) => vec![Cmd::OpenLink { href }],
        UiMsg::ScrollUp => scroll(false, state),
        UiMsg::ScrollDown => scroll(true, state),
        msg => update_dashboard(msg, state),
    }
}

fn update_dashboard(msg: UiMsg, state: &mut AppState) -> Vec<Cmd> {
    let Some(dashboard) = state.page.dashboard_mut() else {
        return vec![];
    };

    match msg {
        UiMsg::OpenOverlay(widget) => {
            if dashboard.open(widget) {
                vec![Cmd::log_info(format!("opened {widget} overlay"))]
            } else {
                vec![]
            }
        }
        UiMsg::CloseOverlay(widget) => {
            dashboard.close(widget);
            vec![]
        }
        UiMsg::CloseTopmost => {
            dashboard.close_topmost();
            vec![]
        }

        UiMsg::FlipProfile => {
            dashboard.profile.toggle();
            vec![]
        }
        UiMsg::ProfileClicked => {
            dashboard.profile.on_click();
            vec![]
        }

        UiMsg::SelectCategory(category) => {
            if let Some(panel) = dashboard.skills.content_mut() {
                panel.select(category);
            }
            vec![]
        }
        UiMsg::NextCategory => {
            if let Some(panel) = dashboard.skills.content_mut() {
                panel.next_category();
            }
            vec![]
        }

        UiMsg::SetProjectsView(view) => {
            if let Some(panel) = dashboard.projects.content_mut() {
                panel.set_view(view);
            }
            vec![]
        }
        UiMsg::ToggleProjectsView => {
            if let Some(panel) = dashboard.projects.content_mut() {
                panel.toggle_view();
            }
            vec![]
        }
        UiMsg::NextPage => {
            if let Some(panel) = dashboard.projects.content_mut() {
                panel.next_page();
            }
            vec![]
        }
        UiMsg::PrevPage => {
            if let Some(panel) = dashboard.projects.content_mut() {
                panel.prev_page();
            }
            vec![]
        }
        UiMsg::PreviewDesign(index) => {
            if let Some(panel) = dashboard.projects.content_mut() {
                panel.preview(index);
            }
            vec![]
        }
        UiMsg::ClosePreview => {
            if let Some(panel) = dashboard.projects.content_mut() {
                panel.close_preview();
            }
            vec![]
        }

        UiMsg::FocusField(field) => {
            if let Some(form) = dashboard.contacts.content_mut() {
                form.focus_field(field);
            }
            vec![]
        }
        UiMsg::NextField => {
            if let Some(form) = dashboard.contacts.content_mut() {
                form.next_field();
            }
            vec![]
        }
        UiMsg::PrevField => {
            if let Some(form) = dashboard.contacts.content_mut() {
                form.prev_field();
            }
            vec![]
        }
        UiMsg::FormInput(c) => {
            if let Some(form) = dashboard.contacts.content_mut() {
                form.input(c);
            }
            vec![]
        }
        UiMsg::FormBackspace => {
            if let Some(form) = dashboard.contacts.content_mut() {
                form.backspace();
            }
            vec![]
        }
        UiMsg::SubmitContact => {
            let Some(form) = dashboard.contacts.content_mut() else {
                return vec![];
            };
            match form.submit() {
                Ok(submission) => {
                    dashboard.close(WidgetId::Contacts);
                    state.system.status_message = Some("Message sent. Thank you!".to_string());
                    vec![Cmd::SubmitContact {
                        name: submission.name,
                        email: submission.email,
                        message: submission.message,
                    }]
                }
                // the form keeps the error and drops it on close
                Err(e) => {
                    log::debug!("contact form rejected: {e}");
                    vec![]
                }
            }
        }

        UiMsg::OpenLink(_) | UiMsg::ScrollUp | UiMsg::ScrollDown => vec![],
    }
}

/// Scroll the topmost scrollable overlay, or the page when nothing locks it
fn scroll(down: bool, state: &mut AppState) -> Vec<Cmd> {
    let locked = state.body.has(Marker::ScrollLock);
    let Some(dashboard) = state.page.dashboard_mut() else {
        return vec![];
    };
    if dashboard.topmost() == Some(WidgetId::Certificates) {
        if let Some(panel) = dashboard.certificates.content_mut() {
            if down {
                panel.scroll_down();
            } else {
                panel.scroll_up();
            }
        }
        return vec![];
    }
    if locked {
        log::trace!("page scroll ignored while scroll-locked");
        return vec![];
    }
    dashboard.scroll = if down {
        dashboard.scroll.saturating_add(1)
    } else {
        dashboard.scroll.saturating_sub(1)
    };
    vec![]
}
