use color_eyre::eyre::Result;

use super::WidgetScope;
use crate::content::TITLES;
use crate::core::{
    msg::{timer::TimerMsg, Msg},
    scope::{EventKind, Listeners},
    ticker::Ticker,
    widget::WidgetId,
};
use crate::domain::{flip::FlipState, rotation::RotationState, viewport::ViewportMode};
use crate::infrastructure::config::TimingConfig;

/// Profile card: rotating job titles on a card that flips
#[derive(Debug)]
pub struct ProfileState {
    titles: RotationState<&'static str>,
    flip: FlipState,
    hovered: bool,
    mode: ViewportMode,
    _scope: WidgetScope,
}

impl ProfileState {
    pub fn mount(
        mode: ViewportMode,
        ticker: &Ticker<Msg>,
        listeners: &Listeners<WidgetId>,
        timing: &TimingConfig,
    ) -> Result<Self> {
        let titles = RotationState::new(TITLES.iter().copied())?;
        let mut scope = WidgetScope::new(WidgetId::Profile, ticker, listeners);
        scope.every(timing.title_interval(), Msg::Timer(TimerMsg::RotateTitle));
        scope.listen(EventKind::Resize);
        scope.listen(EventKind::PointerOver);
        Ok(Self {
            titles,
            flip: FlipState::default(),
            hovered: false,
            mode,
            _scope: scope,
        })
    }

    pub fn title(&self) -> &'static str {
        self.titles.selected()
    }

    pub fn titles(&self) -> &RotationState<&'static str> {
        &self.titles
    }

    pub fn rotate(&mut self) {
        self.titles.advance();
    }

    pub fn flip(&self) -> FlipState {
        self.flip
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn toggle(&mut self) {
        self.flip = self.flip.toggled();
    }

    pub fn on_click(&mut self) {
        self.flip.on_click(self.mode);
    }

    /// Resize listener; only called when the breakpoint is crossed
    pub fn on_viewport(&mut self, mode: ViewportMode) {
        self.mode = mode;
        self.hovered = false;
    }

    /// Pointer-over listener with whether the pointer is inside the card
    pub fn on_pointer_over(&mut self, inside: bool) {
        if inside == self.hovered {
            return;
        }
        self.hovered = inside;
        if inside {
            self.flip.on_hover_start(self.mode);
        } else {
            self.flip.on_hover_end(self.mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    fn mount(mode: ViewportMode) -> (ProfileState, Ticker<Msg>, Listeners<WidgetId>) {
        let ticker = Ticker::new();
        let listeners = Listeners::new();
        let profile = ProfileState::mount(mode, &ticker, &listeners, &TimingConfig::default())
            .unwrap_or_else(|e| panic!("mount failed: {e}"));
        (profile, ticker, listeners)
    }

    #[test]
    fn test_mount_registers_timer_and_listeners() {
        let (profile, ticker, listeners) = mount(ViewportMode::Wide);

        assert_eq!(ticker.active(), 1);
        assert_eq!(listeners.owners(EventKind::Resize), vec![WidgetId::Profile]);
        assert_eq!(listeners.owners(EventKind::PointerOver), vec![WidgetId::Profile]);

        drop(profile);
        assert_eq!(ticker.active(), 0);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_title_rotates_every_three_seconds() {
        let (mut profile, ticker, _listeners) = mount(ViewportMode::Wide);
        assert_eq!(profile.title(), TITLES[0]);

        for msg in ticker.advance(Duration::from_millis(2999)) {
            assert_eq!(msg, Msg::Timer(TimerMsg::RotateTitle));
            profile.rotate();
        }
        assert_eq!(profile.title(), TITLES[0]);

        for _ in ticker.advance(Duration::from_millis(1)) {
            profile.rotate();
        }
        assert_eq!(profile.title(), TITLES[1]);
    }

    #[test]
    fn test_hover_flips_on_wide_only() {
        let (mut profile, _ticker, _listeners) = mount(ViewportMode::Wide);

        profile.on_pointer_over(true);
        assert_eq!(profile.flip(), FlipState::Back);
        profile.on_click();
        assert_eq!(profile.flip(), FlipState::Back);
        profile.on_pointer_over(false);
        assert_eq!(profile.flip(), FlipState::Front);

        profile.on_viewport(ViewportMode::Narrow);
        profile.on_pointer_over(true);
        assert_eq!(profile.flip(), FlipState::Front);
        profile.on_click();
        assert_eq!(profile.flip(), FlipState::Back);
    }

    #[test]
    fn test_keyboard_toggle_ignores_mode() {
        let (mut profile, _ticker, _listeners) = mount(ViewportMode::Wide);
        profile.toggle();
        assert!(profile.flip().is_back());
    }
}
