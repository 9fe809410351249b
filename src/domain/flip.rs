use serde::{Deserialize, Serialize};

use super::viewport::ViewportMode;

/// Which face of the profile card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlipState {
    #[default]
    Front,
    Back,
}

impl FlipState {
    pub fn toggled(self) -> Self {
        match self {
            FlipState::Front => FlipState::Back,
            FlipState::Back => FlipState::Front,
        }
    }

    /// Clicks flip the card on narrow viewports only
    pub fn on_click(&mut self, mode: ViewportMode) {
        if mode.is_narrow() {
            *self = self.toggled();
        }
    }

    /// Hovering shows the back face on wide viewports
    pub fn on_hover_start(&mut self, mode: ViewportMode) {
        if mode.is_wide() {
            *self = FlipState::Back;
        }
    }

    pub fn on_hover_end(&mut self, mode: ViewportMode) {
        if mode.is_wide() {
            *self = FlipState::Front;
        }
    }

    pub fn is_back(self) -> bool {
        self == FlipState::Back
    }
}
