use ratatui::layout::Rect;

use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Terminal size in cells
    pub viewport: Rect,
}

impl SystemState {
    pub fn with_viewport(width: u16, height: u16) -> Self {
        Self {
            viewport: Rect::new(0, 0, width, height),
            ..Self::default()
        }
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                vec![]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {}", error));
                vec![Cmd::log_error(error)]
            }
        }
    }
}
