use serde::{Deserialize, Serialize};

/// Payloads carried by ticker registrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerMsg {
    /// One-shot end of the loading screen
    LoadingFinished,
    ClockTick,
    RotateTitle,
    RotateQuote,
}

impl TimerMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, TimerMsg::ClockTick)
    }
}
