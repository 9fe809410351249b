use serde::{Deserialize, Serialize};

pub mod pointer;
pub mod system;
pub mod timer;
pub mod ui;

use pointer::PointerMsg;
use system::SystemMsg;
use timer::TimerMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function; raw terminal input is
/// translated into them first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Timer(TimerMsg),
    Pointer(PointerMsg),
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Timer(timer_msg) => timer_msg.is_frequent(),
            Msg::Pointer(pointer_msg) => pointer_msg.is_frequent(),
            _ => false,
        }
    }
}
