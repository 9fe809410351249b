use serde::{Deserialize, Serialize};

/// Pointer input in terminal cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerMsg {
    Moved { x: u16, y: u16 },
    Clicked { x: u16, y: u16 },
}

impl PointerMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, PointerMsg::Moved { .. })
    }
}
