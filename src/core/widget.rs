use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Identity of a mounted widget
///
/// Used as the owner of scopes and listener registrations and as the key of
/// overlay messages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
pub enum WidgetId {
    Root,
    Profile,
    About,
    Skills,
    Projects,
    Certificates,
    Contacts,
    Clock,
    Quote,
    Socials,
    Blog,
}

impl WidgetId {
    /// Widgets whose card opens a modal overlay
    pub const OVERLAYS: [WidgetId; 5] = [
        WidgetId::About,
        WidgetId::Skills,
        WidgetId::Projects,
        WidgetId::Certificates,
        WidgetId::Contacts,
    ];

    pub fn has_overlay(self) -> bool {
        Self::OVERLAYS.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_overlay_widgets() {
        let with_overlay: Vec<WidgetId> = WidgetId::iter().filter(|w| w.has_overlay()).collect();
        assert_eq!(with_overlay, WidgetId::OVERLAYS.to_vec());
    }

    #[test]
    fn test_display_is_kebab_case() {
        assert_eq!(WidgetId::Certificates.to_string(), "certificates");
    }
}
