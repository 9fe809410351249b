use serde::{Deserialize, Serialize};

use crate::content::SkillCategory;
use crate::core::state::contact::FormField;
use crate::core::state::projects::ProjectsView;
use crate::core::widget::WidgetId;

/// Messages that change widget and overlay state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    // Overlays
    OpenOverlay(WidgetId),
    CloseOverlay(WidgetId),
    CloseTopmost,

    // Profile card
    /// Explicit toggle from the keyboard
    FlipProfile,
    /// Click on the card; only flips on narrow viewports
    ProfileClicked,

    // Skills overlay
    SelectCategory(SkillCategory),
    NextCategory,

    // Projects overlay
    SetProjectsView(ProjectsView),
    ToggleProjectsView,
    NextPage,
    PrevPage,
    PreviewDesign(usize),
    ClosePreview,

    // Contact form
    FocusField(FormField),
    NextField,
    PrevField,
    FormInput(char),
    FormBackspace,
    SubmitContact,

    // Page
    ScrollUp,
    ScrollDown,
    OpenLink(String),
}
