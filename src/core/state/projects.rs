use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::content::{Design, DESIGNS};
use crate::core::{markers::Markers, overlay::OverlayController};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum ProjectsView {
    /// Web projects
    #[default]
    Webs,
    /// Paginated graphic-design gallery
    Gallery,
}

impl ProjectsView {
    pub fn toggled(self) -> Self {
        match self {
            ProjectsView::Webs => ProjectsView::Gallery,
            ProjectsView::Gallery => ProjectsView::Webs,
        }
    }
}

/// Content of the projects overlay
///
/// The image preview is a second overlay nested in this one. Closing the
/// projects overlay drops the panel and with it any open preview.
#[derive(Debug)]
pub struct ProjectsPanel {
    view: ProjectsView,
    page: usize,
    page_size: usize,
    preview: OverlayController<usize>,
}

impl ProjectsPanel {
    pub fn new(markers: Markers, page_size: usize) -> Self {
        Self {
            view: ProjectsView::default(),
            page: 0,
            page_size: page_size.max(1),
            preview: OverlayController::new(markers),
        }
    }

    pub fn view(&self) -> ProjectsView {
        self.view
    }

    /// Switch tabs; the gallery starts over at its first page
    pub fn set_view(&mut self, view: ProjectsView) {
        if self.view == view {
            return;
        }
        self.view = view;
        self.page = 0;
        self.preview.close();
    }

    pub fn toggle_view(&mut self) {
        self.set_view(self.view.toggled());
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        DESIGNS.len().div_ceil(self.page_size).max(1)
    }

    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Designs on the current gallery page with their global indices
    pub fn visible_designs(&self) -> Vec<(usize, &'static Design)> {
        DESIGNS
            .iter()
            .enumerate()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .collect()
    }

    pub fn preview(&mut self, index: usize) -> bool {
        if index >= DESIGNS.len() {
            return false;
        }
        self.preview.open_with(index)
    }

    pub fn close_preview(&mut self) -> bool {
        self.preview.close()
    }

    pub fn previewing(&self) -> Option<&'static Design> {
        self.preview.content().and_then(|index| DESIGNS.get(*index))
    }

    pub fn is_previewing(&self) -> bool {
        self.preview.is_open()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::core::markers::{Environment, Marker, RecordingEnvironment};

    fn panel(page_size: usize) -> (ProjectsPanel, Markers) {
        let env = RecordingEnvironment::new();
        let markers = Markers::new(env as Rc<dyn Environment>);
        (ProjectsPanel::new(markers.clone(), page_size), markers)
    }

    #[rstest]
    #[case(4, 2)]
    #[case(3, 2)]
    #[case(6, 1)]
    #[case(100, 1)]
    #[case(0, 6)]
    fn test_page_count(#[case] page_size: usize, #[case] expected: usize) {
        let (panel, _) = panel(page_size);
        assert_eq!(panel.page_count(), expected);
    }

    #[test]
    fn test_paging_clamps_at_both_ends() {
        let (mut panel, _) = panel(4);

        assert!(!panel.prev_page());
        assert!(panel.next_page());
        assert_eq!(panel.page(), 1);
        assert!(!panel.next_page());
        assert_eq!(panel.page(), 1);

        let indices: Vec<usize> = panel.visible_designs().iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![4, 5]);
    }

    #[test]
    fn test_switching_view_resets_page_and_preview() {
        let (mut panel, markers) = panel(4);
        panel.set_view(ProjectsView::Gallery);
        panel.next_page();
        assert!(panel.preview(5));
        assert_eq!(markers.holders(Marker::ScrollLock), 1);

        panel.toggle_view();
        assert_eq!(panel.view(), ProjectsView::Webs);
        assert_eq!(panel.page(), 0);
        assert!(!panel.is_previewing());
        assert_eq!(markers.holders(Marker::ScrollLock), 0);
    }

    #[test]
    fn test_preview_holds_its_own_lock() {
        let (mut panel, markers) = panel(4);

        assert!(!panel.preview(DESIGNS.len()));
        assert!(panel.preview(1));
        assert_eq!(panel.previewing(), Some(&DESIGNS[1]));
        assert!(markers.is_active(Marker::ScrollLock));

        drop(panel);
        assert!(!markers.is_active(Marker::ScrollLock));
    }
}
