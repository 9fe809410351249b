use crate::content::{tech_for, SkillCategory, Tech};

/// Content of the skills overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillsPanel {
    category: SkillCategory,
}

impl SkillsPanel {
    pub fn category(&self) -> SkillCategory {
        self.category
    }

    pub fn select(&mut self, category: SkillCategory) {
        self.category = category;
    }

    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    /// Tech entries shown under the current filter
    pub fn visible(&self) -> Vec<&'static Tech> {
        tech_for(self.category)
    }
}
