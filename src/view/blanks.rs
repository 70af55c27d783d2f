/// Which exercise list a blank belongs to on the grammar page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseSection {
    FillInTheBlank,
    TopicExercise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlankId {
    pub section: ExerciseSection,
    pub index: usize,
}

/// Hover-to-reveal state of the grammar page. At most one exercise shows its
/// answer at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlankRevealState {
    hovered: Option<BlankId>,
}

impl BlankRevealState {
    pub fn enter(&mut self, id: BlankId) {
        self.hovered = Some(id);
    }

    /// Leaving a blank only clears the reveal if that blank was the one shown.
    pub fn leave(&mut self, id: BlankId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    pub fn is_revealed(&self, id: BlankId) -> bool {
        self.hovered == Some(id)
    }

    pub fn hovered(&self) -> Option<BlankId> {
        self.hovered
    }
}
