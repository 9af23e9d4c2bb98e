// crates/profile/src/application/selector/editing_state.rs

/// Formulaire ouvert dans un sélecteur de liste.
#[derive(Debug, Clone, PartialEq)]
pub enum EditingState<E> {
    Idle,
    New(E),
    Existing { index: usize, draft: E },
}

impl<E> EditingState<E> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn draft(&self) -> Option<&E> {
        match self {
            Self::Idle => None,
            Self::New(draft) | Self::Existing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut E> {
        match self {
            Self::Idle => None,
            Self::New(draft) | Self::Existing { draft, .. } => Some(draft),
        }
    }

    pub fn editing_index(&self) -> Option<usize> {
        match self {
            Self::Existing { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl<E> Default for EditingState<E> {
    fn default() -> Self {
        Self::Idle
    }
}
