use crate::entity::{Entity, EntityId, Face};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SelectionState {
    pub active_index: usize,
    pub is_flipped: bool,
}

impl SelectionState {
    pub fn face(&self) -> Face {
        Face::from_flipped(self.is_flipped)
    }
}

/// Owns the cursor into a borrowed entity list and the flip bit of the card.
///
/// `active_index` is always in range while the list is non-empty. With an
/// empty list it stays at 0 and nothing is selectable.
#[derive(Debug)]
pub struct SelectionController<'a, P> {
    entities: &'a [Entity<P>],
    state: SelectionState,
}

impl<'a, P> SelectionController<'a, P> {
    pub fn new(entities: &'a [Entity<P>]) -> Self {
        Self {
            entities,
            state: SelectionState::default(),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn is_flipped(&self) -> bool {
        self.state.is_flipped
    }

    pub fn face(&self) -> Face {
        self.state.face()
    }

    pub fn entities(&self) -> &'a [Entity<P>] {
        self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Out-of-range indices leave the state untouched; selection never wraps
    /// or clamps. A successful selection always shows the front face.
    pub fn select(&mut self, index: usize) -> SelectionState {
        if index < self.entities.len() {
            self.state = SelectionState {
                active_index: index,
                is_flipped: false,
            };
        } else {
            log::debug!(
                "selection: ignoring index {} (len {})",
                index,
                self.entities.len()
            );
        }
        self.state
    }

    pub fn select_id(&mut self, id: &EntityId) -> SelectionState {
        match self.entities.iter().position(|e| &e.id == id) {
            Some(index) => self.select(index),
            None => {
                log::debug!("selection: no entity with id '{}'", id);
                self.state
            }
        }
    }

    pub fn select_next(&mut self) -> SelectionState {
        match self.state.active_index.checked_add(1) {
            Some(index) => self.select(index),
            None => self.state,
        }
    }

    pub fn select_previous(&mut self) -> SelectionState {
        match self.state.active_index.checked_sub(1) {
            Some(index) => self.select(index),
            None => self.state,
        }
    }

    pub fn toggle_flip(&mut self) -> SelectionState {
        self.state.is_flipped = !self.state.is_flipped;
        self.state
    }

    /// Flips only when `face` is not already showing.
    pub fn show_face(&mut self, face: Face) -> SelectionState {
        if self.face() != face {
            self.toggle_flip();
        }
        self.state
    }

    pub fn current_entity(&self) -> Option<&'a Entity<P>> {
        self.entities.get(self.state.active_index)
    }

    pub fn current_face(&self) -> Option<&'a P> {
        let face = self.face();
        self.current_entity().map(|e| e.face(face))
    }
}
