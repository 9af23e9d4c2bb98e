// crates/profile/src/application/selector/list_selector.rs

use std::fmt;
use std::mem;
use shared_kernel::domain::value_objects::EntryId;

use crate::application::selector::EditingState;
use crate::domain::entries::ProfileEntry;

/// Reçoit toujours la liste complète de remplacement.
pub type OnChange<E> = Box<dyn FnMut(&[E]) + Send>;

/// Éditeur générique d'un champ liste (expériences, formations, compétences...).
///
/// Le sélecteur ne persiste rien : chaque mutation validée est remontée au
/// parent via `on_change`, qui se charge de l'écriture. Une opération
/// invalide (brouillon incomplet, index hors bornes) ne modifie rien et
/// renvoie `false`.
pub struct ListSelector<E: ProfileEntry> {
    items: Vec<E>,
    editing: EditingState<E>,
    on_change: OnChange<E>,
}

impl<E: ProfileEntry> ListSelector<E> {
    pub fn new(items: Vec<E>, on_change: impl FnMut(&[E]) + Send + 'static) -> Self {
        Self {
            items,
            editing: EditingState::Idle,
            on_change: Box::new(on_change),
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn editing(&self) -> &EditingState<E> {
        &self.editing
    }

    /// Les items sont contrôlés par le parent (ex: rechargement après sync).
    pub fn set_items(&mut self, items: Vec<E>) {
        if let Some(index) = self.editing.editing_index() {
            if index >= items.len() {
                self.editing = EditingState::Idle;
            }
        }
        self.items = items;
    }

    pub fn add_new(&mut self) {
        self.editing = EditingState::New(E::default());
    }

    pub fn edit(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) => {
                self.editing = EditingState::Existing { index, draft: item.clone() };
                true
            }
            None => false,
        }
    }

    pub fn update_draft(&mut self, update: impl FnOnce(&mut E)) -> bool {
        match self.editing.draft_mut() {
            Some(draft) => {
                update(draft);
                true
            }
            None => false,
        }
    }

    /// État du bouton d'enregistrement
    pub fn can_save(&self, draft: &E) -> bool {
        draft.validate().is_ok()
    }

    pub fn save_new(&mut self, mut draft: E) -> bool {
        if !self.can_save(&draft) {
            return false;
        }

        draft.set_id(EntryId::generate());
        self.items.push(draft);
        self.editing = EditingState::Idle;
        self.emit();
        true
    }

    /// Remplace l'entrée en conservant son identifiant d'origine.
    pub fn save_edit(&mut self, index: usize, mut draft: E) -> bool {
        let Some(current) = self.items.get(index) else {
            return false;
        };
        if !self.can_save(&draft) {
            return false;
        }

        draft.set_id(current.id().clone());
        self.items[index] = draft;
        self.editing = EditingState::Idle;
        self.emit();
        true
    }

    /// Enregistre le brouillon du formulaire ouvert, quel qu'il soit.
    pub fn save_draft(&mut self) -> bool {
        match mem::take(&mut self.editing) {
            EditingState::Idle => false,
            EditingState::New(draft) => {
                let saved = self.save_new(draft.clone());
                if !saved {
                    self.editing = EditingState::New(draft);
                }
                saved
            }
            EditingState::Existing { index, draft } => {
                let saved = self.save_edit(index, draft.clone());
                if !saved {
                    self.editing = EditingState::Existing { index, draft };
                }
                saved
            }
        }
    }

    /// Suppression immédiate, sans confirmation.
    pub fn delete(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }

        self.items.remove(index);
        self.editing = match mem::take(&mut self.editing) {
            EditingState::Existing { index: open, .. } if open == index => EditingState::Idle,
            EditingState::Existing { index: open, draft } if open > index => {
                EditingState::Existing { index: open - 1, draft }
            }
            other => other,
        };
        self.emit();
        true
    }

    pub fn cancel(&mut self) {
        self.editing = EditingState::Idle;
    }

    fn emit(&mut self) {
        (self.on_change)(&self.items);
    }
}

impl<E: ProfileEntry> fmt::Debug for ListSelector<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSelector")
            .field("kind", &E::KIND)
            .field("items", &self.items)
            .field("editing", &self.editing)
            .finish()
    }
}
