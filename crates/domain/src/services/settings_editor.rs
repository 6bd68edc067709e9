//! Draft/commit editing for settings records.
//!
//! Edits go to a draft copy. The committed copy only changes on
//! [`DraftEditor::save`]. Nothing is written anywhere.

use crate::models::settings::{AdminSettings, SettingsSection};
use crate::services::notification::Notification;

/// Title of the notification returned by [`DraftEditor::save`].
pub const SETTINGS_SAVED: &str = "Settings saved";

/// Holds a committed record and an editable draft of it.
#[derive(Debug, Clone)]
pub struct DraftEditor<T> {
    committed: T,
    draft: T,
}

impl<T: Clone + PartialEq> DraftEditor<T> {
    pub fn new(initial: T) -> Self {
        Self {
            draft: initial.clone(),
            committed: initial,
        }
    }

    /// Last saved value.
    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// Mutable access for field-by-field edits.
    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    /// Returns true when the draft differs from the committed value.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }

    /// Commits the draft.
    ///
    /// Saving an unchanged draft still succeeds.
    pub fn save(&mut self) -> Notification {
        tracing::info!(dirty = self.is_dirty(), "Saving settings draft");
        self.committed = self.draft.clone();
        Notification::success(SETTINGS_SAVED)
    }

    /// Throws the draft away.
    pub fn discard(&mut self) {
        self.draft = self.committed.clone();
    }
}

impl DraftEditor<AdminSettings> {
    /// Sections with unsaved edits.
    pub fn changed_sections(&self) -> Vec<SettingsSection> {
        self.committed.changed_sections(&self.draft)
    }
}
