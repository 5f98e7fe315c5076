//! Dashboard view state management

use crate::storage::SCREENSHOT_EXTENSION;

/// Something the user asked for this frame, applied by the app after
/// the UI has been drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Refresh,
    Select(String),
    /// Open the rename dialog for the current selection
    BeginRename,
    Rename { old: String, new: String },
    /// Ask for confirmation before deleting the current selection
    BeginDelete,
    Delete(String),
    OpenFolder,
}

/// Severity of a message dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Warning,
    Error,
}

impl MessageKind {
    pub fn title(&self) -> &'static str {
        match self {
            MessageKind::Warning => "Warning",
            MessageKind::Error => "Error",
        }
    }
}

/// A modal message with a single OK button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDialog {
    pub kind: MessageKind,
    pub text: String,
}

/// Rename dialog contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameDialog {
    /// File being renamed
    pub original: String,
    /// Text field, prefilled with the name minus its extension
    pub input: String,
    /// Whether the text field still needs keyboard focus
    pub wants_focus: bool,
}

impl RenameDialog {
    pub fn new(original: &str) -> Self {
        let stem = original.strip_suffix(SCREENSHOT_EXTENSION).unwrap_or(original);
        Self {
            original: original.to_string(),
            input: stem.to_string(),
            wants_focus: true,
        }
    }

    /// Action for the OK button. A blank field cancels instead.
    pub fn into_action(self) -> Option<UiAction> {
        if self.input.trim().is_empty() {
            return None;
        }
        Some(UiAction::Rename {
            old: self.original,
            new: self.input,
        })
    }
}

/// Overall dashboard state
#[derive(Default)]
pub struct DashboardState {
    /// Pending rename, if the dialog is open
    pub rename: Option<RenameDialog>,
    /// File awaiting delete confirmation
    pub delete_confirm: Option<String>,
    /// Warning or error being shown
    pub message: Option<MessageDialog>,
    /// About window open
    pub show_about: bool,
    /// Cached texture of the preview image
    pub preview_texture: Option<egui::TextureHandle>,
    /// Preview generation the texture was built from
    pub texture_generation: u64,
    /// Actions collected while drawing this frame
    actions: Vec<UiAction>,
}

impl DashboardState {
    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    /// Take this frame's actions in the order they were raised
    pub fn take_actions(&mut self) -> Vec<UiAction> {
        std::mem::take(&mut self.actions)
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.message = Some(MessageDialog {
            kind: MessageKind::Warning,
            text: text.into(),
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.message = Some(MessageDialog {
            kind: MessageKind::Error,
            text: text.into(),
        });
    }

    /// True while a dialog is waiting for the user. Keyboard shortcuts
    /// are ignored then.
    pub fn is_modal_open(&self) -> bool {
        self.rename.is_some() || self.delete_confirm.is_some() || self.message.is_some()
    }

    /// Open the rename dialog for `selected`, or warn that nothing is selected
    pub fn begin_rename(&mut self, selected: Option<&str>) {
        match selected {
            Some(name) => self.rename = Some(RenameDialog::new(name)),
            None => self.warn("Please select a file to rename"),
        }
    }

    /// Ask to confirm deleting `selected`, or warn that nothing is selected
    pub fn begin_delete(&mut self, selected: Option<&str>) {
        match selected {
            Some(name) => self.delete_confirm = Some(name.to_string()),
            None => self.warn("Please select a file to delete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_dialog_strips_extension() {
        let dialog = RenameDialog::new("ss_01012024_120000.png");
        assert_eq!(dialog.input, "ss_01012024_120000");
        assert_eq!(dialog.original, "ss_01012024_120000.png");
        assert!(dialog.wants_focus);
    }

    #[test]
    fn test_blank_rename_input_does_nothing() {
        for blank in ["", "   "] {
            let mut dialog = RenameDialog::new("a.png");
            dialog.input = blank.to_string();
            assert_eq!(dialog.into_action(), None);
        }

        let mut dialog = RenameDialog::new("a.png");
        dialog.input = "holiday".to_string();
        assert_eq!(
            dialog.into_action(),
            Some(UiAction::Rename {
                old: "a.png".to_string(),
                new: "holiday".to_string(),
            })
        );
    }

    #[test]
    fn test_rename_without_selection_warns() {
        let mut state = DashboardState::default();
        state.begin_rename(None);

        assert!(state.rename.is_none());
        let message = state.message.as_ref().unwrap();
        assert_eq!(message.kind, MessageKind::Warning);
        assert_eq!(message.text, "Please select a file to rename");
        assert!(state.is_modal_open());
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut state = DashboardState::default();
        state.begin_delete(Some("a.png"));

        assert_eq!(state.delete_confirm.as_deref(), Some("a.png"));
        assert!(state.message.is_none());

        let mut state = DashboardState::default();
        state.begin_delete(None);
        assert_eq!(state.message.unwrap().text, "Please select a file to delete");
    }

    #[test]
    fn test_actions_are_drained_in_order() {
        let mut state = DashboardState::default();
        state.push(UiAction::Refresh);
        state.push(UiAction::Select("a.png".to_string()));

        assert_eq!(
            state.take_actions(),
            vec![UiAction::Refresh, UiAction::Select("a.png".to_string())]
        );
        assert!(state.take_actions().is_empty());
    }
}
