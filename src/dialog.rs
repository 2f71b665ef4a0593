//! Blocking user dialogs behind an injectable trait, plus the confirmation
//! guard for destructive actions.

/// Message shown before any action that requires confirmation.
pub const CONFIRM_MESSAGE: &str = "Are you sure you want to perform this action?";

const DIALOG_TITLE: &str = "Cyber Café Xerox Service";

/// Synchronous blocking dialogs. Handlers take this by injection so they can
/// be exercised in tests with scripted responses instead of a live window.
pub trait Prompter {
    fn alert(&self, message: &str);

    /// Returns true when the user accepts.
    fn confirm(&self, message: &str) -> bool;
}

/// Native OS dialogs via rfd. Blocks the UI thread until answered, like the
/// browser dialogs it stands in for.
pub struct NativeDialogs;

impl Prompter for NativeDialogs {
    fn alert(&self, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(DIALOG_TITLE)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn confirm(&self, message: &str) -> bool {
        let result = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(DIALOG_TITLE)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::OkCancel)
            .show();
        matches!(result, rfd::MessageDialogResult::Ok)
    }
}

/// Actions declare up front whether they need the user to confirm. The flag is
/// part of the action type, not inferred from how the action is wired up.
pub trait GuardedAction {
    fn requires_confirmation(&self) -> bool;
}

/// Gate for a guarded action: prompts when the action asks for it, and lets
/// unflagged actions through untouched.
pub fn allowed<A: GuardedAction>(prompter: &dyn Prompter, action: &A) -> bool {
    !action.requires_confirmation() || prompter.confirm(CONFIRM_MESSAGE)
}

#[cfg(test)]
pub(crate) use scripted::ScriptedPrompter;

#[cfg(test)]
mod scripted {
    use super::Prompter;
    use std::sync::{Arc, Mutex};

    /// Test double that records every dialog and answers confirms from a
    /// canned response.
    pub(crate) struct ScriptedPrompter {
        pub confirm_response: bool,
        pub alerts: Arc<Mutex<Vec<String>>>,
        pub confirms: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedPrompter {
        pub(crate) fn answering(confirm_response: bool) -> Self {
            Self {
                confirm_response,
                alerts: Arc::new(Mutex::new(Vec::new())),
                confirms: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn alert(&self, message: &str) {
            self.alerts.lock().unwrap().push(message.to_string());
        }

        fn confirm(&self, message: &str) -> bool {
            self.confirms.lock().unwrap().push(message.to_string());
            self.confirm_response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DeleteEverything;
    struct ToggleDetails;

    impl GuardedAction for DeleteEverything {
        fn requires_confirmation(&self) -> bool {
            true
        }
    }

    impl GuardedAction for ToggleDetails {
        fn requires_confirmation(&self) -> bool {
            false
        }
    }

    #[test]
    fn declining_blocks_a_guarded_action() {
        let prompter = ScriptedPrompter::answering(false);
        assert!(!allowed(&prompter, &DeleteEverything));
        assert_eq!(
            prompter.confirms.lock().unwrap().as_slice(),
            [CONFIRM_MESSAGE]
        );
    }

    #[test]
    fn accepting_lets_a_guarded_action_through() {
        let prompter = ScriptedPrompter::answering(true);
        assert!(allowed(&prompter, &DeleteEverything));
    }

    #[test]
    fn unflagged_actions_never_prompt() {
        let prompter = ScriptedPrompter::answering(false);
        assert!(allowed(&prompter, &ToggleDetails));
        assert!(prompter.confirms.lock().unwrap().is_empty());
    }
}
