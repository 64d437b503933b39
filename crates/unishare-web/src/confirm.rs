//! Confirmation gate for destructive actions

use crate::dom::ConfirmDialog;

/// Ask the user to confirm and return their answer unmodified.
///
/// A missing or empty `message` falls back to `default_message`. The caller
/// is responsible for aborting the guarded action when this returns `false`.
pub fn confirm_action<D: ConfirmDialog>(
    dialog: &D,
    message: Option<&str>,
    default_message: &str,
) -> bool {
    let text = message
        .filter(|message| !message.is_empty())
        .unwrap_or(default_message);
    dialog.confirm(text)
}
