//! Connection sub-reducer: connection dialog form, test and save lifecycle.

use crate::action::Action;
use crate::connection_dialog_state::DialogRequest;
use crate::effect::Effect;
use crate::reducers::{validate_all, validate_field};
use crate::state::AppState;

pub const CONNECTION_OK: &str = "Successfully connected";
pub const CONNECTION_TEST_FAILED: &str = "Could not connect to the server";
pub const CONNECTION_SAVED: &str = "The connection has been saved successfully";
pub const CONNECTION_SAVE_FAILED: &str = "The connection could not be saved";

/// Handles the connection dialog and the active connection.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_connection(state: &mut AppState, action: &Action) -> Option<Vec<Effect>> {
    match action {
        Action::OpenConnectionDialog(connection) => {
            state.connection_dialog.open(connection.clone());
            Some(vec![])
        }
        Action::CloseConnectionDialog => {
            state.connection_dialog.reset();
            Some(vec![])
        }

        // ===== Form =====
        Action::ConnectionFormInput { field, value } => {
            let dialog = &mut state.connection_dialog;
            if !dialog.is_open {
                return Some(vec![]);
            }
            if dialog.form.value(*field) != value.as_str() {
                *dialog.form.value_mut(*field) = value.clone();
                dialog.tested = false;
            }
            validate_field(dialog, *field);
            Some(vec![])
        }

        // ===== Test / Save =====
        Action::TestConnection => {
            let dialog = &mut state.connection_dialog;
            if !dialog.is_open || dialog.is_busy() {
                return Some(vec![]);
            }
            validate_all(dialog);
            match dialog.form.to_body() {
                Some(body) if !dialog.has_errors() => {
                    dialog.pending = Some(DialogRequest::Testing);
                    Some(vec![Effect::TestConnection { body }])
                }
                _ => Some(vec![]),
            }
        }
        Action::ConnectionTestSucceeded => {
            let dialog = &mut state.connection_dialog;
            dialog.pending = None;
            dialog.tested = true;
            Some(vec![Effect::success(CONNECTION_OK)])
        }
        Action::ConnectionTestFailed(_) => {
            // Form values stay so the user can correct them and retry.
            let dialog = &mut state.connection_dialog;
            dialog.pending = None;
            dialog.tested = false;
            Some(vec![Effect::error(CONNECTION_TEST_FAILED)])
        }

        Action::SubmitConnection => {
            let dialog = &mut state.connection_dialog;
            if !dialog.is_open || dialog.is_busy() {
                return Some(vec![]);
            }
            validate_all(dialog);
            match dialog.form.to_body() {
                Some(body) if !dialog.has_errors() => {
                    dialog.pending = Some(DialogRequest::Saving);
                    Some(vec![Effect::SubmitConnection {
                        id: dialog.editing.as_ref().map(|c| c.id.clone()),
                        body,
                    }])
                }
                _ => Some(vec![]),
            }
        }
        Action::ConnectionSaved {
            connection,
            is_edit,
        } => {
            if *is_edit
                && state
                    .active_connection
                    .as_ref()
                    .is_some_and(|active| active.id == connection.id)
            {
                state.active_connection = Some(connection.clone());
            }
            // The dialog may have been reopened for another connection meanwhile.
            let dialog = &state.connection_dialog;
            if dialog.pending == Some(DialogRequest::Saving)
                && dialog
                    .editing
                    .as_ref()
                    .is_none_or(|editing| editing.id == connection.id)
            {
                state.connection_dialog.reset();
            }
            Some(vec![Effect::success(CONNECTION_SAVED)])
        }
        Action::ConnectionSaveFailed(_) => {
            state.connection_dialog.pending = None;
            Some(vec![Effect::error(CONNECTION_SAVE_FAILED)])
        }

        Action::SetActiveConnection(connection) => {
            state.active_connection = connection.clone();
            Some(vec![])
        }

        _ => None,
    }
}
