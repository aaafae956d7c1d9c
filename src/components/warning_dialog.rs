//! Low-match confirmation dialog.
//!
//! Shown over the suggestions screen when the probed score for the picked
//! career path is below the warning threshold.

use leptos::prelude::*;

use crate::app::use_flow;
use crate::flow::{FlowEvent, WarningDialog};

#[component]
pub fn WarningDialogView(dialog: WarningDialog) -> impl IntoView {
    let flow = use_flow();
    let potential = dialog.potential_score.round() as i64;

    view! {
        <div class="modal-overlay">
            <div class="modal-dialog">
                <h3>"Low Career Match"</h3>
                <p>
                    "Your current profile has a low match ("
                    <strong>{format!("{}%", potential)}</strong>
                    ") for "
                    <strong>{dialog.career_path.clone()}</strong>
                    ". This career path may require significant skill development."
                </p>
                <p class="dialog-subtitle">
                    "You can still proceed and track your progress toward this goal."
                </p>

                <div class="dialog-actions">
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| flow.send(FlowEvent::WarningCancelled)
                    >
                        "Choose Different Path"
                    </button>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| flow.send(FlowEvent::WarningConfirmed)
                    >
                        "Proceed Anyway"
                    </button>
                </div>
            </div>
        </div>
    }
}
