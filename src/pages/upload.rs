//! Resume upload page.
//!
//! Drag-and-drop or browse for a PDF/TXT resume. The file is read into
//! memory and handed to the flow, which validates the type and uploads it.

use leptos::prelude::*;
use leptos::logging::error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::use_flow;
use crate::components::loading_spinner::LoadingSpinner;
use crate::flow::FlowEvent;
use crate::models::ResumeFile;

#[component]
pub fn UploadPage() -> impl IntoView {
    let flow = use_flow();
    let (is_over, set_is_over) = signal(false);
    let (is_reading, set_is_reading) = signal(false);
    let busy = move || is_reading.get() || flow.state.with(|s| s.loading);
    let file_input_id = "resume-file-input";

    let handle_file = move |file: web_sys::File| {
        set_is_reading.set(true);
        spawn_local(async move {
            let name = file.name();
            match read_file_bytes(file).await {
                Ok(bytes) => flow.send(FlowEvent::ResumeChosen(ResumeFile::new(name, bytes))),
                Err(e) => error!("Failed to read {}: {}", name, e),
            }
            set_is_reading.set(false);
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            handle_file(file);
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            handle_file(file);
        }
    };

    view! {
        <div class="page upload-page">
            <h2>"Upload Your Resume"</h2>
            <p class="page-description">
                "We'll analyze your skills and experience to suggest career paths."
            </p>

            <div
                class="drop-zone"
                class:drop-zone-active=move || is_over.get()
                class:drop-zone-loading=busy
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_is_over.set(true);
                }
                on:dragleave=move |_| set_is_over.set(false)
                on:drop=on_drop
            >
                <Show
                    when=busy
                    fallback=move || view! {
                        <div class="drop-zone-content">
                            <p class="drop-main">"Drop your resume here"</p>
                            <p class="drop-hint">"or"</p>
                            <label for=file_input_id class="btn btn-secondary">
                                "Browse Files"
                            </label>
                            <input
                                type="file"
                                id=file_input_id
                                accept=".pdf,.txt"
                                style="display: none"
                                on:change=on_input_change
                            />
                            <p class="drop-formats">"Supports PDF and TXT"</p>
                        </div>
                    }
                >
                    <LoadingSpinner message="Analyzing your resume..." />
                </Show>
            </div>
        </div>
    }
}

async fn read_file_bytes(file: web_sys::File) -> Result<Vec<u8>, String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?
        .dyn_into()
        .map_err(|_| "Failed to convert to ArrayBuffer")?;

    Ok(Uint8Array::new(&array_buffer).to_vec())
}
