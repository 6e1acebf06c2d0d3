//! Video Upload Component
//!
//! Drop zone and file picker for swing videos. Validates type and size,
//! then hands back a locally playable object URL. Nothing leaves the
//! browser.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, File};

use crate::analysis::{validate_video_file, UPLOAD_DELAY_MS};
use crate::context::AppContext;

#[component]
pub fn VideoUpload(#[prop(into)] on_upload: Callback<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (uploading, set_uploading) = signal(false);
    let (is_over, set_is_over) = signal(false);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let accept_file = move |file: File| {
        if uploading.get_untracked() {
            return;
        }
        if let Err(err) = validate_video_file(&file.type_(), file.size()) {
            ctx.toast_error(err.title(), err.message());
            return;
        }
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) else {
            ctx.toast_error(
                "Upload failed",
                "There was an error reading your video. Please try again.",
            );
            return;
        };

        set_uploading.set(true);
        spawn_local(async move {
            // Simulated upload latency
            TimeoutFuture::new(UPLOAD_DELAY_MS).await;
            set_uploading.set(false);
            on_upload.run(url);
            ctx.toast(
                "Video uploaded successfully",
                "Your golf swing video is ready for analysis.",
            );
        });
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop_handler = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            accept_file(file);
        }
    };

    let on_browse = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_picked = move |_| {
        let Some(input) = file_input.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow re-picking the same file later
        input.set_value("");
        accept_file(file);
    };

    let zone_class = move || {
        let mut class = "upload-zone".to_string();
        if is_over.get() {
            class.push_str(" active");
        }
        if uploading.get() {
            class.push_str(" uploading");
        }
        class
    };

    view! {
        <div class="card upload-card">
            <div
                class=zone_class
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop_handler
                on:click=on_browse
            >
                <input
                    type="file"
                    accept="video/*"
                    style="display: none;"
                    node_ref=file_input
                    on:change=on_file_picked
                    on:click=move |ev| ev.stop_propagation()
                />

                <h3 class="upload-title">
                    {move || if uploading.get() {
                        "Uploading..."
                    } else {
                        "Upload Your Golf Swing Video"
                    }}
                </h3>
                <p class="muted">
                    {move || if is_over.get() {
                        "Drop your video here..."
                    } else {
                        "Drag and drop a video file here, or click to browse"
                    }}
                </p>

                <button type="button" class="primary" disabled=move || uploading.get()>
                    {move || if uploading.get() { "Uploading..." } else { "Choose Video File" }}
                </button>

                <div class="upload-hints">
                    <span>"Max 50MB"</span>
                    <span>"MP4, MOV, AVI, WebM"</span>
                </div>
            </div>
        </div>
    }
}
