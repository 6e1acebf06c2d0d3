//! Swing Analysis Page
//!
//! Owns the uploaded video URL and the fake analysis lifecycle. The
//! analysis timer handle is kept so a reset can cancel it; a session
//! reset must never be flipped to Complete by a stale timer.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::analysis::{AnalysisPhase, ANALYSIS_DELAY_MS};
use crate::components::{FeedbackPanel, VideoAnalysis, VideoUpload};

#[component]
pub fn SwingPage() -> impl IntoView {
    let (video_url, set_video_url) = signal(None::<String>);
    let (phase, set_phase) = signal(AnalysisPhase::Idle);

    // Pending analysis timer; dropping the slot's content cancels it
    let analysis_timer = StoredValue::new_local(None::<Timeout>);

    let handle_video_upload = Callback::new(move |url: String| {
        web_sys::console::log_1(
            &format!("[Swing] Video accepted, analysis completes in {}ms", ANALYSIS_DELAY_MS)
                .into(),
        );
        set_video_url.set(Some(url));
        set_phase.set(AnalysisPhase::Analyzing);

        let timer = Timeout::new(ANALYSIS_DELAY_MS, move || {
            set_phase.set(AnalysisPhase::Complete);
        });
        analysis_timer.set_value(Some(timer));
    });

    let reset_analysis = move |_| {
        analysis_timer.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
        if let Some(url) = video_url.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&url);
        }
        set_video_url.set(None);
        set_phase.set(AnalysisPhase::Idle);
    };

    view! {
        <div class="swing-page">
            {move || match video_url.get() {
                None => view! {
                    <section class="upload-section">
                        <div class="upload-intro">
                            <h2>"Upload Your Golf Swing"</h2>
                            <p class="muted">
                                "Upload a video of your golf swing to get detailed AI-powered analysis"
                            </p>
                        </div>

                        <VideoUpload on_upload=handle_video_upload />

                        <div class="feature-grid">
                            <div class="card feature-card">
                                <h3>"Easy Upload"</h3>
                                <p class="muted">
                                    "Simply drag and drop your golf swing video or click to browse"
                                </p>
                            </div>
                            <div class="card feature-card">
                                <h3>"AI Analysis"</h3>
                                <p class="muted">
                                    "Advanced pose estimation tracks every joint and movement"
                                </p>
                            </div>
                            <div class="card feature-card">
                                <h3>"Get Feedback"</h3>
                                <p class="muted">
                                    "Receive detailed feedback on form, posture, and technique"
                                </p>
                            </div>
                        </div>
                    </section>
                }
                .into_any(),
                Some(url) => view! {
                    <section class="analysis-section">
                        <div class="analysis-header">
                            <h2>"Swing Analysis"</h2>
                            <button class="reset-btn" on:click=reset_analysis>
                                "Upload New Video"
                            </button>
                        </div>

                        <div class="analysis-grid">
                            <VideoAnalysis video_url=url phase=phase />
                            <FeedbackPanel phase=phase />
                        </div>
                    </section>
                }
                .into_any(),
            }}
        </div>
    }
}
