//! Video Player Component
//!
//! Plays the uploaded clip and drives the pose overlay from playback
//! time. Time tracking rides the media element's own events; there is
//! no polling loop.

use leptos::prelude::*;

use crate::analysis::AnalysisPhase;
use crate::components::PoseOverlay;

/// m:ss label for the progress bar
fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[component]
pub fn VideoAnalysis(video_url: String, phase: ReadSignal<AnalysisPhase>) -> impl IntoView {
    let video_ref: NodeRef<leptos::html::Video> = NodeRef::new();

    let (is_playing, set_is_playing) = signal(false);
    let (current_time, set_current_time) = signal(0.0f64);
    let (duration, set_duration) = signal(0.0f64);

    let toggle_play = move |_| {
        let Some(video) = video_ref.get() else {
            return;
        };
        if is_playing.get_untracked() {
            let _ = video.pause();
        } else {
            let _ = video.play();
        }
    };

    let reset_video = move |_| {
        let Some(video) = video_ref.get() else {
            return;
        };
        video.set_current_time(0.0);
        set_current_time.set(0.0);
        let _ = video.pause();
    };

    let on_seek = move |ev| {
        let Ok(time) = event_target_value(&ev).parse::<f64>() else {
            return;
        };
        if let Some(video) = video_ref.get() {
            video.set_current_time(time);
        }
        set_current_time.set(time);
    };

    let on_time_update = move |_| {
        if let Some(video) = video_ref.get() {
            set_current_time.set(video.current_time());
        }
    };

    let on_loaded_metadata = move |_| {
        if let Some(video) = video_ref.get() {
            set_duration.set(video.duration());
        }
    };

    view! {
        <div class="card video-card">
            <h2 class="card-title">
                "Video Analysis"
                <Show when=move || phase.get() == AnalysisPhase::Analyzing>
                    <span class="spinner"></span>
                </Show>
            </h2>

            <div class="video-frame">
                <video
                    node_ref=video_ref
                    src=video_url
                    on:timeupdate=on_time_update
                    on:loadedmetadata=on_loaded_metadata
                    on:play=move |_| set_is_playing.set(true)
                    on:pause=move |_| set_is_playing.set(false)
                ></video>

                <Show when=move || phase.get() == AnalysisPhase::Complete>
                    <div class="video-overlay">
                        <PoseOverlay current_time=current_time duration=duration />
                    </div>
                </Show>

                <Show when=move || phase.get() == AnalysisPhase::Analyzing>
                    <div class="analyzing-overlay">
                        <span class="spinner large"></span>
                        <p class="analyzing-title">"Analyzing Swing..."</p>
                        <p class="analyzing-subtitle">"AI is processing your golf swing"</p>
                    </div>
                </Show>
            </div>

            <div class="video-controls">
                <span class="time-label">{move || format_time(current_time.get())}</span>
                <input
                    type="range"
                    min="0"
                    step="any"
                    max=move || duration.get().to_string()
                    prop:value=move || current_time.get().to_string()
                    on:input=on_seek
                />
                <span class="time-label">{move || format_time(duration.get())}</span>
            </div>

            <div class="video-buttons">
                <button on:click=reset_video>"Reset"</button>
                <button class="primary" on:click=toggle_play>
                    {move || if is_playing.get() { "Pause" } else { "Play" }}
                </button>
            </div>

            <Show when=move || phase.get() == AnalysisPhase::Complete>
                <div class="analysis-complete-banner">
                    "Analysis complete! View your swing feedback on the right."
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.4), "0:09");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }
}
