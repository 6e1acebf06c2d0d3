//! Pose Overlay Component
//!
//! SVG skeleton drawn over the video for the frame nearest to the
//! current playback time. Frames regenerate only when the duration
//! changes; the lookup reruns on every time update.

use leptos::prelude::*;

use crate::pose::{self, Landmark, PoseFrame};

/// Dashed alignment indicator between two landmarks
fn guide_line(frame: &PoseFrame, a: Landmark, b: Landmark) -> impl IntoView {
    let from = frame.point(a);
    let to = frame.point(b);
    view! {
        <line
            x1=format!("{:.3}", from.x)
            y1=format!("{:.3}", from.y)
            x2=format!("{:.3}", to.x)
            y2=format!("{:.3}", to.y)
            class="pose-guide"
            stroke-dasharray="2,2"
        />
    }
}

#[component]
pub fn PoseOverlay(
    current_time: ReadSignal<f64>,
    duration: ReadSignal<f64>,
) -> impl IntoView {
    let frames = Memo::new(move |_| pose::generate_swing_frames(duration.get()));

    let current_frame =
        Memo::new(move |_| pose::nearest_frame(&frames.get(), current_time.get()).cloned());

    move || {
        current_frame.get().map(|frame| {
            let bones = pose::CONNECTIONS
                .iter()
                .filter_map(|&(a, b)| {
                    let from = frame.point(a);
                    let to = frame.point(b);
                    if from.visibility < pose::VISIBILITY_THRESHOLD
                        || to.visibility < pose::VISIBILITY_THRESHOLD
                    {
                        return None;
                    }
                    Some(view! {
                        <line
                            x1=format!("{:.3}", from.x)
                            y1=format!("{:.3}", from.y)
                            x2=format!("{:.3}", to.x)
                            y2=format!("{:.3}", to.y)
                            class="pose-bone"
                        />
                    })
                })
                .collect_view();

            let markers = Landmark::ALL
                .iter()
                .filter_map(|&landmark| {
                    let point = frame.point(landmark);
                    if point.visibility < pose::VISIBILITY_THRESHOLD {
                        return None;
                    }
                    let radius = if landmark.is_emphasized() { "1.2" } else { "0.8" };
                    Some(view! {
                        <circle
                            cx=format!("{:.3}", point.x)
                            cy=format!("{:.3}", point.y)
                            r=radius
                            class="pose-point"
                            opacity=point.visibility.to_string()
                        >
                            <title>{landmark.label()}</title>
                        </circle>
                    })
                })
                .collect_view();

            view! {
                <svg class="pose-overlay" viewBox="0 0 100 100" preserveAspectRatio="none">
                    {bones}
                    {markers}
                    <g class="pose-guides">
                        {guide_line(&frame, Landmark::LeftShoulder, Landmark::RightShoulder)}
                        {guide_line(&frame, Landmark::LeftHip, Landmark::RightHip)}
                    </g>
                </svg>
            }
        })
    }
}
