//! Feedback Panel Component
//!
//! Idle placeholder, analyzing progress card, or the mock report.

use leptos::prelude::*;

use crate::analysis::AnalysisPhase;
use crate::feedback::swing_report;

#[component]
pub fn FeedbackPanel(phase: ReadSignal<AnalysisPhase>) -> impl IntoView {
    move || match phase.get() {
        AnalysisPhase::Idle => view! {
            <div class="card feedback-idle">
                <h2 class="card-title muted">"Swing Feedback"</h2>
                <p class="muted">"Upload a video to see your swing analysis"</p>
            </div>
        }
        .into_any(),

        AnalysisPhase::Analyzing => view! {
            <div class="card feedback-analyzing">
                <span class="spinner large"></span>
                <h3>"Analyzing Your Swing"</h3>
                <p class="muted">
                    "Our AI is processing your video and tracking pose landmarks..."
                </p>
                <ul class="processing-steps">
                    <li class="step done">"Video uploaded"</li>
                    <li class="step running">"Detecting pose landmarks..."</li>
                    <li class="step pending">"Analyzing swing mechanics"</li>
                    <li class="step pending">"Generating feedback"</li>
                </ul>
            </div>
        }
        .into_any(),

        AnalysisPhase::Complete => {
            let report = swing_report();
            view! {
                <div class="feedback-panels">
                    <div class="card score-card">
                        <h2 class="card-title">"Overall Score"</h2>
                        <div class="score">
                            {report.overall_score}
                            <span class="score-denominator">"/100"</span>
                        </div>
                        <span class=format!("status-badge {}", report.status.css_class())>
                            {report.status.icon()} " " {report.status.label()}
                        </span>
                        <div class="progress">
                            <div
                                class="progress-fill"
                                style=format!("width: {}%;", report.overall_score)
                            ></div>
                        </div>
                    </div>

                    <div class="card metrics-card">
                        <h2 class="card-title">"Swing Metrics"</h2>
                        {report
                            .metrics
                            .iter()
                            .map(|metric| {
                                view! {
                                    <div class="metric-row">
                                        <div class="metric-head">
                                            <span class=format!(
                                                "metric-status {}",
                                                metric.status.css_class(),
                                            )>{metric.status.icon()}</span>
                                            <span class="metric-name">{metric.name}</span>
                                            <span class="metric-score">{metric.score}"%"</span>
                                        </div>
                                        <div class="progress slim">
                                            <div
                                                class="progress-fill"
                                                style=format!("width: {}%;", metric.score)
                                            ></div>
                                        </div>
                                        <p class="metric-feedback muted">{metric.feedback}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="card insights-card">
                        <h2 class="card-title">"Key Insights"</h2>
                        <ul class="insights">
                            {report
                                .key_insights
                                .iter()
                                .map(|insight| view! { <li>{*insight}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
