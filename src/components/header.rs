//! App Header Component
//!
//! Brand bar with tabs switching between the two feature views.

use leptos::prelude::*;

use crate::app::AppView;

#[component]
pub fn Header(
    current_view: ReadSignal<AppView>,
    set_current_view: WriteSignal<AppView>,
) -> impl IntoView {
    let tab_class = move |view: AppView| {
        if current_view.get() == view {
            "header-tab active"
        } else {
            "header-tab"
        }
    };

    view! {
        <header class="app-header">
            <div class="brand">
                <span class="brand-mark">"$"</span>
                <div>
                    <h1 class="brand-title">"CaddyBook"</h1>
                    <p class="brand-subtitle">"Smart expense tracking and swing analysis"</p>
                </div>
            </div>

            <nav class="header-tabs">
                <button
                    class=move || tab_class(AppView::Expenses)
                    on:click=move |_| set_current_view.set(AppView::Expenses)
                >
                    "Expenses"
                </button>
                <button
                    class=move || tab_class(AppView::Swing)
                    on:click=move |_| set_current_view.set(AppView::Swing)
                >
                    "Swing Analysis"
                </button>
            </nav>
        </header>
    }
}
