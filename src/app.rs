//! CaddyBook Frontend App
//!
//! Top-level component: switches between the expense tracker and the
//! swing analyzer, and renders the toast stack. The two features share
//! no state beyond the notification queue.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ExpensesPage, Header, SwingPage};
use crate::context::{AppContext, ToastLevel};
use crate::store::ExpenseState;

/// Top-level view selection
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Expenses,
    Swing,
}

#[component]
pub fn App() -> impl IntoView {
    let (current_view, set_current_view) = signal(AppView::Expenses);

    // Provide shared state to all children
    provide_context(Store::new(ExpenseState::default()));
    provide_context(AppContext::new());

    view! {
        <div class="app-layout">
            <Header current_view=current_view set_current_view=set_current_view />

            <main class="main-content">
                {move || match current_view.get() {
                    AppView::Expenses => view! { <ExpensesPage /> }.into_any(),
                    AppView::Swing => view! { <SwingPage /> }.into_any(),
                }}
            </main>

            <ToastStack />
        </div>
    }
}

/// Transient notification stack, bottom-right
#[component]
fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.level {
                        ToastLevel::Info => "toast",
                        ToastLevel::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class on:click=move |_| ctx.dismiss(id)>
                            <div class="toast-title">{toast.title}</div>
                            <div class="toast-message">{toast.message}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
