//! Toast Stack Component
//!
//! Renders the store's toaster; the CSS slides each toast by its phase class.

use leptos::prelude::*;
use lunch_core::ToastPhase;

use crate::store::{store_toast_phase, use_ui_store, UiStateStoreFields};

#[component]
pub fn Toasts() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="notification-stack">
            <For
                each=move || store.toaster().get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let kind = toast.notice.kind;
                    let phase_class = move || match store_toast_phase(&store, id) {
                        Some(ToastPhase::Shown) => "show",
                        Some(ToastPhase::Leaving) => "hide",
                        _ => "",
                    };
                    view! {
                        <div class=move || format!("notification notification-{} {}", kind.css_suffix(), phase_class())>
                            <div class="notification-content">
                                <i class=format!("fas {}", kind.icon())></i>
                                <span>{toast.notice.message}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
