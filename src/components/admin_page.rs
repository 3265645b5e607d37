//! Admin Page Component
//!
//! Members-only console: session check, item table with inline editing,
//! add form, status banner and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lunch_core::admin::{AdminController, AdminPhase, ItemField};
use lunch_core::{Begin, LunchApi};

use super::item_row::{edit_field_id, form_value, ItemRow};
use crate::browser;
use crate::context::{use_app_context, AppContext};
use crate::host::PageHost;
use crate::store::use_ui_store;

/// Fetch the full list; every mutation ends here instead of patching rows
fn load_items(ctx: AppContext, host: PageHost, ctrl: RwSignal<AdminController>) {
    let Some(request) = ctrl.try_update(|c| c.begin_list()) else {
        return;
    };
    let api = ctx.api();
    host.settle(
        ctrl,
        async move {
            let result = request.send(&api).await;
            (request, result)
        },
        AdminController::finish_list,
    );
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let ctrl = RwSignal::new(AdminController::new(config.clone()));

    let base = PageHost::new(ctx, use_ui_store())
        .on_hide_banner(Callback::new(move |token| ctrl.update(|c| c.hide_status(token))));
    let reload: Callback<()> = Callback::new(move |_| load_items(ctx, base, ctrl));
    let host = base.on_reload(reload);

    // Session check on mount; the list is requested only once it passes
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let status = api.check_auth().await;
            if let Some(effects) = ctrl.try_update(|c| c.finish_session_check(status)) {
                host.run(effects);
            }
        });
    });

    let add: Callback<()> = Callback::new(move |_| match ctrl.try_update(|c| c.begin_add()) {
        Some(Begin::Send(request)) => {
            let api = ctx.api();
            host.settle(
                ctrl,
                async move {
                    let result = request.send(&api).await;
                    (request, result)
                },
                AdminController::finish_add,
            );
        }
        Some(Begin::Rejected(effects)) => host.run(effects),
        None => {}
    });

    let save: Callback<i64> = Callback::new(move |id| match ctrl.try_update(|c| c.begin_update(id)) {
        Some(Begin::Send(request)) => {
            let api = ctx.api();
            host.settle(
                ctrl,
                async move {
                    let result = request.send(&api).await;
                    (request, result)
                },
                AdminController::finish_update,
            );
        }
        Some(Begin::Rejected(mut effects)) => {
            if let Some(field) = effects.focus.take() {
                browser::focus_element(&edit_field_id(id, field));
            }
            host.run(effects);
        }
        None => {}
    });

    let delete: Callback<i64> = Callback::new(move |id| {
        let Some(prompt) = ctrl.with_untracked(|c| c.delete_prompt(id)) else {
            return;
        };
        if !browser::confirm(&prompt) {
            return;
        }
        if let Some(Some(request)) = ctrl.try_update(|c| c.begin_delete(id)) {
            let api = ctx.api();
            host.settle(
                ctrl,
                async move {
                    let result = request.send(&api).await;
                    (request, result)
                },
                AdminController::finish_delete,
            );
        }
    });

    let logout = move |_: web_sys::MouseEvent| {
        let prompt = ctrl.with_untracked(|c| c.logout_prompt());
        if !browser::confirm(prompt) {
            return;
        }
        if let Some(request) = ctrl.try_update(|c| c.begin_logout()) {
            let api = ctx.api();
            host.settle(
                ctrl,
                async move {
                    let result = request.send(&api).await;
                    (request, result)
                },
                AdminController::finish_logout,
            );
        }
    };

    let ready = move || ctrl.with(|c| c.phase() == AdminPhase::Ready);
    let user_email = Memo::new(move |_| ctrl.with(|c| c.user_email().map(str::to_string)));

    view! {
        <div class="container">
            <header class="admin-header">
                <div>
                    <h1>"🍱 Budget Lunch Admin"</h1>
                    <p>"Manage your menu items"</p>
                </div>
                <div class="header-actions">
                    {move || user_email.get().map(|email| view! {
                        <span class="user-email">
                            <i class="fas fa-user"></i>
                            " "
                            {email}
                        </span>
                    })}
                    <a href=config.search_page.clone() class="btn btn-secondary">
                        <i class="fas fa-home"></i>
                        " View Site"
                    </a>
                    <button class="btn btn-danger" prop:disabled=move || !ready() on:click=logout>
                        <i class="fas fa-sign-out-alt"></i>
                        " Logout"
                    </button>
                </div>
            </header>

            <Show
                when=ready
                fallback=|| view! {
                    <div class="loading">
                        <i class="fas fa-spinner fa-spin"></i>
                        " Checking session..."
                    </div>
                }
            >
                <StatusBanner ctrl=ctrl />
                <AddItemForm ctrl=ctrl on_add=add />
                <section class="card">
                    <div class="card-header">
                        <h2>"Menu Items"</h2>
                        <button
                            id="refreshBtn"
                            class="btn btn-secondary"
                            prop:disabled=move || ctrl.with(|c| c.is_listing())
                            on:click=move |_| reload.run(())
                        >
                            <i class="fas fa-sync-alt" class:fa-spin=move || ctrl.with(|c| c.is_listing())></i>
                            " Refresh"
                        </button>
                    </div>
                    <ItemsList ctrl=ctrl on_save=save on_delete=delete />
                </section>
            </Show>
        </div>
    }
}

#[component]
fn StatusBanner(ctrl: RwSignal<AdminController>) -> impl IntoView {
    let status = Memo::new(move |_| ctrl.with(|c| c.status().cloned()));

    move || {
        status.get().map(|notice| {
            view! {
                <div
                    id="statusMessage"
                    class=format!("status-message status-{} show", notice.kind.css_suffix())
                >
                    <i class=format!("fas {}", notice.kind.icon())></i>
                    " "
                    {notice.message}
                </div>
            }
        })
    }
}

#[component]
fn AddItemForm(ctrl: RwSignal<AdminController>, on_add: Callback<()>) -> impl IntoView {
    let value = move |field: ItemField| ctrl.with(|c| form_value(c.add_form(), field));
    let set = move |field: ItemField, value: String| ctrl.update(|c| c.set_add_field(field, value));
    let adding = move || ctrl.with(|c| c.is_adding());

    view! {
        <section class="card add-item-section">
            <h2>
                <i class="fas fa-plus-circle"></i>
                " Add New Item"
            </h2>
            <form
                class="add-item-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_add.run(());
                }
            >
                <div class="form-grid">
                    <div class="form-group">
                        <label for="addName">"Food Name"</label>
                        <input
                            type="text"
                            id="addName"
                            placeholder="e.g. Chicken Sandwich"
                            prop:value=move || value(ItemField::Name)
                            on:input=move |ev| set(ItemField::Name, event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="addPrice">"Price ($)"</label>
                        <input
                            type="number"
                            id="addPrice"
                            placeholder="0.00"
                            step="0.01"
                            min="0"
                            prop:value=move || value(ItemField::Price)
                            on:input=move |ev| set(ItemField::Price, event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="addImageUrl">"Image URL (optional)"</label>
                        <input
                            type="text"
                            id="addImageUrl"
                            placeholder="https://..."
                            prop:value=move || value(ItemField::ImageUrl)
                            on:input=move |ev| set(ItemField::ImageUrl, event_target_value(&ev))
                        />
                    </div>
                </div>
                <button type="submit" id="addBtn" class="btn btn-primary" prop:disabled=adding>
                    <i class=move || if adding() { "fas fa-spinner fa-spin" } else { "fas fa-plus" }></i>
                    " "
                    <span>{move || ctrl.with(|c| c.add_button_label())}</span>
                </button>
            </form>
        </section>
    }
}

#[component]
fn ItemsList(
    ctrl: RwSignal<AdminController>,
    on_save: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    // Some(is_empty) once loaded; a memo so typing elsewhere keeps the table
    let loaded = Memo::new(move |_| ctrl.with(|c| c.items().map(|items| items.is_empty())));

    view! {
        <div id="itemsList">
            {move || match loaded.get() {
                None => view! {
                    <div class="loading">
                        <i class="fas fa-spinner fa-spin"></i>
                        " Loading items..."
                    </div>
                }
                .into_any(),
                Some(true) => view! {
                    <div class="empty-state">
                        <i class="fas fa-inbox"></i>
                        <h3>"No items found"</h3>
                        <p>"Your database is empty. Add some items to get started!"</p>
                    </div>
                }
                .into_any(),
                Some(false) => view! {
                    <div class="items-table-container">
                        <table class="items-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Image"</th>
                                    <th>"Name"</th>
                                    <th>"Price"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || ctrl.with(|c| c.rows())
                                    // Re-render a row when anything it shows changes
                                    key=|row| (row.id, row.name.clone(), row.price_label.clone(), format!("{:?}", row.image))
                                    children=move |row| {
                                        view! { <ItemRow card=row ctrl=ctrl on_save=on_save on_delete=on_delete /> }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
