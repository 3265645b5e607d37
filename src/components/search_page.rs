//! Search Page Component
//!
//! Public page: budget input, "Find Meals" button and the results grid.

use leptos::prelude::*;
use lunch_core::render::{FoodCard, ResultsView};
use lunch_core::{Begin, SearchController};

use super::food_image::FoodImage;
use crate::context::use_app_context;
use crate::host::PageHost;
use crate::store::use_ui_store;

#[component]
pub fn SearchPage() -> impl IntoView {
    let ctx = use_app_context();
    let host = PageHost::new(ctx, use_ui_store());
    let ctrl = RwSignal::new(SearchController::new());

    let search = move || match ctrl.try_update(|c| c.begin_search()) {
        Some(Begin::Send(request)) => {
            let api = ctx.api();
            host.settle(
                ctrl,
                async move {
                    let result = request.send(&api).await;
                    (request, result)
                },
                SearchController::finish_search,
            );
        }
        Some(Begin::Rejected(effects)) => host.run(effects),
        None => {}
    };

    let busy = move || ctrl.with(|c| c.is_busy());
    let results = Memo::new(move |_| ctrl.with(|c| c.results().clone()));

    view! {
        <div class="container">
            <header class="header">
                <h1>"🍱 Budget Lunch"</h1>
                <p>"Find delicious meals that fit your budget"</p>
            </header>

            <div class="search-section">
                <div class="search-box">
                    <input
                        type="number"
                        id="price"
                        placeholder="Enter your budget ($)"
                        step="0.01"
                        min="0"
                        class:valid=move || ctrl.with(|c| c.input_looks_valid())
                        prop:value=move || ctrl.with(|c| c.budget_input().to_string())
                        prop:disabled=busy
                        on:input=move |ev| ctrl.update(|c| c.set_budget_input(event_target_value(&ev)))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                search();
                            }
                        }
                    />
                    <button id="search" class="btn btn-primary" prop:disabled=busy on:click=move |_| search()>
                        <i class=move || if busy() { "fas fa-spinner fa-spin" } else { "fas fa-search" }></i>
                        " "
                        <span>{move || ctrl.with(|c| c.button_label())}</span>
                    </button>
                </div>
            </div>

            <div id="result">
                {move || results_view(results.get())}
            </div>
        </div>
    }
}

fn empty_state(icon: &'static str, title: String, detail: String) -> AnyView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">
                <i class=format!("fas {}", icon)></i>
            </div>
            <h3>{title}</h3>
            <p>{detail}</p>
        </div>
    }
    .into_any()
}

fn results_view(results: ResultsView) -> AnyView {
    let Some((title, detail)) = results.headline() else {
        return ().into_any();
    };
    match results {
        ResultsView::Idle => ().into_any(),
        ResultsView::Empty { .. } => empty_state("fa-search", title, detail),
        ResultsView::Failed => empty_state("fa-exclamation-triangle", title, detail),
        ResultsView::Found { cards, .. } => view! {
            <div class="results-header">
                <h2>{title}</h2>
                <p class="results-count">{detail}</p>
            </div>
            <div class="food-grid">
                {cards.into_iter().map(|card| view! { <FoodItem card=card /> }).collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn FoodItem(card: FoodCard) -> impl IntoView {
    view! {
        <div class="food-item">
            <FoodImage
                image=card.image
                alt=card.name.clone()
                image_class="food-image"
                placeholder_class="food-image-placeholder"
            />
            <div class="food-details">
                <div class="food-name">{card.name}</div>
                <div class="food-price">{card.price_label}</div>
            </div>
        </div>
    }
}
