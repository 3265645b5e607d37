//! Food Image Component
//!
//! Item picture with a utensils placeholder for missing or broken images.

use leptos::prelude::*;
use lunch_core::render::ImageSource;

#[component]
pub fn FoodImage(
    image: ImageSource,
    #[prop(into)] alt: String,
    image_class: &'static str,
    placeholder_class: &'static str,
) -> impl IntoView {
    let placeholder = move || {
        view! {
            <div class=placeholder_class>
                <i class="fas fa-utensils"></i>
            </div>
        }
    };

    match image {
        ImageSource::Placeholder => placeholder().into_any(),
        ImageSource::Url(src) => {
            let (broken, set_broken) = signal(false);
            view! {
                <Show when=move || !broken.get() fallback=placeholder>
                    <img
                        src=src.clone()
                        alt=alt.clone()
                        class=image_class
                        on:error=move |_| set_broken.set(true)
                    />
                </Show>
            }
            .into_any()
        }
    }
}
