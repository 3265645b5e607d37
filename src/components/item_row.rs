//! Item Row Component
//!
//! One admin table row plus its inline edit row (shown while open).

use leptos::prelude::*;
use lunch_core::admin::{AdminController, ItemField, ItemForm};
use lunch_core::render::FoodCard;
use lunch_core::Field;

use super::food_image::FoodImage;
use crate::browser;

pub fn form_value(form: &ItemForm, field: ItemField) -> String {
    match field {
        ItemField::Name => form.name.clone(),
        ItemField::Price => form.price.clone(),
        ItemField::ImageUrl => form.imageurl.clone(),
    }
}

/// DOM id of an inline edit input; other fields map to their page ids
pub fn edit_field_id(id: i64, field: Field) -> String {
    match field {
        Field::ItemName => format!("editName-{}", id),
        Field::ItemPrice => format!("editPrice-{}", id),
        other => browser::field_id(other).to_string(),
    }
}

#[component]
pub fn ItemRow(
    card: FoodCard,
    ctrl: RwSignal<AdminController>,
    on_save: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = card.id;
    let editing = move || ctrl.with(|c| c.editing_id() == Some(id));
    let saving = move || ctrl.with(|c| c.is_saving(id));
    let any_saving = move || ctrl.with(|c| c.saving_id().is_some());
    let deleting = move || ctrl.with(|c| c.is_deleting(id));
    let edit_value = move |field: ItemField| {
        ctrl.with(|c| {
            c.edit_form()
                .filter(|form| form.id == id)
                .map(|form| form_value(&form.fields, field))
                .unwrap_or_default()
        })
    };
    let set_edit = move |field: ItemField, value: String| ctrl.update(|c| c.set_edit_field(id, field, value));

    view! {
        <tr id=format!("item-{}", id)>
            <td><span class="item-id">"#" {id}</span></td>
            <td>
                <FoodImage
                    image=card.image
                    alt=card.name.clone()
                    image_class="item-image"
                    placeholder_class="item-image-placeholder"
                />
            </td>
            <td><span class="item-name">{card.name}</span></td>
            <td><span class="item-price">{card.price_label}</span></td>
            <td>
                <div class="item-actions">
                    <button class="btn btn-warning" prop:disabled=any_saving on:click=move |_| ctrl.update(|c| c.open_edit(id))>
                        <i class="fas fa-edit"></i>
                        " Edit"
                    </button>
                    <button class="btn btn-danger" prop:disabled=deleting on:click=move |_| on_delete.run(id)>
                        <i class=move || if deleting() { "fas fa-spinner fa-spin" } else { "fas fa-trash" }></i>
                        " "
                        {move || ctrl.with(|c| c.delete_button_label(id))}
                    </button>
                </div>
            </td>
        </tr>
        <tr id=format!("edit-form-{}", id) class="edit-form" class:active=editing>
            <td colspan="5">
                <Show when=editing>
                    <div class="edit-form-grid">
                        <div class="form-group">
                            <label>"Name"</label>
                            <input
                                type="text"
                                id=format!("editName-{}", id)
                                prop:value=move || edit_value(ItemField::Name)
                                on:input=move |ev| set_edit(ItemField::Name, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Price ($)"</label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                id=format!("editPrice-{}", id)
                                prop:value=move || edit_value(ItemField::Price)
                                on:input=move |ev| set_edit(ItemField::Price, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Image URL"</label>
                            <input
                                type="text"
                                id=format!("editImageUrl-{}", id)
                                prop:value=move || edit_value(ItemField::ImageUrl)
                                on:input=move |ev| set_edit(ItemField::ImageUrl, event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="edit-form-actions">
                        <button class="btn btn-success" prop:disabled=saving on:click=move |_| on_save.run(id)>
                            <i class=move || if saving() { "fas fa-spinner fa-spin" } else { "fas fa-save" }></i>
                            " "
                            {move || ctrl.with(|c| c.save_button_label(id))}
                        </button>
                        <button class="btn btn-secondary" prop:disabled=saving on:click=move |_| ctrl.update(|c| c.cancel_edit(id))>
                            <i class="fas fa-times"></i>
                            " Cancel"
                        </button>
                    </div>
                </Show>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_inputs_have_row_ids() {
        assert_eq!(edit_field_id(7, Field::ItemName), "editName-7");
        assert_eq!(edit_field_id(7, Field::ItemPrice), "editPrice-7");
        assert_eq!(edit_field_id(7, Field::Budget), "price");
    }

    #[test]
    fn test_form_value_reads_each_field() {
        let form = ItemForm {
            name: "soup".to_string(),
            price: "4.5".to_string(),
            imageurl: String::new(),
        };
        assert_eq!(form_value(&form, ItemField::Name), "soup");
        assert_eq!(form_value(&form, ItemField::Price), "4.5");
        assert_eq!(form_value(&form, ItemField::ImageUrl), "");
    }
}
