//! Admin Console Controller
//!
//! Lifecycle: session check → listing, with per-row editing, adding and
//! deleting. Every successful mutation asks the host for a full list reload;
//! the local list is never patched.

use std::collections::HashMap;

use crate::action::{ActionSlot, Ticket};
use crate::api::LunchApi;
use crate::config::ClientConfig;
use crate::effects::{Begin, Deferred, Effects};
use crate::error::{ApiResult, ValidationError};
use crate::feedback::{Banner, BannerToken, Notice};
use crate::models::{AuthStatus, ItemDraft, LogoutOutcome, MenuItem, SessionUser};
use crate::render::FoodCard;
use crate::session::{GateDecision, SessionGate};
use crate::validation::validate_item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPhase {
    CheckingSession,
    Ready,
    /// A redirect is under way; nothing else should start
    Leaving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Price,
    ImageUrl,
}

/// Raw text of an add or edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub price: String,
    pub imageurl: String,
}

impl ItemForm {
    fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.to_string(),
            imageurl: item.imageurl.clone().unwrap_or_default(),
        }
    }

    fn set(&mut self, field: ItemField, value: String) {
        match field {
            ItemField::Name => self.name = value,
            ItemField::Price => self.price = value,
            ItemField::ImageUrl => self.imageurl = value,
        }
    }

    fn validate(&self) -> Result<ItemDraft, ValidationError> {
        validate_item(&self.name, &self.price, &self.imageurl)
    }
}

/// The one open inline edit form
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub id: i64,
    pub fields: ItemForm,
}

// ========================
// Requests
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    ticket: Ticket,
}

impl ListRequest {
    pub async fn send<A: LunchApi + ?Sized>(&self, api: &A) -> ApiResult<Vec<MenuItem>> {
        api.list_items().await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddRequest {
    ticket: Ticket,
    pub draft: ItemDraft,
}

impl AddRequest {
    pub async fn send<A: LunchApi + ?Sized>(&self, api: &A) -> ApiResult<()> {
        api.add_item(&self.draft).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    ticket: Ticket,
    pub id: i64,
    pub draft: ItemDraft,
}

impl UpdateRequest {
    pub async fn send<A: LunchApi + ?Sized>(&self, api: &A) -> ApiResult<()> {
        api.update_item(self.id, &self.draft).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequest {
    ticket: Ticket,
    pub id: i64,
    pub name: String,
}

impl DeleteRequest {
    pub async fn send<A: LunchApi + ?Sized>(&self, api: &A) -> ApiResult<()> {
        api.delete_item(self.id).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogoutRequest {
    ticket: Ticket,
}

impl LogoutRequest {
    pub async fn send<A: LunchApi + ?Sized>(&self, api: &A) -> ApiResult<LogoutOutcome> {
        api.logout().await
    }
}

// ========================
// Controller
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct AdminController {
    config: ClientConfig,
    phase: AdminPhase,
    user: Option<SessionUser>,
    /// `None` until the first list response
    items: Option<Vec<MenuItem>>,
    list_slot: ActionSlot,
    add_form: ItemForm,
    add_slot: ActionSlot,
    editing: Option<EditForm>,
    /// One slot for every row so tickets never repeat across reopened forms
    update_slot: ActionSlot,
    /// Row whose save is in flight
    saving: Option<i64>,
    deleting: HashMap<i64, ActionSlot>,
    logout_slot: ActionSlot,
    status: Banner,
}

impl AdminController {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            phase: AdminPhase::CheckingSession,
            user: None,
            items: None,
            list_slot: ActionSlot::new(),
            add_form: ItemForm::default(),
            add_slot: ActionSlot::new(),
            editing: None,
            update_slot: ActionSlot::new(),
            saving: None,
            deleting: HashMap::new(),
            logout_slot: ActionSlot::new(),
            status: Banner::new(),
        }
    }

    pub fn phase(&self) -> AdminPhase {
        self.phase
    }

    pub fn user_email(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| u.email.as_str())
            .filter(|email| !email.is_empty())
    }

    pub fn items(&self) -> Option<&[MenuItem]> {
        self.items.as_deref()
    }

    pub fn rows(&self) -> Vec<FoodCard> {
        self.items
            .iter()
            .flatten()
            .map(FoodCard::from)
            .collect()
    }

    pub fn is_listing(&self) -> bool {
        self.list_slot.is_busy()
    }

    pub fn status(&self) -> Option<&Notice> {
        self.status.current()
    }

    pub fn hide_status(&mut self, token: BannerToken) {
        self.status.hide_if(token);
    }

    /// Show a status message and schedule its auto-hide
    fn flash(&mut self, notice: Notice) -> Effects {
        let token = self.status.show(notice);
        Effects::none().schedule(self.config.status_hide(), Deferred::HideBanner(token))
    }

    fn reject<T>(&mut self, error: ValidationError) -> Begin<T> {
        let field = error.field();
        Begin::Rejected(self.flash(Notice::error(error.to_string())).focus(field))
    }

    // ========================
    // Session
    // ========================

    pub fn finish_session_check(&mut self, status: ApiResult<AuthStatus>) -> Effects {
        match SessionGate::MembersOnly.decide(&status, &self.config) {
            GateDecision::Redirect(path) => {
                self.phase = AdminPhase::Leaving;
                Effects::none().navigate_now(path)
            }
            GateDecision::Proceed(user) => {
                tracing::info!(user = ?user.as_ref().map(|u| u.email.as_str()), "admin session verified");
                self.phase = AdminPhase::Ready;
                self.user = user;
                Effects::none().reload()
            }
        }
    }

    // ========================
    // Listing
    // ========================

    pub fn begin_list(&mut self) -> ListRequest {
        ListRequest { ticket: self.list_slot.start() }
    }

    pub fn finish_list(&mut self, request: ListRequest, result: ApiResult<Vec<MenuItem>>) -> Effects {
        if !self.list_slot.finish(request.ticket) {
            tracing::debug!("dropping superseded list response");
            return Effects::none();
        }
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "items loaded");
                if let Some(form) = &self.editing {
                    if !items.iter().any(|item| item.id == form.id) {
                        self.editing = None;
                    }
                }
                self.items = Some(items);
                Effects::none()
            }
            Err(e) => {
                tracing::warn!(error = %e, "listing items failed");
                self.flash(Notice::error("Error loading items. Please try again."))
            }
        }
    }

    // ========================
    // Adding
    // ========================

    pub fn add_form(&self) -> &ItemForm {
        &self.add_form
    }

    pub fn set_add_field(&mut self, field: ItemField, value: impl Into<String>) {
        self.add_form.set(field, value.into());
    }

    pub fn is_adding(&self) -> bool {
        self.add_slot.is_busy()
    }

    pub fn add_button_label(&self) -> &'static str {
        if self.is_adding() {
            "Adding..."
        } else {
            "Add Item"
        }
    }

    pub fn begin_add(&mut self) -> Begin<AddRequest> {
        match self.add_form.validate() {
            Err(e) => self.reject(e),
            Ok(draft) => Begin::Send(AddRequest { ticket: self.add_slot.start(), draft }),
        }
    }

    pub fn finish_add(&mut self, request: AddRequest, result: ApiResult<()>) -> Effects {
        if !self.add_slot.finish(request.ticket) {
            return Effects::none();
        }
        match result {
            Ok(()) => {
                tracing::info!(name = %request.draft.name, "item added");
                self.add_form = ItemForm::default();
                self.flash(Notice::success(format!("\"{}\" added successfully!", request.draft.name)))
                    .reload()
            }
            Err(e) => {
                tracing::warn!(error = %e, "adding item failed");
                self.flash(Notice::error("Error adding item. Please try again."))
            }
        }
    }

    // ========================
    // Editing
    // ========================

    /// Open the inline form for `id`, closing any other one.
    /// Ignored while a save is in flight.
    pub fn open_edit(&mut self, id: i64) {
        if self.saving.is_some() {
            return;
        }
        let Some(item) = self.items.iter().flatten().find(|item| item.id == id) else {
            return;
        };
        self.editing = Some(EditForm {
            id,
            fields: ItemForm::from_item(item),
        });
    }

    /// Ignored while this row is saving
    pub fn cancel_edit(&mut self, id: i64) {
        if self.editing_id() == Some(id) && !self.is_saving(id) {
            self.editing = None;
        }
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().map(|form| form.id)
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        self.editing.as_ref()
    }

    pub fn set_edit_field(&mut self, id: i64, field: ItemField, value: impl Into<String>) {
        if let Some(form) = self.editing.as_mut().filter(|form| form.id == id) {
            form.fields.set(field, value.into());
        }
    }

    pub fn is_saving(&self, id: i64) -> bool {
        self.saving_id() == Some(id)
    }

    pub fn saving_id(&self) -> Option<i64> {
        self.saving.filter(|_| self.update_slot.is_busy())
    }

    pub fn save_button_label(&self, id: i64) -> &'static str {
        if self.is_saving(id) {
            "Saving..."
        } else {
            "Save Changes"
        }
    }

    pub fn begin_update(&mut self, id: i64) -> Begin<UpdateRequest> {
        let validated = match self.editing.as_ref().filter(|form| form.id == id) {
            Some(form) => form.fields.validate(),
            None => return Begin::Rejected(Effects::none()),
        };
        match validated {
            Err(e) => self.reject(e),
            Ok(draft) => {
                self.saving = Some(id);
                Begin::Send(UpdateRequest { ticket: self.update_slot.start(), id, draft })
            }
        }
    }

    pub fn finish_update(&mut self, request: UpdateRequest, result: ApiResult<()>) -> Effects {
        if !self.update_slot.finish(request.ticket) {
            tracing::debug!(id = request.id, "dropping superseded update response");
            return Effects::none();
        }
        self.saving = None;
        match result {
            Ok(()) => {
                tracing::info!(id = request.id, "item updated");
                if self.editing_id() == Some(request.id) {
                    self.editing = None;
                }
                self.flash(Notice::success(format!("\"{}\" updated successfully!", request.draft.name)))
                    .reload()
            }
            Err(e) => {
                tracing::warn!(id = request.id, error = %e, "updating item failed");
                self.flash(Notice::error("Error updating item. Please try again."))
            }
        }
    }

    // ========================
    // Deleting
    // ========================

    /// Confirmation text; `None` for an unknown row
    pub fn delete_prompt(&self, id: i64) -> Option<String> {
        self.items.iter().flatten().find(|item| item.id == id).map(|item| {
            format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                item.name
            )
        })
    }

    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting.get(&id).is_some_and(ActionSlot::is_busy)
    }

    pub fn delete_button_label(&self, id: i64) -> &'static str {
        if self.is_deleting(id) {
            "Deleting..."
        } else {
            "Delete"
        }
    }

    /// Call only after the user confirmed
    pub fn begin_delete(&mut self, id: i64) -> Option<DeleteRequest> {
        if self.is_deleting(id) {
            return None;
        }
        let name = self.items.iter().flatten().find(|item| item.id == id)?.name.clone();
        let ticket = self.deleting.entry(id).or_default().start();
        Some(DeleteRequest { ticket, id, name })
    }

    pub fn finish_delete(&mut self, request: DeleteRequest, result: ApiResult<()>) -> Effects {
        let current = self
            .deleting
            .get_mut(&request.id)
            .is_some_and(|slot| slot.finish(request.ticket));
        if !current {
            return Effects::none();
        }
        self.deleting.remove(&request.id);
        match result {
            Ok(()) => {
                tracing::info!(id = request.id, "item deleted");
                self.flash(Notice::success(format!("\"{}\" deleted successfully!", request.name)))
                    .reload()
            }
            Err(e) => {
                tracing::warn!(id = request.id, error = %e, "deleting item failed");
                self.flash(Notice::error("Error deleting item. Please try again."))
            }
        }
    }

    // ========================
    // Logout
    // ========================

    pub fn logout_prompt(&self) -> &'static str {
        "Are you sure you want to logout?"
    }

    pub fn begin_logout(&mut self) -> LogoutRequest {
        LogoutRequest { ticket: self.logout_slot.start() }
    }

    /// Always leaves for the login page, whatever the server said
    pub fn finish_logout(&mut self, request: LogoutRequest, result: ApiResult<LogoutOutcome>) -> Effects {
        self.logout_slot.finish(request.ticket);
        match result {
            Ok(outcome) if outcome.success => tracing::info!("logged out"),
            Ok(_) => tracing::warn!("logout refused by server, leaving anyway"),
            Err(e) => tracing::warn!(error = %e, "logout failed, leaving anyway"),
        }
        self.phase = AdminPhase::Leaving;
        Effects::none().navigate_now(self.config.login_page.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Field, RequestError};
    use crate::memory::MemoryApi;

    fn ready(items: Vec<MenuItem>) -> AdminController {
        let mut ctrl = AdminController::new(ClientConfig::default());
        ctrl.finish_session_check(Ok(AuthStatus::signed_in("chef@lunch.io")));
        let request = ctrl.begin_list();
        ctrl.finish_list(request, Ok(items));
        ctrl
    }

    fn two_items() -> Vec<MenuItem> {
        vec![
            MenuItem::new(1, "pizza", 6.99, Some("https://img/pizza.jpg")),
            MenuItem::new(2, "salad", 5.99, None),
        ]
    }

    #[test]
    fn test_session_check_redirects_or_reloads() {
        let mut ctrl = AdminController::new(ClientConfig::default());
        let effects = ctrl.finish_session_check(Ok(AuthStatus::anonymous()));
        assert_eq!(effects.navigation(), Some("/login"));
        assert_eq!(ctrl.phase(), AdminPhase::Leaving);

        let mut ctrl = AdminController::new(ClientConfig::default());
        let effects = ctrl.finish_session_check(Ok(AuthStatus::signed_in("chef@lunch.io")));
        assert!(effects.reload_items);
        assert_eq!(ctrl.user_email(), Some("chef@lunch.io"));
    }

    #[test]
    fn test_opening_one_edit_closes_the_other() {
        let mut ctrl = ready(two_items());
        ctrl.open_edit(1);
        assert_eq!(ctrl.editing_id(), Some(1));
        assert_eq!(ctrl.edit_form().unwrap().fields.price, "6.99");

        ctrl.open_edit(2);
        assert_eq!(ctrl.editing_id(), Some(2));
        assert_eq!(ctrl.edit_form().unwrap().fields.name, "salad");

        ctrl.cancel_edit(1);
        assert_eq!(ctrl.editing_id(), Some(2));
        ctrl.cancel_edit(2);
        assert_eq!(ctrl.editing_id(), None);
    }

    #[test]
    fn test_add_validation_focuses_fields() {
        let mut ctrl = ready(two_items());
        ctrl.set_add_field(ItemField::Price, "3");
        let Begin::Rejected(effects) = ctrl.begin_add() else { panic!("empty name must be rejected") };
        assert_eq!(effects.focus, Some(Field::ItemName));
        assert_eq!(ctrl.status().unwrap().message, "Please enter a food name.");

        ctrl.set_add_field(ItemField::Name, "soup");
        ctrl.set_add_field(ItemField::Price, "0");
        let Begin::Rejected(effects) = ctrl.begin_add() else { panic!("zero price must be rejected") };
        assert_eq!(effects.focus, Some(Field::ItemPrice));
        assert!(!ctrl.is_adding());
    }

    #[test]
    fn test_add_failure_keeps_form() {
        let mut ctrl = ready(two_items());
        ctrl.set_add_field(ItemField::Name, "soup");
        ctrl.set_add_field(ItemField::Price, "4");
        let request = ctrl.begin_add().request().unwrap();
        assert_eq!(ctrl.add_button_label(), "Adding...");

        let effects = ctrl.finish_add(request, Err(RequestError::Status(500)));
        assert!(!effects.reload_items);
        assert_eq!(ctrl.add_form().name, "soup");
        assert_eq!(ctrl.add_button_label(), "Add Item");
        assert!(ctrl.status().unwrap().is_error());
    }

    #[test]
    fn test_update_failure_leaves_form_open() {
        let mut ctrl = ready(two_items());
        ctrl.open_edit(2);
        ctrl.set_edit_field(2, ItemField::Price, "6.49");
        let request = ctrl.begin_update(2).request().unwrap();
        assert!(ctrl.is_saving(2));
        assert_eq!(ctrl.save_button_label(2), "Saving...");

        ctrl.finish_update(request, Err(RequestError::Network("down".into())));
        assert_eq!(ctrl.editing_id(), Some(2));
        assert!(!ctrl.is_saving(2));
        assert_eq!(ctrl.status().unwrap().message, "Error updating item. Please try again.");
    }

    #[test]
    fn test_update_success_collapses_and_reloads() {
        let mut ctrl = ready(two_items());
        ctrl.open_edit(1);
        ctrl.set_edit_field(1, ItemField::Name, "pepperoni");
        let request = ctrl.begin_update(1).request().unwrap();
        assert_eq!(request.draft.name, "pepperoni");

        let effects = ctrl.finish_update(request, Ok(()));
        assert!(effects.reload_items);
        assert_eq!(ctrl.editing_id(), None);
        assert_eq!(ctrl.status().unwrap().message, "\"pepperoni\" updated successfully!");
    }

    #[test]
    fn test_edit_forms_locked_while_saving() {
        let mut ctrl = ready(two_items());
        ctrl.open_edit(1);
        ctrl.set_edit_field(1, ItemField::Name, "pepperoni");
        let request = ctrl.begin_update(1).request().unwrap();
        assert_eq!(ctrl.saving_id(), Some(1));

        // Reopening, switching and cancelling all wait for the response
        ctrl.open_edit(1);
        ctrl.open_edit(2);
        ctrl.cancel_edit(1);
        assert_eq!(ctrl.editing_id(), Some(1));
        assert_eq!(ctrl.edit_form().unwrap().fields.name, "pepperoni");
        assert!(ctrl.is_saving(1));

        let effects = ctrl.finish_update(request, Ok(()));
        assert!(effects.reload_items);
        assert_eq!(ctrl.editing_id(), None);
        assert_eq!(ctrl.saving_id(), None);
        assert_eq!(ctrl.status().unwrap().message, "\"pepperoni\" updated successfully!");

        ctrl.open_edit(2);
        assert_eq!(ctrl.editing_id(), Some(2));
    }

    #[test]
    fn test_superseded_update_response_is_dropped() {
        let mut ctrl = ready(two_items());
        ctrl.open_edit(1);
        let first = ctrl.begin_update(1).request().unwrap();
        let second = ctrl.begin_update(1).request().unwrap();

        let effects = ctrl.finish_update(first, Err(RequestError::Status(500)));
        assert_eq!(effects, Effects::none());
        assert!(ctrl.is_saving(1));
        assert!(ctrl.status().is_none());

        let effects = ctrl.finish_update(second.clone(), Ok(()));
        assert!(effects.reload_items);
        assert_eq!(ctrl.editing_id(), None);

        // A late copy of a settled request must not touch the next form
        ctrl.open_edit(2);
        ctrl.set_edit_field(2, ItemField::Price, "4.25");
        let third = ctrl.begin_update(2).request().unwrap();
        let effects = ctrl.finish_update(second, Ok(()));
        assert_eq!(effects, Effects::none());
        assert!(ctrl.is_saving(2));
        assert_eq!(ctrl.editing_id(), Some(2));

        ctrl.finish_update(third, Err(RequestError::Network("down".into())));
        assert!(!ctrl.is_saving(2));
        assert_eq!(ctrl.editing_id(), Some(2));
        assert_eq!(ctrl.status().unwrap().message, "Error updating item. Please try again.");
    }

    #[test]
    fn test_superseded_list_response_is_dropped() {
        let mut ctrl = ready(two_items());
        let first = ctrl.begin_list();
        let second = ctrl.begin_list();
        assert!(ctrl.is_listing());

        let stale = vec![MenuItem::new(9, "stale soup", 1.0, None)];
        let effects = ctrl.finish_list(first, Ok(stale));
        assert_eq!(effects, Effects::none());
        assert_eq!(ctrl.items().unwrap().len(), 2);
        assert!(ctrl.is_listing());

        ctrl.finish_list(second, Ok(vec![MenuItem::new(3, "ramen", 7.5, None)]));
        assert!(!ctrl.is_listing());
        assert_eq!(ctrl.items().unwrap()[0].name, "ramen");
    }

    #[test]
    fn test_delete_failure_restores_button() {
        let mut ctrl = ready(two_items());
        assert_eq!(
            ctrl.delete_prompt(1).as_deref(),
            Some("Are you sure you want to delete \"pizza\"? This action cannot be undone.")
        );
        let request = ctrl.begin_delete(1).unwrap();
        assert_eq!(ctrl.delete_button_label(1), "Deleting...");
        assert!(ctrl.begin_delete(1).is_none());

        ctrl.finish_delete(request, Err(RequestError::Status(403)));
        assert_eq!(ctrl.delete_button_label(1), "Delete");
        assert!(!ctrl.is_deleting(1));
    }

    #[test]
    fn test_status_hide_only_for_its_own_message() {
        let mut ctrl = ready(two_items());
        let request = ctrl.begin_list();
        let first = ctrl.finish_list(request, Err(RequestError::Status(500)));
        let request = ctrl.begin_delete(2).unwrap();
        ctrl.finish_delete(request, Ok(()));

        let Deferred::HideBanner(old) = first.scheduled[0].action.clone() else { panic!("expected hide") };
        ctrl.hide_status(old);
        assert_eq!(ctrl.status().unwrap().message, "\"salad\" deleted successfully!");
    }

    #[tokio::test]
    async fn test_logout_redirects_even_when_offline() {
        let api = MemoryApi::new().signed_in_as("chef@lunch.io");
        api.set_offline(true);
        let mut ctrl = ready(two_items());

        let request = ctrl.begin_logout();
        let result = request.send(&api).await;
        let effects = ctrl.finish_logout(request, result);
        assert_eq!(effects.navigation(), Some("/login"));
        assert_eq!(api.requests(), vec!["POST /logout"]);
    }
}
