//! Page Flow Tests
//!
//! Controllers driven end to end against the in-memory backend.

use crate::admin::{AdminController, AdminPhase, ItemField};
use crate::auth::{AuthController, AuthView};
use crate::effects::{Begin, Deferred, Effects};
use crate::error::Field;
use crate::memory::MemoryApi;
use crate::models::MenuItem;
use crate::{ClientConfig, LunchApi};

fn catalogue() -> Vec<MenuItem> {
    vec![
        MenuItem::new(3, "pizza", 6.99, Some("https://img/pizza.jpg")),
        MenuItem::new(4, "salad", 5.99, None),
        MenuItem::new(5, "soda", 1.99, None),
    ]
}

/// Apply the reload effect the way the page host does
async fn apply(ctrl: &mut AdminController, api: &MemoryApi, effects: Effects) -> Effects {
    if !effects.reload_items {
        return effects;
    }
    let request = ctrl.begin_list();
    let result = request.send(api).await;
    ctrl.finish_list(request, result);
    effects
}

async fn open_admin(api: &MemoryApi) -> (AdminController, Effects) {
    let mut ctrl = AdminController::new(ClientConfig::default());
    let status = api.check_auth().await;
    let effects = ctrl.finish_session_check(status);
    let effects = apply(&mut ctrl, api, effects).await;
    (ctrl, effects)
}

#[tokio::test]
async fn test_admin_lists_after_session_check() {
    let api = MemoryApi::new().with_items(catalogue()).signed_in_as("chef@lunch.io");
    let (ctrl, _) = open_admin(&api).await;

    assert_eq!(ctrl.phase(), AdminPhase::Ready);
    assert_eq!(ctrl.rows().len(), 3);
    assert_eq!(api.requests(), vec!["GET /check-auth", "GET /list"]);
}

#[tokio::test]
async fn test_unauthenticated_admin_visit_goes_to_login() {
    let api = MemoryApi::new().with_items(catalogue());
    let (ctrl, effects) = open_admin(&api).await;
    assert_eq!(effects.navigation(), Some("/login"));
    assert!(ctrl.items().is_none());
    assert_eq!(api.request_count(), 1);

    let api = MemoryApi::new().signed_in_as("chef@lunch.io");
    api.set_offline(true);
    let (_, effects) = open_admin(&api).await;
    assert_eq!(effects.navigation(), Some("/login"));
}

#[tokio::test]
async fn test_successful_add_clears_form_and_grows_list() {
    let api = MemoryApi::new().with_items(catalogue()).signed_in_as("chef@lunch.io");
    let (mut ctrl, _) = open_admin(&api).await;

    ctrl.set_add_field(ItemField::Name, "mac & cheese");
    ctrl.set_add_field(ItemField::Price, "7.25");
    ctrl.set_add_field(ItemField::ImageUrl, "https://img/mac.jpg");
    let request = ctrl.begin_add().request().unwrap();
    let result = request.send(&api).await;
    let effects = ctrl.finish_add(request, result);
    apply(&mut ctrl, &api, effects).await;

    assert_eq!(ctrl.add_form().name, "");
    assert_eq!(ctrl.add_form().price, "");
    assert_eq!(ctrl.add_form().imageurl, "");
    assert_eq!(ctrl.items().unwrap().len(), 4);
    assert!(api
        .requests()
        .contains(&"GET /add/mac%20%26%20cheese/7.25?imageurl=https%3A%2F%2Fimg%2Fmac.jpg".to_string()));
    assert_eq!(ctrl.status().unwrap().message, "\"mac & cheese\" added successfully!");
}

#[tokio::test]
async fn test_rejected_add_sends_nothing() {
    let api = MemoryApi::new().with_items(catalogue()).signed_in_as("chef@lunch.io");
    let (mut ctrl, _) = open_admin(&api).await;
    let sent = api.request_count();

    ctrl.set_add_field(ItemField::Name, "soup");
    ctrl.set_add_field(ItemField::Price, "");
    let Begin::Rejected(effects) = ctrl.begin_add() else { panic!("blank price must be rejected") };
    assert_eq!(effects.focus, Some(Field::ItemPrice));
    assert_eq!(api.request_count(), sent);
    assert_eq!(ctrl.add_form().name, "soup");
}

#[tokio::test]
async fn test_successful_delete_removes_item() {
    let api = MemoryApi::new().with_items(catalogue()).signed_in_as("chef@lunch.io");
    let (mut ctrl, _) = open_admin(&api).await;

    let request = ctrl.begin_delete(5).unwrap();
    let result = request.send(&api).await;
    let effects = ctrl.finish_delete(request, result);
    apply(&mut ctrl, &api, effects).await;

    assert!(ctrl.items().unwrap().iter().all(|item| item.id != 5));
    let listed = api.list_items().await.unwrap();
    assert!(listed.iter().all(|item| item.id != 5));
}

#[tokio::test]
async fn test_edit_then_save_refetches() {
    let api = MemoryApi::new().with_items(catalogue()).signed_in_as("chef@lunch.io");
    let (mut ctrl, _) = open_admin(&api).await;

    ctrl.open_edit(4);
    ctrl.set_edit_field(4, ItemField::Price, "4.5");
    let request = ctrl.begin_update(4).request().unwrap();
    let result = request.send(&api).await;
    let effects = ctrl.finish_update(request, result);
    apply(&mut ctrl, &api, effects).await;

    assert_eq!(ctrl.editing_id(), None);
    let salad = ctrl.items().unwrap().iter().find(|item| item.id == 4).unwrap();
    assert_eq!(salad.price, 4.5);
    assert_eq!(api.requests().last().map(String::as_str), Some("GET /list"));
}

#[tokio::test]
async fn test_signup_short_password_sends_nothing() {
    let api = MemoryApi::new();
    let mut ctrl = AuthController::new(ClientConfig::default());
    ctrl.finish_session_check(api.check_auth().await);
    ctrl.switch_to(AuthView::Signup);

    ctrl.set_field(Field::SignupEmail, "new@lunch.io");
    ctrl.set_field(Field::SignupPassword, "12345");
    ctrl.set_field(Field::ConfirmPassword, "12345");
    let Begin::Rejected(effects) = ctrl.begin_signup() else { panic!("short password must be rejected") };

    assert!(ctrl.message().unwrap().message.contains("at least 6 characters"));
    assert_eq!(effects.focus, Some(Field::SignupPassword));
    assert_eq!(api.requests(), vec!["GET /check-auth"]);
}

#[tokio::test]
async fn test_signup_mismatch_sends_nothing() {
    let api = MemoryApi::new();
    let mut ctrl = AuthController::new(ClientConfig::default());
    ctrl.finish_session_check(api.check_auth().await);
    ctrl.switch_to(AuthView::Signup);

    ctrl.set_field(Field::SignupEmail, "new@lunch.io");
    ctrl.set_field(Field::SignupPassword, "secret1");
    ctrl.set_field(Field::ConfirmPassword, "secret2");
    assert!(ctrl.confirm_invalid());

    let Begin::Rejected(effects) = ctrl.begin_signup() else { panic!("mismatch must be rejected") };
    assert_eq!(effects.focus, Some(Field::ConfirmPassword));
    assert_eq!(ctrl.message().unwrap().message, "Passwords do not match.");
    assert_eq!(api.request_count(), 1);
}

#[tokio::test]
async fn test_signup_success_then_login_reaches_admin() {
    let api = MemoryApi::new().with_items(catalogue());
    let mut auth = AuthController::new(ClientConfig::default());
    auth.finish_session_check(api.check_auth().await);
    assert!(auth.show_forms());

    auth.switch_to(AuthView::Signup);
    auth.set_field(Field::SignupEmail, "new@lunch.io");
    auth.set_field(Field::SignupPassword, "secret1");
    auth.set_field(Field::ConfirmPassword, "secret1");
    let request = auth.begin_signup().request().unwrap();
    let result = request.send(&api).await;
    let effects = auth.finish_signup(request, result);

    assert!(auth.message().unwrap().message.starts_with("Account created successfully!"));
    assert_eq!(auth.signup_form().email, "");
    assert_eq!(effects.scheduled[0].action, Deferred::ShowLoginView);

    auth.switch_to(AuthView::Login);
    auth.set_field(Field::Email, "new@lunch.io");
    auth.set_field(Field::Password, "secret1");
    let request = auth.begin_login().request().unwrap();
    let result = request.send(&api).await;
    let effects = auth.finish_login(request, result);
    assert_eq!(effects.navigation(), Some("/admin.html"));

    let (admin, _) = open_admin(&api).await;
    assert_eq!(admin.user_email(), Some("new@lunch.io"));
    assert_eq!(admin.rows().len(), 3);
}

#[tokio::test]
async fn test_signed_in_login_visit_redirects_to_admin() {
    let api = MemoryApi::new().signed_in_as("chef@lunch.io");
    let mut auth = AuthController::new(ClientConfig::default());
    let effects = auth.finish_session_check(api.check_auth().await);
    assert_eq!(effects.navigation(), Some("/admin.html"));
    assert!(!auth.show_forms());
}
