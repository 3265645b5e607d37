//! Login Page Component
//!
//! Guests-only page with a login form and a signup form; one is visible at a time.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lunch_core::auth::AuthPhase;
use lunch_core::{AuthController, AuthView, Begin, Field, LunchApi, NoticeKind};

use crate::context::use_app_context;
use crate::host::PageHost;
use crate::store::use_ui_store;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let ctrl = RwSignal::new(AuthController::new(ctx.config()));

    let host = PageHost::new(ctx, use_ui_store())
        .on_hide_banner(Callback::new(move |token| ctrl.update(|c| c.hide_message(token))))
        .on_show_login(Callback::new(move |_| ctrl.update(|c| c.switch_to(AuthView::Login))));

    // Forms stay hidden until the server says nobody is signed in
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            let status = api.check_auth().await;
            if let Some(effects) = ctrl.try_update(|c| c.finish_session_check(status)) {
                host.run(effects);
            }
        });
    });

    let login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctrl.try_update(|c| c.begin_login()) {
            Some(Begin::Send(request)) => {
                let api = ctx.api();
                host.settle(
                    ctrl,
                    async move {
                        let result = request.send(&api).await;
                        (request, result)
                    },
                    AuthController::finish_login,
                );
            }
            Some(Begin::Rejected(effects)) => host.run(effects),
            None => {}
        }
    };

    let signup = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctrl.try_update(|c| c.begin_signup()) {
            Some(Begin::Send(request)) => {
                let api = ctx.api();
                host.settle(
                    ctrl,
                    async move {
                        let result = request.send(&api).await;
                        (request, result)
                    },
                    AuthController::finish_signup,
                );
            }
            Some(Begin::Rejected(effects)) => host.run(effects),
            None => {}
        }
    };

    let view_is = move |view: AuthView| ctrl.with(|c| c.view() == view);
    let message = Memo::new(move |_| ctrl.with(|c| c.message().cloned()));
    let logging_in = move || ctrl.with(|c| c.is_logging_in());
    let signing_up = move || ctrl.with(|c| c.is_signing_up());
    let redirecting = move || ctrl.with(|c| c.is_redirecting());
    let set = move |field: Field, value: String| ctrl.update(|c| c.set_field(field, value));

    view! {
        <div class="login-container">
            <Show
                when=move || ctrl.with(|c| c.show_forms())
                fallback=move || {
                    let leaving = ctrl.with(|c| c.phase() == AuthPhase::Leaving);
                    view! {
                        <div class="loading">
                            <i class="fas fa-spinner fa-spin"></i>
                            {if leaving { " Redirecting..." } else { " Checking session..." }}
                        </div>
                    }
                }
            >
                <div class="login-header">
                    <h1 id="pageTitle">{move || ctrl.with(|c| c.view().title())}</h1>
                    <p id="pageSubtitle">{move || ctrl.with(|c| c.view().subtitle())}</p>
                </div>

                <div class="form-toggle">
                    <button
                        id="loginToggle"
                        type="button"
                        class="toggle-btn"
                        class:active=move || view_is(AuthView::Login)
                        on:click=move |_| ctrl.update(|c| c.switch_to(AuthView::Login))
                    >
                        "Login"
                    </button>
                    <button
                        id="signupToggle"
                        type="button"
                        class="toggle-btn"
                        class:active=move || view_is(AuthView::Signup)
                        on:click=move |_| ctrl.update(|c| c.switch_to(AuthView::Signup))
                    >
                        "Sign Up"
                    </button>
                </div>

                {move || message.get().map(|notice| {
                    let id = if notice.kind == NoticeKind::Error { "errorMessage" } else { "successMessage" };
                    view! {
                        <div id=id class=format!("message {}-message show", notice.kind.css_suffix())>
                            <i class=format!("fas {}", notice.kind.icon())></i>
                            " "
                            {notice.message}
                        </div>
                    }
                })}

                <form id="loginForm" class="auth-form" class:hidden=move || !view_is(AuthView::Login) on:submit=login>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@example.com"
                            prop:value=move || ctrl.with(|c| c.login_form().email.clone())
                            on:input=move |ev| set(Field::Email, event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || ctrl.with(|c| c.login_form().password.clone())
                            on:input=move |ev| set(Field::Password, event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" id="loginBtn" class="btn btn-primary" prop:disabled=move || logging_in() || redirecting()>
                        <span id="loading" class="spinner" class:hidden=move || !logging_in()></span>
                        " Login"
                    </button>
                </form>

                <form id="signupForm" class="auth-form" class:hidden=move || !view_is(AuthView::Signup) on:submit=signup>
                    <div class="form-group">
                        <label for="signupEmail">"Email"</label>
                        <input
                            type="email"
                            id="signupEmail"
                            placeholder="you@example.com"
                            prop:value=move || ctrl.with(|c| c.signup_form().email.clone())
                            on:input=move |ev| set(Field::SignupEmail, event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="signupPassword">"Password"</label>
                        <input
                            type="password"
                            id="signupPassword"
                            prop:value=move || ctrl.with(|c| c.signup_form().password.clone())
                            on:input=move |ev| set(Field::SignupPassword, event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="confirmPassword">"Confirm Password"</label>
                        <input
                            type="password"
                            id="confirmPassword"
                            class:invalid=move || ctrl.with(|c| c.confirm_invalid())
                            prop:value=move || ctrl.with(|c| c.signup_form().confirm.clone())
                            on:input=move |ev| set(Field::ConfirmPassword, event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" id="signupBtn" class="btn btn-primary" prop:disabled=move || signing_up() || redirecting()>
                        <span id="signupLoading" class="spinner" class:hidden=move || !signing_up()></span>
                        " Create Account"
                    </button>
                </form>
            </Show>
        </div>
    }
}
