//! Login Page Controller
//!
//! Two mutually exclusive forms (login, signup) behind a guests-only session
//! gate. Messages share one slot: errors auto-hide, successes stay.

use crate::action::{ActionSlot, Ticket};
use crate::api::LunchApi;
use crate::config::ClientConfig;
use crate::effects::{Begin, Deferred, Effects};
use crate::error::{ApiResult, Field, ValidationError};
use crate::feedback::{Banner, BannerToken, Notice};
use crate::models::{AuthOutcome, AuthStatus, Credentials};
use crate::session::{GateDecision, SessionGate};
use crate::validation::{confirm_mismatch, validate_login, validate_signup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthView {
    #[default]
    Login,
    Signup,
}

impl AuthView {
    pub fn title(&self) -> &'static str {
        match self {
            AuthView::Login => "🔐 Admin Login",
            AuthView::Signup => "📝 Create Account",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            AuthView::Login => "Budget Lunch Management Portal",
            AuthView::Signup => "Join Budget Lunch Admin Portal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// Forms stay hidden until the session check answers
    CheckingSession,
    Ready,
    /// Login accepted; forms stay up to show the message until navigation
    Redirecting,
    Leaving,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginRequest {
    ticket: Ticket,
    pub credentials: Credentials,
}

impl LoginRequest {
    pub async fn send<A: LunchApi + ?Sized>(&self, api: &A) -> ApiResult<AuthOutcome> {
        api.login(&self.credentials).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignupRequest {
    ticket: Ticket,
    pub credentials: Credentials,
}

impl SignupRequest {
    pub async fn send<A: LunchApi + ?Sized>(&self, api: &A) -> ApiResult<AuthOutcome> {
        api.signup(&self.credentials).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthController {
    config: ClientConfig,
    phase: AuthPhase,
    view: AuthView,
    login: LoginForm,
    signup: SignupForm,
    login_slot: ActionSlot,
    signup_slot: ActionSlot,
    message: Banner,
}

impl AuthController {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            phase: AuthPhase::CheckingSession,
            view: AuthView::Login,
            login: LoginForm::default(),
            signup: SignupForm::default(),
            login_slot: ActionSlot::new(),
            signup_slot: ActionSlot::new(),
            message: Banner::new(),
        }
    }

    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    pub fn show_forms(&self) -> bool {
        matches!(self.phase, AuthPhase::Ready | AuthPhase::Redirecting)
    }

    pub fn is_redirecting(&self) -> bool {
        self.phase == AuthPhase::Redirecting
    }

    pub fn view(&self) -> AuthView {
        self.view
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login
    }

    pub fn signup_form(&self) -> &SignupForm {
        &self.signup
    }

    pub fn message(&self) -> Option<&Notice> {
        self.message.current()
    }

    pub fn hide_message(&mut self, token: BannerToken) {
        self.message.hide_if(token);
    }

    pub fn is_logging_in(&self) -> bool {
        self.login_slot.is_busy()
    }

    pub fn is_signing_up(&self) -> bool {
        self.signup_slot.is_busy()
    }

    pub fn finish_session_check(&mut self, status: ApiResult<AuthStatus>) -> Effects {
        match SessionGate::GuestsOnly.decide(&status, &self.config) {
            GateDecision::Redirect(path) => {
                tracing::info!("already signed in, leaving login page");
                self.phase = AuthPhase::Leaving;
                Effects::none().navigate_now(path)
            }
            GateDecision::Proceed(_) => {
                self.phase = AuthPhase::Ready;
                Effects::none()
            }
        }
    }

    /// Toggle forms; any visible message is cleared
    pub fn switch_to(&mut self, view: AuthView) {
        self.view = view;
        self.message.clear();
    }

    /// Update one input. Fields of the other page are ignored.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Email => self.login.email = value,
            Field::Password => self.login.password = value,
            Field::SignupEmail => self.signup.email = value,
            Field::SignupPassword => self.signup.password = value,
            Field::ConfirmPassword => self.signup.confirm = value,
            Field::Budget | Field::ItemName | Field::ItemPrice => {}
        }
    }

    /// Live mismatch flag for the confirmation input
    pub fn confirm_invalid(&self) -> bool {
        confirm_mismatch(&self.signup.password, &self.signup.confirm)
    }

    fn error(&mut self, message: impl Into<String>) -> Effects {
        let token = self.message.show(Notice::error(message));
        Effects::none().schedule(self.config.auth_error_hide(), Deferred::HideBanner(token))
    }

    fn reject<T>(&mut self, error: ValidationError) -> Begin<T> {
        let field = error.field();
        Begin::Rejected(self.error(error.to_string()).focus(field))
    }

    // ========================
    // Login
    // ========================

    pub fn begin_login(&mut self) -> Begin<LoginRequest> {
        if self.is_redirecting() {
            return Begin::Rejected(Effects::none());
        }
        self.message.clear();
        match validate_login(&self.login.email, &self.login.password) {
            Err(e) => self.reject(e),
            Ok(credentials) => Begin::Send(LoginRequest {
                ticket: self.login_slot.start(),
                credentials,
            }),
        }
    }

    pub fn finish_login(&mut self, request: LoginRequest, result: ApiResult<AuthOutcome>) -> Effects {
        if !self.login_slot.finish(request.ticket) {
            return Effects::none();
        }
        match result {
            Ok(outcome) if outcome.success => {
                tracing::info!(email = %request.credentials.email, "login accepted");
                self.message.show(Notice::success("Login successful! Redirecting..."));
                self.phase = AuthPhase::Redirecting;
                Effects::none().schedule(
                    self.config.login_redirect(),
                    Deferred::Navigate(self.config.admin_page.clone()),
                )
            }
            Ok(outcome) => {
                let message = outcome
                    .message()
                    .unwrap_or("Login failed. Please check your credentials.")
                    .to_string();
                self.error(message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login request failed");
                self.error("An error occurred during login. Please try again.")
            }
        }
    }

    // ========================
    // Signup
    // ========================

    pub fn begin_signup(&mut self) -> Begin<SignupRequest> {
        if self.is_redirecting() {
            return Begin::Rejected(Effects::none());
        }
        self.message.clear();
        let validated = validate_signup(
            &self.signup.email,
            &self.signup.password,
            &self.signup.confirm,
            self.config.min_password_len,
        );
        match validated {
            Err(e) => self.reject(e),
            Ok(credentials) => Begin::Send(SignupRequest {
                ticket: self.signup_slot.start(),
                credentials,
            }),
        }
    }

    pub fn finish_signup(&mut self, request: SignupRequest, result: ApiResult<AuthOutcome>) -> Effects {
        if !self.signup_slot.finish(request.ticket) {
            return Effects::none();
        }
        match result {
            Ok(outcome) if outcome.success => {
                tracing::info!(email = %request.credentials.email, "account created");
                let message = outcome.message().unwrap_or("Account created successfully!").to_string();
                self.message.show(Notice::success(message));
                self.signup = SignupForm::default();
                Effects::none().schedule(self.config.signup_switch(), Deferred::ShowLoginView)
            }
            Ok(outcome) => {
                let message = outcome
                    .message()
                    .unwrap_or("Failed to create account. Please try again.")
                    .to_string();
                self.error(message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "signup request failed");
                self.error("An error occurred during signup. Please try again.")
            }
        }
    }
}
