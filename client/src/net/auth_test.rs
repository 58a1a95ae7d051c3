use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::api::{ApiError, FALLBACK_ERROR_MESSAGE};
use crate::net::types::{LoginResponse, MessageResponse, RegisterRequest, VerifyResponse};
use crate::state::auth::{Role, UNKNOWN_ROLE_MESSAGE};
use crate::state::register::{Field, ProfileForm, RegisterState};

// =============================================================
// Fakes
// =============================================================

struct FakeApi {
    login: Result<LoginResponse, ApiError>,
    verify: Result<Option<VerifyResponse>, ApiError>,
    register: Result<MessageResponse, ApiError>,
    calls: RefCell<Vec<String>>,
    during_register: Option<Box<dyn Fn()>>,
}

impl FakeApi {
    fn new() -> Self {
        Self {
            login: Ok(LoginResponse { token: Some("abc".to_owned()) }),
            verify: Ok(Some(VerifyResponse { role: "seeker".to_owned() })),
            register: Ok(MessageResponse { message: Some("User registered successfully".to_owned()) }),
            calls: RefCell::new(Vec::new()),
            during_register: None,
        }
    }

    fn verifying_role(role: &str) -> Self {
        Self { verify: Ok(Some(VerifyResponse { role: role.to_owned() })), ..Self::new() }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.calls.borrow_mut().push(format!("login {}", request.user_email));
        self.login.clone()
    }

    async fn verify(&self, token: &str) -> Result<Option<VerifyResponse>, ApiError> {
        self.calls.borrow_mut().push(format!("verify {token}"));
        self.verify.clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.calls.borrow_mut().push(format!("register {}", request.user_email));
        if let Some(edit) = &self.during_register {
            edit();
        }
        self.register.clone()
    }
}

#[derive(Default)]
struct MemoryStore {
    token: RefCell<Option<String>>,
    clears: Cell<u32>,
}

impl MemoryStore {
    fn holding(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())), clears: Cell::new(0) }
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.clears.set(self.clears.get() + 1);
        *self.token.borrow_mut() = None;
    }
}

fn credentials() -> LoginRequest {
    LoginRequest { user_email: "user@test.com".to_owned(), user_password: "secret1".to_owned() }
}

fn run_login(api: &FakeApi, store: &MemoryStore) -> (LoginPhase, Vec<LoginPhase>) {
    let mut seen = Vec::new();
    let outcome = block_on(login(api, store, &credentials(), |phase| seen.push(phase.clone())));
    (outcome, seen)
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_seeker_redirects_to_seeker_dashboard() {
    let api = FakeApi::new();
    let store = MemoryStore::default();
    let (outcome, seen) = run_login(&api, &store);

    assert_eq!(outcome, LoginPhase::Redirected(Role::Seeker));
    assert_eq!(outcome.redirect(), Some("/dashboard"));
    assert_eq!(outcome.error(), None);
    assert_eq!(
        seen,
        vec![LoginPhase::Submitting, LoginPhase::Verifying, LoginPhase::Redirected(Role::Seeker)]
    );
    assert_eq!(api.calls(), vec!["login user@test.com", "verify abc"]);
    assert_eq!(store.get().as_deref(), Some("abc"));
}

#[test]
fn login_seller_redirects_to_seller_dashboard() {
    let api = FakeApi::verifying_role("seller");
    let (outcome, _) = run_login(&api, &MemoryStore::default());
    assert_eq!(outcome.redirect(), Some("/dashboardSeller"));
}

#[test]
fn login_unknown_role_fails_without_redirect() {
    let api = FakeApi::verifying_role("admin");
    let store = MemoryStore::default();
    let (outcome, _) = run_login(&api, &store);

    assert_eq!(outcome.error(), Some(UNKNOWN_ROLE_MESSAGE));
    assert_eq!(outcome.redirect(), None);
    assert_eq!(store.get().as_deref(), Some("abc"));
}

#[test]
fn login_without_token_fails_and_skips_verify() {
    let api = FakeApi { login: Ok(LoginResponse { token: None }), ..FakeApi::new() };
    let store = MemoryStore::default();
    let (outcome, seen) = run_login(&api, &store);

    assert_eq!(outcome.error(), Some(LOGIN_FAILED));
    assert_eq!(seen, vec![LoginPhase::Submitting, LoginPhase::failed(LOGIN_FAILED)]);
    assert_eq!(api.calls(), vec!["login user@test.com"]);
    assert_eq!(store.get(), None);
}

#[test]
fn login_rejection_surfaces_backend_message() {
    let api = FakeApi {
        login: Err(ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) }),
        ..FakeApi::new()
    };
    let store = MemoryStore::default();
    let (outcome, _) = run_login(&api, &store);

    assert_eq!(outcome.error(), Some("Invalid credentials"));
    assert_eq!(store.get(), None);
}

#[test]
fn login_network_error_uses_fallback_message() {
    let api = FakeApi { login: Err(ApiError::Network("offline".to_owned())), ..FakeApi::new() };
    let (outcome, _) = run_login(&api, &MemoryStore::default());
    assert_eq!(outcome.error(), Some(FALLBACK_ERROR_MESSAGE));
}

#[test]
fn verify_failure_after_login_keeps_token_and_reports_message() {
    let api = FakeApi {
        verify: Err(ApiError::Status { status: 401, message: Some("Token expired".to_owned()) }),
        ..FakeApi::new()
    };
    let store = MemoryStore::default();
    let (outcome, _) = run_login(&api, &store);

    assert_eq!(outcome.error(), Some("Token expired"));
    assert_eq!(store.get().as_deref(), Some("abc"));
}

#[test]
fn login_null_role_reports_unknown_role() {
    let api = FakeApi { verify: Ok(Some(serde_json::from_str(r#"{"role":null}"#).unwrap())), ..FakeApi::new() };
    let (outcome, _) = run_login(&api, &MemoryStore::default());
    assert_eq!(outcome.error(), Some(UNKNOWN_ROLE_MESSAGE));
    assert_eq!(outcome.redirect(), None);
}

#[test]
fn login_numeric_role_reports_unknown_role() {
    let api = FakeApi { verify: Ok(Some(serde_json::from_str(r#"{"role":1}"#).unwrap())), ..FakeApi::new() };
    let (outcome, _) = run_login(&api, &MemoryStore::default());
    assert_eq!(outcome.error(), Some(UNKNOWN_ROLE_MESSAGE));
}

#[test]
fn login_non_200_verify_success_ends_idle_without_error() {
    let api = FakeApi { verify: Ok(None), ..FakeApi::new() };
    let store = MemoryStore::default();
    let (outcome, seen) = run_login(&api, &store);

    assert_eq!(outcome, LoginPhase::Idle);
    assert_eq!(outcome.error(), None);
    assert_eq!(outcome.redirect(), None);
    assert!(!outcome.is_loading());
    assert_eq!(seen.last(), Some(&LoginPhase::Idle));
    assert_eq!(store.get().as_deref(), Some("abc"));
}

// =============================================================
// Session bootstrap
// =============================================================

#[test]
fn bootstrap_without_stored_token_does_nothing() {
    let api = FakeApi::new();
    assert_eq!(block_on(bootstrap_session(&api, &MemoryStore::default())), None);
    assert!(api.calls().is_empty());
}

#[test]
fn bootstrap_with_valid_token_redirects() {
    let api = FakeApi::verifying_role("seller");
    let outcome = block_on(bootstrap_session(&api, &MemoryStore::holding("stored")));

    assert_eq!(outcome, Some(LoginPhase::Redirected(Role::Seller)));
    assert_eq!(api.calls(), vec!["verify stored"]);
}

#[test]
fn bootstrap_with_unknown_role_reports_unknown_role() {
    let api = FakeApi::verifying_role("admin");
    let outcome = block_on(bootstrap_session(&api, &MemoryStore::holding("stored")));
    assert_eq!(outcome, Some(LoginPhase::failed(UNKNOWN_ROLE_MESSAGE)));
}

#[test]
fn bootstrap_with_null_role_reports_unknown_role() {
    let api = FakeApi { verify: Ok(Some(serde_json::from_str(r#"{"role":null}"#).unwrap())), ..FakeApi::new() };
    let outcome = block_on(bootstrap_session(&api, &MemoryStore::holding("stored")));
    assert_eq!(outcome, Some(LoginPhase::failed(UNKNOWN_ROLE_MESSAGE)));
}

#[test]
fn bootstrap_with_non_200_verify_success_does_nothing() {
    let api = FakeApi { verify: Ok(None), ..FakeApi::new() };
    let store = MemoryStore::holding("stored");
    assert_eq!(block_on(bootstrap_session(&api, &store)), None);
    assert_eq!(store.get().as_deref(), Some("stored"));
}

#[test]
fn bootstrap_with_rejected_token_keeps_token_and_stays() {
    let api = FakeApi {
        verify: Err(ApiError::Status { status: 401, message: Some("jwt expired".to_owned()) }),
        ..FakeApi::new()
    };
    let store = MemoryStore::holding("stale");
    let outcome = block_on(bootstrap_session(&api, &store)).unwrap();

    assert_eq!(outcome.error(), Some(INVALID_TOKEN));
    assert_eq!(outcome.redirect(), None);
    assert_eq!(store.get().as_deref(), Some("stale"));
    assert_eq!(store.clears.get(), 0);
}

// =============================================================
// Registration
// =============================================================

fn valid_state() -> RegisterState {
    let form = ProfileForm {
        name: "Asha Rao".to_owned(),
        email: "asha@example.com".to_owned(),
        password: "Passw0rd!".to_owned(),
        mobile: "9876543210".to_owned(),
        gender: "female".to_owned(),
        role: "seller".to_owned(),
    };
    RegisterState { form, ..RegisterState::default() }
}

/// Live state cell standing in for the page's signal.
fn live(state: RegisterState) -> Rc<RefCell<RegisterState>> {
    Rc::new(RefCell::new(state))
}

fn run_register(api: &FakeApi, cell: &Rc<RefCell<RegisterState>>) -> Vec<RegisterState> {
    let writes = RefCell::new(Vec::new());
    block_on(register(
        api,
        || cell.borrow().clone(),
        |next| {
            writes.borrow_mut().push(next.clone());
            *cell.borrow_mut() = next;
        },
    ));
    writes.into_inner()
}

#[test]
fn register_with_short_password_makes_no_network_call() {
    let api = FakeApi::new();
    let cell = live(valid_state().with_field(Field::Password, "short"));
    run_register(&api, &cell);

    let done = cell.borrow().clone();
    assert!(done.errors.contains_key(&Field::Password));
    assert!(!done.loading);
    assert!(api.calls().is_empty());
}

#[test]
fn register_while_loading_makes_no_network_call() {
    let api = FakeApi::new();
    let (submitting, _) = valid_state().begin_submit();
    let cell = live(submitting.clone());
    run_register(&api, &cell);

    assert!(api.calls().is_empty());
    assert_eq!(*cell.borrow(), submitting);
}

#[test]
fn register_success_resets_form_and_shows_confirmation() {
    let api = FakeApi::new();
    let cell = live(valid_state());
    let writes = run_register(&api, &cell);

    assert!(writes[0].loading);
    assert_eq!(api.calls(), vec!["register asha@example.com"]);
    let done = cell.borrow().clone();
    assert_eq!(done.form, ProfileForm::default());
    assert!(done.errors.is_empty());
    assert_eq!(done.message.as_deref(), Some("User registered successfully"));
    assert_eq!(done.error, None);
}

#[test]
fn register_failure_surfaces_backend_message_and_keeps_form() {
    let api = FakeApi {
        register: Err(ApiError::Status { status: 409, message: Some("User already exists".to_owned()) }),
        ..FakeApi::new()
    };
    let cell = live(valid_state());
    run_register(&api, &cell);

    let done = cell.borrow().clone();
    assert_eq!(done.error.as_deref(), Some("User already exists"));
    assert_eq!(done.form, valid_state().form);
    assert!(!done.loading);
}

#[test]
fn register_failure_keeps_edits_made_while_request_was_in_flight() {
    let cell = live(valid_state());
    let editor = Rc::clone(&cell);
    let api = FakeApi {
        register: Err(ApiError::Status { status: 409, message: Some("User already exists".to_owned()) }),
        during_register: Some(Box::new(move || {
            let edited = editor.borrow().with_field(Field::Name, "Asha R. Corrected");
            *editor.borrow_mut() = edited;
        })),
        ..FakeApi::new()
    };
    run_register(&api, &cell);

    let done = cell.borrow().clone();
    assert_eq!(done.form.name, "Asha R. Corrected");
    assert_eq!(done.error.as_deref(), Some("User already exists"));
    assert!(!done.loading);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_stored_token() {
    let store = MemoryStore::holding("abc");
    logout(&store);
    assert_eq!(store.get(), None);
    assert_eq!(store.clears.get(), 1);
}
