//! Auth workflows: login, session bootstrap, registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from `spawn_local` with [`super::api::HttpAuthApi`] and
//! [`crate::util::storage::BrowserTokenStore`]. Progress is reported through
//! callbacks so the caller can mirror it into signals. Registration reads and
//! writes the live form state directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::AuthApi;
use super::types::LoginRequest;
use crate::state::login::{INVALID_TOKEN, LOGIN_FAILED, LoginPhase};
use crate::state::register::{RegisterOutcome, RegisterState};
use crate::util::storage::TokenStore;

/// Post credentials, persist the issued token, then verify it to learn the
/// user's role.
///
/// A verify answer that succeeds without being a 200 ends the workflow back
/// in [`LoginPhase::Idle`]: no banner and no redirect.
pub async fn login<A, S>(api: &A, store: &S, request: &LoginRequest, mut on_phase: impl FnMut(&LoginPhase)) -> LoginPhase
where
    A: AuthApi,
    S: TokenStore,
{
    on_phase(&LoginPhase::Submitting);
    let outcome = match api.login(request).await {
        Err(e) => {
            log::warn!("login request failed: {e}");
            LoginPhase::failed(e.user_message())
        }
        Ok(response) => match response.session_token() {
            None => LoginPhase::failed(LOGIN_FAILED),
            Some(token) => {
                store.set(token);
                on_phase(&LoginPhase::Verifying);
                match api.verify(token).await {
                    Ok(Some(verified)) => LoginPhase::for_role(&verified.role),
                    Ok(None) => {
                        log::info!("token verification returned a non-200 success status");
                        LoginPhase::Idle
                    }
                    Err(e) => {
                        log::warn!("token verification after login failed: {e}");
                        LoginPhase::failed(e.user_message())
                    }
                }
            }
        },
    };
    on_phase(&outcome);
    outcome
}

/// Verify a previously stored token. Returns `None` when nothing is stored
/// or the verify answer carried no role to act on.
///
/// A rejected token leaves storage untouched so the user can simply log in
/// again over it.
pub async fn bootstrap_session<A, S>(api: &A, store: &S) -> Option<LoginPhase>
where
    A: AuthApi,
    S: TokenStore,
{
    let token = store.get()?;
    match api.verify(&token).await {
        Ok(verified) => verified.map(|v| LoginPhase::for_role(&v.role)),
        Err(e) => {
            log::warn!("stored token verification failed: {e}");
            Some(LoginPhase::failed(INVALID_TOKEN))
        }
    }
}

/// Validate and, if valid, submit the registration form.
///
/// `read` returns the live form state and `write` replaces it. The state is
/// re-read after the request resolves so edits made while it was in flight
/// survive. Invalid forms, and submits while a request is already loading,
/// never reach the network.
pub async fn register<A>(api: &A, read: impl Fn() -> RegisterState, write: impl Fn(RegisterState))
where
    A: AuthApi,
{
    let (submitting, request) = read().begin_submit();
    write(submitting);
    let Some(request) = request else {
        return;
    };
    let outcome = match api.register(&request).await {
        Ok(response) => RegisterOutcome::Registered(response.message),
        Err(e) => {
            log::warn!("registration request failed: {e}");
            RegisterOutcome::Rejected(e.user_message())
        }
    };
    write(read().finish(outcome));
}

/// Drop the stored session token.
pub fn logout<S: TokenStore>(store: &S) {
    store.clear();
}
