//! Login page: email + password sign-in with role-based redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page verifies any stored session token and redirects without
//! asking for credentials. Otherwise a submit posts the credentials, stores
//! the returned token and verifies it to pick the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::login::{LoginForm, LoginPhase};

/// CSS class for a text input, flagging it when its field has an error.
pub(crate) fn input_class(has_error: bool) -> &'static str {
    if has_error { "form-input form-input--error" } else { "form-input" }
}

/// Banner text for the current phase.
fn banner_error(phase: &LoginPhase) -> String {
    phase.error().map(str::to_owned).unwrap_or_default()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let phase = RwSignal::new(LoginPhase::Idle);
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(path) = phase.get().redirect() {
            navigate(path, NavigateOptions::default());
        }
    });

    // Session bootstrap: runs once per mount, independent of submit.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::HttpAuthApi::default();
        let store = crate::util::storage::BrowserTokenStore;
        if let Some(outcome) = crate::net::auth::bootstrap_session(&api, &store).await {
            phase.update(|p| *p = p.with_bootstrap(outcome));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !phase.get_untracked().accepts_submit() {
            return;
        }
        let request = match form.get_untracked().submit() {
            Ok(request) => request,
            Err(blocked) => {
                form.set(blocked);
                return;
            }
        };

        phase.set(LoginPhase::Submitting);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpAuthApi::default();
            let store = crate::util::storage::BrowserTokenStore;
            crate::net::auth::login(&api, &store, &request, |next| phase.set(next.clone())).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let email_error = move || form.get().email_error;
    let password_error = move || form.get().password_error;

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome Back"</h1>
                <form class="login-form" novalidate="" on:submit=on_submit>
                    <label class="form-field">
                        <span class="form-field__label">"Email Address"</span>
                        <input
                            class=move || input_class(email_error().is_some())
                            type="email"
                            name="user_email"
                            required=true
                            prop:value=move || form.get().email
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| *f = f.with_email(value));
                            }
                        />
                        <Show when=move || email_error().is_some()>
                            <p class="form-field__error">{move || email_error().unwrap_or_default()}</p>
                        </Show>
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Password"</span>
                        <input
                            class=move || input_class(password_error().is_some())
                            type="password"
                            name="user_password"
                            required=true
                            prop:value=move || form.get().password
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| *f = f.with_password(value));
                            }
                        />
                        <Show when=move || password_error().is_some()>
                            <p class="form-field__error">{move || password_error().unwrap_or_default()}</p>
                        </Show>
                    </label>
                    <Show
                        when=move || phase.get().is_loading()
                        fallback=move || {
                            view! {
                                <button
                                    class="login-button"
                                    type="submit"
                                    disabled=move || !form.get().can_submit()
                                >
                                    "Login"
                                </button>
                            }
                        }
                    >
                        <div class="spinner" role="status" aria-label="Signing in"></div>
                    </Show>
                    <Show when=move || phase.get().error().is_some()>
                        <p class="login-message login-message--error" role="alert">
                            {move || banner_error(&phase.get())}
                        </p>
                    </Show>
                </form>
                <p class="login-card__footer">
                    <A href=routes::REGISTER>"New here? Create an account"</A>
                </p>
            </div>
        </div>
    }
}
