//! Registration page collecting the full user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! All fields are validated together on submit; only a clean form is posted
//! to the backend. Success clears the form and shows the backend's
//! confirmation.

use leptos::prelude::*;
use leptos_router::components::A;

use super::login::input_class;
use crate::routes;
use crate::state::auth::Role;
use crate::state::register::{Field, Gender, RegisterState};

#[component]
fn ProfileInput(
    state: RwSignal<RegisterState>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let error = move || state.get().errors.get(&field).copied();
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class=move || input_class(error().is_some())
                type=input_type
                prop:value=move || state.get().form.value(field).to_owned()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| *s = s.with_field(field, value));
                }
            />
            <Show when=move || error().is_some()>
                <p class="form-field__error">{move || error().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}

#[component]
fn ProfileSelect(
    state: RwSignal<RegisterState>,
    field: Field,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let error = move || state.get().errors.get(&field).copied();
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class=move || input_class(error().is_some())
                prop:value=move || state.get().form.value(field).to_owned()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| *s = s.with_field(field, value));
                }
            >
                <option value="">"Select..."</option>
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
            <Show when=move || error().is_some()>
                <p class="form-field__error">{move || error().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}

fn gender_options() -> Vec<(&'static str, &'static str)> {
    Gender::ALL.into_iter().map(|g| (g.as_str(), g.label())).collect()
}

fn role_options() -> Vec<(&'static str, &'static str)> {
    Role::ALL
        .into_iter()
        .map(|r| {
            let label = match r {
                Role::Seller => "Seller",
                Role::Seeker => "Seeker",
            };
            (r.as_str(), label)
        })
        .collect()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = RwSignal::new(RegisterState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpAuthApi::default();
            crate::net::auth::register(&api, move || state.get_untracked(), move |next| state.set(next)).await;
        });
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create an Account"</h1>
                <form class="register-form" novalidate="" on:submit=on_submit>
                    <ProfileInput state=state field=Field::Name label="Name"/>
                    <ProfileInput state=state field=Field::Email label="Email Address" input_type="email"/>
                    <ProfileInput state=state field=Field::Password label="Password" input_type="password"/>
                    <ProfileInput state=state field=Field::Mobile label="Mobile Number" input_type="tel"/>
                    <ProfileSelect state=state field=Field::Gender label="Gender" options=gender_options()/>
                    <ProfileSelect state=state field=Field::Role label="Role" options=role_options()/>
                    <Show
                        when=move || state.get().loading
                        fallback=|| view! { <button class="login-button" type="submit">"Register"</button> }
                    >
                        <div class="spinner" role="status" aria-label="Registering"></div>
                    </Show>
                    <Show when=move || state.get().message.is_some()>
                        <p class="login-message login-message--success">
                            {move || state.get().message.unwrap_or_default()}
                        </p>
                    </Show>
                    <Show when=move || state.get().error.is_some()>
                        <p class="login-message login-message--error" role="alert">
                            {move || state.get().error.unwrap_or_default()}
                        </p>
                    </Show>
                </form>
                <p class="login-card__footer">
                    "Already have an account? "
                    <A href=routes::LOGIN>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
