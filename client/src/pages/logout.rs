//! Logout route: forget the stored session and return to the login screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth;
use crate::routes;
use crate::util::storage::BrowserTokenStore;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        auth::logout(&BrowserTokenStore);
        navigate(routes::LOGIN, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <p class="logout-page">"Signing out..."</p> }
}
