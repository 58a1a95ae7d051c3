//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::{SeekerDashboardPage, SellerDashboardPage, SellerInterestedPage, SellerPropertyPage},
    login::LoginPage,
    logout::LogoutPage,
    register::RegisterPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// `/` lands on the login screen, whose session check forwards users that
/// are already signed in to their dashboard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/estate.css"/>
        <Title text="Estate"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("logout") view=LogoutPage/>
                <Route path=StaticSegment("dashboard") view=SeekerDashboardPage/>
                <Route path=StaticSegment("dashboardSeller") view=SellerDashboardPage/>
                <Route path=StaticSegment("Property") view=SellerPropertyPage/>
                <Route path=StaticSegment("interestedSeller") view=SellerInterestedPage/>
            </Routes>
        </Router>
    }
}
