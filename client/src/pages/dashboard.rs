//! Dashboard landing pages for each role.
//!
//! These are shells: listing data lives in the external API and is not
//! fetched here.

use leptos::prelude::*;

use crate::components::sidebar::SellerLayout;

/// Landing page for users with the `seeker` role.
#[component]
pub fn SeekerDashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <p>"Browse listed properties and contact their sellers."</p>
        </div>
    }
}

/// Landing page for users with the `seller` role.
#[component]
pub fn SellerDashboardPage() -> impl IntoView {
    view! {
        <SellerLayout title="Dashboard">
            <p>"Manage your listings and follow up with interested buyers."</p>
        </SellerLayout>
    }
}

#[component]
pub fn SellerPropertyPage() -> impl IntoView {
    view! {
        <SellerLayout title="Property">
            <p>"Your listed properties."</p>
        </SellerLayout>
    }
}

#[component]
pub fn SellerInterestedPage() -> impl IntoView {
    view! {
        <SellerLayout title="Interested">
            <p>"Seekers who expressed interest in your properties."</p>
        </SellerLayout>
    }
}
