//! Seller navigation sidebar and the layout that wraps seller pages with it.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;

/// One sidebar destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Fixed seller navigation, in display order.
pub const SELLER_LINKS: [NavLink; 4] = [
    NavLink { label: "Dashboard", path: routes::HOME },
    NavLink { label: "Property", path: routes::SELLER_PROPERTY },
    NavLink { label: "Interested", path: routes::SELLER_INTERESTED },
    NavLink { label: "Logout", path: routes::LOGOUT },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <h1 class="sidebar__title">"Seller"</h1>
            <ul class="sidebar__list">
                {SELLER_LINKS
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li class="sidebar__item">
                                <A href=link.path>{link.label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Sidebar on the left, page content on the right.
#[component]
pub fn SellerLayout(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="seller-layout">
            <Sidebar/>
            <main class="seller-layout__content">
                <h2 class="seller-layout__title">{title}</h2>
                {children()}
            </main>
        </div>
    }
}
