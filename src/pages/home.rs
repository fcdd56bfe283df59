//! Landing page with entry points into the rest of the portal.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{ROUTE_TABLE, RouteId, nav_links};
use crate::state::auth::AuthState;

/// Card links shown on the landing page: every linked route except Home itself.
pub fn home_links() -> Vec<(&'static str, &'static str)> {
    let home_label = RouteId::Home.nav_label();
    nav_links(ROUTE_TABLE)
        .into_iter()
        .filter(|(_, label)| Some(*label) != home_label)
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let headline = move || {
        auth.with(|state| match &state.user {
            Some(user) => format!("Welcome back, {}", user.name),
            None => "Welcome to the Student Portal".to_owned(),
        })
    };
    let links = home_links();

    view! {
        <section class="home">
            <h1>{headline}</h1>
            <p class="home__lead">"Find resources, manage your enrollment, and follow your progress."</p>
            <div class="home__cards">
                {links
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <A href={href} {..} class="home__card">
                                {label}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
