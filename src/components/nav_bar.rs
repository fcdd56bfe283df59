//! Top navigation bar with route links and the current user.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::AppConfig;
use crate::routes::{ROUTE_TABLE, nav_links};
use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<AppConfig>();
    let user_name = move || auth.with(|state| state.user.as_ref().map(|user| user.name.clone()));

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">{config.app_title}</span>
            <ul class="nav-bar__links">
                {nav_links(ROUTE_TABLE)
                    .into_iter()
                    .map(|(href, label)| view! { <li><A href=href>{label}</A></li> })
                    .collect_view()}
            </ul>
            <Show
                when=move || auth.with(AuthState::is_signed_in)
                fallback=|| view! { <span class="nav-bar__user">"Guest"</span> }
            >
                <span class="nav-bar__user">{move || user_name().unwrap_or_default()}</span>
                <button class="nav-bar__sign-out" on:click=move |_| auth.update(AuthState::sign_out)>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}
