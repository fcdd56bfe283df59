//! Fallback view for paths no route entry claims.

use leptos::prelude::*;

pub const NOT_FOUND_MESSAGE: &str = "Page not found";

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <div class="not-found">{NOT_FOUND_MESSAGE}</div> }
}
