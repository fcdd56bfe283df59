//! Static "About Us" page.

use leptos::prelude::*;

#[component]
pub fn AboutUsPage() -> impl IntoView {
    view! {
        <section class="about">
            <h1>"About Us"</h1>
            <p>
                "We build free tools that help students find learning material, "
                "enroll in courses, and keep track of their progress."
            </p>
            <h2>"What we believe"</h2>
            <ul class="about__values">
                <li>"Good material should be easy to find."</li>
                <li>"Progress is easier to keep when it is visible."</li>
                <li>"Students own their learning data."</li>
            </ul>
        </section>
    }
}
