//! Progress card for one enrolled course with per-module checkboxes.

use leptos::prelude::*;

use crate::state::enrollment::{Course, EnrollmentState};

#[component]
pub fn CourseProgress(course: &'static Course) -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();
    let id = course.id;
    let percent = move || enrollment.with(|state| state.progress_percent(id));

    view! {
        <article class="course-progress">
            <header class="course-progress__header">
                <h2>{course.title}</h2>
                <span class="course-progress__percent">{move || format!("{}%", percent())}</span>
            </header>
            <progress class="course-progress__bar" max="100" value=move || percent().to_string()></progress>
            <ul class="course-progress__modules">
                {course
                    .modules
                    .iter()
                    .enumerate()
                    .map(|(index, module)| {
                        view! {
                            <li>
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || enrollment.with(|state| state.is_module_done(id, index))
                                        on:change=move |_| enrollment.update(|state| state.toggle_module(id, index))
                                    />
                                    {*module}
                                </label>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}
