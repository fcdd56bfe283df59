//! Student Dashboard, enrollment view: browse the catalog and enroll.

#[cfg(test)]
#[path = "student_dashboard_test.rs"]
mod student_dashboard_test;

use leptos::prelude::*;

use crate::state::auth::{AuthState, User};
use crate::state::enrollment::{COURSE_CATALOG, EnrollmentState};

/// Greeting line above the catalog.
pub fn greeting_for(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}. Pick the courses you want to take.", user.name),
        None => "Browsing as a guest. Enrollment is kept in this tab only.".to_owned(),
    }
}

/// Summary line for the enrolled-course counter.
pub fn enrolled_summary(count: usize) -> String {
    match count {
        0 => "Not enrolled in any courses".to_owned(),
        1 => "Enrolled in 1 course".to_owned(),
        n => format!("Enrolled in {n} courses"),
    }
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();

    let greeting = move || auth.with(|state| greeting_for(state.user.as_ref()));
    let summary = move || enrollment.with(|state| enrolled_summary(state.enrolled.len()));

    view! {
        <section class="dashboard dashboard--enrollment">
            <h1>"Course Enrollment"</h1>
            <p class="dashboard__greeting">{greeting}</p>
            <p class="dashboard__summary">{summary}</p>
            <ul class="course-list">
                {COURSE_CATALOG
                    .iter()
                    .map(|course| {
                        let id = course.id;
                        let enrolled = move || enrollment.with(|state| state.is_enrolled(id));
                        view! {
                            <li class="course-card" class=("course-card--enrolled", enrolled)>
                                <h2>{course.title}</h2>
                                <p>{course.summary}</p>
                                <p class="course-card__meta">{format!("{} modules", course.modules.len())}</p>
                                <button
                                    class="course-card__action"
                                    on:click=move |_| {
                                        enrollment.update(|state| {
                                            state.toggle_enrollment(id);
                                        });
                                    }
                                >
                                    {move || if enrolled() { "Withdraw" } else { "Enroll" }}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
