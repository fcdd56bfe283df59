//! Student Dashboard, interaction view: work through enrolled courses.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::course_progress::CourseProgress;
use crate::state::enrollment::EnrollmentState;

#[component]
pub fn StudentDashboardInteractPage() -> impl IntoView {
    let enrollment = expect_context::<RwSignal<EnrollmentState>>();
    let courses = move || enrollment.with(EnrollmentState::enrolled_courses);
    let has_courses = move || enrollment.with(|state| !state.enrolled.is_empty());

    view! {
        <section class="dashboard dashboard--interact">
            <h1>"My Courses"</h1>
            <Show
                when=has_courses
                fallback=|| {
                    view! {
                        <p class="dashboard__empty">
                            "You are not enrolled in any courses yet. "
                            <A href="/StudentDashEnrollement">"Browse the catalog"</A>
                        </p>
                    }
                }
            >
                <div class="course-progress-list">
                    {move || {
                        courses()
                            .into_iter()
                            .map(|course| view! { <CourseProgress course/> })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
