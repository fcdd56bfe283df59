//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Redirect, Router},
    hooks::use_location,
};

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::pages::{
    about::AboutUsPage, home::HomePage, not_found::NotFoundPage, resources::ResourcesPage,
    student_dashboard::StudentDashboardPage, student_dashboard_interact::StudentDashboardInteractPage,
};
use crate::routes::{Admission, ROUTE_TABLE, RouteId, select_page};
use crate::state::{
    auth::{AuthState, User},
    enrollment::EnrollmentState,
};
use crate::util::session::SessionSync;
use crate::util::session_store::BrowserSessionStore;

/// Root application component.
///
/// Provides shared state contexts, seeds auth from the persisted session and
/// sets up client-side routing.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let store = BrowserSessionStore::new(config.session_storage_key.clone());
    let initial = AuthState::restore(&store);
    let session = SessionSync::new(store, initial.user.as_ref());

    let auth = RwSignal::new(initial);
    let enrollment = RwSignal::new(EnrollmentState::default());

    provide_context(auth);
    provide_context(enrollment);
    provide_context(config.clone());

    view! {
        <Title text=config.app_title/>

        <Router>
            <NavBar/>
            <main class="portal-main">
                <AppRoutes session/>
            </main>
        </Router>
    }
}

/// Renders the view the route table selects for the current location.
///
/// Each run reads the user once, hands it to the session hook, then matches.
/// The user is read through a memo so only an actual user change re-runs it.
#[component]
fn AppRoutes(session: SessionSync<BrowserSessionStore>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let current_user = current_user_memo(auth);
    let location = use_location();

    move || {
        let path = location.pathname.get();
        let user = current_user.get();
        let admission = select_page(ROUTE_TABLE, &path, user.as_ref(), |user| {
            session.observe(user);
        });
        render_admission(admission)
    }
}

/// The signed-in user, notifying dependents only when the value changes.
pub(crate) fn current_user_memo(auth: RwSignal<AuthState>) -> Memo<Option<User>> {
    Memo::new(move |_| auth.with(|state| state.user.clone()))
}

fn render_admission(admission: Admission) -> AnyView {
    match admission {
        Admission::Render(route) => render_route(route),
        Admission::Redirect(path) => view! { <Redirect path/> }.into_any(),
    }
}

fn render_route(route: RouteId) -> AnyView {
    match route {
        RouteId::Home => view! { <HomePage/> }.into_any(),
        RouteId::Resources => view! { <ResourcesPage/> }.into_any(),
        RouteId::StudentDashEnrollment => view! { <StudentDashboardPage/> }.into_any(),
        RouteId::StudentDashboardInteract => view! { <StudentDashboardInteractPage/> }.into_any(),
        RouteId::AboutUs => view! { <AboutUsPage/> }.into_any(),
        RouteId::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
