use super::*;

#[test]
fn home_links_skip_home_and_keep_table_order() {
    assert_eq!(
        home_links(),
        vec![
            ("/resources", "Resources"),
            ("/StudentDashEnrollement", "Enrollment"),
            ("/StudentDashboardInteract", "My Courses"),
            ("/about", "About Us"),
        ]
    );
}

#[test]
fn home_links_all_resolve_to_their_routes() {
    for (href, _) in home_links() {
        assert_ne!(crate::routes::resolve(href), RouteId::NotFound, "{href}");
        assert_ne!(crate::routes::resolve(href), RouteId::Home, "{href}");
    }
}
