//! Route table and path resolution for the root view.
//!
//! ARCHITECTURE
//! ============
//! The table is an ordered `const` slice of (pattern, view, access) entries.
//! Resolution is first-match over declaration order and never looks at the
//! user; the user only feeds the per-entry access guard and the session hook
//! passed to [`select_page`].
//!
//! Matching follows the browser router convention: the query string and
//! fragment are ignored, trailing slashes are dropped, and static segments
//! compare ASCII case-insensitively.


use crate::state::auth::User;

/// Page-level views reachable from the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteId {
    Home,
    Resources,
    StudentDashEnrollment,
    StudentDashboardInteract,
    AboutUs,
    NotFound,
}

impl RouteId {
    /// Navigation label, or `None` for views that are not linked.
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("Home"),
            Self::Resources => Some("Resources"),
            Self::StudentDashEnrollment => Some("Enrollment"),
            Self::StudentDashboardInteract => Some("My Courses"),
            Self::AboutUs => Some("About Us"),
            Self::NotFound => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathPattern {
    /// A single static path such as `/about`.
    Exact(&'static str),
    /// `*`: matches any path.
    Any,
}

impl PathPattern {
    pub fn matches(self, path: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(pattern) => normalize_path(pattern).eq_ignore_ascii_case(normalize_path(path)),
        }
    }
}

/// Per-entry access guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Requires a signed-in user; anonymous visitors go to `redirect`.
    SignedIn { redirect: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: PathPattern,
    pub route: RouteId,
    pub access: Access,
}

impl RouteEntry {
    pub const fn public(pattern: PathPattern, route: RouteId) -> Self {
        Self { pattern, route, access: Access::Public }
    }
}

/// Application routes in declaration order. First match wins.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry::public(PathPattern::Exact("/"), RouteId::Home),
    RouteEntry::public(PathPattern::Exact("/resources"), RouteId::Resources),
    RouteEntry::public(PathPattern::Exact("/StudentDashEnrollement"), RouteId::StudentDashEnrollment),
    RouteEntry::public(PathPattern::Exact("/StudentDashboardInteract"), RouteId::StudentDashboardInteract),
    RouteEntry::public(PathPattern::Exact("/about"), RouteId::AboutUs),
    RouteEntry::public(PathPattern::Any, RouteId::NotFound),
];

/// Verdict of an entry's access guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Render(RouteId),
    Redirect(&'static str),
}

/// Strip query, fragment and trailing slashes. The empty path becomes `/`.
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// First entry of `table` whose pattern matches `path`.
pub fn resolve_in<'t>(table: &'t [RouteEntry], path: &str) -> Option<&'t RouteEntry> {
    table.iter().find(|entry| entry.pattern.matches(path))
}

/// View bound to `path` in [`ROUTE_TABLE`].
pub fn resolve(path: &str) -> RouteId {
    resolve_in(ROUTE_TABLE, path).map_or(RouteId::NotFound, |entry| entry.route)
}

/// Apply `entry`'s access guard for `user`.
pub fn admit(entry: &RouteEntry, user: Option<&User>) -> Admission {
    match (entry.access, user) {
        (Access::SignedIn { redirect }, None) => Admission::Redirect(redirect),
        _ => Admission::Render(entry.route),
    }
}

/// One render pass: run the session hook with the current user, then pick the view.
///
/// `on_user` runs exactly once, before matching, whichever entry matches.
pub fn select_page<F>(table: &[RouteEntry], path: &str, user: Option<&User>, on_user: F) -> Admission
where
    F: FnOnce(Option<&User>),
{
    on_user(user);
    match resolve_in(table, path) {
        Some(entry) => admit(entry, user),
        None => Admission::Render(RouteId::NotFound),
    }
}

/// `(href, label)` pairs for every linked static route, in table order.
pub fn nav_links(table: &[RouteEntry]) -> Vec<(&'static str, &'static str)> {
    table
        .iter()
        .filter_map(|entry| match entry.pattern {
            PathPattern::Exact(path) => entry.route.nav_label().map(|label| (path, label)),
            PathPattern::Any => None,
        })
        .collect()
}
