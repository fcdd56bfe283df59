//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is an opaque view bound to one entry of the route table and
//! delegates shared pieces to `components`.

pub mod about;
pub mod home;
pub mod not_found;
pub mod resources;
pub mod student_dashboard;
pub mod student_dashboard_interact;
