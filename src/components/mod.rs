//! Reusable UI components shared by pages and the app shell.

pub mod course_progress;
pub mod nav_bar;
