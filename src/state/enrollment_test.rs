use super::*;

#[test]
fn catalog_ids_are_unique() {
    let ids: BTreeSet<&str> = COURSE_CATALOG.iter().map(|course| course.id).collect();
    assert_eq!(ids.len(), COURSE_CATALOG.len());
}

#[test]
fn toggle_enrollment_enrolls_then_withdraws() {
    let mut state = EnrollmentState::default();
    assert!(state.toggle_enrollment("sci-110"));
    assert!(state.is_enrolled("sci-110"));
    assert!(!state.toggle_enrollment("sci-110"));
    assert!(!state.is_enrolled("sci-110"));
}

#[test]
fn toggle_enrollment_ignores_unknown_course() {
    let mut state = EnrollmentState::default();
    assert!(!state.toggle_enrollment("art-999"));
    assert!(state.enrolled.is_empty());
}

#[test]
fn withdrawing_discards_progress() {
    let mut state = EnrollmentState::default();
    state.toggle_enrollment("math-101");
    state.toggle_module("math-101", 0);
    state.toggle_enrollment("math-101");
    assert!(!state.completed.contains_key("math-101"));
    assert!(!state.is_module_done("math-101", 0));
}

#[test]
fn enrolled_courses_follow_catalog_order() {
    let mut state = EnrollmentState::default();
    state.toggle_enrollment("cs-100");
    state.toggle_enrollment("math-101");
    let ids: Vec<&str> = state.enrolled_courses().iter().map(|course| course.id).collect();
    assert_eq!(ids, vec!["math-101", "cs-100"]);
}

#[test]
fn toggle_module_requires_enrollment() {
    let mut state = EnrollmentState::default();
    state.toggle_module("lit-120", 0);
    assert!(!state.is_module_done("lit-120", 0));
}

#[test]
fn toggle_module_ignores_out_of_range_index() {
    let mut state = EnrollmentState::default();
    state.toggle_enrollment("lit-120");
    state.toggle_module("lit-120", 3);
    assert_eq!(state.progress_percent("lit-120"), 0);
}

#[test]
fn toggle_module_flips_completion() {
    let mut state = EnrollmentState::default();
    state.toggle_enrollment("sci-110");
    state.toggle_module("sci-110", 2);
    assert!(state.is_module_done("sci-110", 2));
    state.toggle_module("sci-110", 2);
    assert!(!state.is_module_done("sci-110", 2));
}

#[test]
fn progress_tracks_completed_modules() {
    let mut state = EnrollmentState::default();
    state.toggle_enrollment("math-101");
    state.toggle_module("math-101", 0);
    assert_eq!(state.progress_percent("math-101"), 25);
    state.toggle_module("math-101", 3);
    assert_eq!(state.progress_percent("math-101"), 50);
}

#[test]
fn progress_percent_rounds_down_and_clamps() {
    assert_eq!(progress_percent(1, 3), 33);
    assert_eq!(progress_percent(3, 3), 100);
    assert_eq!(progress_percent(5, 3), 100);
    assert_eq!(progress_percent(0, 0), 0);
}
