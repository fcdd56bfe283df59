//! Course catalog and per-student enrollment progress.
//!
//! Shared by both Student Dashboard views: the enrollment view edits the
//! enrolled set, the interaction view edits module completion.

#[cfg(test)]
#[path = "enrollment_test.rs"]
mod enrollment_test;

use std::collections::{BTreeMap, BTreeSet};

/// A course offered in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub modules: &'static [&'static str],
}

pub const COURSE_CATALOG: &[Course] = &[
    Course {
        id: "math-101",
        title: "Foundations of Algebra",
        summary: "Expressions, equations, and functions.",
        modules: &["Expressions", "Linear equations", "Inequalities", "Functions"],
    },
    Course {
        id: "sci-110",
        title: "Intro to Biology",
        summary: "Cells, genetics, and ecosystems.",
        modules: &["The cell", "Genetics", "Evolution", "Ecosystems"],
    },
    Course {
        id: "lit-120",
        title: "Reading and Writing",
        summary: "Close reading and structured essays.",
        modules: &["Close reading", "Thesis statements", "Essay structure"],
    },
    Course {
        id: "cs-100",
        title: "Computing Basics",
        summary: "How computers and programs work.",
        modules: &["Hardware", "Algorithms", "First programs", "The web", "Data"],
    },
];

/// Look up a catalog course by id.
pub fn find_course(id: &str) -> Option<&'static Course> {
    COURSE_CATALOG.iter().find(|course| course.id == id)
}

/// Enrolled courses and completed module indices per course.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnrollmentState {
    pub enrolled: BTreeSet<String>,
    pub completed: BTreeMap<String, BTreeSet<usize>>,
}

impl EnrollmentState {
    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.enrolled.contains(course_id)
    }

    /// Enroll in or withdraw from `course_id`. Returns the new enrollment flag.
    ///
    /// Unknown course ids are ignored. Withdrawing discards progress.
    pub fn toggle_enrollment(&mut self, course_id: &str) -> bool {
        if find_course(course_id).is_none() {
            return false;
        }
        if self.enrolled.remove(course_id) {
            self.completed.remove(course_id);
            false
        } else {
            self.enrolled.insert(course_id.to_owned());
            true
        }
    }

    /// Enrolled courses in catalog order.
    pub fn enrolled_courses(&self) -> Vec<&'static Course> {
        COURSE_CATALOG.iter().filter(|course| self.is_enrolled(course.id)).collect()
    }

    pub fn is_module_done(&self, course_id: &str, module: usize) -> bool {
        self.completed.get(course_id).is_some_and(|done| done.contains(&module))
    }

    /// Flip completion of one module. No-op unless enrolled and in range.
    pub fn toggle_module(&mut self, course_id: &str, module: usize) {
        let Some(course) = find_course(course_id) else {
            return;
        };
        if !self.is_enrolled(course_id) || module >= course.modules.len() {
            return;
        }
        let done = self.completed.entry(course_id.to_owned()).or_default();
        if !done.remove(&module) {
            done.insert(module);
        }
    }

    /// Whole-number completion percentage for `course_id`.
    pub fn progress_percent(&self, course_id: &str) -> u8 {
        let total = find_course(course_id).map_or(0, |course| course.modules.len());
        let done = self.completed.get(course_id).map_or(0, BTreeSet::len);
        progress_percent(done, total)
    }
}

/// `done / total` as a percentage rounded down, clamped to 0..=100.
pub fn progress_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = done.min(total) * 100 / total;
    u8::try_from(pct).unwrap_or(100)
}
