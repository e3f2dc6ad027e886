//! Views the app can be in.

use danceverse_model::{BatchId, CourseId};
use std::fmt;

/// Step of the two-step login portal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LoginStep {
    /// "Join as Student"
    #[default]
    Main,
    /// Instructor and admin entry
    Management,
}

/// Navigation tabs reachable from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Home,
    Courses,
    Dashboard,
    Live,
    Login,
}

impl Tab {
    /// Stable id used for nav highlighting and element ids
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Courses => "courses",
            Self::Dashboard => "dashboard",
            Self::Live => "live",
            Self::Login => "login",
        }
    }
}

/// The current view.
///
/// Views that depend on a selection carry the resolved ids, so a
/// half-selected state (batch without course) cannot be constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Login(LoginStep),
    /// Branches by role when rendered
    Dashboard,
    Courses,
    CourseView {
        course: CourseId,
    },
    BatchSelection {
        course: CourseId,
    },
    AdmissionForm {
        course: CourseId,
        batch: BatchId,
    },
    Confirmation {
        inquiry_id: u64,
    },
    Live,
}

impl View {
    /// The view a navigation tab lands on
    pub fn for_tab(tab: Tab) -> Self {
        match tab {
            Tab::Home => Self::Home,
            Tab::Courses => Self::Courses,
            Tab::Dashboard => Self::Dashboard,
            Tab::Live => Self::Live,
            Tab::Login => Self::Login(LoginStep::Main),
        }
    }

    /// Which nav tab to highlight while this view is shown
    pub fn tab(&self) -> Tab {
        match self {
            Self::Home => Tab::Home,
            Self::Login(_) => Tab::Login,
            Self::Dashboard => Tab::Dashboard,
            Self::Courses
            | Self::CourseView { .. }
            | Self::BatchSelection { .. }
            | Self::AdmissionForm { .. }
            | Self::Confirmation { .. } => Tab::Courses,
            Self::Live => Tab::Live,
        }
    }

    /// Hardcoded single-level "back" target
    pub fn back_target(&self) -> View {
        match self {
            Self::CourseView { .. } | Self::BatchSelection { .. } => Self::Courses,
            Self::AdmissionForm { course, .. } => Self::BatchSelection {
                course: course.clone(),
            },
            Self::Login(LoginStep::Management) => Self::Login(LoginStep::Main),
            Self::Home
            | Self::Login(LoginStep::Main)
            | Self::Dashboard
            | Self::Courses
            | Self::Confirmation { .. }
            | Self::Live => Self::Home,
        }
    }

    /// Course the view is about, if any
    pub fn course(&self) -> Option<&CourseId> {
        match self {
            Self::CourseView { course }
            | Self::BatchSelection { course }
            | Self::AdmissionForm { course, .. } => Some(course),
            _ => None,
        }
    }

    pub fn batch(&self) -> Option<&BatchId> {
        match self {
            Self::AdmissionForm { batch, .. } => Some(batch),
            _ => None,
        }
    }

    /// Page title (browser tab)
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login(_) => "Entry Portal",
            Self::Dashboard => "Dashboard",
            Self::Courses => "The Syllabus",
            Self::CourseView { .. } => "Course",
            Self::BatchSelection { .. } => "Choose a Batch",
            Self::AdmissionForm { .. } => "Admission Form",
            Self::Confirmation { .. } => "Inquiry Received",
            Self::Live => "Live Studio",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Login(LoginStep::Main) => write!(f, "login"),
            Self::Login(LoginStep::Management) => write!(f, "login/management"),
            Self::Dashboard => write!(f, "dashboard"),
            Self::Courses => write!(f, "courses"),
            Self::CourseView { course } => write!(f, "course-view/{course}"),
            Self::BatchSelection { course } => write!(f, "batch-selection/{course}"),
            Self::AdmissionForm { course, batch } => write!(f, "admission-form/{course}/{batch}"),
            Self::Confirmation { inquiry_id } => write!(f, "confirmation/{inquiry_id}"),
            Self::Live => write!(f, "live"),
        }
    }
}
