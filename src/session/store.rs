//! Reducer-style session store.
//!
//! Every user input becomes an [`Action`]; [`Store::dispatch`] either applies
//! it completely or rejects it with a [`TransitionError`] and leaves the store
//! untouched.

use std::sync::Arc;

use chrono::Utc;
use danceverse_model::{BatchId, Course, CourseId, Inquiry, Role, User};
use rand::distributions::Alphanumeric;
use rand::Rng;
use thiserror::Error;
use tracing::{info, warn};

use super::nav;
use super::view::{LoginStep, Tab, View};
use crate::admission::{FormError, InquiryForm};
use crate::catalog::Catalog;

/// Shared e-mail for every stub login
const STUB_EMAIL: &str = "user@lakshyadanceverse.com";

/// A user input that may change the session
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Tab),
    ShowManagementLogin,
    ShowMainLogin,
    Login(Role),
    Logout,
    OpenCourse(CourseId),
    BeginAdmission(CourseId),
    SelectBatch(BatchId),
    SubmitInquiry(InquiryForm),
    Back,
}

/// Why an action was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{tab:?} is not available to {}", audience(.role))]
    NotPermitted { tab: Tab, role: Option<Role> },
    #[error("unknown course: {0}")]
    UnknownCourse(CourseId),
    #[error("unknown batch: {0}")]
    UnknownBatch(BatchId),
    #[error("choose a course before choosing a batch")]
    NoCourseSelected,
    #[error("no admission form is open")]
    NoAdmissionForm,
    #[error(transparent)]
    InvalidForm(#[from] FormError),
}

fn audience(role: &Option<Role>) -> String {
    match role {
        Some(role) => format!("{role} accounts"),
        None => "anonymous visitors".to_string(),
    }
}

/// Per-visit session: current view and (stub) signed-in user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub view: View,
    pub user: Option<User>,
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn login_step(&self) -> Option<LoginStep> {
        match self.view {
            View::Login(step) => Some(step),
            _ => None,
        }
    }

    pub fn selected_course_id(&self) -> Option<&CourseId> {
        self.view.course()
    }

    pub fn selected_batch_id(&self) -> Option<&BatchId> {
        self.view.batch()
    }
}

/// State container for the whole app.
#[derive(Debug, Clone)]
pub struct Store {
    catalog: Arc<Catalog>,
    session: Session,
    /// Submitted inquiries, oldest first. Never edited or removed.
    inquiries: Vec<Inquiry>,
}

impl Store {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            session: Session::default(),
            inquiries: Vec::new(),
        }
    }

    /// Store over the academy's launch catalog
    pub fn academy() -> Self {
        Self::new(Arc::new(Catalog::academy()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> &View {
        &self.session.view
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    pub fn inquiries(&self) -> &[Inquiry] {
        &self.inquiries
    }

    pub fn inquiry(&self, id: u64) -> Option<&Inquiry> {
        self.inquiries.iter().find(|i| i.id == id)
    }

    /// Course currently selected by the view, resolved against the catalog
    pub fn selected_course(&self) -> Option<&Course> {
        self.session
            .selected_course_id()
            .and_then(|id| self.catalog.course(id))
    }

    /// Apply an action, or reject it and leave the store unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<(), TransitionError> {
        let from = self.session.view.clone();
        match self.apply(action) {
            Ok(()) => {
                info!(from = %from, to = %self.session.view, "View transition");
                Ok(())
            }
            Err(e) => {
                warn!(view = %from, error = %e, "Transition rejected");
                Err(e)
            }
        }
    }

    fn apply(&mut self, action: Action) -> Result<(), TransitionError> {
        match action {
            Action::Navigate(tab) => {
                let role = self.session.role();
                if !nav::allows(role, tab) {
                    return Err(TransitionError::NotPermitted { tab, role });
                }
                self.session.view = View::for_tab(tab);
            }
            Action::ShowManagementLogin => {
                self.session.view = View::Login(LoginStep::Management);
            }
            Action::ShowMainLogin => {
                self.session.view = View::Login(LoginStep::Main);
            }
            Action::Login(role) => {
                let user = stub_user(role);
                info!(user_id = %user.id, %role, "Signed in");
                self.session.user = Some(user);
                self.session.view = View::Dashboard;
            }
            Action::Logout => {
                if let Some(user) = &self.session.user {
                    info!(user_id = %user.id, "Signed out");
                }
                self.session = Session::default();
            }
            Action::OpenCourse(course) => {
                self.require_course(&course)?;
                self.session.view = View::CourseView { course };
            }
            Action::BeginAdmission(course) => {
                self.require_course(&course)?;
                self.session.view = View::BatchSelection { course };
            }
            Action::SelectBatch(batch) => {
                let View::BatchSelection { course } = &self.session.view else {
                    return Err(TransitionError::NoCourseSelected);
                };
                if self.catalog.batch(&batch).is_none() {
                    return Err(TransitionError::UnknownBatch(batch));
                }
                self.session.view = View::AdmissionForm {
                    course: course.clone(),
                    batch,
                };
            }
            Action::SubmitInquiry(form) => {
                let View::AdmissionForm { course, batch } = &self.session.view else {
                    return Err(TransitionError::NoAdmissionForm);
                };
                let course = self
                    .catalog
                    .course(course)
                    .ok_or_else(|| TransitionError::UnknownCourse(course.clone()))?;
                let batch = self
                    .catalog
                    .batch(batch)
                    .ok_or_else(|| TransitionError::UnknownBatch(batch.clone()))?;

                let id = self.inquiries.len() as u64 + 1;
                let inquiry = form.into_inquiry(id, course, batch, Utc::now())?;
                info!(
                    inquiry_id = id,
                    program = %inquiry.program,
                    batch = %inquiry.batch,
                    "Admission inquiry recorded"
                );
                self.inquiries.push(inquiry);
                self.session.view = View::Confirmation { inquiry_id: id };
            }
            Action::Back => {
                self.session.view = self.session.view.back_target();
            }
        }
        Ok(())
    }

    fn require_course(&self, id: &CourseId) -> Result<(), TransitionError> {
        match self.catalog.course(id) {
            Some(_) => Ok(()),
            None => Err(TransitionError::UnknownCourse(id.clone())),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::academy()
    }
}

/// Session user created by the login stub
fn stub_user(role: Role) -> User {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();

    User {
        id: format!("u_session_{suffix}"),
        name: role.display_name().to_string(),
        email: STUB_EMAIL.to_string(),
        role,
        is_approved: true,
        joined_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use danceverse_model::Experience;

    const ALL_ROLES: [Option<Role>; 4] = [
        None,
        Some(Role::Student),
        Some(Role::Trainer),
        Some(Role::Admin),
    ];

    fn store_as(role: Option<Role>) -> Store {
        let mut store = Store::academy();
        if let Some(role) = role {
            store.dispatch(Action::Login(role)).unwrap();
        }
        store
    }

    fn asha() -> InquiryForm {
        InquiryForm {
            name: "Asha".to_string(),
            phone: "+911234567890".to_string(),
            email: String::new(),
            experience: Experience::Beginner,
        }
    }

    /// Walk the admission pipeline up to the open form
    fn at_form(course: &str, batch: &str) -> Store {
        let mut store = Store::academy();
        store
            .dispatch(Action::BeginAdmission(CourseId::from(course)))
            .unwrap();
        store
            .dispatch(Action::SelectBatch(BatchId::from(batch)))
            .unwrap();
        store
    }

    #[test]
    fn test_initial_state_is_home_and_anonymous() {
        let store = Store::academy();
        assert_eq!(store.view(), &View::Home);
        assert_eq!(store.role(), None);
        assert!(store.inquiries().is_empty());
    }

    #[test]
    fn test_login_creates_stub_user_and_opens_dashboard() {
        let store = store_as(Some(Role::Trainer));
        let user = store.session().user.as_ref().unwrap();

        assert_eq!(store.view(), &View::Dashboard);
        assert_eq!(user.role, Role::Trainer);
        assert_eq!(user.name, "Alex K");
        assert_eq!(user.email, STUB_EMAIL);
        assert!(user.is_approved);
        let suffix = user.id.strip_prefix("u_session_").unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_logout_resets_from_any_state() {
        let actions = [
            Action::Navigate(Tab::Live),
            Action::Navigate(Tab::Dashboard),
            Action::OpenCourse(CourseId::from("c2")),
            Action::BeginAdmission(CourseId::from("c3")),
            Action::ShowManagementLogin,
        ];

        for role in [Some(Role::Student), Some(Role::Trainer), Some(Role::Admin)] {
            for action in &actions {
                let mut store = store_as(role);
                let _ = store.dispatch(action.clone());
                store.dispatch(Action::Logout).unwrap();

                assert_eq!(store.role(), None);
                assert_eq!(store.view(), &View::Home);
                assert_eq!(store.session().selected_course_id(), None);
                assert_eq!(store.session().login_step(), None);
            }
        }
    }

    #[test]
    fn test_logout_keeps_inquiries() {
        let mut store = at_form("c1", "b-morning");
        store.dispatch(Action::SubmitInquiry(asha())).unwrap();
        store.dispatch(Action::Logout).unwrap();
        assert_eq!(store.inquiries().len(), 1);
    }

    #[test]
    fn test_navigation_is_gated_by_role() {
        for role in ALL_ROLES {
            for tab in [Tab::Home, Tab::Courses, Tab::Dashboard, Tab::Live, Tab::Login] {
                let mut store = store_as(role);
                let before = store.view().clone();
                let result = store.dispatch(Action::Navigate(tab));

                if nav::allows(role, tab) {
                    assert_eq!(result, Ok(()));
                    assert_eq!(store.view(), &View::for_tab(tab));
                } else {
                    assert_eq!(result, Err(TransitionError::NotPermitted { tab, role }));
                    assert_eq!(store.view(), &before);
                }
            }
        }
    }

    #[test]
    fn test_asha_inquiry_example() {
        let mut store = at_form("c1", "b-morning");
        store.dispatch(Action::SubmitInquiry(asha())).unwrap();

        assert_eq!(store.inquiries().len(), 1);
        let inquiry = &store.inquiries()[0];
        assert_eq!(inquiry.id, 1);
        assert_eq!(inquiry.name, "Asha");
        assert_eq!(inquiry.phone, "+911234567890");
        assert_eq!(inquiry.program, "Hip Hop Fundamentals");
        assert_eq!(inquiry.batch, "Morning (7–8 AM)");
        assert_eq!(store.view(), &View::Confirmation { inquiry_id: 1 });
        assert_eq!(store.inquiry(1), Some(inquiry));
    }

    #[test]
    fn test_confirmation_returns_to_courses() {
        let mut store = at_form("c1", "b-morning");
        store.dispatch(Action::SubmitInquiry(asha())).unwrap();

        store.dispatch(Action::Navigate(Tab::Courses)).unwrap();
        assert_eq!(store.view(), &View::Courses);
        assert_eq!(store.inquiries().len(), 1);
    }

    #[test]
    fn test_each_submission_appends_exactly_one() {
        let mut store = Store::academy();
        for (n, (course, batch)) in [("c1", "b-evening"), ("c2", "b-weekend"), ("c3", "b-morning")]
            .into_iter()
            .enumerate()
        {
            store
                .dispatch(Action::BeginAdmission(CourseId::from(course)))
                .unwrap();
            store
                .dispatch(Action::SelectBatch(BatchId::from(batch)))
                .unwrap();
            store.dispatch(Action::SubmitInquiry(asha())).unwrap();

            assert_eq!(store.inquiries().len(), n + 1);
            assert_eq!(
                store.view(),
                &View::Confirmation {
                    inquiry_id: n as u64 + 1
                }
            );
        }
        let ids: Vec<_> = store.inquiries().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_selection_carries_into_form() {
        for course in ["c1", "c2", "c3"] {
            for batch in ["b-morning", "b-evening", "b-weekend"] {
                let store = at_form(course, batch);
                assert_eq!(
                    store.view(),
                    &View::AdmissionForm {
                        course: CourseId::from(course),
                        batch: BatchId::from(batch),
                    }
                );
                assert_eq!(
                    store.session().selected_course_id(),
                    Some(&CourseId::from(course))
                );
                assert_eq!(
                    store.session().selected_batch_id(),
                    Some(&BatchId::from(batch))
                );
            }
        }
    }

    #[test]
    fn test_invalid_form_leaves_state_unchanged() {
        let mut store = at_form("c1", "b-morning");
        let before = store.view().clone();

        let mut form = asha();
        form.phone = "  ".to_string();
        let result = store.dispatch(Action::SubmitInquiry(form));

        assert_eq!(
            result,
            Err(TransitionError::InvalidForm(FormError::MissingPhone))
        );
        assert!(store.inquiries().is_empty());
        assert_eq!(store.view(), &before);
    }

    #[test]
    fn test_unknown_ids_fail_fast() {
        let mut store = Store::academy();
        assert_eq!(
            store.dispatch(Action::OpenCourse(CourseId::from("c404"))),
            Err(TransitionError::UnknownCourse(CourseId::from("c404")))
        );
        assert_eq!(
            store.dispatch(Action::BeginAdmission(CourseId::from("c404"))),
            Err(TransitionError::UnknownCourse(CourseId::from("c404")))
        );
        assert_eq!(store.view(), &View::Home);

        store
            .dispatch(Action::BeginAdmission(CourseId::from("c1")))
            .unwrap();
        assert_eq!(
            store.dispatch(Action::SelectBatch(BatchId::from("b-midnight"))),
            Err(TransitionError::UnknownBatch(BatchId::from("b-midnight")))
        );
        assert_eq!(
            store.view(),
            &View::BatchSelection {
                course: CourseId::from("c1")
            }
        );
    }

    #[test]
    fn test_out_of_order_steps_rejected() {
        let mut store = Store::academy();
        assert_eq!(
            store.dispatch(Action::SelectBatch(BatchId::from("b-morning"))),
            Err(TransitionError::NoCourseSelected)
        );
        assert_eq!(
            store.dispatch(Action::SubmitInquiry(asha())),
            Err(TransitionError::NoAdmissionForm)
        );
        assert!(store.inquiries().is_empty());
    }

    #[test]
    fn test_login_steps_and_back() {
        let mut store = Store::academy();
        store.dispatch(Action::Navigate(Tab::Login)).unwrap();
        assert_eq!(store.session().login_step(), Some(LoginStep::Main));

        store.dispatch(Action::ShowManagementLogin).unwrap();
        assert_eq!(store.session().login_step(), Some(LoginStep::Management));

        store.dispatch(Action::Back).unwrap();
        assert_eq!(store.session().login_step(), Some(LoginStep::Main));

        store.dispatch(Action::ShowManagementLogin).unwrap();
        store.dispatch(Action::ShowMainLogin).unwrap();
        assert_eq!(store.session().login_step(), Some(LoginStep::Main));
    }

    #[test]
    fn test_back_walks_admission_flow_in_reverse() {
        let mut store = at_form("c2", "b-weekend");
        store.dispatch(Action::Back).unwrap();
        assert_eq!(
            store.view(),
            &View::BatchSelection {
                course: CourseId::from("c2")
            }
        );
        store.dispatch(Action::Back).unwrap();
        assert_eq!(store.view(), &View::Courses);
    }

    #[test]
    fn test_selected_course_resolves_against_catalog() {
        let mut store = Store::academy();
        assert!(store.selected_course().is_none());
        store
            .dispatch(Action::OpenCourse(CourseId::from("c3")))
            .unwrap();
        assert_eq!(
            store.selected_course().map(|c| c.title.as_str()),
            Some("Fitness & Flow")
        );
    }

    #[test]
    fn test_not_permitted_message() {
        let err = TransitionError::NotPermitted {
            tab: Tab::Live,
            role: Some(Role::Admin),
        };
        assert_eq!(err.to_string(), "Live is not available to admin accounts");

        let err = TransitionError::NotPermitted {
            tab: Tab::Dashboard,
            role: None,
        };
        assert_eq!(
            err.to_string(),
            "Dashboard is not available to anonymous visitors"
        );
    }
}
