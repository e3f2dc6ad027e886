//! Dioxus fullstack page components, one per [`crate::session::View`].

mod admission;
mod batches;
mod confirmation;
mod course_view;
mod courses;
mod dashboard;
mod home;
mod live;
mod login;

pub use admission::AdmissionForm;
pub use batches::BatchSelection;
pub use confirmation::Confirmation;
pub use course_view::CourseDetail;
pub use courses::Courses;
pub use dashboard::Dashboard;
pub use home::Home;
pub use live::LiveStudio;
pub use login::Login;
