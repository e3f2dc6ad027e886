//! Shared UI components for the Dioxus fullstack web UI.

pub mod back_button;
pub mod course_card;
pub mod layout;
pub mod live_stream;
pub mod nav;
pub mod plan_panel;
pub mod video_player;

pub use back_button::BackButton;
pub use course_card::CourseCard;
pub use layout::Layout;
pub use live_stream::LiveStream;
pub use nav::Nav;
pub use plan_panel::PlanPanel;
pub use video_player::VideoPlayer;
