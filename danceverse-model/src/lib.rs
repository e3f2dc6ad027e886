//! Shared domain types for the Lakshya Danceverse academy app.
//!
//! These types cross the boundary between the browser client and the
//! fullstack server (coach server functions), so they live in their own
//! crate with nothing but serde behind them.
//!
//! # Modules
//! - [`course`] - Catalog records (courses, modules, lessons, batches)
//! - [`inquiry`] - Admission inquiries and experience levels
//! - [`live`] - Live studio sessions and academy analytics
//! - [`plan`] - Coach-generated learning plans
//! - [`user`] - Roles and the signed-in user record

pub mod course;
pub mod inquiry;
pub mod live;
pub mod plan;
pub mod user;

pub use course::{Batch, BatchId, Course, CourseId, Difficulty, Lesson, Module};
pub use inquiry::{Experience, Inquiry};
pub use live::{Analytics, ContactInfo, LiveSession, LiveStatus};
pub use plan::{LearningPlan, PlanWeek};
pub use user::{Role, User};
