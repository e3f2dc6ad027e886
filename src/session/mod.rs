//! Session state machine: which view is shown, who is signed in, and the
//! admission inquiries collected so far.
//!
//! Nothing here touches the DOM. The Dioxus layer holds a [`Store`] in a
//! signal and feeds it [`Action`]s from event handlers.

pub mod nav;
pub mod store;
pub mod view;

pub use nav::{visible_items, NavItem, NAV_ITEMS};
pub use store::{Action, Session, Store, TransitionError};
pub use view::{LoginStep, Tab, View};
