//! Dioxus fullstack application entry point.
//!
//! The root component owns the session [`Store`] in a signal shared through
//! context. Every page reads it and feeds it [`crate::session::Action`]s;
//! which page renders is decided by one match on the current [`View`].

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod pages;

use crate::session::{Store, View};
use components::Layout;
use pages::{
    AdmissionForm, BatchSelection, Confirmation, CourseDetail, Courses, Dashboard, Home, LiveStudio,
    Login,
};

/// Root app component
#[component]
pub fn App() -> Element {
    let store = use_context_provider(|| Signal::new(Store::academy()));

    let view = store.read().view().clone();
    let title = view.title().to_string();

    let page = match view {
        View::Home => rsx! { Home {} },
        View::Login(step) => rsx! { Login { step } },
        View::Dashboard => rsx! { Dashboard {} },
        View::Courses => rsx! { Courses {} },
        View::CourseView { course } => rsx! { CourseDetail { course } },
        View::BatchSelection { course } => rsx! { BatchSelection { course } },
        View::AdmissionForm { course, batch } => rsx! { AdmissionForm { course, batch } },
        View::Confirmation { inquiry_id } => rsx! { Confirmation { inquiry_id } },
        View::Live => rsx! { LiveStudio {} },
    };

    rsx! {
        Layout { title, {page} }
    }
}

/// The session store provided by [`App`].
pub fn use_store() -> Signal<Store> {
    use_context::<Signal<Store>>()
}
