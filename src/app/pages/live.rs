//! Live studio page.

use dioxus::prelude::*;

use crate::app::components::LiveStream;
use crate::app::use_store;

#[component]
pub fn LiveStudio() -> Element {
    let store = use_store();
    let instructor = store.read().catalog().contact().trainer.clone();

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 py-12",
            LiveStream {
                session_title: "Live Studio: Performance Mastery".to_string(),
                instructor_name: instructor,
            }
        }
    }
}
