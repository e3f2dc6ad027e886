//! Back link that returns to the previous step of the current flow.

use dioxus::prelude::*;

use crate::app::use_store;
use crate::session::Action;

/// Dispatches [`Action::Back`]; the store decides where that lands.
#[component]
pub fn BackButton(label: &'static str) -> Element {
    let mut store = use_store();

    rsx! {
        button {
            class: "flex items-center gap-2 text-slate-500 hover:text-[#bf953f] font-bold uppercase tracking-widest text-[10px] mb-12 transition-all",
            onclick: move |_| {
                let _ = store.write().dispatch(Action::Back);
            },
            svg { class: "w-4 h-4", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                path { d: "M10 19l-7-7m0 0l7-7m-7 7h18" }
            }
            "{label}"
        }
    }
}
