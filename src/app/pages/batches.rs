//! Batch selection for the course chosen on the previous step.

use danceverse_model::{BatchId, CourseId};
use dioxus::prelude::*;

use crate::app::components::BackButton;
use crate::app::use_store;
use crate::session::Action;

#[component]
pub fn BatchSelection(course: CourseId) -> Element {
    let mut store = use_store();
    let (title, batches) = {
        let store = store.read();
        let catalog = store.catalog();
        let title = catalog
            .course(&course)
            .map(|c| c.title.clone())
            .unwrap_or_default();
        (title, catalog.batches().to_vec())
    };

    rsx! {
        div { class: "max-w-3xl mx-auto px-4 py-16",
            BackButton { label: "Back to Syllabus" }

            div { class: "text-center mb-12",
                span { class: "text-[#bf953f] font-bold tracking-[0.5em] text-[10px] uppercase block mb-3", "Step 1 of 2" }
                h1 { class: "text-5xl font-display gold-gradient uppercase mb-2", "Choose Your Batch" }
                p { class: "text-slate-500 uppercase tracking-widest text-xs font-bold", "{title}" }
            }

            div { class: "space-y-4",
                for batch in batches {
                    button {
                        key: "{batch.id}",
                        class: "w-full p-6 bg-[#111] border border-white/5 hover:border-[#bf953f] rounded-2xl flex justify-between items-center transition-all group text-left",
                        onclick: {
                            let id: BatchId = batch.id.clone();
                            move |_| {
                                let _ = store.write().dispatch(Action::SelectBatch(id.clone()));
                            }
                        },
                        div {
                            p { class: "font-bold text-white group-hover:text-[#bf953f] transition-colors", "{batch.label}" }
                            p { class: "text-xs text-slate-500 mt-1", "{batch.schedule}" }
                        }
                        span { class: "text-[10px] font-bold text-[#bf953f] uppercase tracking-widest", "Select" }
                    }
                }
            }
        }
    }
}
