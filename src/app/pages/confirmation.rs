//! Shown after an inquiry is recorded.

use dioxus::prelude::*;

use crate::app::use_store;
use crate::session::{Action, Tab};

#[component]
pub fn Confirmation(inquiry_id: u64) -> Element {
    let mut store = use_store();
    let (inquiry, contact) = {
        let store = store.read();
        (
            store.inquiry(inquiry_id).cloned(),
            store.catalog().contact().clone(),
        )
    };

    let summary = match inquiry {
        Some(inquiry) => rsx! {
            h1 { class: "text-5xl font-display gold-gradient uppercase mb-4", "Thank You, {inquiry.name}" }
            p { class: "text-slate-400 mb-10", "Your inquiry has been received. Our team will reach out shortly." }
            div { class: "grid sm:grid-cols-2 gap-4 text-left mb-10",
                SummaryItem { label: "Program", value: inquiry.program.clone() }
                SummaryItem { label: "Batch", value: inquiry.batch.clone() }
                SummaryItem { label: "Phone", value: inquiry.phone.clone() }
                SummaryItem { label: "Experience", value: inquiry.experience.to_string() }
            }
        },
        None => rsx! {
            h1 { class: "text-5xl font-display gold-gradient uppercase mb-4", "Thank You" }
            p { class: "text-slate-400 mb-10", "Your inquiry has been received." }
        },
    };

    rsx! {
        div { class: "max-w-2xl mx-auto px-4 py-24 text-center animate-fade-in",
            div { class: "w-20 h-20 bg-[#bf953f] rounded-full flex items-center justify-center mx-auto mb-10",
                svg { class: "w-10 h-10 text-black", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                    path { "stroke-linecap": "round", "stroke-linejoin": "round", "stroke-width": "3", d: "M5 13l4 4L19 7" }
                }
            }
            {summary}
            div { class: "border-t border-white/5 pt-8 mb-10",
                p { class: "text-[10px] uppercase tracking-widest text-slate-500 font-bold mb-2", "Questions? Call us" }
                p { class: "text-sm font-mono text-slate-300", "{contact.phone1}" }
                p { class: "text-sm font-mono text-slate-300", "{contact.phone2}" }
            }
            button {
                class: "px-10 py-4 border border-[#bf953f]/40 text-[#bf953f] hover:bg-[#bf953f] hover:text-black font-bold rounded-full transition-all uppercase tracking-widest text-xs",
                onclick: move |_| {
                    let _ = store.write().dispatch(Action::Navigate(Tab::Courses));
                },
                "Back to Academy"
            }
        }
    }
}

#[component]
fn SummaryItem(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "p-4 bg-[#111] rounded-xl border border-white/5",
            p { class: "text-[10px] uppercase tracking-widest text-slate-500 font-bold mb-1", "{label}" }
            p { class: "font-bold text-white", "{value}" }
        }
    }
}
