//! Two-step entry portal: students on the main step, staff on the management step.

use danceverse_model::Role;
use dioxus::prelude::*;

use crate::app::use_store;
use crate::session::{Action, LoginStep};

#[component]
pub fn Login(step: LoginStep) -> Element {
    let mut store = use_store();

    let content = match step {
        LoginStep::Main => rsx! {
            h2 { class: "text-4xl font-bold mb-4 gold-gradient font-logo uppercase tracking-widest", "Entry Portal" }
            p { class: "text-slate-500 mb-12 tracking-wide", "Welcome to the future of dance performance." }
            div { class: "space-y-4",
                button {
                    class: "w-full py-5 bg-[#bf953f] hover:bg-[#fcf6ba] text-black font-bold rounded-2xl transition-all uppercase tracking-widest",
                    onclick: move |_| {
                        let _ = store.write().dispatch(Action::Login(Role::Student));
                    },
                    "Join as Student"
                }
                button {
                    class: "w-full mt-6 py-4 text-xs font-bold text-slate-500 hover:text-[#bf953f] transition-all uppercase tracking-[0.3em]",
                    onclick: move |_| {
                        let _ = store.write().dispatch(Action::ShowManagementLogin);
                    },
                    "Administrative Terminal"
                }
            }
        },
        LoginStep::Management => rsx! {
            button {
                class: "absolute top-8 left-8 text-slate-500 hover:text-white transition-all",
                title: "Back",
                onclick: move |_| {
                    let _ = store.write().dispatch(Action::ShowMainLogin);
                },
                svg { class: "w-6 h-6", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                    path { "stroke-linecap": "round", "stroke-linejoin": "round", "stroke-width": "2", d: "M10 19l-7-7m0 0l7-7m-7 7h18" }
                }
            }
            h2 { class: "text-3xl font-bold mb-4 text-white font-logo uppercase tracking-widest", "Management" }
            p { class: "text-slate-500 mb-12", "Authorized Personnel Only" }
            div { class: "space-y-4",
                button {
                    class: "w-full py-5 bg-[#111] border border-[#bf953f]/30 hover:border-[#bf953f] text-[#bf953f] font-bold rounded-2xl transition-all uppercase tracking-widest",
                    onclick: move |_| {
                        let _ = store.write().dispatch(Action::Login(Role::Trainer));
                    },
                    "Instructor Entry"
                }
                button {
                    class: "w-full py-5 bg-[#111] border border-red-900/30 hover:border-red-600 text-red-600 font-bold rounded-2xl transition-all uppercase tracking-widest",
                    onclick: move |_| {
                        let _ = store.write().dispatch(Action::Login(Role::Admin));
                    },
                    "System Admin"
                }
            }
        },
    };

    rsx! {
        div { class: "min-h-[90vh] flex items-center justify-center p-4 bg-black relative overflow-hidden",
            div { class: "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[600px] bg-[#bf953f]/5 rounded-full blur-[120px] pointer-events-none" }
            div { class: "w-full max-w-xl bg-[#0a0a0a] p-12 rounded-[3rem] shadow-2xl border border-white/5 text-center relative z-10",
                div { class: "w-24 h-24 bg-[#bf953f] rounded-full flex items-center justify-center mx-auto mb-10 shadow-2xl shadow-[#bf953f]/20",
                    span { class: "text-black font-bold text-3xl font-logo", "LDV" }
                }
                {content}
            }
        }
    }
}
