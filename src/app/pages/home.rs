//! Landing page: hero, contact bar and the featured courses.

use danceverse_model::CourseId;
use dioxus::prelude::*;

use crate::app::components::CourseCard;
use crate::app::use_store;
use crate::session::{Action, Tab};

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1547153760-18fc86324498?auto=format&fit=crop&w=1920&q=80";

#[component]
pub fn Home() -> Element {
    let mut store = use_store();
    let (courses, contact) = {
        let store = store.read();
        (store.catalog().courses().to_vec(), store.catalog().contact().clone())
    };

    rsx! {
        div { class: "bg-black text-white selection:bg-[#bf953f] selection:text-black",
            section { class: "relative min-h-screen flex flex-col items-center justify-center px-4 overflow-hidden pt-20",
                div { class: "absolute inset-0 z-0 opacity-40",
                    img { class: "w-full h-full object-cover grayscale", src: HERO_IMAGE, alt: "" }
                    div { class: "absolute inset-0 bg-gradient-to-t from-black via-black/80 to-transparent" }
                }

                div { class: "max-w-7xl mx-auto w-full relative z-10 text-center md:text-left flex flex-col md:flex-row items-center gap-16",
                    div { class: "flex-1 space-y-10 animate-fade-in",
                        div { class: "space-y-2",
                            span { class: "text-[#bf953f] font-bold tracking-[0.5em] text-xs uppercase block", "Est. 2025" }
                            h2 { class: "text-4xl md:text-6xl font-display uppercase tracking-tight leading-none text-slate-300", "A NEW ERA OF" }
                            h1 { class: "text-7xl md:text-[10rem] font-display uppercase tracking-tighter leading-none gold-gradient", "PERFORMANCE" }
                        }

                        div { class: "grid grid-cols-2 md:grid-cols-3 gap-8 py-8 border-y border-white/10",
                            HeroFact { label: "Scope", value: "All Levels • All Ages".to_string() }
                            HeroFact { label: "Focus", value: "Dance • Fitness".to_string() }
                            HeroFact { label: "Location", value: contact.location.clone() }
                        }

                        div { class: "flex flex-col sm:flex-row gap-6",
                            button {
                                class: "px-12 py-5 bg-[#bf953f] text-black font-bold rounded-full hover:scale-105 transition-transform shadow-2xl shadow-[#bf953f]/20 uppercase tracking-widest text-sm",
                                onclick: move |_| {
                                    let _ = store.write().dispatch(Action::Navigate(Tab::Courses));
                                },
                                "Admissions Open"
                            }
                            div { class: "flex flex-col justify-center text-left border-l border-[#bf953f]/30 pl-6",
                                p { class: "text-[10px] uppercase tracking-widest text-slate-400", "Founder" }
                                p { class: "font-bold text-white", "{contact.founder}" }
                                p { class: "text-[10px] uppercase tracking-widest text-slate-400 mt-2", "Training by" }
                                p { class: "font-bold text-white", "{contact.trainer}" }
                            }
                        }
                    }

                    div { class: "flex-1 flex justify-center relative animate-fade-in",
                        div { class: "relative w-80 h-80 md:w-[500px] md:h-[500px]",
                            div { class: "absolute inset-0 border-2 border-[#bf953f]/20 rounded-full animate-spin-slow" }
                            div { class: "absolute inset-4 border border-[#bf953f]/40 rounded-full" }
                            div { class: "absolute inset-0 flex items-center justify-center",
                                div { class: "text-center",
                                    h3 { class: "font-logo text-4xl md:text-6xl gold-gradient font-bold tracking-widest uppercase", "LAKSHYA" }
                                    p { class: "font-logo text-xl md:text-2xl text-slate-400 tracking-[0.2em] font-bold", "DANCEVERSE" }
                                    p { class: "text-[10px] uppercase tracking-[0.5em] text-[#bf953f] mt-4 font-bold italic", "Aim. Move. Become." }
                                }
                            }
                        }
                    }
                }

                // Contact bar
                div { class: "max-w-7xl mx-auto w-full mt-24 flex flex-wrap justify-center md:justify-between gap-8 py-8 border-t border-white/5 relative z-10",
                    div { class: "flex items-center gap-4",
                        div { class: "w-10 h-10 rounded-full bg-white/5 flex items-center justify-center",
                            svg { class: "w-5 h-5", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                                path { d: "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z" }
                            }
                        }
                        div {
                            p { class: "text-[10px] uppercase tracking-widest text-slate-500 font-bold", "Enquiries" }
                            p { class: "text-sm font-mono text-slate-300", "{contact.phone1}" }
                            p { class: "text-sm font-mono text-slate-300", "{contact.phone2}" }
                        }
                    }
                }
            }

            section { class: "max-w-7xl mx-auto px-4 py-32",
                div { class: "text-center mb-20",
                    h2 { class: "text-5xl font-display gold-gradient uppercase mb-4", "Elite Training Paths" }
                    p { class: "text-slate-500 max-w-xl mx-auto uppercase tracking-widest text-xs font-bold",
                        "Standardized curriculum for the next generation of performers."
                    }
                }
                div { class: "grid md:grid-cols-3 gap-10",
                    for course in courses {
                        CourseCard {
                            key: "{course.id}",
                            course: course.clone(),
                            on_view: move |id: CourseId| {
                                let _ = store.write().dispatch(Action::OpenCourse(id));
                            },
                            on_enroll: move |id: CourseId| {
                                let _ = store.write().dispatch(Action::BeginAdmission(id));
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HeroFact(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            p { class: "text-[10px] uppercase tracking-widest text-slate-500 mb-1", "{label}" }
            p { class: "text-lg font-bold", "{value}" }
        }
    }
}
