//! Course detail: lesson player, description and module breakdown.

use danceverse_model::{CourseId, Lesson};
use dioxus::prelude::*;

use crate::app::components::{BackButton, VideoPlayer};
use crate::app::use_store;
use crate::catalog::DEMO_STREAM_URL;
use crate::media::video;
use crate::session::Action;

const PLAYER_ID: &str = "lesson-player";

#[component]
pub fn CourseDetail(course: CourseId) -> Element {
    let mut store = use_store();
    let mut playing = use_signal(|| None::<Lesson>);
    let mut position = use_signal(|| 0.0_f64);

    let Some(course) = store.read().catalog().course(&course).cloned() else {
        return rsx! {
            div { class: "max-w-7xl mx-auto px-4 py-12",
                BackButton { label: "Back to Syllabus" }
                p { class: "text-slate-500", "This course is no longer available." }
            }
        };
    };

    let lesson = playing().or_else(|| course.first_lesson().cloned());
    let (player_key, src) = match &lesson {
        Some(l) => (l.id.clone(), l.video_url.clone()),
        None => ("preview".to_string(), DEMO_STREAM_URL.to_string()),
    };
    let course_id = course.id.clone();
    let watched = video::format_position(position());

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 py-12",
            BackButton { label: "Back to Syllabus" }

            div { class: "grid lg:grid-cols-3 gap-12",
                div { class: "lg:col-span-2 space-y-8",
                    VideoPlayer {
                        key: "{player_key}",
                        id: PLAYER_ID.to_string(),
                        src,
                        poster: course.thumbnail.clone(),
                        on_progress: move |secs: f64| position.set(secs),
                    }
                    if let Some(lesson) = &lesson {
                        p { class: "text-[10px] uppercase font-bold text-[#bf953f] tracking-widest",
                            "Now playing: {lesson.title} · {watched}"
                        }
                    }
                    h1 { class: "text-5xl font-display text-white uppercase tracking-tight", "{course.title}" }
                    p { class: "text-lg text-slate-400 leading-relaxed font-light", "{course.description}" }
                    button {
                        class: "px-10 py-4 bg-[#bf953f] text-black font-bold rounded-full hover:bg-[#fcf6ba] transition-all uppercase tracking-widest text-xs",
                        onclick: move |_| {
                            let _ = store.write().dispatch(Action::BeginAdmission(course_id.clone()));
                        },
                        "Apply for Admission"
                    }
                }

                div { class: "bg-[#111] p-8 rounded-3xl border border-white/5 h-fit sticky top-24 shadow-2xl",
                    h3 { class: "text-xl font-bold mb-6 gold-gradient uppercase tracking-widest border-b border-[#bf953f]/20 pb-4",
                        "Content Breakdown"
                    }
                    div { class: "space-y-4",
                        for module in course.modules.clone() {
                            div { key: "{module.id}", class: "space-y-2",
                                p { class: "text-[10px] uppercase font-bold text-slate-500 tracking-widest", "{module.title}" }
                                for lesson in module.lessons {
                                    LessonRow {
                                        key: "{lesson.id}",
                                        lesson: lesson.clone(),
                                        on_select: move |l: Lesson| {
                                            position.set(0.0);
                                            playing.set(Some(l));
                                        },
                                    }
                                }
                            }
                        }
                        if course.modules.is_empty() {
                            p { class: "text-slate-600 text-sm italic", "Lessons coming soon..." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LessonRow(lesson: Lesson, on_select: EventHandler<Lesson>) -> Element {
    let minutes = lesson.duration_minutes();
    let selected = lesson.clone();

    rsx! {
        div {
            class: "p-3 bg-black/40 border border-white/5 rounded-xl text-xs font-bold text-slate-300 flex justify-between items-center group cursor-pointer hover:border-[#bf953f]/50 transition-all",
            onclick: move |_| on_select.call(selected.clone()),
            span { class: "group-hover:text-white transition-colors", "{lesson.title}" }
            span { class: "text-[10px] text-slate-600", "{minutes}m" }
        }
    }
}
