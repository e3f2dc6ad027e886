//! Syllabus card used on the home and courses pages.

use danceverse_model::{Course, CourseId};
use dioxus::prelude::*;

#[component]
pub fn CourseCard(
    course: Course,
    on_view: EventHandler<CourseId>,
    on_enroll: EventHandler<CourseId>,
) -> Element {
    let view_id = course.id.clone();
    let enroll_id = course.id.clone();

    rsx! {
        div { class: "group bg-[#111] rounded-2xl overflow-hidden shadow-sm hover:shadow-2xl hover:shadow-[#bf953f]/10 transition-all duration-500 border border-white/5",
            div { class: "relative aspect-video overflow-hidden",
                img {
                    class: "object-cover w-full h-full group-hover:scale-110 transition-transform duration-700 opacity-80 group-hover:opacity-100",
                    src: "{course.thumbnail}",
                    alt: "{course.title}",
                }
                div { class: "absolute top-3 right-3 px-3 py-1 bg-black/60 backdrop-blur rounded text-[10px] font-bold uppercase tracking-widest text-[#bf953f] border border-[#bf953f]/30",
                    "{course.category}"
                }
            }
            div { class: "p-6",
                div { class: "flex items-center gap-2 mb-3 text-[10px] text-slate-500 font-bold uppercase tracking-widest",
                    span { "{course.difficulty}" }
                    span { "•" }
                    span { class: "text-slate-300", "{course.instructor_name}" }
                }
                h3 { class: "text-lg font-bold text-white group-hover:text-[#bf953f] transition-colors mb-4 line-clamp-1 uppercase tracking-tight",
                    "{course.title}"
                }
                div { class: "flex items-center justify-between border-t border-white/5 pt-4",
                    div { class: "flex items-center gap-2",
                        span { class: "text-[#bf953f]", "★" }
                        span { class: "text-sm font-bold text-white", "{course.rating}" }
                        span { class: "text-[10px] text-slate-500 font-medium", "({course.students_count} Students)" }
                    }
                    div { class: "text-[10px] font-bold text-[#bf953f] uppercase tracking-widest", "Admissions Open" }
                }
                div { class: "grid grid-cols-2 gap-3 mt-6",
                    button {
                        class: "py-2 border border-white/10 text-white text-[10px] font-bold uppercase tracking-widest rounded-lg hover:border-[#bf953f] transition-all",
                        onclick: move |_| on_view.call(view_id.clone()),
                        "View"
                    }
                    button {
                        class: "py-2 bg-[#bf953f] text-black text-[10px] font-bold uppercase tracking-widest rounded-lg hover:bg-[#fcf6ba] transition-all",
                        onclick: move |_| on_enroll.call(enroll_id.clone()),
                        "Enroll"
                    }
                }
            }
        }
    }
}
