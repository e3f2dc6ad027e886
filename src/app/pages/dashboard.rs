//! Dashboard page component.
//!
//! One tab, three portals: the signed-in role picks student, instructor or
//! admin content.

use chrono::DateTime;
use danceverse_model::{Analytics, Course, CourseId, Inquiry, LiveSession, Role};
use dioxus::prelude::*;

use crate::admission::whatsapp_link;
use crate::app::components::PlanPanel;
use crate::app::use_store;
use crate::session::{Action, Tab};

#[component]
pub fn Dashboard() -> Element {
    let store = use_store();
    let role = store.read().role();

    let portal = match role {
        Some(Role::Student) => rsx! { StudentPortal {} },
        Some(Role::Trainer) => rsx! { InstructorStudio {} },
        Some(Role::Admin) => rsx! { MasterTerminal {} },
        None => rsx! {
            p { class: "text-slate-500 text-center py-24", "Sign in to open your dashboard." }
        },
    };

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 py-12", {portal} }
    }
}

#[component]
fn StudentPortal() -> Element {
    let mut store = use_store();
    let (roadmap, live_now) = {
        let store = store.read();
        let catalog = store.catalog();
        (
            catalog.courses().first().cloned(),
            catalog.live_now().cloned().collect::<Vec<LiveSession>>(),
        )
    };

    rsx! {
        h1 { class: "text-4xl font-logo gold-gradient mb-8 uppercase tracking-widest", "Student Portal" }
        div { class: "grid lg:grid-cols-3 gap-8",
            div { class: "lg:col-span-2 space-y-8",
                div { class: "bg-[#111] p-10 rounded-3xl border border-white/5 shadow-2xl",
                    h3 { class: "text-2xl font-bold mb-6 flex items-center gap-3",
                        span { class: "w-2 h-8 bg-[#bf953f]" }
                        "My Training Roadmap"
                    }
                    if let Some(course) = roadmap {
                        RoadmapItem {
                            course,
                            progress: 15,
                            on_resume: move |id: CourseId| {
                                let _ = store.write().dispatch(Action::OpenCourse(id));
                            },
                        }
                    }
                }
                PlanPanel {}
            }

            div { class: "bg-[#111] p-8 rounded-3xl border border-white/5 shadow-2xl h-fit",
                h3 { class: "text-xl font-bold mb-6 gold-gradient uppercase tracking-widest", "Live Now" }
                div { class: "space-y-4",
                    for session in live_now.iter() {
                        div {
                            key: "{session.id}",
                            class: "p-4 bg-red-600/10 border border-red-600/30 rounded-2xl cursor-pointer hover:bg-red-600/20 transition-all",
                            onclick: move |_| {
                                let _ = store.write().dispatch(Action::Navigate(Tab::Live));
                            },
                            div { class: "flex items-center gap-2 mb-2",
                                span { class: "w-2 h-2 bg-red-600 rounded-full animate-ping" }
                                span { class: "text-[10px] font-bold text-red-600 uppercase tracking-widest", "Streaming" }
                            }
                            p { class: "font-bold text-white", "{session.title}" }
                            p { class: "text-xs text-slate-500 mt-1", "{session.instructor_name}" }
                        }
                    }
                    if live_now.is_empty() {
                        p { class: "text-slate-600 text-sm italic", "No sessions streaming right now." }
                    }
                }
            }
        }
    }
}

#[component]
fn RoadmapItem(course: Course, progress: u8, on_resume: EventHandler<CourseId>) -> Element {
    let course_id = course.id.clone();

    rsx! {
        div { class: "p-6 bg-black rounded-2xl border border-white/10 flex gap-6 items-center",
            img { class: "w-32 h-20 object-cover rounded-lg opacity-60", src: "{course.thumbnail}", alt: "{course.title}" }
            div { class: "flex-grow",
                h4 { class: "font-bold text-white mb-2", "{course.title}" }
                div { class: "w-full h-1 bg-white/5 rounded-full overflow-hidden",
                    div { class: "h-full bg-[#bf953f]", style: "width: {progress}%" }
                }
                p { class: "text-[10px] uppercase text-slate-500 mt-2 font-bold tracking-widest", "{progress}% Progress" }
            }
            button {
                class: "px-6 py-2 bg-white/5 hover:bg-[#bf953f] hover:text-black rounded-lg text-xs font-bold transition-all uppercase tracking-widest",
                onclick: move |_| on_resume.call(course_id.clone()),
                "Resume"
            }
        }
    }
}

#[component]
fn InstructorStudio() -> Element {
    let mut store = use_store();
    let (courses, upcoming) = {
        let store = store.read();
        let catalog = store.catalog();
        (
            catalog.courses().to_vec(),
            catalog.upcoming().cloned().collect::<Vec<LiveSession>>(),
        )
    };
    let course_count = courses.len();

    rsx! {
        div { class: "space-y-8 animate-fade-in",
            div { class: "flex flex-col md:flex-row justify-between items-start md:items-center gap-4",
                div {
                    h1 { class: "text-4xl font-logo gold-gradient uppercase tracking-widest", "Instructor Studio" }
                    p { class: "text-slate-500", "Manage your content and reach your students." }
                }
                button {
                    class: "px-6 py-3 bg-red-600 hover:bg-red-700 text-white rounded-xl font-bold transition-all flex items-center gap-2 shadow-lg shadow-red-900/30",
                    onclick: move |_| {
                        let _ = store.write().dispatch(Action::Navigate(Tab::Live));
                    },
                    svg { class: "w-5 h-5", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                        path { "stroke-linecap": "round", "stroke-linejoin": "round", "stroke-width": "2",
                            d: "M15 10l4.553-2.276A1 1 0 0121 8.618v6.764a1 1 0 01-1.447.894L15 14M5 18h8a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v8a2 2 0 002 2z"
                        }
                    }
                    "Go Live Now"
                }
            }

            div { class: "grid lg:grid-cols-3 gap-8",
                div { class: "lg:col-span-2 bg-[#111] rounded-3xl border border-white/5 overflow-hidden",
                    div { class: "p-6 border-b border-white/5 flex justify-between items-center",
                        h3 { class: "text-xl font-bold text-white", "Your Courses" }
                        span { class: "text-sm font-medium text-[#bf953f]", "{course_count} Active" }
                    }
                    div { class: "p-6 grid grid-cols-1 md:grid-cols-2 gap-6",
                        for course in courses {
                            div { key: "{course.id}", class: "border border-white/5 rounded-2xl p-4 hover:bg-white/[0.02] transition-all flex gap-4",
                                img { class: "w-20 h-20 object-cover rounded-lg", src: "{course.thumbnail}", alt: "{course.title}" }
                                div { class: "flex-grow min-w-0",
                                    h4 { class: "font-bold text-white truncate", "{course.title}" }
                                    p { class: "text-xs text-slate-500 mb-2", "{course.students_count} Students enrolled" }
                                    p { class: "text-[10px] uppercase font-bold text-slate-600 tracking-wider", {format!("{} Lessons", course.lesson_count())} }
                                }
                            }
                        }
                    }
                }

                div { class: "bg-[#111] p-8 rounded-3xl border border-white/5 h-fit",
                    h3 { class: "text-xl font-bold text-white mb-6", "Upcoming Schedule" }
                    div { class: "space-y-6",
                        for session in upcoming.iter() {
                            ScheduleRow { key: "{session.id}", session: session.clone() }
                        }
                        if upcoming.is_empty() {
                            p { class: "text-slate-600 text-sm italic", "Nothing scheduled yet." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ScheduleRow(session: LiveSession) -> Element {
    let slot = ScheduleSlot::parse(&session.start_time);

    rsx! {
        div { class: "flex gap-4",
            div { class: "w-12 h-12 bg-[#bf953f]/10 rounded-xl flex flex-col items-center justify-center text-[#bf953f] flex-shrink-0",
                span { class: "text-[10px] font-bold uppercase", "{slot.month}" }
                span { class: "text-lg font-display leading-none", "{slot.day}" }
            }
            div {
                p { class: "text-sm font-bold text-white line-clamp-1", "{session.title}" }
                p { class: "text-xs text-slate-500", "{slot.time} • {session.duration_minutes} min" }
            }
        }
    }
}

/// Calendar badge parts for a session start time
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduleSlot {
    month: String,
    day: String,
    time: String,
}

impl ScheduleSlot {
    /// Unparseable timestamps are shown as-is.
    fn parse(start_time: &str) -> Self {
        match DateTime::parse_from_rfc3339(start_time) {
            Ok(at) => Self {
                month: at.format("%b").to_string(),
                day: at.format("%d").to_string(),
                time: at.format("%H:%M").to_string(),
            },
            Err(_) => Self {
                month: String::new(),
                day: String::new(),
                time: start_time.to_string(),
            },
        }
    }
}

#[component]
fn MasterTerminal() -> Element {
    let store = use_store();
    let (analytics, inquiries): (Analytics, Vec<Inquiry>) = {
        let store = store.read();
        (store.catalog().analytics().clone(), store.inquiries().to_vec())
    };
    let leads = inquiries.len();

    rsx! {
        div { class: "space-y-10 animate-fade-in",
            div { class: "flex flex-col md:flex-row justify-between items-start md:items-center gap-4 border-b border-white/5 pb-8",
                div {
                    h1 { class: "text-5xl font-display gold-text uppercase", "Master Terminal" }
                    p { class: "text-slate-500 font-bold uppercase tracking-[0.3em] text-[10px] mt-1", "Lakshya Danceverse Operations" }
                }
                div { class: "px-6 py-3 bg-[#bf953f]/10 border border-[#bf953f]/30 rounded-xl",
                    span { class: "text-xs font-bold text-[#bf953f] uppercase tracking-widest", "System Status: Online" }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-4 gap-6",
                StatCard { label: "Total Admissions", value: analytics.active_users.to_string() }
                StatCard { label: "New Leads", value: leads.to_string() }
                StatCard { label: "Avg. Completion", value: format!("{}%", analytics.completion_rate) }
                StatCard { label: "Revenue", value: format!("₹{}.00", analytics.revenue) }
            }

            div { class: "bg-[#0a0a0a] rounded-[2.5rem] border border-white/5 overflow-hidden shadow-2xl",
                div { class: "p-8 border-b border-white/5 flex justify-between items-center bg-white/[0.02]",
                    h3 { class: "text-xl font-bold gold-text uppercase tracking-widest", "Admission Inquiries" }
                    span { class: "px-3 py-1 bg-white/5 rounded-full text-[10px] font-bold text-slate-400", "{leads} Pending" }
                }
                div { class: "divide-y divide-white/5",
                    for inquiry in inquiries {
                        InquiryRow { key: "{inquiry.id}", inquiry: inquiry.clone() }
                    }
                    if leads == 0 {
                        div { class: "p-24 text-center",
                            p { class: "text-slate-600 italic text-sm", "Waiting for new performance aspirants..." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "bg-[#0a0a0a] p-8 rounded-[2rem] border border-white/5",
            p { class: "text-[10px] uppercase font-bold text-slate-500 tracking-widest mb-2", "{label}" }
            p { class: "text-4xl font-display gold-text", "{value}" }
        }
    }
}

#[component]
fn InquiryRow(inquiry: Inquiry) -> Element {
    let link = whatsapp_link(&inquiry);
    let received = inquiry.date.format("%d %b %Y, %H:%M").to_string();

    rsx! {
        div { class: "p-8 flex flex-col md:flex-row justify-between items-start md:items-center gap-6 hover:bg-white/[0.02] transition-colors",
            div { class: "space-y-1",
                p { class: "text-lg font-bold text-white uppercase tracking-tight", "{inquiry.name}" }
                p { class: "text-xs text-slate-500 font-mono tracking-tighter", "{inquiry.phone} • {inquiry.experience} Level" }
                if !inquiry.email.is_empty() {
                    p { class: "text-xs text-slate-600", "{inquiry.email}" }
                }
            }
            div { class: "text-left md:text-right",
                p { class: "text-xs font-bold text-[#bf953f] uppercase tracking-widest", "{inquiry.program}" }
                p { class: "text-[10px] text-slate-600 mt-1", "{inquiry.batch}" }
                p { class: "text-[10px] text-slate-700 mt-1", "{received}" }
            }
            a {
                class: "px-5 py-2 bg-emerald-600/10 border border-emerald-600/30 text-emerald-500 text-[10px] font-bold rounded-lg uppercase tracking-widest hover:bg-emerald-600 hover:text-white transition-all",
                href: "{link}",
                target: "_blank",
                rel: "noopener",
                "WhatsApp"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_slot_from_rfc3339() {
        let slot = ScheduleSlot::parse("2025-10-24T18:30:00+05:30");
        assert_eq!(slot.month, "Oct");
        assert_eq!(slot.day, "24");
        assert_eq!(slot.time, "18:30");
    }

    #[test]
    fn test_schedule_slot_keeps_unparseable_text() {
        let slot = ScheduleSlot::parse("tomorrow evening");
        assert_eq!(slot.time, "tomorrow evening");
        assert!(slot.month.is_empty());
    }
}
