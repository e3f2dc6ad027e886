//! Syllabus grid.

use danceverse_model::CourseId;
use dioxus::prelude::*;

use crate::app::components::CourseCard;
use crate::app::use_store;
use crate::session::Action;

#[component]
pub fn Courses() -> Element {
    let mut store = use_store();
    let courses = store.read().catalog().courses().to_vec();

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 py-24",
            div { class: "text-center mb-24",
                h1 { class: "text-6xl font-display gold-gradient uppercase mb-4", "The Syllabus" }
                p { class: "text-slate-500 uppercase tracking-[0.3em] text-xs font-bold",
                    "Standardized Training Units | Lucknow Headquarters"
                }
            }
            div { class: "grid md:grid-cols-2 lg:grid-cols-3 gap-8",
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
