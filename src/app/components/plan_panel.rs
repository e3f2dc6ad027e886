//! "Generate My Plan" panel on the student portal.

use danceverse_model::{Experience, LearningPlan};
use dioxus::prelude::*;
use tracing::warn;

use crate::app::api::generate_learning_plan;

/// Outcome of the last plan request
#[derive(Debug, Clone, PartialEq)]
enum PlanStatus {
    Empty,
    Loading,
    Ready(LearningPlan),
    Unavailable,
}

#[component]
pub fn PlanPanel() -> Element {
    let mut goals = use_signal(String::new);
    let mut experience = use_signal(Experience::default);
    let mut status = use_signal(|| PlanStatus::Empty);

    let generate = move |_: MouseEvent| {
        let goals = goals.read().trim().to_string();
        let level = experience();
        status.set(PlanStatus::Loading);
        spawn(async move {
            let plan = match generate_learning_plan(goals, level).await {
                Ok(plan) => plan,
                Err(e) => {
                    warn!(error = %e, "Learning plan request failed");
                    None
                }
            };
            status.set(match plan {
                Some(plan) if !plan.is_empty() => PlanStatus::Ready(plan),
                _ => PlanStatus::Unavailable,
            });
        });
    };

    let loading = status() == PlanStatus::Loading;

    let result = match status() {
        PlanStatus::Empty | PlanStatus::Loading => rsx! {},
        PlanStatus::Unavailable => rsx! {
            p { class: "text-sm text-red-400 mt-6", "The AI coach is unavailable right now. Please try again later." }
        },
        PlanStatus::Ready(plan) => rsx! {
            div { class: "mt-8",
                h4 { class: "font-display text-3xl gold-gradient mb-6", "{plan.plan_name}" }
                div { class: "grid md:grid-cols-2 gap-4",
                    for week in plan.weeks {
                        div { class: "p-5 rounded-xl bg-black border border-white/5",
                            div { class: "text-[10px] font-bold uppercase tracking-widest text-[#bf953f] mb-1", "Week {week.week_number}" }
                            div { class: "font-bold text-white mb-3", "{week.focus}" }
                            ul { class: "space-y-1 text-sm text-slate-400",
                                for exercise in week.exercises {
                                    li { "• {exercise}" }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "bg-[#111] p-8 rounded-2xl border border-white/5",
            h3 { class: "text-[10px] font-bold uppercase tracking-[0.3em] text-[#bf953f] mb-2", "AI Coach" }
            h2 { class: "text-2xl font-bold text-white mb-6 uppercase tracking-tight", "Generate My Plan" }

            div { class: "grid md:grid-cols-3 gap-4",
                textarea {
                    class: "md:col-span-2 bg-black border border-white/10 rounded-xl p-4 text-sm text-white focus:border-[#bf953f] outline-none",
                    placeholder: "What do you want to achieve? e.g. cleaner popping, stage confidence",
                    rows: "3",
                    value: "{goals}",
                    oninput: move |e| goals.set(e.value()),
                }
                div { class: "flex flex-col gap-3",
                    select {
                        class: "bg-black border border-white/10 rounded-xl p-3 text-sm text-white focus:border-[#bf953f] outline-none",
                        value: "{experience}",
                        onchange: move |e| experience.set(Experience::from(e.value().as_str())),
                        for level in Experience::ALL {
                            option { key: "{level}", value: "{level}", "{level}" }
                        }
                    }
                    button {
                        class: "py-3 bg-[#bf953f] text-black text-xs font-bold uppercase tracking-widest rounded-xl hover:bg-[#fcf6ba] transition-all disabled:opacity-50",
                        disabled: loading,
                        onclick: generate,
                        if loading { "Generating..." } else { "Generate My Plan" }
                    }
                }
            }

            {result}
        }
    }
}
