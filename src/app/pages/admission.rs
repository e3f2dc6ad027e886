//! Admission form for the selected course and batch.

use danceverse_model::{BatchId, CourseId, Experience};
use dioxus::prelude::*;

use crate::admission::InquiryForm;
use crate::app::components::BackButton;
use crate::app::use_store;
use crate::session::Action;

const INPUT_CLASS: &str = "w-full bg-black border border-white/10 rounded-xl p-4 text-sm text-white focus:border-[#bf953f] outline-none";
const LABEL_CLASS: &str = "block text-[10px] font-bold uppercase tracking-widest text-slate-500 mb-2";

#[component]
pub fn AdmissionForm(course: CourseId, batch: BatchId) -> Element {
    let mut store = use_store();
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut experience = use_signal(Experience::default);
    let mut error = use_signal(|| None::<String>);

    let (program, batch_label) = {
        let store = store.read();
        let catalog = store.catalog();
        (
            catalog.course(&course).map(|c| c.title.clone()).unwrap_or_default(),
            catalog.batch(&batch).map(|b| b.label.clone()).unwrap_or_default(),
        )
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = InquiryForm {
            name: name(),
            phone: phone(),
            email: email(),
            experience: experience(),
        };
        // On failure the store is untouched and the form keeps its input
        match store.write().dispatch(Action::SubmitInquiry(form)) {
            Ok(()) => error.set(None),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div { class: "max-w-2xl mx-auto px-4 py-16",
            BackButton { label: "Change Batch" }

            div { class: "text-center mb-12",
                span { class: "text-[#bf953f] font-bold tracking-[0.5em] text-[10px] uppercase block mb-3", "Step 2 of 2" }
                h1 { class: "text-5xl font-display gold-gradient uppercase mb-2", "Admission Form" }
                p { class: "text-slate-500 uppercase tracking-widest text-xs font-bold", "{program} • {batch_label}" }
            }

            form {
                class: "bg-[#111] p-10 rounded-3xl border border-white/5 space-y-6",
                onsubmit: submit,

                div {
                    label { class: LABEL_CLASS, r#for: "admission-name", "Full Name *" }
                    input {
                        id: "admission-name",
                        class: INPUT_CLASS,
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                }
                div {
                    label { class: LABEL_CLASS, r#for: "admission-phone", "Phone *" }
                    input {
                        id: "admission-phone",
                        class: INPUT_CLASS,
                        r#type: "tel",
                        value: "{phone}",
                        oninput: move |e| phone.set(e.value()),
                    }
                }
                div {
                    label { class: LABEL_CLASS, r#for: "admission-email", "Email" }
                    input {
                        id: "admission-email",
                        class: INPUT_CLASS,
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                div {
                    label { class: LABEL_CLASS, r#for: "admission-experience", "Experience" }
                    select {
                        id: "admission-experience",
                        class: INPUT_CLASS,
                        value: "{experience}",
                        onchange: move |e| experience.set(Experience::from(e.value().as_str())),
                        for level in Experience::ALL {
                            option { key: "{level}", value: "{level}", "{level}" }
                        }
                    }
                }

                if let Some(message) = error() {
                    p { class: "text-sm text-red-400", role: "alert", "{message}" }
                }

                button {
                    class: "w-full py-5 bg-[#bf953f] hover:bg-[#fcf6ba] text-black font-bold rounded-2xl transition-all uppercase tracking-widest",
                    r#type: "submit",
                    "Submit Inquiry"
                }
            }
        }
    }
}
