//! Camera studio: start/stop the local camera and ask the coach for tips.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use crate::app::api::coach_feedback;
use crate::coach::FALLBACK_FEEDBACK;
use crate::media::camera::{self, CameraHandle, CameraState};

const VIDEO_ID: &str = "live-studio-video";

#[component]
pub fn LiveStream(session_title: String, instructor_name: String) -> Element {
    let mut camera_state = use_signal(CameraState::default);
    let handle: Rc<RefCell<Option<CameraHandle>>> = use_hook(|| Rc::new(RefCell::new(None)));
    let mut session_ended = use_signal(|| false);
    let mut feedback = use_signal(|| None::<String>);
    let mut feedback_loading = use_signal(|| false);

    // Attach once the <video> element is mounted
    {
        let handle = handle.clone();
        use_effect(move || {
            if !camera_state.read().shows_video() {
                return;
            }
            if let Some(stream) = handle.borrow().as_ref() {
                if let Err(e) = stream.attach(VIDEO_ID) {
                    warn!(error = %e, "Could not attach camera stream");
                }
            }
        });
    }

    // Leaving the view turns the camera off
    {
        let handle = handle.clone();
        use_drop(move || {
            if let Some(stream) = handle.borrow_mut().take() {
                stream.release();
            }
        });
    }

    let start = {
        let handle = handle.clone();
        move |_: MouseEvent| {
            if !camera_state.write().begin_acquire() {
                return;
            }
            let handle = handle.clone();
            session_ended.set(false);
            feedback.set(None);
            spawn(async move {
                match camera::acquire().await {
                    Ok(stream) => {
                        if !camera_state.write().on_acquired() {
                            stream.release();
                            return;
                        }
                        if let Some(previous) = handle.borrow_mut().replace(stream) {
                            previous.release();
                        }
                    }
                    Err(e) => camera_state.write().on_failed(&e),
                }
            });
        }
    };

    let stop = {
        let handle = handle.clone();
        move |_: MouseEvent| {
            if let Some(stream) = handle.borrow_mut().take() {
                stream.release();
            }
            camera_state.write().on_stopped();
            session_ended.set(true);
        }
    };

    let transcript = format!("Attended \"{session_title}\" with {instructor_name} in the live studio");
    let request_feedback = move |_: MouseEvent| {
        let transcript = transcript.clone();
        feedback_loading.set(true);
        spawn(async move {
            let tips = match coach_feedback(transcript).await {
                Ok(tips) => tips,
                Err(e) => {
                    warn!(error = %e, "Coach feedback request failed");
                    FALLBACK_FEEDBACK.to_string()
                }
            };
            feedback.set(Some(tips));
            feedback_loading.set(false);
        });
    };

    let state = camera_state.read().clone();
    let is_live = state.shows_video();

    let screen = match &state {
        CameraState::Failed(message) => rsx! {
            div { class: "text-red-400 p-8 text-center",
                svg { class: "w-12 h-12 mx-auto mb-4", fill: "none", stroke: "currentColor", view_box: "0 0 24 24",
                    path { "stroke-linecap": "round", "stroke-linejoin": "round", "stroke-width": "2",
                        d: "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
                    }
                }
                p { class: "font-medium", "{message}" }
            }
        },
        CameraState::Live => rsx! {
            video {
                id: VIDEO_ID,
                class: "w-full h-full object-cover",
                autoplay: true,
                playsinline: true,
                muted: true,
            }
        },
        CameraState::Acquiring => rsx! {
            div { class: "text-center text-slate-400",
                div { class: "w-10 h-10 border-4 border-[#bf953f] border-t-transparent rounded-full animate-spin mx-auto mb-4" }
                p { class: "text-xs uppercase tracking-widest font-bold", "Starting camera..." }
            }
        },
        CameraState::Idle => rsx! {
            div { class: "text-center",
                div { class: "w-20 h-20 bg-[#bf953f] rounded-full flex items-center justify-center mx-auto mb-6 animate-pulse",
                    svg { class: "w-10 h-10 text-black", fill: "currentColor", view_box: "0 0 20 20",
                        path { d: "M2 6a2 2 0 012-2h6a2 2 0 012 2v8a2 2 0 01-2 2H4a2 2 0 01-2-2V6zM14.553 7.106A1 1 0 0014 8v4a1 1 0 00.553.894l2 1A1 1 0 0018 13V7a1 1 0 00-1.447-.894l-2 1z" }
                    }
                }
                button {
                    class: "px-8 py-3 bg-[#bf953f] hover:bg-[#fcf6ba] text-black rounded-full font-bold uppercase tracking-widest text-xs transition-all",
                    onclick: start,
                    "Enter Live Studio"
                }
            }
        },
    };

    rsx! {
        div { class: "w-full bg-[#0a0a0a] rounded-2xl overflow-hidden relative shadow-2xl border border-white/5",
            div { class: "aspect-video bg-black flex items-center justify-center", {screen} }

            div { class: "absolute top-4 left-4 flex gap-2",
                if is_live {
                    div { class: "px-3 py-1 bg-red-600 text-white text-[10px] font-bold uppercase tracking-widest rounded flex items-center gap-2",
                        span { class: "w-2 h-2 bg-white rounded-full animate-ping" }
                        "Live"
                    }
                }
                div { class: "px-3 py-1 bg-black/50 backdrop-blur-md text-white text-[10px] font-bold uppercase tracking-widest rounded",
                    "{instructor_name}"
                }
            }

            div { class: "p-6 bg-[#111] text-white border-t border-white/5",
                div { class: "flex justify-between items-center",
                    div {
                        h2 { class: "text-xl font-bold", "{session_title}" }
                        p { class: "text-slate-400 text-sm", "Real-time interaction and feedback" }
                    }
                    if is_live {
                        button {
                            class: "px-6 py-2 bg-white/10 hover:bg-white/20 rounded-lg text-sm font-bold transition-colors",
                            onclick: stop,
                            "End Session"
                        }
                    } else if session_ended() {
                        button {
                            class: "px-6 py-2 bg-[#bf953f] text-black hover:bg-[#fcf6ba] rounded-lg text-sm font-bold transition-colors disabled:opacity-50",
                            disabled: feedback_loading(),
                            onclick: request_feedback,
                            if feedback_loading() { "Asking Coach..." } else { "Get Coach Feedback" }
                        }
                    }
                }

                if let Some(tips) = feedback() {
                    div { class: "mt-6 p-4 rounded-xl bg-black border border-[#bf953f]/20",
                        h3 { class: "text-[10px] font-bold uppercase tracking-widest text-[#bf953f] mb-2", "Coach Feedback" }
                        p { class: "text-sm text-slate-300 whitespace-pre-line", "{tips}" }
                    }
                }
            }
        }
    }
}
