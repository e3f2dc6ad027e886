//! Lesson video player with playback-rate buttons.

use dioxus::prelude::*;

use crate::media::video::{self, PlaybackRate};

#[derive(Props, Clone, PartialEq)]
pub struct VideoPlayerProps {
    /// DOM id of the `<video>` element
    pub id: String,
    pub src: String,
    /// Poster image URL, empty for none
    #[props(default)]
    pub poster: String,
    /// Where playback starts once metadata has loaded
    #[props(default)]
    pub start_secs: f64,
    /// Called with the playback position on every `timeupdate`
    #[props(default)]
    pub on_progress: Option<EventHandler<f64>>,
}

#[component]
pub fn VideoPlayer(props: VideoPlayerProps) -> Element {
    let mut rate = use_signal(PlaybackRate::default);
    let mut ready = use_signal(|| false);

    let element_id = props.id.clone();
    let start_secs = props.start_secs;
    let on_progress = props.on_progress;

    let on_loaded = {
        let element_id = element_id.clone();
        move |_: Event<MediaData>| {
            if start_secs > 0.0 {
                video::seek(&element_id, start_secs);
            }
            ready.set(true);
        }
    };

    let on_time_update = {
        let element_id = element_id.clone();
        move |_: Event<MediaData>| {
            if let (Some(handler), Some(secs)) = (on_progress, video::current_time(&element_id)) {
                handler.call(secs);
            }
        }
    };

    rsx! {
        div { class: "relative bg-black rounded-xl overflow-hidden shadow-2xl group",
            video {
                id: "{props.id}",
                class: "w-full aspect-video",
                src: "{props.src}",
                poster: "{props.poster}",
                controls: true,
                playsinline: true,
                onloadedmetadata: on_loaded,
                ontimeupdate: on_time_update,
            }

            div { class: "absolute top-4 right-4 flex gap-2 opacity-0 group-hover:opacity-100 transition-opacity",
                for option in PlaybackRate::ALL {
                    button {
                        key: "{option}",
                        class: if rate() == option {
                            "px-3 py-1 text-xs font-bold rounded-full backdrop-blur-md bg-[#bf953f] text-black"
                        } else {
                            "px-3 py-1 text-xs font-bold rounded-full backdrop-blur-md bg-white/20 text-white hover:bg-white/40"
                        },
                        onclick: {
                            let element_id = element_id.clone();
                            move |_| {
                                if video::set_playback_rate(&element_id, option) {
                                    rate.set(option);
                                }
                            }
                        },
                        "{option}"
                    }
                }
            }

            if !ready() {
                div { class: "absolute inset-0 flex items-center justify-center bg-black/50 backdrop-blur-sm pointer-events-none",
                    div { class: "w-12 h-12 border-4 border-[#bf953f] border-t-transparent rounded-full animate-spin" }
                }
            }
        }
    }
}
