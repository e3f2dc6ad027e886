//! Navigation bar with role-gated items and mobile toggle.

use dioxus::prelude::*;

use crate::app::use_store;
use crate::session::{visible_items, Action, Tab};

/// Header navigation. Items come from the role mapping in `session::nav`.
#[component]
pub fn Nav() -> Element {
    let mut store = use_store();
    let mut menu_open = use_signal(|| false);

    let (role, active) = {
        let store = store.read();
        (store.role(), store.view().tab())
    };
    let items = visible_items(role);

    let nav_link_class = move |tab: Tab| {
        if active == tab {
            "text-xs uppercase tracking-widest font-bold text-[#bf953f] border-b-2 border-[#bf953f] pb-1"
        } else {
            "text-xs uppercase tracking-widest font-bold text-slate-400 hover:text-white"
        }
    };

    let mobile_menu_class = if menu_open() {
        "block md:hidden border-t border-white/10"
    } else {
        "hidden md:hidden"
    };

    rsx! {
        header { class: "sticky top-0 z-50 bg-black/90 backdrop-blur-md border-b border-white/10",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex justify-between items-center h-20",
                    // Logo / Brand
                    div {
                        class: "flex items-center gap-3 cursor-pointer",
                        onclick: move |_| {
                            let _ = store.write().dispatch(Action::Navigate(Tab::Home));
                        },
                        div { class: "relative w-12 h-12 flex items-center justify-center",
                            div { class: "absolute inset-0 border-2 border-[#bf953f] rounded-full animate-pulse" }
                            div { class: "w-8 h-8 bg-[#bf953f] rounded-full flex items-center justify-center",
                                span { class: "text-black font-bold text-xs", "LDV" }
                            }
                        }
                        div { class: "flex flex-col",
                            span { class: "font-logo text-xl tracking-widest gold-gradient font-bold", "LAKSHYA DANCEVERSE" }
                            span { class: "text-[8px] uppercase tracking-[0.3em] text-slate-400", "Aim. Move. Become." }
                        }
                    }

                    // Desktop navigation
                    nav { class: "hidden md:flex space-x-8",
                        for (tab_id, item) in items.iter().map(|i| (i.tab.id(), *i)) {
                            button {
                                key: "{tab_id}",
                                id: "nav-{tab_id}",
                                class: nav_link_class(item.tab),
                                onclick: move |_| {
                                    let _ = store.write().dispatch(Action::Navigate(item.tab));
                                },
                                "{item.label}"
                            }
                        }
                    }

                    div { class: "hidden md:flex items-center gap-4",
                        SessionButton {}
                    }

                    // Mobile menu button
                    div { class: "md:hidden",
                        button {
                            class: "p-2 text-[#bf953f]",
                            r#type: "button",
                            onclick: move |_| menu_open.toggle(),
                            span { class: "sr-only", "Toggle menu" }
                            if menu_open() {
                                // X icon
                                svg { class: "w-6 h-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                                    path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M6 18L18 6M6 6l12 12" }
                                }
                            } else {
                                // Hamburger icon
                                svg { class: "w-6 h-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                                    path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M4 6h16M4 12h16m-7 6h7" }
                                }
                            }
                        }
                    }
                }
            }

            // Mobile menu
            div { class: "{mobile_menu_class}", id: "mobile-menu",
                div { class: "px-4 pt-2 pb-4 flex flex-col gap-4",
                    for (tab_id, item) in items.iter().map(|i| (i.tab.id(), *i)) {
                        button {
                            key: "{tab_id}",
                            class: nav_link_class(item.tab),
                            onclick: move |_| {
                                menu_open.set(false);
                                let _ = store.write().dispatch(Action::Navigate(item.tab));
                            },
                            "{item.label}"
                        }
                    }
                    SessionButton {}
                }
            }
        }
    }
}

/// "Join Academy" when anonymous, "Sign Out" when signed in.
#[component]
fn SessionButton() -> Element {
    let mut store = use_store();
    let signed_in = store.read().role().is_some();

    if signed_in {
        rsx! {
            button {
                class: "px-4 py-2 text-xs font-bold text-slate-400 hover:text-white uppercase tracking-tighter",
                onclick: move |_| {
                    let _ = store.write().dispatch(Action::Logout);
                },
                "Sign Out"
            }
        }
    } else {
        rsx! {
            button {
                class: "px-8 py-2 text-xs font-bold text-black bg-[#bf953f] hover:bg-[#fcf6ba] rounded-full transition-all uppercase tracking-widest",
                onclick: move |_| {
                    let _ = store.write().dispatch(Action::Navigate(Tab::Login));
                },
                "Join Academy"
            }
        }
    }
}
