//! Layout component wrapping all pages with Tailwind and common elements.

use dioxus::prelude::*;

use super::nav::Nav;

/// CSS styles for the application (extends Tailwind).
const CUSTOM_STYLES: &str = r#"
body { background: #000; color: #fff; }
.font-logo { font-family: 'Cinzel', serif; }
.font-display { font-family: 'Bebas Neue', sans-serif; letter-spacing: 0.02em; }
.gold-gradient {
    background: linear-gradient(to right, #bf953f, #fcf6ba, #b38728, #fbf5b7, #aa771c);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.gold-text { color: #bf953f; }
.animate-spin-slow { animation: spin 20s linear infinite; }
.animate-fade-in { animation: fade-in 0.6s ease-out both; }
@keyframes fade-in { from { opacity: 0; transform: translateY(12px); } to { opacity: 1; transform: none; } }
"#;

const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Bebas+Neue&family=Cinzel:wght@400;700&family=Inter:wght@300;400;700&display=swap";

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let full_title = format!("{} - Lakshya Danceverse", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Link { rel: "stylesheet", href: FONTS_URL }
        document::Style { {CUSTOM_STYLES} }

        div { class: "min-h-screen flex flex-col bg-black",
            Nav {}

            main { class: "flex-grow",
                {props.children}
            }

            footer { class: "bg-black border-t border-white/5 py-16",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center",
                    div { class: "font-logo text-2xl gold-gradient mb-2 tracking-widest", "LAKSHYA DANCEVERSE" }
                    p { class: "text-slate-500 text-sm mb-8 tracking-wide", "A New Era of Performance | Lucknow, India" }
                    div { class: "flex justify-center gap-8 mb-8 text-[10px] uppercase tracking-[0.2em] font-bold text-slate-400",
                        a { class: "hover:text-[#bf953f]", href: "#", "Instagram" }
                        a { class: "hover:text-[#bf953f]", href: "#", "YouTube" }
                        a { class: "hover:text-[#bf953f]", href: "#", "Privacy" }
                    }
                    div { class: "text-[10px] text-slate-600 uppercase tracking-widest",
                        "© 2025 Lakshya Danceverse. Built for the Elite."
                    }
                }
            }
        }
    }
}
