use dioxus::prelude::*;

use crate::util::version::{version_label, APP_AUTHOR, APP_AUTHOR_URL, APP_NAME, APP_TAGLINE};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🌱" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight text-emerald-200", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "{APP_TAGLINE}" }
                        }
                    }
                    span { class: "text-xs text-slate-600", "{version}" }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "border-t border-slate-900/60 px-6 py-6 text-center text-xs text-slate-600",
                "Built with ❤️ for CPG brands by "
                a { class: "text-emerald-400 hover:text-emerald-300", href: "{APP_AUTHOR_URL}",
                    "{APP_AUTHOR}"
                }
                "."
            }
        }
    }
}
