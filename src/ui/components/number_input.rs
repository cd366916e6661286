use dioxus::prelude::*;

use crate::ui::theme::LABEL;

#[component]
pub fn NumberInput(
    label: &'static str,
    hint: Option<&'static str>,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "0.01")] step: &'static str,
    prefix: Option<&'static str>,
    suffix: Option<&'static str>,
) -> Element {
    rsx! {
        label { class: "block",
            div { class: "flex items-center gap-1.5 {LABEL}",
                "{label}"
                if let Some(text) = hint {
                    InfoTip { text }
                }
            }
            div { class: "mt-1 flex items-center gap-2 rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 focus-within:border-emerald-500",
                if let Some(mark) = prefix {
                    span { class: "text-sm text-slate-500", "{mark}" }
                }
                input {
                    r#type: "number",
                    min: "0",
                    step: "{step}",
                    class: "w-full bg-transparent text-sm text-slate-100 outline-none",
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt.value()),
                }
                if let Some(mark) = suffix {
                    span { class: "text-sm text-slate-500", "{mark}" }
                }
            }
        }
    }
}

#[component]
fn InfoTip(text: &'static str) -> Element {
    rsx! {
        span { class: "group relative inline-flex",
            span {
                class: "flex h-4 w-4 cursor-help select-none items-center justify-center rounded-full border border-slate-600 text-[10px] text-slate-400",
                "i"
            }
            span {
                class: "pointer-events-none absolute bottom-full left-1/2 z-10 mb-2 w-56 -translate-x-1/2 rounded-lg border border-slate-700 bg-slate-900 p-3 text-[11px] normal-case tracking-normal text-slate-300 opacity-0 shadow-xl transition group-hover:opacity-100",
                "{text}"
            }
        }
    }
}
