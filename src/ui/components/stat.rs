use dioxus::prelude::*;

#[component]
pub fn Stat(label: &'static str, value: String, #[props(default)] emphasize: bool) -> Element {
    let value_class = if emphasize {
        "text-2xl font-semibold text-emerald-300"
    } else {
        "text-lg font-medium text-slate-200"
    };

    rsx! {
        div {
            p { class: "text-xs uppercase tracking-wide text-slate-500", "{label}" }
            p { class: "mt-1 {value_class}", "{value}" }
        }
    }
}
