use dioxus::prelude::*;

use crate::Lang;

const OPTIONS: [(Lang, &str, &str); 2] = [(Lang::Zh, "zh", "中文"), (Lang::En, "en", "EN")];

/// Language picker shown in the page corner.
#[component]
pub fn LangSwitch() -> Element {
    let lang_sig = crate::use_lang();
    let lang = lang_sig();

    rsx! {
        div { class: "lang_switch",
            span { class: "hint", {crate::t(lang, "lang.label")} }
            for (option, code, label) in OPTIONS {
                button {
                    key: "{code}",
                    class: button_class(option == lang),
                    onclick: move |_| crate::set_lang(lang_sig, option),
                    "{label}"
                }
            }
        }
    }
}

fn button_class(active: bool) -> &'static str {
    if active {
        "btn active"
    } else {
        "btn"
    }
}
