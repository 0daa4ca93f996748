//! Live search input

use dioxus::prelude::*;

/// Text input that reports every change
#[component]
pub fn SearchInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] id: Option<String>,
    #[props(default)] invalid: bool,
) -> Element {
    let class = if invalid {
        "search-input search-input-invalid"
    } else {
        "search-input"
    };

    rsx! {
        input {
            r#type: "search",
            class,
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            autocomplete: "off",
            aria_invalid: if invalid { Some("true") } else { None },
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
