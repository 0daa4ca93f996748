//! Theme toggle button

use dioxus::prelude::*;
use liner_common::Theme;

/// Button labelled with the active theme. Clicking asks for the other one.
#[component]
pub fn ThemeButton(
    theme: Theme,
    #[props(default)] id: Option<String>,
    #[props(default)] disabled: bool,
    on_toggle: EventHandler<()>,
) -> Element {
    let label = theme.label();
    let title = format!("Switch to {} theme", theme.opposite());

    rsx! {
        button {
            class: "button",
            id: id.as_deref(),
            r#type: "button",
            disabled,
            title,
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |_| {
                if !disabled {
                    on_toggle.call(());
                }
            },
            "{label}"
        }
    }
}
