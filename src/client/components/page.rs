use dioxus::prelude::*;

/// Shared frame under the fixed navbar. Pages center their content in it
/// and add their own width cap.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen pt-16 p-4 flex flex-col items-center {class}",
            {children}
        }
    )
}
