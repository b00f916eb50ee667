#[cfg(feature = "web")]
use dioxus::document::Title;
#[cfg(feature = "web")]
use dioxus::prelude::*;

#[cfg(feature = "web")]
use crate::client::components::Page as PageShell;
#[cfg(feature = "web")]
use crate::client::nav;
#[cfg(feature = "web")]
use crate::client::router::Page;

#[cfg(feature = "web")]
#[component]
pub fn NotFound() -> Element {
    let hash = nav::current_hash();

    rsx!(
        Title { "Not found | Paceline" }
        PageShell { class: "justify-center",
            div { class: "flex flex-col items-center gap-2",
                h1 { class: "text-2xl font-bold",
                    "Nothing here"
                }
                p {
                    "\"{hash}\" does not point at a page."
                }
                a { href: Page::LeaderBoard.hash(),
                    button {
                        class: "btn btn-primary",
                        "Back to the leaderboard"
                    }
                }
            }
        }
    )
}
