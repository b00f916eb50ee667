use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaPersonRunning, FaRightFromBracket, FaStopwatch,
};
use dioxus_free_icons::Icon;

use crate::client::nav;
use crate::client::router::{self, Page};
use crate::client::store::Session;

#[component]
pub fn Navbar(active: Page) -> Element {
    let mut session = use_context::<Signal<Session>>();
    let mut page = use_context::<Signal<Page>>();

    let logged_in = session.read().logged_in();

    let link_class = |target: Page| {
        if target == active {
            "btn btn-ghost btn-active"
        } else {
            "btn btn-ghost"
        }
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                a {
                    href: Page::LeaderBoard.hash(),
                    class: "flex items-center gap-2",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaStopwatch
                    }
                    p { class: "text-xl",
                        "Paceline"
                    }
                    p { class: "text-xs",
                        "v0.1.0"
                    }
                }
            }
            div {
                class: "navbar-center",
                ul { class: "flex gap-1",
                    li {
                        a {
                            href: Page::LeaderBoard.hash(),
                            class: link_class(Page::LeaderBoard),
                            {Page::LeaderBoard.title()}
                        }
                    }
                    if logged_in {
                        li {
                            a {
                                href: Page::Runner.hash(),
                                class: link_class(Page::Runner),
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaPersonRunning
                                }
                                {Page::Runner.title()}
                            }
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                if logged_in {
                    button {
                        class: "btn btn-outline flex gap-2",
                        onclick: move |_| {
                            let command = session.write().logout();
                            command.run();

                            let redirected = router::after_logout();
                            if let Some(effect) = redirected.effect {
                                nav::apply(effect);
                            }
                            page.set(redirected.page);
                        },
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaRightFromBracket
                        }
                        "Logout"
                    }
                } else {
                    a { href: Page::Login.hash(),
                        button {
                            class: "btn btn-primary w-28",
                            "Sign in"
                        }
                    }
                }
            }
        }
    }
}
