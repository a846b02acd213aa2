use dioxus::prelude::*;
use dioxus_router::prelude::*;

use portfolio_common::theme::Theme;

use crate::{
    Route,
    common::{theme::use_theme, use_site},
    components::{
        icon::{Icon, IconKind},
        section::Container,
    },
};

// in-page anchors, in page order
const ANCHORS: [(&str, &str); 8] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#resume", "Resume"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#certifications", "Certifications"),
    ("#orgs", "Organizations & Awards"),
    ("#contact", "Contact"),
];

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    // show where the toggle leads, not where we are
    let icon = match theme.theme() {
        Theme::Dark => IconKind::Sun,
        Theme::Light => IconKind::Moon,
    };

    rsx! {
        button {
            class: "btn btn-icon",
            aria_label: "Toggle theme",
            onclick: move |_| {
                theme.toggle();
            },
            Icon { kind: icon }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let site = use_site();
    let profile = &site.profile;
    let accent = use_theme().theme().accent();

    rsx! {
        header { class: "app-header",
            Container {
                div { class: "nav-container",
                    a { href: "#home", class: "logo",
                        span {
                            class: "gradient-text",
                            style: "background-image: {accent.text};",
                            "{profile.name}"
                        }
                    }
                    nav { class: "nav-links",
                        div { class: "nav-anchors",
                            for (href, label) in ANCHORS {
                                a { key: "{href}", href: "{href}", "{label}" }
                            }
                        }
                        a {
                            href: "{profile.links.resume}",
                            class: "btn btn-accent",
                            style: "background-image: {accent.button};",
                            Icon { kind: IconKind::Download }
                            "CV"
                        }
                        ThemeToggle {}
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
