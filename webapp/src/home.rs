use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    about::About,
    common::{current_year, theme::use_theme, use_site},
    components::section::Container,
    contact::Contact,
    credentials::{Certifications, OrganizationsAndAwards},
    hero::Hero,
    projects::Projects,
    resume::{Highlights, Resume},
    skills::Skills,
};

#[component]
fn Footer() -> Element {
    let site = use_site();
    let year = current_year();

    rsx! {
        footer { class: "page-footer",
            "© {year} {site.profile.name}. Built with Rust & Dioxus."
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    let accent = use_theme().theme().accent();

    rsx! {
        div { class: "page",
            // backdrop blobs
            div { class: "backdrop",
                div {
                    class: "blob blob-primary",
                    style: "background-color: {accent.backdrop_primary};",
                }
                div {
                    class: "blob blob-secondary",
                    style: "background-color: {accent.backdrop_secondary};",
                }
            }

            Hero {}
            About {}
            Resume {}
            Highlights {}
            Projects {}
            Skills {}
            Certifications {}
            OrganizationsAndAwards {}
            Contact {}
            Footer {}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PageNotFoundProps {
    segments: Vec<String>,
}

#[component]
pub fn PageNotFound(props: PageNotFoundProps) -> Element {
    let path = props.segments.join("/");

    rsx! {
        div { class: "page",
            Container {
                div { class: "not-found",
                    h1 { class: "hero-role", "Nothing at /{path}" }
                    div { class: "row", style: "justify-content: center;",
                        Link { to: Route::Portfolio {}, class: "btn btn-outline", "Back to the portfolio" }
                    }
                }
            }
        }
    }
}
