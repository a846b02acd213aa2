use dioxus::prelude::*;

use crate::{
    common::use_site,
    components::{
        icon::{Icon, IconKind},
        section::{Container, SectionTitle},
    },
    hero::ProfileLinks,
};

#[derive(Clone, PartialEq, Props)]
struct ContactCardProps {
    heading: String,
    children: Element,
}

#[component]
fn ContactCard(props: ContactCardProps) -> Element {
    rsx! {
        div { class: "card",
            h4 { style: "font-weight: 600; margin-bottom: var(--space-1);", "{props.heading}" }
            {props.children}
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let site = use_site();
    let profile = &site.profile;
    let schedule = profile.links.scheduling().map(|url| url.to_owned());

    rsx! {
        section { class: "section",
            Container {
                SectionTitle {
                    id: "contact",
                    icon: IconKind::Mail,
                    title: "Contact Me",
                    subtitle: "Below are the details to reach out to me",
                }
                div { class: "grid grid-3",
                    ContactCard { heading: "Address",
                        p { class: "contact-value", "{profile.address}" }
                    }
                    ContactCard { heading: "Phone",
                        p { class: "contact-value", "{profile.phone}" }
                    }
                    ContactCard { heading: "Email",
                        a { class: "contact-value underline", href: "mailto:{profile.email}", "{profile.email}" }
                    }
                }
                ProfileLinks { resume_label: "Download Resume" }
                {schedule.map(|url| rsx! {
                    div { class: "row",
                        a {
                            href: "{url}",
                            target: "_blank",
                            rel: "noreferrer",
                            class: "btn btn-outline",
                            Icon { kind: IconKind::Calendar }
                            "Schedule a call"
                        }
                    }
                })}
            }
        }
    }
}
