use dioxus::prelude::*;

use crate::{
    common::use_site,
    components::{
        icon::IconKind,
        section::{Container, SectionTitle},
    },
};

#[component]
pub fn About() -> Element {
    let site = use_site();
    let profile = &site.profile;

    rsx! {
        section { class: "section",
            Container {
                SectionTitle { id: "about", icon: IconKind::User, title: "About Me" }
                div { class: "grid grid-2",
                    p { style: "color: var(--text-secondary);", "{profile.about}" }
                    ul { class: "fact-list",
                        for fact in profile.facts.iter() {
                            li { key: "{fact.key}", class: "card card-sm lift-sm",
                                span { class: "fact-key", "{fact.key}: " }
                                "{fact.value}"
                            }
                        }
                    }
                }
            }
        }
    }
}
