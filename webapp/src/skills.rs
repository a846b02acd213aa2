use dioxus::prelude::*;

use crate::{
    common::use_site,
    components::{
        icon::{Icon, IconKind},
        section::{Container, SectionTitle},
    },
};

#[component]
pub fn Skills() -> Element {
    let site = use_site();
    let skills = &site.profile.skills;

    rsx! {
        section { class: "section",
            Container {
                SectionTitle {
                    id: "skills",
                    icon: IconKind::Layers,
                    title: "Skills",
                    subtitle: "Grouped from Resume — clear & scannable",
                }
                div { class: "grid grid-2",
                    for group in skills.iter() {
                        div { key: "{group.group}", class: "card rise-in",
                            h3 { class: "subheading", style: "margin-bottom: var(--space-3);", "{group.group}" }
                            ul { class: "checklist",
                                for skill in group.items.iter() {
                                    li { key: "{skill}",
                                        Icon { kind: IconKind::Check, class: "icon-emerald" }
                                        span { "{skill}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
