use dioxus::prelude::*;

use content::resume::Certification;

use crate::{
    common::use_site,
    components::{
        icon::{Icon, IconKind},
        section::{Container, SectionTitle},
    },
};

#[derive(Clone, PartialEq, Props)]
struct CertificationItemProps {
    certification: Certification,
}

#[component]
fn CertificationItem(props: CertificationItemProps) -> Element {
    let certification = props.certification;
    let byline = certification.byline();
    let verify = certification.verify_link().map(|url| url.to_owned());

    rsx! {
        li { class: "card card-sm lift-sm cert",
            div { class: "cert-body",
                Icon { kind: IconKind::Award, class: "icon-emerald" }
                div { style: "min-width: 0;",
                    p { class: "truncate", style: "font-weight: 500;", "{certification.name}" }
                    p { class: "muted truncate", "{byline}" }
                }
            }
            match verify {
                Some(url) => rsx! {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noreferrer",
                        class: "muted underline",
                        "Verify"
                    }
                },
                None => rsx! {
                    span { class: "muted", style: "color: var(--text-disabled);", "add link" }
                },
            }
        }
    }
}

#[component]
pub fn Certifications() -> Element {
    let site = use_site();
    let certifications = &site.profile.certifications;

    rsx! {
        section { class: "section",
            Container {
                SectionTitle { id: "certifications", icon: IconKind::Book, title: "Certifications" }
                ul { class: "grid grid-2", style: "gap: var(--space-4); list-style: none;",
                    for certification in certifications.iter() {
                        CertificationItem { key: "{certification.name}", certification: certification.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn OrganizationsAndAwards() -> Element {
    let site = use_site();
    let profile = &site.profile;

    rsx! {
        section { class: "section",
            Container {
                SectionTitle { id: "orgs", icon: IconKind::Medal, title: "Organizations & Awards" }
                div { class: "grid grid-2", style: "gap: var(--space-8);",
                    div {
                        h3 { class: "subheading", style: "margin-bottom: var(--space-3);", "Organizations" }
                        ul { class: "stack",
                            for (i, organization) in profile.organizations.iter().enumerate() {
                                li { key: "{i}", class: "card card-sm lift-sm",
                                    h4 { style: "font-weight: 500;", "{organization.role}" }
                                    p { style: "color: var(--text-secondary);", "{organization.org}" }
                                    p { class: "muted", style: "margin-top: var(--space-1);", "{organization.details}" }
                                }
                            }
                        }
                    }
                    div {
                        h3 { class: "subheading", style: "margin-bottom: var(--space-3);", "Awards" }
                        ul { class: "stack", style: "gap: var(--space-3);",
                            for (i, award) in profile.awards.iter().enumerate() {
                                li { key: "{i}", class: "award nudge",
                                    Icon { kind: IconKind::Award, class: "icon-cyan" }
                                    "{award}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
