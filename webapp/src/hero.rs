use dioxus::prelude::*;

use crate::{
    common::{theme::use_theme, use_site},
    components::{
        icon::{Icon, IconKind},
        profile_image::ProfileImage,
        section::Container,
    },
};

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let profile = &site.profile;
    let accent = use_theme().theme().accent();

    let chip_style = format!("box-shadow: 0 0 0 1px {};", accent.ring);

    rsx! {
        section { id: "home", class: "section hero",
            Container {
                div { class: "hero-grid",
                    div {
                        p { class: "hero-greeting", "Hello!" }
                        h1 { class: "hero-title",
                            "I’m "
                            span {
                                class: "gradient-text",
                                style: "background-image: {accent.text};",
                                "{profile.name}"
                            }
                        }
                        h2 { class: "hero-role", "{profile.role}" }
                        div { class: "row",
                            span { class: "chip", style: "{chip_style}",
                                Icon { kind: IconKind::MapPin }
                                "{profile.location}"
                            }
                            span { class: "chip", style: "{chip_style}",
                                Icon { kind: IconKind::User }
                                "{profile.experience} experience"
                            }
                        }
                        p { class: "hero-about", "{profile.about}" }
                        ProfileLinks {}
                    }
                    div { class: "profile-frame",
                        ProfileImage { alt: profile.name.clone(), class: "profile-image" }
                    }
                }
            }
        }
    }
}

// networking, code and resume links, shared by the hero and contact sections
#[derive(Clone, PartialEq, Props)]
pub struct ProfileLinksProps {
    #[props(default = String::from("Download CV"))]
    resume_label: String,
}

#[component]
pub fn ProfileLinks(props: ProfileLinksProps) -> Element {
    let site = use_site();
    let links = &site.profile.links;
    let accent = use_theme().theme().accent();

    // an unset code-hosting profile is left out rather than linking to "#"
    let github = match content::is_placeholder_link(&links.github) {
        true => None,
        false => Some(links.github.clone()),
    };

    rsx! {
        div { class: "row",
            a {
                href: "{links.linkedin}",
                target: "_blank",
                rel: "noreferrer",
                class: "btn btn-outline",
                Icon { kind: IconKind::Linkedin }
                "LinkedIn"
            }
            {github.map(|github| rsx! {
                a {
                    href: "{github}",
                    target: "_blank",
                    rel: "noreferrer",
                    class: "btn btn-outline",
                    Icon { kind: IconKind::Github }
                    "GitHub"
                }
            })}
            a {
                href: "{links.resume}",
                class: "btn btn-accent",
                style: "background-image: {accent.button};",
                Icon { kind: IconKind::Download }
                "{props.resume_label}"
            }
        }
    }
}
