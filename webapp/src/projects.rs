use dioxus::prelude::*;

use content::project::Project;

use crate::{
    common::use_site,
    components::{
        icon::{Icon, IconKind},
        section::{Container, SectionTitle},
    },
};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    // placeholder targets are dropped by the accessors, so these only render real links
    let demo = project.links.demo().map(|url| url.to_owned());
    let code = project.links.code().map(|url| url.to_owned());

    rsx! {
        article { class: "card lift-lg project",
            h3 { style: "font-weight: 600;", "{project.title}" }
            p { class: "project-blurb", "{project.blurb}" }
            div { style: "margin-top: var(--space-3);",
                div { class: "project-detail",
                    Icon { kind: IconKind::Code, class: "icon-cyan" }
                    span {
                        strong { "Tech:" }
                        " {project.tech}"
                    }
                }
                div { class: "project-detail",
                    Icon { kind: IconKind::TrendingUp, class: "icon-teal" }
                    span {
                        strong { "Impact:" }
                        " {project.impact}"
                    }
                }
            }
            div { class: "project-links",
                {demo.map(|url| rsx! {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noreferrer",
                        class: "underline",
                        Icon { kind: IconKind::ExternalLink }
                        " Demo"
                    }
                })}
                {code.map(|url| rsx! {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noreferrer",
                        class: "underline",
                        Icon { kind: IconKind::Code }
                        " Code"
                    }
                })}
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let site = use_site();
    let projects = &site.profile.projects;

    rsx! {
        section { class: "section",
            Container {
                SectionTitle {
                    id: "projects",
                    icon: IconKind::Code,
                    title: "Projects",
                    subtitle: "A selection of work in ML, Analytics, and BI",
                }
                div { class: "grid grid-3",
                    for project in projects.iter() {
                        ProjectCard { key: "{project.title}", project: project.clone() }
                    }
                }
            }
        }
    }
}
