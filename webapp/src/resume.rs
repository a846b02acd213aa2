use dioxus::prelude::*;

use content::resume::{Education, Experience};

use crate::{
    common::use_site,
    components::{
        icon::IconKind,
        section::{Container, SectionTitle},
        stat_card::StatCard,
    },
};

#[derive(Clone, PartialEq, Props)]
struct TimelineEntryProps {
    entry: Experience,
}

#[component]
fn TimelineEntry(props: TimelineEntryProps) -> Element {
    let entry = props.entry;

    rsx! {
        li { class: "timeline-item",
            div { class: "timeline-period",
                span { class: "timeline-dot" }
                p { "{entry.period}" }
            }
            h4 { style: "margin-top: var(--space-1);", "{entry.title} — {entry.company}" }
            ul { class: "bullets",
                for (i, bullet) in entry.bullets.iter().enumerate() {
                    li { key: "{i}", "{bullet}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct EducationCardProps {
    education: Education,
}

#[component]
fn EducationCard(props: EducationCardProps) -> Element {
    let education = props.education;

    rsx! {
        div { class: "card lift",
            h4 { "{education.school}" }
            p { class: "contact-value", style: "color: var(--text-secondary);", "{education.degree}" }
            p { class: "contact-value", "{education.place} — {education.year}" }
        }
    }
}

#[component]
pub fn Resume() -> Element {
    let site = use_site();
    let profile = &site.profile;

    rsx! {
        section { class: "section",
            Container {
                SectionTitle {
                    id: "resume",
                    icon: IconKind::Briefcase,
                    title: "Resume",
                    subtitle: "Experience & Education",
                }
                div { class: "grid grid-2",
                    div {
                        h3 { class: "subheading", "Experience" }
                        ul { class: "timeline",
                            span { class: "timeline-line" }
                            for (i, entry) in profile.experience_history.iter().enumerate() {
                                TimelineEntry { key: "{i}", entry: entry.clone() }
                            }
                        }
                    }
                    div {
                        h3 { class: "subheading", "Education" }
                        div { class: "grid", style: "gap: var(--space-4);",
                            for education in profile.education.iter() {
                                EducationCard { key: "{education.school}", education: education.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

// recruiter highlights
//
// the stat cards cycle through a fixed set of icons so the row reads well regardless of
// how many highlights the document lists
const HIGHLIGHT_ICONS: [(IconKind, &str); 3] = [
    (IconKind::Gauge, "icon-cyan"),
    (IconKind::TrendingUp, "icon-teal"),
    (IconKind::Award, "icon-blue"),
];

#[component]
pub fn Highlights() -> Element {
    let site = use_site();
    let highlights = &site.profile.highlights;

    if highlights.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "section section-tinted",
            Container {
                div { class: "grid grid-3", style: "gap: var(--space-4);",
                    for (i, highlight) in highlights.iter().enumerate() {
                        StatCard {
                            key: "{i}",
                            icon: HIGHLIGHT_ICONS[i % HIGHLIGHT_ICONS.len()].0,
                            tint: HIGHLIGHT_ICONS[i % HIGHLIGHT_ICONS.len()].1.to_owned(),
                            label: highlight.label.clone(),
                            value: highlight.value.clone(),
                            sub: highlight.detail.clone().unwrap_or_default(),
                        }
                    }
                }
            }
        }
    }
}
