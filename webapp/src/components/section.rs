use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};

#[derive(Clone, PartialEq, Props)]
pub struct ContainerProps {
    children: Element,
}

#[component]
pub fn Container(props: ContainerProps) -> Element {
    rsx! {
        div { class: "container", {props.children} }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SectionTitleProps {
    // anchor target for the navigation links
    id: String,
    icon: IconKind,
    title: String,
    // left out when empty
    #[props(default)]
    subtitle: String,
}

#[component]
pub fn SectionTitle(props: SectionTitleProps) -> Element {
    rsx! {
        div { id: "{props.id}", class: "section-header",
            div { class: "section-heading",
                Icon { kind: props.icon, class: "icon-lg" }
                h2 { "{props.title}" }
                Icon { kind: IconKind::Sparkles, class: "icon-cyan" }
            }
            if !props.subtitle.is_empty() {
                p { class: "section-subtitle", "{props.subtitle}" }
            }
        }
    }
}
