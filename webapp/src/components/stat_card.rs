use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};

#[derive(Clone, PartialEq, Props)]
pub struct StatCardProps {
    icon: IconKind,
    // color modifier for the icon
    #[props(default)]
    tint: String,
    label: String,
    value: String,
    #[props(default)]
    sub: String,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div { class: "card lift",
            div { class: "stat",
                Icon { kind: props.icon, class: "{props.tint}" }
                div {
                    p { class: "muted", "{props.label}" }
                    p { class: "stat-value", "{props.value}" }
                }
            }
            if !props.sub.is_empty() {
                p { class: "stat-sub", "{props.sub}" }
            }
        }
    }
}
