use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconKind {
    Award,
    Book,
    Briefcase,
    Calendar,
    Check,
    Code,
    Download,
    ExternalLink,
    Gauge,
    Github,
    Layers,
    Linkedin,
    Mail,
    MapPin,
    Medal,
    Moon,
    Sparkles,
    Sun,
    TrendingUp,
    User,
}

impl IconKind {
    fn glyph(self) -> &'static str {
        match self {
            Self::Award => "🏅",
            Self::Book => "📖",
            Self::Briefcase => "💼",
            Self::Calendar => "📅",
            Self::Check => "✔",
            Self::Code => "</>",
            Self::Download => "⤓",
            Self::ExternalLink => "↗",
            Self::Gauge => "◔",
            Self::Github => "⌥",
            Self::Layers => "☰",
            Self::Linkedin => "in",
            Self::Mail => "✉",
            Self::MapPin => "⌖",
            Self::Medal => "🎖",
            Self::Moon => "☾",
            Self::Sparkles => "✦",
            Self::Sun => "☀",
            Self::TrendingUp => "↗",
            Self::User => "👤",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    kind: IconKind,
    // extra classes, e.g. a size or color modifier
    #[props(default)]
    class: String,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let glyph = props.kind.glyph();

    rsx! {
        span {
            class: "icon {props.class}",
            aria_hidden: "true",
            "{glyph}"
        }
    }
}
