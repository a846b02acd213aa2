use dioxus::prelude::*;

use portfolio_common::image::{FallbackCursor, placeholder_data_url};

use crate::common::use_site;

#[derive(Clone, PartialEq, Props)]
pub struct ProfileImageProps {
    alt: String,
    #[props(default)]
    class: String,
}

// profile picture with fallbacks
//
// tries each configured location in order, moving on whenever the browser reports a load
// error, and finally settles on the generated placeholder.  the cursor is local to this
// component instance
#[component]
pub fn ProfileImage(props: ProfileImageProps) -> Element {
    let site = use_site();
    let candidates = &site.config.images.profile;

    let mut cursor = use_signal(|| FallbackCursor::new(candidates.len()));

    let src = cursor.read().source(candidates.as_slice(), placeholder_data_url()).to_owned();

    rsx! {
        img {
            src: "{src}",
            alt: "{props.alt}",
            class: "{props.class}",
            onerror: move |_| cursor.write().advance(),
        }
    }
}
