use std::sync::Arc;

use chrono::{Datelike, Local};
use dioxus::prelude::*;

use portfolio_common::config::Site;

pub mod storage;
pub mod style;
pub mod theme;

// the parsed site document, provided to the app at launch
pub fn use_site() -> Arc<Site> {
    use_context::<Arc<Site>>()
}

pub fn current_year() -> i32 {
    Local::now().year()
}
