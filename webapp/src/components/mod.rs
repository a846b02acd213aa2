pub mod icon;
pub mod navigation;
pub mod profile_image;
pub mod section;
pub mod stat_card;
