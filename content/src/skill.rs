use serde::{Deserialize, Serialize};

// a named group of skill labels, rendered as one checklist tile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub group: String,
    pub items: Vec<String>,
}

// recruiter highlight card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub detail: Option<String>,
}
