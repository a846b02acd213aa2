use serde::{Deserialize, Serialize};

pub mod project;
pub mod resume;
pub mod skill;

use project::Project;
use resume::{Certification, Education, Experience, Organization};
use skill::{Highlight, SkillGroup};

// link targets
//
// the content document uses "#" (or nothing at all) for links that have not been filled in
// yet.  these are data, not errors, and the only behavior attached to them is that they are
// not rendered
pub fn is_placeholder_link(url: &str) -> bool {
    let url = url.trim();

    url.is_empty() || url == "#"
}

pub(crate) fn real_link(url: &Option<String>) -> Option<&str> {
    url.as_deref().filter(|u| !is_placeholder_link(u))
}

// the core profile record
//
// this is deserialized once at startup from the embedded site document and shared read-only
// with every section of the page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    // short summary shown next to the location, e.g. "3+ years"
    pub experience: String,
    pub address: String,
    pub about: String,

    pub links: Links,

    #[serde(default)]
    pub facts: Vec<ProfileFact>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience_history: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub awards: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Links {
    pub linkedin: String,
    pub github: String,
    pub resume: String,
    pub schedule: Option<String>,
}

impl Links {
    pub fn scheduling(&self) -> Option<&str> {
        real_link(&self.schedule)
    }
}

// a single "key: value" line in the about section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileFact {
    pub key: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_links() {
        assert!(is_placeholder_link("#"));
        assert!(is_placeholder_link(""));
        assert!(is_placeholder_link("  # "));
        assert!(!is_placeholder_link("https://example.com/demo"));
        assert!(!is_placeholder_link("/resume.pdf"));
    }

    #[test]
    fn scheduling_link_is_filtered() {
        let mut links = Links {
            linkedin: String::from("https://www.linkedin.com/in/someone"),
            github: String::from("#"),
            resume: String::from("/resume.pdf"),
            schedule: None,
        };
        assert_eq!(links.scheduling(), None);

        links.schedule = Some(String::from("#"));
        assert_eq!(links.scheduling(), None);

        links.schedule = Some(String::from("https://cal.example.com/someone"));
        assert_eq!(links.scheduling(), Some("https://cal.example.com/someone"));
    }
}
