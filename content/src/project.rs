use serde::{Deserialize, Serialize};

use crate::real_link;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub tech: String,
    pub impact: String,
    pub blurb: String,
    #[serde(default)]
    pub links: ProjectLinks,
}

// optional outbound links for a project card
//
// the accessors drop placeholder targets so the card can simply skip the link
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub code: Option<String>,
    pub demo: Option<String>,
}

impl ProjectLinks {
    pub fn code(&self) -> Option<&str> {
        real_link(&self.code)
    }

    pub fn demo(&self) -> Option<&str> {
        real_link(&self.demo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_project_links_are_omitted() {
        let links = ProjectLinks {
            code: Some(String::from("#")),
            demo: Some(String::from("https://demo.example.com")),
        };

        assert_eq!(links.code(), None);
        assert_eq!(links.demo(), Some("https://demo.example.com"));
        assert_eq!(ProjectLinks::default().demo(), None);
    }
}
