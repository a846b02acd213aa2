use serde::{Deserialize, Serialize};

use crate::real_link;

// one entry in the experience timeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub year: String,
    pub place: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default)]
    pub year: String,
    pub url: Option<String>,
}

impl Certification {
    pub fn verify_link(&self) -> Option<&str> {
        real_link(&self.url)
    }

    // "issuer • year", or just the issuer when no year was recorded
    pub fn byline(&self) -> String {
        match self.year.trim() {
            "" => self.issuer.clone(),
            year => format!("{} • {}", self.issuer, year),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub org: String,
    pub role: String,
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(year: &str, url: Option<&str>) -> Certification {
        Certification {
            name: String::from("Cloud Practitioner Essentials"),
            issuer: String::from("AWS"),
            year: year.to_owned(),
            url: url.map(|u| u.to_owned()),
        }
    }

    #[test]
    fn byline_omits_missing_year() {
        assert_eq!(cert("2025", None).byline(), "AWS • 2025");
        assert_eq!(cert("", None).byline(), "AWS");
        assert_eq!(cert("—", None).byline(), "AWS • —");
    }

    #[test]
    fn verify_link() {
        assert_eq!(cert("2025", None).verify_link(), None);
        assert_eq!(cert("2025", Some("#")).verify_link(), None);
        assert_eq!(
            cert("2025", Some("https://verify.example.com/123")).verify_link(),
            Some("https://verify.example.com/123")
        );
    }
}
