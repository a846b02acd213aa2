use std::sync::Arc;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use content::Profile;

// the site document, baked into the binary so the page has no runtime file or network
// dependencies for its own content
pub const SITE_TOML: &str = include_str!("../site.toml");

// portfolio configuration
//
// this struct contains the handful of knobs the web app needs besides the content itself
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub images: ImageConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StorageConfig {
    // keys written to browser storage are namespaced with this prefix, unless it is empty
    #[serde(default)]
    pub prefix: String,
    pub theme_key: String,
}

impl StorageConfig {
    pub fn key(&self, name: &str) -> String {
        match self.prefix.as_str() {
            "" => name.to_owned(),
            prefix => format!("{prefix}_{name}"),
        }
    }

    pub fn theme_storage_key(&self) -> String {
        self.key(&self.theme_key)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ImageConfig {
    // candidate locations for the profile picture, in the order they should be tried
    #[serde(default)]
    pub profile: Vec<String>,
}

// everything the page needs, shared read-only by every component
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Site {
    pub config: SiteConfig,
    pub profile: Profile,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_site(doc: &str) -> anyhow::Result<Arc<Site>> {
    debug!("parsing site document");

    let site: Site = toml::from_str(doc).context("failed to parse site document")?;

    debug!(
        projects = site.profile.projects.len(),
        images = site.config.images.profile.len(),
        "successfully parsed site document"
    );
    Ok(Arc::new(site))
}

pub fn embedded_site() -> anyhow::Result<Arc<Site>> {
    read_site(SITE_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
        [config.storage]
        prefix = "test"
        theme_key = "theme"

        [profile]
        name = "Jane Doe"
        role = "Engineer"
        location = "Nowhere"
        email = "jane@example.com"
        phone = "555-0100"
        experience = "1 year"
        address = "Nowhere, Earth"
        about = "Writes code."

        [profile.links]
        linkedin = "https://www.linkedin.com/in/jane"
        github = "#"
        resume = "/jane.pdf"
    "##;

    #[test]
    fn minimal_document() {
        let site = read_site(MINIMAL).unwrap();

        assert_eq!(site.profile.name, "Jane Doe");
        assert!(site.config.images.profile.is_empty());
        assert!(site.profile.projects.is_empty());
        assert!(site.profile.awards.is_empty());
        assert_eq!(site.config.storage.theme_storage_key(), "test_theme");
    }

    #[test]
    fn images_table_is_optional() {
        let doc = MINIMAL.replace(
            "[config.storage]",
            "[config.images]\nprofile = [\"/me.png\"]\n\n[config.storage]",
        );

        let site = read_site(&doc).unwrap();
        assert_eq!(site.config.images.profile, vec![String::from("/me.png")]);

        let site = read_site(MINIMAL).unwrap();
        assert_eq!(site.config.images, ImageConfig::default());
    }

    #[test]
    fn storage_keys() {
        let mut storage = StorageConfig {
            prefix: String::from("portfolio"),
            theme_key: String::from("theme"),
        };
        assert_eq!(storage.theme_storage_key(), "portfolio_theme");

        storage.prefix.clear();
        assert_eq!(storage.theme_storage_key(), "theme");
        assert_eq!(storage.key("other"), "other");
    }

    #[test]
    fn missing_profile_is_an_error() {
        let doc = r#"
            [config.storage]
            prefix = "test"
            theme_key = "theme"
        "#;

        let err = read_site(doc).unwrap_err();
        assert!(err.to_string().contains("site document"));
    }

    #[test]
    fn embedded_document_parses() {
        let site = embedded_site().unwrap();
        let profile = &site.profile;

        assert_eq!(site.config.storage.theme_storage_key(), "theme");
        assert_eq!(site.config.images.profile.first().map(|s| s.as_str()), Some("/profile.png"));
        assert_eq!(site.config.images.profile.len(), 6);

        assert!(!profile.name.is_empty());
        assert_eq!(profile.projects.len(), 4);
        assert_eq!(profile.experience_history.len(), 3);
        assert_eq!(profile.certifications.len(), 5);
        assert_eq!(profile.organizations.len(), 2);
        assert_eq!(profile.awards.len(), 3);
        assert_eq!(profile.highlights.len(), 3);
        assert_eq!(profile.skills.len(), 5);
    }

    #[test]
    fn embedded_placeholder_links_are_not_rendered() {
        let site = embedded_site().unwrap();

        for project in &site.profile.projects {
            assert_eq!(project.links.code(), None, "{}", project.title);
            assert_eq!(project.links.demo(), None, "{}", project.title);
        }
        assert!(content::is_placeholder_link(&site.profile.links.github));
        assert_eq!(site.profile.links.scheduling(), None);
    }
}
