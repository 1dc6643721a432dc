//! The typed value object that drives one flyer render.

use flyer_pdf::Color;
use serde::{Deserialize, Serialize};

use crate::geometry::{Orientation, PageSize};

/// Theme color used when the configured hex value is unusable.
pub const FALLBACK_THEME: Color = Color {
    r: 0.12,
    g: 0.44,
    b: 0.73,
};

/// Maximum number of topic tiles on a flyer.
pub const MAX_TOPICS: usize = 6;

/// One topic tile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topic {
    pub title: String,
    /// Hex accent color; the theme color is used when absent.
    pub color: Option<String>,
}

impl Topic {
    pub fn new(title: &str, color: &str) -> Self {
        Topic {
            title: title.to_string(),
            color: Some(color.to_string()),
        }
    }
}

/// An external link printed as a small QR code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: &str, url: &str) -> Self {
        Link {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    /// Text shown under the code: the label, or the URL without one.
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.url
        } else {
            &self.label
        }
    }
}

/// Fixed wording of the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyerLabels {
    /// Printed before the election date in the badge.
    pub election_prefix: String,
    /// Bold line under the main QR code.
    pub scan_call: String,
    /// Check-marked feature list under the scan call.
    pub features: Vec<String>,
    /// Heading above the link grid.
    pub links_heading: String,
}

impl Default for FlyerLabels {
    fn default() -> Self {
        FlyerLabels {
            election_prefix: "Wahl am".to_string(),
            scan_call: "Jetzt scannen & mitmachen!".to_string(),
            features: vec![
                "Quiz spielen & Wissen testen".to_string(),
                "Zu lokalen Themen abstimmen".to_string(),
                "Persoenliche Nachricht hinterlassen".to_string(),
            ],
            links_heading: "Weitere Links".to_string(),
        }
    }
}

/// Everything a flyer render needs. Every field has a default, so a
/// partial JSON object deserializes into a usable config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyerConfig {
    pub candidate_name: String,
    pub party: String,
    pub tagline: String,
    pub election_date: String,
    pub headline: String,
    pub intro_text: String,
    pub cta_text: String,
    pub cta_sub: String,
    pub website_url: String,
    /// Free-form text; lines starting with `- `, `* ` or `• ` are bullets.
    pub extra_text: String,

    pub show_portrait: bool,
    pub show_logo: bool,
    pub show_qr: bool,
    pub show_headline: bool,
    pub show_intro: bool,
    pub show_cta: bool,
    pub show_election_date: bool,
    pub show_tagline: bool,
    pub show_website_url: bool,
    pub show_topics: bool,
    pub show_links: bool,

    pub topics: Vec<Topic>,
    pub links: Vec<Link>,

    pub page_size: PageSize,
    pub orientation: Orientation,
    pub theme_color: String,

    /// Pre-resolved portrait file; empty means "look up by convention".
    pub portrait_path: String,
    /// Pre-resolved logo file; empty means "look up by convention".
    pub logo_path: String,

    pub labels: FlyerLabels,
}

impl Default for FlyerConfig {
    fn default() -> Self {
        FlyerConfig {
            candidate_name: String::new(),
            party: String::new(),
            tagline: String::new(),
            election_date: String::new(),
            headline: String::new(),
            intro_text: String::new(),
            cta_text: String::new(),
            cta_sub: String::new(),
            website_url: String::new(),
            extra_text: String::new(),
            show_portrait: true,
            show_logo: true,
            show_qr: true,
            show_headline: true,
            show_intro: true,
            show_cta: true,
            show_election_date: true,
            show_tagline: true,
            show_website_url: true,
            show_topics: true,
            show_links: true,
            topics: Vec::new(),
            links: Vec::new(),
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            theme_color: "#1E6FB9".to_string(),
            portrait_path: String::new(),
            logo_path: String::new(),
            labels: FlyerLabels::default(),
        }
    }
}

impl FlyerConfig {
    /// Parsed theme color, or the fallback blue.
    pub fn theme(&self) -> Color {
        Color::from_hex(&self.theme_color).unwrap_or(FALLBACK_THEME)
    }

    /// Accent color of a topic, falling back to the theme.
    pub fn topic_color(&self, topic: &Topic) -> Color {
        topic
            .color
            .as_deref()
            .and_then(Color::from_hex)
            .unwrap_or_else(|| self.theme())
    }

    /// Topics that get a tile; extras are dropped.
    pub fn visible_topics(&self) -> &[Topic] {
        &self.topics[..self.topics.len().min(MAX_TOPICS)]
    }

    /// Links with a non-empty target URL.
    pub fn valid_links(&self) -> Vec<&Link> {
        self.links
            .iter()
            .filter(|link| !link.url.trim().is_empty())
            .collect()
    }

    /// The website URL without its protocol, for display only.
    pub fn display_url(&self) -> &str {
        let url = self.website_url.trim();
        url.strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url)
    }
}
