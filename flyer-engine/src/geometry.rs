//! Page geometry: physical units, page formats and the uniform scale
//! factor that shrinks typography on smaller formats.

use serde::{Deserialize, Serialize};

/// Points per millimetre (PDF user space is 1/72 inch).
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Convert millimetres to points.
pub fn mm(v: f64) -> f64 {
    v * POINTS_PER_MM
}

/// Supported paper formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PageSize {
    #[default]
    A4,
    A5,
    A6,
}

impl PageSize {
    /// Parse a format name case-insensitively. Anything unrecognised
    /// falls back to A4, the largest format.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "a5" => PageSize::A5,
            "a6" => PageSize::A6,
            _ => PageSize::A4,
        }
    }

    /// Portrait (width, height) in millimetres.
    pub fn millimetres(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::A5 => (148.0, 210.0),
            PageSize::A6 => (105.0, 148.0),
        }
    }

    /// Page (width, height) in points for the given orientation.
    pub fn dimensions(&self, orientation: Orientation) -> (f64, f64) {
        let (w, h) = self.millimetres();
        match orientation {
            Orientation::Portrait => (mm(w), mm(h)),
            Orientation::Landscape => (mm(h), mm(w)),
        }
    }
}

impl From<String> for PageSize {
    fn from(s: String) -> Self {
        PageSize::parse(&s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Only "landscape" selects landscape; everything else is portrait.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("landscape") {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

impl From<String> for Orientation {
    fn from(s: String) -> Self {
        Orientation::parse(&s)
    }
}

/// Uniform scale of a page against portrait A4:
/// `min(w / A4_w, h / A4_h)`.
pub fn scale_for(width: f64, height: f64) -> f64 {
    let (ref_w, ref_h) = PageSize::A4.dimensions(Orientation::Portrait);
    (width / ref_w).min(height / ref_h)
}

/// A size that shrinks with the page but stays within
/// `[floor, base]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaled {
    pub base: f64,
    pub floor: f64,
}

impl Scaled {
    pub const fn new(base: f64, floor: f64) -> Self {
        Scaled { base, floor }
    }

    /// Effective size at `scale`.
    pub fn at(&self, scale: f64) -> f64 {
        (self.base * scale).min(self.base).max(self.floor)
    }
}

/// Font sizes of the flyer template, in points.
pub mod type_scale {
    use super::Scaled;

    pub const NAME: Scaled = Scaled::new(22.0, 12.0);
    pub const PARTY: Scaled = Scaled::new(11.0, 7.0);
    pub const BADGE: Scaled = Scaled::new(10.0, 7.0);
    pub const TAGLINE: Scaled = Scaled::new(10.0, 7.0);
    pub const HEADLINE: Scaled = Scaled::new(22.0, 12.0);
    pub const INTRO: Scaled = Scaled::new(10.0, 7.0);
    pub const SCAN_LABEL: Scaled = Scaled::new(13.0, 9.0);
    pub const FEATURE: Scaled = Scaled::new(9.0, 6.0);
    pub const TOPIC: Scaled = Scaled::new(9.0, 6.0);
    pub const EXTRA: Scaled = Scaled::new(9.0, 6.0);
    pub const CTA: Scaled = Scaled::new(11.0, 8.0);
    pub const CTA_SUB: Scaled = Scaled::new(8.0, 6.0);
    pub const LINK_SECTION: Scaled = Scaled::new(7.0, 5.0);
    pub const LINK_LABEL: Scaled = Scaled::new(6.0, 5.0);
    pub const WEBSITE: Scaled = Scaled::new(8.0, 6.0);

    pub const ALL: [Scaled; 15] = [
        NAME,
        PARTY,
        BADGE,
        TAGLINE,
        HEADLINE,
        INTRO,
        SCAN_LABEL,
        FEATURE,
        TOPIC,
        EXTRA,
        CTA,
        CTA_SUB,
        LINK_SECTION,
        LINK_LABEL,
        WEBSITE,
    ];
}

/// Per-render layout state: page metrics plus the vertical cursor.
/// The cursor starts at the top edge and only ever moves down.
#[derive(Debug, Clone)]
pub(crate) struct RenderContext {
    pub page_width: f64,
    pub page_height: f64,
    pub scale: f64,
    pub margin: f64,
    pub content_width: f64,
    cursor: f64,
}

impl RenderContext {
    pub fn new(size: PageSize, orientation: Orientation) -> Self {
        let (page_width, page_height) = size.dimensions(orientation);
        let margin = mm(15.0);
        RenderContext {
            page_width,
            page_height,
            scale: scale_for(page_width, page_height),
            margin,
            content_width: page_width - 2.0 * margin,
            cursor: page_height,
        }
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Move the cursor down by `dy`. Negative steps are ignored.
    pub fn advance(&mut self, dy: f64) {
        self.cursor -= dy.max(0.0);
    }

    /// Move the cursor down to `y` if it is currently above it.
    pub fn lower_to(&mut self, y: f64) {
        self.cursor = self.cursor.min(y);
    }

    /// `v` millimetres multiplied by the page scale.
    pub fn smm(&self, v: f64) -> f64 {
        mm(v) * self.scale
    }

    pub fn font(&self, size: Scaled) -> f64 {
        size.at(self.scale)
    }

    /// Nothing but the footer may be placed below this line.
    pub fn bottom_limit(&self) -> f64 {
        mm(8.0)
    }
}
