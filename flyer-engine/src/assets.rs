//! Locating and decoding tenant images.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use flyer_pdf::{load_image, ImageData};
use image::ImageError;
use resvg::usvg::fontdb;
use resvg::{tiny_skia, usvg};
use tracing::{debug, warn};

use crate::error::{AssetError, FlyerError, Result};
use crate::settings::EngineSettings;

/// Logo extensions tried in a tenant's upload directory, in order.
pub const LOGO_EXTENSIONS: [&str; 5] = ["svg", "png", "jpg", "jpeg", "webp"];

/// Shared fallback logos in the static directory, in order.
pub const STATIC_LOGOS: [&str; 4] = ["logo.svg", "logo.png", "spd-logo.svg", "spd-logo.png"];

/// Portrait file name inside a tenant's upload directory.
pub const PORTRAIT_FILE: &str = "portrait.jpg";

/// Preferred families behind the generic `sans-serif` and `serif`
/// names in SVG text, first installed one wins.
const SANS_FAMILIES: [&str; 4] = ["DejaVu Sans", "Liberation Sans", "Arial", "Helvetica"];
const SERIF_FAMILIES: [&str; 4] = ["DejaVu Serif", "Liberation Serif", "Times New Roman", "Times"];

/// What an image is used for on the flyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetPurpose {
    Portrait,
    Logo,
}

/// Finds and decodes uploaded images.
///
/// Holds only read-only state, so one resolver can be shared by every
/// concurrent render. The font database used for SVG text is loaded
/// once, when the resolver is built.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    upload_base: PathBuf,
    static_dir: PathBuf,
    fonts: Arc<fontdb::Database>,
}

impl AssetResolver {
    /// Resolver with the system fonts for SVG text.
    pub fn new(upload_base: impl Into<PathBuf>, static_dir: impl Into<PathBuf>) -> Self {
        AssetResolver::with_fonts(upload_base, static_dir, Arc::new(system_fonts()))
    }

    /// Resolver sharing an already loaded font database.
    pub fn with_fonts(
        upload_base: impl Into<PathBuf>,
        static_dir: impl Into<PathBuf>,
        fonts: Arc<fontdb::Database>,
    ) -> Self {
        AssetResolver {
            upload_base: upload_base.into(),
            static_dir: static_dir.into(),
            fonts,
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        AssetResolver::new(&settings.upload_base, &settings.static_dir)
    }

    /// Upload directory of a tenant. Identifiers that could escape the
    /// upload base are refused.
    pub fn tenant_dir(&self, tenant: &str) -> Option<PathBuf> {
        let unsafe_char = |c: char| c == '/' || c == '\\' || c == '\0';
        if tenant.is_empty() || tenant == "." || tenant == ".." || tenant.contains(unsafe_char) {
            return None;
        }
        Some(self.upload_base.join(tenant))
    }

    /// Find the file for `purpose`. An existing `explicit` path wins;
    /// otherwise the tenant's uploads are searched by convention, and
    /// for logos the static fallbacks last.
    pub fn resolve(&self, tenant: &str, purpose: AssetPurpose, explicit: &str) -> Option<PathBuf> {
        if !explicit.is_empty() {
            let path = PathBuf::from(explicit);
            if path.is_file() {
                return Some(path);
            }
            debug!(path = explicit, "configured asset path does not exist");
        }

        let tenant_dir = self.tenant_dir(tenant);
        match purpose {
            AssetPurpose::Portrait => tenant_dir
                .map(|dir| dir.join(PORTRAIT_FILE))
                .filter(|path| path.is_file()),
            AssetPurpose::Logo => {
                let uploaded = tenant_dir.and_then(|dir| {
                    LOGO_EXTENSIONS
                        .iter()
                        .map(|ext| dir.join(format!("logo.{ext}")))
                        .find(|path| path.is_file())
                });
                uploaded.or_else(|| {
                    STATIC_LOGOS
                        .iter()
                        .map(|name| self.static_dir.join(name))
                        .find(|path| path.is_file())
                })
            }
        }
    }

    /// Resolve and decode in one step.
    pub fn image(
        &self,
        tenant: &str,
        purpose: AssetPurpose,
        explicit: &str,
        target_px: u32,
    ) -> Result<Option<ImageData>> {
        match self.resolve(tenant, purpose, explicit) {
            Some(path) => self.load(&path, target_px),
            None => Ok(None),
        }
    }

    /// Decode an image file. SVG is rasterized to fit a `target_px`
    /// square; raster formats keep their own resolution.
    ///
    /// Unreadable or undecodable files are logged and reported as
    /// `Ok(None)`. Only exhausted decoder limits are errors.
    pub fn load(&self, path: &Path, target_px: u32) -> Result<Option<ImageData>> {
        let decoded = if is_svg(path) {
            rasterize_svg(path, target_px, &self.fonts)
        } else {
            decode_raster(path)
        };
        match decoded {
            Ok(image) => Ok(Some(image)),
            Err(AssetError::Limits { path, reason }) => {
                Err(FlyerError::ResourceLimit { path, reason })
            }
            Err(err) => {
                warn!(error = %err, "skipping unusable image");
                Ok(None)
            }
        }
    }
}

/// System fonts with the generic families pointed at installed faces.
fn system_fonts() -> fontdb::Database {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let sans = first_installed(&db, &SANS_FAMILIES);
    let serif = first_installed(&db, &SERIF_FAMILIES).or_else(|| sans.clone());
    if let Some(family) = sans {
        db.set_sans_serif_family(family);
    }
    if let Some(family) = serif {
        db.set_serif_family(family);
    }
    debug!(faces = db.len(), "loaded system fonts");
    db
}

/// First of `candidates` with an installed face, else the family of
/// any installed face.
fn first_installed(db: &fontdb::Database, candidates: &[&str]) -> Option<String> {
    let installed = |name: &str| {
        db.faces()
            .any(|face| face.families.iter().any(|(family, _)| family == name))
    };
    candidates
        .iter()
        .find(|&&name| installed(name))
        .map(|name| name.to_string())
        .or_else(|| {
            db.faces()
                .find_map(|face| face.families.first())
                .map(|(family, _)| family.clone())
        })
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn read(path: &Path) -> std::result::Result<Vec<u8>, AssetError> {
    fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// JPEG and PNG go through the PDF layer's own loader (JPEG stays
/// compressed); everything else is decoded with `image`.
fn decode_raster(path: &Path) -> std::result::Result<ImageData, AssetError> {
    let bytes = read(path)?;
    if let Ok(image) = load_image(bytes.clone()) {
        return Ok(image);
    }

    let decoded = image::load_from_memory(&bytes).map_err(|err| match err {
        ImageError::Limits(limit) => AssetError::Limits {
            path: path.to_path_buf(),
            reason: limit.to_string(),
        },
        other => AssetError::Decode {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    })?;
    let rgba = decoded.to_rgba8();
    ImageData::from_rgba(rgba.width(), rgba.height(), rgba.as_raw()).map_err(|reason| {
        AssetError::Decode {
            path: path.to_path_buf(),
            reason,
        }
    })
}

fn rasterize_svg(
    path: &Path,
    target_px: u32,
    fonts: &Arc<fontdb::Database>,
) -> std::result::Result<ImageData, AssetError> {
    let data = read(path)?;
    let svg_error = |reason: String| AssetError::Svg {
        path: path.to_path_buf(),
        reason,
    };

    // Text without a usable font-family falls back to the sans face.
    let options = usvg::Options {
        font_family: fonts.family_name(&fontdb::Family::SansSerif).to_string(),
        fontdb: Arc::clone(fonts),
        ..usvg::Options::default()
    };
    let tree =
        usvg::Tree::from_data(&data, &options).map_err(|e| svg_error(e.to_string()))?;

    let px = target_px.max(1);
    let size = tree.size();
    let (w, h) = (size.width(), size.height());
    if w <= 0.0 || h <= 0.0 {
        return Err(svg_error("empty canvas".to_string()));
    }
    let scale = (px as f32 / w).min(px as f32 / h);
    let dx = (px as f32 - w * scale) / 2.0;
    let dy = (px as f32 - h * scale) / 2.0;

    let mut pixmap = tiny_skia::Pixmap::new(px, px).ok_or_else(|| AssetError::Limits {
        path: path.to_path_buf(),
        reason: format!("cannot allocate {px}x{px} pixmap"),
    })?;
    let transform = tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, dx, dy);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    ImageData::from_rgba(px, px, &rgba).map_err(svg_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_dir_refuses_traversal() {
        let resolver = AssetResolver::new("/data/uploads", "/static");
        assert!(resolver.tenant_dir("..").is_none());
        assert!(resolver.tenant_dir("a/../../etc").is_none());
        assert!(resolver.tenant_dir("").is_none());
        assert_eq!(
            resolver.tenant_dir("jane-doe"),
            Some(PathBuf::from("/data/uploads/jane-doe"))
        );
    }

    #[test]
    fn svg_detection_ignores_case() {
        assert!(is_svg(Path::new("logo.SVG")));
        assert!(!is_svg(Path::new("logo.png")));
    }

    #[test]
    fn missing_file_is_skipped() {
        let resolver = AssetResolver::with_fonts("/data", "/static", Arc::default());
        let result = resolver.load(Path::new("/nonexistent/logo.png"), 100).unwrap();
        assert!(result.is_none());
    }
}
