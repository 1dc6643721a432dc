use std::fs;
use std::path::{Path, PathBuf};

use flyer_engine::{AssetPurpose, AssetResolver};

const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100">
  <rect width="200" height="100" fill="#ff0000"/>
</svg>"##;

const WORDMARK_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100">
  <text x="10" y="80" font-family="sans-serif" font-size="80" fill="#e3000f">SPD</text>
</svg>"##;

struct Fixture {
    _dir: tempfile::TempDir,
    root: PathBuf,
    resolver: AssetResolver,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        fs::create_dir_all(root.join("uploads").join("jane")).unwrap();
        fs::create_dir_all(root.join("static")).unwrap();
        let resolver = AssetResolver::new(root.join("uploads"), root.join("static"));
        Fixture {
            _dir: dir,
            root,
            resolver,
        }
    }

    fn resolver(&self) -> &AssetResolver {
        &self.resolver
    }

    fn load(&self, path: &Path) -> Option<flyer_pdf::ImageData> {
        self.resolver.load(path, 400).unwrap()
    }

    fn tenant(&self, name: &str) -> PathBuf {
        self.root.join("uploads").join("jane").join(name)
    }

    fn shared(&self, name: &str) -> PathBuf {
        self.root.join("static").join(name)
    }
}

fn write_png(path: &Path) {
    image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 128, 0, 255]))
        .save(path)
        .unwrap();
}

// -------------------------------------------------------
// Search order
// -------------------------------------------------------

#[test]
fn tenant_logo_prefers_svg() {
    let fx = Fixture::new();
    write_png(&fx.tenant("logo.png"));
    fs::write(fx.tenant("logo.svg"), WIDE_SVG).unwrap();
    let found = fx.resolver().resolve("jane", AssetPurpose::Logo, "");
    assert_eq!(found, Some(fx.tenant("logo.svg")));
}

#[test]
fn static_logo_is_the_fallback() {
    let fx = Fixture::new();
    write_png(&fx.shared("spd-logo.png"));
    write_png(&fx.shared("logo.png"));
    let found = fx.resolver().resolve("jane", AssetPurpose::Logo, "");
    assert_eq!(found, Some(fx.shared("logo.png")));
}

#[test]
fn explicit_path_wins_when_present() {
    let fx = Fixture::new();
    write_png(&fx.tenant("logo.png"));
    let custom = fx.root.join("custom.png");
    write_png(&custom);
    let resolver = fx.resolver();

    let explicit = custom.to_str().unwrap();
    assert_eq!(resolver.resolve("jane", AssetPurpose::Logo, explicit), Some(custom.clone()));

    // A stale explicit path falls back to the conventions.
    let missing = fx.root.join("gone.png");
    assert_eq!(
        resolver.resolve("jane", AssetPurpose::Logo, missing.to_str().unwrap()),
        Some(fx.tenant("logo.png"))
    );
}

#[test]
fn portrait_has_no_static_fallback() {
    let fx = Fixture::new();
    write_png(&fx.shared("portrait.jpg"));
    assert!(fx.resolver().resolve("jane", AssetPurpose::Portrait, "").is_none());

    image::RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3]))
        .save(fx.tenant("portrait.jpg"))
        .unwrap();
    assert_eq!(
        fx.resolver().resolve("jane", AssetPurpose::Portrait, ""),
        Some(fx.tenant("portrait.jpg"))
    );
}

#[test]
fn traversing_tenant_only_gets_static_logo() {
    let fx = Fixture::new();
    write_png(&fx.tenant("logo.png"));
    fs::write(fx.shared("logo.svg"), WIDE_SVG).unwrap();
    let resolver = fx.resolver();
    assert_eq!(
        resolver.resolve("../uploads/jane", AssetPurpose::Logo, ""),
        Some(fx.shared("logo.svg"))
    );
    assert!(resolver.resolve("..", AssetPurpose::Portrait, "").is_none());
}

// -------------------------------------------------------
// Decoding
// -------------------------------------------------------

#[test]
fn svg_is_rasterized_into_square() {
    let fx = Fixture::new();
    fs::write(fx.tenant("logo.svg"), WIDE_SVG).unwrap();
    let image = fx.load(&fx.tenant("logo.svg")).unwrap();
    assert_eq!((image.width, image.height), (400, 400));

    // The 2:1 drawing is centered: transparent bands above and below.
    let alpha = image.smask_data.as_ref().unwrap();
    assert_eq!(alpha[0], 0);
    assert_eq!(alpha[200 * 400 + 200], 255);
    let center = (200 * 400 + 200) * 3;
    assert_eq!(&image.data[center..center + 3], &[255, 0, 0]);
}

#[test]
fn svg_text_is_drawn_with_system_fonts() {
    let fx = Fixture::new();
    fs::write(fx.tenant("logo.svg"), WORDMARK_SVG).unwrap();
    let image = fx.load(&fx.tenant("logo.svg")).unwrap();
    let alpha = image.smask_data.as_ref().unwrap();
    let visible = alpha.iter().filter(|&&a| a > 0).count();
    assert!(visible > 1000, "wordmark left only {visible} visible pixels");
}

#[test]
fn broken_svg_is_skipped() {
    let fx = Fixture::new();
    fs::write(fx.tenant("logo.svg"), "<svg").unwrap();
    assert!(fx.load(&fx.tenant("logo.svg")).is_none());
}

#[test]
fn png_keeps_native_size() {
    let fx = Fixture::new();
    write_png(&fx.tenant("logo.png"));
    let image = fx.load(&fx.tenant("logo.png")).unwrap();
    assert_eq!((image.width, image.height), (4, 4));
    assert!(image.smask_data.is_none());
}

#[test]
fn webp_is_decoded() {
    let fx = Fixture::new();
    image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
        .save(fx.tenant("logo.webp"))
        .unwrap();
    let resolver = fx.resolver();
    assert_eq!(
        resolver.resolve("jane", AssetPurpose::Logo, ""),
        Some(fx.tenant("logo.webp"))
    );
    let image = resolver
        .image("jane", AssetPurpose::Logo, "", 400)
        .unwrap()
        .unwrap();
    assert_eq!((image.width, image.height), (3, 2));
    assert_eq!(&image.data[..3], &[10, 20, 30]);
}

#[test]
fn garbage_file_is_skipped() {
    let fx = Fixture::new();
    fs::write(fx.tenant("logo.jpg"), [0xFF, 0xD8, 0x00]).unwrap();
    assert!(fx.load(&fx.tenant("logo.jpg")).is_none());
}
