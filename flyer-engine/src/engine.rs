//! Assembles the blocks into a finished single-page PDF.

use tracing::{debug, info};

use crate::assets::{AssetPurpose, AssetResolver};
use crate::blocks::{Assets, BlockKind, RenderedBlock, SEQUENCE};
use crate::canvas::Canvas;
use crate::config::FlyerConfig;
use crate::error::Result;
use crate::geometry::RenderContext;
use crate::settings::EngineSettings;

/// MIME type of the generated documents.
pub const CONTENT_TYPE: &str = "application/pdf";

const CREATOR: &str = "flyer-engine";

/// Raster size for vector logos.
const LOGO_PX: u32 = 400;
/// Raster size for vector portraits.
const PORTRAIT_PX: u32 = 600;

/// A generated flyer together with a record of its blocks.
#[derive(Debug, Clone)]
pub struct RenderedFlyer {
    pub bytes: Vec<u8>,
    /// Blocks that were drawn, in drawing order.
    pub blocks: Vec<RenderedBlock>,
}

impl RenderedFlyer {
    pub fn block(&self, kind: BlockKind) -> Option<&RenderedBlock> {
        self.blocks.iter().find(|b| b.kind == kind)
    }

    pub fn kinds(&self) -> Vec<BlockKind> {
        self.blocks.iter().map(|b| b.kind).collect()
    }
}

/// Renders flyers. Holds no per-render state, so one engine can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct FlyerEngine {
    resolver: AssetResolver,
    compress: bool,
}

impl FlyerEngine {
    pub fn new(resolver: AssetResolver) -> Self {
        FlyerEngine {
            resolver,
            compress: true,
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        FlyerEngine::new(AssetResolver::from_settings(settings)).with_compression(settings.compress)
    }

    /// Turn content-stream compression on or off.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn resolver(&self) -> &AssetResolver {
        &self.resolver
    }

    /// Render the flyer for `tenant` and return the PDF bytes.
    pub fn generate(&self, tenant: &str, config: &FlyerConfig) -> Result<Vec<u8>> {
        Ok(self.render(tenant, config)?.bytes)
    }

    /// Like [`generate`](Self::generate), but also report what each
    /// block drew.
    pub fn render(&self, tenant: &str, config: &FlyerConfig) -> Result<RenderedFlyer> {
        let assets = self.load_assets(tenant, config)?;
        let mut ctx = RenderContext::new(config.page_size, config.orientation);

        let mut canvas = Canvas::new(self.compress)?;
        canvas.set_title(&format!("Flyer – {}", config.candidate_name));
        canvas.set_creator(CREATOR);
        canvas.begin_page(ctx.page_width, ctx.page_height)?;

        let mut blocks = Vec::new();
        for (kind, draw) in SEQUENCE {
            canvas.start_block();
            match draw(&mut ctx, &mut canvas, config, &assets)? {
                Some(block) => blocks.push(block),
                None => debug!(?kind, "block skipped"),
            }
        }

        let bytes = canvas.finish()?;
        info!(
            tenant,
            page_size = ?config.page_size,
            orientation = ?config.orientation,
            blocks = blocks.len(),
            bytes = bytes.len(),
            "generated flyer"
        );
        Ok(RenderedFlyer { bytes, blocks })
    }

    fn load_assets(&self, tenant: &str, config: &FlyerConfig) -> Result<Assets> {
        let portrait = if config.show_portrait {
            self.resolver
                .image(tenant, AssetPurpose::Portrait, &config.portrait_path, PORTRAIT_PX)?
        } else {
            None
        };
        let logo = if config.show_logo {
            self.resolver
                .image(tenant, AssetPurpose::Logo, &config.logo_path, LOGO_PX)?
        } else {
            None
        };
        Ok(Assets { portrait, logo })
    }

    /// Download name for the flyer, e.g. `flyer-jane-doe.pdf`.
    pub fn file_name(config: &FlyerConfig) -> String {
        let mut slug = String::new();
        for c in config.candidate_name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-');
        if slug.is_empty() {
            "flyer.pdf".to_string()
        } else {
            format!("flyer-{slug}.pdf")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_slugs_candidate() {
        let config = FlyerConfig {
            candidate_name: "Jane  Doe!".to_string(),
            ..Default::default()
        };
        assert_eq!(FlyerEngine::file_name(&config), "flyer-jane-doe.pdf");
        assert_eq!(FlyerEngine::file_name(&FlyerConfig::default()), "flyer.pdf");
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FlyerEngine>();
    }
}
