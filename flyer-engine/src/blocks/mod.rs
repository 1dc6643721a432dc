//! The flyer template as a fixed sequence of blocks.
//!
//! Each block reads the cursor from the [`RenderContext`], draws onto
//! the [`Canvas`] and moves the cursor down. A block that has nothing
//! to show, or no room left, returns `Ok(None)`.

mod bars;
mod header;
mod links;
mod panels;
mod text;
mod tiles;

use flyer_pdf::ImageData;

use crate::canvas::{Canvas, Recording, TextRun};
use crate::config::FlyerConfig;
use crate::error::Result;
use crate::geometry::RenderContext;

/// The blocks of the template, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    AccentBars,
    Header,
    ElectionBadge,
    Tagline,
    Headline,
    Intro,
    QrPanel,
    Topics,
    ExtraText,
    CtaPanel,
    LinkGrid,
    WebsiteUrl,
    BottomBar,
}

/// What one block put on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBlock {
    pub kind: BlockKind,
    /// Highest point the block occupies.
    pub top: f64,
    /// Lowest point the block occupies.
    pub bottom: f64,
    pub runs: Vec<TextRun>,
    /// Payloads of the QR codes drawn, in order.
    pub codes: Vec<String>,
    pub images: usize,
}

impl RenderedBlock {
    fn new(kind: BlockKind, top: f64, bottom: f64, recording: Recording) -> Self {
        RenderedBlock {
            kind,
            top,
            bottom,
            runs: recording.runs,
            codes: recording.codes,
            images: recording.images,
        }
    }

    /// First text run with exactly this text.
    pub fn run(&self, text: &str) -> Option<&TextRun> {
        self.runs.iter().find(|run| run.text == text)
    }
}

/// Decoded images for one render.
#[derive(Debug, Default)]
pub(crate) struct Assets {
    pub portrait: Option<ImageData>,
    pub logo: Option<ImageData>,
}

pub(crate) type BlockFn =
    fn(&mut RenderContext, &mut Canvas, &FlyerConfig, &Assets) -> Result<Option<RenderedBlock>>;

/// Every block with its renderer, in drawing order.
pub(crate) const SEQUENCE: [(BlockKind, BlockFn); 13] = [
    (BlockKind::AccentBars, bars::accent_bars),
    (BlockKind::Header, header::header),
    (BlockKind::ElectionBadge, header::election_badge),
    (BlockKind::Tagline, header::tagline),
    (BlockKind::Headline, text::headline),
    (BlockKind::Intro, text::intro),
    (BlockKind::QrPanel, panels::qr_panel),
    (BlockKind::Topics, tiles::topics),
    (BlockKind::ExtraText, text::extra_text),
    (BlockKind::CtaPanel, panels::cta_panel),
    (BlockKind::LinkGrid, links::link_grid),
    (BlockKind::WebsiteUrl, bars::website_url),
    (BlockKind::BottomBar, bars::bottom_bar),
];

/// Close the block being drawn.
fn finish(
    canvas: &mut Canvas,
    kind: BlockKind,
    top: f64,
    bottom: f64,
) -> Result<Option<RenderedBlock>> {
    Ok(Some(RenderedBlock::new(kind, top, bottom, canvas.take_recording())))
}
