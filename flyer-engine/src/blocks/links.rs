//! Grid of small QR codes for the tenant's external links.

use flyer_pdf::{BuiltinFont, Color, Rect};

use super::{finish, Assets, BlockKind, RenderedBlock};
use crate::canvas::Canvas;
use crate::config::FlyerConfig;
use crate::error::Result;
use crate::geometry::{mm, type_scale, RenderContext};
use crate::textflow::{max_chars_for, shorten};

/// Pixel size of each link code raster.
pub(crate) const LINK_CODE_PX: u32 = 200;

/// Number of items that fit in one row of `width`.
fn items_per_row(width: f64, item: f64, gap: f64) -> usize {
    (((width + gap) / (item + gap)).floor() as usize).max(1)
}

/// Drawn only when the whole section fits above 8 mm; otherwise no
/// space is reserved.
pub(super) fn link_grid(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    _assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    let links = config.valid_links();
    if !config.show_links || links.is_empty() {
        return Ok(None);
    }

    let item = ctx.smm(22.0).min(mm(22.0));
    let label_size = ctx.font(type_scale::LINK_LABEL);
    let gap = ctx.smm(4.0);
    let heading_size = ctx.font(type_scale::LINK_SECTION);
    let per_row = items_per_row(ctx.content_width, item, gap);
    let rows = links.len().div_ceil(per_row);
    let label_line_h = label_size + 2.0;
    let row_h = item + label_line_h + 2.0;

    let section_h = heading_size + ctx.smm(3.0) + rows as f64 * (row_h + ctx.smm(2.0));
    if ctx.cursor() - section_h <= mm(8.0) {
        return Ok(None);
    }

    let top = ctx.cursor() + heading_size;
    canvas.text(
        &config.labels.links_heading,
        BuiltinFont::HelveticaBold,
        heading_size,
        Color::gray(0.4),
        ctx.margin,
        ctx.cursor(),
    );
    ctx.advance(heading_size + ctx.smm(2.0));

    let max_label = max_chars_for(item, label_size, BuiltinFont::Helvetica);
    let mut bottom = ctx.cursor();
    for row in links.chunks(per_row) {
        let n = row.len() as f64;
        let row_w = n * item + (n - 1.0) * gap;
        let start_x = ctx.margin + (ctx.content_width - row_w) / 2.0;
        let iy = ctx.cursor() - item;

        for (col, link) in row.iter().enumerate() {
            let ix = start_x + col as f64 * (item + gap);
            canvas.frame(
                &Rect::new(ix - 0.75, iy - 0.75, item + 1.5, item + 1.5),
                0.5,
                Color::gray(0.8),
            );
            canvas.qr_code(&link.url, LINK_CODE_PX, &Rect::square(ix, iy, item))?;

            let label = shorten(link.display_label(), max_label);
            let label_w = Canvas::text_width(&label, BuiltinFont::Helvetica, label_size);
            bottom = iy - label_line_h;
            canvas.text(
                &label,
                BuiltinFont::Helvetica,
                label_size,
                Color::gray(0.3),
                ix + (item - label_w) / 2.0,
                bottom,
            );
        }
        ctx.advance(item + label_line_h + ctx.smm(2.0));
    }
    ctx.advance(ctx.smm(2.0));

    finish(canvas, BlockKind::LinkGrid, top, bottom)
}
