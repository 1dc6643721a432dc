//! Topic tiles in a two-column grid.

use flyer_pdf::{BuiltinFont, Rect};

use super::{finish, Assets, BlockKind, RenderedBlock};
use crate::canvas::Canvas;
use crate::config::FlyerConfig;
use crate::error::Result;
use crate::geometry::{mm, type_scale, RenderContext};

const COLUMNS: usize = 2;

pub(super) fn topics(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    _assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    let topics = config.visible_topics();
    if !config.show_topics || topics.is_empty() {
        return Ok(None);
    }

    let tile_h = ctx.smm(9.0);
    let gap = mm(3.0);
    let size = ctx.font(type_scale::TOPIC);
    let col_w = (ctx.content_width - gap) / COLUMNS as f64;
    let limit = ctx.bottom_limit();

    let top = ctx.cursor();
    let mut bottom = None;
    for (i, topic) in topics.iter().enumerate() {
        let (row, col) = (i / COLUMNS, i % COLUMNS);
        let x = ctx.margin + col as f64 * (col_w + gap);
        let y = top - row as f64 * (tile_h + gap) - tile_h;
        if y < limit {
            continue;
        }

        let color = config.topic_color(topic);
        canvas.tinted_panel(&Rect::new(x, y, col_w, tile_h), mm(2.5), color, 0.12);
        canvas.fill_rect(&Rect::new(x, y, 3.0, tile_h), color);
        canvas.text(
            &topic.title,
            BuiltinFont::HelveticaBold,
            size,
            color,
            x + mm(4.0),
            y + ctx.smm(2.5),
        );
        bottom = Some(y);
    }

    let rows = topics.len().div_ceil(COLUMNS);
    ctx.advance(rows as f64 * (tile_h + gap) + ctx.smm(3.0));
    match bottom {
        Some(bottom) => finish(canvas, BlockKind::Topics, top, bottom),
        None => Ok(None),
    }
}
