//! Unconditional page furniture: accent bars and the website footer.

use flyer_pdf::{BuiltinFont, Rect};

use super::{finish, Assets, BlockKind, RenderedBlock};
use crate::canvas::Canvas;
use crate::config::FlyerConfig;
use crate::error::Result;
use crate::geometry::{mm, type_scale, RenderContext};

/// Darkening factor of the thin bar under the top bar.
const SHADE: f64 = 0.65;

pub(super) fn accent_bars(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    _assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    let theme = config.theme();
    let bar_h = ctx.smm(8.0);
    let shade_h = mm(1.5);
    let top = ctx.page_height;

    canvas.fill_rect(&Rect::new(0.0, top - bar_h, ctx.page_width, bar_h), theme);
    canvas.fill_rect(
        &Rect::new(0.0, top - bar_h - shade_h, ctx.page_width, shade_h),
        theme.darken(SHADE),
    );

    ctx.lower_to(top - bar_h - mm(6.0));
    finish(canvas, BlockKind::AccentBars, top, top - bar_h - shade_h)
}

/// Website address centered above the bottom bar, without protocol.
pub(super) fn website_url(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    _assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    let url = config.display_url();
    if !config.show_website_url || url.is_empty() {
        return Ok(None);
    }

    let size = ctx.font(type_scale::WEBSITE);
    let width = Canvas::text_width(url, BuiltinFont::Helvetica, size);
    let x = (ctx.page_width - width) / 2.0;
    let y = mm(5.0);
    canvas.text(url, BuiltinFont::Helvetica, size, config.theme(), x, y);

    finish(canvas, BlockKind::WebsiteUrl, y + size, y)
}

pub(super) fn bottom_bar(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    _assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    let h = mm(3.0);
    canvas.fill_rect(&Rect::new(0.0, 0.0, ctx.page_width, h), config.theme());
    finish(canvas, BlockKind::BottomBar, h, 0.0)
}
