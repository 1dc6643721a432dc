//! Header area: portrait, name, party, logo, then the election badge
//! and the tagline beneath it.

use flyer_pdf::{BuiltinFont, Color, ImageFit, Rect};

use super::{finish, Assets, BlockKind, RenderedBlock};
use crate::canvas::Canvas;
use crate::config::FlyerConfig;
use crate::error::Result;
use crate::geometry::{mm, type_scale, RenderContext};

const PORTRAIT_MM: f64 = 32.0;
const LOGO_MM: f64 = 22.0;
const HEADER_MM: f64 = 38.0;
const RING_WIDTH: f64 = 1.5;

pub(super) fn header(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    let theme = config.theme();
    let top = ctx.cursor();
    let mut text_left = ctx.margin;

    if let Some(portrait) = &assets.portrait {
        let size = ctx.smm(PORTRAIT_MM);
        let area = Rect::square(ctx.margin, top - size, size);
        let (cx, cy) = area.center();
        let r = size / 2.0;

        canvas
            .pdf()
            .save_state()
            .set_stroke_color(theme)
            .set_line_width(RING_WIDTH)
            .circle(cx, cy, r + 1.0)
            .stroke()
            .circle(cx, cy, r)
            .clip();
        canvas.image(portrait, &area, ImageFit::Fit)?;
        canvas.pdf().restore_state();

        text_left = ctx.margin + size + mm(5.0);
    }

    let name_size = ctx.font(type_scale::NAME);
    let name_y = top - ctx.smm(10.0);
    if !config.candidate_name.is_empty() {
        canvas.text(
            &config.candidate_name,
            BuiltinFont::HelveticaBold,
            name_size,
            Color::gray(0.1),
            text_left,
            name_y,
        );
    }

    if !config.party.is_empty() {
        let party_y = name_y - (name_size + 3.0) * ctx.scale;
        canvas.text(
            &config.party,
            BuiltinFont::Helvetica,
            ctx.font(type_scale::PARTY),
            Color::gray(0.4),
            text_left,
            party_y,
        );
    }

    if let Some(logo) = &assets.logo {
        let size = ctx.smm(LOGO_MM);
        let area = Rect::square(ctx.page_width - ctx.margin - size, top - size, size);
        canvas.image(logo, &area, ImageFit::Fit)?;
    }

    let bottom = top - ctx.smm(HEADER_MM);
    ctx.lower_to(bottom);
    finish(canvas, BlockKind::Header, top, bottom)
}

/// Rounded badge "{prefix} {date}" sitting on the cursor line.
pub(super) fn election_badge(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    _assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    let date = config.election_date.trim();
    if !config.show_election_date || date.is_empty() {
        return Ok(None);
    }

    let label = format!("{} {}", config.labels.election_prefix, date);
    let size = ctx.font(type_scale::BADGE);
    let w = Canvas::text_width(&label, BuiltinFont::HelveticaBold, size) + mm(8.0);
    let h = ctx.smm(8.0);
    let (x, y) = (ctx.margin, ctx.cursor());

    canvas.fill_rounded(&Rect::new(x, y, w, h), mm(3.0), config.theme());
    canvas.text(
        &label,
        BuiltinFont::HelveticaBold,
        size,
        Color::WHITE,
        x + mm(4.0),
        y + ctx.smm(2.2),
    );

    ctx.advance(h + ctx.smm(5.0));
    finish(canvas, BlockKind::ElectionBadge, y + h, y)
}

pub(super) fn tagline(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    _assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    if !config.show_tagline || config.tagline.trim().is_empty() {
        return Ok(None);
    }

    let size = ctx.font(type_scale::TAGLINE);
    let y = ctx.cursor();
    canvas.text(
        &config.tagline,
        BuiltinFont::HelveticaOblique,
        size,
        config.theme(),
        ctx.margin,
        y,
    );

    ctx.advance(size + ctx.smm(4.0));
    finish(canvas, BlockKind::Tagline, y + size, y)
}
