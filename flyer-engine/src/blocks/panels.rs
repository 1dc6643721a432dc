//! Tinted call-to-action panels.

use flyer_pdf::{BuiltinFont, Color, Rect};
use tracing::debug;

use super::{finish, Assets, BlockKind, RenderedBlock};
use crate::canvas::Canvas;
use crate::config::FlyerConfig;
use crate::error::Result;
use crate::geometry::{mm, type_scale, RenderContext};
use crate::textflow::{max_chars_for, wrap_capped};

/// Pixel size of the main QR code raster.
pub(crate) const MAIN_CODE_PX: u32 = 500;

const CHECK_MARK: &str = "✓";
const CTA_LINES: usize = 2;

/// The main QR code in a tinted box, with the scan call and the
/// check-marked feature list under it. Needs a website URL.
pub(super) fn qr_panel(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    _assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    if !config.show_qr || config.website_url.trim().is_empty() {
        return Ok(None);
    }

    let theme = config.theme();
    let qr = ctx.smm(55.0).min(mm(55.0));
    let pad = ctx.smm(6.0);
    let gap = ctx.smm(4.0);
    let label_size = ctx.font(type_scale::SCAN_LABEL);
    let bullet_size = ctx.font(type_scale::FEATURE);
    let bullet_step = bullet_size + 3.0;
    let features = &config.labels.features;

    let box_h = pad + qr + gap + label_size + 4.0 + features.len() as f64 * bullet_step + pad;
    let box_y = ctx.cursor() - box_h;
    if box_y < ctx.bottom_limit() {
        debug!(
            box_y,
            limit = ctx.bottom_limit(),
            "qr panel does not fit above the footer"
        );
        return Ok(None);
    }

    let (left, width) = (ctx.margin, ctx.content_width);
    canvas.tinted_panel(&Rect::new(left, box_y, width, box_h), mm(5.0), theme, 0.06);
    canvas.fill_rect(&Rect::new(left, box_y, 3.5, box_h), theme);

    let qr_x = left + (width - qr) / 2.0;
    let qr_y = box_y + box_h - pad - qr;
    canvas.qr_code(&config.website_url, MAIN_CODE_PX, &Rect::square(qr_x, qr_y, qr))?;
    canvas.frame(
        &Rect::new(qr_x - 1.5, qr_y - 1.5, qr + 3.0, qr + 3.0),
        0.75,
        Color::gray(0.8),
    );

    let call = &config.labels.scan_call;
    let call_w = Canvas::text_width(call, BuiltinFont::HelveticaBold, label_size);
    let label_y = qr_y - gap - label_size;
    canvas.text(
        call,
        BuiltinFont::HelveticaBold,
        label_size,
        Color::gray(0.12),
        left + (width - call_w) / 2.0,
        label_y,
    );

    let widest = features
        .iter()
        .map(|f| Canvas::text_width(f, BuiltinFont::Helvetica, bullet_size) + mm(5.0))
        .fold(0.0, f64::max);
    let bullets_x = left + (width - widest) / 2.0;
    let mut y = label_y - 5.0;
    for feature in features {
        y -= bullet_step;
        canvas.text(CHECK_MARK, BuiltinFont::ZapfDingbats, bullet_size, theme, bullets_x, y);
        canvas.text(
            feature,
            BuiltinFont::Helvetica,
            bullet_size,
            Color::gray(0.3),
            bullets_x + mm(4.0),
            y,
        );
    }

    ctx.lower_to(box_y - ctx.smm(5.0));
    finish(canvas, BlockKind::QrPanel, box_y + box_h, box_y)
}

/// Closing call to action. The panel never sinks below 8 mm, even if
/// that means overlapping the content above it.
pub(super) fn cta_panel(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    _assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    if !config.show_cta || config.cta_text.trim().is_empty() {
        return Ok(None);
    }

    let theme = config.theme();
    let h = ctx.smm(16.0);
    let y = (ctx.cursor() - h).max(mm(8.0));
    let (left, width) = (ctx.margin, ctx.content_width);

    canvas.tinted_panel(&Rect::new(left, y, width, h), mm(4.0), theme, 0.08);
    canvas.fill_rect(&Rect::new(left, y, 3.0, h), theme);

    let size = ctx.font(type_scale::CTA);
    let budget = max_chars_for(width - mm(8.0), size, BuiltinFont::HelveticaBold);
    let text_x = left + mm(5.0);
    let mut text_y = y + h - ctx.smm(5.0);
    for line in wrap_capped(&config.cta_text, budget, CTA_LINES) {
        canvas.text(&line, BuiltinFont::HelveticaBold, size, Color::gray(0.15), text_x, text_y);
        text_y -= size + 2.0;
    }

    if !config.cta_sub.trim().is_empty() {
        canvas.text(
            &config.cta_sub,
            BuiltinFont::Helvetica,
            ctx.font(type_scale::CTA_SUB),
            Color::gray(0.4),
            text_x,
            text_y - 1.0,
        );
    }

    ctx.lower_to(y - ctx.smm(3.0));
    finish(canvas, BlockKind::CtaPanel, y + h, y)
}
