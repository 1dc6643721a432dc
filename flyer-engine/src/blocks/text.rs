//! Wrapped text blocks.

use flyer_pdf::{BuiltinFont, Color};

use super::{finish, Assets, BlockKind, RenderedBlock};
use crate::canvas::Canvas;
use crate::config::FlyerConfig;
use crate::error::Result;
use crate::geometry::{mm, type_scale, RenderContext, Scaled};
use crate::textflow::{max_chars_for, source_lines, wrap_capped, TextLine};

const HEADLINE_LINES: usize = 3;
const INTRO_LINES: usize = 5;
const EXTRA_SOURCE_LINES: usize = 10;
const EXTRA_LINES_PER_SOURCE: usize = 3;

/// Shared shape of the headline and intro: a capped paragraph at the
/// margin followed by a scaled gap.
struct Paragraph {
    kind: BlockKind,
    font: BuiltinFont,
    size: Scaled,
    gray: f64,
    max_lines: usize,
    gap_mm: f64,
}

fn paragraph(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    text: &str,
    p: Paragraph,
) -> Result<Option<RenderedBlock>> {
    let size = ctx.font(p.size);
    let lines = wrap_capped(text, max_chars_for(ctx.content_width, size, p.font), p.max_lines);
    if lines.is_empty() {
        return Ok(None);
    }

    let top = ctx.cursor() + size;
    let mut bottom = ctx.cursor();
    for line in &lines {
        bottom = ctx.cursor();
        canvas.text(line, p.font, size, Color::gray(p.gray), ctx.margin, bottom);
        ctx.advance(size + 2.0);
    }
    ctx.advance(ctx.smm(p.gap_mm));
    finish(canvas, p.kind, top, bottom)
}

pub(super) fn headline(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    _assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    if !config.show_headline {
        return Ok(None);
    }
    paragraph(
        ctx,
        canvas,
        &config.headline,
        Paragraph {
            kind: BlockKind::Headline,
            font: BuiltinFont::HelveticaBold,
            size: type_scale::HEADLINE,
            gray: 0.1,
            max_lines: HEADLINE_LINES,
            gap_mm: 2.0,
        },
    )
}

pub(super) fn intro(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    _assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    if !config.show_intro {
        return Ok(None);
    }
    paragraph(
        ctx,
        canvas,
        &config.intro_text,
        Paragraph {
            kind: BlockKind::Intro,
            font: BuiltinFont::Helvetica,
            size: type_scale::INTRO,
            gray: 0.2,
            max_lines: INTRO_LINES,
            gap_mm: 3.0,
        },
    )
}

/// Free-form text with bullet lines. Lines that would land below the
/// bottom limit are dropped.
pub(super) fn extra_text(
    ctx: &mut RenderContext,
    canvas: &mut Canvas,
    config: &FlyerConfig,
    _assets: &Assets,
) -> Result<Option<RenderedBlock>> {
    if config.extra_text.trim().is_empty() {
        return Ok(None);
    }

    let size = ctx.font(type_scale::EXTRA);
    let step = size + 2.5;
    let max_chars = max_chars_for(ctx.content_width, size, BuiltinFont::Helvetica);
    let limit = ctx.bottom_limit();
    let body = Color::gray(0.2);
    let indent = ctx.margin + mm(4.0);

    let top = ctx.cursor() + size;
    let mut bottom = None;
    for line in source_lines(&config.extra_text, EXTRA_SOURCE_LINES) {
        let (text, bullet) = match line {
            TextLine::Blank => {
                ctx.advance(step * 0.5);
                continue;
            }
            TextLine::Plain(text) => (text, false),
            TextLine::Bullet(text) => (text, true),
        };

        let wrapped = wrap_capped(&text, max_chars, EXTRA_LINES_PER_SOURCE);
        for (i, part) in wrapped.iter().enumerate() {
            let y = ctx.cursor();
            if y >= limit {
                if bullet && i == 0 {
                    let (font, color) = (BuiltinFont::HelveticaBold, config.theme());
                    canvas.text("•", font, size, color, ctx.margin, y);
                }
                let x = if bullet { indent } else { ctx.margin };
                canvas.text(part, BuiltinFont::Helvetica, size, body, x, y);
                bottom = Some(y);
            }
            ctx.advance(step);
        }
    }

    ctx.advance(ctx.smm(2.0));
    match bottom {
        Some(bottom) => finish(canvas, BlockKind::ExtraText, top, bottom),
        None => Ok(None),
    }
}
