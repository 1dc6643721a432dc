use flyer_engine::geometry::{scale_for, type_scale};
use flyer_engine::textflow::{classify_line, max_chars_for, shorten, wrap, TextLine};
use flyer_engine::{Orientation, PageSize};
use flyer_pdf::BuiltinFont;

fn scale(size: PageSize, orientation: Orientation) -> f64 {
    let (w, h) = size.dimensions(orientation);
    scale_for(w, h)
}

// -------------------------------------------------------
// Scaling
// -------------------------------------------------------

#[test]
fn font_sizes_shrink_monotonically() {
    for orientation in [Orientation::Portrait, Orientation::Landscape] {
        let a4 = scale(PageSize::A4, orientation);
        let a5 = scale(PageSize::A5, orientation);
        let a6 = scale(PageSize::A6, orientation);
        assert!(a6 < a5 && a5 < a4);

        for size in type_scale::ALL {
            let (s4, s5, s6) = (size.at(a4), size.at(a5), size.at(a6));
            assert!(s6 <= s5 && s5 <= s4, "{size:?}");
            for s in [s4, s5, s6] {
                assert!(s >= size.floor && s <= size.base, "{size:?} -> {s}");
            }
        }
    }
}

#[test]
fn a4_portrait_uses_base_sizes() {
    let s = scale(PageSize::A4, Orientation::Portrait);
    for size in type_scale::ALL {
        assert_eq!(size.at(s), size.base);
    }
}

#[test]
fn landscape_scale_follows_short_side() {
    // A4 landscape is 297 mm wide but only 210 mm high.
    let s = scale(PageSize::A4, Orientation::Landscape);
    assert!((s - 210.0 / 297.0).abs() < 1e-9);
}

// -------------------------------------------------------
// Wrapping
// -------------------------------------------------------

#[test]
fn wrapped_lines_respect_budget() {
    let text = "a bb ccc dddd eeeee ".repeat(30);
    for max in [5, 8, 13, 40] {
        let lines = wrap(&text, max);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= max, "{line:?} exceeds {max}");
        }
        // Words survive intact and in order.
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }
}

#[test]
fn short_text_is_single_identical_line() {
    assert_eq!(wrap("Jetzt mitmachen", 40), vec!["Jetzt mitmachen"]);
}

#[test]
fn width_factors_set_budgets() {
    // 510 pt of content at 22 pt bold: 510 / 11 = 46.
    assert_eq!(max_chars_for(510.0, 22.0, BuiltinFont::HelveticaBold), 46);
    // Same width at 10 pt regular: 510 / 4.5 = 113.
    assert_eq!(max_chars_for(510.0, 10.0, BuiltinFont::Helvetica), 113);
}

#[test]
fn labels_shorten_with_ellipsis() {
    let label = shorten("Unser Wahlprogramm im Detail", 23);
    assert!(label.ends_with('…'));
    assert!(label.chars().count() <= 23);
    assert_eq!(label, "Unser Wahlprogramm im…");
}

#[test]
fn bullet_marker_needs_a_space() {
    assert_eq!(classify_line("- Buy milk"), TextLine::Bullet("Buy milk".to_string()));
    assert_eq!(classify_line("Buy milk"), TextLine::Plain("Buy milk".to_string()));
    assert_eq!(classify_line("-5 Grad"), TextLine::Plain("-5 Grad".to_string()));
}
