use super::*;
use crate::render::composite::TRANSPARENT;

fn face() -> FontFace {
    let bytes = std::fs::read("tests/data/fonts/DejaVuSans.ttf").unwrap();
    FontFace::from_bytes(bytes, 14.0).unwrap()
}

#[test]
fn explicit_placement_is_kept() {
    let c = Caption::placed("foo", Placement::Bottom);
    assert_eq!(resolve_placement(&c, PlacementMode::Derived), Placement::Bottom);
    assert_eq!(resolve_placement(&c, PlacementMode::Fixed), Placement::Bottom);
}

#[test]
fn unresolved_placement_follows_mode() {
    let c = Caption::new("foo");
    assert_eq!(
        resolve_placement(&c, PlacementMode::Derived),
        Placement::TopMiddle
    );
    assert_eq!(resolve_placement(&c, PlacementMode::Fixed), Placement::Top);
}

#[test]
fn geometry_for_foo_matches_anchor_plus_jitter() {
    let layout = StripLayout::default();
    let f = face();
    let g = caption_geometry(&Caption::new("foo"), &layout, &f, PlacementMode::Derived).unwrap();
    // top-middle anchor (30, 64), jitter (-10, -1)
    assert_eq!(g.baseline, IPoint::new(20, 63));
    assert_eq!(g.background.min, IPoint::new(20 - 3, 63 - f.ascent() - 3));
    assert_eq!(g.background.max, IPoint::new(20 + g.advance + 3, 63 + 3));
}

#[test]
fn fixed_mode_has_no_jitter() {
    let layout = StripLayout::default();
    let g = caption_geometry(&Caption::new("foo"), &layout, &face(), PlacementMode::Fixed).unwrap();
    assert_eq!(g.jitter, Jitter::default());
    assert_eq!(g.baseline, IPoint::new(30, 21));
}

#[test]
fn background_box_contains_advance_span() {
    let layout = StripLayout::default();
    let f = face();
    let alphabet = "The quick brown fox jumps over the lazy dog 0123456789!?";
    for len in 1..=50 {
        let text: String = alphabet.chars().cycle().skip(len).take(len).collect();
        let g = caption_geometry(&Caption::new(text.clone()), &layout, &f, PlacementMode::Derived)
            .unwrap();
        let span = IRect::new(
            g.baseline.x,
            g.baseline.y - f.ascent(),
            g.baseline.x + f.advance_width(&text),
            g.baseline.y,
        );
        assert!(g.background.contains_rect(&span), "{text:?}");
        assert!(g.background.min.x <= g.background.max.x);
        assert!(g.background.min.y <= g.background.max.y);
    }
}

#[test]
fn rendered_panel_has_box_and_glyphs() {
    let layout = StripLayout::default();
    let f = face();
    let caption = Caption::placed("Hello", Placement::Middle);
    let canvas = render_panel_text(&caption, &layout, &f, PlacementMode::Fixed).unwrap();
    assert_eq!(canvas.width(), 212);
    assert_eq!(canvas.height(), 216);

    let g = caption_geometry(&caption, &layout, &f, PlacementMode::Fixed).unwrap();
    // padding corner is white, far corner untouched
    assert_eq!(
        canvas.pixel(g.background.min.x, g.background.min.y),
        Some(WHITE)
    );
    assert_eq!(canvas.pixel(211, 0), Some(TRANSPARENT));

    let dark = (g.background.min.y..g.background.max.y)
        .flat_map(|y| (g.background.min.x..g.background.max.x).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.pixel(x, y).is_some_and(|p| p[0] < 128 && p[3] == 255))
        .count();
    assert!(dark > 0);
}

#[test]
fn rendering_is_deterministic() {
    let layout = StripLayout::default();
    let f = face();
    let c = Caption::new("foo bar");
    let a = render_panel_text(&c, &layout, &f, PlacementMode::Derived).unwrap();
    let b = render_panel_text(&c, &layout, &f, PlacementMode::Derived).unwrap();
    assert_eq!(a, b);
}

#[test]
fn overlong_caption_runs_off_the_panel_edge() {
    let layout = StripLayout::default();
    let f = face();
    let caption = Caption::placed(
        "a caption far too wide to fit inside one panel of the strip",
        Placement::Middle,
    );
    let g = caption_geometry(&caption, &layout, &f, PlacementMode::Derived).unwrap();
    assert!(g.background.max.x > layout.panel_width as i32);

    let canvas = render_panel_text(&caption, &layout, &f, PlacementMode::Derived).unwrap();
    assert_eq!(canvas.width(), 212);
    assert_eq!(canvas.height(), 216);
    // box reaches the last column and is cut there
    let edge = canvas.pixel(211, g.baseline.y + 1).unwrap();
    assert_eq!(edge[3], 255);
    assert_eq!(canvas.pixel(212, g.baseline.y + 1), None);
}
