use super::*;
use crate::Placement;

fn face() -> FontFace {
    let bytes = std::fs::read("tests/data/fonts/DejaVuSans.ttf").unwrap();
    FontFace::from_bytes(bytes, 14.0).unwrap()
}

fn backdrop() -> Canvas {
    Canvas::filled(720, 275, [40, 80, 120, 255])
}

#[test]
fn empty_captions_leave_background_untouched() {
    let bg = backdrop();
    let captions = vec![
        Caption::new(""),
        Caption::placed("", Placement::Bottom),
        Caption::placed("", Placement::Top),
    ];
    let out = assemble_scene(
        &bg,
        &captions,
        &StripLayout::default(),
        None,
        PlacementMode::Derived,
    )
    .unwrap();
    assert_eq!(out, bg);
}

#[test]
fn too_many_captions_fail_before_drawing() {
    let captions: Vec<Caption> = ["a", "b", "c", "d"].into_iter().map(Caption::new).collect();
    let err = assemble_scene(
        &backdrop(),
        &captions,
        &StripLayout::default(),
        Some(&face()),
        PlacementMode::Derived,
    )
    .unwrap_err();
    assert!(matches!(err, StripError::Usage(_)));
}

#[test]
fn text_without_font_is_asset_error() {
    let err = assemble_scene(
        &backdrop(),
        &[Caption::new("hi")],
        &StripLayout::default(),
        None,
        PlacementMode::Derived,
    )
    .unwrap_err();
    assert!(matches!(err, StripError::AssetLoad(_)));
}

#[test]
fn panels_do_not_interfere() {
    let layout = StripLayout::default();
    let f = face();
    let bg = backdrop();
    let rect0 = layout.panel_table().get(0).unwrap();

    let alone = assemble_scene(
        &bg,
        &[Caption::new("caption A"), Caption::new("")],
        &layout,
        Some(&f),
        PlacementMode::Derived,
    )
    .unwrap();
    let with_neighbour = assemble_scene(
        &bg,
        &[Caption::new("caption A"), Caption::new("caption B")],
        &layout,
        Some(&f),
        PlacementMode::Derived,
    )
    .unwrap();

    assert_eq!(alone.crop(rect0), with_neighbour.crop(rect0));
    assert_ne!(alone, with_neighbour);
}

#[test]
fn caption_lands_inside_its_panel() {
    let layout = StripLayout::default();
    let bg = backdrop();
    let out = assemble_scene(
        &bg,
        &[Caption::new(""), Caption::new("middle panel")],
        &layout,
        Some(&face()),
        PlacementMode::Derived,
    )
    .unwrap();

    let table = layout.panel_table();
    let changed: Vec<(i32, i32)> = (0..275)
        .flat_map(|y| (0..720).map(move |x| (x, y)))
        .filter(|&(x, y)| out.pixel(x, y) != bg.pixel(x, y))
        .collect();
    assert!(!changed.is_empty());
    let rect1 = table.get(1).unwrap();
    for (x, y) in changed {
        assert!(rect1.contains(crate::IPoint::new(x, y)));
    }
    assert!(
        out.as_bytes()
            .chunks_exact(4)
            .any(|p| p[0] < 60 && p[1] < 60 && p[2] < 60)
    );
}

#[test]
fn overlong_caption_is_clipped_to_its_panel() {
    let layout = StripLayout::default();
    let bg = backdrop();
    let long = "a caption far too wide to fit inside one panel of the strip";
    let out = assemble_scene(
        &bg,
        &[Caption::new(""), Caption::placed(long, Placement::Middle)],
        &layout,
        Some(&face()),
        PlacementMode::Derived,
    )
    .unwrap();

    let rect1 = layout.panel_table().get(1).unwrap();
    for y in 0..275 {
        for x in 0..720 {
            if !rect1.contains(crate::IPoint::new(x, y)) {
                assert_eq!(out.pixel(x, y), bg.pixel(x, y), "pixel ({x}, {y}) changed");
            }
        }
    }
    assert_ne!(out.crop(rect1), bg.crop(rect1));
}
