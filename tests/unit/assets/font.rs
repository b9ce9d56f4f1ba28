use super::*;

fn face() -> FontFace {
    let bytes = std::fs::read("tests/data/fonts/DejaVuSans.ttf").unwrap();
    FontFace::from_bytes(bytes, 14.0).unwrap()
}

#[test]
fn ascent_is_positive_and_below_size() {
    let f = face();
    assert!(f.ascent() > 0);
    assert!(f.ascent() <= 16);
}

#[test]
fn advance_width_grows_with_text() {
    let f = face();
    assert_eq!(f.advance_width(""), 0);
    let one = f.advance_width("m");
    let two = f.advance_width("mm");
    assert!(one > 0);
    assert!(two > one);
}

#[test]
fn measurement_is_pure() {
    let f = face();
    assert_eq!(f.advance_width("foo bar"), f.advance_width("foo bar"));
    assert_eq!(f.ascent(), f.ascent());
}

#[test]
fn glyph_runs_skip_spaces_and_sit_on_baseline() {
    let f = face();
    let runs = f.glyph_runs("a b", IPoint::new(10, 40));
    assert_eq!(runs.len(), 2);
    for run in &runs {
        assert!(run.origin.y < 40);
        assert!(run.origin.x >= 9);
        assert_eq!(run.coverage.len() % run.width, 0);
    }
}

#[test]
fn bad_bytes_and_sizes_are_rejected() {
    assert!(matches!(
        FontFace::from_bytes(vec![1, 2, 3], 14.0),
        Err(StripError::AssetLoad(_))
    ));
    let bytes = std::fs::read("tests/data/fonts/DejaVuSans.ttf").unwrap();
    assert!(FontFace::from_bytes(bytes, 0.0).is_err());
}

#[test]
fn family_name_is_read() {
    assert!(face().family_name().is_some_and(|n| n.contains("DejaVu")));
}
