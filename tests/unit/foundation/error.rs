use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(StripError::config("x").to_string().contains("config error:"));
    assert!(
        StripError::asset_load("x")
            .to_string()
            .contains("asset load error:")
    );
    assert!(StripError::usage("x").to_string().contains("usage error:"));
    assert!(StripError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn survives_anyhow_context() {
    let err = anyhow::Error::from(StripError::usage("4 captions")).context("render strip");
    assert!(matches!(
        err.downcast_ref::<StripError>(),
        Some(StripError::Usage(_))
    ));
    assert!(format!("{err:#}").contains("usage error: 4 captions"));
}
