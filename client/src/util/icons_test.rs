use super::*;

#[test]
fn every_known_name_has_its_own_glyph() {
    for name in content::types::ICON_NAMES {
        assert_ne!(icon_for(Some(*name)), DEFAULT_ICON, "{name}");
    }
}

#[test]
fn unknown_and_missing_names_use_default() {
    assert_eq!(icon_for(Some("Rocket")), DEFAULT_ICON);
    assert_eq!(icon_for(None), DEFAULT_ICON);
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(icon_for(Some("wrench")), DEFAULT_ICON);
    assert_eq!(icon_for(Some("Wrench")), "\u{1F527}");
}
