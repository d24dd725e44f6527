//! Icon lookup for service and stat icon names.
//!
//! Content records name their icon by string; unknown or missing names fall
//! back to [`DEFAULT_ICON`] rather than rendering nothing.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

/// Glyph used when a record names no icon or an unknown one.
pub const DEFAULT_ICON: &str = "\u{1F3D7}";

const ICONS: &[(&str, &str)] = &[
    ("Award", "\u{1F3C6}"),
    ("Building", "\u{1F3E2}"),
    ("CheckCircle", "\u{2705}"),
    ("Clipboard", "\u{1F4CB}"),
    ("Clock", "\u{1F552}"),
    ("HardHat", "\u{1F477}"),
    ("PaintBucket", "\u{1FAA3}"),
    ("Route", "\u{1F6E3}"),
    ("Users", "\u{1F465}"),
    ("Wrench", "\u{1F527}"),
];

/// Glyph for an icon name.
pub fn icon_for(name: Option<&str>) -> &'static str {
    name.and_then(|name| ICONS.iter().find(|(key, _)| *key == name))
        .map_or(DEFAULT_ICON, |&(_, glyph)| glyph)
}
