use super::*;

#[test]
fn mac_platforms_use_command_glyph() {
    assert_eq!(modifier_label("MacIntel"), "⌘");
    assert_eq!(modifier_label("Macintosh"), "⌘");
}

#[test]
fn windows_platforms_use_windows_glyph() {
    assert_eq!(modifier_label("Win32"), "⊞");
    assert_eq!(modifier_label("Windows"), "⊞");
}

#[test]
fn unknown_platforms_fall_back_to_meta() {
    assert_eq!(modifier_label("Linux x86_64"), "meta");
    assert_eq!(modifier_label(""), "meta");
    assert_eq!(modifier_label("mac"), "meta", "detection is case sensitive");
}

#[test]
fn hint_names_the_modifier() {
    assert_eq!(multiselect_hint("MacIntel"), "⌘-click to multiselect");
    assert_eq!(multiselect_hint("FreeBSD amd64"), "meta-click to multiselect");
}

#[test]
fn host_platform_matches_compile_target() {
    let platform = host_platform();
    if cfg!(target_os = "macos") {
        assert!(is_macintosh(&platform));
    } else if cfg!(target_os = "windows") {
        assert!(is_windows(&platform));
    } else {
        assert!(platform.ends_with(std::env::consts::ARCH));
        assert_eq!(modifier_label(&platform), GENERIC_MODIFIER);
    }
}
