//! Display-only label for the multiselect modifier key.

pub const MAC_MODIFIER: &str = "⌘";
pub const WINDOWS_MODIFIER: &str = "⊞";
pub const GENERIC_MODIFIER: &str = "meta";

pub fn is_macintosh(platform: &str) -> bool {
    platform.contains("Mac")
}

pub fn is_windows(platform: &str) -> bool {
    platform.contains("Win")
}

pub fn modifier_label(platform: &str) -> &'static str {
    if is_macintosh(platform) {
        MAC_MODIFIER
    } else if is_windows(platform) {
        WINDOWS_MODIFIER
    } else {
        GENERIC_MODIFIER
    }
}

pub fn multiselect_hint(platform: &str) -> String {
    format!("{}-click to multiselect", modifier_label(platform))
}

/// Navigator-style platform string for the compile target, e.g. `MacIntel`,
/// `Win32` or `Linux x86_64`.
pub fn host_platform() -> String {
    match std::env::consts::OS {
        "macos" => "MacIntel".to_string(),
        "windows" => "Win32".to_string(),
        os => {
            let mut chars = os.chars();
            let name = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            };
            format!("{name} {}", std::env::consts::ARCH)
        }
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
