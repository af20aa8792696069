//! Serde defaults for record fields the server may omit.

/// Color the device server starts with before its first step.
pub fn default_device_color() -> String {
    "rgb(100,30,50)".to_string()
}

pub fn default_copies() -> u32 {
    1
}
