use tilt_core::{CardStyle, TiltConfig};

/// Interpret an on/off attribute. Unrecognized text is ignored.
#[inline]
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Build the card config from its attributes; malformed JSON falls back to
/// defaults, and an explicit enabled flag wins over the JSON.
pub fn config_from_attrs(config_json: Option<&str>, enabled: Option<&str>) -> TiltConfig {
    let mut cfg = match config_json {
        Some(text) if !text.trim().is_empty() => TiltConfig::from_json_or_default(text),
        _ => TiltConfig::default(),
    };
    if let Some(flag) = enabled {
        match parse_flag(flag) {
            Some(on) => cfg.enabled = on,
            None => log::warn!("[tilt] ignoring enabled flag {:?}", flag),
        }
    }
    cfg
}

pub fn style_from_attr(style_json: Option<&str>) -> CardStyle {
    match style_json {
        Some(text) if !text.trim().is_empty() => match serde_json::from_str(text) {
            Ok(style) => style,
            Err(e) => {
                log::warn!("[tilt] ignoring malformed card style: {}", e);
                CardStyle::default()
            }
        },
        _ => CardStyle::default(),
    }
}
