//! Static card look, published once when a card mounts.

use crate::constants::{DEFAULT_BEHIND_GLOW_COLOR, DEFAULT_BEHIND_GLOW_SIZE, DEFAULT_INNER_GRADIENT};
use crate::publish::Publisher;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardStyle {
    pub icon_url: Option<String>,
    pub grain_url: Option<String>,
    pub inner_gradient: String,
    /// Per-card override; wins over `inner_gradient` when set.
    pub custom_inner_gradient: Option<String>,
    pub behind_glow_color: String,
    pub behind_glow_size: String,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            icon_url: None,
            grain_url: None,
            inner_gradient: DEFAULT_INNER_GRADIENT.to_string(),
            custom_inner_gradient: None,
            behind_glow_color: DEFAULT_BEHIND_GLOW_COLOR.to_string(),
            behind_glow_size: DEFAULT_BEHIND_GLOW_SIZE.to_string(),
        }
    }
}

impl CardStyle {
    pub fn vars(&self) -> [(&'static str, String); 5] {
        [
            ("--icon", css_url(self.icon_url.as_deref())),
            ("--grain", css_url(self.grain_url.as_deref())),
            ("--inner-gradient", self.resolved_inner_gradient().to_string()),
            ("--behind-glow-color", self.behind_glow_color.clone()),
            ("--behind-glow-size", self.behind_glow_size.clone()),
        ]
    }

    pub fn resolved_inner_gradient(&self) -> &str {
        self.custom_inner_gradient
            .as_deref()
            .unwrap_or(&self.inner_gradient)
    }

    pub fn apply<P: Publisher + ?Sized>(&self, publisher: &mut P) {
        for (name, value) in self.vars() {
            publisher.write_var(name, &value);
        }
    }
}

fn css_url(url: Option<&str>) -> String {
    match url {
        Some(u) if !u.is_empty() => format!("url({})", u),
        _ => "none".to_string(),
    }
}
