use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values mean "follow the system".
    pub fn from_value(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }
}

/// Apply the theme by setting or removing the `data-theme` attribute on `<html>`.
/// - `Light` / `Dark` force that scheme
/// - `System` removes the attribute, CSS @media handles it
pub fn apply_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                let _ = match theme {
                    Theme::System => html.remove_attribute("data-theme"),
                    forced => html.set_attribute("data-theme", forced.as_str()),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_value_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_value(theme.as_str()), theme);
        }
        assert_eq!(Theme::from_value("sepia"), Theme::System);
    }
}
