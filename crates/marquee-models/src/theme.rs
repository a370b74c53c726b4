use serde::{Deserialize, Serialize};

/// Palette applied when nothing is persisted or the persisted value cannot
/// be read.
pub const DEFAULT_THEME: &str = "FunkyFlix";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemePalette {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub background: String,
    pub background_secondary: String,
    pub card_background: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub text_secondary: String,
}

/// Built-in palettes, in presentation order.
pub fn builtin_themes() -> Vec<ThemePalette> {
    vec![
        ThemePalette {
            name: "FunkyFlix".to_string(),
            colors: ThemeColors {
                background: "#1a0b2e".to_string(),
                background_secondary: "#16213e".to_string(),
                card_background: "#2d1b4e".to_string(),
                primary: "#ff006e".to_string(),
                secondary: "#00f5ff".to_string(),
                accent: "#fb5607".to_string(),
                text: "#f8f9fa".to_string(),
                text_secondary: "#adb5bd".to_string(),
            },
        },
        ThemePalette {
            name: "SunsetPop".to_string(),
            colors: ThemeColors {
                background: "#2d1b4e".to_string(),
                background_secondary: "#3d2963".to_string(),
                card_background: "#4a3575".to_string(),
                primary: "#ff9e00".to_string(),
                secondary: "#ff006e".to_string(),
                accent: "#8338ec".to_string(),
                text: "#ffffff".to_string(),
                text_secondary: "#d4a5ff".to_string(),
            },
        },
    ]
}

/// Exact-name palette lookup.
pub fn theme_by_name(name: &str) -> Option<ThemePalette> {
    builtin_themes().into_iter().find(|theme| theme.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_exists() {
        assert!(theme_by_name(DEFAULT_THEME).is_some());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(theme_by_name("SunsetPop").is_some());
        assert!(theme_by_name("sunsetpop").is_none());
    }

    #[test]
    fn test_colors_serialize_camel_case() {
        let theme = theme_by_name(DEFAULT_THEME).unwrap();
        let json = serde_json::to_string(&theme).unwrap();
        assert!(json.contains("\"backgroundSecondary\":\"#16213e\""));
        assert!(json.contains("\"cardBackground\":\"#2d1b4e\""));
        assert!(json.contains("\"textSecondary\":\"#adb5bd\""));
    }
}
