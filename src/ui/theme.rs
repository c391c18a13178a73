use log::*;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Get the default theme (Rose Pine Dawn).
    ///
    pub fn default() -> Self {
        Self::rose_pine_dawn()
    }

    /// Resolve a theme by its configured name, falling back to the
    /// default for unknown names.
    ///
    pub fn from_name(name: &str) -> Self {
        match name {
            "rose-pine-dawn" => Self::rose_pine_dawn(),
            "tokyo-night" => Self::tokyo_night(),
            other => {
                warn!("Unknown theme '{}', using default", other);
                Self::default()
            }
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            },
            secondary: ColorSpec {
                r: 59,
                g: 130,
                b: 246,
            },
            accent: ColorSpec {
                r: 234,
                g: 154,
                b: 151,
            },
            banner: ColorSpec {
                r: 144,
                g: 122,
                b: 169,
            },
            text: ColorSpec {
                r: 87,
                g: 82,
                b: 121,
            },
            text_secondary: ColorSpec {
                r: 121,
                g: 117,
                b: 147,
            },
            text_muted: ColorSpec {
                r: 152,
                g: 147,
                b: 165,
            },
            background: ColorSpec {
                r: 250,
                g: 244,
                b: 237,
            },
            surface: ColorSpec {
                r: 255,
                g: 250,
                b: 243,
            },
            success: ColorSpec {
                r: 86,
                g: 148,
                b: 159,
            },
            warning: ColorSpec {
                r: 234,
                g: 157,
                b: 52,
            },
            error: ColorSpec {
                r: 180,
                g: 99,
                b: 122,
            },
            info: ColorSpec {
                r: 40,
                g: 105,
                b: 131,
            },
            border_active: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            },
            border_normal: ColorSpec {
                r: 206,
                g: 202,
                b: 205,
            },
            highlight_bg: ColorSpec {
                r: 244,
                g: 237,
                b: 232,
            },
            highlight_fg: ColorSpec {
                r: 87,
                g: 82,
                b: 121,
            },
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            },
            secondary: ColorSpec {
                r: 187,
                g: 154,
                b: 247,
            },
            accent: ColorSpec {
                r: 255,
                g: 158,
                b: 100,
            },
            banner: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            },
            text: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            },
            text_secondary: ColorSpec {
                r: 169,
                g: 177,
                b: 214,
            },
            text_muted: ColorSpec {
                r: 86,
                g: 95,
                b: 137,
            },
            background: ColorSpec {
                r: 26,
                g: 27,
                b: 38,
            },
            surface: ColorSpec {
                r: 36,
                g: 40,
                b: 59,
            },
            success: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            },
            warning: ColorSpec {
                r: 224,
                g: 175,
                b: 104,
            },
            error: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            },
            info: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            },
            border_active: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            },
            border_normal: ColorSpec {
                r: 59,
                g: 66,
                b: 97,
            },
            highlight_bg: ColorSpec {
                r: 41,
                g: 46,
                b: 66,
            },
            highlight_fg: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_resolves_known_themes() {
        assert_eq!(Theme::from_name("tokyo-night").name, "tokyo-night");
        assert_eq!(Theme::from_name("rose-pine-dawn").name, "rose-pine-dawn");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        assert_eq!(Theme::from_name("no-such-theme").name, Theme::default().name);
    }
}
