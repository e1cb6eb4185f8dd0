use serde::{Deserialize, Serialize};

/// Accent palette selectable from the Customisation menu.
///
/// Exactly one theme is active at a time; it affects presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    LightBlue,
    LightGreen,
    LightPink,
    LightYellow,
}

/// Resolved color quadruple for rendering hosts.
///
/// 8-digit hex where the trailing byte is alpha (washed backgrounds,
/// solid text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub button: &'static str,
    pub panel: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::LightBlue,
        Theme::LightGreen,
        Theme::LightPink,
        Theme::LightYellow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Theme::LightBlue => "Light Blue",
            Theme::LightGreen => "Light Green",
            Theme::LightPink => "Light Pink",
            Theme::LightYellow => "Light Yellow",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::LightBlue => Palette {
                background: "#3b82f626",
                text: "#3b82f6ff",
                button: "#3b82f640",
                panel: "#3b82f614",
            },
            Theme::LightGreen => Palette {
                background: "#22c55e26",
                text: "#22c55eff",
                button: "#22c55e40",
                panel: "#22c55e14",
            },
            Theme::LightPink => Palette {
                background: "#ec489926",
                text: "#ec4899ff",
                button: "#ec489940",
                panel: "#ec489914",
            },
            Theme::LightYellow => Palette {
                background: "#eab30826",
                text: "#eab308ff",
                button: "#eab30840",
                panel: "#eab30814",
            },
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "lightblue" | "blue" => Ok(Theme::LightBlue),
            "lightgreen" | "green" => Ok(Theme::LightGreen),
            "lightpink" | "pink" => Ok(Theme::LightPink),
            "lightyellow" | "yellow" => Ok(Theme::LightYellow),
            _ => Err(format!("unknown theme: '{s}'")),
        }
    }
}
