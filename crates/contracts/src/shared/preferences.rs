//! Visual preferences persisted in `localStorage`.

pub const THEME_STORAGE_KEY: &str = "ae-theme";
pub const SKIN_STORAGE_KEY: &str = "ae-skin";
pub const GLASS_VARIANT_STORAGE_KEY: &str = "ae-glass-variant";

/// Light / dark colour scheme.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Value stored under [`THEME_STORAGE_KEY`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Only `dark` selects the dark scheme; any other stored value reads as light.
    pub fn from_stored(s: &str) -> Self {
        if s == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// `aria-label` of the theme toggle button
    pub fn toggle_label(&self) -> String {
        format!(
            "Toggle dark mode (currently {})",
            if self.is_dark() { "on" } else { "off" }
        )
    }
}

/// Glass effect intensity, cycled Off → Subtle → Standard → Bold → Off.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GlassVariant {
    #[default]
    Off,
    Subtle,
    Standard,
    Bold,
}

impl GlassVariant {
    pub fn all() -> [GlassVariant; 4] {
        [
            GlassVariant::Off,
            GlassVariant::Subtle,
            GlassVariant::Standard,
            GlassVariant::Bold,
        ]
    }

    /// `data-skin` value; empty when the effect is off
    pub fn skin(&self) -> &'static str {
        match self {
            GlassVariant::Off => "",
            _ => "glass",
        }
    }

    /// `data-glass-variant` value; empty for Off and Standard
    pub fn variant(&self) -> &'static str {
        match self {
            GlassVariant::Subtle => "v-subtle",
            GlassVariant::Bold => "v-bold",
            GlassVariant::Off | GlassVariant::Standard => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GlassVariant::Off => "Off",
            GlassVariant::Subtle => "Subtle",
            GlassVariant::Standard => "Standard",
            GlassVariant::Bold => "Bold",
        }
    }

    pub fn is_on(&self) -> bool {
        !matches!(self, GlassVariant::Off)
    }

    /// Resolve a `(skin, variant)` pair. Unknown combinations fall back to Off.
    pub fn from_attributes(skin: &str, variant: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|v| v.skin() == skin && v.variant() == variant)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        match self {
            GlassVariant::Off => GlassVariant::Subtle,
            GlassVariant::Subtle => GlassVariant::Standard,
            GlassVariant::Standard => GlassVariant::Bold,
            GlassVariant::Bold => GlassVariant::Off,
        }
    }

    /// Text shown on the glass toggle button
    pub fn button_text(&self) -> String {
        format!("✨ Glass: {}", self.label())
    }
}
