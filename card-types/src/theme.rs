//! Css custom properties a host page may override to restyle a card.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeVariable {
    Background,
    Text,
    Border,
    HeaderBackground,
    HeaderText,
    FooterBackground,
}

impl ThemeVariable {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariable::Background => "--card-bg-color",
            ThemeVariable::Text => "--card-text-color",
            ThemeVariable::Border => "--card-border-color",
            ThemeVariable::HeaderBackground => "--header-bg-color",
            ThemeVariable::HeaderText => "--header-text-color",
            ThemeVariable::FooterBackground => "--footer-bg-color",
        }
    }
}

/// Unset fields fall back to the stylesheet defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardTheme {
    pub background: Option<String>,
    pub text: Option<String>,
    pub border: Option<String>,
    pub header_background: Option<String>,
    pub header_text: Option<String>,
    pub footer_background: Option<String>,
}

impl CardTheme {
    pub fn variables(&self) -> impl Iterator<Item = (ThemeVariable, &str)> {
        [
            (ThemeVariable::Background, &self.background),
            (ThemeVariable::Text, &self.text),
            (ThemeVariable::Border, &self.border),
            (ThemeVariable::HeaderBackground, &self.header_background),
            (ThemeVariable::HeaderText, &self.header_text),
            (ThemeVariable::FooterBackground, &self.footer_background),
        ]
        .into_iter()
        .filter_map(|(variable, value)| value.as_deref().map(|value| (variable, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.variables().next().is_none()
    }

    /// Inline `style` declarations for the overridden variables.
    pub fn to_style(&self) -> String {
        self.variables()
            .map(|(variable, value)| format!("{}: {};", variable.as_str(), value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
