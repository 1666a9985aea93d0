//! Background, border, radius, and shadow lookups.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Semantic background colors.
pub enum Background {
    /// Page background.
    Background,
    /// Foreground color used as a fill.
    Foreground,
    /// Brand primary.
    Primary,
    /// Brand secondary.
    Secondary,
    /// Muted fill.
    Muted,
    /// Accent fill.
    Accent,
    /// Destructive fill.
    Destructive,
    /// Card surface.
    Card,
    /// No fill.
    Transparent,
}

impl Background {
    /// Utility class.
    pub fn class(self) -> &'static str {
        match self {
            Self::Background => "bg-background",
            Self::Foreground => "bg-foreground",
            Self::Primary => "bg-primary",
            Self::Secondary => "bg-secondary",
            Self::Muted => "bg-muted",
            Self::Accent => "bg-accent",
            Self::Destructive => "bg-destructive",
            Self::Card => "bg-card",
            Self::Transparent => "bg-transparent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Border widths.
pub enum BorderWidth {
    /// `border-0`
    None,
    /// `border`
    Default,
    /// `border-2`
    Thick,
}

impl BorderWidth {
    /// Utility class.
    pub fn class(self) -> &'static str {
        match self {
            Self::None => "border-0",
            Self::Default => "border",
            Self::Thick => "border-2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Corner radius tokens.
pub enum Radius {
    /// Square corners.
    None,
    /// Small radius.
    Sm,
    /// Medium radius.
    Md,
    /// Large radius.
    Lg,
    /// Extra large radius.
    Xl,
    /// Double extra large radius.
    #[serde(rename = "2xl")]
    Xxl,
    /// Pill/circle.
    Full,
}

impl Radius {
    /// Utility class.
    pub fn class(self) -> &'static str {
        match self {
            Self::None => "rounded-none",
            Self::Sm => "rounded-sm",
            Self::Md => "rounded-md",
            Self::Lg => "rounded-lg",
            Self::Xl => "rounded-xl",
            Self::Xxl => "rounded-2xl",
            Self::Full => "rounded-full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Drop shadow tokens.
pub enum Shadow {
    /// No shadow.
    None,
    /// Small shadow.
    Sm,
    /// Medium shadow.
    Md,
    /// Large shadow.
    Lg,
    /// Extra large shadow.
    Xl,
    /// Double extra large shadow.
    #[serde(rename = "2xl")]
    Xxl,
}

impl Shadow {
    /// Utility class.
    pub fn class(self) -> &'static str {
        match self {
            Self::None => "shadow-none",
            Self::Sm => "shadow-sm",
            Self::Md => "shadow-md",
            Self::Lg => "shadow-lg",
            Self::Xl => "shadow-xl",
            Self::Xxl => "shadow-2xl",
        }
    }
}

/// Visual decoration props.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualProps {
    /// Background fill.
    pub bg: Option<Background>,
    /// Border width.
    pub border: Option<BorderWidth>,
    /// Corner radius.
    pub rounded: Option<Radius>,
    /// Drop shadow.
    pub shadow: Option<Shadow>,
}

impl VisualProps {
    /// Classes for present keys in `bg, border, rounded, shadow` order.
    pub fn classes(&self) -> Vec<String> {
        [
            self.bg.map(Background::class),
            self.border.map(BorderWidth::class),
            self.rounded.map(Radius::class),
            self.shadow.map(Shadow::class),
        ]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect()
    }
}

/// Free-function form of [`VisualProps::classes`].
pub fn resolve_visual(props: &VisualProps) -> Vec<String> {
    props.classes()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absent_visual_keys_emit_nothing() {
        assert!(resolve_visual(&VisualProps::default()).is_empty());
    }

    #[test]
    fn visual_props_resolve_in_fixed_order() {
        let props = VisualProps {
            shadow: Some(Shadow::Lg),
            bg: Some(Background::Primary),
            rounded: Some(Radius::Full),
            border: None,
        };
        assert_eq!(
            props.classes(),
            vec!["bg-primary", "rounded-full", "shadow-lg"]
        );
    }

    #[test]
    fn border_width_uses_bare_class_for_default() {
        let props = VisualProps {
            border: Some(BorderWidth::Default),
            ..VisualProps::default()
        };
        assert_eq!(props.classes(), vec!["border"]);
    }
}
