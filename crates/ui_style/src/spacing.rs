//! Padding, margin, gap, and child-spacing props.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::token::pixel_class;
use crate::{PropValue, SpaceToken, StyleTokenError};

/// A spacing amount: a scale token or a literal pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpaceValue {
    /// Literal pixels, rendered as `prefix-[Npx]`.
    Px(i32),
    /// Scale token, rendered as `prefix-N`.
    Token(SpaceToken),
}

impl SpaceValue {
    /// Class for this amount under `prefix`.
    pub fn class(self, prefix: &str) -> String {
        match self {
            Self::Px(n) => pixel_class(prefix, n),
            Self::Token(token) => format!("{prefix}-{}", token.scale()),
        }
    }
}

impl From<SpaceToken> for SpaceValue {
    fn from(token: SpaceToken) -> Self {
        Self::Token(token)
    }
}

impl From<i32> for SpaceValue {
    fn from(px: i32) -> Self {
        Self::Px(px)
    }
}

impl From<SpaceToken> for PropValue<SpaceValue> {
    fn from(token: SpaceToken) -> Self {
        Self::Single(token.into())
    }
}

impl From<i32> for PropValue<SpaceValue> {
    fn from(px: i32) -> Self {
        Self::Single(px.into())
    }
}

impl From<SpaceValue> for PropValue<SpaceValue> {
    fn from(value: SpaceValue) -> Self {
        Self::Single(value)
    }
}

impl FromStr for SpaceValue {
    type Err = StyleTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.parse::<i32>() {
            Ok(px) => Ok(Self::Px(px)),
            Err(_) => raw.parse::<SpaceToken>().map(Self::Token),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Logical spacing props and their class prefixes.
pub enum SpacingProp {
    /// Padding on all sides.
    P,
    /// Horizontal padding.
    Px,
    /// Vertical padding.
    Py,
    /// Top padding.
    Pt,
    /// Right padding.
    Pr,
    /// Bottom padding.
    Pb,
    /// Left padding.
    Pl,
    /// Margin on all sides.
    M,
    /// Horizontal margin.
    Mx,
    /// Vertical margin.
    My,
    /// Top margin.
    Mt,
    /// Right margin.
    Mr,
    /// Bottom margin.
    Mb,
    /// Left margin.
    Ml,
    /// Gap on both axes.
    Gap,
    /// Column gap.
    GapX,
    /// Row gap.
    GapY,
    /// Horizontal spacing between children.
    SpaceX,
    /// Vertical spacing between children.
    SpaceY,
}

impl SpacingProp {
    /// Every spacing prop.
    pub const ALL: [SpacingProp; 19] = [
        Self::P,
        Self::Px,
        Self::Py,
        Self::Pt,
        Self::Pr,
        Self::Pb,
        Self::Pl,
        Self::M,
        Self::Mx,
        Self::My,
        Self::Mt,
        Self::Mr,
        Self::Mb,
        Self::Ml,
        Self::Gap,
        Self::GapX,
        Self::GapY,
        Self::SpaceX,
        Self::SpaceY,
    ];

    /// Utility class prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::P => "p",
            Self::Px => "px",
            Self::Py => "py",
            Self::Pt => "pt",
            Self::Pr => "pr",
            Self::Pb => "pb",
            Self::Pl => "pl",
            Self::M => "m",
            Self::Mx => "mx",
            Self::My => "my",
            Self::Mt => "mt",
            Self::Mr => "mr",
            Self::Mb => "mb",
            Self::Ml => "ml",
            Self::Gap => "gap",
            Self::GapX => "gap-x",
            Self::GapY => "gap-y",
            Self::SpaceX => "space-x",
            Self::SpaceY => "space-y",
        }
    }

    fn prop_name(self) -> &'static str {
        match self {
            Self::GapX => "gapX",
            Self::GapY => "gapY",
            Self::SpaceX => "spaceX",
            Self::SpaceY => "spaceY",
            other => other.prefix(),
        }
    }
}

impl fmt::Display for SpacingProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prop_name())
    }
}

impl FromStr for SpacingProp {
    type Err = StyleTokenError;

    /// Accepts either the prop name (`gapX`) or the class prefix (`gap-x`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|prop| prop.prefix() == raw || prop.prop_name() == raw)
            .ok_or_else(|| StyleTokenError::UnknownProp(raw.to_string()))
    }
}

/// Classes for one spacing prop: one per breakpoint present, none when absent.
pub fn resolve_spacing(prop: SpacingProp, value: Option<&PropValue<SpaceValue>>) -> Vec<String> {
    value
        .map(|value| value.classes(|amount| Some(amount.class(prop.prefix()))))
        .unwrap_or_default()
}

/// Resolves a prop given as plain strings, dropping it when either side is unknown.
pub fn resolve_spacing_raw(prop: &str, value: &str) -> Option<String> {
    let prop = prop.parse::<SpacingProp>().ok()?;
    let value = value.parse::<SpaceValue>().ok()?;
    Some(value.class(prop.prefix()))
}

/// Gap classes where axis-specific gaps suppress the general gap.
pub fn resolve_gap(
    gap: Option<&PropValue<SpaceValue>>,
    gap_x: Option<&PropValue<SpaceValue>>,
    gap_y: Option<&PropValue<SpaceValue>>,
) -> Vec<String> {
    if gap_x.is_some() || gap_y.is_some() {
        let mut classes = resolve_spacing(SpacingProp::GapX, gap_x);
        classes.extend(resolve_spacing(SpacingProp::GapY, gap_y));
        classes
    } else {
        resolve_spacing(SpacingProp::Gap, gap)
    }
}

/// Padding and margin props in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpacingProps {
    /// `p`
    pub p: Option<PropValue<SpaceValue>>,
    /// `px`
    pub px: Option<PropValue<SpaceValue>>,
    /// `py`
    pub py: Option<PropValue<SpaceValue>>,
    /// `pt`
    pub pt: Option<PropValue<SpaceValue>>,
    /// `pr`
    pub pr: Option<PropValue<SpaceValue>>,
    /// `pb`
    pub pb: Option<PropValue<SpaceValue>>,
    /// `pl`
    pub pl: Option<PropValue<SpaceValue>>,
    /// `m`
    pub m: Option<PropValue<SpaceValue>>,
    /// `mx`
    pub mx: Option<PropValue<SpaceValue>>,
    /// `my`
    pub my: Option<PropValue<SpaceValue>>,
    /// `mt`
    pub mt: Option<PropValue<SpaceValue>>,
    /// `mr`
    pub mr: Option<PropValue<SpaceValue>>,
    /// `mb`
    pub mb: Option<PropValue<SpaceValue>>,
    /// `ml`
    pub ml: Option<PropValue<SpaceValue>>,
}

impl SpacingProps {
    /// Classes for every present prop, general before axis before side.
    pub fn classes(&self) -> Vec<String> {
        let table = [
            (SpacingProp::P, &self.p),
            (SpacingProp::Px, &self.px),
            (SpacingProp::Py, &self.py),
            (SpacingProp::Pt, &self.pt),
            (SpacingProp::Pr, &self.pr),
            (SpacingProp::Pb, &self.pb),
            (SpacingProp::Pl, &self.pl),
            (SpacingProp::M, &self.m),
            (SpacingProp::Mx, &self.mx),
            (SpacingProp::My, &self.my),
            (SpacingProp::Mt, &self.mt),
            (SpacingProp::Mr, &self.mr),
            (SpacingProp::Mb, &self.mb),
            (SpacingProp::Ml, &self.ml),
        ];
        table
            .into_iter()
            .flat_map(|(prop, value)| resolve_spacing(prop, value.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Breakpoint, Responsive};

    #[test]
    fn padding_tokens_follow_the_scale() {
        let classes: Vec<String> = SpaceToken::ALL
            .into_iter()
            .flat_map(|token| resolve_spacing(SpacingProp::P, Some(&token.into())))
            .collect();
        assert_eq!(classes, vec!["p-1", "p-2", "p-4", "p-6", "p-8", "p-12"]);
    }

    #[test]
    fn integers_render_as_pixel_literals_including_zero() {
        assert_eq!(
            resolve_spacing(SpacingProp::Mt, Some(&0.into())),
            vec!["mt-[0px]"]
        );
        assert_eq!(
            resolve_spacing(SpacingProp::Mt, Some(&(-4).into())),
            vec!["mt-[-4px]"]
        );
        assert_eq!(
            resolve_spacing(SpacingProp::GapX, Some(&18.into())),
            vec!["gap-x-[18px]"]
        );
    }

    #[test]
    fn absent_value_yields_no_class() {
        assert!(resolve_spacing(SpacingProp::P, None).is_empty());
    }

    #[test]
    fn responsive_value_emits_only_present_breakpoints_in_order() {
        let value: PropValue<SpaceValue> = Responsive::<SpaceValue>::new()
            .base(SpaceToken::Sm.into())
            .at(Breakpoint::Md, SpaceToken::Lg.into())
            .into();
        assert_eq!(
            resolve_spacing(SpacingProp::Px, Some(&value)),
            vec!["px-2", "md:px-6"]
        );
    }

    #[test]
    fn axis_gap_suppresses_general_gap() {
        let gap = SpaceToken::Md.into();
        let gap_x = SpaceToken::Lg.into();
        let classes = resolve_gap(Some(&gap), Some(&gap_x), None);
        assert_eq!(classes, vec!["gap-x-6"]);
        assert!(!classes.contains(&"gap-4".to_string()));

        assert_eq!(resolve_gap(Some(&gap), None, None), vec!["gap-4"]);
    }

    #[test]
    fn raw_strings_resolve_or_drop() {
        assert_eq!(resolve_spacing_raw("gapY", "xl").as_deref(), Some("gap-y-8"));
        assert_eq!(resolve_spacing_raw("py", "12").as_deref(), Some("py-[12px]"));
        assert_eq!(resolve_spacing_raw("py", "huge"), None);
        assert_eq!(resolve_spacing_raw("padding", "md"), None);
    }

    #[test]
    fn spacing_props_resolve_in_table_order() {
        let props = SpacingProps {
            mb: Some(SpaceToken::Xs.into()),
            p: Some(SpaceToken::Md.into()),
            px: Some(0.into()),
            ..SpacingProps::default()
        };
        assert_eq!(props.classes(), vec!["p-4", "px-[0px]", "mb-1"]);
    }
}
