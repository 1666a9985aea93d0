//! Width and height props.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::token::pixel_class;
use crate::{PropValue, SpaceToken, StyleTokenError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Named sizes passed through verbatim after the axis prefix.
pub enum SizeKeyword {
    /// `100%`
    Full,
    /// Viewport extent.
    Screen,
    /// `auto`
    Auto,
    /// `min-content`
    Min,
    /// `max-content`
    Max,
    /// `fit-content`
    Fit,
}

impl SizeKeyword {
    /// Keyword as written in class names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Screen => "screen",
            Self::Auto => "auto",
            Self::Min => "min",
            Self::Max => "max",
            Self::Fit => "fit",
        }
    }
}

impl FromStr for SizeKeyword {
    type Err = StyleTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        [
            Self::Full,
            Self::Screen,
            Self::Auto,
            Self::Min,
            Self::Max,
            Self::Fit,
        ]
        .into_iter()
        .find(|kw| kw.as_str() == raw)
        .ok_or_else(|| StyleTokenError::UnknownSizeKeyword(raw.to_string()))
    }
}

/// One sizing amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    /// Literal pixels.
    Px(i32),
    /// Scale token, shared with the spacing scale.
    Token(SpaceToken),
    /// Named keyword.
    Keyword(SizeKeyword),
}

impl SizeValue {
    /// Class for this amount under `prefix`.
    pub fn class(self, prefix: &str) -> String {
        match self {
            Self::Px(n) => pixel_class(prefix, n),
            Self::Token(token) => format!("{prefix}-{}", token.scale()),
            Self::Keyword(keyword) => format!("{prefix}-{}", keyword.as_str()),
        }
    }
}

impl From<i32> for PropValue<SizeValue> {
    fn from(px: i32) -> Self {
        Self::Single(SizeValue::Px(px))
    }
}

impl From<SpaceToken> for PropValue<SizeValue> {
    fn from(token: SpaceToken) -> Self {
        Self::Single(SizeValue::Token(token))
    }
}

impl From<SizeKeyword> for PropValue<SizeValue> {
    fn from(keyword: SizeKeyword) -> Self {
        Self::Single(SizeValue::Keyword(keyword))
    }
}

impl From<SizeValue> for PropValue<SizeValue> {
    fn from(value: SizeValue) -> Self {
        Self::Single(value)
    }
}

/// Width and height constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SizingProps {
    /// `w-*`
    pub width: Option<PropValue<SizeValue>>,
    /// `h-*`
    pub height: Option<PropValue<SizeValue>>,
    /// `min-w-*`
    pub min_width: Option<PropValue<SizeValue>>,
    /// `max-w-*`
    pub max_width: Option<PropValue<SizeValue>>,
    /// `min-h-*`
    pub min_height: Option<PropValue<SizeValue>>,
    /// `max-h-*`
    pub max_height: Option<PropValue<SizeValue>>,
}

impl SizingProps {
    /// Classes in axis order: width, height, min/max width, min/max height.
    pub fn classes(&self) -> Vec<String> {
        let axes = [
            ("w", &self.width),
            ("h", &self.height),
            ("min-w", &self.min_width),
            ("max-w", &self.max_width),
            ("min-h", &self.min_height),
            ("max-h", &self.max_height),
        ];
        axes.into_iter()
            .filter_map(|(prefix, value)| {
                value
                    .as_ref()
                    .map(|value| value.classes(|size| Some(size.class(prefix))))
            })
            .flatten()
            .collect()
    }
}

/// Free-function form of [`SizingProps::classes`].
pub fn resolve_sizing(props: &SizingProps) -> Vec<String> {
    props.classes()
}
