//! Design-token scale and breakpoint vocabulary shared by every resolver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing token vocabulary from loosely-typed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleTokenError {
    /// The name is not part of the spacing scale.
    #[error("unknown spacing token `{0}`; expected one of xs, sm, md, lg, xl, 2xl")]
    UnknownSpaceToken(String),
    /// The name is not a known breakpoint.
    #[error("unknown breakpoint `{0}`; expected one of base, sm, md, lg, xl, 2xl")]
    UnknownBreakpoint(String),
    /// The name is not a known sizing keyword.
    #[error("unknown sizing keyword `{0}`")]
    UnknownSizeKeyword(String),
    /// The name is not a known style prop.
    #[error("unknown style prop `{0}`")]
    UnknownProp(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Ordered spacing scale tokens.
pub enum SpaceToken {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
    /// Double extra large.
    #[serde(rename = "2xl")]
    Xxl,
}

impl SpaceToken {
    /// Every token in scale order.
    pub const ALL: [SpaceToken; 6] = [
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
    ];

    /// Step on the utility spacing scale.
    pub fn scale(self) -> u8 {
        match self {
            Self::Xs => 1,
            Self::Sm => 2,
            Self::Md => 4,
            Self::Lg => 6,
            Self::Xl => 8,
            Self::Xxl => 12,
        }
    }

    /// Token name as written in props.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

impl fmt::Display for SpaceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceToken {
    type Err = StyleTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|token| token.as_str() == raw)
            .ok_or_else(|| StyleTokenError::UnknownSpaceToken(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Viewport breakpoints, in cascade order.
pub enum Breakpoint {
    /// Unprefixed, applies at every width.
    Base,
    /// `min-width: 640px`.
    Sm,
    /// `min-width: 768px`.
    Md,
    /// `min-width: 1024px`.
    Lg,
    /// `min-width: 1280px`.
    Xl,
    /// `min-width: 1536px`.
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// Every breakpoint in cascade order.
    pub const ALL: [Breakpoint; 6] = [
        Self::Base,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
    ];

    /// Breakpoint name as written in responsive maps.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    /// Variant prefix used in class names; `None` for `base`.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Base => None,
            other => Some(other.as_str()),
        }
    }

    /// Minimum viewport width in CSS pixels; `None` for `base`.
    pub fn min_width_px(self) -> Option<u32> {
        match self {
            Self::Base => None,
            Self::Sm => Some(640),
            Self::Md => Some(768),
            Self::Lg => Some(1024),
            Self::Xl => Some(1280),
            Self::Xxl => Some(1536),
        }
    }

    /// Media query matching this breakpoint and wider viewports.
    pub fn media_query(self) -> Option<String> {
        self.min_width_px()
            .map(|width| format!("(min-width: {width}px)"))
    }

    /// Applies this breakpoint's variant prefix to `class`.
    pub fn apply(self, class: impl Into<String>) -> String {
        let class = class.into();
        match self.prefix() {
            Some(prefix) => format!("{prefix}:{class}"),
            None => class,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = StyleTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bp| bp.as_str() == raw)
            .ok_or_else(|| StyleTokenError::UnknownBreakpoint(raw.to_string()))
    }
}

/// Renders `n` as an arbitrary pixel value for `prefix`.
pub(crate) fn pixel_class(prefix: &str, n: i32) -> String {
    format!("{prefix}-[{n}px]")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn space_tokens_map_to_fixed_scale() {
        let scales: Vec<u8> = SpaceToken::ALL.iter().map(|t| t.scale()).collect();
        assert_eq!(scales, vec![1, 2, 4, 6, 8, 12]);
    }

    #[test]
    fn tokens_parse_from_their_names() {
        assert_eq!("2xl".parse::<SpaceToken>(), Ok(SpaceToken::Xxl));
        assert_eq!("base".parse::<Breakpoint>(), Ok(Breakpoint::Base));
        assert_eq!(
            "huge".parse::<SpaceToken>(),
            Err(StyleTokenError::UnknownSpaceToken("huge".to_string()))
        );
    }

    #[test]
    fn base_breakpoint_is_unprefixed() {
        assert_eq!(Breakpoint::Base.apply("px-2"), "px-2");
        assert_eq!(Breakpoint::Md.apply("px-6"), "md:px-6");
        assert_eq!(Breakpoint::Xxl.apply("w-4"), "2xl:w-4");
    }

    #[test]
    fn breakpoint_media_queries_follow_min_widths() {
        assert_eq!(Breakpoint::Base.media_query(), None);
        assert_eq!(
            Breakpoint::Md.media_query().as_deref(),
            Some("(min-width: 768px)")
        );
        assert_eq!(
            Breakpoint::Xxl.media_query().as_deref(),
            Some("(min-width: 1536px)")
        );
    }

    #[test]
    fn tokens_round_trip_through_serde_names() {
        let json = serde_json::to_string(&SpaceToken::Xxl).expect("serialize");
        assert_eq!(json, "\"2xl\"");
        let parsed: Breakpoint = serde_json::from_str("\"lg\"").expect("deserialize");
        assert_eq!(parsed, Breakpoint::Lg);
    }
}
