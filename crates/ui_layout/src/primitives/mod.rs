//! Layout primitives and the style bundles they resolve.

use leptos::*;
use ui_style::{
    cn, resolve_gap, resolve_layout, resolve_spacing, Align, Columns, FlexDirection, GridFlow,
    Justify, PropValue, Rows, SizingProps, SpaceValue, SpacingProp, SpacingProps, VisualProps,
    Wrap,
};

mod layout;

pub use layout::{Cluster, Container, Flex, Grid, Stack, UiBox};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Root tags a polymorphic [`UiBox`] may render as.
pub enum BoxTag {
    /// `<div>`
    Div,
    /// `<section>`
    Section,
    /// `<article>`
    Article,
    /// `<aside>`
    Aside,
    /// `<header>`
    Header,
    /// `<footer>`
    Footer,
    /// `<main>`
    Main,
    /// `<nav>`
    Nav,
    /// `<span>`
    Span,
    /// `<ul>`
    Ul,
    /// `<ol>`
    Ol,
    /// `<li>`
    Li,
    /// `<form>`
    Form,
}

impl Default for BoxTag {
    fn default() -> Self {
        Self::Div
    }
}

impl BoxTag {
    /// Element name.
    pub fn token(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Section => "section",
            Self::Article => "article",
            Self::Aside => "aside",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Main => "main",
            Self::Nav => "nav",
            Self::Span => "span",
            Self::Ul => "ul",
            Self::Ol => "ol",
            Self::Li => "li",
            Self::Form => "form",
        }
    }
}

/// Spacing, sizing, and visual props of a [`UiBox`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxStyle {
    /// Padding and margin.
    pub spacing: SpacingProps,
    /// Width and height constraints.
    pub sizing: SizingProps,
    /// Background, border, radius, shadow.
    pub visual: VisualProps,
}

impl BoxStyle {
    /// Resolved classes: spacing, then sizing, then visual.
    pub fn classes(&self) -> Vec<String> {
        let mut classes = self.spacing.classes();
        classes.extend(self.sizing.classes());
        classes.extend(self.visual.classes());
        classes
    }
}

/// Flex container props.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlexStyle {
    /// Main axis.
    pub direction: Option<PropValue<FlexDirection>>,
    /// Cross-axis alignment.
    pub align: Option<PropValue<Align>>,
    /// Main-axis distribution.
    pub justify: Option<PropValue<Justify>>,
    /// Wrapping.
    pub wrap: Option<PropValue<Wrap>>,
    /// Gap between items.
    pub gap: Option<PropValue<SpaceValue>>,
}

impl FlexStyle {
    /// Resolved classes, starting with `flex`.
    pub fn classes(&self) -> Vec<String> {
        let mut classes = vec!["flex".to_string()];
        classes.extend(resolve_layout(self.direction.as_ref()));
        classes.extend(resolve_layout(self.align.as_ref()));
        classes.extend(resolve_layout(self.justify.as_ref()));
        classes.extend(resolve_layout(self.wrap.as_ref()));
        classes.extend(resolve_spacing(SpacingProp::Gap, self.gap.as_ref()));
        classes
    }
}

/// Grid container props.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridStyle {
    /// Column track count.
    pub cols: Option<PropValue<Columns>>,
    /// Row track count.
    pub rows: Option<PropValue<Rows>>,
    /// Auto-placement flow.
    pub flow: Option<PropValue<GridFlow>>,
    /// Gap on both axes; ignored when `gap_x` or `gap_y` is set.
    pub gap: Option<PropValue<SpaceValue>>,
    /// Column gap.
    pub gap_x: Option<PropValue<SpaceValue>>,
    /// Row gap.
    pub gap_y: Option<PropValue<SpaceValue>>,
    /// Cross-axis alignment.
    pub align: Option<PropValue<Align>>,
    /// Main-axis distribution.
    pub justify: Option<PropValue<Justify>>,
}

impl GridStyle {
    /// Resolved classes, starting with `grid`.
    pub fn classes(&self) -> Vec<String> {
        let mut classes = vec!["grid".to_string()];
        classes.extend(resolve_layout(self.cols.as_ref()));
        classes.extend(resolve_layout(self.rows.as_ref()));
        classes.extend(resolve_layout(self.flow.as_ref()));
        classes.extend(resolve_gap(
            self.gap.as_ref(),
            self.gap_x.as_ref(),
            self.gap_y.as_ref(),
        ));
        classes.extend(resolve_layout(self.align.as_ref()));
        classes.extend(resolve_layout(self.justify.as_ref()));
        classes
    }
}

/// Merges resolved classes with a caller override, the override winning conflicts.
pub(crate) fn compose_class(resolved: Vec<String>, class: Option<String>) -> String {
    cn(resolved.into_iter().map(Some).chain(std::iter::once(class)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ui_style::{Background, Breakpoint, Radius, Responsive, SizeKeyword, SpaceToken};

    use super::*;

    #[test]
    fn box_style_resolves_spacing_sizing_visual_in_order() {
        let style = BoxStyle {
            spacing: SpacingProps {
                p: Some(SpaceToken::Md.into()),
                ..SpacingProps::default()
            },
            sizing: SizingProps {
                width: Some(400.into()),
                height: Some(SizeKeyword::Full.into()),
                ..SizingProps::default()
            },
            visual: VisualProps {
                bg: Some(Background::Primary),
                rounded: Some(Radius::Lg),
                ..VisualProps::default()
            },
        };
        assert_eq!(
            style.classes(),
            vec!["p-4", "w-[400px]", "h-full", "bg-primary", "rounded-lg"]
        );
    }

    #[test]
    fn grid_axis_gap_takes_precedence() {
        let style = GridStyle {
            cols: Some(Columns(3).into()),
            gap: Some(SpaceToken::Md.into()),
            gap_x: Some(SpaceToken::Lg.into()),
            ..GridStyle::default()
        };
        let classes = style.classes();
        assert_eq!(classes, vec!["grid", "grid-cols-3", "gap-x-6"]);
        assert!(!classes.iter().any(|class| class == "gap-4"));
    }

    #[test]
    fn grid_general_gap_applies_without_axis_gaps() {
        let style = GridStyle {
            cols: Some(
                Responsive::new()
                    .base(Columns(1))
                    .at(Breakpoint::Lg, Columns(3))
                    .into(),
            ),
            gap: Some(SpaceToken::Sm.into()),
            ..GridStyle::default()
        };
        assert_eq!(
            style.classes(),
            vec!["grid", "grid-cols-1", "lg:grid-cols-3", "gap-2"]
        );
    }

    #[test]
    fn flex_style_uses_alignment_table() {
        let style = FlexStyle {
            direction: Some(FlexDirection::Col.into()),
            align: Some(Align::Center.into()),
            justify: Some(Justify::Between.into()),
            wrap: Some(Wrap::Wrap.into()),
            gap: Some(0.into()),
        };
        assert_eq!(
            style.classes(),
            vec![
                "flex",
                "flex-col",
                "items-center",
                "justify-between",
                "flex-wrap",
                "gap-[0px]"
            ]
        );
    }

    #[test]
    fn caller_class_overrides_resolved_class() {
        let composed = compose_class(
            vec!["flex".to_string(), "gap-4".to_string()],
            Some("gap-8 text-sm".to_string()),
        );
        assert_eq!(composed, "flex gap-8 text-sm");
        assert_eq!(compose_class(vec!["grid".to_string()], None), "grid");
    }

    #[test]
    fn box_tag_defaults_to_div() {
        assert_eq!(BoxTag::default().token(), "div");
        assert_eq!(BoxTag::Section.token(), "section");
    }
}
