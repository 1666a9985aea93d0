//! Flex and grid alignment props.
//!
//! Every alignment prop is a member of the closed [`LayoutProp`] table; value
//! enums name their prop through [`LayoutValue::PROP`] so the class prefix is
//! never looked up by string.

use serde::{Deserialize, Serialize};

use crate::PropValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Logical alignment props.
pub enum LayoutProp {
    /// Main axis direction.
    Direction,
    /// Cross-axis item alignment.
    Align,
    /// Main-axis distribution.
    Justify,
    /// Wrapping behaviour.
    Wrap,
    /// Grid column track count.
    Columns,
    /// Grid row track count.
    Rows,
    /// Grid auto-placement flow.
    Flow,
}

impl LayoutProp {
    /// Class prefix for the prop.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Direction | Self::Wrap => "flex",
            Self::Align => "items",
            Self::Justify => "justify",
            Self::Columns => "grid-cols",
            Self::Rows => "grid-rows",
            Self::Flow => "grid-flow",
        }
    }
}

/// A value of one alignment prop.
pub trait LayoutValue {
    /// Prop this value belongs to.
    const PROP: LayoutProp;

    /// Class suffix following the prop prefix.
    fn suffix(&self) -> String;

    /// Full utility class.
    fn class(&self) -> String {
        format!("{}-{}", Self::PROP.prefix(), self.suffix())
    }
}

/// Classes for an optional, possibly responsive, alignment prop.
pub fn resolve_layout<V: LayoutValue>(value: Option<&PropValue<V>>) -> Vec<String> {
    value
        .map(|value| value.classes(|v| Some(v.class())))
        .unwrap_or_default()
}

macro_rules! layout_enum {
    (
        $(#[$meta:meta])*
        $name:ident => $prop:expr, {
            $($(#[$vmeta:meta])* $variant:ident => $suffix:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $suffix)] $variant),+
        }

        impl LayoutValue for $name {
            const PROP: LayoutProp = $prop;

            fn suffix(&self) -> String {
                match self {
                    $(Self::$variant => $suffix.to_string()),+
                }
            }
        }

        impl From<$name> for PropValue<$name> {
            fn from(value: $name) -> Self {
                Self::Single(value)
            }
        }
    };
}

layout_enum! {
    /// Flex main axis.
    FlexDirection => LayoutProp::Direction, {
        /// Left to right.
        Row => "row",
        /// Top to bottom.
        Col => "col",
        /// Right to left.
        RowReverse => "row-reverse",
        /// Bottom to top.
        ColReverse => "col-reverse",
    }
}

layout_enum! {
    /// Cross-axis alignment.
    Align => LayoutProp::Align, {
        /// Start edge.
        Start => "start",
        /// Centered.
        Center => "center",
        /// End edge.
        End => "end",
        /// Fill the cross axis.
        Stretch => "stretch",
        /// Text baseline.
        Baseline => "baseline",
    }
}

layout_enum! {
    /// Main-axis distribution.
    Justify => LayoutProp::Justify, {
        /// Packed at start.
        Start => "start",
        /// Packed at center.
        Center => "center",
        /// Packed at end.
        End => "end",
        /// Space between items.
        Between => "between",
        /// Space around items.
        Around => "around",
        /// Even spacing.
        Evenly => "evenly",
    }
}

layout_enum! {
    /// Flex wrapping.
    Wrap => LayoutProp::Wrap, {
        /// Wrap onto new lines.
        Wrap => "wrap",
        /// Single line.
        NoWrap => "nowrap",
        /// Wrap in reverse.
        WrapReverse => "wrap-reverse",
    }
}

layout_enum! {
    /// Grid auto-placement.
    GridFlow => LayoutProp::Flow, {
        /// Fill rows.
        Row => "row",
        /// Fill columns.
        Col => "col",
        /// Backfill holes.
        Dense => "dense",
        /// Rows, backfilling holes.
        RowDense => "row-dense",
        /// Columns, backfilling holes.
        ColDense => "col-dense",
    }
}

/// Grid column track count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Columns(pub u8);

impl LayoutValue for Columns {
    const PROP: LayoutProp = LayoutProp::Columns;

    fn suffix(&self) -> String {
        self.0.to_string()
    }
}

/// Grid row track count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rows(pub u8);

impl LayoutValue for Rows {
    const PROP: LayoutProp = LayoutProp::Rows;

    fn suffix(&self) -> String {
        self.0.to_string()
    }
}

impl From<Columns> for PropValue<Columns> {
    fn from(value: Columns) -> Self {
        Self::Single(value)
    }
}

impl From<Rows> for PropValue<Rows> {
    fn from(value: Rows) -> Self {
        Self::Single(value)
    }
}

impl From<u8> for PropValue<Columns> {
    fn from(count: u8) -> Self {
        Self::Single(Columns(count))
    }
}

impl From<u8> for PropValue<Rows> {
    fn from(count: u8) -> Self {
        Self::Single(Rows(count))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Breakpoint, Responsive};

    #[test]
    fn alignment_values_use_table_prefixes() {
        assert_eq!(FlexDirection::ColReverse.class(), "flex-col-reverse");
        assert_eq!(Wrap::NoWrap.class(), "flex-nowrap");
        assert_eq!(Align::Baseline.class(), "items-baseline");
        assert_eq!(Justify::Between.class(), "justify-between");
        assert_eq!(GridFlow::RowDense.class(), "grid-flow-row-dense");
        assert_eq!(Columns(3).class(), "grid-cols-3");
    }

    #[test]
    fn responsive_columns_prefix_breakpoints() {
        let columns: PropValue<Columns> = Responsive::new()
            .base(Columns(1))
            .at(Breakpoint::Md, Columns(2))
            .at(Breakpoint::Xl, Columns(4))
            .into();
        assert_eq!(
            resolve_layout(Some(&columns)),
            vec!["grid-cols-1", "md:grid-cols-2", "xl:grid-cols-4"]
        );
    }

    #[test]
    fn alignment_values_deserialize_from_suffix() {
        let justify: Justify = serde_json::from_str("\"evenly\"").expect("justify");
        assert_eq!(justify, Justify::Evenly);
        assert!(resolve_layout::<Align>(None).is_empty());
    }
}
