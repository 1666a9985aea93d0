//! Style-prop resolution for the component registry.
//!
//! Components accept semantic props (`p = md`, `width = 400`, `bg = primary`)
//! and this crate turns them into utility class strings. Values may be a
//! single token, a pixel literal, or a breakpoint map; breakpoint maps emit
//! one prefixed class per breakpoint present, in insertion order. The output
//! is plain strings: merging conflicting classes is left to [`merge_classes`]
//! so caller-supplied classes can override resolved ones.
//!
//! The crate is pure and DOM-free so it can be exercised natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod align;
mod classes;
mod responsive;
mod sizing;
mod spacing;
mod token;
mod visual;

pub use align::{
    resolve_layout, Align, Columns, FlexDirection, GridFlow, Justify, LayoutProp, LayoutValue,
    Rows, Wrap,
};
pub use classes::{cn, join_classes, merge_classes};
pub use responsive::{PropValue, Responsive};
pub use sizing::{resolve_sizing, SizeKeyword, SizeValue, SizingProps};
pub use spacing::{
    resolve_gap, resolve_spacing, resolve_spacing_raw, SpaceValue, SpacingProp, SpacingProps,
};
pub use token::{Breakpoint, SpaceToken, StyleTokenError};
pub use visual::{resolve_visual, Background, BorderWidth, Radius, Shadow, VisualProps};
