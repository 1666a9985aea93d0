//! Layout primitives for the component registry.
//!
//! The primitives are thin Leptos wrappers over `ui_style`: each collects its
//! semantic props into a style bundle ([`BoxStyle`], [`FlexStyle`],
//! [`GridStyle`]), resolves it to utility classes, and merges a caller
//! `class` last so consumers can override any resolved utility. Roots keep
//! the `data-ui-primitive`/`data-ui-kind` attributes so styling layers and
//! tests can target primitives without relying on class names.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    BoxStyle, BoxTag, Cluster, Container, Flex, FlexStyle, Grid, GridStyle, Stack, UiBox,
};

/// Convenience imports for crates composing the layout primitives.
pub mod prelude {
    pub use crate::{BoxTag, Cluster, Container, Flex, Grid, Stack, UiBox};
    pub use ui_style::{
        Align, Background, BorderWidth, Breakpoint, Columns, FlexDirection, GridFlow, Justify,
        PropValue, Radius, Responsive, Rows, Shadow, SizeKeyword, SizeValue, SpaceToken,
        SpaceValue, Wrap,
    };
}
