use super::*;
use ui_style::{Background, BorderWidth, Radius, Shadow, SizeValue, SpaceToken};

#[component]
/// Polymorphic box resolving spacing, sizing, and visual props to utility classes.
///
/// `tag` selects the root element and defaults to `div`. `class` is merged
/// last, so its utilities override resolved ones.
pub fn UiBox(
    #[prop(optional)] tag: BoxTag,
    #[prop(optional, into)] p: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] px: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] py: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] pt: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] pr: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] pb: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] pl: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] m: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] mx: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] my: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] mt: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] mr: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] mb: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] ml: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] width: Option<PropValue<SizeValue>>,
    #[prop(optional, into)] height: Option<PropValue<SizeValue>>,
    #[prop(optional, into)] min_width: Option<PropValue<SizeValue>>,
    #[prop(optional, into)] max_width: Option<PropValue<SizeValue>>,
    #[prop(optional, into)] min_height: Option<PropValue<SizeValue>>,
    #[prop(optional, into)] max_height: Option<PropValue<SizeValue>>,
    #[prop(optional)] bg: Option<Background>,
    #[prop(optional)] border: Option<BorderWidth>,
    #[prop(optional)] rounded: Option<Radius>,
    #[prop(optional)] shadow: Option<Shadow>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let style = BoxStyle {
        spacing: SpacingProps {
            p,
            px,
            py,
            pt,
            pr,
            pb,
            pl,
            m,
            mx,
            my,
            mt,
            mr,
            mb,
            ml,
        },
        sizing: SizingProps {
            width,
            height,
            min_width,
            max_width,
            min_height,
            max_height,
        },
        visual: VisualProps {
            bg,
            border,
            rounded,
            shadow,
        },
    };

    html::custom(html::Custom::new(tag.token()))
        .attr("class", compose_class(style.classes(), class))
        .attr("id", id)
        .attr("data-ui-primitive", "true")
        .attr("data-ui-kind", "box")
        .attr("data-ui-slot", ui_slot)
        .child(children())
}

#[component]
/// Flex container.
pub fn Flex(
    #[prop(optional, into)] direction: Option<PropValue<FlexDirection>>,
    #[prop(optional, into)] align: Option<PropValue<Align>>,
    #[prop(optional, into)] justify: Option<PropValue<Justify>>,
    #[prop(optional, into)] wrap: Option<PropValue<Wrap>>,
    #[prop(optional, into)] gap: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let style = FlexStyle {
        direction,
        align,
        justify,
        wrap,
        gap,
    };
    view! {
        <div
            class=compose_class(style.classes(), class)
            data-ui-primitive="true"
            data-ui-kind="flex"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Vertical layout stack.
pub fn Stack(
    #[prop(optional, into)] gap: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] align: Option<PropValue<Align>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let style = FlexStyle {
        direction: Some(FlexDirection::Col.into()),
        align,
        gap: gap.or_else(|| Some(SpaceToken::Md.into())),
        ..FlexStyle::default()
    };
    view! {
        <div
            class=compose_class(style.classes(), class)
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal wrapping cluster.
pub fn Cluster(
    #[prop(optional, into)] gap: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] align: Option<PropValue<Align>>,
    #[prop(optional, into)] justify: Option<PropValue<Justify>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let style = FlexStyle {
        direction: Some(FlexDirection::Row.into()),
        align: align.or_else(|| Some(Align::Center.into())),
        justify,
        wrap: Some(Wrap::Wrap.into()),
        gap: gap.or_else(|| Some(SpaceToken::Sm.into())),
    };
    view! {
        <div
            class=compose_class(style.classes(), class)
            data-ui-primitive="true"
            data-ui-kind="cluster"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Grid layout primitive.
///
/// `gap_x`/`gap_y` suppress `gap` entirely when either is set.
pub fn Grid(
    #[prop(optional, into)] cols: Option<PropValue<Columns>>,
    #[prop(optional, into)] rows: Option<PropValue<Rows>>,
    #[prop(optional, into)] flow: Option<PropValue<GridFlow>>,
    #[prop(optional, into)] gap: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] gap_x: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] gap_y: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] align: Option<PropValue<Align>>,
    #[prop(optional, into)] justify: Option<PropValue<Justify>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let style = GridStyle {
        cols,
        rows,
        flow,
        gap,
        gap_x,
        gap_y,
        align,
        justify,
    };
    view! {
        <div
            class=compose_class(style.classes(), class)
            data-ui-primitive="true"
            data-ui-kind="grid"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Centered, width-capped page container.
pub fn Container(
    #[prop(optional, into)] max_width: Option<PropValue<SizeValue>>,
    #[prop(optional, into)] px: Option<PropValue<SpaceValue>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let mut classes = vec!["mx-auto".to_string(), "w-full".to_string()];
    classes.extend(
        SizingProps {
            max_width,
            ..SizingProps::default()
        }
        .classes(),
    );
    classes.extend(resolve_spacing(
        SpacingProp::Px,
        Some(&px.unwrap_or_else(|| SpaceToken::Md.into())),
    ));
    view! {
        <div
            class=compose_class(classes, class)
            data-ui-primitive="true"
            data-ui-kind="container"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}
