//! Class-string joining and conflict-aware merging.

/// Joins optional class segments, dropping absent and blank ones.
pub fn join_classes<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for segment in segments.into_iter().flatten() {
        let segment = segment.as_ref().trim();
        if segment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(segment);
    }
    out
}

/// Joins then merges class segments; the usual entry point for components.
pub fn cn<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    merge_classes(&join_classes(segments))
}

/// Utility groups whose members conflict with each other.
///
/// Ordered so that longer prefixes are tried before shorter ones they extend.
const PREFIX_GROUPS: &[&str] = &[
    "space-x", "space-y", "gap-x", "gap-y", "gap", "min-w", "max-w", "min-h", "max-h",
    "grid-cols", "grid-rows", "grid-flow", "rounded-tl", "rounded-tr", "rounded-br",
    "rounded-bl", "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded", "shadow",
    "items", "justify-items", "justify-self", "justify", "px", "py", "pt", "pr", "pb", "pl", "p",
    "mx", "my", "mt", "mr", "mb", "ml", "m", "w", "h", "from", "via", "to", "bg",
];

const EXACT_GROUPS: &[(&str, &str)] = &[
    ("flex-row", "flex-direction"),
    ("flex-col", "flex-direction"),
    ("flex-row-reverse", "flex-direction"),
    ("flex-col-reverse", "flex-direction"),
    ("flex-wrap", "flex-wrap"),
    ("flex-nowrap", "flex-wrap"),
    ("flex-wrap-reverse", "flex-wrap"),
    ("space-x-reverse", "space-x-reverse"),
    ("space-y-reverse", "space-y-reverse"),
    ("block", "display"),
    ("inline", "display"),
    ("inline-block", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("contents", "display"),
    ("hidden", "display"),
];

const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];

/// Groups a later class of the key group overrides besides its own.
fn overridden_by(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        _ => &[],
    }
}

/// Splits `md:hover:px-2` into (`md:hover:`, `px-2`), ignoring colons inside brackets.
fn split_variants(class: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split_at = 0usize;
    for (idx, ch) in class.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split_at = idx + 1,
            _ => {}
        }
    }
    class.split_at(split_at)
}

/// Narrows the `bg` prefix: only colors share the `bg` group.
fn background_group(value: &str) -> &'static str {
    let head = value.split('-').next().unwrap_or(value);
    match head {
        "opacity" => "bg-opacity",
        "clip" => "bg-clip",
        "origin" => "bg-origin",
        "gradient" | "none" => "bg-image",
        "fixed" | "local" | "scroll" => "bg-attachment",
        "auto" | "cover" | "contain" => "bg-size",
        "repeat" | "no" => "bg-repeat",
        "bottom" | "center" | "left" | "right" | "top" => "bg-position",
        _ => "bg",
    }
}

/// Narrows the `shadow` prefix: sizes and colors are separate groups.
fn shadow_group(value: &str) -> &'static str {
    if value.is_empty() || value.starts_with('[') || SHADOW_SIZES.contains(&value) {
        "shadow"
    } else {
        "shadow-color"
    }
}

fn utility_group(base: &str) -> Option<&'static str> {
    let base = base.strip_prefix('-').unwrap_or(base);
    if let Some((_, group)) = EXACT_GROUPS.iter().find(|(class, _)| *class == base) {
        return Some(*group);
    }
    if base == "border" {
        return Some("border");
    }
    if let Some(rest) = base.strip_prefix("border-") {
        if rest.starts_with('[') || rest.chars().all(|ch| ch.is_ascii_digit()) {
            return Some("border");
        }
    }
    let (group, value) = PREFIX_GROUPS.iter().copied().find_map(|prefix| {
        if base == prefix {
            return Some((prefix, ""));
        }
        base.strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
            .filter(|rest| !rest.is_empty())
            .map(|rest| (prefix, rest))
    })?;
    Some(match group {
        "bg" => background_group(value),
        "shadow" => shadow_group(value),
        _ => group,
    })
}

/// Deduplicates utility classes with last-writer-wins per variant and group.
///
/// Unknown classes are kept; exact duplicates collapse to the last occurrence.
pub fn merge_classes(input: &str) -> String {
    let mut kept: Vec<(Option<(&str, &'static str)>, &str)> = Vec::new();

    for class in input.split_whitespace() {
        let (variants, base) = split_variants(class);
        let key = utility_group(base).map(|group| (variants, group));

        match key {
            Some((variants, group)) => {
                let shadowed = overridden_by(group);
                kept.retain(|(existing, _)| match existing {
                    Some((existing_variants, existing_group)) => {
                        *existing_variants != variants
                            || (*existing_group != group
                                && !shadowed.contains(existing_group))
                    }
                    None => true,
                });
            }
            None => kept.retain(|(_, existing)| *existing != class),
        }
        kept.push((key, class));
    }

    kept.into_iter()
        .map(|(_, class)| class)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn join_drops_absent_and_blank_segments() {
        let joined = join_classes([Some("flex"), None, Some("  "), Some("gap-4")]);
        assert_eq!(joined, "flex gap-4");
    }

    #[test]
    fn later_class_in_same_group_wins() {
        assert_eq!(merge_classes("p-2 bg-muted p-4"), "bg-muted p-4");
        assert_eq!(merge_classes("w-[40px] w-full"), "w-full");
    }

    #[test]
    fn general_group_overrides_earlier_axis_classes() {
        assert_eq!(merge_classes("px-2 py-1 p-4"), "p-4");
        assert_eq!(merge_classes("p-4 px-2"), "p-4 px-2");
        assert_eq!(merge_classes("gap-x-6 gap-2"), "gap-2");
    }

    #[test]
    fn variants_are_merged_independently() {
        assert_eq!(merge_classes("md:p-2 p-4 md:p-6"), "p-4 md:p-6");
        assert_eq!(merge_classes("px-2 md:px-6"), "px-2 md:px-6");
    }

    #[test]
    fn similar_prefixes_do_not_collide() {
        assert_eq!(
            merge_classes("m-2 min-w-4 max-w-8 mx-1"),
            "m-2 min-w-4 max-w-8 mx-1"
        );
        assert_eq!(merge_classes("gap-x-2 gap-y-4"), "gap-x-2 gap-y-4");
    }

    #[test]
    fn border_width_and_color_are_separate_groups() {
        assert_eq!(
            merge_classes("border border-primary border-2"),
            "border-primary border-2"
        );
    }

    #[test]
    fn unknown_classes_keep_last_duplicate() {
        assert_eq!(
            merge_classes("text-sm font-bold text-sm"),
            "font-bold text-sm"
        );
    }

    #[test]
    fn display_and_direction_use_exact_groups() {
        assert_eq!(merge_classes("flex hidden flex-col"), "hidden flex-col");
        assert_eq!(
            cn([Some("flex flex-row"), Some("flex-col")]),
            "flex flex-col"
        );
    }

    #[test]
    fn background_color_and_image_utilities_coexist() {
        assert_eq!(
            merge_classes("bg-gradient-to-r from-primary to-accent bg-clip-text"),
            "bg-gradient-to-r from-primary to-accent bg-clip-text"
        );
        assert_eq!(merge_classes("bg-primary bg-opacity-50"), "bg-primary bg-opacity-50");
        assert_eq!(merge_classes("bg-primary bg-cover bg-muted"), "bg-cover bg-muted");
        assert_eq!(merge_classes("from-primary from-accent"), "from-accent");
    }

    #[test]
    fn shadow_size_and_color_are_separate_groups() {
        assert_eq!(merge_classes("shadow-lg shadow-primary"), "shadow-lg shadow-primary");
        assert_eq!(merge_classes("shadow shadow-primary shadow-xl"), "shadow-primary shadow-xl");
    }

    #[test]
    fn rounded_corners_are_side_groups() {
        assert_eq!(merge_classes("rounded-lg rounded-t-none"), "rounded-lg rounded-t-none");
        assert_eq!(merge_classes("rounded-t-none rounded-bl-md rounded-xl"), "rounded-xl");
        assert_eq!(
            merge_classes("rounded-tl-sm rounded-br-sm rounded-t-lg"),
            "rounded-br-sm rounded-t-lg"
        );
    }

    #[test]
    fn justify_variants_do_not_collide() {
        assert_eq!(
            merge_classes("justify-between justify-items-center justify-self-end"),
            "justify-between justify-items-center justify-self-end"
        );
        assert_eq!(merge_classes("justify-start justify-end"), "justify-end");
    }

    #[test]
    fn space_reverse_is_independent_of_space_amount() {
        assert_eq!(merge_classes("space-x-4 space-x-reverse"), "space-x-4 space-x-reverse");
        assert_eq!(merge_classes("space-y-2 space-y-6"), "space-y-6");
    }
}
