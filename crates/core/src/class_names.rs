//! Class-name composition for utility-first CSS.
//!
//! [`clsx`] flattens conditional inputs into one class string, [`tw_merge`]
//! drops utilities overridden by a later utility of the same group, and
//! [`cn`] does both.

use std::collections::HashSet;

/// One input to [`clsx`].
#[derive(Clone, Debug, PartialEq)]
pub enum ClassValue<'a> {
    Name(&'a str),
    Toggle(&'a str, bool),
    Maybe(Option<&'a str>),
    List(Vec<ClassValue<'a>>),
}

impl<'a> From<&'a str> for ClassValue<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<Option<&'a str>> for ClassValue<'a> {
    fn from(name: Option<&'a str>) -> Self {
        Self::Maybe(name)
    }
}

impl<'a> From<(&'a str, bool)> for ClassValue<'a> {
    fn from((name, on): (&'a str, bool)) -> Self {
        Self::Toggle(name, on)
    }
}

impl<'a> From<Vec<ClassValue<'a>>> for ClassValue<'a> {
    fn from(list: Vec<ClassValue<'a>>) -> Self {
        Self::List(list)
    }
}

impl<'a> ClassValue<'a> {
    fn collect_into(&self, out: &mut Vec<&'a str>) {
        match self {
            Self::Name(name) | Self::Toggle(name, true) | Self::Maybe(Some(name)) => {
                if !name.is_empty() {
                    out.push(*name);
                }
            }
            Self::Toggle(_, false) | Self::Maybe(None) => {}
            Self::List(list) => list.iter().for_each(|v| v.collect_into(out)),
        }
    }
}

/// Join all enabled, non-empty class names with single spaces.
pub fn clsx(inputs: &[ClassValue<'_>]) -> String {
    let mut names = Vec::new();
    for input in inputs {
        input.collect_into(&mut names);
    }
    names.join(" ")
}

/// Merge utility classes so that a later class wins over an earlier one from
/// the same group under the same variants.
pub fn tw_merge(classes: &str) -> String {
    let tokens: Vec<&str> = classes.split_whitespace().collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    // Walk backwards: the first occurrence seen is the one that wins.
    for &token in tokens.iter().rev() {
        let parsed = ParsedClass::parse(token);
        let Some(group) = group_of(parsed.base) else {
            if seen.insert(format!("raw:{token}")) {
                kept.push(token);
            }
            continue;
        };

        let scope = parsed.scope();
        if !seen.insert(format!("{scope}{group}")) {
            continue;
        }
        for overridden in overridden_groups(group) {
            seen.insert(format!("{scope}{overridden}"));
        }
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

/// `tw_merge(clsx(inputs))`
pub fn cn(inputs: &[ClassValue<'_>]) -> String {
    tw_merge(&clsx(inputs))
}

struct ParsedClass<'a> {
    variants: Vec<&'a str>,
    important: bool,
    base: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(token: &'a str) -> Self {
        let mut variants: Vec<&str> = Vec::new();
        let mut depth = 0usize;
        let mut start = 0usize;
        // Split on ':' outside of arbitrary-value brackets.
        for (i, c) in token.char_indices() {
            match c {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    variants.push(&token[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        let mut base = &token[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }
        let base = base.strip_prefix('-').unwrap_or(base);
        variants.sort_unstable();
        Self {
            variants,
            important,
            base,
        }
    }

    fn scope(&self) -> String {
        let mut scope = self.variants.join(":");
        scope.push(':');
        if self.important {
            scope.push('!');
        }
        scope
    }
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const VISIBILITY: &[&str] = &["visible", "invisible", "collapse"];
const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SIDES: &[&str] = &["x", "y", "t", "r", "b", "l", "s", "e"];

const FONT_FAMILIES: &[&str] = &["sans", "serif", "mono"];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const BG_SIZES: &[&str] = &["auto", "cover", "contain"];
const BG_POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];
const BG_REPEATS: &[&str] = &[
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "repeat-round",
    "repeat-space",
];
const BG_ATTACHMENTS: &[&str] = &["fixed", "local", "scroll"];
const SPECIAL_COLORS: &[&str] = &["inherit", "current", "transparent", "black", "white"];
const PALETTE: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

/// Prefix groups, longest prefixes first so `min-w-` wins over `w-`.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("translate-x-", "translate-x"),
    ("translate-y-", "translate-y"),
    ("justify-items-", "justify-items"),
    ("justify-self-", "justify-self"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("inset-x-", "inset-x"),
    ("inset-y-", "inset-y"),
    ("scale-x-", "scale-x"),
    ("scale-y-", "scale-y"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("min-w-", "min-w"),
    ("max-w-", "max-w"),
    ("min-h-", "min-h"),
    ("max-h-", "max-h"),
    ("overflow-", "overflow"),
    ("opacity-", "opacity"),
    ("duration-", "duration"),
    ("tracking-", "tracking"),
    ("leading-", "leading"),
    ("justify-", "justify-content"),
    ("items-", "items"),
    ("self-", "self"),
    ("rotate-", "rotate"),
    ("scale-", "scale"),
    ("inset-", "inset"),
    ("bottom-", "bottom"),
    ("right-", "right"),
    ("left-", "left"),
    ("top-", "top"),
    ("size-", "size"),
    ("ease-", "ease"),
    ("gap-", "gap"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("ps-", "ps"),
    ("pe-", "pe"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("ms-", "ms"),
    ("me-", "me"),
    ("m-", "m"),
    ("w-", "w"),
    ("h-", "h"),
    ("z-", "z"),
];

/// `None` for anything not confidently classified, so it is never dropped.
fn group_of(base: &str) -> Option<&'static str> {
    if DISPLAY.contains(&base) {
        return Some("display");
    }
    if POSITION.contains(&base) {
        return Some("position");
    }
    if VISIBILITY.contains(&base) {
        return Some("visibility");
    }
    if base == "shadow" {
        return Some("shadow-size");
    }
    if let Some(rest) = base.strip_prefix("shadow-") {
        return if SHADOW_SIZES.contains(&rest) {
            Some("shadow-size")
        } else if is_color(rest) {
            Some("shadow-color")
        } else {
            None
        };
    }
    if base == "transition" || base.starts_with("transition-") {
        return Some("transition");
    }
    if let Some(rest) = base.strip_prefix("text-") {
        return if FONT_SIZES.contains(&rest) {
            Some("font-size")
        } else if TEXT_ALIGN.contains(&rest) {
            Some("text-align")
        } else if is_color(rest) {
            Some("text-color")
        } else {
            None
        };
    }
    if let Some(rest) = base.strip_prefix("font-") {
        return if FONT_WEIGHTS.contains(&rest) {
            Some("font-weight")
        } else if FONT_FAMILIES.contains(&rest) {
            Some("font-family")
        } else {
            None
        };
    }
    if let Some(rest) = base.strip_prefix("flex-") {
        return match rest {
            "row" | "row-reverse" | "col" | "col-reverse" => Some("flex-direction"),
            "wrap" | "wrap-reverse" | "nowrap" => Some("flex-wrap"),
            "1" | "auto" | "initial" | "none" => Some("flex"),
            _ => None,
        };
    }
    if let Some(rest) = base.strip_prefix("bg-") {
        return bg_group(rest);
    }
    if base == "rounded" || base.starts_with("rounded-") {
        return Some(rounded_group(base));
    }
    if base == "border" || base.starts_with("border-") {
        return border_group(base);
    }
    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| base.starts_with(prefix))
        .map(|&(_, group)| group)
}

/// Palette shades (`red-500`, `sky-400/50`), keywords (`black`, `current`) and
/// arbitrary colors (`[#ff0000]`).
fn is_color(value: &str) -> bool {
    if ["[#", "[rgb", "[hsl", "[color:"]
        .iter()
        .any(|p| value.starts_with(p))
    {
        return true;
    }
    let value = value.split_once('/').map_or(value, |(c, _)| c);
    if SPECIAL_COLORS.contains(&value) {
        return true;
    }
    match value.split_once('-') {
        Some((hue, shade)) => {
            PALETTE.contains(&hue)
                && !shade.is_empty()
                && shade.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

fn bg_group(rest: &str) -> Option<&'static str> {
    if BG_SIZES.contains(&rest) {
        Some("bg-size")
    } else if BG_POSITIONS.contains(&rest) {
        Some("bg-position")
    } else if BG_REPEATS.contains(&rest) {
        Some("bg-repeat")
    } else if BG_ATTACHMENTS.contains(&rest) {
        Some("bg-attachment")
    } else if rest == "none" || rest.starts_with("gradient-to-") {
        Some("bg-image")
    } else if is_color(rest) {
        Some("bg-color")
    } else {
        None
    }
}

fn rounded_group(base: &str) -> &'static str {
    let corner = base
        .strip_prefix("rounded-")
        .map(|rest| rest.split_once('-').map_or(rest, |(c, _)| c));
    match corner {
        Some("t") => "rounded-t",
        Some("r") => "rounded-r",
        Some("b") => "rounded-b",
        Some("l") => "rounded-l",
        Some("s") => "rounded-s",
        Some("e") => "rounded-e",
        Some("tl") => "rounded-tl",
        Some("tr") => "rounded-tr",
        Some("br") => "rounded-br",
        Some("bl") => "rounded-bl",
        _ => "rounded",
    }
}

fn is_border_width(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit()) || value.starts_with("[length:")
}

fn border_group(base: &str) -> Option<&'static str> {
    let Some(rest) = base.strip_prefix("border-") else {
        return Some("border-w");
    };
    if BORDER_STYLES.contains(&rest) {
        return Some("border-style");
    }
    if is_border_width(rest) {
        return Some("border-w");
    }
    let (side, value) = rest.split_once('-').unwrap_or((rest, ""));
    if SIDES.contains(&side) && (value.is_empty() || is_border_width(value)) {
        return Some(match side {
            "x" => "border-w-x",
            "y" => "border-w-y",
            "t" => "border-w-t",
            "r" => "border-w-r",
            "b" => "border-w-b",
            "l" => "border-w-l",
            "s" => "border-w-s",
            _ => "border-w-e",
        });
    }
    is_color(rest).then_some("border-color")
}

/// Groups an earlier class loses to when a class of `group` follows it.
fn overridden_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "size" => &["w", "h"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-s",
            "rounded-e",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
            "border-w-s",
            "border-w-e",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        _ => &[],
    }
}
