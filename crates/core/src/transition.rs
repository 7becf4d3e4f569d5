//! Fly-and-scale enter transition for UI elements.
//!
//! Produces inline CSS for a progress value `t` in [0, 1]: the element slides
//! from an `(x, y)` offset to its resting place while scaling from `start` to 1
//! and fading in.

use crate::easing::Easing;

/// Closed numeric range `(min, max)`.
pub type Scale = (f32, f32);

/// Linearly map `value` from range `from` to range `to`.
#[inline]
pub fn scale_conversion(value: f32, from: Scale, to: Scale) -> f32 {
    let (min_a, max_a) = from;
    let (min_b, max_b) = to;
    let percentage = (value - min_a) / (max_a - min_a);
    percentage * (max_b - min_b) + min_b
}

/// `key:value;` pairs in order; `None` values are skipped.
pub fn style_to_string<V: std::fmt::Display>(style: &[(&str, Option<V>)]) -> String {
    style.iter().fold(String::new(), |mut out, (key, value)| {
        if let Some(value) = value {
            out.push_str(key);
            out.push(':');
            out.push_str(&value.to_string());
            out.push(';');
        }
        out
    })
}

/// Transition parameters. Missing fields fall back to the `FALLBACK_*` values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlyAndScaleParams {
    pub y: Option<f32>,
    pub x: Option<f32>,
    pub start: Option<f32>,
    /// Milliseconds.
    pub duration: Option<u32>,
}

impl FlyAndScaleParams {
    pub const FALLBACK_Y: f32 = 5.0;
    pub const FALLBACK_X: f32 = 0.0;
    pub const FALLBACK_START: f32 = 0.95;
    pub const FALLBACK_DURATION: u32 = 200;

    /// All fields unset, so every one resolves to its fallback.
    pub const fn unset() -> Self {
        Self {
            y: None,
            x: None,
            start: None,
            duration: None,
        }
    }
}

impl Default for FlyAndScaleParams {
    fn default() -> Self {
        Self {
            y: Some(-8.0),
            x: Some(0.0),
            start: Some(0.95),
            duration: Some(150),
        }
    }
}

/// A resolved transition, ready to be sampled.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Milliseconds.
    pub duration: u32,
    /// Milliseconds.
    pub delay: u32,
    pub easing: Easing,
    base_transform: String,
    x: f32,
    y: f32,
    start: f32,
}

impl Transition {
    /// Inline CSS at progress `t` (already eased by the caller).
    pub fn css(&self, t: f32) -> String {
        let unit = (0.0, 1.0);
        let y = scale_conversion(t, unit, (self.y, 0.0));
        let x = scale_conversion(t, unit, (self.x, 0.0));
        let scale = scale_conversion(t, unit, (self.start, 1.0));

        let transform = format!(
            "{} translate3d({x}px, {y}px, 0) scale({scale})",
            self.base_transform
        );
        style_to_string(&[
            ("transform", Some(transform)),
            ("opacity", Some(t.to_string())),
        ])
    }

    /// CSS at raw progress `t`, passed through the transition's easing first.
    pub fn css_eased(&self, t: f32) -> String {
        self.css(self.easing.evaluate(t))
    }

    pub fn base_transform(&self) -> &str {
        &self.base_transform
    }
}

/// Build a fly-and-scale transition on top of the element's computed
/// `transform` (`None` or `"none"` means no existing transform).
pub fn fly_and_scale(base_transform: Option<&str>, params: FlyAndScaleParams) -> Transition {
    let base_transform = match base_transform {
        None | Some("none") => String::new(),
        Some(t) => t.to_string(),
    };
    Transition {
        duration: params
            .duration
            .unwrap_or(FlyAndScaleParams::FALLBACK_DURATION),
        delay: 0,
        easing: Easing::CubicOut,
        base_transform,
        x: params.x.unwrap_or(FlyAndScaleParams::FALLBACK_X),
        y: params.y.unwrap_or(FlyAndScaleParams::FALLBACK_Y),
        start: params.start.unwrap_or(FlyAndScaleParams::FALLBACK_START),
    }
}
