//! Camera/viewport sizes.
//!
//! Two providers share the [`Sizes`] shape so camera setup can take either:
//! - [`FixedSizes`]: a constant width/height pair.
//! - [`AdaptiveSizes`]: the current viewport minus the height of an optional
//!   chrome element (menu bar, header), re-read on [`AdaptiveSizes::recompute`].
//!
//! Environment reads go through [`ViewportEnv`], so the sizing logic runs
//! without a real window.

use std::collections::HashMap;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Anything exposing a width/height pair.
pub trait Sizes {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// `(width, height)` tuple.
    #[inline]
    fn sizes(&self) -> (f32, f32) {
        (self.width(), self.height())
    }

    /// `width / height`. Not guarded: a zero height yields inf or NaN.
    #[inline]
    fn aspect(&self) -> f32 {
        self.width() / self.height()
    }

    /// `true` when [`Sizes::aspect`] is finite and positive.
    #[inline]
    fn has_valid_aspect(&self) -> bool {
        let aspect = self.aspect();
        aspect.is_finite() && aspect > 0.0
    }
}

/// Read-only queries against the surrounding display environment.
pub trait ViewportEnv {
    /// Current inner width/height of the window.
    fn inner_size(&self) -> (f32, f32);

    /// Rendered height of the element matching `selector`, `None` if there is none.
    fn element_height(&self, selector: &str) -> Option<f32>;
}

impl<E: ViewportEnv + ?Sized> ViewportEnv for &E {
    fn inner_size(&self) -> (f32, f32) {
        (**self).inner_size()
    }

    fn element_height(&self, selector: &str) -> Option<f32> {
        (**self).element_height(selector)
    }
}

/// Constant sizes, independent of any environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedSizes {
    width: f32,
    height: f32,
}

impl FixedSizes {
    pub const DEFAULT_WIDTH: f32 = 600.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for FixedSizes {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl Sizes for FixedSizes {
    #[inline]
    fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    fn height(&self) -> f32 {
        self.height
    }
}

/// Parses `WIDTHxHEIGHT` (`x` or `X`), e.g. `800x600`.
impl FromStr for FixedSizes {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidSize(s.to_string());
        let (w, h) = s
            .split_once('x')
            .or_else(|| s.split_once('X'))
            .ok_or_else(invalid)?;
        let width = w.trim().parse::<f32>().map_err(|_| invalid())?;
        let height = h.trim().parse::<f32>().map_err(|_| invalid())?;
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(invalid());
        }
        Ok(Self::new(width, height))
    }
}

/// Sizes following the viewport, minus an optional chrome element's height.
///
/// Values only change on construction and [`AdaptiveSizes::recompute`]; the
/// owner is expected to call `recompute` on resize notifications.
#[derive(Clone, Debug)]
pub struct AdaptiveSizes<E: ViewportEnv> {
    env: E,
    chrome_selector: Option<String>,
    width: f32,
    height: f32,
}

impl<E: ViewportEnv> AdaptiveSizes<E> {
    /// An empty selector behaves like no selector.
    pub fn new(env: E, chrome_selector: Option<&str>) -> Self {
        let chrome_selector = chrome_selector
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let mut sizes = Self {
            env,
            chrome_selector,
            width: 0.0,
            height: 0.0,
        };
        sizes.recompute();
        sizes
    }

    /// Sizes covering the whole window.
    pub fn full_window(env: E) -> Self {
        Self::new(env, None)
    }

    /// Re-read the environment and re-apply the chrome subtraction.
    pub fn recompute(&mut self) {
        let (width, height) = self.env.inner_size();
        self.width = width;
        self.height = height - self.chrome_height();
    }

    fn chrome_height(&self) -> f32 {
        let Some(selector) = self.chrome_selector.as_deref() else {
            return 0.0;
        };
        match self.env.element_height(selector) {
            Some(h) => h,
            None => {
                // Missing chrome counts as zero height.
                log::debug!("Chrome element '{selector}' not found, subtracting 0");
                0.0
            }
        }
    }

    #[inline]
    pub fn chrome_selector(&self) -> Option<&str> {
        self.chrome_selector.as_deref()
    }

    #[inline]
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Mutable environment access. Call [`AdaptiveSizes::recompute`] afterwards.
    #[inline]
    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }
}

impl<E: ViewportEnv> Sizes for AdaptiveSizes<E> {
    #[inline]
    fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    fn height(&self) -> f32 {
        self.height
    }
}

/// Either kind of provider, chosen at runtime.
#[derive(Clone, Debug)]
pub enum ViewportSizes<E: ViewportEnv> {
    Fixed(FixedSizes),
    Adaptive(AdaptiveSizes<E>),
}

impl<E: ViewportEnv> ViewportSizes<E> {
    /// Recompute adaptive sizes; fixed sizes stay as they are.
    pub fn on_environment_changed(&mut self) {
        if let Self::Adaptive(adaptive) = self {
            adaptive.recompute();
        }
    }

    #[inline]
    pub fn is_adaptive(&self) -> bool {
        matches!(self, Self::Adaptive(_))
    }
}

impl<E: ViewportEnv> Sizes for ViewportSizes<E> {
    fn width(&self) -> f32 {
        match self {
            Self::Fixed(s) => s.width(),
            Self::Adaptive(s) => s.width(),
        }
    }

    fn height(&self) -> f32 {
        match self {
            Self::Fixed(s) => s.height(),
            Self::Adaptive(s) => s.height(),
        }
    }
}

/// Plain-value environment: a window size and a selector -> height table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticViewport {
    pub width: f32,
    pub height: f32,
    pub elements: HashMap<String, f32>,
}

impl StaticViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            elements: HashMap::new(),
        }
    }

    pub fn with_element(mut self, selector: impl Into<String>, height: f32) -> Self {
        self.elements.insert(selector.into(), height);
        self
    }
}

impl ViewportEnv for StaticViewport {
    fn inner_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn element_height(&self, selector: &str) -> Option<f32> {
        self.elements.get(selector).copied()
    }
}

/// Parses `SELECTOR:HEIGHT`, e.g. `.menu:64`. The height is split at the last `:`.
pub fn parse_chrome_entry(s: &str) -> CoreResult<(String, f32)> {
    let invalid = || CoreError::InvalidChrome(s.to_string());
    let (selector, height) = s.rsplit_once(':').ok_or_else(invalid)?;
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(invalid());
    }
    let height = height.trim().parse::<f32>().map_err(|_| invalid())?;
    if !height.is_finite() || height < 0.0 {
        return Err(invalid());
    }
    Ok((selector.to_string(), height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn aspect_is_width_over_height() {
        for (w, h) in [(0.0, 1.0), (1.0, 1.0), (1920.0, 1080.0), (3.0, 7.0)] {
            assert_eq!(FixedSizes::new(w, h).aspect(), w / h);
        }
    }

    #[test]
    fn adaptive_without_selector_uses_raw_height() {
        let sizes = AdaptiveSizes::full_window(StaticViewport::new(800.0, 600.0));
        assert_eq!(sizes.sizes(), (800.0, 600.0));
        assert!(approx(sizes.aspect(), 1.3333));
        assert_eq!(sizes.chrome_selector(), None);
    }

    #[test]
    fn adaptive_subtracts_chrome_height() {
        let env = StaticViewport::new(1024.0, 768.0).with_element(".menu", 64.0);
        let sizes = AdaptiveSizes::new(env, Some(".menu"));
        assert_eq!(sizes.sizes(), (1024.0, 704.0));
        assert!(approx(sizes.aspect(), 1.4545));
    }

    // A typo'd selector silently subtracts nothing. Documented fail-open behavior.
    #[test]
    fn missing_chrome_element_subtracts_zero() {
        let env = StaticViewport::new(1024.0, 768.0).with_element(".menu", 64.0);
        let sizes = AdaptiveSizes::new(env, Some(".mneu"));
        assert_eq!(sizes.sizes(), (1024.0, 768.0));
    }

    #[test]
    fn empty_selector_is_no_selector() {
        let env = StaticViewport::new(640.0, 480.0).with_element("", 100.0);
        let sizes = AdaptiveSizes::new(env, Some(""));
        assert_eq!(sizes.chrome_selector(), None);
        assert_eq!(sizes.height(), 480.0);
    }

    #[test]
    fn recompute_is_idempotent() {
        let env = StaticViewport::new(1024.0, 768.0).with_element(".menu", 64.0);
        let mut sizes = AdaptiveSizes::new(env, Some(".menu"));
        sizes.recompute();
        let first = sizes.sizes();
        sizes.recompute();
        assert_eq!(first, sizes.sizes());
    }

    #[test]
    fn recompute_picks_up_environment_changes() {
        let env = StaticViewport::new(1024.0, 768.0).with_element(".menu", 64.0);
        let mut sizes = AdaptiveSizes::new(env, Some(".menu"));

        sizes.env_mut().width = 1280.0;
        sizes.env_mut().height = 1024.0;
        // Nothing changes until recompute.
        assert_eq!(sizes.sizes(), (1024.0, 704.0));

        sizes.recompute();
        assert_eq!(sizes.sizes(), (1280.0, 960.0));

        sizes.env_mut().elements.remove(".menu");
        sizes.recompute();
        assert_eq!(sizes.sizes(), (1280.0, 1024.0));
    }

    #[test]
    fn chrome_covering_window_gives_invalid_aspect() {
        let env = StaticViewport::new(300.0, 64.0).with_element("#bar", 64.0);
        let sizes = AdaptiveSizes::new(&env, Some("#bar"));
        assert_eq!(sizes.height(), 0.0);
        assert!(!sizes.aspect().is_finite());
        assert!(!sizes.has_valid_aspect());
    }

    #[test]
    fn fixed_sizes_ignore_environment() {
        let mut sizes: ViewportSizes<StaticViewport> =
            ViewportSizes::Fixed(FixedSizes::new(320.0, 200.0));
        sizes.on_environment_changed();
        assert_eq!(sizes.sizes(), (320.0, 200.0));
        assert!(!sizes.is_adaptive());
        assert_eq!(FixedSizes::default().sizes(), (600.0, 600.0));
    }

    #[test]
    fn viewport_sizes_recompute_adaptive_variant() {
        let env = StaticViewport::new(800.0, 600.0);
        let mut sizes = ViewportSizes::Adaptive(AdaptiveSizes::full_window(env));
        if let ViewportSizes::Adaptive(a) = &mut sizes {
            a.env_mut().width = 400.0;
        }
        sizes.on_environment_changed();
        assert_eq!(sizes.sizes(), (400.0, 600.0));
    }

    #[test]
    fn parse_fixed_sizes() {
        assert_eq!("800x600".parse::<FixedSizes>(), Ok(FixedSizes::new(800.0, 600.0)));
        assert_eq!("1024X768".parse::<FixedSizes>(), Ok(FixedSizes::new(1024.0, 768.0)));
        assert!("800".parse::<FixedSizes>().is_err());
        assert!("axb".parse::<FixedSizes>().is_err());
        assert!("-1x5".parse::<FixedSizes>().is_err());
    }

    #[test]
    fn parse_chrome_entries() {
        assert_eq!(parse_chrome_entry(".menu:64"), Ok((".menu".to_string(), 64.0)));
        assert_eq!(
            parse_chrome_entry("nav:hover:12.5"),
            Ok(("nav:hover".to_string(), 12.5))
        );
        assert!(parse_chrome_entry(":64").is_err());
        assert!(parse_chrome_entry(".menu").is_err());
        assert!(parse_chrome_entry(".menu:tall").is_err());
    }
}
