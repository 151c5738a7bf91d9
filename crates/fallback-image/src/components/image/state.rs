use crate::defaults::DEFAULTS;

/// Loading hint forwarded to the `img` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingStrategy {
    #[default]
    Lazy,
    Eager,
}

impl LoadingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingStrategy::Lazy => "lazy",
            LoadingStrategy::Eager => "eager",
        }
    }
}

/// CSS `object-fit` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectFit {
    Fill,
    Contain,
    Cover,
    None,
    ScaleDown,
}

impl ObjectFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectFit::Fill => "fill",
            ObjectFit::Contain => "contain",
            ObjectFit::Cover => "cover",
            ObjectFit::None => "none",
            ObjectFit::ScaleDown => "scale-down",
        }
    }
}

/// What the `img` element reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Per-instance load flags of an [`Image`](super::Image).
///
/// Starts as `{ error: false, loaded: false }` and only moves forward;
/// a fresh instance (new `key`) is the only way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadState {
    pub error: bool,
    pub loaded: bool,
}

impl LoadState {
    /// Apply an event from the `img` element.
    ///
    /// A failure leaves `loaded` as it was: the fallback image still has
    /// to fire its own load event before it becomes visible. A load while
    /// in error state comes from the fallback, so the error stays latched
    /// and the broken primary is never re-requested.
    pub fn record(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded if self.error => self.loaded = true,
            LoadOutcome::Loaded => {
                self.error = false;
                self.loaded = true;
            }
            LoadOutcome::Failed => self.error = true,
        }
    }

    /// The placeholder shows until the first terminal event.
    pub fn show_skeleton(&self) -> bool {
        !self.loaded && !self.error
    }

    pub fn opacity(&self) -> u8 {
        if self.loaded {
            1
        } else {
            0
        }
    }
}

/// Record `outcome`, then hand the triggering event to the caller's handler.
pub(crate) fn settle<E>(
    state: &mut LoadState,
    outcome: LoadOutcome,
    event: E,
    forward: impl FnOnce(E),
) {
    state.record(outcome);
    forward(event);
}

/// Zero dimensions count as absent.
pub(crate) fn dimension(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}

/// Source URL to render for the current state.
pub fn resolve_src<'a>(src: Option<&'a str>, src_no_image: &'a str, error: bool) -> &'a str {
    if error {
        return src_no_image;
    }
    src.filter(|s| !s.is_empty()).unwrap_or(src_no_image)
}

/// Explicit dimensions switch fill mode off regardless of `fill`.
pub fn resolve_fill(fill: bool, width: Option<u32>, height: Option<u32>) -> bool {
    if dimension(width).is_some() || dimension(height).is_some() {
        false
    } else {
        fill
    }
}

pub fn resolve_alt(alt: Option<&str>) -> &str {
    alt.filter(|a| !a.is_empty()).unwrap_or(DEFAULTS.alt)
}

/// The fallback is shown unscaled, whatever the caller asked for.
pub fn resolve_object_fit(object_fit: Option<ObjectFit>, error: bool) -> Option<ObjectFit> {
    if error {
        Some(ObjectFit::None)
    } else {
        object_fit
    }
}

/// Inline style of the rendered `img`.
///
/// Declarations are emitted in a fixed order (fill positioning, caller
/// style, opacity, object-fit, transition) so the component's own values
/// win over anything the caller set.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageStyle<'a> {
    pub fill: bool,
    pub custom: Option<&'a str>,
    pub opacity: u8,
    pub object_fit: Option<ObjectFit>,
}

impl ImageStyle<'_> {
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if self.fill {
            css.push_str("position: absolute; inset: 0; width: 100%; height: 100%; ");
        }
        if let Some(custom) = self.custom.map(str::trim).filter(|s| !s.is_empty()) {
            css.push_str(custom);
            if !custom.ends_with(';') {
                css.push(';');
            }
            css.push(' ');
        }
        css.push_str(&format!("opacity: {}; ", self.opacity));
        if let Some(fit) = self.object_fit {
            css.push_str(&format!("object-fit: {}; ", fit.as_str()));
        }
        css.push_str(&format!("transition: {};", DEFAULTS.transition));
        css
    }
}
