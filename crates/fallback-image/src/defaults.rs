use crate::components::image::LoadingStrategy;

/// Process-wide constant defaults for [`Image`](crate::Image).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDefaults {
    /// Alt text used when the caller omits `alt` or passes an empty string.
    pub alt: &'static str,
    pub fill: bool,
    pub loading: LoadingStrategy,
    /// Opacity fade applied to every rendered image.
    pub transition: &'static str,
    /// Skeleton `min-width` when no explicit width is given.
    pub skeleton_min_width: &'static str,
}

pub const DEFAULTS: ImageDefaults = ImageDefaults {
    alt: "Image",
    fill: true,
    loading: LoadingStrategy::Lazy,
    transition: "opacity 0.5s ease-in-out",
    skeleton_min_width: "50px",
};
