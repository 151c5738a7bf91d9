use dioxus::prelude::*;

use crate::defaults::DEFAULTS;

/// Size constraints of a [`Skeleton`], in pixels.
///
/// Missing sides fall back to a 50px minimum width and `auto` elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkeletonSize {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl SkeletonSize {
    /// Size matching an image's explicit dimensions; zero counts as unset.
    pub fn for_dimensions(width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            width: width.filter(|w| *w > 0),
            height: height.filter(|h| *h > 0),
        }
    }

    pub fn style(&self) -> String {
        let px = |v: Option<u32>, fallback: &str| match v {
            Some(v) => format!("{v}px"),
            None => fallback.to_string(),
        };
        format!(
            "min-width: {}; min-height: {}; max-width: {}; max-height: {};",
            px(self.width, DEFAULTS.skeleton_min_width),
            px(self.height, "auto"),
            px(self.width, "auto"),
            px(self.height, "auto"),
        )
    }
}

/// An absolutely positioned shimmering placeholder.
#[component]
pub fn Skeleton(
    #[props(default)] size: SkeletonSize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new("style", size.style(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "aria-hidden": "true",
            ..merged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_size_uses_fallback_constraints() {
        assert_eq!(
            SkeletonSize::default().style(),
            "min-width: 50px; min-height: auto; max-width: auto; max-height: auto;"
        );
    }

    #[test]
    fn explicit_size_pins_both_bounds() {
        assert_eq!(
            SkeletonSize::for_dimensions(Some(200), Some(100)).style(),
            "min-width: 200px; min-height: 100px; max-width: 200px; max-height: 100px;"
        );
    }

    #[test]
    fn width_only() {
        assert_eq!(
            SkeletonSize::for_dimensions(Some(80), None).style(),
            "min-width: 80px; min-height: auto; max-width: 80px; max-height: auto;"
        );
    }

    #[test]
    fn zero_dimensions_are_ignored() {
        assert_eq!(
            SkeletonSize::for_dimensions(Some(0), Some(0)),
            SkeletonSize::default()
        );
    }

    #[test]
    fn renders_skeleton_div_with_sizing() {
        let size = SkeletonSize::for_dimensions(Some(120), None);
        let html = dioxus_ssr::render_element(rsx! {
            Skeleton { size }
        });
        assert!(html.contains("class=\"skeleton\""), "{html}");
        assert!(html.contains("min-width: 120px;"), "{html}");
        assert!(html.contains("aria-hidden=\"true\""), "{html}");
    }
}
