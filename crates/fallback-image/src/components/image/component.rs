use dioxus::prelude::*;

use super::state::{
    resolve_alt, resolve_fill, resolve_object_fit, resolve_src, settle, ImageStyle, LoadOutcome,
    LoadState, LoadingStrategy, ObjectFit,
};
use crate::components::skeleton::{Skeleton, SkeletonSize};
use crate::defaults::DEFAULTS;

/// Props for [`Image`].
#[derive(Props, Clone, PartialEq)]
pub struct ImageProps {
    /// Primary source; `src_no_image` is used when absent.
    #[props(into)]
    pub src: Option<String>,
    /// Fallback source shown once the primary fails to load.
    #[props(into)]
    pub src_no_image: String,
    #[props(into)]
    pub alt: Option<String>,
    /// Stretch to the positioned parent. Ignored when `width` or `height` is set.
    #[props(default = DEFAULTS.fill)]
    pub fill: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[props(default = DEFAULTS.loading)]
    pub loading: LoadingStrategy,
    pub object_fit: Option<ObjectFit>,
    /// Extra inline CSS declarations.
    #[props(into)]
    pub style: Option<String>,
    #[props(default)]
    pub onload: Option<EventHandler<ImageEvent>>,
    #[props(default)]
    pub onerror: Option<EventHandler<ImageEvent>>,
    #[props(extends = GlobalAttributes, extends = img)]
    pub attributes: Vec<Attribute>,
}

/// An image with a shimmering skeleton while loading and a fallback
/// source when loading fails.
///
/// The fade-in only starts once the rendered source fires `load`. A
/// failure switches to `src_no_image` for the lifetime of the instance;
/// give the component a new `key` to try again.
#[component]
pub fn Image(props: ImageProps) -> Element {
    let state = use_signal(LoadState::default);
    render_image(props, state)
}

pub(crate) fn render_image(props: ImageProps, mut state: Signal<LoadState>) -> Element {
    let current = state();

    let src = resolve_src(props.src.as_deref(), &props.src_no_image, current.error).to_string();
    let alt = resolve_alt(props.alt.as_deref()).to_string();
    let fill = resolve_fill(props.fill, props.width, props.height);
    let style = ImageStyle {
        fill,
        custom: props.style.as_deref(),
        opacity: current.opacity(),
        object_fit: resolve_object_fit(props.object_fit, current.error),
    }
    .to_css();
    let skeleton = SkeletonSize::for_dimensions(props.width, props.height);

    let base = vec![Attribute::new("class", "fallback-image", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    let caller_onload = props.onload;
    let caller_onerror = props.onerror;
    let loaded_src = src.clone();
    let failed_src = src.clone();
    let fallback = props.src_no_image.clone();

    rsx! {
        if current.show_skeleton() {
            Skeleton { size: skeleton }
        }
        img {
            src,
            alt,
            "loading": props.loading.as_str(),
            width: props.width.map(|w| w.to_string()),
            height: props.height.map(|h| h.to_string()),
            "data-fill": fill.to_string(),
            style,
            onload: move |evt: ImageEvent| {
                tracing::debug!(src = %loaded_src, "image loaded");
                settle(&mut state.write(), LoadOutcome::Loaded, evt, |evt| {
                    if let Some(handler) = &caller_onload {
                        handler.call(evt);
                    }
                });
            },
            onerror: move |evt: ImageEvent| {
                tracing::warn!(src = %failed_src, fallback = %fallback, "image failed to load");
                settle(&mut state.write(), LoadOutcome::Failed, evt, |evt| {
                    if let Some(handler) = &caller_onerror {
                        handler.call(evt);
                    }
                });
            },
            ..merged,
        }
    }
}
