use std::rc::Rc;

use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;
use tailwind_fuse::*;

use super::variant::{badge_variants, BadgeVariant, BADGE_BASE};

/// Handle to the badge's rendered `div`.
///
/// Holds `None` until the node is mounted and again after the badge is
/// dropped.
pub type NodeRef = Signal<Option<Rc<MountedData>>>;

/// Create an unset [`NodeRef`] owned by the calling component.
pub fn use_node_ref() -> NodeRef {
    use_signal(|| None)
}

/// Pull every `class` attribute out of a spread attribute list.
///
/// Text class values are joined in the order they appear; blank ones are
/// dropped. Everything else, including non-text class values, is returned
/// untouched and in order.
pub fn split_class_attributes(attributes: Vec<Attribute>) -> (Option<String>, Vec<Attribute>) {
    let mut classes: Vec<String> = Vec::new();
    let mut rest = Vec::with_capacity(attributes.len());

    for attr in attributes {
        if attr.name != "class" || attr.namespace.is_some() {
            rest.push(attr);
            continue;
        }
        if let AttributeValue::Text(value) = &attr.value {
            let value = value.trim();
            if !value.is_empty() {
                classes.push(value.to_string());
            }
            continue;
        }
        rest.push(attr);
    }

    let class = (!classes.is_empty()).then(|| classes.join(" "));
    (class, rest)
}

/// Merge a variant's classes with a caller override. The override wins on
/// conflicting utilities.
pub fn badge_class(variant: BadgeVariant, class: Option<&str>) -> String {
    match class.map(str::trim) {
        Some(extra) if !extra.is_empty() => tw_merge!(BADGE_BASE, variant, extra),
        _ => badge_variants(variant),
    }
}

/// A small tag or status indicator.
///
/// `class` given by the caller is merged over the variant's classes; every
/// other attribute lands on the `div` as given.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] node_ref: Option<NodeRef>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let (class, rest) = split_class_attributes(attributes);
    let class = badge_class(variant, class.as_deref());

    use_drop(move || {
        if let Some(mut slot) = node_ref {
            if let Ok(mut value) = slot.try_write() {
                tracing::trace!("badge unmounted, clearing node ref");
                *value = None;
            }
        }
    });

    rsx! {
        div {
            class: "{class}",
            onmounted: move |evt: MountedEvent| {
                if let Some(mut slot) = node_ref {
                    tracing::trace!("badge mounted, binding node ref");
                    slot.set(Some(evt.data()));
                }
            },
            ..rest,
            {children}
        }
    }
}
