use dioxus::prelude::*;
use shared_ui::{use_node_ref, Badge, BadgeVariant, ALL_VARIANTS};

/// One section per badge feature: variants, overrides, pass-through
/// attributes and the node reference.
#[component]
pub fn Gallery() -> Element {
    let mut selected = use_signal(BadgeVariant::default);
    let node_ref = use_node_ref();
    let mut width = use_signal(|| None::<f64>);

    let measure = move |_| async move {
        let Some(node) = node_ref() else {
            tracing::debug!("measure requested before badge mounted");
            return;
        };
        match node.get_client_rect().await {
            Ok(rect) => width.set(Some(rect.width())),
            Err(e) => tracing::warn!("failed to measure badge: {e}"),
        }
    };

    rsx! {
        h1 { class: "text-2xl font-semibold mb-6", "Badges" }

        section { class: "mb-8",
            h2 { class: "text-lg mb-2", "Variants" }
            div { class: "flex gap-2",
                for variant in ALL_VARIANTS.iter().copied() {
                    Badge { key: "{variant}", variant, "{variant}" }
                }
            }
        }

        section { class: "mb-8",
            h2 { class: "text-lg mb-2", "Overrides" }
            div { class: "flex gap-2",
                Badge { variant: BadgeVariant::Destructive, class: "mt-2", "Failed" }
                Badge { class: "rounded-full px-4", "Pill" }
            }
        }

        section { class: "mb-8",
            h2 { class: "text-lg mb-2", "Pass-through attributes" }
            Badge { title: "warn", id: "warn-badge", "Hover me" }
        }

        section { class: "mb-8",
            h2 { class: "text-lg mb-2", "Selector" }
            select {
                class: "mb-2 bg-background border rounded px-2",
                onchange: move |evt| selected.set(BadgeVariant::from_key(&evt.value())),
                for variant in ALL_VARIANTS.iter().copied() {
                    option { value: "{variant}", selected: variant == selected(), "{variant}" }
                }
            }
            div {
                Badge { variant: selected(), node_ref, "Tracked" }
            }
            div { class: "flex items-center gap-2 mt-2",
                button { class: "border rounded px-2", onclick: measure, "Measure" }
                span {
                    if node_ref.read().is_some() {
                        "mounted"
                    } else {
                        "not mounted"
                    }
                }
                if let Some(w) = width() {
                    span { "{w:.1}px wide" }
                }
            }
        }
    }
}
