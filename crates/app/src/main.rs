use dioxus::prelude::*;

mod gallery;
use gallery::Gallery;

/// Tailwind's in-browser compiler; turns the utility classes into CSS at runtime.
const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

const THEME_TOKENS: &str = r#"
@theme {
    --color-background: #0b0f19;
    --color-foreground: #e6edf3;
    --color-primary: #22d3ee;
    --color-primary-foreground: #04121a;
    --color-secondary: #334155;
    --color-secondary-foreground: #e2e8f0;
    --color-destructive: #ef4444;
    --color-destructive-foreground: #fef2f2;
    --color-ring: #67e8f9;
}
"#;

/// Renderer picked by the enabled Cargo feature.
const RENDERER: &str = if cfg!(feature = "web") {
    "web"
} else if cfg!(feature = "desktop") {
    "desktop"
} else if cfg!(feature = "mobile") {
    "mobile"
} else {
    "none"
};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!(renderer = RENDERER, "badge gallery starting"));

    rsx! {
        document::Title { "Badge gallery" }
        document::Script { src: TAILWIND_BROWSER }
        style { r#type: "text/tailwindcss", "{THEME_TOKENS}" }
        main { class: "min-h-screen bg-background text-foreground p-8",
            Gallery {}
        }
    }
}
