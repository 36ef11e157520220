use leptos::{html, prelude::*};

use crate::gallery::{ImageSource, LoadState};

/// `<img>` that swaps to `fallback` on error, then shows a placeholder.
#[component]
pub fn SmartImage(
    #[prop(into)] src: String,
    #[prop(optional_no_strip)] fallback: Option<String>,
    #[prop(into)] alt: String,
    #[prop(optional, into)] img_class: String,
) -> impl IntoView {
    let source = RwSignal::new(ImageSource::new(src, fallback));
    let state = move || source.with(|s| s.state());
    let img_ref = NodeRef::<html::Img>::new();

    // catch loads that settled before hydration attached the listeners
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            let (complete, width) = (img.complete(), img.natural_width());
            source.update(|s| s.observe(complete, width));
        }
    });

    view! {
        <div class="relative w-full h-full">
            <Show when=move || state() != LoadState::Loaded>
                <div class="absolute inset-0 flex items-center justify-center bg-brightBlack/40 text-muted text-sm">
                    {move || {
                        if state() == LoadState::Failed { "Image not found" } else { "Loading..." }
                    }}
                </div>
            </Show>
            <img
                node_ref=img_ref
                src=move || source.with(|s| s.current().to_string())
                alt=alt
                class=move || {
                    if state() == LoadState::Loaded { img_class.clone() } else { format!("{img_class} opacity-0") }
                }
                on:load=move |_| source.update(|s| s.loaded())
                on:error=move |_| source.update(|s| s.errored())
            />
        </div>
    }
}
