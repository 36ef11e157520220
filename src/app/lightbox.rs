use leptos::{either::Either, ev, prelude::*};

use crate::gallery::{
    ArtworkDetails, GalleryController, GalleryItem, GalleryKey, ItemKind, KeyOutcome,
    ListenerSlot, ProjectDetails, ZoomState,
};

use super::smart_image::SmartImage;

/// Full-screen viewer for whatever `controller` has selected.
///
/// The window `keydown` listener only exists while the lightbox is open.
#[component]
pub fn Lightbox(
    controller: RwSignal<GalleryController>,
    /// Enables click, wheel and drag zoom on the image.
    #[prop(optional)]
    zoomable: bool,
) -> impl IntoView {
    let listener = StoredValue::new_local(ListenerSlot::<WindowListenerHandle>::default());

    Effect::new(move |_| {
        let open = controller.with(|c| c.is_open());
        listener.update_value(|slot| {
            slot.sync(
                open,
                || {
                    window_event_listener(ev::keydown, move |ev| {
                        let Some(key) = GalleryKey::from_key(&ev.key()) else {
                            return;
                        };
                        let outcome = controller.try_update(|c| c.handle_key(key));
                        if matches!(outcome, Some(o) if o != KeyOutcome::Ignored) {
                            ev.prevent_default();
                        }
                    })
                },
                WindowListenerHandle::remove,
            )
        });
    });

    on_cleanup(move || {
        listener.try_update_value(|slot| slot.clear(WindowListenerHandle::remove));
    });

    let state = Memo::new(move |_| controller.with(|c| c.state()));
    let selected = Memo::new(move |_| controller.with(|c| c.selected().cloned()));

    view! {
        <Show when=move || state.with(|s| s.is_open)>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/90 backdrop-blur-sm"
                on:click=move |_| controller.update(|c| c.close())
            >
                <button
                    class="absolute top-4 right-4 text-3xl text-foreground hover:text-red"
                    aria-label="Close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        controller.update(|c| c.close());
                    }
                >
                    "×"
                </button>
                <button
                    class="absolute top-4 left-4 px-3 py-1 rounded-md border border-cyan/40 text-cyan hover:bg-cyan/20"
                    aria-label="Toggle details"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        controller.update(|c| c.toggle_panel());
                    }
                >
                    "ⓘ"
                </button>
                <NavButton
                    label="Previous"
                    glyph="‹"
                    side="left-4"
                    disabled=Signal::derive(move || !state.with(|s| s.has_prev))
                    on_press=move || controller.update(|c| c.previous())
                />
                <NavButton
                    label="Next"
                    glyph="›"
                    side="right-4"
                    disabled=Signal::derive(move || !state.with(|s| s.has_next))
                    on_press=move || controller.update(|c| c.next())
                />
                {move || {
                    selected
                        .get()
                        .map(|item| {
                            view! {
                                <LightboxImage controller=controller item=item.clone() zoomable=zoomable />
                                <Show when=move || state.with(|s| s.panel_open)>
                                    <DetailPanel item=item.clone() />
                                </Show>
                            }
                        })
                }}
            </div>
        </Show>
    }
}

#[component]
fn NavButton(
    label: &'static str,
    glyph: &'static str,
    side: &'static str,
    disabled: Signal<bool>,
    on_press: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <button
            class=format!(
                "absolute {side} top-1/2 -translate-y-1/2 text-5xl text-foreground hover:text-cyan disabled:opacity-20 disabled:cursor-not-allowed",
            )
            aria-label=label
            disabled=move || disabled.get()
            on:click=move |ev| {
                ev.stop_propagation();
                on_press();
            }
        >
            {glyph}
        </button>
    }
}

#[component]
fn LightboxImage(
    controller: RwSignal<GalleryController>,
    item: GalleryItem,
    zoomable: bool,
) -> impl IntoView {
    let zoom = move |f: fn(&mut ZoomState)| {
        if zoomable {
            controller.update(|c| f(c.zoom_mut()));
        }
    };
    let transform = move || controller.with(|c| c.zoom().css_transform());
    let cursor = move || {
        controller.with(|c| {
            let z = c.zoom();
            match (zoomable, z.is_dragging(), z.is_zoomed()) {
                (false, _, _) => "cursor-default",
                (true, true, _) => "cursor-grabbing",
                (true, false, true) => "cursor-grab",
                (true, false, false) => "cursor-zoom-in",
            }
        })
    };

    view! {
        <div
            class=move || {
                format!("max-w-[85vw] max-h-[85vh] overflow-hidden select-none {}", cursor())
            }
            on:click=move |ev| {
                ev.stop_propagation();
                zoom(|z| z.click());
            }
            on:wheel=move |ev| {
                if zoomable {
                    ev.prevent_default();
                    let dy = ev.delta_y();
                    controller.update(|c| c.zoom_mut().wheel(dy));
                }
            }
            on:mousedown=move |ev| {
                if zoomable {
                    let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
                    controller.update(|c| c.zoom_mut().drag_start(x, y));
                }
            }
            on:mousemove=move |ev| {
                if zoomable && controller.with_untracked(|c| c.zoom().is_dragging()) {
                    ev.prevent_default();
                    let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
                    controller.update(|c| c.zoom_mut().drag_move(x, y));
                }
            }
            on:mouseup=move |_| zoom(|z| z.drag_end())
            on:mouseleave=move |_| zoom(|z| z.drag_end())
        >
            <div
                class="transition-transform duration-150"
                style:transform=transform
            >
                <SmartImage
                    src=item.image_ref.clone()
                    fallback=item.fallback_image().map(str::to_string)
                    alt=item.title.clone()
                    img_class="max-w-[85vw] max-h-[85vh] object-contain pointer-events-none"
                />
            </div>
        </div>
    }
}

#[component]
fn DetailPanel(item: GalleryItem) -> impl IntoView {
    let details = match &item.kind {
        ItemKind::CodeProject(p) => Either::Left(view! { <ProjectPanel details=p.clone() /> }),
        ItemKind::Artwork(a) => Either::Right(view! { <ArtworkPanel details=a.clone() /> }),
    };
    view! {
        <aside
            class="absolute right-0 top-0 h-full w-full sm:w-96 overflow-y-auto p-6 bg-background/95 border-l border-muted/30 text-left"
            on:click=|ev| ev.stop_propagation()
        >
            <h2 class="text-2xl font-bold text-cyan mb-4">{item.title.clone()}</h2>
            {details}
            <TagList label="Tags" tags=item.tags.clone() />
        </aside>
    }
}

#[component]
fn ProjectPanel(details: ProjectDetails) -> impl IntoView {
    let ProjectDetails {
        long_description,
        category,
        technologies,
        features,
        live_link,
        source_link,
        video_ref,
        ..
    } = details;
    view! {
        <p class="text-sm text-purple mb-2">{category.label()}</p>
        <p class="mb-4 leading-relaxed">{long_description}</p>
        {(!features.is_empty())
            .then(|| {
                view! {
                    <h3 class="font-bold mb-2">"Features"</h3>
                    <ul class="list-disc list-inside mb-4 space-y-1">
                        {features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                    </ul>
                }
            })}
        <TagList label="Built with" tags=technologies />
        {video_ref
            .map(|src| {
                view! { <video class="w-full rounded-md mb-4" src=src controls=true muted=true></video> }
            })}
        <div class="flex gap-4 mt-4">
            {live_link
                .map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="text-cyan hover:underline">
                            "Live demo"
                        </a>
                    }
                })}
            {source_link
                .map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="text-cyan hover:underline">
                            "Source"
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
fn ArtworkPanel(details: ArtworkDetails) -> impl IntoView {
    let ArtworkDetails {
        description,
        long_description,
        year,
        medium,
        dimensions,
        software,
        process,
        inspiration,
        techniques,
        ..
    } = details;
    let facts = [
        ("Year", year),
        ("Medium", medium),
        ("Dimensions", dimensions),
        ("Software", software),
    ];
    let blurb = if long_description.is_empty() {
        description
    } else {
        long_description
    };
    view! {
        {(!blurb.is_empty()).then(|| view! { <p class="mb-4 leading-relaxed">{blurb}</p> })}
        <dl class="grid grid-cols-2 gap-2 mb-4 text-sm">
            {facts
                .into_iter()
                .filter(|(_, v)| !v.is_empty())
                .map(|(k, v)| {
                    view! {
                        <dt class="text-muted">{k}</dt>
                        <dd>{v}</dd>
                    }
                })
                .collect_view()}
        </dl>
        {(!process.is_empty())
            .then(|| {
                view! {
                    <h3 class="font-bold mb-1">"Process"</h3>
                    <p class="mb-4 text-sm">{process}</p>
                }
            })}
        {inspiration
            .filter(|s| !s.is_empty())
            .map(|s| {
                view! {
                    <h3 class="font-bold mb-1">"Inspiration"</h3>
                    <p class="mb-4 text-sm">{s}</p>
                }
            })}
        <TagList label="Techniques" tags=techniques />
    }
}

#[component]
fn TagList(label: &'static str, tags: Vec<String>) -> impl IntoView {
    (!tags.is_empty())
        .then(|| {
            view! {
                <h3 class="font-bold mb-2">{label}</h3>
                <div class="flex flex-wrap gap-2 mb-4">
                    {tags
                        .into_iter()
                        .map(|t| {
                            view! {
                                <span class="px-2 py-1 text-xs rounded-md bg-cyan/10 text-cyan border border-cyan/30">
                                    {t}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
}
