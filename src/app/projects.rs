use leptos::prelude::*;
use leptos_meta::Title;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::content::{self, Collection};
use crate::gallery::{Category, CategoryFilter, GalleryController, GalleryItem, Registry};

use super::lightbox::Lightbox;
use super::smart_image::SmartImage;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let registry = content::registry(Collection::Projects).unwrap_or_else(|e| {
        log::error!("projects: {e}");
        Registry::empty()
    });
    let controller = RwSignal::new(GalleryController::new(registry.clone()));
    let (filter, set_filter) = signal(CategoryFilter::All);

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<CategoryFilter, JsonSerdeWasmCodec>("project_filter");
        Effect::watch(
            || (),
            move |_, _, _| set_filter.set(stored.get_untracked()),
            true,
        );
        Effect::watch(
            move || filter.get(),
            move |f, _, _| set_stored.set(*f),
            false,
        );
    }

    let filters = std::iter::once(CategoryFilter::All)
        .chain(Category::all().into_iter().map(CategoryFilter::Only))
        .map(|f| {
            view! {
                <button
                    class=move || {
                        if filter.get() == f {
                            "px-4 py-2 rounded-md border border-cyan bg-cyan text-background"
                        } else {
                            "px-4 py-2 rounded-md border border-cyan/40 text-cyan hover:bg-cyan/20"
                        }
                    }
                    on:click=move |_| set_filter.set(f)
                >
                    {f.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <Title text="Projects" />
        <div class="max-w-6xl mx-auto px-4 page-content">
            <h1 class="text-4xl font-bold text-center text-cyan my-12">"My Projects"</h1>
            <div class="flex flex-wrap justify-center gap-3 mb-12">{filters}</div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                <For
                    each=move || {
                        let f = filter.get();
                        registry.iter().filter(|p| f.matches(p)).cloned().collect::<Vec<_>>()
                    }
                    key=|p| p.id
                    let:project
                >
                    <ProjectCard project=project controller=controller />
                </For>
            </div>
        </div>
        <Lightbox controller=controller />
    }
}

#[component]
fn ProjectCard(project: GalleryItem, controller: RwSignal<GalleryController>) -> impl IntoView {
    let technologies = project.tags.clone();
    let category = project.category().map(|c| c.label()).unwrap_or_default();
    let open = {
        let project = project.clone();
        move |_: leptos::ev::MouseEvent| {
            controller.update(|c| {
                if let Err(e) = c.open(&project) {
                    log::warn!("projects: {e}");
                }
            })
        }
    };
    view! {
        <article
            class="cursor-pointer rounded-lg overflow-hidden bg-brightBlack/30 border border-muted/20 hover:-translate-y-2 transition-transform"
            on:click=open
        >
            <div class="h-48">
                <SmartImage
                    src=project.tile_image().to_string()
                    fallback=project.fallback_image().map(str::to_string)
                    alt=project.title.clone()
                    img_class="w-full h-full object-cover"
                />
            </div>
            <div class="p-6">
                <p class="text-xs uppercase tracking-wider text-purple mb-2">{category}</p>
                <h3 class="text-xl font-bold mb-2">{project.title.clone()}</h3>
                <p class="text-sm text-muted mb-4">{project.description().to_string()}</p>
                <div class="flex flex-wrap gap-2">
                    {technologies
                        .into_iter()
                        .map(|t| {
                            view! {
                                <span class="px-2 py-1 text-xs rounded-md bg-cyan/10 text-cyan">
                                    {t}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
