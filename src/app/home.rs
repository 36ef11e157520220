use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::components::A;

use crate::config::SiteConfig;
use crate::content::{self, Collection};
use crate::effects::{ImageCycleConfig, ImageCycler, Typewriter, TypewriterConfig};

use super::smart_image::SmartImage;
use super::timers::TimerDriver;

const FEATURED_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="w-full page-content">
            <Hero />
            <AboutMe />
            <FeaturedProjects />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let phrases = config.roles.iter().map(|r| r.to_string()).collect();
    let typer = TimerDriver::new(Typewriter::new(phrases, TypewriterConfig::default()));
    // effects only run in the browser, so nothing is scheduled during SSR
    Effect::new(move |_| typer.send(|t| t.start()));
    let typed = move || typer.machine().with(|t| t.text().to_string());

    view! {
        <section class="min-h-[80vh] flex flex-col justify-center items-center text-center gap-6 section-content">
            <RotatingProfilePicture size="w-32 h-32" />
            <h1 class="text-4xl lg:text-6xl font-bold">"Hi, I'm " {config.owner}</h1>
            <p class="text-2xl lg:text-3xl">
                "I'm a " <span class="text-cyan typewriter-caret">{typed}</span>
            </p>
            <p class="max-w-2xl text-lg text-muted leading-relaxed">{config.tagline}</p>
            <div class="flex flex-wrap gap-4 justify-center">
                <A
                    href="/projects"
                    attr:class="px-6 py-3 rounded-md bg-cyan text-background font-bold hover:bg-red transition-colors"
                >
                    "View My Works"
                </A>
                <a
                    href=config.resume_href
                    target="_blank"
                    class="px-6 py-3 rounded-md border border-cyan text-cyan hover:bg-cyan/20 transition-colors"
                >
                    "Download Resume"
                </a>
            </div>
            <SocialLinks />
        </section>
    }
}

/// Profile picture that flips through alternates on hover or press-and-hold.
#[component]
pub fn RotatingProfilePicture(
    /// Tailwind width/height classes.
    size: &'static str,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let images = config.profile_images.clone();
    let cycler = TimerDriver::new(ImageCycler::new(images.len(), ImageCycleConfig::default()));
    let current = move || cycler.machine().with(|c| c.current());
    let failed = RwSignal::new(false);

    view! {
        <div
            class=format!("{size} rounded-full overflow-hidden border-2 border-cyan shadow-lg select-none")
            on:mouseenter=move |_| cycler.send(|c| c.pointer_enter())
            on:mouseleave=move |_| cycler.send(|c| c.pointer_leave())
            on:touchstart=move |ev| {
                ev.prevent_default();
                cycler.send(|c| c.touch_start());
            }
            on:touchend=move |_| cycler.send(|c| c.touch_end())
            on:touchcancel=move |_| cycler.send(|c| c.touch_end())
        >
            {move || {
                if failed.get() {
                    let tint = if current() % 2 == 0 { "bg-purple" } else { "bg-red" };
                    Either::Left(
                        view! {
                            <div class=format!(
                                "w-full h-full flex items-center justify-center font-bold text-background {tint}",
                            )>{config.initials}</div>
                        },
                    )
                } else {
                    let src = images.get(current()).copied().unwrap_or_default();
                    Either::Right(
                        view! {
                            <img
                                src=src
                                alt=config.owner
                                class="w-full h-full object-cover"
                                on:error=move |_| failed.set(true)
                            />
                        },
                    )
                }
            }}
        </div>
    }
}

#[component]
pub fn SocialLinks() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    view! {
        <div class="flex gap-4 justify-center">
            {config
                .socials
                .into_iter()
                .map(|s| {
                    view! {
                        <a
                            href=s.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-foreground hover:text-cyan transition-colors"
                        >
                            {s.label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn AboutMe() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    view! {
        <section class="max-w-4xl mx-auto my-16 px-4 section-content">
            <h2 class="text-3xl font-bold text-center text-cyan mb-8">"About Me"</h2>
            <p class="text-lg leading-relaxed">{config.about}</p>
        </section>
    }
}

#[component]
fn FeaturedProjects() -> impl IntoView {
    let projects = match content::registry(Collection::Projects) {
        Ok(r) => r,
        Err(e) => {
            log::error!("home: {e}");
            return Either::Left(());
        }
    };
    let cards = projects
        .iter()
        .take(FEATURED_COUNT)
        .cloned()
        .map(|p| {
            view! {
                <A href="/projects" attr:class="block rounded-lg overflow-hidden bg-brightBlack/30 hover:-translate-y-2 transition-transform">
                    <div class="h-48">
                        <SmartImage
                            src=p.tile_image().to_string()
                            fallback=p.fallback_image().map(str::to_string)
                            alt=p.title.clone()
                            img_class="w-full h-full object-cover"
                        />
                    </div>
                    <div class="p-4">
                        <h3 class="text-xl font-bold mb-2">{p.title.clone()}</h3>
                        <p class="text-sm text-muted">{p.description().to_string()}</p>
                    </div>
                </A>
            }
        })
        .collect_view();
    Either::Right(view! {
        <section class="max-w-6xl mx-auto my-16 px-4 section-content">
            <h2 class="text-3xl font-bold text-center text-cyan mb-8">"Featured Projects"</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">{cards}</div>
        </section>
    })
}
