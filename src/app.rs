mod art;
mod contact;
mod footer;
mod home;
mod lightbox;
mod navbar;
mod projects;
mod skills;
mod smart_image;
mod timers;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;

use art::ArtPage;
use contact::ContactPage;
use footer::Footer;
use home::HomePage;
use navbar::Navbar;
use projects::ProjectsPage;
use skills::SkillsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let config = SiteConfig::default();
    let owner = config.owner;
    provide_context(config);

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />

        <Router>
            <Navbar />
            <main class="flex flex-col flex-grow items-center w-full pt-20">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/art") view=ArtPage />
                    <Route path=path!("/skills") view=SkillsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <Title text="Not Found" />
        <div class="my-24 text-center">
            <h1 class="text-4xl font-bold text-red mb-4">"404"</h1>
            <p class="text-muted mb-8">"There's nothing at this address."</p>
            <A href="/" attr:class="text-cyan hover:underline">
                "Back home"
            </A>
        </div>
    }
}
