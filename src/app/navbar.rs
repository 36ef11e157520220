use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};
use leptos_use::use_window_scroll;

use super::home::RotatingProfilePicture;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/projects", "Projects"),
    ("/art", "Art"),
    ("/skills", "Skills"),
    ("/contact", "Contact"),
];

/// Pixels of scroll after which the bar gets its solid background.
const SCROLLED_AFTER: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > SCROLLED_AFTER;
    let (menu_open, set_menu_open) = signal(false);
    let pathname = use_location().pathname;

    Effect::watch(
        move || pathname.get(),
        move |_, _, _| set_menu_open.set(false),
        false,
    );

    let links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .map(|&(href, label)| {
                let class = move || {
                    let active = pathname.get() == href;
                    match (mobile, active) {
                        (true, true) => "text-3xl text-cyan",
                        (true, false) => "text-3xl text-foreground hover:text-cyan",
                        (false, true) => "text-cyan border-b-2 border-cyan pb-1",
                        (false, false) => "text-foreground hover:text-cyan pb-1",
                    }
                };
                view! {
                    <A href=href attr:class=class>
                        {label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 inset-x-0 z-40 transition-colors duration-300 {}",
                if scrolled() { "bg-background/95 shadow-lg backdrop-blur" } else { "bg-transparent" },
            )
        }>
            <div class="max-w-7xl mx-auto px-4 py-4 flex items-center justify-between">
                <A href="/" attr:class="flex items-center gap-3 text-xl font-bold text-cyan">
                    <RotatingProfilePicture size="w-10 h-10" />
                    "<dev/artist>"
                </A>
                <div class="hidden md:flex gap-8">{links(false)}</div>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Open menu"
                    on:click=move |_| set_menu_open.set(true)
                >
                    "☰"
                </button>
            </div>
        </nav>
        <Show when=move || menu_open.get()>
            <div class="fixed inset-0 z-50 flex flex-col items-center justify-center gap-8 bg-background/95">
                <button
                    class="absolute top-4 right-4 text-3xl"
                    aria-label="Close menu"
                    on:click=move |_| set_menu_open.set(false)
                >
                    "×"
                </button>
                {links(true)}
            </div>
        </Show>
    }
}
