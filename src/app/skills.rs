use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;

#[component]
pub fn SkillsPage() -> impl IntoView {
    let groups = expect_context::<SiteConfig>().skills;
    let (active, set_active) = signal(0usize);

    let tabs = groups
        .iter()
        .enumerate()
        .map(|(i, g)| {
            view! {
                <button
                    class=move || {
                        if active.get() == i {
                            "px-6 py-3 rounded-md border-2 border-cyan bg-cyan text-background text-lg"
                        } else {
                            "px-6 py-3 rounded-md border-2 border-cyan text-cyan text-lg hover:bg-cyan/20"
                        }
                    }
                    on:click=move |_| set_active.set(i)
                >
                    {g.name}
                </button>
            }
        })
        .collect_view();

    view! {
        <Title text="Skills" />
        <div class="max-w-6xl mx-auto px-4 page-content">
            <h1 class="text-4xl font-bold text-center text-cyan my-12">"My Expertise"</h1>
            <div class="flex justify-center gap-4 mb-12">{tabs}</div>
            <div class="grid grid-cols-[repeat(auto-fill,minmax(250px,1fr))] gap-10">
                {move || {
                    groups
                        .get(active.get())
                        .map(|g| {
                            g.skills
                                .iter()
                                .map(|s| {
                                    view! {
                                        <div class="rounded-xl p-8 text-center bg-brightBlack/30 shadow-lg hover:-translate-y-2 transition-transform">
                                            <div class="text-6xl mb-6">{s.icon}</div>
                                            <h3 class="text-2xl">{s.name}</h3>
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                }}
            </div>
        </div>
    }
}
