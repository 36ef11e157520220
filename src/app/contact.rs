use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;
use crate::contact::{ContactMessage, Notice};

use super::home::SocialLinks;

const INPUT_CLASS: &str = "w-full mb-6 p-4 rounded-lg bg-brightBlack/30 border border-cyan text-foreground focus:outline-none focus:ring-2 focus:ring-cyan";

#[component]
pub fn ContactPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let to = config.contact_email;
    let form = RwSignal::new(ContactMessage::default());
    let (notice, set_notice) = signal(None::<Notice>);
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let msg = form.get_untracked();
        if let Err(e) = msg.validate() {
            set_notice.set(Some(Notice::Invalid(e)));
            return;
        }
        set_sending.set(true);
        #[cfg(feature = "hydrate")]
        {
            let relay = config.relay.clone();
            leptos::task::spawn_local(async move {
                let notice = crate::contact::submit(relay.as_ref(), to, &msg).await;
                match &notice {
                    Notice::Sent => form.set(ContactMessage::default()),
                    Notice::OpenedMailClient { href } => {
                        if let Err(e) = window().location().set_href(href) {
                            log::error!("contact: couldn't open mail client: {e:?}");
                        }
                    }
                    Notice::Invalid(_) => {}
                }
                set_notice.set(Some(notice));
                set_sending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (msg, set_sending);
    };

    view! {
        <Title text="Contact" />
        <div class="max-w-6xl mx-auto px-4 page-content">
            <h1 class="text-4xl font-bold text-center text-cyan my-12">"Contact Me"</h1>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-16">
                <form on:submit=on_submit class="flex flex-col">
                    {text_field(form, "Your Name", "text", |f| &f.name, |f| &mut f.name)}
                    {text_field(form, "Your Email", "email", |f| &f.email, |f| &mut f.email)}
                    {text_field(form, "Subject", "text", |f| &f.subject, |f| &mut f.subject)}
                    <textarea
                        placeholder="Your Message"
                        required=true
                        class=format!("{INPUT_CLASS} min-h-[150px]")
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.message = value);
                        }
                    ></textarea>
                    <button
                        type="submit"
                        disabled=move || sending.get()
                        class="px-8 py-4 rounded-lg bg-cyan text-background text-xl font-semibold hover:bg-red transition-colors disabled:opacity-50"
                    >
                        {move || if sending.get() { "Sending..." } else { "Send Message" }}
                    </button>
                    {move || {
                        notice
                            .get()
                            .map(|n| {
                                let color = if n.is_error() { "text-red" } else { "text-green" };
                                view! {
                                    <p role="status" class=format!("mt-4 {color}")>
                                        {n.text()}
                                    </p>
                                }
                            })
                    }}
                </form>
                <div class="flex flex-col gap-8 text-lg">
                    <p>
                        "📧 "
                        <a href=format!("mailto:{to}") class="text-cyan hover:underline">
                            {to}
                        </a>
                    </p>
                    <SocialLinks />
                </div>
            </div>
        </div>
    }
}

fn text_field(
    form: RwSignal<ContactMessage>,
    placeholder: &'static str,
    kind: &'static str,
    get: fn(&ContactMessage) -> &String,
    set: fn(&mut ContactMessage) -> &mut String,
) -> impl IntoView {
    view! {
        <input
            type=kind
            placeholder=placeholder
            required=true
            class=INPUT_CLASS
            prop:value=move || form.with(|f| get(f).clone())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| *set(f) = value);
            }
        />
    }
}
