use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
};

use super::{
    effects::{Reveal, SectionHeading},
    use_theme,
};
use crate::{
    contact::{ContactState, Field, SubmitStatus},
    profile,
    scroll::Section,
};

/// Runs the fake send: confirmation after the submit delay, form again
/// after the reset delay.
fn simulate_send(state: RwSignal<ContactState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::contact::{RESET_DELAY, SUBMIT_DELAY};

        gloo_timers::future::sleep(SUBMIT_DELAY).await;
        if state.try_update(ContactState::complete_submit).is_none() {
            return;
        }
        log::info!("contact message accepted (simulated)");
        gloo_timers::future::sleep(RESET_DELAY).await;
        let _ = state.try_update(ContactState::reset);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = state;
}

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    let state = RwSignal::new(ContactState::default());
    let status = Memo::new(move |_| state.with(|s| s.status));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match state.try_update(ContactState::begin_submit) {
            Some(Ok(())) => {
                log::debug!("contact form submitting");
                simulate_send(state);
            }
            Some(Err(e)) => log::debug!("contact form not submitted: {e}"),
            None => {}
        }
    };

    view! {
        <section id=Section::Contact.id() class="py-24 px-4 scroll-mt-20">
            <div class="max-w-3xl mx-auto">
                <Reveal>
                    <SectionHeading
                        eyebrow="Contact"
                        title="Let's build something"
                        subtitle="Tell me about your project and I'll get back to you within two days."
                    />
                </Reveal>
                <div class=move || {
                    let c = theme.get().classes();
                    format!("rounded-3xl border p-8 md:p-10 {} {} {}", c.card, c.border, c.shadow)
                }>
                    <Show
                        when=move || status.get() == SubmitStatus::Submitted
                        fallback=move || {
                            view! {
                                <form class="grid gap-6" novalidate=true on:submit=on_submit>
                                    <div class="grid gap-6 md:grid-cols-2">
                                        <FormField field=Field::Name state input_type="text" />
                                        <FormField field=Field::Email state input_type="email" />
                                    </div>
                                    <FormField field=Field::Subject state input_type="text" />
                                    <FormField field=Field::Message state multiline=true />
                                    <button
                                        type="submit"
                                        disabled=move || status.get() == SubmitStatus::Submitting
                                        class=move || {
                                            format!(
                                                "py-3 rounded-full font-semibold transition-opacity disabled:opacity-60 {}",
                                                theme.get().classes().button,
                                            )
                                        }
                                    >
                                        {move || {
                                            if status.get() == SubmitStatus::Submitting {
                                                "Sending..."
                                            } else {
                                                "Send message"
                                            }
                                        }}
                                    </button>
                                </form>
                            }
                        }
                    >
                        <div class="text-center py-12 fade-up" role="status">
                            <div class="text-5xl mb-4">"🌸"</div>
                            <h3 class=move || {
                                format!("text-2xl font-bold {}", theme.get().classes().heading)
                            }>"Thank you!"</h3>
                            <p class=move || {
                                format!("mt-2 {}", theme.get().classes().muted)
                            }>"Your message is on its way. I'll reply soon."</p>
                        </div>
                    </Show>
                </div>
                <p class=move || {
                    format!("mt-6 text-center text-sm {}", theme.get().classes().muted)
                }>
                    "Prefer email? " <a href=profile::mailto() class="underline">{profile::EMAIL}</a>
                </p>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    field: Field,
    state: RwSignal<ContactState>,
    #[prop(optional)] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let theme = use_theme();
    let error = Memo::new(move |_| state.with(|s| s.error(field)));
    let value = move || state.with(|s| s.form.get(field).to_string());
    let on_input = move |ev: Event| state.update(|s| s.update(field, event_target_value(&ev)));
    let input_class = move || {
        format!(
            "w-full rounded-xl border px-4 py-3 focus:outline-none focus:ring-2 focus:ring-current {}",
            theme.get().classes().input,
        )
    };
    let invalid = move || error.with(Option::is_some).to_string();

    view! {
        <div>
            <label for=field.id() class="block mb-2 text-sm font-medium">
                {field.label()}
            </label>
            {if multiline {
                Either::Left(
                    view! {
                        <textarea
                            id=field.id()
                            name=field.id()
                            rows="6"
                            class=input_class
                            aria-invalid=invalid
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=field.id()
                            name=field.id()
                            type=input_type
                            class=input_class
                            aria-invalid=invalid
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
            {move || {
                error
                    .get()
                    .map(|msg| {
                        view! {
                            <p class=move || {
                                format!("mt-1 text-sm {}", theme.get().classes().error)
                            }>{msg}</p>
                        }
                    })
            }}
        </div>
    }
}
