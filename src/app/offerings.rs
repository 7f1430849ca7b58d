use leptos::prelude::*;

use super::{
    effects::{Reveal, SectionHeading, TiltCard},
    use_theme,
};
use crate::{
    content::{PricingPlan, PRICING_PLANS, SERVICES},
    scroll::Section,
};

#[component]
pub fn Services() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section id=Section::Services.id() class="py-24 px-4 scroll-mt-20">
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <SectionHeading
                        eyebrow="Services"
                        title="How I can help"
                        subtitle="Pick one, or mix and match. Every engagement starts with a free call."
                    />
                </Reveal>
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <Reveal>
                                    <TiltCard class="h-full text-center">
                                        <div class="service-icon text-4xl mb-4">{service.icon}</div>
                                        <h3 class=move || {
                                            format!("text-lg font-semibold mb-2 {}", theme.get().classes().heading)
                                        }>{service.title}</h3>
                                        <p class=move || {
                                            format!("text-sm {}", theme.get().classes().muted)
                                        }>{service.description}</p>
                                    </TiltCard>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Pricing(scroll_to: Callback<Section>) -> impl IntoView {
    view! {
        <section id=Section::Pricing.id() class="py-24 px-4 scroll-mt-20">
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <SectionHeading
                        eyebrow="Pricing"
                        title="Simple, honest rates"
                        subtitle="Fixed quotes for defined projects, hourly for everything else."
                    />
                </Reveal>
                <div class="grid gap-8 md:grid-cols-3 items-stretch">
                    {PRICING_PLANS
                        .iter()
                        .map(|plan| view! { <PlanCard plan scroll_to /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: &'static PricingPlan, scroll_to: Callback<Section>) -> impl IntoView {
    let theme = use_theme();
    let lift = if plan.featured { "md:-translate-y-4 ring-2 ring-current" } else { "" };

    view! {
        <Reveal>
            <div class=move || {
                let c = theme.get().classes();
                format!(
                    "relative h-full flex flex-col rounded-2xl border p-8 {} {} {} {lift}",
                    c.card,
                    c.border,
                    c.shadow,
                )
            }>
                {plan
                    .featured
                    .then(|| {
                        view! {
                            <span class=move || {
                                format!(
                                    "absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 rounded-full text-xs font-semibold {}",
                                    theme.get().classes().button,
                                )
                            }>"Most popular"</span>
                        }
                    })}
                <h3 class=move || {
                    format!("text-xl font-semibold {}", theme.get().classes().heading)
                }>{plan.name}</h3>
                <p class="mt-4">
                    <span class=move || {
                        format!("text-4xl font-extrabold {}", theme.get().classes().accent)
                    }>{plan.price}</span>
                    <span class=move || {
                        format!("ml-2 text-sm {}", theme.get().classes().muted)
                    }>{plan.cadence}</span>
                </p>
                <ul class="mt-6 space-y-3 flex-grow">
                    {plan
                        .features
                        .iter()
                        .map(|f| {
                            view! {
                                <li class="flex gap-2">
                                    <span class=move || theme.get().classes().accent>"✓"</span>
                                    {*f}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    type="button"
                    class=move || {
                        let c = theme.get().classes();
                        let style = if plan.featured { c.button } else { c.button_ghost };
                        format!("mt-8 w-full py-3 rounded-full border font-semibold {style}")
                    }
                    on:click=move |_| scroll_to.run(Section::Contact)
                >
                    "Start a project"
                </button>
            </div>
        </Reveal>
    }
}
