//! Marketing sections of the public landing page.
//!
//! Each section re-renders from the active language's copy. Card lists come
//! straight from `i18n`, icons included.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icon::SvgIcon;
use crate::components::language_toggle::LanguageToggle;
use crate::i18n::{IconItem, SectionHeading};
use crate::state::language::use_language;
use crate::util::icons::Icon;

/// Next open FAQ entry after clicking `index`. One entry is open at a time;
/// clicking the open entry closes it.
#[must_use]
pub fn toggle_faq(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) { None } else { Some(index) }
}

fn section_header(heading: &'static SectionHeading) -> impl IntoView {
    view! {
        <header class="landing-section__header">
            <span class="landing-section__eyebrow">{heading.eyebrow}</span>
            <h2>{heading.title}</h2>
            {(!heading.subtitle.is_empty()).then(|| view! { <p>{heading.subtitle}</p> })}
        </header>
    }
}

fn icon_cards(items: &'static [IconItem], class: &'static str) -> impl IntoView {
    items
        .iter()
        .map(|item| {
            view! {
                <article class=class>
                    <SvgIcon icon=item.icon class="landing-card__icon"/>
                    <h3>{item.title}</h3>
                    <p>{item.body}</p>
                </article>
            }
        })
        .collect_view()
}

#[component]
pub fn LandingNav() -> impl IntoView {
    let lang = use_language();
    view! {
        <nav class="landing-nav">
            <span class="landing-nav__brand">
                <SvgIcon icon=Icon::Award/>
                {move || lang.text().brand.name}
            </span>
            {move || {
                let nav = &lang.text().landing.nav;
                view! {
                    <div class="landing-nav__links">
                        <a href="#features">{nav.features}</a>
                        <a href="#workflow">{nav.workflow}</a>
                        <a href="#security">{nav.security}</a>
                        <a href="#faq">{nav.faq}</a>
                    </div>
                }
            }}
            <LanguageToggle/>
            <A href="/login" attr:class="btn btn--primary">{move || lang.text().landing.nav.sign_in}</A>
        </nav>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let lang = use_language();
    move || {
        let hero = &lang.text().landing.hero;
        view! {
            <section class="hero">
                <span class="hero__badge">
                    <SvgIcon icon=Icon::Sparkles/>
                    {hero.badge}
                </span>
                <h1>{hero.title}</h1>
                <p class="hero__subtitle">{hero.subtitle}</p>
                <div class="hero__actions">
                    <A href="/dashboard" attr:class="btn btn--primary btn--lg">{hero.primary_cta}</A>
                    <a href="#workflow" class="btn btn--ghost btn--lg">{hero.secondary_cta}</a>
                </div>
            </section>
        }
    }
}

#[component]
pub fn FeaturesSection() -> impl IntoView {
    let lang = use_language();
    move || {
        let landing = &lang.text().landing;
        view! {
            <section id="features" class="landing-section">
                {section_header(&landing.features)}
                <div class="landing-grid landing-grid--3">{icon_cards(landing.feature_items, "landing-card")}</div>
            </section>
        }
    }
}

#[component]
pub fn WorkflowSection() -> impl IntoView {
    let lang = use_language();
    move || {
        let landing = &lang.text().landing;
        let steps = landing
            .workflow_steps
            .iter()
            .enumerate()
            .map(|(n, step)| {
                view! {
                    <li class="workflow-step">
                        <span class="workflow-step__number">{n + 1}</span>
                        <SvgIcon icon=step.icon class="workflow-step__icon"/>
                        <h3>{step.title}</h3>
                        <p>{step.body}</p>
                    </li>
                }
            })
            .collect_view();
        view! {
            <section id="workflow" class="landing-section landing-section--alt">
                {section_header(&landing.workflow)}
                <ol class="workflow-steps">{steps}</ol>
            </section>
        }
    }
}

#[component]
pub fn AiSection() -> impl IntoView {
    let lang = use_language();
    move || {
        let landing = &lang.text().landing;
        view! {
            <section id="ai" class="landing-section">
                {section_header(&landing.ai)}
                <div class="landing-grid landing-grid--3">{icon_cards(landing.ai_points, "landing-card landing-card--accent")}</div>
            </section>
        }
    }
}

#[component]
pub fn SecuritySection() -> impl IntoView {
    let lang = use_language();
    move || {
        let landing = &lang.text().landing;
        view! {
            <section id="security" class="landing-section landing-section--alt">
                {section_header(&landing.security)}
                <div class="landing-grid landing-grid--4">{icon_cards(landing.security_items, "landing-card")}</div>
            </section>
        }
    }
}

#[component]
pub fn KpiSection() -> impl IntoView {
    let lang = use_language();
    move || {
        let landing = &lang.text().landing;
        let stats = landing
            .kpi_items
            .iter()
            .map(|stat| {
                view! {
                    <div class="landing-stat">
                        <SvgIcon icon=stat.icon class="landing-stat__icon"/>
                        <span class="landing-stat__value">{stat.value}</span>
                        <span class="landing-stat__label">{stat.label}</span>
                    </div>
                }
            })
            .collect_view();
        view! {
            <section id="kpis" class="landing-section">
                {section_header(&landing.kpis)}
                <div class="landing-grid landing-grid--4">{stats}</div>
            </section>
        }
    }
}

#[component]
pub fn IntegrationsSection() -> impl IntoView {
    let lang = use_language();
    move || {
        let landing = &lang.text().landing;
        view! {
            <section id="integrations" class="landing-section landing-section--alt">
                {section_header(&landing.integrations)}
                <div class="landing-grid landing-grid--4">{icon_cards(landing.integration_items, "landing-card")}</div>
            </section>
        }
    }
}

#[component]
pub fn EnterpriseSection() -> impl IntoView {
    let lang = use_language();
    move || {
        let enterprise = &lang.text().landing.enterprise;
        view! {
            <section id="enterprise" class="landing-section landing-section--dark">
                {section_header(&enterprise.heading)}
                <div class="landing-grid landing-grid--3">{icon_cards(enterprise.points, "landing-card")}</div>
                <div class="landing-section__cta">
                    <a href="mailto:sales@trainflow.example" class="btn btn--primary btn--lg">{enterprise.cta}</a>
                </div>
            </section>
        }
    }
}

#[component]
pub fn FaqSection() -> impl IntoView {
    let lang = use_language();
    let open = RwSignal::new(None::<usize>);
    move || {
        let landing = &lang.text().landing;
        let entries = landing
            .faq_items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let is_open = move || open.get() == Some(index);
                view! {
                    <div class="faq__item" class:faq__item--open=is_open>
                        <button
                            class="faq__question"
                            aria-expanded=move || is_open().to_string()
                            on:click=move |_| open.update(|o| *o = toggle_faq(*o, index))
                        >
                            <span>{item.question}</span>
                            <SvgIcon icon=Icon::Plus class="faq__chevron"/>
                        </button>
                        <Show when=is_open>
                            <p class="faq__answer">{item.answer}</p>
                        </Show>
                    </div>
                }
            })
            .collect_view();
        view! {
            <section id="faq" class="landing-section">
                {section_header(&landing.faq)}
                <div class="faq">{entries}</div>
            </section>
        }
    }
}

#[component]
pub fn LandingFooter() -> impl IntoView {
    let lang = use_language();
    move || {
        let footer = &lang.text().landing.footer;
        let links = |items: &'static [&'static str]| {
            items.iter().map(|label| view! { <li><a href="#">{*label}</a></li> }).collect_view()
        };
        view! {
            <footer class="landing-footer">
                <div class="landing-footer__brand">
                    <SvgIcon icon=Icon::Award/>
                    <p>{footer.tagline}</p>
                </div>
                <div class="landing-footer__column">
                    <h4>{footer.product}</h4>
                    <ul>{links(footer.product_links)}</ul>
                </div>
                <div class="landing-footer__column">
                    <h4>{footer.company}</h4>
                    <ul>{links(footer.company_links)}</ul>
                </div>
                <p class="landing-footer__rights">{footer.rights}</p>
            </footer>
        }
    }
}
