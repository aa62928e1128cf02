//! Headline metric card used on the dashboard and reports pages.

#[cfg(test)]
#[path = "kpi_card_test.rs"]
mod kpi_card_test;

use leptos::prelude::*;

use crate::components::icon::SvgIcon;
use crate::util::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Change since the previous period, e.g. `+4%`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trend {
    pub direction: TrendDirection,
    pub value: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KpiVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
}

#[must_use]
pub fn trend_arrow(direction: TrendDirection) -> Icon {
    match direction {
        TrendDirection::Up => Icon::ArrowUp,
        TrendDirection::Down => Icon::ArrowDown,
        TrendDirection::Flat => Icon::Minus,
    }
}

#[must_use]
pub fn variant_class(variant: KpiVariant) -> &'static str {
    match variant {
        KpiVariant::Default => "kpi-card",
        KpiVariant::Success => "kpi-card kpi-card--success",
        KpiVariant::Warning => "kpi-card kpi-card--warning",
        KpiVariant::Danger => "kpi-card kpi-card--danger",
    }
}

#[must_use]
pub fn trend_class(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "kpi-card__trend kpi-card__trend--up",
        TrendDirection::Down => "kpi-card__trend kpi-card__trend--down",
        TrendDirection::Flat => "kpi-card__trend",
    }
}

#[component]
pub fn KpiCard(
    label: Signal<String>,
    value: Signal<String>,
    #[prop(optional)] trend: Option<Trend>,
    #[prop(optional)] hint: Option<Signal<String>>,
    #[prop(optional)] variant: KpiVariant,
    #[prop(optional)] icon: Option<Icon>,
) -> impl IntoView {
    view! {
        <div class=variant_class(variant)>
            <div class="kpi-card__header">
                <span class="kpi-card__label">{move || label.get()}</span>
                {icon.map(|icon| view! { <SvgIcon icon=icon class="kpi-card__icon"/> })}
            </div>
            <div class="kpi-card__value">{move || value.get()}</div>
            <div class="kpi-card__footer">
                {trend.map(|trend| {
                    view! {
                        <span class=trend_class(trend.direction)>
                            <SvgIcon icon=trend_arrow(trend.direction)/>
                            {trend.value}
                        </span>
                    }
                })}
                {hint.map(|hint| view! { <span class="kpi-card__hint">{move || hint.get()}</span> })}
            </div>
        </div>
    }
}
