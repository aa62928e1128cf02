use super::*;

#[test]
fn trend_arrows_follow_direction() {
    assert_eq!(trend_arrow(TrendDirection::Up), Icon::ArrowUp);
    assert_eq!(trend_arrow(TrendDirection::Down), Icon::ArrowDown);
    assert_eq!(trend_arrow(TrendDirection::Flat), Icon::Minus);
}

#[test]
fn default_variant_has_base_class_only() {
    assert_eq!(KpiVariant::default(), KpiVariant::Default);
    assert_eq!(variant_class(KpiVariant::Default), "kpi-card");
}

#[test]
fn variants_add_modifier_classes() {
    assert!(variant_class(KpiVariant::Success).ends_with("kpi-card--success"));
    assert!(variant_class(KpiVariant::Warning).ends_with("kpi-card--warning"));
    assert!(variant_class(KpiVariant::Danger).ends_with("kpi-card--danger"));
}

#[test]
fn flat_trend_has_no_direction_modifier() {
    assert_eq!(trend_class(TrendDirection::Flat), "kpi-card__trend");
    assert!(trend_class(TrendDirection::Up).contains("--up"));
    assert!(trend_class(TrendDirection::Down).contains("--down"));
}
