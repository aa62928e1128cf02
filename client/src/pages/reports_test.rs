use super::*;

#[test]
fn compliance_variant_thresholds() {
    assert_eq!(compliance_variant(100), KpiVariant::Success);
    assert_eq!(compliance_variant(90), KpiVariant::Success);
    assert_eq!(compliance_variant(89), KpiVariant::Warning);
    assert_eq!(compliance_variant(75), KpiVariant::Warning);
    assert_eq!(compliance_variant(74), KpiVariant::Danger);
    assert_eq!(compliance_variant(0), KpiVariant::Danger);
}

#[test]
fn report_columns_are_stable_across_languages() {
    use crate::i18n::translations;
    use crate::state::language::Language;

    let en: Vec<&str> = columns(translations(Language::En)).iter().map(|c| c.key).collect();
    let ar: Vec<&str> = columns(translations(Language::Ar)).iter().map(|c| c.key).collect();
    assert_eq!(en, ar);
    assert_eq!(en, vec!["department", "enrolled", "completed", "expired", "compliance"]);
}
