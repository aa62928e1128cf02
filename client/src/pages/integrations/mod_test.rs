use super::*;
use crate::i18n::translations;
use crate::state::language::Language;

#[test]
fn integration_paths_match_routes() {
    assert_eq!(integration_path("int-sap", IntegrationTab::Edit), "/integrations/int-sap/edit");
    assert_eq!(integration_path("int-sap", IntegrationTab::Logs), "/integrations/int-sap/logs");
    assert_eq!(integration_path("int-sap", IntegrationTab::Mappings), "/integrations/int-sap/mappings");
    assert_eq!(integration_path("int-sap", IntegrationTab::Webhooks), "/integrations/int-sap/webhooks");
}

#[test]
fn every_tab_is_labelled() {
    for lang in Language::ALL {
        let text = &translations(lang).integrations;
        for tab in IntegrationTab::ALL {
            assert!(!tab.label(text).is_empty());
        }
    }
}
