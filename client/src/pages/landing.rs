//! Public landing page assembled from the marketing sections.

use leptos::prelude::*;

use crate::components::landing::{
    AiSection, EnterpriseSection, FaqSection, FeaturesSection, Hero, IntegrationsSection, KpiSection, LandingFooter,
    LandingNav, SecuritySection, WorkflowSection,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <LandingNav/>
            <Hero/>
            <FeaturesSection/>
            <WorkflowSection/>
            <AiSection/>
            <SecuritySection/>
            <KpiSection/>
            <IntegrationsSection/>
            <EnterpriseSection/>
            <FaqSection/>
            <LandingFooter/>
        </div>
    }
}
