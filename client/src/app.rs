//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_layout::AppLayout;
use crate::components::protected_route::ProtectedRoute;
use crate::net::types::Role;
use crate::pages::approvals::ApprovalsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::integrations::form::{EditIntegrationPage, NewIntegrationPage};
use crate::pages::integrations::list::IntegrationListPage;
use crate::pages::integrations::logs::IntegrationLogsPage;
use crate::pages::integrations::mappings::IntegrationMappingsPage;
use crate::pages::integrations::webhooks::IntegrationWebhooksPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::reports::ReportsPage;
use crate::state::auth::{AuthState, load_session};
use crate::state::integrations::IntegrationsState;
use crate::state::language::LanguageContext;
use crate::state::notifications::NotificationsState;

/// Roles allowed on `/approvals`.
pub const APPROVER_ROLES: &[Role] = &[Role::Foreman, Role::Manager, Role::Administrator];
/// Roles allowed on `/reports`.
pub const REPORT_ROLES: &[Role] = &[Role::Manager, Role::TrainingOfficer, Role::Administrator];
/// Roles allowed on every `/integrations` route.
pub const INTEGRATION_ROLES: &[Role] = &[Role::Administrator, Role::TrainingOfficer];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" dir="ltr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notifications = RwSignal::new(NotificationsState::default());
    let integrations = RwSignal::new(IntegrationsState::seeded());

    provide_context(auth);
    provide_context(notifications);
    provide_context(integrations);
    let lang = LanguageContext::provide();

    load_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/trainflow.css"/>
        <Title text=move || lang.text().brand.page_title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! {
                        <ProtectedRoute>
                            <AppLayout><DashboardPage/></AppLayout>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment("approvals")
                    view=|| view! {
                        <ProtectedRoute required_roles=APPROVER_ROLES>
                            <AppLayout><ApprovalsPage/></AppLayout>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment("reports")
                    view=|| view! {
                        <ProtectedRoute required_roles=REPORT_ROLES>
                            <AppLayout><ReportsPage/></AppLayout>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment("integrations")
                    view=|| view! {
                        <ProtectedRoute required_roles=INTEGRATION_ROLES>
                            <AppLayout><IntegrationListPage/></AppLayout>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("integrations"), StaticSegment("new"))
                    view=|| view! {
                        <ProtectedRoute required_roles=INTEGRATION_ROLES>
                            <AppLayout><NewIntegrationPage/></AppLayout>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("integrations"), ParamSegment("id"), StaticSegment("edit"))
                    view=|| view! {
                        <ProtectedRoute required_roles=INTEGRATION_ROLES>
                            <AppLayout><EditIntegrationPage/></AppLayout>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("integrations"), ParamSegment("id"), StaticSegment("logs"))
                    view=|| view! {
                        <ProtectedRoute required_roles=INTEGRATION_ROLES>
                            <AppLayout><IntegrationLogsPage/></AppLayout>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("integrations"), ParamSegment("id"), StaticSegment("mappings"))
                    view=|| view! {
                        <ProtectedRoute required_roles=INTEGRATION_ROLES>
                            <AppLayout><IntegrationMappingsPage/></AppLayout>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("integrations"), ParamSegment("id"), StaticSegment("webhooks"))
                    view=|| view! {
                        <ProtectedRoute required_roles=INTEGRATION_ROLES>
                            <AppLayout><IntegrationWebhooksPage/></AppLayout>
                        </ProtectedRoute>
                    }
                />
            </Routes>
        </Router>
    }
}
