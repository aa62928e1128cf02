use super::*;

fn keys(role: Role) -> Vec<NavKey> {
    visible_nav(role).into_iter().map(|item| item.key).collect()
}

#[test]
fn employee_sees_dashboard_only() {
    assert_eq!(keys(Role::Employee), vec![NavKey::Dashboard]);
}

#[test]
fn foreman_sees_approvals() {
    assert_eq!(keys(Role::Foreman), vec![NavKey::Dashboard, NavKey::Approvals]);
}

#[test]
fn manager_sees_approvals_and_reports() {
    assert_eq!(keys(Role::Manager), vec![NavKey::Dashboard, NavKey::Approvals, NavKey::Reports]);
}

#[test]
fn training_officer_sees_reports_and_integrations() {
    assert_eq!(keys(Role::TrainingOfficer), vec![NavKey::Dashboard, NavKey::Reports, NavKey::Integrations]);
}

#[test]
fn administrator_sees_everything() {
    assert_eq!(keys(Role::Administrator).len(), NAV_ITEMS.len());
}

#[test]
fn nav_paths_are_absolute_and_unique() {
    let mut paths: Vec<&str> = NAV_ITEMS.iter().map(|item| item.path).collect();
    assert!(paths.iter().all(|p| p.starts_with('/')));
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), NAV_ITEMS.len());
}
