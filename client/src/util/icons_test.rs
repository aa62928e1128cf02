use super::*;

#[test]
fn every_icon_has_path_data() {
    for icon in Icon::ALL {
        let path = icon.path();
        assert!(path.starts_with('M'), "{icon:?} path should start with a move command");
    }
}

#[test]
fn icon_paths_are_distinct() {
    let mut paths = Icon::ALL.iter().map(|icon| icon.path()).collect::<Vec<_>>();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), Icon::ALL.len());
}
