use super::*;

#[test]
fn clicking_closed_entry_opens_it() {
    assert_eq!(toggle_faq(None, 2), Some(2));
}

#[test]
fn clicking_open_entry_closes_it() {
    assert_eq!(toggle_faq(Some(2), 2), None);
}

#[test]
fn opening_another_entry_replaces_the_open_one() {
    assert_eq!(toggle_faq(Some(0), 3), Some(3));
}
