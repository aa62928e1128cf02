use super::*;

#[test]
fn stage_counts_cover_demo_requests() {
    let counts = stage_counts(&mock::renewals());
    assert_eq!(
        counts,
        [(Status::Pending, 3), (Status::ForemanApproved, 1), (Status::ManagerApproved, 1), (Status::Rejected, 1)]
    );
}

#[test]
fn review_queue_puts_open_requests_first() {
    let queue = review_queue(&mock::renewals());
    let first_closed = queue.iter().position(|r| !r.is_open()).unwrap();
    assert!(queue[..first_closed].iter().all(RenewalRow::is_open));
    assert!(queue[first_closed..].iter().all(|r| !r.is_open()));
}

#[test]
fn review_queue_orders_by_request_date_within_group() {
    let queue = review_queue(&mock::renewals());
    let open: Vec<&str> = queue.iter().filter(|r| r.is_open()).map(|r| r.requested).collect();
    assert!(open.windows(2).all(|w| w[0] >= w[1]));
}
