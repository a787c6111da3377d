use super::*;

#[test]
fn carries_configured_delay() {
    let debounce = Debounce::new(50);
    assert_eq!(debounce.delay_ms(), 50);
}

#[test]
fn clones_share_configuration() {
    let debounce = Debounce::new(50);
    assert_eq!(debounce.clone().delay_ms(), 50);
}

#[test]
fn burst_of_schedules_leaves_exactly_one_live_run() {
    let guard = RunGuard::default();
    // One mutation storm: five triggers before any timer fires.
    let tickets: Vec<u64> = (0..5).map(|_| guard.issue()).collect();
    let live: Vec<&u64> = tickets.iter().filter(|t| guard.is_live(**t)).collect();
    assert_eq!(live, vec![tickets.last().expect("non-empty burst")]);
}

#[test]
fn invalidate_cancels_the_pending_run() {
    let guard = RunGuard::default();
    let ticket = guard.issue();
    guard.invalidate();
    assert!(!guard.is_live(ticket));
}

#[test]
fn scheduling_again_after_a_run_issues_a_fresh_live_ticket() {
    let guard = RunGuard::default();
    let first = guard.issue();
    let second = guard.issue();
    assert!(!guard.is_live(first));
    assert!(guard.is_live(second));
}

#[test]
fn guard_clones_share_the_live_ticket() {
    let guard = RunGuard::default();
    let shared = guard.clone();
    let ticket = guard.issue();
    assert!(shared.is_live(ticket));
    shared.invalidate();
    assert!(!guard.is_live(ticket));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn non_browser_schedule_and_cancel_are_noops() {
    let debounce = Debounce::new(50);
    debounce.schedule(|| panic!("must not run outside the browser"));
    debounce.cancel();
}
