use super::*;
use std::sync::atomic::AtomicUsize;

#[test]
fn new_guard_is_armed() {
    assert!(!UnauthorizedGuard::new().is_tripped());
}

#[test]
fn trip_succeeds_once() {
    let guard = UnauthorizedGuard::new();
    assert!(guard.trip());
    assert!(!guard.trip());
    assert!(!guard.trip());
    assert!(guard.is_tripped());
}

#[test]
fn clones_share_state() {
    let guard = UnauthorizedGuard::new();
    let other = guard.clone();
    assert!(other.trip());
    assert!(!guard.trip());
}

#[test]
fn run_once_executes_action_only_for_first_caller() {
    let guard = UnauthorizedGuard::new();
    let mut redirects = 0;
    for _ in 0..5 {
        guard.run_once(|| redirects += 1);
    }
    assert_eq!(redirects, 1);
}

#[test]
fn rearm_allows_next_episode() {
    let guard = UnauthorizedGuard::new();
    let mut redirects = 0;
    guard.run_once(|| redirects += 1);
    guard.run_once(|| redirects += 1);
    guard.rearm();
    guard.run_once(|| redirects += 1);
    assert_eq!(redirects, 2);
}

#[test]
fn concurrent_unauthorized_responses_redirect_exactly_once() {
    let guard = UnauthorizedGuard::new();
    let redirects = AtomicUsize::new(0);
    std::thread::scope(|scope| {
        for _ in 0..16 {
            let guard = guard.clone();
            let redirects = &redirects;
            scope.spawn(move || {
                guard.run_once(|| {
                    redirects.fetch_add(1, Ordering::SeqCst);
                });
            });
        }
    });
    assert_eq!(redirects.load(Ordering::SeqCst), 1);
}
