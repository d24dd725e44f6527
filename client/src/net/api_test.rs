use super::*;
use content::types::Service;
use futures::executor::block_on;

#[test]
fn gateway_targets_the_build_time_base_url() {
    assert_eq!(gateway().transport().base_url(), API_BASE_URL.trim_end_matches('/'));
}

#[test]
fn server_render_fetches_resolve_to_failure_envelopes() {
    let resp = block_on(gateway().services());
    assert!(!resp.success);
    assert_eq!(resp.error_text(), "browser HTTP is unavailable in this build");
}

#[test]
fn logged_passes_responses_through() {
    let ok = logged("services", ApiResponse::ok(Vec::<Service>::new()));
    assert!(ok.success);
    let failed = logged::<Vec<Service>>("services", ApiResponse::failure("db down"));
    assert_eq!(failed.error_text(), "db down");
}

#[test]
fn spawn_without_a_browser_drops_the_task() {
    let ran = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = ran.clone();
    spawn(async move { flag.set(true) });
    assert!(!ran.get());
}
