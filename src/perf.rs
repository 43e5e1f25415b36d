use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use karmakazi_core::page_load_ms;

/// Logs the page load time once the load event has finished.
pub(crate) fn install_load_timing() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.performance().is_none() {
        return;
    }
    let complete = window
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);
    if complete {
        Timeout::new(0, report_page_load).forget();
        return;
    }
    EventListener::once(&window, "load", |_| {
        // loadEventEnd stays 0 until every load handler has returned.
        Timeout::new(0, report_page_load).forget();
    })
    .forget();
}

fn report_page_load() {
    let Some(performance) = web_sys::window().and_then(|window| window.performance()) else {
        return;
    };
    let timing = performance.timing();
    if let Some(elapsed) = page_load_ms(timing.navigation_start(), timing.load_event_end()) {
        gloo::console::log!(format!("Page load time: {elapsed}ms"));
    }
}
