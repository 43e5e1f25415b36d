/// Milliseconds from navigation start to the end of the load event.
///
/// `loadEventEnd` reads as zero until the load handlers have returned, so a
/// zero or inverted pair yields `None` rather than a bogus figure.
pub fn page_load_ms(navigation_start: f64, load_event_end: f64) -> Option<f64> {
    if navigation_start <= 0.0 || load_event_end <= 0.0 {
        return None;
    }
    let elapsed = load_event_end - navigation_start;
    if elapsed < 0.0 {
        return None;
    }
    Some(elapsed)
}
