use karmakazi_core::SiteConfig;

#[test]
fn defaults_match_site_markup() {
    let config = SiteConfig::default();
    assert_eq!(config.selectors.nav, ".main-nav");
    assert_eq!(config.nav.scrolled_after_px, 100.0);
    assert_eq!(config.nav.hide_after_px, 500.0);
    assert_eq!(config.nav.dropdown_close_delay_ms, 300);
    assert_eq!(config.transitions.navigate_delay_ms, 500);
    assert_eq!(config.reveal.root_margin, "0px 0px -100px 0px");
}

#[test]
fn partial_override_keeps_other_defaults() {
    let raw = r#"{ "nav": { "hide_after_px": 800 }, "classes": { "active": "is-open" } }"#;
    let config: SiteConfig = serde_json::from_str(raw).expect("valid config");
    assert_eq!(config.nav.hide_after_px, 800.0);
    assert_eq!(config.nav.scrolled_after_px, 100.0);
    assert_eq!(config.classes.active, "is-open");
    assert_eq!(config.classes.revealed, "revealed");
    assert_eq!(config.previews, SiteConfig::default().previews);
}
