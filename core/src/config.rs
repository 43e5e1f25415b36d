use serde::Deserialize;

/// Every tunable the controllers read. Defaults match the shipped site; a page
/// can override any subset through `window.__KARMAKAZI_CONFIG`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub nav: NavConfig,
    pub parallax: ParallaxConfig,
    pub reveal: RevealConfig,
    pub previews: PreviewConfig,
    pub transitions: TransitionConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav: String,
    pub mobile_toggle: String,
    pub nav_links: String,
    pub dropdown: String,
    pub anchor: String,
    pub orb: String,
    pub card: String,
    pub preview: String,
    pub follow_cursor: String,
    pub link: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav: ".main-nav".to_string(),
            mobile_toggle: ".mobile-menu-toggle".to_string(),
            nav_links: ".nav-links".to_string(),
            dropdown: ".dropdown".to_string(),
            anchor: "a[href^=\"#\"]".to_string(),
            orb: ".gradient-orb".to_string(),
            card: ".showcase-card".to_string(),
            preview: ".preview-animation".to_string(),
            follow_cursor: ".follow-cursor".to_string(),
            link: "a".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub scrolled: String,
    pub active: String,
    pub revealed: String,
    pub page_transition: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            scrolled: "scrolled".to_string(),
            active: "active".to_string(),
            revealed: "revealed".to_string(),
            page_transition: "page-transition".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub scrolled_after_px: f64,
    pub hide_after_px: f64,
    pub dropdown_close_delay_ms: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_after_px: 100.0,
            hide_after_px: 500.0,
            dropdown_close_delay_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub base_speed: f64,
    pub speed_step: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.5,
            speed_step: 0.2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub initial_offset_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
            initial_offset_px: 30.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub mode_attribute: String,
    pub interactive_mode: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            mode_attribute: "data-animation".to_string(),
            interactive_mode: "interactive".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub navigate_delay_ms: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            navigate_delay_ms: 500,
        }
    }
}
