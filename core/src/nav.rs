use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::{Classes, NavConfig, SiteConfig};
use crate::error::SetupError;
use crate::surface::{Scheduler, Surface};
use crate::timers::TimerArena;

pub const NAV_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const NAV_HIDDEN_TRANSFORM: &str = "translateY(-100%)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavFrame {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Presentation of the nav bar after scrolling from `previous` to `current`.
pub fn nav_frame(previous: f64, current: f64, config: &NavConfig) -> NavFrame {
    NavFrame {
        scrolled: current > config.scrolled_after_px,
        hidden: current > previous && current > config.hide_after_px,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorOutcome {
    Scrolled,
    Unresolved { href: String },
}

pub struct NavigationController<S: Surface, T: Scheduler> {
    surface: Rc<S>,
    scheduler: Rc<T>,
    config: NavConfig,
    classes: Classes,
    nav: S::Node,
    mobile: Option<(S::Node, S::Node)>,
    dropdowns: Vec<S::Node>,
    anchors: Vec<S::Node>,
    last_offset: Cell<f64>,
    close_timers: Rc<RefCell<TimerArena<T::Handle>>>,
}

impl<S: Surface + 'static, T: Scheduler + 'static> NavigationController<S, T> {
    pub fn mount(surface: Rc<S>, scheduler: Rc<T>, config: &SiteConfig) -> Result<Self, SetupError> {
        let selectors = &config.selectors;
        let nav = surface
            .query(&selectors.nav)
            .ok_or_else(|| SetupError::missing(&selectors.nav))?;
        let mobile = match surface.query(&selectors.mobile_toggle) {
            Some(toggle) => {
                let links = surface
                    .query(&selectors.nav_links)
                    .ok_or_else(|| SetupError::missing(&selectors.nav_links))?;
                Some((toggle, links))
            }
            None => None,
        };
        let dropdowns = surface.query_all(&selectors.dropdown);
        let anchors = surface.query_all(&selectors.anchor);
        let close_timers = Rc::new(RefCell::new(TimerArena::with_len(dropdowns.len())));
        Ok(Self {
            surface,
            scheduler,
            config: config.nav.clone(),
            classes: config.classes.clone(),
            nav,
            mobile,
            dropdowns,
            anchors,
            last_offset: Cell::new(0.0),
            close_timers,
        })
    }

    pub fn nav(&self) -> &S::Node {
        &self.nav
    }

    pub fn mobile_toggle(&self) -> Option<&S::Node> {
        self.mobile.as_ref().map(|(toggle, _)| toggle)
    }

    pub fn dropdowns(&self) -> &[S::Node] {
        &self.dropdowns
    }

    pub fn anchors(&self) -> &[S::Node] {
        &self.anchors
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset.get()
    }

    pub fn on_scroll(&self, offset: f64) -> NavFrame {
        let frame = nav_frame(self.last_offset.get(), offset, &self.config);
        if frame.scrolled {
            self.surface.add_class(&self.nav, &self.classes.scrolled);
        } else {
            self.surface.remove_class(&self.nav, &self.classes.scrolled);
        }
        let transform = if frame.hidden {
            NAV_HIDDEN_TRANSFORM
        } else {
            NAV_SHOWN_TRANSFORM
        };
        self.surface.set_style(&self.nav, "transform", transform);
        self.last_offset.set(offset);
        frame
    }

    /// Flips `active` on the link list and on the toggle in the same click.
    /// Returns whether the list is open afterwards.
    pub fn on_toggle_click(&self) -> Option<bool> {
        let (toggle, links) = self.mobile.as_ref()?;
        let open = self.surface.toggle_class(links, &self.classes.active);
        self.surface.toggle_class(toggle, &self.classes.active);
        Some(open)
    }

    pub fn on_dropdown_enter(&self, index: usize) {
        let Some(dropdown) = self.dropdowns.get(index) else {
            return;
        };
        let pending = self.close_timers.borrow_mut().disarm(index);
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
        self.surface.add_class(dropdown, &self.classes.active);
    }

    pub fn on_dropdown_leave(&self, index: usize) {
        let Some(dropdown) = self.dropdowns.get(index) else {
            return;
        };
        let surface = Rc::clone(&self.surface);
        let timers = Rc::clone(&self.close_timers);
        let dropdown = dropdown.clone();
        let class = self.classes.active.clone();
        let handle = self.scheduler.schedule(
            self.config.dropdown_close_delay_ms,
            Box::new(move || {
                let fired = timers.borrow_mut().disarm(index);
                drop(fired);
                surface.remove_class(&dropdown, &class);
            }),
        );
        let displaced = self.close_timers.borrow_mut().arm(index, handle);
        if let Some(handle) = displaced {
            self.scheduler.cancel(handle);
        }
    }

    pub fn close_pending(&self, index: usize) -> bool {
        self.close_timers.borrow().is_armed(index)
    }

    /// Resolves the anchor's href as a selector and scrolls to the match. The
    /// caller suppresses default navigation in both outcomes.
    pub fn on_anchor_click(&self, index: usize) -> Option<AnchorOutcome> {
        let anchor = self.anchors.get(index)?;
        let href = self.surface.attribute(anchor, "href").unwrap_or_default();
        Some(self.scroll_to(&href))
    }

    pub fn scroll_to(&self, href: &str) -> AnchorOutcome {
        let target = if href.len() > 1 {
            self.surface.query(href)
        } else {
            None
        };
        match target {
            Some(target) => {
                self.surface.scroll_into_view(&target);
                AnchorOutcome::Scrolled
            }
            None => AnchorOutcome::Unresolved {
                href: href.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_threshold_is_exclusive() {
        let config = NavConfig::default();
        assert!(!nav_frame(0.0, 100.0, &config).scrolled);
        assert!(nav_frame(0.0, 100.5, &config).scrolled);
    }

    #[test]
    fn hides_only_when_moving_down_past_threshold() {
        let config = NavConfig::default();
        assert!(!nav_frame(400.0, 500.0, &config).hidden);
        assert!(nav_frame(500.0, 501.0, &config).hidden);
        assert!(!nav_frame(800.0, 700.0, &config).hidden);
        assert!(!nav_frame(700.0, 700.0, &config).hidden);
    }
}
