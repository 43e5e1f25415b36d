use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::error::SetupError;
use crate::links::{classify_link, LinkKind};
use crate::surface::{Scheduler, Surface};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickDecision {
    /// Default navigation must be suppressed; the controller navigates later.
    Intercept { href: String },
    PassThrough(LinkKind),
}

pub struct PageTransitions<S: Surface, T: Scheduler> {
    surface: Rc<S>,
    scheduler: Rc<T>,
    body: S::Node,
    links: Vec<S::Node>,
    class: String,
    delay_ms: u32,
    pending: Rc<RefCell<Option<T::Handle>>>,
}

impl<S: Surface + 'static, T: Scheduler + 'static> PageTransitions<S, T> {
    pub fn mount(surface: Rc<S>, scheduler: Rc<T>, config: &SiteConfig) -> Result<Self, SetupError> {
        let body = surface.body().ok_or_else(|| SetupError::missing("body"))?;
        let links = surface.query_all(&config.selectors.link);
        Ok(Self {
            surface,
            scheduler,
            body,
            links,
            class: config.classes.page_transition.clone(),
            delay_ms: config.transitions.navigate_delay_ms,
            pending: Rc::new(RefCell::new(None)),
        })
    }

    pub fn links(&self) -> &[S::Node] {
        &self.links
    }

    pub fn navigation_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    pub fn on_link_click(&self, index: usize) -> Option<ClickDecision> {
        let link = self.links.get(index)?;
        let href = self.surface.attribute(link, "href");
        let host = self.surface.link_hostname(link);
        let kind = classify_link(href.as_deref(), host.as_deref(), &self.surface.page_hostname());
        let href = match (kind, href) {
            (LinkKind::SameOrigin, Some(href)) => href,
            (kind, _) => return Some(ClickDecision::PassThrough(kind)),
        };
        self.surface.add_class(&self.body, &self.class);
        self.schedule_navigation(href.clone());
        Some(ClickDecision::Intercept { href })
    }

    /// A later click replaces an earlier one still waiting out the fade.
    fn schedule_navigation(&self, href: String) {
        let surface = Rc::clone(&self.surface);
        let pending = Rc::clone(&self.pending);
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                let fired = pending.borrow_mut().take();
                drop(fired);
                surface.navigate(&href);
            }),
        );
        let displaced = self.pending.borrow_mut().replace(handle);
        if let Some(handle) = displaced {
            self.scheduler.cancel(handle);
        }
    }

    /// Clears the fade when the page is shown again, including restores from
    /// the back/forward cache where a navigation may still be queued.
    pub fn on_page_show(&self) {
        let pending = self.pending.borrow_mut().take();
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
        self.surface.remove_class(&self.body, &self.class);
    }
}
