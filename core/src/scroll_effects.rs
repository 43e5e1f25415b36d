use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{ParallaxConfig, RevealConfig, SiteConfig};
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// Vertical translation of orb `index` at scroll `offset`. Unclamped.
pub fn parallax_offset(offset: f64, index: usize, config: &ParallaxConfig) -> f64 {
    let speed = config.base_speed + index as f64 * config.speed_step;
    offset * speed
}

pub fn translate_y_px(px: f64) -> String {
    format!("translateY({px}px)")
}

pub struct ScrollEffects<S: Surface> {
    surface: Rc<S>,
    parallax: ParallaxConfig,
    reveal: RevealConfig,
    revealed_class: String,
    orbs: Vec<S::Node>,
    cards: Vec<S::Node>,
    states: RefCell<Vec<RevealState>>,
}

impl<S: Surface> ScrollEffects<S> {
    /// Collects orbs and cards and puts every card in its hidden start pose.
    pub fn mount(surface: Rc<S>, config: &SiteConfig) -> Self {
        let orbs = surface.query_all(&config.selectors.orb);
        let cards = surface.query_all(&config.selectors.card);
        let start = translate_y_px(config.reveal.initial_offset_px);
        for card in &cards {
            surface.set_style(card, "opacity", "0");
            surface.set_style(card, "transform", &start);
        }
        let states = RefCell::new(vec![RevealState::Pending; cards.len()]);
        Self {
            surface,
            parallax: config.parallax.clone(),
            reveal: config.reveal.clone(),
            revealed_class: config.classes.revealed.clone(),
            orbs,
            cards,
            states,
        }
    }

    pub fn cards(&self) -> &[S::Node] {
        &self.cards
    }

    pub fn orb_count(&self) -> usize {
        self.orbs.len()
    }

    pub fn threshold(&self) -> f64 {
        self.reveal.threshold
    }

    pub fn root_margin(&self) -> &str {
        &self.reveal.root_margin
    }

    pub fn on_scroll(&self, offset: f64) {
        for (index, orb) in self.orbs.iter().enumerate() {
            let shift = parallax_offset(offset, index, &self.parallax);
            self.surface.set_style(orb, "transform", &translate_y_px(shift));
        }
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.borrow().get(index).copied()
    }

    /// Handles one observer entry. Returns `true` exactly once per card, on
    /// the transition to revealed; the caller must stop observing it then.
    pub fn on_intersection(&self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let mut states = self.states.borrow_mut();
        let Some(state) = states.get_mut(index) else {
            return false;
        };
        if *state == RevealState::Revealed {
            return false;
        }
        *state = RevealState::Revealed;
        drop(states);
        if let Some(card) = self.cards.get(index) {
            self.surface.add_class(card, &self.revealed_class);
        }
        true
    }
}
