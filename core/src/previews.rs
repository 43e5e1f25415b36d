use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::error::SetupError;
use crate::surface::Surface;

pub const PLAY_STATE_RUNNING: &str = "running";
pub const PLAY_STATE_PAUSED: &str = "paused";

struct PreviewCard<N> {
    card: N,
    preview: N,
    follower: Option<N>,
}

pub struct PreviewController<S: Surface> {
    surface: Rc<S>,
    cards: Vec<PreviewCard<S::Node>>,
    cursor: RefCell<Vec<CursorSlot>>,
}

/// Latest pointer offset waiting for the next frame.
#[derive(Clone, Copy, Debug, Default)]
struct CursorSlot {
    pending: Option<(f64, f64)>,
    frame_requested: bool,
}

impl<S: Surface> PreviewController<S> {
    /// Every card must carry a preview child; interactive cards must also carry
    /// the follow-cursor child.
    pub fn mount(surface: Rc<S>, config: &SiteConfig) -> Result<Self, SetupError> {
        let selectors = &config.selectors;
        let modes = &config.previews;
        let mut cards = Vec::new();
        for (index, card) in surface.query_all(&selectors.card).into_iter().enumerate() {
            let preview = surface
                .query_in(&card, &selectors.preview)
                .ok_or_else(|| SetupError::missing_child(&selectors.card, index, &selectors.preview))?;
            let interactive = surface
                .attribute(&card, &modes.mode_attribute)
                .map(|mode| mode == modes.interactive_mode)
                .unwrap_or(false);
            let follower = if interactive {
                let follower = surface.query_in(&card, &selectors.follow_cursor).ok_or_else(|| {
                    SetupError::missing_child(&selectors.card, index, &selectors.follow_cursor)
                })?;
                Some(follower)
            } else {
                None
            };
            cards.push(PreviewCard {
                card,
                preview,
                follower,
            });
        }
        let cursor = RefCell::new(vec![CursorSlot::default(); cards.len()]);
        Ok(Self {
            surface,
            cards,
            cursor,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&S::Node> {
        self.cards.get(index).map(|entry| &entry.card)
    }

    pub fn is_interactive(&self, index: usize) -> bool {
        self.cards
            .get(index)
            .map(|entry| entry.follower.is_some())
            .unwrap_or(false)
    }

    pub fn on_enter(&self, index: usize) {
        self.set_play_state(index, PLAY_STATE_RUNNING);
    }

    pub fn on_leave(&self, index: usize) {
        self.set_play_state(index, PLAY_STATE_PAUSED);
    }

    fn set_play_state(&self, index: usize, state: &str) {
        if let Some(entry) = self.cards.get(index) {
            self.surface
                .set_style(&entry.preview, "animation-play-state", state);
        }
    }

    /// Records the pointer position relative to the card's box. Moves between
    /// frames coalesce into the latest one. Returns `true` when the caller must
    /// request a frame that ends in [`Self::flush_pointer`].
    pub fn on_pointer_move(&self, index: usize, client_x: f64, client_y: f64) -> bool {
        let Some(entry) = self.cards.get(index) else {
            return false;
        };
        if entry.follower.is_none() {
            return false;
        }
        let (left, top) = self.surface.client_origin(&entry.card);
        let mut cursor = self.cursor.borrow_mut();
        let Some(slot) = cursor.get_mut(index) else {
            return false;
        };
        slot.pending = Some((client_x - left, client_y - top));
        let request = !slot.frame_requested;
        slot.frame_requested = true;
        request
    }

    /// Applies the latest recorded position to the follower.
    pub fn flush_pointer(&self, index: usize) -> Option<(f64, f64)> {
        let pending = {
            let mut cursor = self.cursor.borrow_mut();
            let slot = cursor.get_mut(index)?;
            slot.frame_requested = false;
            slot.pending.take()
        };
        let (x, y) = pending?;
        let follower = self.cards.get(index)?.follower.as_ref()?;
        self.surface.set_style(follower, "left", &format!("{x}px"));
        self.surface.set_style(follower, "top", &format!("{y}px"));
        Some((x, y))
    }
}
