pub mod config;
pub mod error;
pub mod links;
pub mod nav;
pub mod previews;
pub mod scroll_effects;
pub mod stylesheet;
pub mod surface;
pub mod throttle;
pub mod timers;
pub mod timing;
pub mod transitions;

pub use config::SiteConfig;
pub use error::SetupError;
pub use links::{classify_link, LinkKind};
pub use nav::{nav_frame, AnchorOutcome, NavFrame, NavigationController};
pub use previews::PreviewController;
pub use scroll_effects::{parallax_offset, RevealState, ScrollEffects};
pub use stylesheet::{SITE_STYLESHEET, STYLESHEET_ID};
pub use surface::{Scheduler, Surface};
pub use throttle::{throttle, Throttle, Throttled};
pub use timers::TimerArena;
pub use timing::page_load_ms;
pub use transitions::{ClickDecision, PageTransitions};
