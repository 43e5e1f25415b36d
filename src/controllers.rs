use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use karmakazi_core::{
    AnchorOutcome, ClickDecision, NavigationController, PageTransitions, PreviewController,
    ScrollEffects,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent,
};

use crate::dom_surface::{js_err, DomSurface, GlooScheduler};
use crate::site_config::site_config;

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observer plus the closure it calls back into; disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: RevealCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Default)]
struct Bindings {
    navigation: Vec<EventListener>,
    scroll_effects: Vec<EventListener>,
    reveal: Option<RevealObserver>,
    previews: Vec<EventListener>,
    transitions: Vec<EventListener>,
}

thread_local! {
    static BINDINGS: RefCell<Bindings> = RefCell::new(Bindings::default());
}

fn surface() -> Result<Rc<DomSurface>, String> {
    DomSurface::new().map(Rc::new)
}

fn on_click_cancelable<F>(target: &Element, callback: F) -> EventListener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        "click",
        EventListenerOptions::enable_prevent_default(),
        callback,
    )
}

pub(crate) fn init_navigation() -> Result<(), String> {
    let config = site_config();
    let surface = surface()?;
    let controller = Rc::new(
        NavigationController::mount(surface.clone(), Rc::new(GlooScheduler), &config)
            .map_err(|err| err.to_string())?,
    );

    let mut listeners = Vec::new();
    {
        let controller = controller.clone();
        let surface = surface.clone();
        let window = surface.window().clone();
        listeners.push(EventListener::new(&window, "scroll", move |_| {
            controller.on_scroll(surface.scroll_offset());
        }));
    }
    if let Some(toggle) = controller.mobile_toggle() {
        let controller = controller.clone();
        listeners.push(EventListener::new(toggle, "click", move |_| {
            controller.on_toggle_click();
        }));
    }
    for (index, dropdown) in controller.dropdowns().iter().enumerate() {
        let enter = controller.clone();
        listeners.push(EventListener::new(dropdown, "mouseenter", move |_| {
            enter.on_dropdown_enter(index);
        }));
        let leave = controller.clone();
        listeners.push(EventListener::new(dropdown, "mouseleave", move |_| {
            leave.on_dropdown_leave(index);
        }));
    }
    for (index, anchor) in controller.anchors().iter().enumerate() {
        let controller = controller.clone();
        listeners.push(on_click_cancelable(anchor, move |event| {
            event.prevent_default();
            if let Some(AnchorOutcome::Unresolved { href }) = controller.on_anchor_click(index) {
                gloo::console::warn!("anchor target not found", href);
            }
        }));
    }

    BINDINGS.with(|bindings| {
        bindings.borrow_mut().navigation = listeners;
    });
    Ok(())
}

pub(crate) fn init_scroll_effects() -> Result<(), String> {
    let config = site_config();
    let surface = surface()?;
    let effects = Rc::new(ScrollEffects::mount(surface.clone(), &config));

    let scroll = {
        let effects = effects.clone();
        let window = surface.window().clone();
        EventListener::new(&window, "scroll", move |_| {
            effects.on_scroll(surface.scroll_offset());
        })
    };

    let reveal = observe_cards(effects)?;

    BINDINGS.with(|bindings| {
        let mut bindings = bindings.borrow_mut();
        bindings.scroll_effects = vec![scroll];
        bindings.reveal = Some(reveal);
    });
    Ok(())
}

fn observe_cards(effects: Rc<ScrollEffects<DomSurface>>) -> Result<RevealObserver, String> {
    let cards: Vec<Element> = effects.cards().to_vec();
    let callback_effects = effects.clone();
    let callback: RevealCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = cards.iter().position(|card| *card == target) else {
                continue;
            };
            if callback_effects.on_intersection(index, entry.is_intersecting()) {
                observer.unobserve(&target);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(effects.threshold()));
    options.set_root_margin(effects.root_margin());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(js_err)?;
    for card in effects.cards() {
        observer.observe(card);
    }
    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

pub(crate) fn init_animation_previews() -> Result<(), String> {
    let config = site_config();
    let surface = surface()?;
    let previews =
        Rc::new(PreviewController::mount(surface, &config).map_err(|err| err.to_string())?);

    let mut listeners = Vec::new();
    for index in 0..previews.len() {
        let Some(card) = previews.card(index) else {
            continue;
        };
        let enter = previews.clone();
        listeners.push(EventListener::new(card, "mouseenter", move |_| {
            enter.on_enter(index);
        }));
        let leave = previews.clone();
        listeners.push(EventListener::new(card, "mouseleave", move |_| {
            leave.on_leave(index);
        }));
        if previews.is_interactive(index) {
            let follow = previews.clone();
            let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
            listeners.push(EventListener::new(card, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let needs_frame = follow.on_pointer_move(
                    index,
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );
                if !needs_frame {
                    return;
                }
                let flush = follow.clone();
                let slot = frame.clone();
                let handle = request_animation_frame(move |_| {
                    slot.borrow_mut().take();
                    flush.flush_pointer(index);
                });
                *frame.borrow_mut() = Some(handle);
            }));
        }
    }

    BINDINGS.with(|bindings| {
        bindings.borrow_mut().previews = listeners;
    });
    Ok(())
}

pub(crate) fn init_page_transitions() -> Result<(), String> {
    let config = site_config();
    let surface = surface()?;
    let transitions = Rc::new(
        PageTransitions::mount(surface.clone(), Rc::new(GlooScheduler), &config)
            .map_err(|err| err.to_string())?,
    );

    let mut listeners = Vec::new();
    for (index, link) in transitions.links().iter().enumerate() {
        let transitions = transitions.clone();
        listeners.push(on_click_cancelable(link, move |event| {
            if let Some(ClickDecision::Intercept { .. }) = transitions.on_link_click(index) {
                event.prevent_default();
            }
        }));
    }
    {
        let transitions = transitions.clone();
        listeners.push(EventListener::new(surface.window(), "pageshow", move |_| {
            transitions.on_page_show();
        }));
    }

    BINDINGS.with(|bindings| {
        bindings.borrow_mut().transitions = listeners;
    });
    Ok(())
}
