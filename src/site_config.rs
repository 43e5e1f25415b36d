use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use karmakazi_core::SiteConfig;
use wasm_bindgen::JsValue;

use crate::dom_surface::js_err;

pub(crate) const CONFIG_GLOBAL: &str = "__KARMAKAZI_CONFIG";

thread_local! {
    static SITE_CONFIG: RefCell<Option<Rc<SiteConfig>>> = RefCell::new(None);
}

pub(crate) fn site_config() -> Rc<SiteConfig> {
    if let Some(config) = SITE_CONFIG.with(|slot| slot.borrow().clone()) {
        return config;
    }
    let config = Rc::new(load_site_config());
    SITE_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config.clone());
    });
    config
}

fn load_site_config() -> SiteConfig {
    let Some(window) = web_sys::window() else {
        return SiteConfig::default();
    };
    let Ok(value) = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) else {
        return SiteConfig::default();
    };
    if value.is_null() || value.is_undefined() {
        return SiteConfig::default();
    }
    match parse_override(&value) {
        Ok(config) => {
            gloo::console::log!("site config override applied");
            config
        }
        Err(err) => {
            gloo::console::warn!("site config override ignored", err);
            SiteConfig::default()
        }
    }
}

fn parse_override(value: &JsValue) -> Result<SiteConfig, String> {
    let raw: String = js_sys::JSON::stringify(value).map_err(js_err)?.into();
    serde_json::from_str(&raw).map_err(|err| err.to_string())
}
