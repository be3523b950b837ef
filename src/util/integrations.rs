//! Optional third-party animation libraries.
//!
//! ARCHITECTURE
//! ============
//! Each library the page may load from a CDN (`Typed`, `AOS`, `Swiper`,
//! `gsap`) is an [`AnimationLibrary`]. Detection happens once at startup; a
//! missing global becomes an [`Absent`] null object so callers never branch
//! on presence themselves.
//!
//! Option objects are typed structs serialized with `serde_json` and handed
//! to JavaScript through `JSON.parse`.

#[cfg(test)]
#[path = "integrations_test.rs"]
mod integrations_test;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::consts::NARROW_VIEWPORT_PX;
use crate::error::DomError;

/// Environment signals that shape animation options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionEnv {
    pub viewport_width: Option<f64>,
    pub reduced_motion: bool,
}

impl MotionEnv {
    /// Read the live viewport width and reduced-motion preference.
    pub fn detect() -> Self {
        Self {
            viewport_width: crate::util::document::viewport_width(),
            reduced_motion: crate::util::preference_store::prefers_reduced_motion(),
        }
    }

    /// Scroll-reveal is skipped on narrow screens and for reduced motion.
    pub fn reveal_disabled(&self) -> bool {
        self.reduced_motion || self.viewport_width.is_some_and(|w| w < NARROW_VIEWPORT_PX)
    }
}

// =============================================================================
// OPTION OBJECTS
// =============================================================================

/// Options for the typed-text hero tagline.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedOptions {
    pub strings: Vec<&'static str>,
    pub type_speed: u32,
    pub back_speed: u32,
    pub back_delay: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub show_cursor: bool,
}

impl Default for TypedOptions {
    fn default() -> Self {
        Self {
            strings: vec!["Full-Stack MERN Developer", "Web Developer", "UI/UX Enthusiast", "Problem Solver"],
            type_speed: 50,
            back_speed: 30,
            back_delay: 2000,
            looped: true,
            show_cursor: false,
        }
    }
}

/// Options for `AOS.init`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AosOptions {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
    pub offset: u32,
    pub disable: bool,
}

impl AosOptions {
    pub fn for_env(env: &MotionEnv) -> Self {
        Self { duration: 800, easing: "ease-in-out", once: true, offset: 100, disable: env.reveal_disabled() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiperAutoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SwiperPagination {
    pub el: &'static str,
    pub clickable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiperNavigation {
    pub next_el: &'static str,
    pub prev_el: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiperBreakpoint {
    pub slides_per_view: u32,
}

/// Options for the projects carousel.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiperOptions {
    pub slides_per_view: u32,
    pub space_between: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub autoplay: SwiperAutoplay,
    pub pagination: SwiperPagination,
    pub navigation: SwiperNavigation,
    /// Keyed by minimum viewport width in pixels.
    pub breakpoints: BTreeMap<u32, SwiperBreakpoint>,
    pub effect: &'static str,
}

impl Default for SwiperOptions {
    fn default() -> Self {
        Self {
            slides_per_view: 1,
            space_between: 30,
            looped: true,
            autoplay: SwiperAutoplay { delay: 5000, disable_on_interaction: false },
            pagination: SwiperPagination { el: ".swiper-pagination", clickable: true },
            navigation: SwiperNavigation { next_el: ".swiper-button-next", prev_el: ".swiper-button-prev" },
            breakpoints: BTreeMap::from([
                (768, SwiperBreakpoint { slides_per_view: 2 }),
                (1024, SwiperBreakpoint { slides_per_view: 3 }),
            ]),
            // Same effect whether or not reduced motion is requested.
            effect: "slide",
        }
    }
}

/// Options for the hero entrance tween (`gsap.from`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GsapFromOptions {
    pub opacity: f64,
    pub y: f64,
    pub duration: f64,
    pub stagger: f64,
    pub ease: &'static str,
}

impl Default for GsapFromOptions {
    fn default() -> Self {
        Self { opacity: 0.0, y: 30.0, duration: 0.8, stagger: 0.2, ease: "power3.out" }
    }
}

// =============================================================================
// LIBRARIES
// =============================================================================

/// A third-party animation hook detected at startup.
pub trait AnimationLibrary {
    /// Global symbol the library installs on `window`.
    fn name(&self) -> &'static str;

    fn initialize(&self, env: &MotionEnv) -> Result<(), DomError>;
}

/// Null object for a library whose global is not on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Absent(pub &'static str);

impl AnimationLibrary for Absent {
    fn name(&self) -> &'static str {
        self.0
    }

    fn initialize(&self, _env: &MotionEnv) -> Result<(), DomError> {
        Ok(())
    }
}

/// Globals probed at startup, in initialization order.
pub const LIBRARY_GLOBALS: [&str; 4] = ["Typed", "AOS", "Swiper", "gsap"];

/// Resolve every known library to a live binding or [`Absent`].
pub fn detect_libraries() -> Vec<Box<dyn AnimationLibrary>> {
    LIBRARY_GLOBALS.iter().map(|&name| detect(name)).collect()
}

#[cfg(not(feature = "csr"))]
fn detect(name: &'static str) -> Box<dyn AnimationLibrary> {
    Box::new(Absent(name))
}

#[cfg(feature = "csr")]
fn detect(name: &'static str) -> Box<dyn AnimationLibrary> {
    use wasm_bindgen::JsCast;

    let Some(global) = browser::global(name) else {
        log::debug!("{name} not loaded; skipping");
        return Box::new(Absent(name));
    };
    match name {
        "Typed" => match global.dyn_into::<js_sys::Function>() {
            Ok(ctor) => Box::new(browser::TypedText(ctor)),
            Err(_) => Box::new(Absent(name)),
        },
        "Swiper" => match global.dyn_into::<js_sys::Function>() {
            Ok(ctor) => Box::new(browser::Swiper(ctor)),
            Err(_) => Box::new(Absent(name)),
        },
        "AOS" => Box::new(browser::Aos(global)),
        "gsap" => Box::new(browser::Gsap(global)),
        _ => Box::new(Absent(name)),
    }
}

/// Detect and start every available library. Failures are logged, never fatal.
pub fn initialize_all() {
    let env = MotionEnv::detect();
    for library in detect_libraries() {
        if let Err(e) = library.initialize(&env) {
            leptos::logging::warn!("{} init failed: {e}", library.name());
        }
    }
}

/// Serialize an options struct into a plain JS object.
#[cfg(feature = "csr")]
fn to_js(options: &impl Serialize) -> Result<wasm_bindgen::JsValue, DomError> {
    let text = serde_json::to_string(options).map_err(|e| DomError::Config(e.to_string()))?;
    Ok(js_sys::JSON::parse(&text)?)
}

#[cfg(feature = "csr")]
mod browser {
    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    use super::{AnimationLibrary, AosOptions, GsapFromOptions, MotionEnv, SwiperOptions, TypedOptions, to_js};
    use crate::error::{DomError, document};

    pub(super) fn global(name: &str) -> Option<JsValue> {
        let window = crate::error::window().ok()?;
        let value = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
        (!value.is_undefined() && !value.is_null()).then_some(value)
    }

    fn method(target: &JsValue, name: &str) -> Result<Function, DomError> {
        Ok(Reflect::get(target, &JsValue::from_str(name))?.dyn_into::<Function>()?)
    }

    pub(super) struct TypedText(pub Function);

    impl AnimationLibrary for TypedText {
        fn name(&self) -> &'static str {
            "Typed"
        }

        fn initialize(&self, _env: &MotionEnv) -> Result<(), DomError> {
            if document()?.get_element_by_id("typed-text").is_none() {
                return Ok(());
            }
            let options = to_js(&TypedOptions::default())?;
            Reflect::construct(&self.0, &Array::of2(&JsValue::from_str("#typed-text"), &options))?;
            Ok(())
        }
    }

    pub(super) struct Aos(pub JsValue);

    impl AnimationLibrary for Aos {
        fn name(&self) -> &'static str {
            "AOS"
        }

        fn initialize(&self, env: &MotionEnv) -> Result<(), DomError> {
            let options = to_js(&AosOptions::for_env(env))?;
            method(&self.0, "init")?.call1(&self.0, &options)?;
            Ok(())
        }
    }

    pub(super) struct Swiper(pub Function);

    impl AnimationLibrary for Swiper {
        fn name(&self) -> &'static str {
            "Swiper"
        }

        fn initialize(&self, _env: &MotionEnv) -> Result<(), DomError> {
            if document()?.query_selector(".projects-swiper")?.is_none() {
                return Ok(());
            }
            let options = to_js(&SwiperOptions::default())?;
            Reflect::construct(&self.0, &Array::of2(&JsValue::from_str(".projects-swiper"), &options))?;
            Ok(())
        }
    }

    pub(super) struct Gsap(pub JsValue);

    impl AnimationLibrary for Gsap {
        fn name(&self) -> &'static str {
            "gsap"
        }

        fn initialize(&self, _env: &MotionEnv) -> Result<(), DomError> {
            let hero = document()?.query_selector_all(".hero-text > *")?;
            if hero.length() == 0 {
                return Ok(());
            }
            let options = to_js(&GsapFromOptions::default())?;
            method(&self.0, "from")?.call2(&self.0, &JsValue::from(hero), &options)?;
            Ok(())
        }
    }
}
