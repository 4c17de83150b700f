//! Folio Behaviors entry point
//!
//! Wires every page behavior once the document is ready.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use web_sys::{
        Document, Element, HtmlFormElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
    };

    use folio_behaviors::consts::*;
    use folio_behaviors::contact::{ContactHandler, Notice};
    use folio_behaviors::persistence::LocalStore;
    use folio_behaviors::platform::dom;
    use folio_behaviors::platform::fetch::{self, FetchTransport};
    use folio_behaviors::platform::timer::{self, RotatorHandle};
    use folio_behaviors::{
        NavMenu, RevealTracker, ScrollPresenter, SiteConfig, ThemePresenter, ThemeView, TitleRotator,
    };

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        let Some(window) = dom::window() else { return };
        let Some(document) = window.document() else { return };

        // Module scripts normally run after parsing, but wait if we got here early
        if document.ready_state() == "loading" {
            let once = Rc::new(RefCell::new(Some((window, document.clone()))));
            dom::on(&document, "DOMContentLoaded", move |_event| {
                if let Some((window, document)) = once.borrow_mut().take() {
                    init(&window, &document);
                }
            });
        } else {
            init(&window, &document);
        }
    }

    fn init(window: &Window, document: &Document) {
        log::info!("Folio behaviors starting...");
        let config = SiteConfig::load();

        setup_theme(window, document, &config);
        setup_menu(document, &config);
        // Rotation runs for the life of the page; dropping the handle does not stop it
        let _ = setup_title_rotation(document, &config);
        setup_reveal(document, &config);
        setup_scroll(window, document, &config);
        setup_contact_form(document, &config);

        dom::render_icons();
        log::info!("Folio behaviors running!");
    }

    fn setup_theme(window: &Window, document: &Document, config: &SiteConfig) {
        let Some(root) = document.document_element() else { return };
        let toggle = dom::by_id(document, &config.selectors.theme_toggle);

        let icons = toggle.as_ref().and_then(|t| {
            let sun = dom::find_in(t, &config.selectors.sun_icon)?;
            let moon = dom::find_in(t, &config.selectors.moon_icon)?;
            Some((sun, moon))
        });
        if icons.is_none() {
            log::debug!("Theme icons missing, icon styling skipped");
        }

        let render = move |view: ThemeView| {
            let _ = root.set_attribute(THEME_ATTRIBUTE, view.theme.as_str());
            if let Some((sun, moon)) = &icons {
                dom::set_style(sun, "opacity", &view.sun_opacity.to_string());
                dom::set_style(moon, "opacity", &view.moon_opacity.to_string());
            }
        };

        let (presenter, view) = ThemePresenter::init(LocalStore::open(), dom::prefers_light(window));
        render(view);

        let Some(toggle) = toggle else {
            log::info!("No theme toggle on page");
            return;
        };
        let presenter = Rc::new(RefCell::new(presenter));
        dom::on(&toggle, "click", move |_event| {
            let view = presenter.borrow_mut().toggle();
            render(view);
        });
    }

    fn setup_menu(document: &Document, config: &SiteConfig) {
        let selectors = &config.selectors;
        let (Some(button), Some(links)) = (
            dom::by_id(document, &selectors.menu_toggle),
            dom::find(document, &selectors.nav_links),
        ) else {
            log::info!("No mobile menu on page");
            return;
        };

        let glyphs = match (
            dom::find_in(&button, &selectors.menu_icon),
            dom::find_in(&button, &selectors.close_icon),
        ) {
            (Some(menu), Some(close)) => Some((menu, close)),
            _ => None,
        };
        let glyphs = Rc::new(glyphs);
        let menu = Rc::new(RefCell::new(NavMenu::new()));

        {
            let menu = menu.clone();
            let links = links.clone();
            let glyphs = glyphs.clone();
            dom::on(&button, "click", move |_event| {
                let mut m = menu.borrow_mut();
                m.toggle();
                render_menu(&links, &glyphs, &m);
            });
        }

        for link in dom::find_all_in(&links, "a") {
            let menu = menu.clone();
            let links = links.clone();
            let glyphs = glyphs.clone();
            dom::on(&link, "click", move |_event| {
                let mut m = menu.borrow_mut();
                if m.close() {
                    render_menu(&links, &glyphs, &m);
                }
            });
        }
    }

    fn render_menu(links: &Element, glyphs: &Option<(Element, Element)>, menu: &NavMenu) {
        dom::set_class(links, CLASS_OPEN, menu.is_open());
        if let Some((menu_icon, close_icon)) = glyphs {
            let (menu_display, close_display) = menu.glyphs();
            dom::set_style(menu_icon, "display", menu_display);
            dom::set_style(close_icon, "display", close_display);
        }
    }

    fn setup_title_rotation(document: &Document, config: &SiteConfig) -> Option<RotatorHandle> {
        let Some(target) = dom::by_id(document, &config.selectors.dynamic_title) else {
            log::debug!("No rotating title on page");
            return None;
        };
        let Some(rotator) = TitleRotator::new(config.titles.clone()) else {
            log::warn!("Title list is empty, rotation disabled");
            return None;
        };
        Some(timer::start_rotator(rotator, target))
    }

    /// Index attribute linking observer entries back to tracker keys
    const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

    fn setup_reveal(document: &Document, config: &SiteConfig) {
        let elements = dom::find_all(document, &config.selectors.reveal);
        if elements.is_empty() {
            return;
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::<usize>::new()));
        let callback = {
            let tracker = tracker.clone();
            wasm_bindgen::closure::Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let target = entry.target();
                        let Some(index) = reveal_index(&target) else { continue };
                        if tracker.borrow_mut().on_entry(index, entry.is_intersecting()) {
                            dom::set_class(&target, CLASS_VISIBLE, true);
                            observer.unobserve(&target);
                        }
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(_) => {
                log::warn!("IntersectionObserver unavailable, revealing everything");
                for el in &elements {
                    dom::set_class(el, CLASS_VISIBLE, true);
                }
                return;
            }
        };
        callback.forget();

        for (index, el) in elements.iter().enumerate() {
            let _ = el.set_attribute(REVEAL_INDEX_ATTR, &index.to_string());
            tracker.borrow_mut().watch();
            observer.observe(el);
        }
        log::info!("Observing {} reveal elements", elements.len());
    }

    fn reveal_index(el: &Element) -> Option<usize> {
        el.get_attribute(REVEAL_INDEX_ATTR)?.parse().ok()
    }

    fn setup_scroll(window: &Window, document: &Document, config: &SiteConfig) {
        let header = dom::by_id(document, &config.selectors.header);
        let button = dom::by_id(document, &config.selectors.scroll_top);
        let presenter = Rc::new(RefCell::new(ScrollPresenter::new()));

        {
            let window_clone = window.clone();
            let button = button.clone();
            dom::on(window, "scroll", move |_event| {
                let offset = window_clone.scroll_y().unwrap_or(0.0);
                let view = presenter.borrow_mut().on_scroll(offset);
                if let Some(header) = &header {
                    dom::set_class(header, CLASS_STICKY, view.sticky_header);
                }
                if let Some(button) = &button {
                    dom::set_style(button, "display", view.scroll_top_display());
                }
            });
        }

        if let Some(button) = button {
            let window = window.clone();
            dom::on(&button, "click", move |event| {
                event.prevent_default();
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            });
        }
    }

    fn setup_contact_form(document: &Document, config: &SiteConfig) {
        let Some(form) = dom::by_id(document, &config.selectors.contact_form)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            log::debug!("No contact form on page");
            return;
        };

        let handler = Rc::new(ContactHandler::new(FetchTransport, config));
        let form_clone = form.clone();
        dom::on(&form, "submit", move |event| {
            event.prevent_default();
            let handler = handler.clone();
            let form = form_clone.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mut snapshot = fetch::capture(&form);
                let notice = handler.submit(&mut snapshot).await;
                dom::alert(notice.message());
                if let Notice::Success(_) = notice {
                    form.reset();
                }
            });
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use folio_behaviors::rotator::{RotatorStep, TitleRotator, text_change_at};
    use folio_behaviors::{ScrollView, SiteConfig};

    env_logger::init();
    log::info!("Folio behaviors (native) starting...");
    log::info!("The page behaviors run in the browser - build for wasm32 with `trunk serve`");

    let config = SiteConfig::load();
    let Some(mut rotator) = TitleRotator::new(config.titles.clone()) else {
        log::warn!("No titles configured");
        return;
    };

    println!("\nTitle timeline:");
    let mut shown = 0u64;
    while shown < config.titles.len() as u64 {
        if let (RotatorStep::Show(text), _) = rotator.step() {
            println!("  {:>6} ms  {}", text_change_at(shown), text);
            shown += 1;
        }
    }

    println!("\nScroll thresholds:");
    for offset in [0.0, 50.0, 51.0, 300.0, 301.0] {
        let view = ScrollView::at(offset);
        println!(
            "  y={:<5} sticky={:<5} scroll-top={}",
            offset, view.sticky_header, view.show_scroll_top
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
