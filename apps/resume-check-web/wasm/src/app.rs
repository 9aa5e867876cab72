//! Event wiring between the page and the [`AppController`]
//!
//! Every handler follows the same shape: mutate the controller, drop the
//! borrow, repaint from a fresh frame.

use crate::api::submit_resume;
use crate::dom::Dom;
use crate::render::{paint_report, HeaderListeners, ToggleHandler};
use crate::theme::{apply_theme, prefers_light, LocalStorageThemeStore};
use resume_check_core::{AppController, ClientConfig, Frame, Tab, Theme, ThemeController, ViewState};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, Event, File};

pub struct App {
    dom: Dom,
    controller: RefCell<AppController<File>>,
    theme: RefCell<ThemeController<LocalStorageThemeStore>>,
    /// Listeners of the currently rendered report; replaced on each render
    report_listeners: RefCell<HeaderListeners>,
}

impl App {
    /// Bind to the page, apply the starting theme and wire every handler.
    pub fn mount(config: ClientConfig) -> Result<Rc<Self>, JsValue> {
        let dom = Dom::bind()?;
        let theme = ThemeController::init(
            LocalStorageThemeStore::new(),
            &config.theme_storage_key,
            prefers_light(),
        );
        apply_theme(&dom.root, theme.applied())?;

        let app = Rc::new(Self {
            dom,
            controller: RefCell::new(AppController::new(config)),
            theme: RefCell::new(theme),
            report_listeners: RefCell::new(Vec::new()),
        });

        app.wire()?;
        app.paint();
        tracing::info!("resume checker mounted");
        Ok(app)
    }

    pub fn frame(&self) -> Frame {
        self.controller.borrow().frame()
    }

    pub fn theme(&self) -> Theme {
        self.theme.borrow().applied()
    }

    fn paint(&self) {
        let frame = self.frame();
        if let Err(e) = self.dom.paint_frame(&frame) {
            tracing::error!("failed to paint frame: {:?}", e);
        }
    }

    fn wire(self: &Rc<Self>) -> Result<(), JsValue> {
        let dom = &self.dom;

        self.listen(&dom.theme_toggle, "click", |app, _| {
            let next = app.theme.borrow_mut().toggle();
            if let Err(e) = apply_theme(&app.dom.root, next) {
                tracing::warn!("could not apply theme: {:?}", e);
            }
        })?;

        self.listen(&dom.drop_zone, "click", |app, _| app.dom.file_input.click())?;

        self.listen(&dom.drop_zone, "dragover", |app, event| {
            event.prevent_default();
            app.controller.borrow_mut().set_drag_over(true);
            app.paint();
        })?;

        self.listen(&dom.drop_zone, "dragleave", |app, _| {
            app.controller.borrow_mut().set_drag_over(false);
            app.paint();
        })?;

        self.listen(&dom.drop_zone, "drop", |app, event| {
            event.prevent_default();
            app.controller.borrow_mut().set_drag_over(false);
            let file = event
                .dyn_ref::<DragEvent>()
                .and_then(|e| e.data_transfer())
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            match file {
                Some(file) => app.handle_file(file),
                None => app.paint(),
            }
        })?;

        self.listen(&dom.file_input, "change", |app, _| {
            if let Some(file) = app.dom.file_input.files().and_then(|files| files.get(0)) {
                app.handle_file(file);
            }
        })?;

        self.listen(&dom.remove_file, "click", |app, event| {
            event.stop_propagation();
            app.controller.borrow_mut().remove();
            app.paint();
        })?;

        self.listen(&dom.btn_analyze, "click", |app, _| app.submit())?;

        self.listen(&dom.btn_back, "click", |app, _| app.go_back())?;
        if let Some(btn_new) = &dom.btn_new {
            self.listen(btn_new, "click", |app, _| app.go_back())?;
        }

        for button in dom.tab_buttons()? {
            let Some(tab) = button
                .get_attribute("data-tab")
                .and_then(|name| name.parse::<Tab>().ok())
            else {
                tracing::warn!("tab button without a known data-tab");
                continue;
            };
            self.listen(&button, "click", move |app, _| {
                app.controller.borrow_mut().select_tab(tab);
                app.paint();
            })?;
        }

        Ok(())
    }

    /// Attach a handler that receives the app. Handlers hold a weak
    /// reference and go quiet once the app is dropped.
    fn listen<H>(self: &Rc<Self>, target: &Element, event: &str, handler: H) -> Result<(), JsValue>
    where
        H: Fn(&Rc<Self>, &Event) + 'static,
    {
        let weak: Weak<Self> = Rc::downgrade(self);
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(app) = weak.upgrade() {
                handler(&app, &event);
            }
        });
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn handle_file(&self, file: File) {
        let name = file.name();
        let size = file.size().max(0.0) as u64;
        // Rejections are already recorded on the controller and shown by the frame.
        let _ = self.controller.borrow_mut().select(&name, size, file);
        self.paint();
    }

    fn go_back(&self) {
        self.controller.borrow_mut().go_back();
        self.paint();
    }

    fn submit(self: &Rc<Self>) {
        let Some(request) = self.controller.borrow_mut().begin_submit() else {
            return;
        };
        self.paint();

        let app = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = submit_resume(request).await;
            app.controller.borrow_mut().finish_submit(outcome);

            if app.controller.borrow().view() == ViewState::Results {
                app.paint_report();
            }
            app.paint();
        });
    }

    fn paint_report(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let on_toggle: ToggleHandler = Rc::new(move |index| {
            if let Some(app) = weak.upgrade() {
                app.controller.borrow_mut().toggle_category(index);
                app.paint();
            }
        });

        let controller = self.controller.borrow();
        let Some(report) = controller.report() else {
            return;
        };
        match paint_report(&self.dom, &report.model, on_toggle) {
            // Old headers are detached by now; drop their listeners.
            Ok(listeners) => *self.report_listeners.borrow_mut() = listeners,
            Err(e) => tracing::error!("failed to render report: {:?}", e),
        }
    }
}
