//! Browser adapter
//!
//! DOM-backed page elements, the exported solver entry points, and the
//! one-shot `mount` that binds a page to an [`InputResolutionController`].
//!
//! The host page initialises the wasm module first and only then calls
//! `mount`, so no handler exists before the module is ready. Events fired
//! before that are never seen.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, HtmlElement, HtmlTextAreaElement};

use crate::adapters::ResolutionSolver;
use crate::config::{AppConfig, ConfigError};
use crate::core::ports::{BoxHeight, InputField, PageError, ResultArea, SolverModule, ValidationIndicator};
use crate::core::services::{ControllerEvent, InputResolutionController, RenderOptions};

/// Controller type bound to DOM elements
pub type PageController = InputResolutionController<ResolutionSolver, DomInput, DomPane, DomPane>;

/// Errors raised while mounting the controller on a page
#[derive(Debug, Error)]
pub enum MountError {
    /// `mount` was already called on this page
    #[error("controller is already mounted")]
    AlreadyMounted,

    /// No global `window`
    #[error("no window available")]
    NoWindow,

    /// No `document` on the window
    #[error("no document available")]
    NoDocument,

    /// Page element lookup or update failed
    #[error(transparent)]
    Page(#[from] PageError),

    /// Configuration could not be parsed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The browser refused an event listener
    #[error("failed to listen for {event}: {message}")]
    Listener {
        /// Event name
        event: String,
        /// Browser message
        message: String,
    },
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        Self::from_str(&err.to_string())
    }
}

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Auto-growing `<textarea>`
#[derive(Debug, Clone)]
pub struct DomInput {
    element: HtmlTextAreaElement,
    name: String,
}

impl DomInput {
    /// Wrap a textarea
    #[must_use]
    pub fn new(element: HtmlTextAreaElement, name: impl Into<String>) -> Self {
        Self {
            element,
            name: name.into(),
        }
    }
}

impl InputField for DomInput {
    fn value(&self) -> Result<String, PageError> {
        Ok(self.element.value())
    }

    fn set_height(&self, height: BoxHeight) -> Result<(), PageError> {
        self.element.style().set_property("height", &height.to_string()).map_err(|e| {
            PageError::Update {
                element: self.name.clone(),
                message: js_message(&e),
            }
        })
    }

    fn scroll_height(&self) -> Result<u32, PageError> {
        Ok(u32::try_from(self.element.scroll_height()).unwrap_or(0))
    }
}

/// Element whose inner HTML is replaced on every render
#[derive(Debug, Clone)]
pub struct DomPane {
    element: HtmlElement,
}

impl DomPane {
    /// Wrap an element
    #[must_use]
    pub const fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl ValidationIndicator for DomPane {
    fn show_status(&self, markup: &str) -> Result<(), PageError> {
        self.element.set_inner_html(markup);
        Ok(())
    }
}

impl ResultArea for DomPane {
    fn show(&self, markup: &str) -> Result<(), PageError> {
        self.element.set_inner_html(markup);
        Ok(())
    }
}

/// Status token for the input: `✅` or `❌ <reason>`
#[wasm_bindgen]
#[must_use]
pub fn try_parse_input(input: &str) -> String {
    ResolutionSolver.validate(input).token()
}

/// Resolution text for the input, with `\n` line breaks
#[wasm_bindgen]
#[must_use]
pub fn calculate_resolution(input: &str) -> String {
    ResolutionSolver.compute_resolution(input)
}

/// Bind the controller to explicit elements
///
/// Runs the initial validation and layout pass, then listens for `input`
/// on the textarea, `click` on the button and `resize` on the window.
/// Only the first call on a page succeeds. A failed mount is final too:
/// the gate stays closed and a page left half-bound is not retried.
#[wasm_bindgen]
pub fn mount(
    input: HtmlTextAreaElement,
    indicator: HtmlElement,
    button: HtmlElement,
    result: HtmlElement,
) -> Result<(), JsValue> {
    mount_elements(input, indicator, &button, result, RenderOptions::html())?;
    Ok(())
}

/// Look the elements up by id and bind the controller
///
/// `config` is an optional TOML document overriding the element ids and
/// render options.
#[wasm_bindgen(js_name = mountByIds)]
pub fn mount_by_ids(config: Option<String>) -> Result<(), JsValue> {
    let config = match config {
        Some(text) => AppConfig::from_toml(&text).map_err(MountError::from)?,
        None => AppConfig::default(),
    };
    let document = document()?;
    let page = &config.page;
    let input = find::<HtmlTextAreaElement>(&document, &page.input_id, "textarea")?;
    let indicator = find::<HtmlElement>(&document, &page.indicator_id, "html element")?;
    let button = find::<HtmlElement>(&document, &page.button_id, "html element")?;
    let result = find::<HtmlElement>(&document, &page.result_id, "html element")?;
    mount_elements(input, indicator, &button, result, config.render.options())?;
    Ok(())
}

fn document() -> Result<Document, MountError> {
    web_sys::window().ok_or(MountError::NoWindow)?.document().ok_or(MountError::NoDocument)
}

fn find<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, MountError> {
    let element = document.get_element_by_id(id).ok_or_else(|| PageError::Missing(id.to_string()))?;
    element.dyn_into::<T>().map_err(|_| {
        MountError::Page(PageError::WrongKind {
            element: id.to_string(),
            expected,
        })
    })
}

/// Build the controller and attach all listeners
///
/// # Errors
///
/// Fails if the page was already mounted, the initial pass fails, or a
/// listener cannot be attached.
/// The page is marked mounted before anything else runs, so any failure
/// leaves it unmountable.
pub fn mount_elements(
    input: HtmlTextAreaElement,
    indicator: HtmlElement,
    button: &EventTarget,
    result: HtmlElement,
    render: RenderOptions,
) -> Result<(), MountError> {
    if MOUNTED.with(|mounted| mounted.replace(true)) {
        return Err(MountError::AlreadyMounted);
    }
    let window = web_sys::window().ok_or(MountError::NoWindow)?;

    let input_target = input.clone();
    let controller: Rc<PageController> = Rc::new(InputResolutionController::new(
        ResolutionSolver,
        DomInput::new(input, "input"),
        DomPane::new(indicator),
        DomPane::new(result),
        render,
    ));
    controller.initialize()?;

    listen(&input_target, "input", Rc::clone(&controller), ControllerEvent::InputChanged)?;
    listen(&window, "resize", Rc::clone(&controller), ControllerEvent::Resized)?;
    listen(button, "click", controller, ControllerEvent::CalculateClicked)?;

    log::info!("controller mounted");
    Ok(())
}

fn listen(
    target: &EventTarget,
    event_name: &str,
    controller: Rc<PageController>,
    event: ControllerEvent,
) -> Result<(), MountError> {
    let closure = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = controller.handle(event) {
            log::warn!("{event:?} handler failed: {err}");
        }
    });
    target
        .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
        .map_err(|e| MountError::Listener {
            event: event_name.to_string(),
            message: js_message(&e),
        })?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Route `log` output to the browser console
///
/// `level` is a filter such as `"debug"`; defaults to `info`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    let filter = level
        .as_deref()
        .and_then(|l| l.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(filter);
    }
}
