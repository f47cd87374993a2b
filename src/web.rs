//! Browser binding: attaches a [`CounterWidget`] to page markup providing
//! `#increment`, `#decrement` and `#counter`.

use std::{cell::RefCell, rc::Rc};

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::{JsCast, closure::Closure, prelude::*};
use web_sys::{Document, Element, Event};

use crate::{
    counter::{CounterWidget, DisplaySurface, Message},
    error::BindError,
};

pub const INCREMENT_ID: &str = "increment";
pub const DECREMENT_ID: &str = "decrement";
pub const DISPLAY_ID: &str = "counter";

const CLICK: &str = "click";

type SharedCounter = Rc<RefCell<CounterWidget<ElementSurface>>>;
type ClickHandler = Closure<dyn FnMut(Event)>;

/// Writes the counter into an element's text content.
pub struct ElementSurface {
    element: Element,
}

impl ElementSurface {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl DisplaySurface for ElementSurface {
    fn show(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

struct Listener {
    target: Element,
    handler: ClickHandler,
}

/// A counter wired to the page. Dropping this removes the click
/// listeners; call [`Mounted::leak`] to keep them for the page's lifetime.
pub struct Mounted {
    counter: SharedCounter,
    listeners: Vec<Listener>,
}

impl Mounted {
    pub fn value(&self) -> u64 {
        self.counter.borrow().value()
    }

    pub fn leak(mut self) {
        for listener in std::mem::take(&mut self.listeners) {
            listener.handler.forget();
        }
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(e) = listener
                .target
                .remove_event_listener_with_callback(CLICK, listener.handler.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove click listener from '{}': {:?}", listener.target.id(), e);
            }
        }
    }
}

pub fn mount(document: &Document) -> Result<Mounted, BindError> {
    let increment = find(document, INCREMENT_ID)?;
    let decrement = find(document, DECREMENT_ID)?;
    let display = find(document, DISPLAY_ID)?;

    let counter = Rc::new(RefCell::new(CounterWidget::new(ElementSurface::new(
        display,
    ))));

    let listeners = vec![
        listen(increment, INCREMENT_ID, Rc::clone(&counter), Message::Increment)?,
        listen(decrement, DECREMENT_ID, Rc::clone(&counter), Message::Decrement)?,
    ];
    log::info!("Counter mounted");

    Ok(Mounted { counter, listeners })
}

fn find(document: &Document, id: &'static str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or(BindError::MissingElement(id))
}

fn listen(
    target: Element,
    id: &'static str,
    counter: SharedCounter,
    message: Message,
) -> Result<Listener, BindError> {
    // Handlers run to completion on the UI thread, so the borrow never overlaps.
    let handler = ClickHandler::new(move |_event: Event| counter.borrow_mut().update(message));

    target
        .add_event_listener_with_callback(CLICK, handler.as_ref().unchecked_ref())
        .map_err(|e| BindError::Listener {
            id,
            reason: format!("{:?}", e),
        })?;

    Ok(Listener { target, handler })
}

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from(format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

#[wasm_bindgen(start)]
pub fn start() {
    // Only fails if a logger is already installed, which is fine to keep.
    if log::set_logger(&CONSOLE_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }

    let result = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BindError::NoDocument)
        .and_then(|document| mount(&document));

    match result {
        Ok(mounted) => mounted.leak(),
        Err(e) => log::error!("{}", e),
    }
}
