//! Browser console sink

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use wasm_bindgen::JsValue;

use crate::layer::to_record;

pub(crate) struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let record = to_record(event);
        let line = JsValue::from_str(&record.line());
        if record.level == Level::ERROR {
            web_sys::console::error_1(&line);
        } else if record.level == Level::WARN {
            web_sys::console::warn_1(&line);
        } else if record.level == Level::INFO {
            web_sys::console::info_1(&line);
        } else {
            web_sys::console::debug_1(&line);
        }
    }
}
