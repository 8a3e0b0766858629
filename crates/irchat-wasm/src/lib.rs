use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod chat_ui;
mod dom;
mod fetch;
mod markdown;
mod storage;
mod utils;

pub use fetch::FetchBackend;
pub use storage::LocalStore;

/// Initialize the WASM application
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());

    log::info!("irchat WASM initialized");
}

/// Initialize the chat page
#[wasm_bindgen]
pub async fn init_chat() -> Result<(), JsValue> {
    let backend_url = utils::backend_url();
    log::info!("Initializing chat against {}", backend_url);
    chat_ui::ChatApp::new(backend_url)?.start()
}

/// Get the window object
fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))
}

/// Get the document object
fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object"))
}
