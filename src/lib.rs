/// CSV URL Shell - bootstraps the data viewer and remembers loaded CSV URLs
/// Built with Rust + WASM + Yew

mod backend;
mod config;
mod error;
mod shell;
mod store;
pub mod ui;

pub use backend::{LocalStorage, MemoryStorage, NullStorage, StorageBackend};
pub use config::ShellConfig;
pub use error::StorageError;
pub use shell::Shell;
pub use store::{UrlListStore, STORAGE_KEY};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Mount the viewer with the remembered URLs and wire its "remember URL" port
#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    let config = ShellConfig::from_env();
    let shell = Shell::from_config(&config)?;
    let urls = shell.flags()?;

    log::info!("Starting with {} remembered URL(s)", urls.len());

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(&config.mount_id))
        .ok_or_else(|| JsValue::from_str(&format!("Mount node #{} not found", config.mount_id)))?;

    let props = ui::app::AppProps {
        urls,
        on_remember: shell.remember_url_callback(),
    };
    yew::Renderer::<ui::app::App>::with_root_and_props(root, props).render();

    Ok(())
}

/// URL store for host pages that drive their own view from JavaScript
#[wasm_bindgen]
pub struct UrlStoreHandle {
    shell: Shell,
}

#[wasm_bindgen]
impl UrlStoreHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(enable_local_storage: bool) -> Result<UrlStoreHandle, JsValue> {
        let config = ShellConfig {
            enable_local_storage,
            ..ShellConfig::default()
        };
        Ok(UrlStoreHandle {
            shell: Shell::from_config(&config)?,
        })
    }

    pub fn urls(&self) -> Result<JsValue, JsValue> {
        let urls = self.shell.flags()?;
        serde_wasm_bindgen::to_value(&urls)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize: {:?}", e)))
    }

    #[wasm_bindgen(js_name = addUrl)]
    pub fn add_url(&self, url: &str) -> Result<(), JsValue> {
        self.shell.remember_url(url)?;
        Ok(())
    }
}
