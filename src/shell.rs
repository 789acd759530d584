/// Startup wiring between the URL store and the application view
use crate::backend::StorageBackend;
use crate::config::{select_backend, ShellConfig};
use crate::error::Result;
use crate::store::UrlListStore;
use std::cell::RefCell;
use std::rc::Rc;
use yew::Callback;

pub type DynStore = UrlListStore<Box<dyn StorageBackend>>;

/// One per page session; clones share the same store
#[derive(Clone)]
pub struct Shell {
    store: Rc<RefCell<DynStore>>,
}

impl Shell {
    pub fn new(store: DynStore) -> Self {
        Shell {
            store: Rc::new(RefCell::new(store)),
        }
    }

    pub fn from_config(config: &ShellConfig) -> Result<Self> {
        let backend = select_backend(config)?;
        Ok(Shell::new(UrlListStore::new(backend)))
    }

    /// Initialization input for the application
    pub fn flags(&self) -> Result<Vec<String>> {
        self.store.borrow().urls()
    }

    pub fn remember_url(&self, url: &str) -> Result<()> {
        self.store.borrow_mut().add_url(url)
    }

    /// Subscription for "remember this URL" events
    ///
    /// The emitter cannot receive an error, so a failed append is logged and
    /// the event dropped.
    pub fn remember_url_callback(&self) -> Callback<String> {
        let shell = self.clone();
        Callback::from(move |url: String| {
            if let Err(e) = shell.remember_url(&url) {
                log::error!("Failed to remember {}: {}", url, e);
            }
        })
    }
}
