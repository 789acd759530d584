//! Browser tests for the localStorage backend
//! Run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use csv_url_shell::{LocalStorage, StorageBackend, UrlListStore, UrlStoreHandle, STORAGE_KEY};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_url_list() {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .remove_item(STORAGE_KEY)
        .unwrap();
}

#[wasm_bindgen_test]
fn test_local_storage_get_set() {
    clear_url_list();
    let mut storage = LocalStorage::new().unwrap();

    assert_eq!(storage.get(STORAGE_KEY).unwrap(), None);

    storage.set(STORAGE_KEY, "[]").unwrap();
    assert_eq!(storage.get(STORAGE_KEY).unwrap(), Some("[]".to_string()));
}

#[wasm_bindgen_test]
fn test_url_list_survives_new_store() {
    clear_url_list();

    let mut store = UrlListStore::new(LocalStorage::new().unwrap());
    store.add_url("http://x/1.csv").unwrap();
    store.add_url("http://x/2.csv").unwrap();
    store.add_url("http://x/1.csv").unwrap();

    let reopened = UrlListStore::new(LocalStorage::new().unwrap());
    assert_eq!(
        reopened.urls().unwrap(),
        vec!["http://x/1.csv".to_string(), "http://x/2.csv".to_string()]
    );
}

#[wasm_bindgen_test]
fn test_handle_without_persistence() {
    clear_url_list();

    let handle = UrlStoreHandle::new(false).unwrap();
    handle.add_url("http://x/1.csv").unwrap();

    let urls: Vec<String> = serde_wasm_bindgen::from_value(handle.urls().unwrap()).unwrap();
    assert!(urls.is_empty());
    assert_eq!(LocalStorage::new().unwrap().get(STORAGE_KEY).unwrap(), None);
}

#[wasm_bindgen_test]
fn test_handle_with_persistence() {
    clear_url_list();

    let handle = UrlStoreHandle::new(true).unwrap();
    handle.add_url("https://a.example/data.csv").unwrap();

    let urls: Vec<String> = serde_wasm_bindgen::from_value(handle.urls().unwrap()).unwrap();
    assert_eq!(urls, vec!["https://a.example/data.csv".to_string()]);
}

#[wasm_bindgen_test]
fn test_handle_corrupt_data_throws_js_error() {
    clear_url_list();
    LocalStorage::new().unwrap().set(STORAGE_KEY, "{not json").unwrap();

    let handle = UrlStoreHandle::new(true).unwrap();
    let err = handle.urls().unwrap_err();

    let js_err = err.dyn_into::<js_sys::Error>().unwrap();
    assert!(String::from(js_err.message()).starts_with("Serialization error:"));

    // addUrl fails the same way and leaves the stored value alone
    assert!(handle.add_url("http://x/1.csv").unwrap_err().is_instance_of::<js_sys::Error>());
    assert_eq!(
        LocalStorage::new().unwrap().get(STORAGE_KEY).unwrap(),
        Some("{not json".to_string())
    );

    clear_url_list();
}
