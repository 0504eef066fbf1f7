use gloo_utils::window;
use wasm_bindgen::JsValue;
use web_sys::Storage;
use workout_tracker_lib::{store::WorkoutStore, WorkoutError};

/// The browser's `localStorage`.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        Self {
            storage: window().local_storage().ok().flatten(),
        }
    }

    fn storage(&self) -> Result<&Storage, WorkoutError> {
        self.storage
            .as_ref()
            .ok_or_else(|| WorkoutError::Storage("local storage is not available".into()))
    }
}

impl WorkoutStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, WorkoutError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WorkoutError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), WorkoutError> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> WorkoutError {
    WorkoutError::Storage(format!("{err:?}"))
}
