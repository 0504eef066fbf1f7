use std::{cell::RefCell, rc::Rc};

use futures::channel::oneshot;
use gloo_utils::window;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::GeolocationPosition;
use workout_tracker_lib::workout::Coords;

type Sender = Rc<RefCell<Option<oneshot::Sender<Result<Coords, JsValue>>>>>;

/// Asks the browser for the current position once.
pub async fn current_position() -> Result<Coords, JsValue> {
    let geolocation = window().navigator().geolocation()?;

    let (tx, rx) = oneshot::channel();
    let tx: Sender = Rc::new(RefCell::new(Some(tx)));

    let success_tx = tx.clone();
    let on_success = Closure::once_into_js(move |position: GeolocationPosition| {
        let coords = position.coords();
        send(&success_tx, Ok(Coords(coords.latitude(), coords.longitude())));
    });

    let on_error = Closure::once_into_js(move |err: JsValue| {
        send(&tx, Err(err));
    });

    geolocation.get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref()))?;

    rx.await
        .unwrap_or_else(|_| Err(JsValue::from_str("geolocation callback was dropped")))
}

fn send(tx: &Sender, result: Result<Coords, JsValue>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}
