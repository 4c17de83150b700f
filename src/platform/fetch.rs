//! `fetch`-based contact form transport

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, HtmlFormElement, Request, RequestInit, Response};

use crate::contact::{ContactForm, FormTransport, SubmitError};

/// Posts forms with the browser's `fetch`
pub struct FetchTransport;

impl FormTransport for FetchTransport {
    async fn send(&self, form: &ContactForm) -> Result<u16, SubmitError> {
        let window =
            web_sys::window().ok_or_else(|| SubmitError::Network("no window".to_string()))?;

        let body = FormData::new().map_err(js_error)?;
        for (name, value) in form.fields() {
            body.append_with_str(name, value).map_err(js_error)?;
        }

        let headers = Headers::new().map_err(js_error)?;
        headers.set("Accept", "application/json").map_err(js_error)?;

        let init = RequestInit::new();
        init.set_method(&form.method);
        init.set_body(&body);
        init.set_headers(&headers);

        let request = Request::new_with_str_and_init(&form.action, &init).map_err(js_error)?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = response.dyn_into().map_err(js_error)?;
        Ok(response.status())
    }
}

/// Snapshot a form element: action, method, and its text entries
pub fn capture(form: &HtmlFormElement) -> ContactForm {
    let mut snapshot = ContactForm::new(form.action(), form.method());

    let Ok(data) = FormData::new_with_form(form) else {
        return snapshot;
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return snapshot;
    };
    for entry in entries.flatten() {
        let pair: js_sys::Array = entry.unchecked_into();
        // File inputs carry Blob values; only text fields are forwarded
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            snapshot.push_field(&name, &value);
        }
    }
    snapshot
}

fn js_error(err: JsValue) -> SubmitError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    SubmitError::Network(message)
}
