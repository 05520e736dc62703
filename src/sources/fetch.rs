use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::error::FetchError;

/// A response body together with its HTTP status.
pub struct Body {
	pub status: u16,
	pub ok: bool,
	pub text: String,
}

pub async fn get(url: &str) -> Result<Body, FetchError> {
	let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".into()))?;
	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(js_error)?
		.dyn_into()
		.map_err(js_error)?;
	let text = JsFuture::from(response.text().map_err(js_error)?)
		.await
		.map_err(js_error)?
		.as_string()
		.ok_or_else(|| FetchError::Network("response body is not text".into()))?;

	Ok(Body {
		status: response.status(),
		ok: response.ok(),
		text,
	})
}

pub fn encode(query: &str) -> String {
	js_sys::encode_uri_component(query).into()
}

fn js_error(value: JsValue) -> FetchError {
	let message = value
		.dyn_ref::<js_sys::Error>()
		.map(|e| String::from(e.message()))
		.or_else(|| value.as_string())
		.unwrap_or_else(|| format!("{value:?}"));
	FetchError::Network(message)
}
