use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("No global window")]
    NoWindow,
    #[error("No document")]
    NoDocument,
    #[error("Element #{0} not found")]
    MissingElement(&'static str),
    #[error("Element #{0} is not a {1}")]
    WrongElement(&'static str, &'static str),
    #[error("2D context unavailable")]
    NoContext,
    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Js(format!("{:?}", value))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
