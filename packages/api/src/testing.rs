//! Recording [`Backend`] for flow tests.

use std::cell::RefCell;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::Backend;
use crate::error::ApiError;

/// Records every POST and answers with a canned response.
pub(crate) struct RecordingBackend {
    calls: RefCell<Vec<(String, Value)>>,
    response: Result<Value, (u16, Value)>,
}

impl RecordingBackend {
    pub(crate) fn ok(body: Value) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            response: Ok(body),
        }
    }

    pub(crate) fn failing(status: u16, payload: Value) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            response: Err((status, payload)),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }
}

impl Backend for RecordingBackend {
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.calls
            .borrow_mut()
            .push((path.to_string(), serde_json::to_value(body)?));
        match &self.response {
            Ok(value) => Ok(serde_json::from_value(value.clone())?),
            Err((401, payload)) => Err(ApiError::Unauthorized {
                payload: payload.clone(),
            }),
            Err((status, payload)) => Err(ApiError::Server {
                status: *status,
                payload: payload.clone(),
            }),
        }
    }
}
