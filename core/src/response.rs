//! Response — the result envelope returned from command dispatch.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status")]
pub enum Response {
    #[serde(rename = "ok")]
    Ok { output: String },

    #[serde(rename = "error")]
    Error { message: String },
}

impl Response {
    pub fn ok(output: impl Into<String>) -> Response {
        Response::Ok {
            output: output.into(),
        }
    }
}
