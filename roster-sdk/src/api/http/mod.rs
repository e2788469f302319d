use async_trait::async_trait;
use gloo_net::http::Response;

pub use user::*;

use crate::error::Error;
use crate::Result;

mod user;

pub(crate) fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

#[async_trait(?Send)]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait(?Send)]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        if is_success(self.status()) {
            Ok(self)
        } else {
            // keep whatever the server said for the log, it never reaches the ui
            let reason = match self.text().await {
                Ok(body) if !body.is_empty() => body,
                _ => self.status_text(),
            };
            Err(Error::Status {
                status: self.status(),
                reason,
            })
        }
    }
}
