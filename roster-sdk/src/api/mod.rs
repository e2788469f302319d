use yewdux::Dispatch;

use crate::config::ApiConfig;

use self::http::UserHttp;

pub use self::user::UserApi;

mod http;
mod user;

/// http client bound to the configured base url
pub fn users() -> Box<dyn UserApi> {
    let config = Dispatch::<ApiConfig>::global().get();
    Box::new(UserHttp::new(config.as_ref().clone()))
}
