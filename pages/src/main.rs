use gloo::utils::document;
use yew::prelude::*;
use yewdux::Dispatch;

use components::user_list::UserList;
use roster_sdk::config::ApiConfig;

/// `<meta name="api-base-url" content="...">` in index.html overrides the api
const API_BASE_META: &str = "meta[name=\"api-base-url\"]";

#[function_component(App)]
fn app() -> Html {
    html! {
        <UserList />
    }
}

fn load_config() -> ApiConfig {
    let base_url = document()
        .query_selector(API_BASE_META)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"));
    ApiConfig::resolve(base_url.as_deref())
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    let config = load_config();
    log::debug!("user management starting against {}", config.base_url());
    Dispatch::<ApiConfig>::global().set(config);
    yew::Renderer::<App>::new().render();
}
