use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="error">
            {props.message.clone()}
            <span class="error-close" onclick={props.on_dismiss.reform(|_| ())}>{"×"}</span>
        </div>
    }
}
