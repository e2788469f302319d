use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use roster_sdk::model::user::Role;
use roster_sdk::state::{DraftField, UserDraft};

#[derive(Properties, Clone, PartialEq)]
pub struct UserFieldsProps {
    pub draft: UserDraft,
    pub onchange: Callback<DraftField>,
}

/// username, email and role inputs bound to one draft
#[function_component(UserFields)]
pub fn user_fields(props: &UserFieldsProps) -> Html {
    let on_username = props.onchange.reform(|e: InputEvent| {
        DraftField::Username(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_email = props.onchange.reform(|e: InputEvent| {
        DraftField::Email(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_role = props.onchange.reform(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        DraftField::Role(Role::from(value.as_str()))
    });

    // `selected` stops steering the select once the user picked an option,
    // so a reset draft has to be pushed into the element
    let select_ref = use_node_ref();
    {
        let select_ref = select_ref.clone();
        use_effect_with(props.draft.role.clone(), move |role| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(&role.to_string());
            }
        });
    }

    let options = Role::ALL
        .iter()
        .map(|role| {
            html! {
                <option value={role.to_string()} selected={*role == props.draft.role}>
                    {role.label()}
                </option>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <input
                type="text"
                placeholder="Username"
                value={props.draft.username.clone()}
                oninput={on_username}/>
            <input
                type="email"
                placeholder="Email"
                value={props.draft.email.clone()}
                oninput={on_email}/>
            <select ref={select_ref} onchange={on_role}>
                {options}
            </select>
        </>
    }
}
