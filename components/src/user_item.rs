use yew::prelude::*;

use roster_sdk::model::user::UserRecord;
use roster_sdk::state::{DraftField, UserDraft};

use crate::user_fields::UserFields;

#[derive(Properties, Clone, PartialEq)]
pub struct UserItemProps {
    pub user: UserRecord,
    /// staged values when this row is the one being edited
    #[prop_or_default]
    pub draft: Option<UserDraft>,
    #[prop_or_default]
    pub saving: bool,
    #[prop_or_default]
    pub deleting: bool,
    pub on_edit: Callback<u64>,
    pub on_delete: Callback<u64>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
    pub on_change: Callback<DraftField>,
}

/// One row of the list, read-only or in edit mode.
#[function_component(UserItem)]
pub fn user_item(props: &UserItemProps) -> Html {
    let id = props.user.id;

    let body = match &props.draft {
        Some(draft) => html! {
            <div class="user-edit">
                <UserFields draft={draft.clone()} onchange={props.on_change.clone()}/>
            </div>
        },
        None => html! {
            <div class="user-info">
                <span>{props.user.username.clone()}</span>
                <span>{props.user.email.clone()}</span>
                <span>{props.user.role.to_string()}</span>
            </div>
        },
    };

    let actions = if props.draft.is_some() {
        html! {
            <div class="user-actions">
                <button disabled={props.saving} onclick={props.on_save.reform(|_| ())}>
                    {"Save"}
                </button>
                <button onclick={props.on_cancel.reform(|_| ())}>{"Cancel"}</button>
            </div>
        }
    } else {
        html! {
            <div class="user-actions">
                <button onclick={props.on_edit.reform(move |_| id)}>{"Edit"}</button>
                <button disabled={props.deleting} onclick={props.on_delete.reform(move |_| id)}>
                    {"Delete"}
                </button>
            </div>
        }
    };

    html! {
        <li>
            {body}
            {actions}
        </li>
    }
}
