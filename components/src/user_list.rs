use std::rc::Rc;

use yew::prelude::*;
use yewdux::Dispatch;

use roster_sdk::action::{self, Action, Outcome};
use roster_sdk::api;
use roster_sdk::state::{DraftField, FlightKey, UserStore};

use crate::error_banner::ErrorBanner;
use crate::user_fields::UserFields;
use crate::user_item::UserItem;

/// The user management screen: add form, user list and the last error.
pub struct UserList {
    store: Rc<UserStore>,
    store_dis: Dispatch<UserStore>,
}

pub enum UserListMsg {
    StoreChanged(Rc<UserStore>),
    Run(Action),
    Done(Outcome),
    Add,
    Save,
    EditClicked(u64),
    CancelEdit,
    DraftChanged(DraftField),
    EditChanged(DraftField),
    DismissError,
}

impl Component for UserList {
    type Message = UserListMsg;

    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let store_dis =
            Dispatch::global().subscribe_silent(ctx.link().callback(UserListMsg::StoreChanged));
        // one full fetch at startup, everything after is incremental
        ctx.link().send_message(UserListMsg::Run(Action::Fetch));
        Self {
            store: store_dis.get(),
            store_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            UserListMsg::StoreChanged(store) => {
                self.store = store;
                true
            }
            UserListMsg::Run(action) => {
                let mut started = false;
                self.store_dis.reduce_mut(|s| started = s.begin(&action));
                if started {
                    ctx.link().send_future(async move {
                        let api = api::users();
                        UserListMsg::Done(action::perform(api.as_ref(), action).await)
                    });
                }
                false
            }
            UserListMsg::Done(outcome) => {
                self.store_dis.reduce_mut(|s| s.apply(outcome));
                false
            }
            UserListMsg::Add => {
                let action = self.store.add_action();
                ctx.link().send_message(UserListMsg::Run(action));
                false
            }
            UserListMsg::Save => {
                if let Some(action) = self.store.save_action() {
                    ctx.link().send_message(UserListMsg::Run(action));
                }
                false
            }
            UserListMsg::EditClicked(id) => {
                self.store_dis.reduce_mut(|s| {
                    s.begin_edit(id);
                });
                false
            }
            UserListMsg::CancelEdit => {
                self.store_dis.reduce_mut(|s| s.cancel_edit());
                false
            }
            UserListMsg::DraftChanged(field) => {
                self.store_dis.reduce_mut(|s| s.set_draft(field));
                false
            }
            UserListMsg::EditChanged(field) => {
                self.store_dis.reduce_mut(|s| s.set_edit(field));
                false
            }
            UserListMsg::DismissError => {
                self.store_dis.reduce_mut(|s| s.dismiss_error());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let store = &self.store;

        let error = match store.error.as_deref() {
            Some(message) => html! {
                <ErrorBanner
                    message={AttrValue::from(message.to_string())}
                    on_dismiss={link.callback(|_: ()| UserListMsg::DismissError)}/>
            },
            None => html!(),
        };

        let on_edit = link.callback(UserListMsg::EditClicked);
        let on_delete = link.callback(|id: u64| UserListMsg::Run(Action::Delete(id)));
        let on_save = link.callback(|_: ()| UserListMsg::Save);
        let on_cancel = link.callback(|_: ()| UserListMsg::CancelEdit);
        let on_change = link.callback(UserListMsg::EditChanged);

        let items = store
            .users
            .iter()
            .enumerate()
            .map(|(index, user)| {
                let draft = if store.edit.is_editing(user.id) {
                    store.edit.draft().cloned()
                } else {
                    None
                };
                html! {
                    <UserItem
                        key={format!("{index}-{}", user.id)}
                        user={user.clone()}
                        {draft}
                        saving={store.is_pending(FlightKey::Update(user.id))}
                        deleting={store.is_pending(FlightKey::Delete(user.id))}
                        on_edit={on_edit.clone()}
                        on_delete={on_delete.clone()}
                        on_save={on_save.clone()}
                        on_cancel={on_cancel.clone()}
                        on_change={on_change.clone()}/>
                }
            })
            .collect::<Html>();

        let loading = if store.is_pending(FlightKey::List) {
            html!(<div class="loading">{"Loading..."}</div>)
        } else {
            html!()
        };

        html! {
            <div class="container">
                <h1>{"User Management"}</h1>
                <div class="add-user-form">
                    <h2>{"Add User"}</h2>
                    <UserFields
                        draft={store.draft.clone()}
                        onchange={link.callback(UserListMsg::DraftChanged)}/>
                    <button
                        disabled={store.is_pending(FlightKey::Create)}
                        onclick={link.callback(|_| UserListMsg::Add)}>
                        {"Add User"}
                    </button>
                </div>
                <div class="user-list">
                    <h2>{"User List"}</h2>
                    {error}
                    {loading}
                    <ul>
                        {items}
                    </ul>
                </div>
            </div>
        }
    }
}
