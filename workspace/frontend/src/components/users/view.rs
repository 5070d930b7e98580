use common::{report_failure, UserDto};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::user_modal::UserModal;
use crate::api_client::users;
use crate::common::confirm::ConfirmDialog;
use crate::common::error::ErrorDisplay;
use crate::common::loading::LoadingSpinner;
use crate::common::toast::ToastContext;
use crate::hooks::FetchState;
use crate::router::Route;

const USERS_FALLBACK: &str = "Failed to load users.";

/// Pending activate/deactivate toggle awaiting confirmation.
#[derive(Clone, PartialEq)]
struct PendingToggle {
    user_id: i64,
    currently_active: bool,
}

#[function_component(UsersView)]
pub fn users_view() -> Html {
    let fetch_state = use_state(FetchState::<Vec<UserDto>>::default);
    let search_ref = use_node_ref();
    let show_create = use_state(|| false);
    let pending_toggle = use_state(|| None::<PendingToggle>);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let load = {
        let fetch_state = fetch_state.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |query: Option<String>| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = match &query {
                    Some(by) => users::search(by).await,
                    None => users::list().await,
                };
                match result {
                    Ok(items) => fetch_state.set(FetchState::Success(items)),
                    Err(err) => {
                        report_failure(&toast_ctx, &err, USERS_FALLBACK);
                        fetch_state.set(FetchState::Error(err.user_message(USERS_FALLBACK)));
                    }
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(None);
            || ()
        });
    }

    let on_show_all = {
        let load = load.clone();
        Callback::from(move |_| load.emit(None))
    };

    let on_search = {
        let load = load.clone();
        let search_ref = search_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = search_ref.cast::<HtmlInputElement>() {
                let query = input.value().trim().to_string();
                if !query.is_empty() {
                    load.emit(Some(query));
                }
            }
        })
    };

    let on_open_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(true))
    };

    let on_close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };

    let on_created = {
        let load = load.clone();
        Callback::from(move |_| load.emit(None))
    };

    let on_ask_toggle = {
        let pending_toggle = pending_toggle.clone();
        Callback::from(move |toggle: PendingToggle| pending_toggle.set(Some(toggle)))
    };

    let on_toggle_confirmed = {
        let pending_toggle = pending_toggle.clone();
        let toast_ctx = toast_ctx.clone();
        let load = load.clone();

        Callback::from(move |_| {
            let Some(toggle) = (*pending_toggle).clone() else {
                return;
            };
            pending_toggle.set(None);

            let toast_ctx = toast_ctx.clone();
            let load = load.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let action = if toggle.currently_active { "deactivate" } else { "activate" };
                let result = if toggle.currently_active {
                    users::deactivate(toggle.user_id).await
                } else {
                    users::activate(toggle.user_id).await
                };
                match result {
                    Ok(()) => {
                        toast_ctx.show_success(format!("User {action}d successfully!"));
                        load.emit(None);
                    }
                    Err(err) => {
                        report_failure(&toast_ctx, &err, "Operation failed.");
                    }
                }
            });
        })
    };

    let on_toggle_cancelled = {
        let pending_toggle = pending_toggle.clone();
        Callback::from(move |_| pending_toggle.set(None))
    };

    let on_retry = {
        let load = load.clone();
        Callback::from(move |_| load.emit(None))
    };

    let confirm_message = (*pending_toggle)
        .as_ref()
        .map(|toggle| {
            let action = if toggle.currently_active { "deactivate" } else { "activate" };
            format!("Are you sure you want to {action} this user?")
        })
        .unwrap_or_default();

    html! {
        <>
            <UserModal
                show={*show_create}
                on_close={on_close_create}
                on_success={on_created}
            />
            <ConfirmDialog
                show={pending_toggle.is_some()}
                title="Change Account Status"
                message={confirm_message}
                on_confirm={on_toggle_confirmed}
                on_cancel={on_toggle_cancelled}
            />

            <div class="flex flex-wrap justify-between items-center gap-2 mb-4">
                <div class="flex gap-2">
                    <button class="btn btn-ghost btn-sm" onclick={on_show_all}>{"Show All"}</button>
                    <div class="join">
                        <input
                            ref={search_ref}
                            type="text"
                            placeholder="Name or email"
                            class="input input-bordered input-sm join-item"
                        />
                        <button class="btn btn-sm join-item" onclick={on_search}>
                            <i class="fas fa-search"></i>
                        </button>
                    </div>
                </div>
                <button class="btn btn-primary btn-sm" onclick={on_open_create}>
                    <i class="fas fa-plus"></i> {" Add User"}
                </button>
            </div>

            {match &*fetch_state {
                FetchState::NotStarted => html! {},
                FetchState::Loading => html! { <LoadingSpinner /> },
                FetchState::Error(message) => html! {
                    <ErrorDisplay message={message.clone()} on_retry={Some(on_retry)} />
                },
                FetchState::Success(users) => render_users_table(users, on_ask_toggle),
            }}
        </>
    }
}

fn render_users_table(users: &[UserDto], on_ask_toggle: Callback<PendingToggle>) -> Html {
    html! {
        <div class="overflow-x-auto bg-base-100 shadow rounded-box">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Status"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if users.is_empty() {
                        html! {
                            <tr>
                                <td colspan="5" class="text-center py-8 text-base-content/60">
                                    {"No users found."}
                                </td>
                            </tr>
                        }
                    } else {
                        html! { for users.iter().map(|user| render_user_row(user, &on_ask_toggle)) }
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn render_user_row(user: &UserDto, on_ask_toggle: &Callback<PendingToggle>) -> Html {
    let status_class = if user.active { "badge-success" } else { "badge-ghost" };
    let status_text = if user.active { "Active" } else { "Inactive" };
    let toggle_label = if user.active { "Deactivate" } else { "Activate" };
    let toggle_class = if user.active { "btn-outline btn-error" } else { "btn-outline btn-success" };

    let on_toggle = {
        let on_ask_toggle = on_ask_toggle.clone();
        let toggle = PendingToggle {
            user_id: user.id,
            currently_active: user.active,
        };
        Callback::from(move |_| on_ask_toggle.emit(toggle.clone()))
    };

    html! {
        <tr key={user.id}>
            <td>{user.id}</td>
            <td>{&user.name}</td>
            <td>{&user.email}</td>
            <td><span class={classes!("badge", status_class)}>{status_text}</span></td>
            <td class="flex gap-2">
                <Link<Route> to={Route::UserDetail { id: user.id }} classes="btn btn-outline btn-primary btn-sm">
                    {"Details"}
                </Link<Route>>
                <button class={classes!("btn", "btn-sm", toggle_class)} onclick={on_toggle}>
                    {toggle_label}
                </button>
            </td>
        </tr>
    }
}
