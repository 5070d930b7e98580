use common::{needs_attention, report_failure, BookingDto, UserDto};
use yew::prelude::*;

use super::bookings_table::BookingsTable;
use crate::api_client::users;
use crate::common::auth::AuthContext;
use crate::common::confirm::ConfirmDialog;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i64,
}

#[derive(Clone, Copy, PartialEq)]
enum ProfileTab {
    Info,
    AllBookings,
    Borrowed,
}

/// Pending action awaiting confirmation.
#[derive(Clone, PartialEq)]
enum PendingAction {
    ReturnBook { book_id: i64 },
    PayFine { booking_id: i64 },
    ToggleActive { currently_active: bool },
}

impl PendingAction {
    fn message(&self) -> String {
        match self {
            Self::ReturnBook { .. } => "Are you sure you want to return this book?".to_string(),
            Self::PayFine { .. } => "Are you sure you want to pay this fine?".to_string(),
            Self::ToggleActive { currently_active } => {
                let action = if *currently_active { "deactivate" } else { "activate" };
                format!("Are you sure you want to {action} this user?")
            }
        }
    }
}

#[function_component(UserDetail)]
pub fn user_detail(props: &Props) -> Html {
    let id = props.id;
    let (user_state, refetch_user) =
        use_fetch_with_refetch(move || users::get(id), "Failed to load user.");
    let (bookings_state, refetch_bookings) =
        use_fetch_with_refetch(move || users::bookings(id), "Failed to load bookings.");
    let tab = use_state(|| ProfileTab::Info);
    let pending = use_state(|| None::<PendingAction>);
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let auth_ctx = use_context::<AuthContext>().unwrap();

    let on_confirmed = {
        let pending = pending.clone();
        let toast_ctx = toast_ctx.clone();
        let refetch_user = refetch_user.clone();
        let refetch_bookings = refetch_bookings.clone();

        Callback::from(move |_| {
            let Some(action) = (*pending).clone() else {
                return;
            };
            pending.set(None);

            let toast_ctx = toast_ctx.clone();
            let refetch_user = refetch_user.clone();
            let refetch_bookings = refetch_bookings.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match action {
                    PendingAction::ReturnBook { book_id } => {
                        match crate::api_client::books::return_book(id, book_id).await {
                            Ok(()) => {
                                toast_ctx.show_success("Book returned successfully!".to_string());
                                refetch_bookings.emit(());
                            }
                            Err(err) => report_failure(&toast_ctx, &err, "Return failed."),
                        }
                    }
                    PendingAction::PayFine { booking_id } => {
                        match users::pay_fine(id, booking_id).await {
                            Ok(()) => {
                                toast_ctx.show_success("Fine paid successfully!".to_string());
                                refetch_bookings.emit(());
                            }
                            Err(err) => report_failure(&toast_ctx, &err, "Payment failed."),
                        }
                    }
                    PendingAction::ToggleActive { currently_active } => {
                        let action = if currently_active { "deactivate" } else { "activate" };
                        let result = if currently_active {
                            users::deactivate(id).await
                        } else {
                            users::activate(id).await
                        };
                        match result {
                            Ok(()) => {
                                toast_ctx.show_success(format!("User {action}d successfully!"));
                                refetch_user.emit(());
                            }
                            Err(err) => report_failure(&toast_ctx, &err, "Operation failed."),
                        }
                    }
                }
            });
        })
    };

    let on_cancelled = {
        let pending = pending.clone();
        Callback::from(move |_| pending.set(None))
    };

    let on_return = {
        let pending = pending.clone();
        Callback::from(move |book_id: i64| pending.set(Some(PendingAction::ReturnBook { book_id })))
    };

    let on_pay = {
        let pending = pending.clone();
        Callback::from(move |booking_id: i64| {
            pending.set(Some(PendingAction::PayFine { booking_id }))
        })
    };

    let select_tab = |target: ProfileTab| {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(target))
    };

    let tab_class = |target: ProfileTab| {
        if *tab == target {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    let render_header = {
        let pending = pending.clone();
        let is_admin = auth_ctx.is_admin();

        Callback::from(move |user: UserDto| {
            let on_ask_toggle = {
                let pending = pending.clone();
                let currently_active = user.active;
                Callback::from(move |_| {
                    pending.set(Some(PendingAction::ToggleActive { currently_active }))
                })
            };

            let status_class = if user.active { "badge-success" } else { "badge-ghost" };
            let status_text = if user.active { "Active" } else { "Inactive" };

            html! {
                <div class="card bg-base-100 shadow mb-4">
                    <div class="card-body flex-row flex-wrap justify-between items-center">
                        <div>
                            <h2 class="card-title">{&user.name}</h2>
                            <p class="text-base-content/70">{&user.email}</p>
                            <span class={classes!("badge", status_class)}>{status_text}</span>
                        </div>
                        {if is_admin {
                            html! {
                                <button class="btn btn-outline btn-sm" onclick={on_ask_toggle}>
                                    {if user.active { "Deactivate User" } else { "Activate User" }}
                                </button>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                </div>
            }
        })
    };

    let render_bookings = {
        let tab = *tab;
        let on_return = on_return.clone();
        let on_pay = on_pay.clone();

        Callback::from(move |bookings: Vec<BookingDto>| {
            let visible: Vec<BookingDto> = match tab {
                ProfileTab::Borrowed => bookings.into_iter().filter(needs_attention).collect(),
                _ => bookings,
            };
            html! {
                <BookingsTable
                    bookings={visible}
                    on_return={on_return.clone()}
                    on_pay={on_pay.clone()}
                />
            }
        })
    };

    let confirm_message = (*pending)
        .as_ref()
        .map(PendingAction::message)
        .unwrap_or_default();

    html! {
        <>
            <ConfirmDialog
                show={pending.is_some()}
                message={confirm_message}
                on_confirm={on_confirmed}
                on_cancel={on_cancelled}
            />

            <FetchRender<UserDto>
                state={(*user_state).clone()}
                render={render_header}
                on_retry={Some(refetch_user)}
            />

            <div role="tablist" class="tabs tabs-boxed mb-4 w-fit">
                <a role="tab" class={tab_class(ProfileTab::Info)} onclick={select_tab(ProfileTab::Info)}>
                    {"Personal Info"}
                </a>
                <a role="tab" class={tab_class(ProfileTab::AllBookings)} onclick={select_tab(ProfileTab::AllBookings)}>
                    {"All Bookings"}
                </a>
                <a role="tab" class={tab_class(ProfileTab::Borrowed)} onclick={select_tab(ProfileTab::Borrowed)}>
                    {"Borrowed Books"}
                </a>
            </div>

            {match *tab {
                ProfileTab::Info => html! {},
                ProfileTab::AllBookings | ProfileTab::Borrowed => html! {
                    <FetchRender<Vec<BookingDto>>
                        state={(*bookings_state).clone()}
                        render={render_bookings}
                        on_retry={Some(refetch_bookings)}
                    />
                },
            }}
        </>
    }
}
