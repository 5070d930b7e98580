use chrono::NaiveDate;
use common::{report_failure, AuthorDto, UpdateAuthorRequest};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::authors;
use crate::common::auth::AuthContext;
use crate::common::confirm::ConfirmDialog;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;
use crate::components::books::CatalogParams;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i64,
}

#[function_component(AuthorDetail)]
pub fn author_detail(props: &Props) -> Html {
    let id = props.id;
    let (fetch_state, refetch) =
        use_fetch_with_refetch(move || authors::get(id), "Failed to load author.");
    let is_editing = use_state(|| false);
    let confirm_delete = use_state(|| false);
    let is_busy = use_state(|| false);
    let form_ref = use_node_ref();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let auth_ctx = use_context::<AuthContext>().unwrap();
    let navigator = use_navigator().unwrap();

    let on_save = {
        let form_ref = form_ref.clone();
        let is_editing = is_editing.clone();
        let is_busy = is_busy.clone();
        let toast_ctx = toast_ctx.clone();
        let refetch = refetch.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_busy {
                return;
            }

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let Ok(form_data) = FormData::new_with_form(&form) else {
                return;
            };

            let name = form_data.get("name").as_string().unwrap_or_default();
            let birthdate_raw = form_data.get("birthdate").as_string().unwrap_or_default();
            let Ok(birthdate) = NaiveDate::parse_from_str(&birthdate_raw, "%Y-%m-%d") else {
                toast_ctx.show_error("Birthdate is not a valid date.".to_string());
                return;
            };

            if name.trim().is_empty() {
                toast_ctx.show_error("Name cannot be empty.".to_string());
                return;
            }

            is_busy.set(true);

            let request = UpdateAuthorRequest {
                name: name.trim().to_string(),
                birthdate,
            };

            let is_editing = is_editing.clone();
            let is_busy = is_busy.clone();
            let toast_ctx = toast_ctx.clone();
            let refetch = refetch.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match authors::update(id, &request).await {
                    Ok(author) => {
                        toast_ctx.show_success(format!("Author \"{}\" updated.", author.name));
                        is_editing.set(false);
                        refetch.emit(());
                    }
                    Err(err) => {
                        report_failure(&toast_ctx, &err, "Failed to update author.");
                    }
                }
                is_busy.set(false);
            });
        })
    };

    let on_delete_confirmed = {
        let confirm_delete = confirm_delete.clone();
        let is_busy = is_busy.clone();
        let toast_ctx = toast_ctx.clone();
        let navigator = navigator.clone();

        Callback::from(move |_| {
            confirm_delete.set(false);

            if *is_busy {
                return;
            }
            is_busy.set(true);

            let is_busy = is_busy.clone();
            let toast_ctx = toast_ctx.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match authors::delete(id).await {
                    Ok(()) => {
                        toast_ctx.show_success("Author deleted.".to_string());
                        navigator.push(&Route::Authors);
                    }
                    Err(err) => {
                        // Backend refusals ("author still has books") surface verbatim.
                        report_failure(&toast_ctx, &err, "Failed to delete author.");
                    }
                }
                is_busy.set(false);
            });
        })
    };

    let render = {
        let is_editing_handle = is_editing.clone();
        let is_editing = *is_editing;
        let is_admin = auth_ctx.is_admin();
        let confirm_delete = confirm_delete.clone();
        let form_ref = form_ref.clone();
        let on_save = on_save.clone();
        let is_busy = *is_busy;
        let navigator = navigator.clone();

        Callback::from(move |author: AuthorDto| {
            let on_view_books = {
                let navigator = navigator.clone();
                let name = author.name.clone();
                Callback::from(move |_| {
                    let params = CatalogParams {
                        author_name: Some(name.clone()),
                        genre_name: None,
                    };
                    if navigator.push_with_query(&Route::Books, &params).is_err() {
                        navigator.push(&Route::Books);
                    }
                })
            };

            let on_edit = {
                let is_editing_handle = is_editing_handle.clone();
                Callback::from(move |_| is_editing_handle.set(true))
            };

            let on_cancel_edit = {
                let is_editing_handle = is_editing_handle.clone();
                Callback::from(move |_| is_editing_handle.set(false))
            };

            let on_ask_delete = {
                let confirm_delete = confirm_delete.clone();
                Callback::from(move |_| confirm_delete.set(true))
            };

            html! {
                <div class="card bg-base-100 shadow max-w-2xl">
                    <div class="card-body">
                        {if is_editing {
                            html! {
                                <form ref={form_ref.clone()} onsubmit={on_save.clone()} class="space-y-4">
                                    <div class="form-control">
                                        <label class="label"><span class="label-text">{"Name"}</span></label>
                                        <input
                                            type="text"
                                            name="name"
                                            class="input input-bordered"
                                            value={author.name.clone()}
                                        />
                                    </div>
                                    <div class="form-control">
                                        <label class="label"><span class="label-text">{"Birthdate"}</span></label>
                                        <input
                                            type="date"
                                            name="birthdate"
                                            class="input input-bordered"
                                            value={author.birthdate.format("%Y-%m-%d").to_string()}
                                        />
                                    </div>
                                    <div class="flex gap-2 justify-end">
                                        <button type="button" class="btn btn-ghost" onclick={on_cancel_edit}>
                                            {"Cancel"}
                                        </button>
                                        <button type="submit" class="btn btn-primary" disabled={is_busy}>
                                            {"Save"}
                                        </button>
                                    </div>
                                </form>
                            }
                        } else {
                            html! {
                                <>
                                    <h2 class="card-title">{&author.name}</h2>
                                    <p>
                                        <span class="font-semibold">{"Birthdate: "}</span>
                                        {author.birthdate.format("%Y-%m-%d").to_string()}
                                    </p>
                                    <div class="card-actions justify-end">
                                        <button class="btn btn-outline btn-sm" onclick={on_view_books}>
                                            <i class="fas fa-book"></i> {" View Books"}
                                        </button>
                                        {if is_admin {
                                            html! {
                                                <>
                                                    <button class="btn btn-primary btn-sm" onclick={on_edit}>
                                                        {"Edit"}
                                                    </button>
                                                    <button class="btn btn-error btn-sm" onclick={on_ask_delete}>
                                                        {"Delete"}
                                                    </button>
                                                </>
                                            }
                                        } else {
                                            html! {}
                                        }}
                                    </div>
                                </>
                            }
                        }}
                    </div>
                </div>
            }
        })
    };

    let on_cancel_delete = {
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |_| confirm_delete.set(false))
    };

    html! {
        <>
            <ConfirmDialog
                show={*confirm_delete}
                title="Delete Author"
                message="Are you sure you want to delete this author?"
                on_confirm={on_delete_confirmed}
                on_cancel={on_cancel_delete}
            />
            <FetchRender<AuthorDto>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch)}
            />
        </>
    }
}
