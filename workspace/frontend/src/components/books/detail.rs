use common::{report_failure, AuthorDto, BookDetailsDto, GenreDto, UpdateBookRequest};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::{authors, books, genres};
use crate::common::auth::AuthContext;
use crate::common::confirm::ConfirmDialog;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i64,
}

#[function_component(BookDetail)]
pub fn book_detail(props: &Props) -> Html {
    let id = props.id;
    let (fetch_state, refetch) =
        use_fetch_with_refetch(move || books::get_details(id), "Failed to load book.");
    let is_editing = use_state(|| false);
    let confirm_delete = use_state(|| false);
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let auth_ctx = use_context::<AuthContext>().unwrap();
    let navigator = use_navigator().unwrap();

    let on_rent = {
        let toast_ctx = toast_ctx.clone();
        let auth_ctx = auth_ctx.clone();
        let navigator = navigator.clone();

        Callback::from(move |_| {
            let toast_ctx = toast_ctx.clone();
            let navigator = navigator.clone();

            let Some(user) = auth_ctx.user.clone() else {
                navigator.push(&Route::Login);
                return;
            };

            wasm_bindgen_futures::spawn_local(async move {
                match books::rent(user.id, id).await {
                    Ok(()) => {
                        toast_ctx.show_success("Book rented successfully!".to_string());
                    }
                    Err(err) => {
                        report_failure(&toast_ctx, &err, "Check your fines or overdue books.");
                    }
                }
                navigator.push(&Route::UserDetail { id: user.id });
            });
        })
    };

    let on_delete_confirmed = {
        let confirm_delete = confirm_delete.clone();
        let toast_ctx = toast_ctx.clone();
        let navigator = navigator.clone();

        Callback::from(move |_| {
            confirm_delete.set(false);

            let toast_ctx = toast_ctx.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match books::delete(id).await {
                    Ok(()) => {
                        toast_ctx.show_success("Book deleted.".to_string());
                        navigator.push(&Route::Books);
                    }
                    Err(err) => {
                        report_failure(&toast_ctx, &err, "Failed to delete book.");
                    }
                }
            });
        })
    };

    let render = {
        let is_editing_handle = is_editing.clone();
        let is_editing = *is_editing;
        let auth_ctx = auth_ctx.clone();
        let confirm_delete = confirm_delete.clone();
        let refetch = refetch.clone();
        let on_rent = on_rent.clone();

        Callback::from(move |details: BookDetailsDto| {
            if is_editing {
                let on_saved = {
                    let is_editing_handle = is_editing_handle.clone();
                    let refetch = refetch.clone();
                    Callback::from(move |_| {
                        is_editing_handle.set(false);
                        refetch.emit(());
                    })
                };
                let on_cancel = {
                    let is_editing_handle = is_editing_handle.clone();
                    Callback::from(move |_| is_editing_handle.set(false))
                };
                return html! {
                    <EditBookForm details={details.clone()} {on_saved} {on_cancel} />
                };
            }

            let on_edit = {
                let is_editing_handle = is_editing_handle.clone();
                Callback::from(move |_| is_editing_handle.set(true))
            };
            let on_ask_delete = {
                let confirm_delete = confirm_delete.clone();
                Callback::from(move |_| confirm_delete.set(true))
            };

            let is_available = details.available > 0;
            let status_class = if is_available { "text-success" } else { "text-error" };
            let status_text = if is_available { "Available" } else { "Out of Stock" };

            html! {
                <div class="card bg-base-100 shadow max-w-2xl">
                    <div class="card-body">
                        <h2 class="card-title">{&details.title}</h2>
                        <p>
                            <span class="font-semibold">{"Author: "}</span>
                            <Link<Route> to={Route::AuthorDetail { id: details.author_id }} classes="link link-primary">
                                {&details.author_name}
                            </Link<Route>>
                        </p>
                        <p><span class="font-semibold">{"Year: "}</span>{details.year}</p>
                        <p>
                            <span class="font-semibold">{"Genres: "}</span>
                            {for details.genres.iter().map(|genre| html! {
                                <span class="badge badge-outline badge-primary mr-1">{genre}</span>
                            })}
                        </p>
                        <p>
                            <span class={classes!("font-bold", status_class)}>{status_text}</span>
                            {format!(" ({} copies)", details.available)}
                        </p>
                        <div class="card-actions justify-end">
                            {if is_available {
                                if auth_ctx.is_authenticated() {
                                    let on_rent = on_rent.clone();
                                    html! {
                                        <button class="btn btn-primary btn-sm" onclick={move |_| on_rent.emit(())}>
                                            {"Rent Now"}
                                        </button>
                                    }
                                } else {
                                    html! {
                                        <Link<Route> to={Route::Login} classes="btn btn-primary btn-sm">
                                            {"Login to Rent"}
                                        </Link<Route>>
                                    }
                                }
                            } else {
                                html! {}
                            }}
                            {if auth_ctx.is_admin() {
                                html! {
                                    <>
                                        <button class="btn btn-outline btn-sm" onclick={on_edit}>{"Edit"}</button>
                                        <button class="btn btn-error btn-sm" onclick={on_ask_delete}>{"Delete"}</button>
                                    </>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
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
                title="Delete Book"
                message="Are you sure you want to delete this book?"
                on_confirm={on_delete_confirmed}
                on_cancel={on_cancel_delete}
            />
            <FetchRender<BookDetailsDto>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch)}
            />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct EditBookFormProps {
    details: BookDetailsDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
}

#[function_component(EditBookForm)]
fn edit_book_form(props: &EditBookFormProps) -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let author_options = use_state(Vec::<AuthorDto>::new);
    let genre_options = use_state(Vec::<GenreDto>::new);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    {
        let author_options = author_options.clone();
        let genre_options = genre_options.clone();
        let toast_ctx = toast_ctx.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match authors::list().await {
                    Ok(list) => author_options.set(list),
                    Err(err) => report_failure(&toast_ctx, &err, "Failed to load authors list."),
                }
                match genres::list().await {
                    Ok(list) => genre_options.set(list),
                    Err(err) => report_failure(&toast_ctx, &err, "Failed to load genres list."),
                }
            });
            || ()
        });
    }

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let toast_ctx = toast_ctx.clone();
        let on_saved = props.on_saved.clone();
        let book_id = props.details.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let Ok(form_data) = FormData::new_with_form(&form) else {
                return;
            };

            let title = form_data.get("title").as_string().unwrap_or_default();
            let year = form_data
                .get("year")
                .as_string()
                .and_then(|value| value.parse::<i32>().ok());
            let available = form_data
                .get("available")
                .as_string()
                .and_then(|value| value.parse::<i32>().ok());
            let author_id = form_data
                .get("authorId")
                .as_string()
                .and_then(|value| value.parse::<i64>().ok());
            let genre_ids: Vec<i64> = form_data
                .get_all("genreIds")
                .iter()
                .filter_map(|value| value.as_string())
                .filter_map(|value| value.parse::<i64>().ok())
                .collect();

            let (Some(year), Some(available), Some(author_id)) = (year, available, author_id)
            else {
                toast_ctx.show_error("Please fill all fields.".to_string());
                return;
            };
            if title.trim().is_empty() {
                toast_ctx.show_error("Title cannot be empty.".to_string());
                return;
            }
            if genre_ids.is_empty() {
                toast_ctx.show_error("Please select at least one genre.".to_string());
                return;
            }

            is_submitting.set(true);

            let request = UpdateBookRequest {
                title: title.trim().to_string(),
                year,
                available,
                author_id,
                genre_ids,
            };

            let is_submitting = is_submitting.clone();
            let toast_ctx = toast_ctx.clone();
            let on_saved = on_saved.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match books::update(book_id, &request).await {
                    Ok(book) => {
                        toast_ctx.show_success(format!("Book \"{}\" updated.", book.title));
                        on_saved.emit(());
                    }
                    Err(err) => {
                        report_failure(&toast_ctx, &err, "Failed to update book.");
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    let details = &props.details;

    html! {
        <div class="card bg-base-100 shadow max-w-2xl">
            <div class="card-body">
                <h2 class="card-title">{"Edit Book"}</h2>
                <form ref={form_ref} onsubmit={on_submit} class="space-y-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Title"}</span></label>
                        <input
                            type="text"
                            name="title"
                            class="input input-bordered"
                            value={details.title.clone()}
                        />
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Year"}</span></label>
                            <input
                                type="number"
                                name="year"
                                class="input input-bordered"
                                value={details.year.to_string()}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Copies"}</span></label>
                            <input
                                type="number"
                                name="available"
                                min="0"
                                class="input input-bordered"
                                value={details.available.to_string()}
                            />
                        </div>
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Author"}</span></label>
                        <select name="authorId" class="select select-bordered">
                            {for author_options.iter().map(|author| html! {
                                <option
                                    key={author.id}
                                    value={author.id.to_string()}
                                    selected={author.id == details.author_id}
                                >
                                    {&author.name}
                                </option>
                            })}
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Genres"}</span></label>
                        <select name="genreIds" class="select select-bordered" multiple={true}>
                            {for genre_options.iter().map(|genre| html! {
                                <option
                                    key={genre.id}
                                    value={genre.id.to_string()}
                                    selected={details.genres.contains(&genre.name)}
                                >
                                    {&genre.name}
                                </option>
                            })}
                        </select>
                    </div>
                    <div class="flex gap-2 justify-end">
                        <button type="button" class="btn btn-ghost" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {"Save"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
