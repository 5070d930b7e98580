use common::{report_failure, AuthorDto, CreateBookRequest, GenreDto};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::api_client::{authors, books, genres};
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct BookModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_success: Callback<()>,
}

#[function_component(BookModal)]
pub fn book_modal(props: &BookModalProps) -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let validation_error = use_state(|| None::<String>);
    let author_options = use_state(Vec::<AuthorDto>::new);
    let genre_options = use_state(Vec::<GenreDto>::new);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    // The author and genre selects reload every time the modal opens.
    {
        let author_options = author_options.clone();
        let genre_options = genre_options.clone();
        let toast_ctx = toast_ctx.clone();

        use_effect_with(props.show, move |show| {
            if *show {
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
            }
            || ()
        });
    }

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let validation_error = validation_error.clone();
        let toast_ctx = toast_ctx.clone();
        let on_close = props.on_close.clone();
        let on_success = props.on_success.clone();

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

            if title.trim().is_empty() {
                validation_error.set(Some("Title cannot be empty.".to_string()));
                return;
            }
            let (Some(year), Some(available), Some(author_id)) = (year, available, author_id)
            else {
                validation_error.set(Some("Please fill all fields.".to_string()));
                return;
            };
            if genre_ids.is_empty() {
                validation_error.set(Some("Please select at least one genre.".to_string()));
                return;
            }

            validation_error.set(None);
            is_submitting.set(true);

            let request = CreateBookRequest {
                title: title.trim().to_string(),
                year,
                available,
                author_id,
                genre_ids,
            };

            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let toast_ctx = toast_ctx.clone();
            let on_close = on_close.clone();
            let on_success = on_success.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match books::create(&request).await {
                    Ok(book) => {
                        toast_ctx.show_success(format!("Book \"{}\" created.", book.title));
                        form.reset();
                        on_success.emit(());
                        on_close.emit(());
                    }
                    Err(err) => {
                        report_failure(&toast_ctx, &err, "Failed to create book.");
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        let is_submitting = *is_submitting;
        Callback::from(move |_| {
            if !is_submitting {
                on_close.emit(());
            }
        })
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))}>
            <div class="modal-box max-w-lg">
                <h3 class="font-bold text-lg">{"Add Book"}</h3>

                {if let Some(error) = (*validation_error).as_ref() {
                    html! {
                        <div class="alert alert-warning mt-4">
                            <span>{error}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <form ref={form_ref} onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Title"}</span></label>
                        <input type="text" name="title" class="input input-bordered" required={true} />
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Year"}</span></label>
                            <input type="number" name="year" class="input input-bordered" required={true} />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Copies"}</span></label>
                            <input type="number" name="available" min="0" class="input input-bordered" required={true} />
                        </div>
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Author"}</span></label>
                        <select name="authorId" class="select select-bordered" required={true}>
                            {for author_options.iter().map(|author| html! {
                                <option key={author.id} value={author.id.to_string()}>{&author.name}</option>
                            })}
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Genres"}</span></label>
                        <select name="genreIds" class="select select-bordered" multiple={true}>
                            {for genre_options.iter().map(|genre| html! {
                                <option key={genre.id} value={genre.id.to_string()}>{&genre.name}</option>
                            })}
                        </select>
                    </div>
                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting {
                                html! { <span class="loading loading-spinner loading-sm"></span> }
                            } else {
                                html! { "Create" }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
