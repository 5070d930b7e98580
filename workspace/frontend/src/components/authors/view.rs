use common::{report_failure, AuthorDto};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::author_modal::AuthorModal;
use crate::api_client::authors;
use crate::common::auth::AuthContext;
use crate::common::error::ErrorDisplay;
use crate::common::loading::LoadingSpinner;
use crate::common::toast::ToastContext;
use crate::hooks::FetchState;
use crate::router::Route;

const AUTHORS_FALLBACK: &str = "Failed to load authors.";

#[function_component(AuthorsView)]
pub fn authors_view() -> Html {
    let fetch_state = use_state(FetchState::<Vec<AuthorDto>>::default);
    let list_title = use_state(|| "All Authors".to_string());
    let search_ref = use_node_ref();
    let show_create = use_state(|| false);
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let auth_ctx = use_context::<AuthContext>().unwrap();

    // None loads the full list, Some(name) a search by name.
    let load = {
        let fetch_state = fetch_state.clone();
        let list_title = list_title.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |query: Option<String>| {
            let fetch_state = fetch_state.clone();
            let list_title = list_title.clone();
            let toast_ctx = toast_ctx.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = match &query {
                    Some(name) => authors::search(name).await,
                    None => authors::list().await,
                };
                match result {
                    Ok(items) => {
                        list_title.set(match &query {
                            Some(name) => format!("Search results for: {name}"),
                            None => "All Authors".to_string(),
                        });
                        fetch_state.set(FetchState::Success(items));
                    }
                    Err(err) => {
                        report_failure(&toast_ctx, &err, AUTHORS_FALLBACK);
                        fetch_state.set(FetchState::Error(err.user_message(AUTHORS_FALLBACK)));
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
                let name = input.value().trim().to_string();
                if !name.is_empty() {
                    load.emit(Some(name));
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

    let on_retry = {
        let load = load.clone();
        Callback::from(move |_| load.emit(None))
    };

    html! {
        <>
            <AuthorModal
                show={*show_create}
                on_close={on_close_create}
                on_success={on_created}
            />

            <div class="flex flex-wrap justify-between items-center gap-2 mb-4">
                <h2 class="text-xl font-bold">{&*list_title}</h2>
                <div class="flex gap-2">
                    <button class="btn btn-ghost btn-sm" onclick={on_show_all}>{"All Authors"}</button>
                    <div class="join">
                        <input
                            ref={search_ref}
                            type="text"
                            placeholder="Author name"
                            class="input input-bordered input-sm join-item"
                        />
                        <button class="btn btn-sm join-item" onclick={on_search}>
                            <i class="fas fa-search"></i>
                        </button>
                    </div>
                    {if auth_ctx.is_admin() {
                        html! {
                            <button class="btn btn-primary btn-sm" onclick={on_open_create}>
                                <i class="fas fa-plus"></i> {" Add Author"}
                            </button>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>

            {match &*fetch_state {
                FetchState::NotStarted => html! {},
                FetchState::Loading => html! { <LoadingSpinner /> },
                FetchState::Error(message) => html! {
                    <ErrorDisplay message={message.clone()} on_retry={Some(on_retry)} />
                },
                FetchState::Success(authors) => {
                    if authors.is_empty() {
                        html! {
                            <div class="text-center py-12">
                                <h3 class="text-lg text-base-content/60">{"No authors found"}</h3>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                {for authors.iter().map(render_author_card)}
                            </div>
                        }
                    }
                }
            }}
        </>
    }
}

fn render_author_card(author: &AuthorDto) -> Html {
    html! {
        <div key={author.id} class="card bg-base-100 shadow-sm">
            <div class="card-body items-center text-center">
                <h3 class="card-title">{&author.name}</h3>
                <div class="card-actions">
                    <Link<Route> to={Route::AuthorDetail { id: author.id }} classes="btn btn-outline btn-sm">
                        {"Details & Books"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
