use common::{report_failure, BookDto, GenreDto, GenreWithBooksDto};
use serde::{Deserialize, Serialize};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use super::book_modal::BookModal;
use crate::api_client::books::{self, BookFilter};
use crate::api_client::genres;
use crate::common::auth::AuthContext;
use crate::common::error::ErrorDisplay;
use crate::common::loading::LoadingSpinner;
use crate::common::toast::ToastContext;
use crate::hooks::FetchState;
use crate::router::Route;

const CATALOG_FALLBACK: &str = "Failed to load books.";

/// Deep-link query parameters of the catalog route, e.g.
/// `/books?authorName=Frank+Herbert` from an author's detail page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_name: Option<String>,
}

/// What the catalog is currently showing.
#[derive(Debug, Clone, PartialEq)]
enum CatalogQuery {
    Filtered(BookFilter),
    Genre(String),
    Grouped,
    GenreList,
}

impl CatalogQuery {
    fn title(&self) -> String {
        match self {
            Self::Filtered(BookFilter::All) => "All Books".to_string(),
            Self::Filtered(BookFilter::Available) => "Available Books".to_string(),
            Self::Filtered(BookFilter::Title(title)) => format!("Filtered by Title: {title}"),
            Self::Filtered(BookFilter::Year(year)) => format!("Filtered by Year: {year}"),
            Self::Filtered(BookFilter::AuthorName(name)) => format!("Books by {name}"),
            Self::Genre(name) => format!("Books for Genre: {name}"),
            Self::Grouped => "Books Grouped by Genre".to_string(),
            Self::GenreList => "Available Genres".to_string(),
        }
    }
}

#[derive(Clone, PartialEq)]
enum CatalogData {
    Books(Vec<BookDto>),
    Grouped(Vec<GenreWithBooksDto>),
    Genres(Vec<GenreDto>),
}

#[function_component(BookCatalog)]
pub fn book_catalog() -> Html {
    let query = use_state(|| CatalogQuery::Filtered(BookFilter::All));
    let fetch_state = use_state(FetchState::<CatalogData>::default);
    let show_create = use_state(|| false);
    let search_field_ref = use_node_ref();
    let search_input_ref = use_node_ref();
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let auth_ctx = use_context::<AuthContext>().unwrap();
    let navigator = use_navigator().unwrap();
    let location = use_location();

    let load = {
        let query_state = query.clone();
        let fetch_state = fetch_state.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |query: CatalogQuery| {
            let query_state = query_state.clone();
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();

            query_state.set(query.clone());
            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = match &query {
                    CatalogQuery::Filtered(filter) => {
                        books::list(filter).await.map(CatalogData::Books)
                    }
                    CatalogQuery::Genre(name) => {
                        genres::books_by_name(name).await.map(CatalogData::Books)
                    }
                    CatalogQuery::Grouped => {
                        genres::with_books().await.map(CatalogData::Grouped)
                    }
                    CatalogQuery::GenreList => genres::list().await.map(CatalogData::Genres),
                };
                match result {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        report_failure(&toast_ctx, &err, CATALOG_FALLBACK);
                        fetch_state.set(FetchState::Error(err.user_message(CATALOG_FALLBACK)));
                    }
                }
            });
        })
    };

    // Initial load honors deep-link parameters from the location query.
    {
        let load = load.clone();
        let params = location
            .as_ref()
            .and_then(|location| location.query::<CatalogParams>().ok())
            .unwrap_or_default();
        use_effect_with((), move |_| {
            let initial = if let Some(name) = params.author_name {
                CatalogQuery::Filtered(BookFilter::AuthorName(name))
            } else if let Some(name) = params.genre_name {
                CatalogQuery::Genre(name)
            } else {
                CatalogQuery::Filtered(BookFilter::All)
            };
            load.emit(initial);
            || ()
        });
    }

    let on_rent = {
        let toast_ctx = toast_ctx.clone();
        let auth_ctx = auth_ctx.clone();
        let navigator = navigator.clone();

        Callback::from(move |book_id: i64| {
            let toast_ctx = toast_ctx.clone();
            let navigator = navigator.clone();

            let Some(user) = auth_ctx.user.clone() else {
                navigator.push(&Route::Login);
                return;
            };

            wasm_bindgen_futures::spawn_local(async move {
                match books::rent(user.id, book_id).await {
                    Ok(()) => {
                        toast_ctx.show_success("Book rented successfully!".to_string());
                    }
                    Err(err) => {
                        report_failure(&toast_ctx, &err, "Check your fines or overdue books.");
                    }
                }
                // Either way, land on the profile's bookings list.
                navigator.push(&Route::UserDetail { id: user.id });
            });
        })
    };

    let on_view_genre = {
        let load = load.clone();
        Callback::from(move |name: String| load.emit(CatalogQuery::Genre(name)))
    };

    let on_search = {
        let load = load.clone();
        let search_field_ref = search_field_ref.clone();
        let search_input_ref = search_input_ref.clone();

        Callback::from(move |_| {
            let Some(field) = search_field_ref.cast::<HtmlSelectElement>() else {
                return;
            };
            let Some(input) = search_input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let value = input.value().trim().to_string();
            if value.is_empty() {
                return;
            }

            let filter = match field.value().as_str() {
                "year" => match value.parse::<i32>() {
                    Ok(year) => BookFilter::Year(year),
                    Err(_) => return,
                },
                "author" => BookFilter::AuthorName(value),
                _ => BookFilter::Title(value),
            };
            load.emit(CatalogQuery::Filtered(filter));
        })
    };

    let load_filtered = |filter: BookFilter| {
        let load = load.clone();
        Callback::from(move |_| load.emit(CatalogQuery::Filtered(filter.clone())))
    };

    let load_query = |query: CatalogQuery| {
        let load = load.clone();
        Callback::from(move |_| load.emit(query.clone()))
    };

    let on_retry = {
        let load = load.clone();
        let query = query.clone();
        Callback::from(move |_| load.emit((*query).clone()))
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
        Callback::from(move |_| load.emit(CatalogQuery::Filtered(BookFilter::All)))
    };

    html! {
        <>
            <BookModal
                show={*show_create}
                on_close={on_close_create}
                on_success={on_created}
            />

            <div class="flex flex-wrap justify-between items-center gap-2 mb-4">
                <h2 class="text-xl font-bold">{query.title()}</h2>
                <div class="flex flex-wrap gap-2">
                    <button class="btn btn-ghost btn-sm" onclick={load_filtered(BookFilter::All)}>
                        {"All"}
                    </button>
                    <button class="btn btn-ghost btn-sm" onclick={load_filtered(BookFilter::Available)}>
                        {"Available"}
                    </button>
                    <button class="btn btn-ghost btn-sm" onclick={load_query(CatalogQuery::Grouped)}>
                        {"By Genre"}
                    </button>
                    <button class="btn btn-ghost btn-sm" onclick={load_query(CatalogQuery::GenreList)}>
                        {"Genres"}
                    </button>
                    <div class="join">
                        <select ref={search_field_ref} class="select select-bordered select-sm join-item">
                            <option value="title" selected={true}>{"Title"}</option>
                            <option value="year">{"Year"}</option>
                            <option value="author">{"Author"}</option>
                        </select>
                        <input
                            ref={search_input_ref}
                            type="text"
                            placeholder="Search"
                            class="input input-bordered input-sm join-item"
                        />
                        <button class="btn btn-sm join-item" onclick={on_search}>
                            <i class="fas fa-search"></i>
                        </button>
                    </div>
                    {if auth_ctx.is_admin() {
                        html! {
                            <button class="btn btn-primary btn-sm" onclick={on_open_create}>
                                <i class="fas fa-plus"></i> {" Add Book"}
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
                FetchState::Success(data) => render_catalog(
                    data,
                    &auth_ctx,
                    on_rent,
                    on_view_genre,
                ),
            }}
        </>
    }
}

fn render_catalog(
    data: &CatalogData,
    auth_ctx: &AuthContext,
    on_rent: Callback<i64>,
    on_view_genre: Callback<String>,
) -> Html {
    match data {
        CatalogData::Books(books) => {
            if books.is_empty() {
                html! {
                    <div class="text-center py-12">
                        <h3 class="text-lg text-base-content/60">{"No books found matching criteria"}</h3>
                    </div>
                }
            } else {
                html! {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {for books.iter().map(|book| render_book_card(book, auth_ctx, &on_rent))}
                    </div>
                }
            }
        }
        CatalogData::Grouped(genres) => html! {
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {for genres
                    .iter()
                    .filter(|genre| !genre.books.is_empty())
                    .map(|genre| render_genre_section(genre, &on_view_genre))}
            </div>
        },
        CatalogData::Genres(genres) => html! {
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {for genres.iter().map(|genre| {
                    let on_view = {
                        let on_view_genre = on_view_genre.clone();
                        let name = genre.name.clone();
                        Callback::from(move |_| on_view_genre.emit(name.clone()))
                    };
                    html! {
                        <div key={genre.id} class="card bg-base-100 shadow-sm">
                            <div class="card-body items-center text-center">
                                <h3 class="card-title">{&genre.name}</h3>
                                <button class="btn btn-primary btn-sm" onclick={on_view}>
                                    {"View Books"}
                                </button>
                            </div>
                        </div>
                    }
                })}
            </div>
        },
    }
}

fn render_book_card(book: &BookDto, auth_ctx: &AuthContext, on_rent: &Callback<i64>) -> Html {
    let is_available = book.available > 0;
    let badge_class = if is_available { "badge-success" } else { "badge-error" };
    let availability = if auth_ctx.is_admin() {
        book.available.to_string()
    } else if is_available {
        "Yes".to_string()
    } else {
        "No".to_string()
    };

    let rent_action = if is_available {
        if auth_ctx.is_authenticated() {
            let on_rent = on_rent.clone();
            let book_id = book.id;
            html! {
                <button class="btn btn-primary btn-sm" onclick={Callback::from(move |_| on_rent.emit(book_id))}>
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
    };

    html! {
        <div key={book.id} class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <h3 class="card-title">{&book.title}</h3>
                <p>
                    <span class="font-semibold">{"Year: "}</span>{book.year}<br />
                    <span class="font-semibold">{"Available: "}</span>
                    <span class={classes!("badge", badge_class)}>{availability}</span>
                </p>
                <div class="card-actions justify-end">
                    <Link<Route> to={Route::BookDetail { id: book.id }} classes="btn btn-outline btn-sm">
                        {"Details"}
                    </Link<Route>>
                    {rent_action}
                </div>
            </div>
        </div>
    }
}

fn render_genre_section(genre: &GenreWithBooksDto, on_view_genre: &Callback<String>) -> Html {
    const MAX_DISPLAY: usize = 6;
    let displayed = &genre.books[..genre.books.len().min(MAX_DISPLAY)];
    let remaining = genre.books.len().saturating_sub(MAX_DISPLAY);

    let on_view = {
        let on_view_genre = on_view_genre.clone();
        let name = genre.name.clone();
        Callback::from(move |_| on_view_genre.emit(name.clone()))
    };

    html! {
        <div key={genre.id} class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <h3 class="card-title">
                    <button class="link link-primary" onclick={on_view}>{&genre.name}</button>
                </h3>
                <ul class="list-none space-y-1">
                    {for displayed.iter().map(|book| html! {
                        <li key={book.id} class="truncate">
                            <Link<Route> to={Route::BookDetail { id: book.id }} classes="link link-hover text-sm">
                                {format!("• {}", book.title)}
                            </Link<Route>>
                        </li>
                    })}
                    {if remaining > 0 {
                        html! {
                            <li class="text-sm text-base-content/60">
                                {format!("... and {remaining} more")}
                            </li>
                        }
                    } else {
                        html! {}
                    }}
                </ul>
            </div>
        </div>
    }
}
