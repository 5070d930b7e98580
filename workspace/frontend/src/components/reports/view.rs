use common::{
    build_report_view, report_failure, ExtraFilter, PaginationView, ReportQuery, ReportRowView,
    ReportType, ReportView, RequestSequence, StatusTone, EMPTY_REPORT_MESSAGE, REPORT_HEADERS,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api_client::reports as reports_api;
use crate::common::error::ErrorDisplay;
use crate::common::loading::LoadingSpinner;
use crate::common::toast::ToastContext;
use crate::hooks::FetchState;

const REPORT_FALLBACK: &str = "Failed to load report.";

/// Bookings report controller.
///
/// The current [`ReportQuery`] is the single source of truth: Run rebuilds
/// it at page 0 from the filter inputs, page navigation shifts only its
/// page, and every fetch serializes it as-is. Responses carry a sequence
/// token; anything but the latest issued token is discarded, so overlapping
/// fetches can never render stale data over newer state.
#[function_component(Reports)]
pub fn reports() -> Html {
    let report_type = use_state(|| ReportType::AllBookings);
    let days = use_state(|| "7".to_string());
    let min_active_books = use_state(|| "1".to_string());
    let fetch_state = use_state(FetchState::<ReportView>::default);
    let current_query = use_mut_ref(|| None::<ReportQuery>);
    let sequence = use_mut_ref(RequestSequence::default);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let load = {
        let fetch_state = fetch_state.clone();
        let current_query = current_query.clone();
        let sequence = sequence.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |query: ReportQuery| {
            let fetch_state = fetch_state.clone();
            let current_query = current_query.clone();
            let sequence = sequence.clone();
            let toast_ctx = toast_ctx.clone();

            let token = sequence.borrow_mut().issue();
            *current_query.borrow_mut() = Some(query.clone());
            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = reports_api::fetch_booking_report(&query).await;

                if !sequence.borrow().is_current(token) {
                    log::debug!("Discarding stale report response (token {})", token);
                    return;
                }

                match result {
                    Ok(page) => {
                        // The envelope's page index is authoritative.
                        *current_query.borrow_mut() =
                            Some(query.clone().with_page(page.number));
                        fetch_state.set(FetchState::Success(build_report_view(&query, &page)));
                    }
                    Err(err) => {
                        // Query state stays put so the same fetch can be retried.
                        report_failure(&toast_ctx, &err, REPORT_FALLBACK);
                        fetch_state.set(FetchState::Error(err.user_message(REPORT_FALLBACK)));
                    }
                }
            });
        })
    };

    let on_type_change = {
        let report_type = report_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(selected) = ReportType::from_param(&select.value()) {
                // Switching types only changes which filters are visible;
                // nothing is fetched until Run.
                report_type.set(selected);
            }
        })
    };

    let on_run = {
        let report_type = report_type.clone();
        let days = days.clone();
        let min_active_books = min_active_books.clone();
        let load = load.clone();

        Callback::from(move |_| {
            let mut query = ReportQuery::new(*report_type);
            query.days = days.parse().ok();
            query.min_active_books = min_active_books.parse().ok();
            load.emit(query);
        })
    };

    let on_prev = {
        let current_query = current_query.clone();
        let load = load.clone();
        Callback::from(move |_| {
            let query = current_query.borrow().clone();
            if let Some(query) = query {
                if query.page > 0 {
                    let page = query.page - 1;
                    load.emit(query.with_page(page));
                }
            }
        })
    };

    let on_next = {
        let current_query = current_query.clone();
        let load = load.clone();
        Callback::from(move |_| {
            let query = current_query.borrow().clone();
            if let Some(query) = query {
                let page = query.page + 1;
                load.emit(query.with_page(page));
            }
        })
    };

    let on_retry = {
        let current_query = current_query.clone();
        let load = load.clone();
        Callback::from(move |_| {
            let query = current_query.borrow().clone();
            if let Some(query) = query {
                load.emit(query);
            }
        })
    };

    let filter_input = |filter: ExtraFilter| -> Html {
        let (value, setter) = match filter {
            ExtraFilter::Days => (days.clone(), days.setter()),
            ExtraFilter::MinActiveBooks => {
                (min_active_books.clone(), min_active_books.setter())
            }
        };
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            setter.set(input.value());
        });

        html! {
            <div class="form-control">
                <label class="label"><span class="label-text">{filter.label()}</span></label>
                <input
                    type="number"
                    min="0"
                    class="input input-bordered input-sm w-36"
                    value={(*value).clone()}
                    {oninput}
                />
            </div>
        }
    };

    html! {
        <>
            <div class="card bg-base-100 shadow mb-6">
                <div class="card-body flex-row flex-wrap items-end gap-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Report type"}</span></label>
                        <select class="select select-bordered select-sm" onchange={on_type_change}>
                            {for ReportType::ALL.into_iter().map(|t| html! {
                                <option value={t.as_param()} selected={*report_type == t}>
                                    {t.title()}
                                </option>
                            })}
                        </select>
                    </div>

                    {for report_type.extra_filters().iter().map(|filter| filter_input(*filter))}

                    <button
                        class="btn btn-primary btn-sm"
                        disabled={fetch_state.is_loading()}
                        onclick={on_run}
                    >
                        <i class="fas fa-play"></i> {" Run Report"}
                    </button>
                </div>
            </div>

            {match &*fetch_state {
                FetchState::NotStarted => html! {
                    <div class="text-center py-8 text-base-content/60">
                        {"Choose a report type and press Run."}
                    </div>
                },
                FetchState::Loading => html! { <LoadingSpinner /> },
                FetchState::Error(message) => html! {
                    <ErrorDisplay message={message.clone()} on_retry={Some(on_retry)} />
                },
                FetchState::Success(view) => render_report(view, on_prev, on_next),
            }}
        </>
    }
}

fn render_report(view: &ReportView, on_prev: Callback<MouseEvent>, on_next: Callback<MouseEvent>) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{&view.title}</h2>
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                {for REPORT_HEADERS.iter().map(|header| html! { <th>{*header}</th> })}
                            </tr>
                        </thead>
                        <tbody>
                            {if view.rows.is_empty() {
                                html! {
                                    <tr>
                                        <td colspan={REPORT_HEADERS.len().to_string()} class="text-center py-8 text-base-content/60">
                                            {EMPTY_REPORT_MESSAGE}
                                        </td>
                                    </tr>
                                }
                            } else {
                                html! { for view.rows.iter().map(render_row) }
                            }}
                        </tbody>
                    </table>
                </div>
                {match &view.pagination {
                    Some(pagination) => render_pagination(pagination, on_prev, on_next),
                    None => html! {},
                }}
            </div>
        </div>
    }
}

fn highlight(flag: bool) -> Classes {
    if flag {
        classes!("text-error", "font-semibold")
    } else {
        classes!()
    }
}

fn render_row(row: &ReportRowView) -> Html {
    let badge_class = match row.status_tone {
        StatusTone::Success => "badge-success",
        StatusTone::Info => "badge-info",
        StatusTone::Danger => "badge-error",
    };

    html! {
        <tr>
            <td>{&row.user_name}</td>
            <td>{&row.user_email}</td>
            <td>{&row.book_title}</td>
            <td>{&row.borrowed}</td>
            <td>{&row.returned}</td>
            <td class={highlight(row.overdue_highlight)}>{&row.overdue}</td>
            <td class={highlight(row.fine_highlight)}>{&row.fine}</td>
            <td class={highlight(row.fine_paid_highlight)}>{&row.fine_paid}</td>
            <td><span class={classes!("badge", badge_class)}>{&row.status_text}</span></td>
        </tr>
    }
}

fn render_pagination(
    pagination: &PaginationView,
    on_prev: Callback<MouseEvent>,
    on_next: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="flex justify-center items-center gap-2 my-2">
            <button class="btn btn-sm" disabled={pagination.prev_disabled} onclick={on_prev}>
                <i class="fas fa-chevron-left"></i>
            </button>
            <span class="text-sm text-base-content/70">{&pagination.label}</span>
            <button class="btn btn-sm" disabled={pagination.next_disabled} onclick={on_next}>
                <i class="fas fa-chevron-right"></i>
            </button>
        </div>
    }
}
