use common::{booking_action, due_status, fine_display, BookingAction, BookingDto, DueStatus};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct BookingsTableProps {
    pub bookings: Vec<BookingDto>,
    /// Emits the book ID of the booking to return.
    pub on_return: Callback<i64>,
    /// Emits the booking ID whose fine is to be paid.
    pub on_pay: Callback<i64>,
}

#[function_component(BookingsTable)]
pub fn bookings_table(props: &BookingsTableProps) -> Html {
    let today = chrono::Local::now().date_naive();

    html! {
        <div class="overflow-x-auto bg-base-100 shadow rounded-box">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"Book"}</th>
                        <th>{"Borrowed"}</th>
                        <th>{"Due Date"}</th>
                        <th>{"Returned"}</th>
                        <th>{"Fine"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if props.bookings.is_empty() {
                        html! {
                            <tr>
                                <td colspan="6" class="text-center py-8 text-base-content/60">
                                    {"No records found."}
                                </td>
                            </tr>
                        }
                    } else {
                        html! {
                            for props.bookings.iter().map(|booking| {
                                render_booking_row(booking, today, &props.on_return, &props.on_pay)
                            })
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn render_booking_row(
    booking: &BookingDto,
    today: chrono::NaiveDate,
    on_return: &Callback<i64>,
    on_pay: &Callback<i64>,
) -> Html {
    let due_class = match due_status(booking.due_at, today, booking.returned_at.is_some()) {
        DueStatus::Overdue => classes!("text-error", "font-semibold"),
        DueStatus::NearDue => classes!("text-warning", "font-semibold"),
        DueStatus::OnTrack => classes!(),
    };

    let returned = booking
        .returned_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    let fine = match fine_display(booking.fine) {
        Some(amount) => html! { <span class="text-error font-bold">{amount}</span> },
        None => html! { "-" },
    };

    let action = match booking_action(booking) {
        Some(BookingAction::Return) => {
            let on_return = on_return.clone();
            let book_id = booking.book_id;
            html! {
                <button
                    class="btn btn-warning btn-sm"
                    onclick={Callback::from(move |_| on_return.emit(book_id))}
                >
                    {"Return"}
                </button>
            }
        }
        Some(BookingAction::PayFine) => {
            let on_pay = on_pay.clone();
            let booking_id = booking.id;
            html! {
                <button
                    class="btn btn-error btn-sm"
                    onclick={Callback::from(move |_| on_pay.emit(booking_id))}
                >
                    {"Pay Fine"}
                </button>
            }
        }
        None => html! {},
    };

    html! {
        <tr key={booking.id}>
            <td>
                <Link<Route> to={Route::BookDetail { id: booking.book_id }} classes="link link-primary">
                    {&booking.book_title}
                </Link<Route>>
            </td>
            <td>{booking.borrowed_at.format("%Y-%m-%d").to_string()}</td>
            <td class={due_class}>{booking.due_at.format("%Y-%m-%d").to_string()}</td>
            <td>{returned}</td>
            <td>{fine}</td>
            <td>{action}</td>
        </tr>
    }
}
