//! Display rules for a user's booking list: due-date urgency, fine
//! formatting, and which action a row offers.

use chrono::{Days, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::BookingDto;

/// How close to (or past) its due date an open booking is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    OnTrack,
    /// Due within the next three days.
    NearDue,
    Overdue,
}

pub fn due_status(due_at: NaiveDateTime, today: NaiveDate, returned: bool) -> DueStatus {
    if returned {
        return DueStatus::OnTrack;
    }

    let due = due_at.date();
    if due < today {
        DueStatus::Overdue
    } else if due <= today.checked_add_days(Days::new(3)).unwrap_or(today) {
        DueStatus::NearDue
    } else {
        DueStatus::OnTrack
    }
}

/// The single action a booking row offers, if any: open bookings can be
/// returned, returned ones with an outstanding fine can be paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Return,
    PayFine,
}

pub fn booking_action(booking: &BookingDto) -> Option<BookingAction> {
    if booking.returned_at.is_none() {
        Some(BookingAction::Return)
    } else if booking.fine > Decimal::ZERO && !booking.fine_paid {
        Some(BookingAction::PayFine)
    } else {
        None
    }
}

/// Two-decimal currency display for a positive fine, `None` otherwise.
pub fn fine_display(fine: Decimal) -> Option<String> {
    (fine > Decimal::ZERO).then(|| format!("${fine:.2}"))
}

/// The "borrowed books" sidebar filter: open bookings plus returned ones
/// that still carry an unpaid fine.
pub fn needs_attention(booking: &BookingDto) -> bool {
    booking.returned_at.is_none() || (booking.fine > Decimal::ZERO && !booking.fine_paid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn at_noon(day: NaiveDate) -> NaiveDateTime {
        day.and_hms_opt(12, 0, 0).unwrap()
    }

    fn booking(returned: bool, fine: Decimal, fine_paid: bool) -> BookingDto {
        BookingDto {
            id: 1,
            book_id: 2,
            book_title: "Dune".to_string(),
            borrowed_at: at_noon(date(2026, 7, 1)),
            due_at: at_noon(date(2026, 7, 15)),
            returned_at: returned.then(|| at_noon(date(2026, 7, 10))),
            fine,
            fine_paid,
        }
    }

    #[test]
    fn due_status_ignores_returned_bookings() {
        let today = date(2026, 8, 1);
        assert_eq!(
            due_status(at_noon(date(2026, 7, 15)), today, true),
            DueStatus::OnTrack
        );
    }

    #[test]
    fn due_status_tracks_overdue_and_near_due_windows() {
        let today = date(2026, 8, 1);

        assert_eq!(
            due_status(at_noon(date(2026, 7, 31)), today, false),
            DueStatus::Overdue
        );
        assert_eq!(
            due_status(at_noon(date(2026, 8, 1)), today, false),
            DueStatus::NearDue
        );
        assert_eq!(
            due_status(at_noon(date(2026, 8, 4)), today, false),
            DueStatus::NearDue
        );
        assert_eq!(
            due_status(at_noon(date(2026, 8, 5)), today, false),
            DueStatus::OnTrack
        );
    }

    #[test]
    fn open_booking_offers_return() {
        assert_eq!(
            booking_action(&booking(false, Decimal::ZERO, false)),
            Some(BookingAction::Return)
        );
    }

    #[test]
    fn returned_booking_with_unpaid_fine_offers_payment() {
        assert_eq!(
            booking_action(&booking(true, Decimal::new(250, 2), false)),
            Some(BookingAction::PayFine)
        );
        assert_eq!(booking_action(&booking(true, Decimal::new(250, 2), true)), None);
        assert_eq!(booking_action(&booking(true, Decimal::ZERO, false)), None);
    }

    #[test]
    fn fine_display_formats_two_decimals() {
        assert_eq!(fine_display(Decimal::new(125, 1)), Some("$12.50".to_string()));
        assert_eq!(fine_display(Decimal::ZERO), None);
    }

    #[test]
    fn borrowed_filter_keeps_open_and_unpaid_fine_rows() {
        assert!(needs_attention(&booking(false, Decimal::ZERO, false)));
        assert!(needs_attention(&booking(true, Decimal::new(100, 2), false)));
        assert!(!needs_attention(&booking(true, Decimal::new(100, 2), true)));
        assert!(!needs_attention(&booking(true, Decimal::ZERO, false)));
    }
}
