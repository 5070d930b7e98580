//! Common transport-layer types shared with the backend API.
//! These structs mirror the backend's request/response payloads so the
//! frontend can (de)serialize API traffic without duplicating shapes.
//! Field names follow the backend's camelCase wire format.

mod bookings;
mod error;
mod reports;

pub use bookings::{BookingAction, DueStatus, booking_action, due_status, fine_display, needs_attention};
pub use error::{ApiError, ErrorBody, Notify, NETWORK_ERROR_MESSAGE, report_failure};
pub use reports::{
    BookingReportRow, ExtraFilter, PaginationView, ReportQuery, ReportRowView, ReportType,
    ReportView, RequestSequence, StatusTone, build_report_view, row_view, DEFAULT_PAGE_SIZE,
    EMPTY_REPORT_MESSAGE, REPORT_HEADERS,
};

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One page of results as returned by the backend's paginated endpoints.
///
/// `number` is zero-based and, whenever `total_pages > 0`, lies in
/// `[0, total_pages)`. An empty result set may arrive either as
/// `total_pages == 0` or as `total_pages == 1` with no content; consumers
/// must treat both as empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub total_pages: u32,
}

// ===================== Auth =====================

/// Currently authenticated user, as returned by `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub admin: bool,
}

/// Registration payload (mirrors backend).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ===================== Authors =====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: i64,
    pub name: String,
    pub birthdate: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    pub name: String,
    pub birthdate: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorRequest {
    pub name: String,
    pub birthdate: NaiveDate,
}

// ===================== Books & genres =====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub year: i32,
    /// Number of copies currently on the shelf.
    pub available: i32,
    pub author_id: i64,
}

/// Book with author and genre names resolved, as returned by
/// `GET /api/books/{id}/details`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailsDto {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub available: i32,
    pub author_id: i64,
    pub author_name: String,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub title: String,
    pub year: i32,
    pub available: i32,
    pub author_id: i64,
    pub genre_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    pub title: String,
    pub year: i32,
    pub available: i32,
    pub author_id: i64,
    pub genre_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenreDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenreWithBooksDto {
    pub id: i64,
    pub name: String,
    pub books: Vec<BookDto>,
}

// ===================== Users & bookings =====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}

/// One rental booking of a user, as listed by `GET /api/users/{id}/bookings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i64,
    pub book_id: i64,
    pub book_title: String,
    pub borrowed_at: NaiveDateTime,
    pub due_at: NaiveDateTime,
    pub returned_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub fine: Decimal,
    #[serde(default)]
    pub fine_paid: bool,
}

/// Body of `POST /api/users/{id}/rent` and `POST /api/users/{id}/return`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentRequest {
    pub book_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_envelope_deserializes_from_wire_format() {
        let json = r#"{"content":[{"id":1,"name":"Jane","email":"jane@example.com","active":true}],"number":2,"totalPages":5}"#;
        let page: Page<UserDto> = serde_json::from_str(json).expect("valid page envelope");

        assert_eq!(page.number, 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].name, "Jane");
    }

    #[test]
    fn booking_deserializes_local_date_times_and_missing_fine() {
        let json = r#"{"id":7,"bookId":3,"bookTitle":"Dune","borrowedAt":"2026-07-01T10:15:30","dueAt":"2026-07-15T10:15:30","returnedAt":null}"#;
        let booking: BookingDto = serde_json::from_str(json).expect("valid booking");

        assert_eq!(booking.book_title, "Dune");
        assert!(booking.returned_at.is_none());
        assert_eq!(booking.fine, Decimal::ZERO);
        assert!(!booking.fine_paid);
    }

    #[test]
    fn create_book_request_serializes_camel_case() {
        let request = CreateBookRequest {
            title: "Dune".to_string(),
            year: 1965,
            available: 3,
            author_id: 9,
            genre_ids: vec![1, 4],
        };

        let json = serde_json::to_value(&request).expect("serializable");
        assert_eq!(json["authorId"], 9);
        assert_eq!(json["genreIds"], serde_json::json!([1, 4]));
    }
}
