use common::{ApiError, BookingReportRow, Page, ReportQuery};

use crate::api_client;

/// Fetch one page of the bookings report. The query is the single source of
/// truth: type, paging, and the extra filter keys its type declares all
/// serialize from it.
pub async fn fetch_booking_report(query: &ReportQuery) -> Result<Page<BookingReportRow>, ApiError> {
    log::trace!("Fetching booking report: {}", query.query_string());
    let result = api_client::get_with_query::<Page<BookingReportRow>>(
        "/reports/bookings",
        &query.query_params(),
    )
    .await;
    match &result {
        Ok(page) => log::info!(
            "Fetched report page {} of {} ({} rows)",
            page.number + 1,
            page.total_pages,
            page.content.len()
        ),
        Err(e) => log::error!("Failed to fetch booking report: {}", e),
    }
    result
}
