//! Report view-state core: the query driving one bookings-report fetch and
//! the pure render model for the resulting table. Components stay thin
//! adapters over these functions, so the rendering rules are testable
//! without a browser.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Page;

/// Page size requested from the reporting endpoint.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Fixed column schema of the bookings report table.
pub const REPORT_HEADERS: [&str; 9] = [
    "User", "Email", "Book", "Borrowed", "Returned", "Overdue", "Fine", "Fine Paid", "Status",
];

/// Shown as a single full-width row when a report page has no content.
pub const EMPTY_REPORT_MESSAGE: &str = "No records found for this report.";

/// One row of the bookings report, as returned by
/// `GET /api/reports/bookings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingReportRow {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub book_title: Option<String>,
    pub borrowed_at: NaiveDateTime,
    pub returned_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub overdue_days: i64,
    #[serde(default)]
    pub fine: Decimal,
    #[serde(default)]
    pub fine_paid: bool,
}

/// Extra filter input a report type requires beyond paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraFilter {
    Days,
    MinActiveBooks,
}

impl ExtraFilter {
    /// Query-parameter key on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::MinActiveBooks => "minActiveBooks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Days => "Due within days",
            Self::MinActiveBooks => "Minimum active books",
        }
    }
}

/// Report flavors offered by the reporting endpoint. Each declares its own
/// extra filter fields statically; the controller shows exactly those inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    AllBookings,
    ActiveBookings,
    Overdue,
    DueSoon,
    HeavyUsers,
}

impl ReportType {
    pub const ALL: [ReportType; 5] = [
        Self::AllBookings,
        Self::ActiveBookings,
        Self::Overdue,
        Self::DueSoon,
        Self::HeavyUsers,
    ];

    /// Value of the `type` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::AllBookings => "ALL_BOOKINGS",
            Self::ActiveBookings => "ACTIVE_BOOKINGS",
            Self::Overdue => "OVERDUE",
            Self::DueSoon => "DUE_SOON",
            Self::HeavyUsers => "HEAVY_USERS",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_param() == value)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::AllBookings => "All Bookings",
            Self::ActiveBookings => "Active Bookings",
            Self::Overdue => "Overdue Bookings",
            Self::DueSoon => "Due Soon",
            Self::HeavyUsers => "Heavy Users",
        }
    }

    pub fn extra_filters(self) -> &'static [ExtraFilter] {
        match self {
            Self::DueSoon => &[ExtraFilter::Days],
            Self::HeavyUsers => &[ExtraFilter::MinActiveBooks],
            _ => &[],
        }
    }
}

/// Filter + pagination parameters driving one report fetch. Single source of
/// truth for the report view: every fetch serializes the current value, and
/// nothing else feeds the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub report_type: ReportType,
    pub page: u32,
    pub page_size: u32,
    pub days: Option<u32>,
    pub min_active_books: Option<u32>,
}

impl ReportQuery {
    pub fn new(report_type: ReportType) -> Self {
        Self {
            report_type,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            days: None,
            min_active_books: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Query parameters for the reporting endpoint: `type`, `page`, `size`,
    /// plus the extra filter keys the report type declares. Filters not
    /// declared by the current type are never emitted, even if set.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("type", self.report_type.as_param().to_string()),
            ("page", self.page.to_string()),
            ("size", self.page_size.to_string()),
        ];

        for filter in self.report_type.extra_filters() {
            let value = match filter {
                ExtraFilter::Days => self.days,
                ExtraFilter::MinActiveBooks => self.min_active_books,
            };
            if let Some(value) = value {
                params.push((filter.key(), value.to_string()));
            }
        }

        params
    }

    pub fn query_string(&self) -> String {
        self.query_params()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Monotonic sequence of issued requests for one controller instance.
/// Overlapping fetches are not cancelled; a response is applied only when
/// its token is still the latest issued, so stale arrivals never overwrite
/// newer state.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

/// Badge tone of the composite status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Info,
    Danger,
}

/// Display-ready projection of one report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRowView {
    pub user_name: String,
    pub user_email: String,
    pub book_title: String,
    pub borrowed: String,
    pub returned: String,
    pub overdue: String,
    pub overdue_highlight: bool,
    pub fine: String,
    pub fine_highlight: bool,
    pub fine_paid: String,
    pub fine_paid_highlight: bool,
    pub status_text: String,
    pub status_tone: StatusTone,
}

/// Pagination strip state after a successful load. `number`/`total_pages`
/// come verbatim from the response envelope; nothing is recomputed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub label: String,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Everything the report table renders for one loaded page. `pagination` is
/// `None` for an empty page: the controls are hidden outright, not disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub title: String,
    pub rows: Vec<ReportRowView>,
    pub pagination: Option<PaginationView>,
}

fn display_date(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d").to_string()
}

fn display_name(value: &Option<String>) -> String {
    match value {
        Some(name) if !name.is_empty() => name.clone(),
        _ => "N/A".to_string(),
    }
}

/// Projects one wire row into its display form, applying the exact rules of
/// the report table: dashes for zero overdue/fine, two-decimal currency,
/// Yes/No fine-paid only when a fine exists, and the composite status.
pub fn row_view(row: &BookingReportRow) -> ReportRowView {
    let is_returned = row.returned_at.is_some();
    let is_overdue = row.overdue_days > 0;
    let has_fine = row.fine > Decimal::ZERO;

    let overdue = if is_overdue {
        format!("{} days", row.overdue_days)
    } else {
        "-".to_string()
    };

    let fine = if has_fine {
        format!("${:.2}", row.fine)
    } else {
        "-".to_string()
    };

    let fine_paid = if has_fine {
        if row.fine_paid { "Yes" } else { "No" }
    } else {
        "-"
    };

    let mut status_text = if is_returned { "Returned" } else { "Active" }.to_string();
    let mut status_tone = if is_returned {
        StatusTone::Success
    } else {
        StatusTone::Info
    };

    if is_overdue {
        status_text.push_str(", Overdue");
        if has_fine && !row.fine_paid {
            status_tone = StatusTone::Danger;
        }
    }

    if has_fine {
        status_text.push_str(if row.fine_paid {
            ", Fine Paid"
        } else {
            ", Unpaid Fine"
        });
    }

    ReportRowView {
        user_name: display_name(&row.user_name),
        user_email: display_name(&row.user_email),
        book_title: display_name(&row.book_title),
        borrowed: display_date(row.borrowed_at),
        returned: row.returned_at.map(display_date).unwrap_or_else(|| "-".to_string()),
        overdue,
        overdue_highlight: is_overdue,
        fine,
        fine_highlight: has_fine,
        fine_paid: fine_paid.to_string(),
        fine_paid_highlight: fine_paid == "No",
        status_text,
        status_tone,
    }
}

/// Maps one loaded page to its full render model. Pure: identical inputs
/// always yield an identical view.
pub fn build_report_view(query: &ReportQuery, page: &Page<BookingReportRow>) -> ReportView {
    let title = format!("{} Report", query.report_type.title());

    if page.content.is_empty() {
        return ReportView {
            title,
            rows: Vec::new(),
            pagination: None,
        };
    }

    let rows = page.content.iter().map(row_view).collect();
    let pagination = Some(PaginationView {
        label: format!("Page {} of {}", page.number + 1, page.total_pages),
        prev_disabled: page.number == 0,
        next_disabled: page.number + 1 >= page.total_pages,
    });

    ReportView {
        title,
        rows,
        pagination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn base_row() -> BookingReportRow {
        BookingReportRow {
            user_name: Some("Jane Reader".to_string()),
            user_email: Some("jane@example.com".to_string()),
            book_title: Some("Dune".to_string()),
            borrowed_at: timestamp(2026, 7, 1),
            returned_at: None,
            overdue_days: 0,
            fine: Decimal::ZERO,
            fine_paid: false,
        }
    }

    fn page_of(rows: Vec<BookingReportRow>, number: u32, total_pages: u32) -> Page<BookingReportRow> {
        Page {
            content: rows,
            number,
            total_pages,
        }
    }

    #[test]
    fn zero_overdue_days_renders_dash_without_highlight() {
        let view = row_view(&base_row());

        assert_eq!(view.overdue, "-");
        assert!(!view.overdue_highlight);
    }

    #[test]
    fn positive_overdue_days_render_with_unit() {
        let mut row = base_row();
        row.overdue_days = 5;

        let view = row_view(&row);
        assert_eq!(view.overdue, "5 days");
        assert!(view.overdue_highlight);
    }

    #[test]
    fn zero_fine_renders_dashes_for_fine_and_fine_paid() {
        let view = row_view(&base_row());

        assert_eq!(view.fine, "-");
        assert_eq!(view.fine_paid, "-");
        assert!(!view.fine_highlight);
        assert!(!view.fine_paid_highlight);
    }

    #[test]
    fn positive_fine_renders_currency_and_yes_no() {
        let mut row = base_row();
        row.fine = Decimal::new(1250, 2);

        let unpaid = row_view(&row);
        assert_eq!(unpaid.fine, "$12.50");
        assert_eq!(unpaid.fine_paid, "No");
        assert!(unpaid.fine_paid_highlight);

        row.fine_paid = true;
        let paid = row_view(&row);
        assert_eq!(paid.fine_paid, "Yes");
        assert!(!paid.fine_paid_highlight);
    }

    #[test]
    fn active_overdue_unpaid_fine_composes_danger_status() {
        let mut row = base_row();
        row.overdue_days = 5;
        row.fine = Decimal::new(1250, 2);
        row.fine_paid = false;

        let view = row_view(&row);
        assert_eq!(view.status_text, "Active, Overdue, Unpaid Fine");
        assert_eq!(view.status_tone, StatusTone::Danger);
    }

    #[test]
    fn clean_return_is_exactly_returned_with_success_tone() {
        let mut row = base_row();
        row.returned_at = Some(timestamp(2026, 7, 20));

        let view = row_view(&row);
        assert_eq!(view.status_text, "Returned");
        assert_eq!(view.status_tone, StatusTone::Success);
    }

    #[test]
    fn returned_with_paid_fine_keeps_success_tone() {
        let mut row = base_row();
        row.returned_at = Some(timestamp(2026, 7, 20));
        row.overdue_days = 2;
        row.fine = Decimal::new(3, 0);
        row.fine_paid = true;

        let view = row_view(&row);
        assert_eq!(view.status_text, "Returned, Overdue, Fine Paid");
        assert_eq!(view.status_tone, StatusTone::Success);
    }

    #[test]
    fn missing_identity_fields_render_as_na() {
        let mut row = base_row();
        row.user_name = None;
        row.user_email = Some(String::new());
        row.book_title = None;

        let view = row_view(&row);
        assert_eq!(view.user_name, "N/A");
        assert_eq!(view.user_email, "N/A");
        assert_eq!(view.book_title, "N/A");
    }

    #[test]
    fn pagination_disables_prev_on_first_and_next_on_last_page() {
        let query = ReportQuery::new(ReportType::AllBookings);

        let first = build_report_view(&query, &page_of(vec![base_row()], 0, 3));
        let pagination = first.pagination.expect("pagination visible");
        assert_eq!(pagination.label, "Page 1 of 3");
        assert!(pagination.prev_disabled);
        assert!(!pagination.next_disabled);

        let last = build_report_view(&query, &page_of(vec![base_row()], 2, 3));
        let pagination = last.pagination.expect("pagination visible");
        assert_eq!(pagination.label, "Page 3 of 3");
        assert!(!pagination.prev_disabled);
        assert!(pagination.next_disabled);
    }

    #[test]
    fn empty_page_hides_pagination_for_both_server_conventions() {
        let query = ReportQuery::new(ReportType::Overdue);

        for total_pages in [0, 1] {
            let view = build_report_view(&query, &page_of(Vec::new(), 0, total_pages));
            assert!(view.rows.is_empty());
            assert!(view.pagination.is_none());
        }
    }

    #[test]
    fn identical_query_and_page_produce_identical_views() {
        let query = ReportQuery::new(ReportType::AllBookings).with_page(1);
        let page = page_of(vec![base_row()], 1, 4);

        assert_eq!(
            build_report_view(&query, &page),
            build_report_view(&query, &page)
        );
    }

    #[test]
    fn due_soon_query_serializes_declared_filter_keys() {
        let mut query = ReportQuery::new(ReportType::DueSoon).with_page(1);
        query.days = Some(7);

        let params = query.query_params();
        assert!(params.contains(&("type", "DUE_SOON".to_string())));
        assert!(params.contains(&("page", "1".to_string())));
        assert!(params.contains(&("size", "10".to_string())));
        assert!(params.contains(&("days", "7".to_string())));
    }

    #[test]
    fn undeclared_filters_are_never_emitted() {
        let mut query = ReportQuery::new(ReportType::AllBookings);
        query.days = Some(7);
        query.min_active_books = Some(2);

        let keys: Vec<_> = query.query_params().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["type", "page", "size"]);
    }

    #[test]
    fn report_type_round_trips_through_its_param() {
        for report_type in ReportType::ALL {
            assert_eq!(ReportType::from_param(report_type.as_param()), Some(report_type));
        }
        assert_eq!(ReportType::from_param("UNKNOWN"), None);
    }

    #[test]
    fn stale_request_tokens_are_not_current() {
        let mut sequence = RequestSequence::default();

        let first = sequence.issue();
        assert!(sequence.is_current(first));

        let second = sequence.issue();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }
}
