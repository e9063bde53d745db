//! Table Projection
//!
//! Derives the visible table from the store: search, status filter, sort,
//! then one formatted row per record. Pure, so it is re-run on every change.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{StudentId, StudentRecord};

/// Fee status filter select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Paid,
    Unpaid,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Paid,
        StatusFilter::Unpaid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Paid => "paid",
            StatusFilter::Unpaid => "unpaid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Paid => "Paid",
            StatusFilter::Unpaid => "Unpaid",
        }
    }

    pub fn matches(&self, fee_paid: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Paid => fee_paid,
            StatusFilter::Unpaid => !fee_paid,
        }
    }
}

/// Select values; anything unknown falls back to `All`
impl FromStr for StatusFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "paid" => StatusFilter::Paid,
            "unpaid" => StatusFilter::Unpaid,
            _ => StatusFilter::All,
        })
    }
}

/// Sortable table columns, named after the wire fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Name,
    RoomNumber,
    MobileNumber,
    FeeAmount,
    FeePaid,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Name,
        SortColumn::RoomNumber,
        SortColumn::MobileNumber,
        SortColumn::FeeAmount,
        SortColumn::FeePaid,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::RoomNumber => "roomNumber",
            SortColumn::MobileNumber => "mobileNumber",
            SortColumn::FeeAmount => "feeAmount",
            SortColumn::FeePaid => "feePaid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::RoomNumber => "Room No",
            SortColumn::MobileNumber => "Mobile No",
            SortColumn::FeeAmount => "Fee Amount",
            SortColumn::FeePaid => "Fee Status",
        }
    }

    fn compare(&self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        match self {
            SortColumn::FeeAmount => a.fee_amount.total_cmp(&b.fee_amount),
            SortColumn::FeePaid => u8::from(a.fee_paid).cmp(&u8::from(b.fee_paid)),
            SortColumn::Name => compare_text(&a.name, &b.name),
            SortColumn::RoomNumber => compare_text(&a.room_number, &b.room_number),
            SortColumn::MobileNumber => compare_text(&a.mobile_number, &b.mobile_number),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Active sort column (at most one) and its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    column: Option<SortColumn>,
    direction: SortDirection,
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            column: Some(column),
            direction,
        }
    }

    pub fn column(&self) -> Option<SortColumn> {
        self.column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Header click: flip direction on the active column, otherwise
    /// activate the clicked column ascending.
    pub fn click(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Asc;
        }
    }

    /// "asc"/"desc" for the highlighted header, "" for the rest
    pub fn header_class(&self, column: SortColumn) -> &'static str {
        if self.column == Some(column) {
            self.direction.as_str()
        } else {
            ""
        }
    }

    pub fn header_icon(&self, column: SortColumn) -> &'static str {
        match (self.column == Some(column), self.direction) {
            (true, SortDirection::Asc) => "fas fa-sort-up",
            (true, SortDirection::Desc) => "fas fa-sort-down",
            (false, _) => "fas fa-sort",
        }
    }

    fn compare(&self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        let Some(column) = self.column else {
            return Ordering::Equal;
        };
        let ordering = column.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Search text, status filter and sort: everything the table derives from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub search_text: String,
    pub status_filter: StatusFilter,
    pub sort: SortState,
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ViewRow {
    /// 1-based display position
    pub index: usize,
    pub id: StudentId,
    pub name: String,
    pub room_number: String,
    pub mobile_number: String,
    pub fee_display: String,
    pub fee_paid: bool,
}

impl ViewRow {
    pub fn badge_label(&self) -> &'static str {
        if self.fee_paid {
            "Paid"
        } else {
            "Unpaid"
        }
    }

    pub fn badge_class(&self) -> &'static str {
        if self.fee_paid {
            "badge-paid"
        } else {
            "badge-unpaid"
        }
    }
}

/// Case-insensitive substring match on name, room number or mobile number.
/// `needle` must already be lowercased.
fn matches_search(record: &StudentRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.room_number.to_lowercase().contains(needle)
        || record.mobile_number.to_lowercase().contains(needle)
}

/// Filter then sort. The sort is stable, so ties keep store order.
pub fn filter_and_sort<'a>(
    records: &'a [StudentRecord],
    view: &ViewState,
) -> Vec<&'a StudentRecord> {
    let needle = view.search_text.to_lowercase();
    let mut visible: Vec<&StudentRecord> = records
        .iter()
        .filter(|r| matches_search(r, &needle) && view.status_filter.matches(r.fee_paid))
        .collect();
    if view.sort.column().is_some() {
        visible.sort_by(|a, b| view.sort.compare(a, b));
    }
    visible
}

pub fn format_fee(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Build the rows the table shows, in display order
pub fn project(records: &[StudentRecord], view: &ViewState, currency: &str) -> Vec<ViewRow> {
    filter_and_sort(records, view)
        .into_iter()
        .enumerate()
        .map(|(i, record)| ViewRow {
            index: i + 1,
            id: record.id,
            name: record.name.clone(),
            room_number: record.room_number.clone(),
            mobile_number: if record.mobile_number.is_empty() {
                "N/A".to_string()
            } else {
                record.mobile_number.clone()
            },
            fee_display: format_fee(record.fee_amount, currency),
            fee_paid: record.fee_paid,
        })
        .collect()
}
