//! Dashboard Stats
//!
//! Total/paid/unpaid counters over the whole store (filters do not apply).

use crate::models::StudentRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub paid: usize,
    pub unpaid: usize,
}

impl DashboardStats {
    pub fn from_records(records: &[StudentRecord]) -> Self {
        let paid = records.iter().filter(|r| r.fee_paid).count();
        Self {
            total: records.len(),
            paid,
            unpaid: records.len() - paid,
        }
    }
}
