use crate::violation::ViolationRecord;
use std::collections::HashMap;

/// Cumulative fine amount per violation type.
///
/// Entries keep the order in which their type was first seen until
/// [`ViolationTotals::sort_descending`] reorders them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViolationTotals {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl ViolationTotals {
    pub fn new() -> ViolationTotals {
        ViolationTotals {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn add(&mut self, violation_type: &str, fine_amount: f64) {
        match self.index.get(violation_type) {
            Some(&idx) => self.entries[idx].1 += fine_amount,
            None => {
                self.index
                    .insert(violation_type.to_string(), self.entries.len());
                self.entries.push((violation_type.to_string(), fine_amount));
            }
        }
    }

    pub fn get(&self, violation_type: &str) -> Option<f64> {
        self.index
            .get(violation_type)
            .map(|&idx| self.entries[idx].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn grand_total(&self) -> f64 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(violation_type, amount)| (violation_type.as_str(), *amount))
    }

    /// Orders entries by total, highest first. The sort is stable, so equal
    /// totals stay in first-seen order and reruns give identical output.
    pub fn sort_descending(mut self) -> ViolationTotals {
        self.entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, (violation_type, _))| (violation_type.clone(), idx))
            .collect();
        self
    }
}

/// Adds one file's records onto the running totals and hands them back.
pub fn fold_into(records: &[ViolationRecord], mut totals: ViolationTotals) -> ViolationTotals {
    totals.extend(records.iter().cloned());
    totals
}

impl Extend<ViolationRecord> for ViolationTotals {
    fn extend<I: IntoIterator<Item = ViolationRecord>>(&mut self, records: I) {
        for record in records {
            self.add(&record.violation_type, record.fine_amount);
        }
    }
}
