#![allow(dead_code)]

use hr_list_query::domain::record::Record;

/// Routes `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `count` employee records with ids starting at 1.
pub fn employees(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|id| {
            Record::new()
                .with("id", id as i64)
                .with("name", format!("Employee #{id}"))
                .with("branch", if id % 3 == 0 { "North" } else { "Head Office" })
        })
        .collect()
}

/// Transfer requests with the given statuses, ids starting at 1.
pub fn transfers(statuses: &[&str]) -> Vec<Record> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| {
            Record::new()
                .with("id", (i + 1) as i64)
                .with("status", *status)
        })
        .collect()
}

pub fn ids(records: &[Record]) -> Vec<String> {
    records.iter().map(|r| r.text("id")).collect()
}
