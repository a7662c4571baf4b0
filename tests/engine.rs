use hr_list_query::domain::filter::{Criterion, FilterCriteria};
use hr_list_query::domain::query::QueryState;
use hr_list_query::domain::record::Record;
use hr_list_query::{ListQueryEngine, apply_filters, apply_search, paginate, query};

mod common;

#[test]
fn test_twenty_five_records_in_pages_of_ten() {
    common::init_logging();
    let records = common::employees(25);

    let first = paginate(&records, 1, 10);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.total_items, 25);

    let last = paginate(&records, 3, 10);
    assert_eq!(last.items.len(), 5);
    assert_eq!(common::ids(&last.items)[0], "21");
}

#[test]
fn test_out_of_range_page_clamps_to_last() {
    let records = common::employees(25);

    let result = paginate(&records, 999, 10);

    assert_eq!(result.page, 3);
    assert_eq!(result.items.len(), 5);
}

#[test]
fn test_total_pages_formula() {
    for total in 0..40usize {
        for page_size in 1..12usize {
            let items: Vec<usize> = (0..total).collect();
            let expected = std::cmp::max(1, total.div_ceil(page_size));
            assert_eq!(paginate(&items, 1, page_size).total_pages, expected);
        }
    }
}

#[test]
fn test_paginate_is_repeatable() {
    let records = common::employees(25);
    assert_eq!(paginate(&records, 2, 7), paginate(&records, 2, 7));
}

#[test]
fn test_status_set_filter() {
    let records = common::transfers(&["Approved", "Rejected", "Pending", "Completed", "Approved"]);
    let filters = FilterCriteria::new().one_of("status", ["Approved", "Pending"]);

    let filtered = apply_filters(&records, &filters);

    assert_eq!(common::ids(&filtered), vec!["1", "3", "5"]);
}

#[test]
fn test_empty_status_set_is_unrestricted() {
    let records = common::transfers(&["Approved", "Rejected", "Pending", "Completed", "Approved"]);
    let filters = FilterCriteria::new().one_of("status", Vec::<&str>::new());

    assert_eq!(apply_filters(&records, &filters), records);
}

#[test]
fn test_filters_return_subset() {
    let records = common::employees(30);
    let filter_sets = [
        FilterCriteria::new(),
        FilterCriteria::new().exact("branch", "North"),
        FilterCriteria::new().contains("name", "#1"),
        FilterCriteria::new().one_of("branch", ["Head Office"]).contains("name", "2"),
        FilterCriteria::new().exact("missing", "x"),
    ];

    for filters in &filter_sets {
        let filtered = apply_filters(&records, filters);
        assert!(filtered.len() <= records.len());
        assert!(filtered.iter().all(|r| records.contains(r)));
    }
}

#[test]
fn test_empty_search_is_identity() {
    let records = common::employees(12);
    assert_eq!(apply_search(&records, "", &["name", "branch"]), records);
}

#[test]
fn test_search_results_contain_term() {
    let records = common::employees(40);
    for term in ["#1", "NORTH", "office", "Employee #3"] {
        let found = apply_search(&records, term, &["name", "branch"]);
        assert!(!found.is_empty());
        let needle = term.to_lowercase();
        assert!(found.iter().all(|record| {
            ["name", "branch"]
                .iter()
                .any(|field| record.text(field).to_lowercase().contains(&needle))
        }));
    }
}

#[test]
fn test_search_smith() {
    let records = vec![
        Record::new().with("name", "John Smith"),
        Record::new().with("name", "Jane Doe"),
    ];

    let found = apply_search(&records, "smith", &["name"]);

    assert_eq!(found, vec![records[0].clone()]);
}

#[test]
fn test_query_composes_search_filters_and_pages() {
    common::init_logging();
    let records = common::employees(60);
    let state = QueryState::default()
        .search("employee #")
        .filter("branch", Criterion::Exact("North".into()))
        .paginate(2, 5);

    let result = query(&records, &state, &["name"]);

    assert_eq!(result.total_items, 20);
    assert_eq!(result.total_pages, 4);
    assert_eq!(result.page, 2);
    assert_eq!(common::ids(&result.items), vec!["18", "21", "24", "27", "30"]);
}

#[test]
fn test_engine_never_mutates_input() {
    let records = common::employees(15);
    let snapshot = records.clone();
    let engine = ListQueryEngine::new(["name"]);

    let _ = engine.query(
        &records,
        &QueryState::default()
            .search("#1")
            .filter("branch", Criterion::OneOf(vec!["North".into()])),
    );

    assert_eq!(records, snapshot);
}

#[test]
fn test_query_on_empty_collection() {
    let result = query::<&str>(&[], &QueryState::default().paginate(4, 10), &["name"]);

    assert!(result.items.is_empty());
    assert_eq!(result.total_items, 0);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.page, 1);
}
