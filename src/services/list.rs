//! List screen workflows: fetch a snapshot, then query it.

use crate::domain::query::QueryState;
use crate::domain::types::FieldName;
use crate::dto::list::ListPageData;
use crate::engine::ListQueryEngine;
use crate::forms::list_query::ListQueryForm;
use crate::forms::upload::UploadRecordsForm;
use crate::models::config::QueryConfig;
use crate::repository::{RecordSource, RecordStore};
use crate::services::ServiceResult;

/// Builds the engine for a screen, rejecting blank searchable field names.
pub fn build_engine(searchable_fields: &[&str]) -> ServiceResult<ListQueryEngine> {
    let fields = searchable_fields
        .iter()
        .map(|field| FieldName::new(*field).map(FieldName::into_inner))
        .collect::<Result<Vec<String>, _>>()?;
    Ok(ListQueryEngine::new(fields))
}

/// Parses the request query string into a [`QueryState`] using the
/// configured paging defaults.
pub fn parse_query(query_string: &str, config: &QueryConfig) -> ServiceResult<QueryState> {
    let form = ListQueryForm::from_query_string(query_string).map_err(|err| {
        log::error!("Failed to parse list query: {err}");
        err
    })?;
    let state = form
        .into_state(config.default_page_size, config.max_page_size)
        .map_err(|err| {
            log::error!("Failed to validate list query: {err}");
            err
        })?;
    Ok(state)
}

/// Loads one page of `collection` for rendering.
///
/// The collection is fetched first and the query runs synchronously on the
/// fresh snapshot.
pub fn load_list_page<R>(
    source: &R,
    collection: &str,
    query_string: &str,
    searchable_fields: &[&str],
    config: &QueryConfig,
) -> ServiceResult<ListPageData>
where
    R: RecordSource + ?Sized,
{
    let engine = build_engine(searchable_fields)?;

    let records = source.fetch_records(collection).map_err(|err| {
        log::error!("Failed to fetch `{collection}` records: {err}");
        err
    })?;

    let state = parse_query(query_string, config)?;
    let result = engine.query(&records, &state);
    let pages = result.page_links(&config.pager);

    Ok(ListPageData {
        result,
        pages,
        search_query: state.search_query().map(str::to_string),
    })
}

/// Parses the uploaded CSV and stores it as the new `collection` snapshot.
pub fn upload_records<W>(
    store: &mut W,
    collection: &str,
    form: &UploadRecordsForm,
) -> ServiceResult<usize>
where
    W: RecordStore + ?Sized,
{
    let records = form.parse().map_err(|err| {
        log::error!("Failed to parse uploaded records: {err}");
        err
    })?;

    let count = store.store_records(collection, records).map_err(|err| {
        log::error!("Failed to store `{collection}` records: {err}");
        err
    })?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;
    use crate::repository::InMemoryRecordSource;
    use crate::services::ServiceError;

    fn source() -> InMemoryRecordSource {
        let mut source = InMemoryRecordSource::new();
        let records = (1..=30)
            .map(|i| {
                Record::new()
                    .with("name", format!("Trainee {i}"))
                    .with("course", if i <= 12 { "Safety" } else { "Payroll" })
            })
            .collect();
        source.insert("training", records);
        source
    }

    #[test]
    fn loads_filtered_page_with_pager() {
        let data = load_list_page(
            &source(),
            "training",
            "in.course=Safety&per_page=5&page=2",
            &["name"],
            &QueryConfig::default(),
        )
        .unwrap();

        assert_eq!(data.result.total_items, 12);
        assert_eq!(data.result.total_pages, 3);
        assert_eq!(data.result.items[0].text("name"), "Trainee 6");
        assert_eq!(data.pages, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(data.search_query, None);
    }

    #[test]
    fn echoes_trimmed_search_query() {
        let data = load_list_page(
            &source(),
            "training",
            "search=Trainee+3",
            &["name"],
            &QueryConfig::default(),
        )
        .unwrap();

        assert_eq!(data.search_query.as_deref(), Some("Trainee 3"));
        assert_eq!(data.result.total_items, 2);
    }

    #[test]
    fn missing_collection_is_a_repository_error() {
        let result = load_list_page(&source(), "payroll", "", &["name"], &QueryConfig::default());
        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }

    #[test]
    fn blank_searchable_field_is_rejected() {
        assert!(matches!(
            build_engine(&["name", " "]),
            Err(ServiceError::TypeConstraint(_))
        ));
    }

    #[test]
    fn invalid_query_is_a_form_error() {
        let result = load_list_page(
            &source(),
            "training",
            "page=last",
            &["name"],
            &QueryConfig::default(),
        );
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn uploaded_codes_filter_by_their_text() {
        let mut store = source();
        let form = UploadRecordsForm {
            csv: "code,name\n007,Ada\n7,Grace\n".to_string(),
        };
        upload_records(&mut store, "training", &form).unwrap();

        let data = load_list_page(
            &store,
            "training",
            "eq.code=007",
            &["name"],
            &QueryConfig::default(),
        )
        .unwrap();

        assert_eq!(data.result.total_items, 1);
        assert_eq!(data.result.items[0].text("name"), "Ada");
    }

    #[test]
    fn upload_replaces_collection() {
        let mut store = source();
        let form = UploadRecordsForm {
            csv: "name,course\nAda,Leadership\nGrace,Leadership\n".to_string(),
        };

        let count = upload_records(&mut store, "training", &form).unwrap();

        assert_eq!(count, 2);
        let data = load_list_page(&store, "training", "", &["name"], &QueryConfig::default())
            .unwrap();
        assert_eq!(data.result.total_items, 2);
    }
}
