//! Mock record source for isolating services in tests.

use mockall::mock;

use crate::domain::record::Record;
use crate::repository::RecordSource;
use crate::repository::errors::RepositoryResult;

mock! {
    pub DataSource {}

    impl RecordSource for DataSource {
        fn fetch_records(&self, collection: &str) -> RepositoryResult<Vec<Record>>;
    }
}
