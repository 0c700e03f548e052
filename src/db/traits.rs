use async_trait::async_trait;
use cruder_query::Fields;

use crate::db::models::InsertOutcome;
use crate::error::CruderError;

/// Everything the HTTP layer needs from the database.
///
/// Statements arrive fully formed; implementations run them verbatim.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Runs a data-modifying statement.
    async fn execute(&self, statement: String) -> Result<InsertOutcome, CruderError>;

    /// Runs a query and returns every row in database order.
    async fn fetch_rows(&self, statement: String) -> Result<Vec<Fields>, CruderError>;
}
