//! Workspace search.

use crate::clients::NotionClient;
use crate::rest::envelope::Object;
use crate::rest::errors::ResourceError;
use crate::rest::pagination::Paginated;
use crate::rest::query::SearchParams;

impl NotionClient {
    /// Searches pages and databases shared with the integration.
    ///
    /// Results are heterogeneous; narrow them with
    /// [`ObjectsExt`](crate::rest::ObjectsExt) or the `as_*` accessors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedEnvelope`] if a result has an unknown
    /// kind, [`ResourceError::ValidationFailed`] if the API rejects the body,
    /// [`ResourceError::PaginationProtocol`], or [`ResourceError::Http`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use notion_api::rest::ObjectsExt;
    /// use notion_api::rest::query::{SearchFilter, SearchParams};
    ///
    /// let params = SearchParams::new().query("Roadmap").filter(SearchFilter::pages());
    /// let results = client.search(&params).await?;
    /// for page in results.pages() {
    ///     println!("{:?}", page.title());
    /// }
    /// ```
    pub async fn search(&self, params: &SearchParams) -> Result<Paginated<Object>, ResourceError> {
        let body = serde_json::to_value(params)?;
        let response = self
            .post("search", body)
            .await
            .map_err(|e| ResourceError::from_http_error(e, "Search", ""))?;
        Paginated::from_response(response)
    }
}
