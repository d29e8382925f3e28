use crate::{models::TvShow, TmdbClient};

impl TmdbClient {
    /// Get the details of a TV show by its ID.
    ///
    /// GET /tv/{series_id}
    pub async fn get_tv_details(
        &self,
        series_id: i64,
        language: Option<&str>,
    ) -> crate::Result<TvShow> {
        let language = language.unwrap_or(self.lang.as_str());
        self.get(&format!("/tv/{}", series_id), language, &[]).await
    }
}
