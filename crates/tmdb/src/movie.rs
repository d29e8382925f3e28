use crate::{models::Movie, TmdbClient};

impl TmdbClient {
    /// Get movie details
    ///
    /// GET /movie/{movie_id}
    ///
    /// `language` falls back to the client's default when `None`.
    pub async fn get_movie(&self, movie_id: i64, language: Option<&str>) -> crate::Result<Movie> {
        let language = language.unwrap_or(self.lang.as_str());
        self.get(&format!("/movie/{}", movie_id), language, &[]).await
    }
}
