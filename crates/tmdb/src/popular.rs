use crate::{
    models::{ListPage, Movie, TvShow},
    TmdbClient,
};

/// Only the first page is ever requested.
const FIRST_PAGE: &str = "1";

impl TmdbClient {
    /// Get the current popular movies.
    ///
    /// GET /movie/popular
    pub async fn get_popular_movies(&self) -> crate::Result<ListPage<Movie>> {
        self.get_list("/movie/popular", &[("page", FIRST_PAGE)]).await
    }

    /// Get the current popular TV shows.
    ///
    /// GET /tv/popular
    pub async fn get_popular_tv(&self) -> crate::Result<ListPage<TvShow>> {
        self.get_list("/tv/popular", &[("page", FIRST_PAGE)]).await
    }
}
