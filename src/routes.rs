use std::sync::Arc;

use axum::{
    Router,
    extract::{Form, Path, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::AppResult,
    models::{BookingForm, BookingOutcome, MovieForm, ShowtimeForm},
    templates,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add_movie", get(add_movie_form).post(add_movie))
        .route("/showtimes/{movie_id}", get(showtimes))
        .route("/add_showtime/{movie_id}", get(add_showtime_form).post(add_showtime))
        .route("/book_ticket/{showtime_id}", get(book_ticket_form).post(book_ticket))
        .route("/delete_showtime/{showtime_id}", post(delete_showtime))
        .route("/delete_movie/{movie_id}", post(delete_movie))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    booking: Option<String>,
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IndexQuery>,
) -> AppResult<Html<String>> {
    let movies = state.store.list_movies().await?;
    let notice = q.booking.as_deref().and_then(BookingOutcome::from_flag);
    Ok(Html(templates::index_page(&movies, notice)))
}

pub async fn add_movie_form() -> Html<String> {
    Html(templates::add_movie_page())
}

pub async fn add_movie(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MovieForm>,
) -> AppResult<Redirect> {
    state.store.add_movie(form).await?;
    Ok(Redirect::to("/"))
}

pub async fn showtimes(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
) -> AppResult<Html<String>> {
    let movie = state.store.find_movie(movie_id).await?;
    let showtimes = state.store.showtimes_for_movie(movie_id).await?;
    Ok(Html(templates::showtimes_page(movie.as_ref(), movie_id, &showtimes)))
}

pub async fn add_showtime_form(Path(movie_id): Path<i32>) -> Html<String> {
    Html(templates::add_showtime_page(movie_id))
}

pub async fn add_showtime(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
    Form(form): Form<ShowtimeForm>,
) -> AppResult<Redirect> {
    state.store.add_showtime(movie_id, form).await?;
    Ok(Redirect::to(&format!("/showtimes/{movie_id}")))
}

pub async fn book_ticket_form(Path(showtime_id): Path<i32>) -> Html<String> {
    Html(templates::book_ticket_page(showtime_id))
}

pub async fn book_ticket(
    State(state): State<Arc<AppState>>,
    Path(showtime_id): Path<i32>,
    Form(form): Form<BookingForm>,
) -> AppResult<Redirect> {
    let outcome = state.store.book(showtime_id, form).await?;
    Ok(Redirect::to(&format!("/?booking={}", outcome.as_flag())))
}

pub async fn delete_showtime(
    State(state): State<Arc<AppState>>,
    Path(showtime_id): Path<i32>,
) -> AppResult<Redirect> {
    state.store.delete_showtime(showtime_id).await?;
    Ok(Redirect::to("/"))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
) -> AppResult<Redirect> {
    state.store.delete_movie(movie_id).await?;
    Ok(Redirect::to("/"))
}
