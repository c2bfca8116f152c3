use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
    sea_query::{Expr, Query},
};

use crate::{
    entities::{booking, customer, movie, showtime},
    error::AppResult,
    models::{BookingForm, BookingOutcome, MovieForm, ShowtimeForm},
};

/// All database operations for the theatre. Holds the shared connection pool;
/// handlers get a clone instead of opening connections themselves.
#[derive(Clone)]
pub struct TheatreStore {
    db: DatabaseConnection,
}

impl TheatreStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn list_movies(&self) -> AppResult<Vec<movie::Model>> {
        let movies =
            movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?;
        Ok(movies)
    }

    pub async fn find_movie(&self, movie_id: i32) -> AppResult<Option<movie::Model>> {
        let movie = movie::Entity::find_by_id(movie_id).one(&self.db).await?;
        Ok(movie)
    }

    pub async fn add_movie(&self, form: MovieForm) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(form.title),
            genre: Set(Some(form.genre)),
            duration: Set(Some(form.duration)),
            rating: Set(Some(form.rating)),
        };

        let inserted = movie::Entity::insert(model).exec_with_returning(&self.db).await?;
        tracing::debug!(movie_id = inserted.id, title = %inserted.title, "movie added");
        Ok(inserted)
    }

    /// Showtimes for a movie, soonest first. An unknown movie id is not an
    /// error; it simply matches nothing.
    pub async fn showtimes_for_movie(&self, movie_id: i32) -> AppResult<Vec<showtime::Model>> {
        let showtimes = showtime::Entity::find()
            .filter(showtime::Column::MovieId.eq(movie_id))
            .order_by_asc(showtime::Column::ShowDate)
            .order_by_asc(showtime::Column::ShowTime)
            .all(&self.db)
            .await?;
        Ok(showtimes)
    }

    pub async fn add_showtime(
        &self,
        movie_id: i32,
        form: ShowtimeForm,
    ) -> AppResult<showtime::Model> {
        let model = showtime::ActiveModel {
            id: Default::default(),
            movie_id: Set(movie_id),
            show_date: Set(form.show_date),
            show_time: Set(form.show_time),
            available_seats: Set(form.available_seats),
        };

        let inserted = showtime::Entity::insert(model).exec_with_returning(&self.db).await?;
        tracing::debug!(showtime_id = inserted.id, movie_id, "showtime added");
        Ok(inserted)
    }

    /// Attempt a booking. The seat check, customer upsert, booking insert and
    /// seat decrement run in one transaction, so two concurrent requests
    /// cannot both claim the last seats.
    pub async fn book(&self, showtime_id: i32, form: BookingForm) -> AppResult<BookingOutcome> {
        let txn = self.db.begin().await?;

        let Some(showtime) = showtime::Entity::find_by_id(showtime_id).one(&txn).await? else {
            return Ok(BookingOutcome::UnknownShowtime);
        };

        if form.seats_booked < 1 || form.seats_booked > showtime.available_seats {
            return Ok(BookingOutcome::SoldOut);
        }

        // Upsert-by-email: an existing customer row is kept unchanged.
        let customer_id = match customer::Entity::find()
            .filter(customer::Column::Email.eq(&form.email))
            .one(&txn)
            .await?
        {
            Some(existing) => existing.id,
            None => {
                let model = customer::ActiveModel {
                    id: Default::default(),
                    name: Set(form.name),
                    email: Set(form.email),
                };
                customer::Entity::insert(model).exec(&txn).await?.last_insert_id
            }
        };

        let model = booking::ActiveModel {
            id: Default::default(),
            customer_id: Set(customer_id),
            showtime_id: Set(showtime.id),
            seats_booked: Set(form.seats_booked),
            created_at: Set(now_sec()),
        };
        booking::Entity::insert(model).exec(&txn).await?;

        let remaining = showtime.available_seats - form.seats_booked;
        let mut update: showtime::ActiveModel = showtime.into();
        update.available_seats = Set(remaining);
        showtime::Entity::update(update).exec(&txn).await?;

        txn.commit().await?;

        tracing::debug!(showtime_id, customer_id, remaining, "booking confirmed");
        Ok(BookingOutcome::Confirmed)
    }

    /// Deletes a showtime together with the bookings that reference it.
    pub async fn delete_showtime(&self, showtime_id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        booking::Entity::delete_many()
            .filter(booking::Column::ShowtimeId.eq(showtime_id))
            .exec(&txn)
            .await?;
        showtime::Entity::delete_by_id(showtime_id).exec(&txn).await?;

        txn.commit().await?;

        tracing::debug!(showtime_id, "showtime deleted");
        Ok(())
    }

    /// Deletes a movie, its showtimes, and every booking against those
    /// showtimes, leaf tables first.
    pub async fn delete_movie(&self, movie_id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        booking::Entity::delete_many()
            .filter(
                booking::Column::ShowtimeId.in_subquery(
                    Query::select()
                        .column(showtime::Column::Id)
                        .from(showtime::Entity)
                        .and_where(Expr::col(showtime::Column::MovieId).eq(movie_id))
                        .to_owned(),
                ),
            )
            .exec(&txn)
            .await?;
        showtime::Entity::delete_many()
            .filter(showtime::Column::MovieId.eq(movie_id))
            .exec(&txn)
            .await?;
        movie::Entity::delete_by_id(movie_id).exec(&txn).await?;

        txn.commit().await?;

        tracing::debug!(movie_id, "movie deleted");
        Ok(())
    }
}

fn now_sec() -> i64 {
    jiff::Timestamp::now().as_second()
}

#[cfg(test)]
mod tests {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, EntityTrait};

    use super::*;

    async fn store() -> TheatreStore {
        let db = Database::connect("sqlite::memory:").await.expect("in-memory database");
        Migrator::up(&db, None).await.expect("migrations");
        TheatreStore::new(db)
    }

    fn movie(title: &str) -> MovieForm {
        MovieForm {
            title: title.to_string(),
            genre: "Sci-Fi".to_string(),
            duration: 155,
            rating: 8.5,
        }
    }

    fn showtime(seats: i32) -> ShowtimeForm {
        ShowtimeForm {
            show_date: "2026-09-01".to_string(),
            show_time: "19:30".to_string(),
            available_seats: seats,
        }
    }

    fn booking(email: &str, seats: i32) -> BookingForm {
        BookingForm {
            name: "Ada".to_string(),
            email: email.to_string(),
            seats_booked: seats,
        }
    }

    #[tokio::test]
    async fn add_movie_records_submitted_fields() {
        let s = store().await;
        assert!(s.list_movies().await.unwrap().is_empty());

        let added = s.add_movie(movie("Dune")).await.unwrap();
        assert_eq!(added.title, "Dune");
        assert_eq!(added.genre.as_deref(), Some("Sci-Fi"));
        assert_eq!(added.duration, Some(155));
        assert_eq!(added.rating, Some(8.5));

        let movies = s.list_movies().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0], added);
    }

    #[tokio::test]
    async fn showtimes_for_unknown_movie_are_empty() {
        let s = store().await;
        assert!(s.showtimes_for_movie(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn booking_decrements_seats_and_records_one_row() {
        let s = store().await;
        let m = s.add_movie(movie("Dune")).await.unwrap();
        let st = s.add_showtime(m.id, showtime(100)).await.unwrap();

        let outcome = s.book(st.id, booking("a@x.com", 30)).await.unwrap();
        assert_eq!(outcome, BookingOutcome::Confirmed);

        let st = showtime::Entity::find_by_id(st.id).one(s.db()).await.unwrap().unwrap();
        assert_eq!(st.available_seats, 70);

        let bookings = booking::Entity::find().all(s.db()).await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].seats_booked, 30);
        assert_eq!(bookings[0].showtime_id, st.id);

        let customers = customer::Entity::find().all(s.db()).await.unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].email, "a@x.com");
    }

    #[tokio::test]
    async fn overbooking_writes_nothing() {
        let s = store().await;
        let m = s.add_movie(movie("Dune")).await.unwrap();
        let st = s.add_showtime(m.id, showtime(100)).await.unwrap();

        assert_eq!(s.book(st.id, booking("a@x.com", 30)).await.unwrap(), BookingOutcome::Confirmed);
        assert_eq!(s.book(st.id, booking("b@x.com", 80)).await.unwrap(), BookingOutcome::SoldOut);

        let st = showtime::Entity::find_by_id(st.id).one(s.db()).await.unwrap().unwrap();
        assert_eq!(st.available_seats, 70);
        assert_eq!(booking::Entity::find().all(s.db()).await.unwrap().len(), 1);
        // The rejected request must not create a customer either.
        assert_eq!(customer::Entity::find().all(s.db()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn non_positive_seat_requests_are_rejected() {
        let s = store().await;
        let m = s.add_movie(movie("Dune")).await.unwrap();
        let st = s.add_showtime(m.id, showtime(100)).await.unwrap();

        assert_eq!(s.book(st.id, booking("a@x.com", 0)).await.unwrap(), BookingOutcome::SoldOut);
        assert_eq!(s.book(st.id, booking("a@x.com", -5)).await.unwrap(), BookingOutcome::SoldOut);

        let st = showtime::Entity::find_by_id(st.id).one(s.db()).await.unwrap().unwrap();
        assert_eq!(st.available_seats, 100);
        assert!(booking::Entity::find().all(s.db()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn booking_unknown_showtime_is_surfaced_not_an_error() {
        let s = store().await;
        assert_eq!(
            s.book(42, booking("a@x.com", 1)).await.unwrap(),
            BookingOutcome::UnknownShowtime
        );
        assert!(booking::Entity::find().all(s.db()).await.unwrap().is_empty());
        assert!(customer::Entity::find().all(s.db()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn repeat_email_reuses_customer_row() {
        let s = store().await;
        let m = s.add_movie(movie("Dune")).await.unwrap();
        let st = s.add_showtime(m.id, showtime(100)).await.unwrap();

        s.book(st.id, booking("a@x.com", 10)).await.unwrap();
        let mut second = booking("a@x.com", 20);
        second.name = "Someone Else".to_string();
        s.book(st.id, second).await.unwrap();

        let customers = customer::Entity::find().all(s.db()).await.unwrap();
        assert_eq!(customers.len(), 1);
        // The original record is kept unchanged on the repeat booking.
        assert_eq!(customers[0].name, "Ada");
        assert_eq!(booking::Entity::find().all(s.db()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_showtime_removes_its_bookings() {
        let s = store().await;
        let m = s.add_movie(movie("Dune")).await.unwrap();
        let st1 = s.add_showtime(m.id, showtime(50)).await.unwrap();
        let st2 = s.add_showtime(m.id, showtime(50)).await.unwrap();
        s.book(st1.id, booking("a@x.com", 5)).await.unwrap();
        s.book(st2.id, booking("b@x.com", 5)).await.unwrap();

        s.delete_showtime(st1.id).await.unwrap();

        assert_eq!(s.showtimes_for_movie(m.id).await.unwrap().len(), 1);
        let bookings = booking::Entity::find().all(s.db()).await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].showtime_id, st2.id);
    }

    #[tokio::test]
    async fn delete_movie_cascades_without_touching_others() {
        let s = store().await;
        let dune = s.add_movie(movie("Dune")).await.unwrap();
        let other = s.add_movie(movie("Arrival")).await.unwrap();
        let dune_st = s.add_showtime(dune.id, showtime(80)).await.unwrap();
        let other_st = s.add_showtime(other.id, showtime(80)).await.unwrap();
        s.book(dune_st.id, booking("a@x.com", 4)).await.unwrap();
        s.book(other_st.id, booking("b@x.com", 4)).await.unwrap();

        s.delete_movie(dune.id).await.unwrap();

        let movies = s.list_movies().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, other.id);
        assert!(s.showtimes_for_movie(dune.id).await.unwrap().is_empty());
        assert_eq!(s.showtimes_for_movie(other.id).await.unwrap().len(), 1);

        let bookings = booking::Entity::find().all(s.db()).await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].showtime_id, other_st.id);
        // Customers are never cascade-deleted.
        assert_eq!(customer::Entity::find().all(s.db()).await.unwrap().len(), 2);
    }
}
