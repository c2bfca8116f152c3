use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::Id))
                    .col(string(Movie::Title))
                    .col(string_null(Movie::Genre))
                    .col(integer_null(Movie::Duration))
                    .col(double_null(Movie::Rating))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Showtime::Table)
                    .if_not_exists()
                    .col(pk_auto(Showtime::Id))
                    .col(integer(Showtime::MovieId))
                    .col(string(Showtime::ShowDate))
                    .col(string(Showtime::ShowTime))
                    .col(integer(Showtime::AvailableSeats))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showtime_movie")
                            .from(Showtime::Table, Showtime::MovieId)
                            .to(Movie::Table, Movie::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_showtime_movie_id")
                    .table(Showtime::Table)
                    .col(Showtime::MovieId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::Id))
                    .col(string(Customer::Name))
                    .col(string_uniq(Customer::Email))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::CustomerId))
                    .col(integer(Booking::ShowtimeId))
                    .col(integer(Booking::SeatsBooked))
                    .col(big_integer(Booking::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_customer")
                            .from(Booking::Table, Booking::CustomerId)
                            .to(Customer::Table, Customer::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_showtime")
                            .from(Booking::Table, Booking::ShowtimeId)
                            .to(Showtime::Table, Showtime::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_showtime_id")
                    .table(Booking::Table)
                    .col(Booking::ShowtimeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Booking::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Showtime::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Title,
    Genre,
    Duration,
    Rating,
}

#[derive(DeriveIden)]
enum Showtime {
    Table,
    Id,
    MovieId,
    ShowDate,
    ShowTime,
    AvailableSeats,
}

#[derive(DeriveIden)]
enum Customer {
    Table,
    Id,
    Name,
    Email,
}

#[derive(DeriveIden)]
enum Booking {
    Table,
    Id,
    CustomerId,
    ShowtimeId,
    SeatsBooked,
    CreatedAt,
}
