use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::{movie, showtime},
    models::BookingOutcome,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[movie::Model], notice: Option<BookingOutcome>) -> String {
    page(
        "Movie Theatre",
        html! {
            div class="max-w-4xl mx-auto px-6 py-10" {
                @if let Some(outcome) = notice {
                    (booking_notice(outcome))
                }

                div class="flex items-start justify-between gap-6" {
                    div {
                        h1 class="text-3xl font-bold text-gray-900" { "Now showing" }
                        p class="mt-2 text-gray-600" { "Movies, showtimes and bookings for the theatre." }
                    }
                    a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add_movie" { "Add movie" }
                }

                @if movies.is_empty() {
                    div class="mt-10 bg-white shadow rounded-lg p-8" {
                        p class="text-gray-600" { "No movies yet. Add one to get started." }
                    }
                } @else {
                    div class="mt-10 space-y-4" {
                        @for m in movies {
                            (movie_card(m))
                        }
                    }
                }
            }
        },
    )
}

pub fn add_movie_page() -> String {
    page(
        "Add movie",
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-2xl font-bold text-gray-900" { "Add movie" }

                    form class="mt-8 space-y-6" method="post" action="/add_movie" {
                        (text_field("title", "Title", "text"))
                        (text_field("genre", "Genre", "text"))
                        (number_field("duration", "Duration (minutes)", "1"))
                        (number_field("rating", "Rating (0–10)", "0.1"))
                        (submit_button("Add movie"))
                    }

                    (back_link("/"))
                }
            }
        },
    )
}

pub fn showtimes_page(
    movie: Option<&movie::Model>,
    movie_id: i32,
    showtimes: &[showtime::Model],
) -> String {
    let heading = match movie {
        Some(m) => format!("Showtimes for {}", m.title),
        None => format!("Showtimes for movie #{movie_id}"),
    };

    page(
        "Showtimes",
        html! {
            div class="max-w-4xl mx-auto px-6 py-10" {
                div class="flex items-start justify-between gap-6" {
                    h1 class="text-3xl font-bold text-gray-900" { (heading) }
                    a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href=(format!("/add_showtime/{movie_id}")) { "Add showtime" }
                }

                @if showtimes.is_empty() {
                    div class="mt-10 bg-white shadow rounded-lg p-8" {
                        p class="text-gray-600" { "No showtimes scheduled." }
                    }
                } @else {
                    div class="mt-10 space-y-4" {
                        @for st in showtimes {
                            (showtime_card(st))
                        }
                    }
                }

                (back_link("/"))
            }
        },
    )
}

pub fn add_showtime_page(movie_id: i32) -> String {
    page(
        "Add showtime",
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-2xl font-bold text-gray-900" { "Add showtime" }

                    form class="mt-8 space-y-6" method="post" action=(format!("/add_showtime/{movie_id}")) {
                        (text_field("show_date", "Date", "date"))
                        (text_field("show_time", "Time", "time"))
                        (number_field("available_seats", "Available seats", "1"))
                        (submit_button("Add showtime"))
                    }

                    (back_link(&format!("/showtimes/{movie_id}")))
                }
            }
        },
    )
}

pub fn book_ticket_page(showtime_id: i32) -> String {
    page(
        "Book tickets",
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-2xl font-bold text-gray-900" { "Book tickets" }

                    form class="mt-8 space-y-6" method="post" action=(format!("/book_ticket/{showtime_id}")) {
                        (text_field("name", "Your name", "text"))
                        (text_field("email", "Email", "email"))
                        (number_field("seats_booked", "Seats", "1"))
                        (submit_button("Book"))
                    }

                    (back_link("/"))
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body class="min-h-screen bg-gray-50" { (body) }
        }
    }
    .into_string()
}

fn booking_notice(outcome: BookingOutcome) -> Markup {
    let (classes, message) = match outcome {
        BookingOutcome::Confirmed => {
            ("border-green-500 bg-green-50 text-green-800", "Booking confirmed.")
        }
        BookingOutcome::SoldOut => (
            "border-red-500 bg-red-50 text-red-800",
            "Booking failed: not enough seats available.",
        ),
        BookingOutcome::UnknownShowtime => (
            "border-red-500 bg-red-50 text-red-800",
            "Booking failed: that showtime no longer exists.",
        ),
    };

    html! {
        div class=(format!("mb-8 rounded-md border-l-4 p-4 {classes}")) {
            p class="text-sm font-medium" { (message) }
        }
    }
}

fn movie_card(m: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex items-start justify-between gap-4" {
                div {
                    h2 class="text-xl font-semibold text-gray-900" { (m.title) }
                    p class="mt-1 text-sm text-gray-500" {
                        @if let Some(genre) = &m.genre {
                            (genre)
                        }
                        @if let Some(duration) = m.duration {
                            " · " (duration) " min"
                        }
                        @if let Some(rating) = m.rating {
                            " · rated " (rating)
                        }
                    }
                }
                div class="flex items-center gap-3" {
                    a class="text-sm text-blue-600 hover:text-blue-800" href=(format!("/showtimes/{}", m.id)) { "Showtimes" }
                    form method="post" action=(format!("/delete_movie/{}", m.id)) {
                        button class="text-sm text-red-600 hover:text-red-800" type="submit" { "Delete" }
                    }
                }
            }
        }
    }
}

fn showtime_card(st: &showtime::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex items-start justify-between gap-4" {
                div {
                    h2 class="text-xl font-semibold text-gray-900" { (st.show_date) " at " (st.show_time) }
                    p class="mt-1 text-sm text-gray-500" { (st.available_seats) " seats available" }
                }
                div class="flex items-center gap-3" {
                    a class="text-sm text-blue-600 hover:text-blue-800" href=(format!("/book_ticket/{}", st.id)) { "Book" }
                    form method="post" action=(format!("/delete_showtime/{}", st.id)) {
                        button class="text-sm text-red-600 hover:text-red-800" type="submit" { "Delete" }
                    }
                }
            }
        }
    }
}

fn text_field(name: &str, label: &str, kind: &str) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700" for=(name) { (label) }
            input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" type=(kind) name=(name) id=(name) required;
        }
    }
}

fn number_field(name: &str, label: &str, step: &str) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700" for=(name) { (label) }
            input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" type="number" step=(step) name=(name) id=(name) required;
        }
    }
}

fn submit_button(label: &str) -> Markup {
    html! {
        button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { (label) }
    }
}

fn back_link(href: &str) -> Markup {
    html! {
        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href=(href) { "Back" }
    }
}
