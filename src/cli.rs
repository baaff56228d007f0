use std::collections::BTreeSet;
use std::error::Error;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use inquire::{Confirm, Password, Text};

use crate::clients::{self, ApiClient};
use crate::models::auth::{LoginData, RegisterData};
use crate::models::profile::UpdateProfileData;
use crate::models::venue::{Media, Venue, VenueInput, VenueMeta};
use crate::service::availability::{nights_between, total_price, ProposedStay};
use crate::service::booking_service::BookingService;
use crate::service::venue_service::VenueService;
use crate::session::{require_auth, SessionStore};

#[derive(Parser)]
#[command(name = "venueBooker", about = "Browse, book, and manage stays on the marketplace")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List venues, paged
    Venues {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 9)]
        limit: u32,
        #[arg(long, default_value = "name")]
        sort: String,
        #[arg(long, default_value = "asc")]
        order: String,
    },
    /// Show one venue: description, amenities, location, price
    Venue { id: String },
    /// Search venues by name
    Search { query: String },
    /// Print the days a venue is already booked
    Availability { id: String },
    /// Book a stay at a venue (prompts for dates and guests)
    Book { id: String },
    /// List your own bookings
    Bookings,
    /// Cancel one of your bookings
    CancelBooking { id: String },
    Login,
    Register,
    Logout,
    /// Show a profile (defaults to your own)
    Profile { name: Option<String> },
    /// Update your bio, avatar, or banner
    UpdateProfile,
    /// Search profiles by name or bio
    SearchProfiles { query: String },
    /// Venue administration for managers
    #[command(subcommand)]
    Manager(ManagerCommands),
}

#[derive(Subcommand)]
enum ManagerCommands {
    /// List venues you own
    MyVenues,
    /// Create a venue (prompts for details)
    CreateVenue,
    /// Edit a venue you own
    EditVenue { id: String },
    /// Delete a venue you own
    DeleteVenue { id: String },
    /// Show bookings placed on a venue you own
    VenueBookings { id: String },
}

pub async fn cli(api: ApiClient, store: &mut SessionStore) {
    // Fine to panic here
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Venues { page, limit, sort, order } => {
            list_venues(&api, page, limit, sort, order).await
        }
        Commands::Venue { id } => show_venue(&api, &id).await,
        Commands::Search { query } => search_venues(&api, &query).await,
        Commands::Availability { id } => show_availability(&api, &id).await,
        Commands::Book { id } => book_venue(&api, store, &id).await,
        Commands::Bookings => list_bookings(&api, store).await,
        Commands::CancelBooking { id } => cancel_booking(&api, store, &id).await,
        Commands::Login => login(&api, store).await,
        Commands::Register => register(&api, store).await,
        Commands::Logout => logout(store),
        Commands::Profile { name } => show_profile(&api, store, name).await,
        Commands::UpdateProfile => update_profile(&api, store).await,
        Commands::SearchProfiles { query } => search_profiles(&api, store, &query).await,
        Commands::Manager(command) => manager(&api, store, command).await,
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn list_venues(
    api: &ApiClient,
    page: u32,
    limit: u32,
    sort: String,
    order: String,
) -> Result<(), Box<dyn Error>> {
    let params = clients::venues::FetchVenuesParams {
        limit,
        page,
        sort,
        sort_order: order,
    };
    let response = clients::venues::fetch_venues(api, &params).await?;
    for venue in &response.data {
        print_venue_line(venue);
    }
    let meta = &response.meta;
    println!(
        "Page {}/{} ({} venues total)",
        meta.current_page, meta.page_count, meta.total_count
    );
    Ok(())
}

async fn show_venue(api: &ApiClient, id: &str) -> Result<(), Box<dyn Error>> {
    let venue = clients::venues::fetch_venue_by_id(api, id).await?;
    println!("{}", venue.name);
    if !venue.description.is_empty() {
        println!("{}", venue.description);
    }
    println!(
        "Location: {}",
        venue.location.summary().unwrap_or("Location not specified".to_string())
    );
    println!("Price: ${} per night", venue.price);
    println!("Max guests: {}", venue.max_guests);
    println!("Rating: {:.1}", venue.rating);
    let amenities = venue.meta.amenities();
    if amenities.is_empty() {
        println!("Amenities: none listed");
    } else {
        println!("Amenities: {}", amenities.join(", "));
    }
    if let Some(owner) = &venue.owner {
        println!("Hosted by: {} <{}>", owner.name, owner.email);
    }
    Ok(())
}

async fn search_venues(api: &ApiClient, query: &str) -> Result<(), Box<dyn Error>> {
    let response = clients::venues::search_venues(api, query).await?;
    if response.data.is_empty() {
        println!("No venues matched {:?}", query);
        return Ok(());
    }
    for venue in &response.data {
        print_venue_line(venue);
    }
    Ok(())
}

async fn show_availability(api: &ApiClient, id: &str) -> Result<(), Box<dyn Error>> {
    let (venue, unavailable) = BookingService::availability(api, id).await?;
    println!("{}", venue.name);
    if unavailable.is_empty() {
        println!("No booked days; every date is open.");
        return Ok(());
    }
    println!("Booked days:");
    for (first, last) in collapse_days(&unavailable) {
        if first == last {
            println!("  {}", first.format("%Y-%m-%d"));
        } else {
            println!("  {} to {}", first.format("%Y-%m-%d"), last.format("%Y-%m-%d"));
        }
    }
    Ok(())
}

async fn book_venue(
    api: &ApiClient,
    store: &SessionStore,
    id: &str,
) -> Result<(), Box<dyn Error>> {
    let (venue, unavailable) = BookingService::availability(api, id).await?;
    println!("Booking {} (${} per night, up to {} guests)", venue.name, venue.price, venue.max_guests);
    if !unavailable.is_empty() {
        println!("Already booked:");
        for (first, last) in collapse_days(&unavailable) {
            println!("  {} to {}", first.format("%Y-%m-%d"), last.format("%Y-%m-%d"));
        }
    }

    let check_in = prompt_date("Check-in (YYYY-MM-DD):")?;
    let check_out = prompt_date("Check-out (YYYY-MM-DD):")?;
    let guests: u32 = Text::new("Guests:").prompt()?.trim().parse()?;

    let nights = nights_between(check_in, check_out);
    if nights > 0 {
        println!(
            "${} x {} night{} = ${}",
            venue.price,
            nights,
            if nights == 1 { "" } else { "s" },
            total_price(nights, venue.price)
        );
    }

    let stay = ProposedStay {
        check_in,
        check_out,
        guests,
    };
    let today = Local::now().date_naive();
    let booking = BookingService::reserve(api, api, store, id, &stay, today).await?;
    println!(
        "Booked! {} to {} for {} guest(s). Booking id: {}",
        booking.date_from, booking.date_to, booking.guests, booking.id
    );
    Ok(())
}

async fn list_bookings(api: &ApiClient, store: &SessionStore) -> Result<(), Box<dyn Error>> {
    let (user, token) = require_auth(store)?;
    let response = clients::bookings::bookings_by_profile(api, token, &user.name).await?;
    if response.data.is_empty() {
        println!("No bookings yet.");
        return Ok(());
    }
    for booking in &response.data {
        let venue_name = booking
            .venue
            .as_ref()
            .map(|v| v.name.as_str())
            .unwrap_or("(unknown venue)");
        println!(
            "{}  {} -> {}  {} guest(s)  {}",
            booking.id, booking.date_from, booking.date_to, booking.guests, venue_name
        );
    }
    Ok(())
}

async fn cancel_booking(
    api: &ApiClient,
    store: &SessionStore,
    id: &str,
) -> Result<(), Box<dyn Error>> {
    let (_, token) = require_auth(store)?;
    clients::bookings::cancel_booking(api, token, id).await?;
    println!("Booking {} cancelled.", id);
    Ok(())
}

async fn login(api: &ApiClient, store: &mut SessionStore) -> Result<(), Box<dyn Error>> {
    let email = Text::new("Email:").prompt()?;
    let password = Password::new("Password:").without_confirmation().prompt()?;
    let user = clients::auth::login(api, &LoginData { email, password }).await?;
    let name = user.name.clone();
    store.set_auth(user)?;
    println!("Logged in as {}.", name);
    Ok(())
}

async fn register(api: &ApiClient, store: &mut SessionStore) -> Result<(), Box<dyn Error>> {
    let name = Text::new("Username:").prompt()?;
    let email = Text::new("Email:").prompt()?;
    let password = Password::new("Password:").prompt()?;
    let venue_manager = Confirm::new("Register as a venue manager?")
        .with_default(false)
        .prompt()?;
    let user = clients::auth::register(
        api,
        &RegisterData {
            name,
            email,
            password,
            venue_manager: Some(venue_manager),
        },
    )
    .await?;
    let name = user.name.clone();
    store.set_auth(user)?;
    println!("Registered and logged in as {}.", name);
    Ok(())
}

fn logout(store: &mut SessionStore) -> Result<(), Box<dyn Error>> {
    store.clear()?;
    println!("Logged out.");
    Ok(())
}

async fn show_profile(
    api: &ApiClient,
    store: &SessionStore,
    name: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let (user, token) = require_auth(store)?;
    let name = name.unwrap_or_else(|| user.name.clone());
    let profile = clients::profiles::fetch_profile(api, token, &name).await?;
    println!("{} <{}>", profile.name, profile.email);
    if let Some(bio) = &profile.bio {
        println!("{}", bio);
    }
    println!(
        "Venue manager: {}",
        if profile.venue_manager { "yes" } else { "no" }
    );
    if let Some(count) = profile.count {
        println!("Venues: {}  Bookings: {}", count.venues, count.bookings);
    }
    Ok(())
}

async fn update_profile(api: &ApiClient, store: &SessionStore) -> Result<(), Box<dyn Error>> {
    let (user, token) = require_auth(store)?;
    let bio = Text::new("Bio (empty to keep current):").prompt()?;
    let avatar_url = Text::new("Avatar URL (empty to keep current):").prompt()?;
    let update = UpdateProfileData {
        bio: non_empty(bio),
        avatar: non_empty(avatar_url).map(|url| Media {
            url,
            alt: format!("{}'s avatar", user.name),
        }),
        ..UpdateProfileData::default()
    };
    let profile = clients::profiles::update_profile(api, token, &user.name, &update).await?;
    println!("Profile {} updated.", profile.name);
    Ok(())
}

async fn search_profiles(
    api: &ApiClient,
    store: &SessionStore,
    query: &str,
) -> Result<(), Box<dyn Error>> {
    let (_, token) = require_auth(store)?;
    let response = clients::profiles::search_profiles(api, token, query).await?;
    if response.data.is_empty() {
        println!("No profiles matched {:?}", query);
        return Ok(());
    }
    for profile in &response.data {
        let role = if profile.venue_manager { "manager" } else { "guest" };
        println!("{} <{}>  ({})", profile.name, profile.email, role);
    }
    Ok(())
}

async fn manager(
    api: &ApiClient,
    store: &SessionStore,
    command: ManagerCommands,
) -> Result<(), Box<dyn Error>> {
    match command {
        ManagerCommands::MyVenues => {
            let venues = VenueService::my_venues(api, store).await?;
            if venues.is_empty() {
                println!("You have no venues yet.");
                return Ok(());
            }
            for venue in &venues {
                let booked = venue.bookings.as_ref().map(|b| b.len()).unwrap_or(0);
                println!("{}  {}  ({} booking(s))", venue.id, venue.name, booked);
            }
        }
        ManagerCommands::CreateVenue => {
            let input = prompt_venue_input(None)?;
            let venue = VenueService::create(api, store, &input).await?;
            println!("Created venue {} with id {}.", venue.name, venue.id);
        }
        ManagerCommands::EditVenue { id } => {
            let current = clients::venues::fetch_venue_by_id(api, &id).await?;
            let input = prompt_venue_input(Some(&current))?;
            let venue = VenueService::update(api, store, &id, &input).await?;
            println!("Updated venue {}.", venue.name);
        }
        ManagerCommands::DeleteVenue { id } => {
            let confirmed = Confirm::new("Delete this venue? Bookings on it will be lost.")
                .with_default(false)
                .prompt()?;
            if !confirmed {
                println!("Aborted.");
                return Ok(());
            }
            VenueService::delete(api, store, &id).await?;
            println!("Venue {} deleted.", id);
        }
        ManagerCommands::VenueBookings { id } => {
            let (venue, bookings) = VenueService::venue_bookings(api, store, &id).await?;
            println!("Bookings for {}:", venue.name);
            if bookings.is_empty() {
                println!("  none");
            }
            for booking in &bookings {
                println!(
                    "  {}  {} -> {}  {} guest(s)",
                    booking.id,
                    booking.date_from,
                    booking.date_to,
                    booking.guests.unwrap_or(1)
                );
            }
        }
    }
    Ok(())
}

fn prompt_venue_input(current: Option<&Venue>) -> Result<VenueInput, Box<dyn Error>> {
    let hint = |field: &str, value: String| {
        if value.is_empty() {
            format!("{}:", field)
        } else {
            format!("{} [{}]:", field, value)
        }
    };
    let current_name = current.map(|v| v.name.clone()).unwrap_or_default();
    let name = keep_or(Text::new(&hint("Name", current_name.clone())).prompt()?, current_name);
    let current_description = current.map(|v| v.description.clone()).unwrap_or_default();
    let description = keep_or(
        Text::new(&hint("Description", current_description.clone())).prompt()?,
        current_description,
    );
    let current_price = current.map(|v| v.price.to_string()).unwrap_or_default();
    let price: f64 = keep_or(
        Text::new(&hint("Price per night", current_price.clone())).prompt()?,
        current_price,
    )
    .trim()
    .parse()?;
    let current_guests = current.map(|v| v.max_guests.to_string()).unwrap_or_default();
    let max_guests: u32 = keep_or(
        Text::new(&hint("Max guests", current_guests.clone())).prompt()?,
        current_guests,
    )
    .trim()
    .parse()?;

    let meta = VenueMeta {
        wifi: Confirm::new("WiFi?").with_default(false).prompt()?,
        parking: Confirm::new("Parking?").with_default(false).prompt()?,
        breakfast: Confirm::new("Breakfast?").with_default(false).prompt()?,
        pets: Confirm::new("Pets allowed?").with_default(false).prompt()?,
    };

    let media_url = Text::new("Image URL (optional):").prompt()?;
    let media = match non_empty(media_url) {
        Some(url) => vec![Media {
            url,
            alt: name.clone(),
        }],
        None => Vec::new(),
    };

    Ok(VenueInput {
        name,
        description,
        media,
        price,
        max_guests,
        meta,
        location: current.map(|v| v.location.clone()),
    })
}

fn prompt_date(message: &str) -> Result<NaiveDate, Box<dyn Error>> {
    let raw = Text::new(message).prompt()?;
    Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?)
}

fn print_venue_line(venue: &Venue) {
    println!(
        "{}  {}  ${}/night, up to {} guests",
        venue.id, venue.name, venue.price, venue.max_guests
    );
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn keep_or(entered: String, current: String) -> String {
    if entered.trim().is_empty() {
        current
    } else {
        entered
    }
}

/// Collapses a sorted day set into consecutive runs for display.
fn collapse_days(days: &BTreeSet<NaiveDate>) -> Vec<(NaiveDate, NaiveDate)> {
    let mut runs: Vec<(NaiveDate, NaiveDate)> = Vec::new();
    for &day in days {
        match runs.last_mut() {
            Some((_, last)) if *last + chrono::Duration::days(1) == day => *last = day,
            _ => runs.push((day, day)),
        }
    }
    runs
}
