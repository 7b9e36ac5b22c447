//! amenity - terminal front-end for the community amenity booking services
//!
//! Each invocation is one user action: it loads the amenity list, logs in
//! when credentials are given, runs the command and renders the result.

mod cli;
mod logger;
mod render;

use std::process::ExitCode;

use amenity_client::{ClientError, Portal, RegisterRequest};
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use shared::classifier::parse_slot_time;

use cli::{AdminCommand, Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = logger::init_logger(cli.log.as_deref(), cli.log_json) {
        eprintln!("failed to initialize logging: {e:#}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ClientError>() {
                Some(client_error) => {
                    tracing::debug!(error = %client_error, "command failed");
                    eprintln!("{}", client_error.user_message());
                }
                None => eprintln!("{e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn login(portal: &mut Portal, cli: &Cli) -> anyhow::Result<()> {
    let (Some(username), Some(password)) = (&cli.username, &cli.password) else {
        return Ok(());
    };
    portal.login(username, password).await?;
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.connection.client_config();
    tracing::debug!(
        amenity = %config.amenity_url,
        booking = %config.booking_url,
        user = %config.user_url,
        "service configuration"
    );
    let mut portal = Portal::new(&config)?;

    if let Err(e) = portal.load_amenities().await {
        tracing::warn!(error = %e, "failed to load amenities");
    }

    match &cli.command {
        Command::Amenities => {
            let amenities = &portal.state().amenities;
            if cli.json {
                print_json(amenities)?;
            } else {
                println!("{}", render::amenities(amenities));
            }
        }

        Command::Availability { amenity, date } => {
            let view = portal.load_availability(*amenity, *date).await?;
            if cli.json {
                print_json(&view)?;
            } else {
                println!("{}", render::availability(&view));
            }
        }

        Command::Book { amenity, date, time } => {
            let time = time
                .as_deref()
                .map(parse_slot_time)
                .transpose()
                .context("invalid --time")?;
            login(&mut portal, &cli).await?;
            let outcome = portal.book(*amenity, *date, time).await?;
            println!("{}", render::outcome(&outcome));
        }

        Command::Bookings => {
            login(&mut portal, &cli).await?;
            portal.load_bookings().await?;
            let summaries = portal.state().booking_summaries();
            if cli.json {
                print_json(&summaries)?;
            } else {
                println!("{}", render::bookings(&summaries));
            }
        }

        Command::Cancel { booking_id } => {
            login(&mut portal, &cli).await?;
            portal.cancel_booking(*booking_id).await?;
            println!("Booking #{booking_id} cancelled successfully");
        }

        Command::Register {
            name,
            flat_no,
            contact,
        } => {
            let (Some(username), Some(password)) = (&cli.username, &cli.password) else {
                anyhow::bail!("--username and --password are required to register");
            };
            let request = RegisterRequest {
                username: username.clone(),
                password: password.clone(),
                name: name.clone(),
                flat_no: flat_no.clone(),
                contact_number: contact.clone(),
            };
            let session = portal.register(&request).await?;
            println!("Registered and logged in as {} ({})", session.username, session.role);
        }

        Command::Admin { command } => {
            login(&mut portal, &cli).await?;
            match command {
                AdminCommand::Bookings { amenity } => {
                    let bookings = match amenity {
                        None => portal.show_admin_dashboard().await?.to_vec(),
                        Some(id) => portal.filter_admin_bookings(Some(*id)).await?.to_vec(),
                    };
                    if cli.json {
                        print_json(&bookings)?;
                    } else {
                        let amenities = &portal.state().amenities;
                        println!("{}", render::admin_bookings(&bookings, amenities));
                    }
                }
                AdminCommand::Stats => {
                    let stats = portal.load_admin_stats().await?.clone();
                    if cli.json {
                        print_json(&stats)?;
                    } else {
                        println!("{}", render::stats(&stats));
                        println!(
                            "{}",
                            render::admin_bookings(&stats.bookings, &portal.state().amenities)
                        );
                    }
                }
            }
        }
    }

    Ok(())
}
