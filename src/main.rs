use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use zapdir::api::{ApiClient, BusinessQuery, NewReview, RegisterRequest};
use zapdir::model::whatsapp_url;
use zapdir::registry::EndpointRegistry;

#[derive(Parser)]
#[command(name = "zapdir")]
#[command(about = "Business directory client with offline fallback", long_about = None)]
struct Cli {
    /// Candidate backend base URL, highest priority first (repeatable;
    /// defaults to the built-in registry)
    #[arg(long = "api-url", global = true)]
    api_urls: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the registry and show the connectivity verdict
    Status,

    /// List categories
    Categories {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List cities
    Cities {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List businesses
    Businesses {
        #[arg(long)]
        category_id: Option<i64>,
        #[arg(long)]
        city_id: Option<i64>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<usize>,
        #[arg(long)]
        per_page: Option<usize>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single business
    Business {
        id: i64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List businesses near a coordinate
    Nearby {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
        /// Radius in kilometers
        #[arg(long)]
        radius: Option<f64>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a business owner account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        business_name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        category_id: i64,
        #[arg(long)]
        city_id: i64,
        #[arg(long)]
        address: String,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Log in and print the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// List reviews for a business
    Reviews {
        business_id: i64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit a review
    Review {
        #[arg(long)]
        business_id: i64,
        #[arg(long)]
        author: String,
        /// Stars, 1-5
        #[arg(long)]
        rating: u8,
        #[arg(long, default_value = "")]
        comment: String,
    },

    /// Print the WhatsApp chat link for a business
    Whatsapp {
        id: i64,
        /// Mentioned as the visitor's location in the prefilled message
        #[arg(long)]
        location: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let registry = if cli.api_urls.is_empty() {
        EndpointRegistry::default()
    } else {
        EndpointRegistry::new(cli.api_urls.clone())
    };
    let client = ApiClient::new(registry)?;

    match cli.command {
        Commands::Status => {
            // Any dispatch resolves the mode; a cheap read does fine.
            client.categories()?;
            println!("mode: {}", client.mode().as_str());
            match client.base_url() {
                Some(url) => println!("backend: {}", url),
                None => println!("backend: none (serving canned data)"),
            }
        }

        Commands::Categories { json } => {
            let categories = client.categories()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&categories).context("serialize categories")?
                );
            } else {
                for c in categories {
                    println!("{} {} {}", c.id, c.icon, c.name);
                }
            }
        }

        Commands::Cities { json } => {
            let cities = client.cities()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cities).context("serialize cities")?
                );
            } else {
                for c in cities {
                    println!("{} {} - {}", c.id, c.name, c.state);
                }
            }
        }

        Commands::Businesses {
            category_id,
            city_id,
            search,
            page,
            per_page,
            json,
        } => {
            let query = BusinessQuery {
                category_id,
                city_id,
                search,
                page,
                per_page,
            };
            let businesses = client.businesses(&query)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&businesses).context("serialize businesses")?
                );
            } else {
                for b in businesses {
                    println!(
                        "{} {} [{}] {} ({:.1})",
                        b.id, b.name, b.category.name, b.city.name, b.rating
                    );
                }
            }
        }

        Commands::Business { id, json } => match client.business(id)? {
            Some(b) => {
                if json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&b).context("serialize business")?
                    );
                } else {
                    println!("name: {}", b.name);
                    println!("category: {}", b.category.name);
                    println!("city: {} - {}", b.city.name, b.city.state);
                    println!("phone: {}", b.phone);
                    println!("address: {}", b.address);
                    println!("rating: {:.1}", b.rating);
                    if !b.description.is_empty() {
                        println!("description: {}", b.description);
                    }
                }
            }
            None => println!("No business with id {}", id),
        },

        Commands::Nearby {
            lat,
            lng,
            radius,
            json,
        } => {
            let businesses = client.businesses_nearby(lat, lng, radius)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&businesses).context("serialize businesses")?
                );
            } else {
                for b in businesses {
                    println!("{} {} {}", b.id, b.name, b.address);
                }
            }
        }

        Commands::Register {
            email,
            password,
            business_name,
            phone,
            category_id,
            city_id,
            address,
            description,
        } => {
            let ack = client.register(&RegisterRequest {
                email,
                password,
                business_name,
                phone,
                category_id,
                city_id,
                address,
                description,
            })?;
            match ack.message {
                Some(message) => println!("{}", message),
                None => println!("Registered"),
            }
            if !ack.persisted {
                println!("warning: backend unreachable, registration was not persisted");
            }
        }

        Commands::Login { email, password } => {
            let resp = client.login(&email, &password)?;
            if resp.authenticated() {
                println!(
                    "Logged in as {}",
                    resp.business_name.or(resp.email).unwrap_or_default()
                );
            } else if !resp.persisted {
                println!("Backend unreachable, cannot authenticate offline");
            } else {
                println!("{}", resp.error.unwrap_or_else(|| "Login failed".to_string()));
            }
        }

        Commands::Reviews { business_id, json } => {
            let reviews = client.reviews(business_id)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&reviews).context("serialize reviews")?
                );
            } else {
                for r in reviews {
                    println!("{} {}/5 {}: {}", r.created_at, r.rating, r.author, r.comment);
                }
            }
        }

        Commands::Review {
            business_id,
            author,
            rating,
            comment,
        } => {
            let ack = client.create_review(&NewReview {
                business_id,
                author,
                rating,
                comment,
            })?;
            if ack.persisted {
                println!("Review submitted");
            } else {
                println!("Backend unreachable, review was not persisted");
            }
        }

        Commands::Whatsapp { id, location } => match client.business(id)? {
            Some(b) => println!("{}", whatsapp_url(&b.phone, &b.name, location.as_deref())),
            None => println!("No business with id {}", id),
        },
    }

    Ok(())
}
