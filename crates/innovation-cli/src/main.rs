use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use innovation_cli::admin::promote_admin;
use innovation_cli::seeder::{self, SeedConfig};
use innovation_db::{PgProductRepository, PgUserRepository, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "innovation-cli")]
#[command(about = "Innovation CLI - Administrative tools for the Innovation API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Grant the admin role to a registered user
    PromoteAdmin {
        /// Email of the user to promote (prompted if not provided)
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Seed the database with fake users and products
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "20")]
        users: usize,

        /// Number of products to create
        #[arg(short = 'p', long, default_value = "50")]
        products: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let pool = init_db_pool().await?;

    match cli.command {
        Commands::Migrate => {
            run_migrations(&pool).await?;
            println!("✅ Migrations applied");
        }
        Commands::PromoteAdmin { email } => {
            let email = match email {
                Some(email) => email,
                None => Input::new()
                    .with_prompt("Email address")
                    .interact_text()
                    .context("Failed to read email")?,
            };

            promote_admin(&PgUserRepository::new(pool), &email).await?;
            println!("\n✅ {} is now an admin", email.trim());
        }
        Commands::Seed { users, products } => {
            let summary = seeder::seed_all(
                &PgUserRepository::new(pool.clone()),
                &PgProductRepository::new(pool),
                SeedConfig { users, products },
            )
            .await?;

            println!(
                "\n🌱 Seeding complete: {} users, {} products",
                summary.users, summary.products
            );
        }
    }

    Ok(())
}
