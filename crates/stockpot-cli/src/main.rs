mod client;
mod format;
mod seed;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client::ApiClient;

#[derive(Parser)]
#[command(name = "stockpot")]
#[command(about = "Stockpot CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the server with sample recipes
    Seed {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// List every recipe on the server
    List {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// Show one recipe in full
    Show {
        /// Recipe id
        id: String,
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// Delete a recipe
    Delete {
        /// Recipe id
        id: String,
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { server } => {
            seed::seed(&server).await?;
        }
        Commands::List { server } => {
            list(&server).await?;
        }
        Commands::Show { id, server } => {
            show(&server, &id).await?;
        }
        Commands::Delete { id, server } => {
            delete(&server, &id).await?;
        }
    }

    Ok(())
}

async fn list(server: &str) -> Result<()> {
    let client = ApiClient::new(server);
    let recipes = client.list_recipes().await?;

    if recipes.is_empty() {
        println!("No recipes yet");
        return Ok(());
    }

    for recipe in recipes {
        let title = recipe.title.as_deref().unwrap_or("(untitled)");
        let prep = format::friendly_prep_time(recipe.prep_time.unwrap_or(0));
        if prep.is_empty() {
            println!("{}  {}", recipe.id, title);
        } else {
            println!("{}  {} ({})", recipe.id, title, prep);
        }
    }

    Ok(())
}

async fn show(server: &str, id: &str) -> Result<()> {
    let client = ApiClient::new(server);
    let recipe = client.get_recipe(id).await?;

    println!("{}", recipe.title.as_deref().unwrap_or("(untitled)"));
    if let Some(chef) = &recipe.chef {
        println!("By {}", chef);
    }
    println!("Added {}", format::friendly_created_at(recipe.created_at));
    let prep = format::friendly_prep_time(recipe.prep_time.unwrap_or(0));
    if !prep.is_empty() {
        println!("Takes {}", prep);
    }

    if let Some(ingredients) = &recipe.ingredients {
        println!();
        println!("Ingredients:");
        for ingredient in ingredients {
            println!("  - {}", ingredient);
        }
    }

    if let Some(directions) = &recipe.directions {
        println!();
        println!("Directions:");
        for (index, step) in format::directions_steps(directions).iter().enumerate() {
            println!("  {}. {}", index + 1, step);
        }
    }

    if let Some(image_url) = &recipe.image_url {
        println!();
        println!("Image: {}", image_url);
    }

    Ok(())
}

async fn delete(server: &str, id: &str) -> Result<()> {
    let client = ApiClient::new(server);
    let message = client.delete_recipe(id).await?;

    println!("{}", message);

    Ok(())
}
