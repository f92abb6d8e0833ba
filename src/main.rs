use clap::{Parser, Subcommand};
use log::debug;

use forkify::route::fragment_for;
use forkify::{limit_title, open_session, AppConfig, Ingredient, Recipe};

#[derive(Parser)]
#[command(name = "forkify", version, about = "Search recipes and keep the ones you like")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes by keyword.
    Search {
        query: String,
        /// Result page to show (1-based).
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show a recipe with scaled ingredients.
    Show {
        id: String,
        /// Scale ingredients to this many servings.
        #[arg(long)]
        servings: Option<u32>,
        /// Also add the ingredients to a shopping list and print it.
        #[arg(long)]
        add_to_list: bool,
    },

    /// Like a recipe, or unlike it if it is already liked.
    Like { id: String },

    /// List liked recipes.
    Likes,

    /// Parse ingredient lines and print the structured result.
    Parse {
        #[arg(required = true)]
        lines: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    debug!("{:?}", config);

    match cli.command {
        Commands::Search { query, page } => {
            let mut session = open_session(config)?;
            if session.control_search(&query).await.is_err() {
                eprintln!("Something went wrong with the search.");
                std::process::exit(1);
            }
            let title_limit = session.config().search.title_limit;
            let Some(results) = session.goto_page(page) else {
                return Ok(());
            };
            for recipe in results.recipes {
                println!(
                    "{:<12} {:<22} {}",
                    recipe.id,
                    limit_title(&recipe.title, title_limit),
                    recipe.author
                );
            }
            let p = results.pagination;
            println!(
                "page {} of {}{}{}",
                p.page,
                p.pages,
                p.prev.map(|n| format!("  [prev: {}]", n)).unwrap_or_default(),
                p.next.map(|n| format!("  [next: {}]", n)).unwrap_or_default()
            );
        }

        Commands::Show {
            id,
            servings,
            add_to_list,
        } => {
            let mut session = open_session(config)?;
            if session.control_recipe(&fragment_for(&id)).await.is_err() {
                eprintln!("Error getting recipe!");
                std::process::exit(1);
            }
            if let (Some(servings), Some(recipe)) = (servings, session.recipe.as_mut()) {
                recipe.scale_to(servings);
            }
            if let Some(recipe) = &session.recipe {
                print_recipe(recipe, session.is_current_liked());
            }
            if add_to_list {
                session.control_list()?;
                println!("\nShopping list:");
                for item in session.list.items() {
                    let line = Ingredient {
                        quantity: item.quantity,
                        unit: item.unit,
                        name: item.name.clone(),
                        note: None,
                    };
                    println!("  [ ] {}", line);
                }
            }
        }

        Commands::Like { id } => {
            let mut session = open_session(config)?;
            if session.control_recipe(&fragment_for(&id)).await.is_err() {
                eprintln!("Error getting recipe!");
                std::process::exit(1);
            }
            let liked = session.control_like()?;
            println!(
                "{} {} ({} liked)",
                if liked { "Liked" } else { "Unliked" },
                id,
                session.likes.number_of_likes()
            );
        }

        Commands::Likes => {
            let session = open_session(config)?;
            if session.likes.number_of_likes() == 0 {
                println!("No liked recipes yet.");
            }
            for like in session.likes.likes() {
                println!("{:<12} {} ({})", like.id, like.title, like.author);
            }
        }

        Commands::Parse { lines } => {
            for line in lines {
                let ingredient = Ingredient::parse(&line);
                println!("{}", serde_json::to_string(&ingredient)?);
            }
        }
    }

    Ok(())
}

fn print_recipe(recipe: &Recipe, liked: bool) {
    println!("{}{}", recipe.title, if liked { "  ♥" } else { "" });
    println!("by {}", recipe.author);
    println!("{} minutes · {} servings", recipe.time, recipe.servings);
    println!();
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
    if !recipe.source_url.is_empty() {
        println!("\nDirections: {}", recipe.source_url);
    }
}
