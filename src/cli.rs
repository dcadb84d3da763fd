//! CLI interface for folio

use clap::{Parser, Subcommand};
use anyhow::Result;

use crate::expenses::{self, TransactionForm, TxKind};
use crate::expenses::views::KindFilter;
use crate::recipes::{self, SearchFilters};
use crate::tasks::{self, Priority, TaskFilter};
use crate::{config, contact, profile, weather};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio site as a CLI: projects, demos, and a contact form", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Task manager demo
    Tasks {
        #[command(subcommand)]
        command: Option<TaskCommands>,
    },
    /// Expense tracker demo
    Expenses {
        #[command(subcommand)]
        command: Option<ExpenseCommands>,
    },
    /// Weather lookup demo
    Weather {
        #[command(subcommand)]
        command: WeatherCommands,
    },
    /// Recipe finder demo
    Recipes {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Send a message through the contact form
    Contact {
        /// Your name
        #[arg(long)]
        name: String,
        /// Your email address
        #[arg(long)]
        email: String,
        /// Message subject
        #[arg(long)]
        subject: String,
        /// Message body (at least 10 characters)
        #[arg(long)]
        message: String,
    },
    /// Browse the portfolio content
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Configure API keys and the contact recipient
    Config {
        /// Set the OpenWeatherMap API key
        #[arg(long)]
        set_weather_api_key: Option<String>,
        /// Set the weather API base URL
        #[arg(long)]
        set_weather_base_url: Option<String>,
        /// Set the Spoonacular API key
        #[arg(long)]
        set_recipe_api_key: Option<String>,
        /// Set the contact recipient address
        #[arg(long)]
        set_contact_email: Option<String>,
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
enum TaskCommands {
    /// Add a new task
    Add {
        /// Task text
        text: String,
    },
    /// List tasks
    List {
        /// Which tasks to show
        #[arg(short, long, value_enum, default_value = "all")]
        filter: TaskFilter,
    },
    /// Toggle a task's completed state
    Toggle {
        /// Task id
        id: String,
    },
    /// Edit a task's text
    Edit {
        /// Task id
        id: String,
        /// New text
        text: String,
    },
    /// Set a task's priority, or cycle it when no level is given
    Priority {
        /// Task id
        id: String,
        /// Priority level (omit to cycle low -> medium -> high)
        #[arg(value_enum)]
        level: Option<Priority>,
    },
    /// Delete a task
    Delete {
        /// Task id
        id: String,
    },
    /// Remove all completed tasks
    ClearCompleted,
}

#[derive(Subcommand)]
enum ExpenseCommands {
    /// Add a transaction
    Add {
        /// Income or expense
        #[arg(short = 't', long = "type", value_enum)]
        kind: TxKind,
        /// Amount, e.g. 42.50
        #[arg(short, long)]
        amount: String,
        /// Category (must match the type's category list)
        #[arg(short, long)]
        category: String,
        /// Short description
        #[arg(short, long)]
        description: String,
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long, default_value = "")]
        date: String,
    },
    /// List transactions with totals
    List {
        /// Filter by type
        #[arg(short = 't', long = "type", value_enum, default_value = "all")]
        kind: KindFilter,
        /// Filter by month as YYYY-MM
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Re-enter and replace a transaction's fields
    Edit {
        /// Transaction id
        id: String,
        #[arg(short = 't', long = "type", value_enum)]
        kind: TxKind,
        #[arg(short, long)]
        amount: String,
        #[arg(short, long)]
        category: String,
        #[arg(short, long)]
        description: String,
        #[arg(long, default_value = "")]
        date: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction id
        id: String,
    },
    /// Spending by category for a month (or all time)
    Breakdown {
        /// Month as YYYY-MM
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Income and expenses for the last six months
    Trends,
    /// Export all transactions to a JSON file
    Export {
        /// Output path (defaults to expense-tracker-<date>.json)
        path: Option<std::path::PathBuf>,
    },
    /// Import transactions from a JSON file
    Import {
        /// Input path
        path: std::path::PathBuf,
    },
    /// List the known categories
    Categories,
}

#[derive(Subcommand)]
enum WeatherCommands {
    /// Current conditions for a city
    Current {
        /// City name
        city: String,
        /// API key (overrides the configured one)
        #[arg(long, env = "FOLIO_WEATHER_API_KEY")]
        api_key: Option<String>,
        /// How many times to retry a failed request (max 3)
        #[arg(long, default_value = "0")]
        retries: u32,
    },
    /// 5-period forecast for a city
    Forecast {
        /// City name
        city: String,
        #[arg(long, env = "FOLIO_WEATHER_API_KEY")]
        api_key: Option<String>,
        #[arg(long, default_value = "0")]
        retries: u32,
    },
}

#[derive(Subcommand)]
enum RecipeCommands {
    /// Show trending recipes
    Trending {
        /// API key (overrides the configured one)
        #[arg(long, env = "FOLIO_SPOONACULAR_API_KEY")]
        api_key: Option<String>,
    },
    /// Search recipes by text with optional filters
    Search {
        /// Search terms
        query: String,
        /// Diet filter, e.g. vegetarian
        #[arg(long)]
        diet: Option<String>,
        /// Cuisine filter, e.g. italian
        #[arg(long)]
        cuisine: Option<String>,
        /// Dish type filter, e.g. "main course"
        #[arg(long = "type")]
        dish_type: Option<String>,
        /// Maximum ready time in minutes
        #[arg(long)]
        max_ready_time: Option<u32>,
        /// Minimum health score (0-100)
        #[arg(long)]
        min_health_score: Option<u32>,
        #[arg(long, env = "FOLIO_SPOONACULAR_API_KEY")]
        api_key: Option<String>,
    },
    /// Find recipes by the ingredients you have
    ByIngredients {
        /// Ingredient names
        #[arg(required = true)]
        ingredients: Vec<String>,
        #[arg(long, env = "FOLIO_SPOONACULAR_API_KEY")]
        api_key: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// About the site owner
    About,
    /// Project showcase
    Projects,
    /// Frequently asked questions
    Faq,
    /// Resume file details
    Resume,
    /// Contact details and social links
    Contact,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            profile::show_about();
        }
        Some(Commands::Tasks { command }) => {
            match command.unwrap_or(TaskCommands::List { filter: TaskFilter::All }) {
                TaskCommands::Add { text } => tasks::add_task(&text)?,
                TaskCommands::List { filter } => tasks::list_tasks(filter)?,
                TaskCommands::Toggle { id } => tasks::toggle_task(&id)?,
                TaskCommands::Edit { id, text } => tasks::edit_task(&id, &text)?,
                TaskCommands::Priority { id, level } => tasks::set_task_priority(&id, level)?,
                TaskCommands::Delete { id } => tasks::delete_task(&id)?,
                TaskCommands::ClearCompleted => tasks::clear_completed_tasks()?,
            }
        }
        Some(Commands::Expenses { command }) => {
            let command = command.unwrap_or(ExpenseCommands::List {
                kind: KindFilter::All,
                month: None,
            });
            match command {
                ExpenseCommands::Add { kind, amount, category, description, date } => {
                    expenses::add_transaction(TransactionForm {
                        kind: Some(kind),
                        amount,
                        category,
                        description,
                        date,
                    })?;
                }
                ExpenseCommands::List { kind, month } => {
                    expenses::list_transactions(kind, month)?;
                }
                ExpenseCommands::Edit { id, kind, amount, category, description, date } => {
                    expenses::edit_transaction(&id, TransactionForm {
                        kind: Some(kind),
                        amount,
                        category,
                        description,
                        date,
                    })?;
                }
                ExpenseCommands::Delete { id } => expenses::delete_transaction(&id)?,
                ExpenseCommands::Breakdown { month } => expenses::show_breakdown(month)?,
                ExpenseCommands::Trends => expenses::show_trends()?,
                ExpenseCommands::Export { path } => expenses::transfer::export_transactions(path)?,
                ExpenseCommands::Import { path } => expenses::transfer::import_transactions(&path)?,
                ExpenseCommands::Categories => {
                    println!("Expense: {}", expenses::categories(TxKind::Expense).join(", "));
                    println!("Income:  {}", expenses::categories(TxKind::Income).join(", "));
                }
            }
        }
        Some(Commands::Weather { command }) => match command {
            WeatherCommands::Current { city, api_key, retries } => {
                weather::show_current(&city, api_key, retries).await?;
            }
            WeatherCommands::Forecast { city, api_key, retries } => {
                weather::show_forecast(&city, api_key, retries).await?;
            }
        },
        Some(Commands::Recipes { command }) => match command {
            RecipeCommands::Trending { api_key } => {
                recipes::show_trending(api_key).await?;
            }
            RecipeCommands::Search {
                query,
                diet,
                cuisine,
                dish_type,
                max_ready_time,
                min_health_score,
                api_key,
            } => {
                let filters = SearchFilters {
                    diet,
                    cuisine,
                    dish_type,
                    max_ready_time,
                    min_health_score,
                };
                recipes::search(&query, filters, api_key).await?;
            }
            RecipeCommands::ByIngredients { ingredients, api_key } => {
                recipes::search_by_ingredients(&ingredients, api_key).await?;
            }
        },
        Some(Commands::Contact { name, email, subject, message }) => {
            contact::submit(contact::ContactForm {
                name,
                email,
                subject,
                message,
            })?;
        }
        Some(Commands::Profile { command }) => match command {
            ProfileCommands::About => profile::show_about(),
            ProfileCommands::Projects => profile::show_projects(),
            ProfileCommands::Faq => profile::show_faq(),
            ProfileCommands::Resume => profile::show_resume(),
            ProfileCommands::Contact => profile::show_contact_info(),
        },
        Some(Commands::Config {
            set_weather_api_key,
            set_weather_base_url,
            set_recipe_api_key,
            set_contact_email,
            show,
            reset,
        }) => {
            let mut handled = false;
            if let Some(key) = set_weather_api_key {
                config::set_weather_api_key(&key)?;
                handled = true;
            }
            if let Some(url) = set_weather_base_url {
                config::set_weather_base_url(&url)?;
                handled = true;
            }
            if let Some(key) = set_recipe_api_key {
                config::set_recipe_api_key(&key)?;
                handled = true;
            }
            if let Some(email) = set_contact_email {
                config::set_contact_email(&email)?;
                handled = true;
            }
            if reset {
                config::reset_config()?;
                handled = true;
            }
            if show || !handled {
                config::show_config()?;
            }
        }
    }

    Ok(())
}
