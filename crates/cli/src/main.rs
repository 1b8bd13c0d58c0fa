use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coach_agents::CoachAgent;
use coach_core::{ChatInput, MealSlot};
use coach_observability::{init_tracing, AppMetrics};
use serde_json::json;

#[derive(Debug, Parser)]
#[command(name = "coach")]
#[command(about = "Carnivore Coach CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat with the advisor.
    Chat,
    /// Print a multi-day meal plan.
    MealPlan {
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Rough macro estimate for a comma-separated food list.
    Macros { foods: String },
    /// Meal suggestions for one slot of the day.
    Meals {
        #[arg(long, default_value = "any")]
        slot: String,
    },
    /// Nutrient facts and benefits for a catalog food.
    Nutrients { food: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("coach_cli");
    let cli = Cli::parse();

    let agent = CoachAgent::without_completion(AppMetrics::shared());

    match cli.command {
        Command::Chat => run_chat(agent).await?,
        Command::MealPlan { days } => {
            print!("{}", agent.meal_plan(days).render());
        }
        Command::Macros { foods } => {
            println!("{}", agent.macros(&foods));
        }
        Command::Meals { slot } => {
            let slot = MealSlot::parse(&slot).context("invalid --slot value")?;
            for idea in agent.meal_suggestions(slot) {
                println!("- {idea}");
            }
        }
        Command::Nutrients { food } => {
            let (profile, benefits) = agent
                .nutrients(&food)
                .context("food is not in the nutrient catalog")?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "nutrients": profile,
                    "health_benefits": benefits,
                }))?
            );
        }
    }

    Ok(())
}

async fn run_chat(agent: CoachAgent) -> Result<()> {
    println!("Carnivore Coach chat mode. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let reply = agent
            .handle_chat(ChatInput {
                message: Some(message.to_string()),
            })
            .await;

        println!("\n{}\n", reply.reply_text);
    }

    Ok(())
}
