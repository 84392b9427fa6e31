use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dayboard", version, about = "Dayboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Academic task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Goal management
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Deadline tracking and live countdowns
    Deadline {
        #[command(subcommand)]
        action: commands::deadline::DeadlineAction,
    },
    /// Habit tracking and streaks
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Weight history and health metrics
    Health {
        #[command(subcommand)]
        action: commands::health::HealthAction,
    },
    /// Weekly planner
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// AI calorie estimation from a meal photo
    Meal {
        #[command(subcommand)]
        action: commands::meal::MealAction,
    },
    /// Next-match lookup
    Match {
        #[command(subcommand)]
        action: commands::next_match::MatchAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Goal { action } => commands::goal::run(action),
        Commands::Deadline { action } => commands::deadline::run(action),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Health { action } => commands::health::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Meal { action } => commands::meal::run(action),
        Commands::Match { action } => commands::next_match::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
