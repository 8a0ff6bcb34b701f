pub mod commands;

use budget_app_core::BackendKind;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum CliBackend {
    Firebase,
    Memory,
}

impl From<CliBackend> for BackendKind {
    fn from(b: CliBackend) -> Self {
        match b {
            CliBackend::Firebase => BackendKind::Firebase,
            CliBackend::Memory => BackendKind::Memory,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[arg(long, value_enum, global = true, default_value_t = CliBackend::Firebase)]
    pub backend: CliBackend,
    /// Id token of an existing session, for database commands.
    #[arg(long, global = true, env = "BUDGET_ID_TOKEN", hide_env_values = true)]
    pub id_token: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and store its profile
    Signup {
        #[arg(long)]
        display_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "BUDGET_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(
            long,
            env = "BUDGET_CONFIRM_PASSWORD",
            hide_env_values = true,
            help = "Defaults to --password, which skips the password-match check"
        )]
        confirm_password: Option<String>,
    },
    /// Inspect stored user records
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Open (or create) a monthly budget
    Budget {
        #[command(subcommand)]
        command: BudgetCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    Show {
        #[arg(long)]
        account_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    Open {
        #[arg(long)]
        account_id: String,
        #[arg(long)]
        year: String,
        #[arg(long)]
        month: String,
    },
}

impl Commands {
    /// Account the command acts on when it needs an existing session.
    pub fn account_id(&self) -> Option<&str> {
        match self {
            Commands::Signup { .. } => None,
            Commands::User {
                command: UserCommands::Show { account_id },
            }
            | Commands::Budget {
                command: BudgetCommands::Open { account_id, .. },
            } => Some(account_id),
        }
    }
}
