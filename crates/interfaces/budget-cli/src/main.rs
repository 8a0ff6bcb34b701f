use anyhow::Context;
use budget_app_core::{backends, BackendSettings};
use budget_cli::commands::{self, SignUpInput};
use budget_cli::{BudgetCommands, Cli, Commands, UserCommands};
use budget_infra::Session;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {e}");
    }

    let settings = BackendSettings::load().context("Failed to load settings")?;
    let session = match (cli.id_token, cli.command.account_id()) {
        (Some(id_token), Some(account_id)) => Some(Session {
            account_id: account_id.to_string(),
            id_token,
        }),
        _ => None,
    };
    let backend = backends::connect(cli.backend.into(), &settings, session)?;

    match cli.command {
        Commands::Signup {
            display_name,
            email,
            password,
            confirm_password,
        } => {
            let input = SignUpInput::new(display_name, email, password, confirm_password);
            commands::cmd_signup(backend, input).await?;
        }
        Commands::User { command } => match command {
            UserCommands::Show { account_id } => {
                commands::cmd_user_show(backend, &account_id).await?
            }
        },
        Commands::Budget { command } => match command {
            BudgetCommands::Open {
                account_id,
                year,
                month,
            } => {
                commands::cmd_budget_open(backend, &account_id, &year, &month).await?;
            }
        },
    }

    Ok(())
}
