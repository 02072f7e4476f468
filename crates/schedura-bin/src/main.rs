use std::path::PathBuf;

use clap::{Parser, Subcommand};
use schedura_lib::{
    auth::{AuthService, LogoutOutcome},
    common::FormKind,
    config::Settings,
    error::AppError,
    logging,
    tasks::TaskList,
    validation::rules::{CONFIRM_PASSWORD, EMAIL, FULL_NAME, PASSWORD},
    AppState,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "schedura", version, about = "Schedura session gate and forms")]
struct Cli {
    /// Explicit config file (TOML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the startup gate and print the navigation root
    Start,
    /// Validate and submit the login form
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Validate and submit the registration form
    Register {
        #[arg(long, default_value = "")]
        full_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        /// Only checked under the basic registration policy
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Log out
    Logout,
    /// Print the starter task list and its counters
    Tasks,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    logging::init(&settings)?;

    let state = AppState::from_settings(settings)?;

    match cli.command {
        Command::Start => {
            let root = state.navigation_root().await;
            println!("{}", serde_json::to_string_pretty(&root)?);
        },
        Command::Login { email, password } => {
            let mut form = state.form(FormKind::Login);
            form.set(EMAIL, email);
            form.set(PASSWORD, password);
            report(form.submit(state.auth.as_ref()).await);
        },
        Command::Register {
            full_name,
            email,
            password,
            confirm_password,
        } => {
            let mut form = state.form(FormKind::Register);
            form.set(FULL_NAME, full_name);
            form.set(EMAIL, email);
            form.set(PASSWORD, password);
            if let Some(confirm) = confirm_password {
                form.set(CONFIRM_PASSWORD, confirm);
            }
            report(form.submit(state.auth.as_ref()).await);
        },
        Command::Logout => match state.auth.logout().await? {
            LogoutOutcome::MarkerKept => {
                println!("Logged out (session marker kept, set clear_marker_on_logout to remove it)")
            },
            LogoutOutcome::MarkerCleared => println!("Logged out"),
        },
        Command::Tasks => {
            let tasks = TaskList::with_starter_tasks();
            for task in tasks.iter() {
                let mark = if task.completed { "x" } else { " " };
                println!("[{mark}] {} {}", task.id, task.title);
            }
            let summary = tasks.summary();
            println!(
                "total: {}, completed: {}, pending: {}",
                summary.total, summary.completed, summary.pending
            );
        },
    }

    Ok(())
}

fn report(result: Result<(), AppError>) {
    match result {
        Ok(()) => {
            info!("submit succeeded");
            println!("Success");
        },
        Err(AppError::Validation(errors)) => {
            for (field, message) in errors.iter() {
                println!("{field}: {message}");
            }
        },
        Err(err) => {
            eprintln!("Error: {}", err.sanitized_message());
        },
    }
}
