use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Builder;

use userlist::api::ApiClient;
use userlist::config::Config;
use userlist::controller::UserListController;
use userlist::logging::{init_tracing, LogTarget};
use userlist::ui::app::App;
use userlist::ui::users::UsersState;

#[derive(Parser, Debug)]
#[command(
    name = "userlist",
    version,
    about = "Browse the user directory of a JSON API"
)]
struct Args {
    #[arg(long, value_name = "URL", help = "Override the API base URL")]
    base_url: Option<String>,

    #[arg(long, value_name = "PATH", help = "Config file path")]
    config: Option<PathBuf>,

    #[arg(long, value_name = "PATH", help = "Write logs to this file")]
    log_file: Option<PathBuf>,

    #[arg(long, help = "Print users to stdout and exit instead of opening the screen")]
    plain: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let target = LogTarget::resolve(&config.logging, args.log_file.as_deref(), !args.plain);
    init_tracing(&config.logging, &target)
        .with_context(|| format!("Failed to open log output {:?}", target))?;

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = ApiClient::new(&config.api)?;
    let source_label = client.endpoint().to_string();
    tracing::info!(endpoint = %source_label, plain = args.plain, "Starting userlist");

    let controller = UserListController::new(Arc::new(client), runtime.handle().clone());

    if args.plain {
        return runtime.block_on(print_users(controller));
    }

    let app = App::new(controller, source_label);
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    userlist::ui::runtime::run(app, runtime.handle(), tick_rate)
        .context("Terminal screen failed")?;
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' not found", path.display());
            }
            Config::load_from(path)?
        }
        None => Config::load()?,
    };

    if let Some(base_url) = &args.base_url {
        config.api.base_url = base_url.clone();
        config
            .validate()
            .context("Invalid --base-url override")?;
    }

    Ok(config)
}

/// Non-interactive mode: one load, one line per user.
async fn print_users(controller: UserListController) -> Result<()> {
    controller.start();
    match controller.wait_settled().await {
        UsersState::Success(users) => {
            let mut out = io::stdout().lock();
            for user in users {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    user.id, user.name, user.email, user.phone
                )?;
            }
            Ok(())
        }
        UsersState::Error(message) => bail!("{}", message),
        UsersState::Loading => bail!("User load did not complete"),
    }
}
