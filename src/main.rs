// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::{Args, Command, is_config_operation};
use opendota_client::{AppError, Config, MatchFilter, OpenDotaClient, Query};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if is_config_operation(&args) {
        return handle_config_operation(&args).await;
    }

    let mut config = Config::load().await?;
    if args.raw_json {
        config.with_models = false;
    }

    let (log_file_path, _guard) = logging::setup_logging(&args, Some(&config)).await?;
    info!("Logs are being written to: {log_file_path}");

    let Some(command) = args.command else {
        println!("No command given. Run with --help to see the available commands.");
        return Ok(());
    };

    let client = OpenDotaClient::from_config(&config)?;
    let result = run_command(&client, command).await;
    if let Err(e) = &result {
        error!("Command failed: {e}");
    }
    result
}

async fn handle_config_operation(args: &Args) -> Result<(), AppError> {
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(new_url) = &args.new_api_url {
        config.api_url = new_url.clone();
    }

    if let Some(new_key) = &args.new_api_key {
        config.api_key = Some(new_key.clone());
    } else if args.clear_api_key {
        config.api_key = None;
        println!("API key cleared. Requests will be anonymous.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

async fn run_command(client: &OpenDotaClient, command: Command) -> Result<(), AppError> {
    match command {
        Command::Player { account_id } => print_json(&client.get_player(account_id).await?),
        Command::Profile { account_id } => {
            let (profile, wl, recent) = futures::future::try_join3(
                client.get_player(account_id),
                client.get_player_wl(account_id, Query::new()),
                client.get_player_recent_matches(account_id),
            )
            .await?;
            print_json(&json!({
                "profile": profile.to_value(),
                "wl": wl.to_value(),
                "recent_matches": recent.to_value(),
            }))
        }
        Command::Matches {
            account_id,
            limit,
            hero_id,
        } => {
            let filter = MatchFilter {
                limit,
                hero_id,
                ..MatchFilter::default()
            };
            print_json(&client.get_player_matches(account_id, &filter).await?)
        }
        Command::Match { match_id } => print_json(&client.get_match(match_id).await?),
        Command::Heroes => print_json(&client.get_heroes().await?),
        Command::Hero { param, value, all } => {
            client.load_heroes().await?;
            // Numbers and booleans compare as JSON values, anything else as text
            let value = serde_json::from_str::<Value>(&value).unwrap_or(Value::String(value));
            if all {
                print_json(&client.get_heroes_by_param(&param, value)?)
            } else {
                match client.get_hero_by_param(&param, value)? {
                    Some(hero) => print_json(hero),
                    None => {
                        println!("No hero with {param} matching the given value");
                        Ok(())
                    }
                }
            }
        }
        Command::ProPlayers => print_json(&client.get_pro_players().await?),
        Command::Constants { resource } => match resource {
            Some(resource) => print_json(&client.get_constant(&resource).await?),
            None => print_json(&client.get_constants().await?),
        },
        Command::Health => print_json(&client.check_health().await?),
        Command::Raw { path, params } => {
            let query = parse_params(&params)?;
            print_json(&client.get_raw(&path, query).await?)
        }
    }
}

/// Parses `name=value` arguments into a query
fn parse_params(params: &[String]) -> Result<Query, AppError> {
    params
        .iter()
        .map(|param| {
            param
                .split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| {
                    AppError::config_error(format!("Expected name=value, got '{param}'"))
                })
        })
        .collect()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
