use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only edits or shows the config file
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_api_key.is_some()
        || args.clear_api_key
        || args.new_api_url.is_some()
}

/// OpenDota API client
///
/// Queries the OpenDota web API and prints the JSON responses.
/// Settings live in the config file and can be overridden with
/// OPENDOTA_* environment variables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print raw JSON instead of wrapping responses into models first
    #[arg(long = "raw-json", global = true, help_heading = "Output")]
    pub raw_json: bool,

    /// Store an API key in the config file
    #[arg(long = "set-api-key", help_heading = "Configuration", value_name = "KEY")]
    pub new_api_key: Option<String>,

    /// Remove the API key from the config file
    #[arg(long = "clear-api-key", help_heading = "Configuration")]
    pub clear_api_key: bool,

    /// Store a different API base URL in the config file
    #[arg(long = "set-api-url", help_heading = "Configuration", value_name = "URL")]
    pub new_api_url: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also print logs to stdout
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Player profile
    Player { account_id: u64 },
    /// Profile, win/loss and recent matches fetched together
    Profile { account_id: u64 },
    /// Matches played by a player
    Matches {
        account_id: u64,
        /// Number of matches to return
        #[arg(long, short = 'n')]
        limit: Option<u32>,
        /// Only matches played as this hero
        #[arg(long)]
        hero_id: Option<u32>,
    },
    /// A single match
    Match { match_id: u64 },
    /// All heroes
    Heroes,
    /// Find heroes by an attribute, e.g. `hero localized_name Axe`
    Hero {
        param: String,
        value: String,
        /// Print every match instead of the first one
        #[arg(long)]
        all: bool,
    },
    /// Professional players
    ProPlayers,
    /// Game constants, or a single resource such as `items`
    Constants { resource: Option<String> },
    /// Service health
    Health,
    /// GET any path, e.g. `raw /api/players/1/wl limit=20`
    Raw {
        path: String,
        /// Query parameters as name=value
        params: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommand() {
        let args = Args::try_parse_from(["opendota", "player", "86745912"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Player {
                account_id: 86745912
            })
        );
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_parse_hero_lookup() {
        let args =
            Args::try_parse_from(["opendota", "hero", "localized_name", "Axe", "--all"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Hero {
                param: "localized_name".to_string(),
                value: "Axe".to_string(),
                all: true
            })
        );
    }

    #[test]
    fn test_parse_raw_with_params() {
        let args = Args::try_parse_from(["opendota", "raw", "/api/players/1/wl", "limit=20"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Raw {
                path: "/api/players/1/wl".to_string(),
                params: vec!["limit=20".to_string()]
            })
        );
    }

    #[test]
    fn test_config_flags() {
        let args = Args::try_parse_from(["opendota", "--set-api-key", "abc"]).unwrap();
        assert_eq!(args.new_api_key.as_deref(), Some("abc"));
        assert!(is_config_operation(&args));

        let args = Args::try_parse_from(["opendota", "--list-config"]).unwrap();
        assert!(is_config_operation(&args));
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Args::try_parse_from(["opendota", "match", "latest"]).is_err());
    }
}
