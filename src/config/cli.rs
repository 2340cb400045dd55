use crate::config::toml_config::TomlConfig;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "zodiac-reading")]
#[command(about = "Zodiac signs, horoscopes and compatibility readings from birth dates")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Fix the random score adjustment for repeatable output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Reject dates that do not exist on the calendar (e.g. 02-30)
    #[arg(long, global = true)]
    pub strict_dates: bool,

    /// Override the history file location
    #[arg(long, global = true)]
    pub history_path: Option<String>,

    /// Override the user id readings are stored under
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve the zodiac sign for a birth date
    Sign {
        /// YYYY-MM-DD or MM-DD
        date: String,
    },
    /// Generate a personal horoscope reading
    Horoscope(HoroscopeArgs),
    /// Generate a compatibility reading for two people
    Compat(CompatArgs),
    /// Show or export saved readings
    History(HistoryArgs),
    /// Show or update the stored profile
    Profile(ProfileArgs),
}

#[derive(Debug, Clone, Args)]
pub struct HoroscopeArgs {
    #[arg(long)]
    pub name: String,

    /// YYYY-MM-DD or MM-DD
    #[arg(long)]
    pub date: String,

    #[arg(long)]
    pub time: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Save the reading to history
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CompatArgs {
    #[arg(long)]
    pub name1: String,

    #[arg(long)]
    pub date1: String,

    #[arg(long)]
    pub time1: Option<String>,

    #[arg(long)]
    pub name2: String,

    #[arg(long)]
    pub date2: String,

    #[arg(long)]
    pub time2: Option<String>,

    /// Save the reading to history
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Clone, Args)]
pub struct HistoryArgs {
    /// Export format: csv or json
    #[arg(long)]
    pub export: Option<String>,

    /// Export destination (stdout when omitted)
    #[arg(long, requires = "export")]
    pub out: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub full_name: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    pub birth_date: Option<String>,

    #[arg(long)]
    pub birth_time: Option<String>,

    #[arg(long)]
    pub birth_location: Option<String>,
}

impl ProfileArgs {
    pub fn has_updates(&self) -> bool {
        self.full_name.is_some()
            || self.username.is_some()
            || self.birth_date.is_some()
            || self.birth_time.is_some()
            || self.birth_location.is_some()
    }
}

impl CliConfig {
    /// 命令列參數覆蓋 TOML 設定
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(seed) = self.seed {
            config.engine.seed = Some(seed);
            tracing::info!("🔧 Seed overridden to: {}", seed);
        }
        if self.strict_dates {
            config.engine.strict_dates = Some(true);
        }
        if let Some(path) = &self.history_path {
            config.history.path = Some(path.clone());
        }
        if let Some(user) = &self.user {
            config.history.user_id = Some(user.clone());
        }
        if self.json {
            config.output.format = Some("json".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_parse_compat_command() {
        let cli = CliConfig::try_parse_from([
            "zodiac-reading",
            "--seed",
            "7",
            "compat",
            "--name1",
            "Ann",
            "--date1",
            "1990-03-21",
            "--name2",
            "Bob",
            "--date2",
            "10-01",
            "--save",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Command::Compat(args) => {
                assert_eq!(args.name2, "Bob");
                assert_eq!(args.date2, "10-01");
                assert!(args.save);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::try_parse_from(["zodiac-reading", "sign", "03-21", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_overrides_apply_to_toml() {
        let cli = CliConfig::try_parse_from([
            "zodiac-reading",
            "--seed",
            "3",
            "--user",
            "cli-user",
            "--strict-dates",
            "history",
        ])
        .unwrap();
        let mut config = TomlConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.seed(), Some(3));
        assert_eq!(config.user_id(), "cli-user");
        assert!(config.strict_dates());
        assert_eq!(config.output_format(), "text");
    }

    #[test]
    fn test_out_requires_export() {
        assert!(CliConfig::try_parse_from(["zodiac-reading", "history", "--out", "x.csv"]).is_err());
    }
}
