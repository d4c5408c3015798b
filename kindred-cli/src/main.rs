mod client;
mod commands;
mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use kindred_core::config::KindredConfig;
use kindred_core::date::parse_iso_date;
use kindred_core::{MemberForm, MemberId, RelationFilter, RelationType};

use crate::commands::Context;
use crate::commands::auth::Credentials;
use crate::commands::update::MemberPatch;

#[derive(Parser)]
#[command(name = "kindred")]
#[command(about = "Keep your family roster and never miss a birthday or memorial")]
struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,

    /// Roster API base URL (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: Option<String>,

        /// Prompted for when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// List family members
    Members {
        /// "all" or one of: grand-parent, parent, child, sibling, grand-child, spouse, other
        #[arg(short, long, default_value = "all", value_parser = parse_relation_filter)]
        relation: RelationFilter,
    },
    /// Add a family member
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long, default_value = "parent", value_parser = parse_relation)]
        relation: RelationType,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        born: Option<String>,

        /// Date of death (YYYY-MM-DD)
        #[arg(long)]
        died: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Change a family member; pass an empty value to clear a field
    Update {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long, value_parser = parse_relation)]
        relation: Option<RelationType>,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        born: Option<String>,

        /// Date of death (YYYY-MM-DD)
        #[arg(long)]
        died: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove a family member
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show birthdays and memorials coming up
    Upcoming {
        /// Look this many days ahead (defaults to the configured window)
        #[arg(short, long)]
        days: Option<u32>,

        /// Print the feed as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = KindredConfig::load()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    // The only read of the wall clock; everything downstream gets `today`
    let today = cli.today.unwrap_or_else(|| chrono::Local::now().date_naive());
    log::debug!("using {} as today, api at {}", today, config.api_url);

    let ctx = Context { config, today };

    match cli.command {
        Commands::Register { username, email, password } => {
            let creds = Credentials { username, email: None, password };
            commands::auth::register(&ctx, creds, email).await
        }
        Commands::Login { username, email, password } => {
            let creds = Credentials { username, email, password };
            commands::auth::login(&ctx, creds).await
        }
        Commands::Logout => commands::auth::logout(),
        Commands::Members { relation } => commands::members::run(&ctx, relation).await,
        Commands::Add { name, relation, born, died, notes } => {
            let form = MemberForm {
                name,
                relation_type: relation,
                date_of_birth: born,
                date_of_death: died,
                notes,
            };
            commands::add::run(&ctx, form).await
        }
        Commands::Update { id, name, relation, born, died, notes } => {
            let patch = MemberPatch { name, relation, born, died, notes };
            commands::update::run(&ctx, MemberId::from(id.as_str()), patch).await
        }
        Commands::Delete { id, yes } => {
            commands::delete::run(&ctx, MemberId::from(id.as_str()), yes).await
        }
        Commands::Upcoming { days, json } => commands::upcoming::run(&ctx, days, json).await,
    }
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_iso_date(s).map_err(|e| e.to_string())
}

fn parse_relation(s: &str) -> Result<RelationType, String> {
    s.parse().map_err(|e: kindred_core::error::KindredError| e.to_string())
}

fn parse_relation_filter(s: &str) -> Result<RelationFilter, String> {
    s.parse().map_err(|e: kindred_core::error::KindredError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn today_override_is_parsed() {
        let cli = Cli::try_parse_from(["kindred", "upcoming", "--today", "2024-06-10"]).unwrap();
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 6, 10));
    }

    #[test]
    fn bad_today_is_rejected() {
        assert!(Cli::try_parse_from(["kindred", "--today", "tomorrow", "upcoming"]).is_err());
    }

    #[test]
    fn add_defaults_to_parent() {
        let cli = Cli::try_parse_from(["kindred", "add", "--name", "Ada"]).unwrap();
        match cli.command {
            Commands::Add { relation, born, .. } => {
                assert_eq!(relation, RelationType::Parent);
                assert_eq!(born, None);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn register_requires_email() {
        assert!(Cli::try_parse_from(["kindred", "register", "-u", "ada"]).is_err());

        let args = ["kindred", "register", "-u", "ada", "-e", "ada@example.com"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Register { email, .. } => assert_eq!(email, "ada@example.com"),
            _ => panic!("expected register"),
        }
    }

    #[test]
    fn ids_are_kept_as_typed() {
        let cli = Cli::try_parse_from(["kindred", "delete", "007", "--yes"]).unwrap();
        match cli.command {
            Commands::Delete { id, yes } => {
                assert!(yes);
                assert_eq!(MemberId::from(id.as_str()).to_string(), "007");
            }
            _ => panic!("expected delete"),
        }
    }

    #[test]
    fn members_relation_filter() {
        let cli = Cli::try_parse_from(["kindred", "members", "-r", "grand-child"]).unwrap();
        match cli.command {
            Commands::Members { relation } => {
                assert_eq!(relation, RelationFilter::Only(RelationType::GrandChild));
            }
            _ => panic!("expected members"),
        }

        assert!(Cli::try_parse_from(["kindred", "members", "-r", "cousin"]).is_err());
    }
}
