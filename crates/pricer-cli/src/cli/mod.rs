use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `pricer` binary.
#[derive(Debug, Parser)]
#[command(name = "pricer", version, about = "pricer - catalog listings and bulk price updates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use pricer_core::SortKey;

    use super::subcommands::{AuthCommands, ItemsCommands, PricesCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "pricer", "--format", "table", "--limit", "5", "--verbose", "items", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(5));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Items {
                action: ItemsCommands::List(_)
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["pricer", "auth", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["pricer", "--format", "xml", "auth", "status"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["pricer", "-f", "table", "-l", "7", "auth", "logout"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Table);
        assert_eq!(flags.limit, Some(7));
    }

    #[test]
    fn login_takes_username_and_password() {
        let cli = Cli::try_parse_from([
            "pricer",
            "auth",
            "login",
            "--username",
            "emilys",
            "--password",
            "emilyspass",
        ])
        .expect("cli should parse");

        let Commands::Auth {
            action: AuthCommands::Login(args),
        } = cli.command
        else {
            panic!("expected auth login");
        };
        assert_eq!(args.username, "emilys");
        assert_eq!(args.password, "emilyspass");
    }

    #[test]
    fn login_requires_username() {
        let parsed = Cli::try_parse_from(["pricer", "auth", "login", "--password", "x"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn items_list_defaults_to_price_desc() {
        let cli = Cli::try_parse_from(["pricer", "items", "list", "--category", "laptops"])
            .expect("cli should parse");

        let Commands::Items {
            action: ItemsCommands::List(args),
        } = cli.command
        else {
            panic!("expected items list");
        };
        assert_eq!(args.category.as_deref(), Some("laptops"));
        assert_eq!(args.sort, SortKey::PriceDesc);
        assert_eq!(args.limit, None);
    }

    #[test]
    fn items_list_parses_sort_key() {
        for (value, expected) in [
            ("price-asc", SortKey::PriceAsc),
            ("title", SortKey::Title),
            ("price_desc", SortKey::PriceDesc),
        ] {
            let cli = Cli::try_parse_from(["pricer", "items", "list", "--sort", value])
                .expect("cli should parse");
            let Commands::Items {
                action: ItemsCommands::List(args),
            } = cli.command
            else {
                panic!("expected items list");
            };
            assert_eq!(args.sort, expected);
        }
    }

    #[test]
    fn items_list_rejects_unknown_sort() {
        let parsed = Cli::try_parse_from(["pricer", "items", "list", "--sort", "rating"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn prices_adjust_accepts_negative_for_later_validation() {
        let cli = Cli::try_parse_from(["pricer", "prices", "adjust", "--percentage", "-5"])
            .expect("cli should parse");

        let Commands::Prices {
            action: PricesCommands::Adjust(args),
        } = cli.command
        else {
            panic!("expected prices adjust");
        };
        assert_eq!(args.percentage, -5.0);
    }

    #[test]
    fn prices_adjust_requires_percentage() {
        let parsed = Cli::try_parse_from(["pricer", "prices", "adjust"]);
        assert!(parsed.is_err());
    }
}
