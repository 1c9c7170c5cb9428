use crate::report::{run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use exposure_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Exposure Engine",
    about = "Score athlete recruiting profiles against college soccer levels",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a profile JSON file and print the fit report
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn score_command_parses_flags() {
        let cli = Cli::try_parse_from([
            "exposure-engine-api",
            "score",
            "--profile",
            "athlete.json",
            "--json",
            "--as-of",
            "2025-09-01",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Score(args)) => {
                assert!(args.json);
                assert_eq!(args.profile.to_str(), Some("athlete.json"));
                assert_eq!(
                    args.as_of,
                    chrono::NaiveDate::from_ymd_opt(2025, 9, 1)
                );
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["exposure-engine-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
