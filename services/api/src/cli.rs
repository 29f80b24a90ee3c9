use crate::demo::{run_assessment, run_demo, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use meno_assess::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Menopause Assessment Service",
    about = "Evaluate menopause questionnaire answers and serve the assessment API",
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
    /// Evaluate answers from a JSON record or a CSV export
    Assess(AssessArgs),
    /// Walk through built-in sample questionnaires
    Demo(DemoArgs),
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
        Command::Assess(args) => run_assessment(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assess_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["meno", "assess"]).is_err());
        assert!(Cli::try_parse_from([
            "meno", "assess", "--answers", "a.json", "--csv", "b.csv"
        ])
        .is_err());

        let cli = Cli::try_parse_from(["meno", "assess", "--csv", "batch.csv", "--json"])
            .expect("csv batch parses");
        match cli.command {
            Some(Command::Assess(args)) => {
                assert!(args.answers.is_none());
                assert!(args.json);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["meno"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }
}
