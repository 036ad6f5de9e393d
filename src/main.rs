use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use rc_align::cli::{run_align_workflow, settle, AlignOutcome, AlignWorkflowArgs};
use rc_align::config;
use rc_align::git::Git2Repository;
use rc_align::logging;
use rc_align::output::{GithubOutput, StdoutOutput};
use rc_align::ui;

#[derive(clap::Parser)]
#[command(
    name = "rc-align",
    version,
    about = "Calculate the next release-candidate version from tags and conventional commits"
)]
struct Args {
    #[arg(short, long, default_value = ".", help = "Repository to inspect")]
    repo: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        long,
        help = "File to append key=value output to (defaults to $GITHUB_OUTPUT, then stdout)"
    )]
    github_output: Option<PathBuf>,

    #[arg(long, help = "Calculate without emitting any output")]
    dry_run: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "More log output (-vv for trace)")]
    verbose: u8,

    #[arg(short, long, help = "Only log errors")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // logging is advisory; a second subscriber or a broken one must not stop the run
    if let Err(e) = logging::init_logging(logging::env_filter(args.quiet, args.verbose)) {
        eprintln!("Warning: {}", e);
    }

    // every failure is fail-open: warn, emit nothing, exit 0
    if let Some(outcome) = settle(run(&args)) {
        if !args.quiet {
            ui::display_outcome(&outcome);
        }
    }

    Ok(())
}

fn run(args: &Args) -> rc_align::Result<AlignOutcome> {
    let config = config::load_config(args.config.as_deref())?;
    let repo = Git2Repository::open(&args.repo)?;
    let workflow_args = AlignWorkflowArgs {
        dry_run: args.dry_run,
    };

    let github_output = args
        .github_output
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty())
        .map(GithubOutput::new)
        .or_else(GithubOutput::from_env);

    match github_output {
        Some(mut output) => run_align_workflow(&repo, &mut output, &config, &workflow_args),
        None => run_align_workflow(&repo, &mut StdoutOutput, &config, &workflow_args),
    }
}
