use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use genms_version::cli::{run_version_workflow, VersionArgs};
use genms_version::domain::Granularity;
use genms_version::ui;

#[derive(Parser)]
#[command(
    name = "genms-version",
    version,
    about = "tool that returns a semver based off the repos history.",
    long_about = "genms-version inspects the repository and uses the most recent tag to return a semantic version in the format \"v<major>.<minor>.<patch>\"."
)]
struct Args {
    #[arg(short, long, global = true, help = "When set the branch will be included in the version.")]
    branch: bool,

    #[arg(short, long, global = true, help = "When set the output version will be generated in a docker compatible manner.")]
    docker: bool,

    #[arg(short, long, global = true, help = "When set the incremented version is returned.")]
    increment: bool,

    #[arg(short, long, global = true, help = "When set the full semver version is returned. IE v1.2.0 instead of v1.2 for a minor version.")]
    full: bool,

    #[arg(short, long, global = true, help = "When set the revision will be included in the version.")]
    revision: bool,

    #[arg(short, long, global = true, help = "When set the semver will be included in the version regardless of whether the version is for the master branch.")]
    semver: bool,

    #[arg(short, long, global = true, value_name = "NAME", help = "Overrides the \"master\" branch of the repo. [default: master]")]
    master: Option<String>,

    #[arg(short = 'B', long, global = true, value_name = "NAME", help = "When set this branch will be used when one cannot be determined.")]
    default_branch: Option<String>,

    #[arg(short, long, global = true, value_name = "FILE", help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    verbose: u8,

    #[arg(value_name = "PATH", help = "Repository to inspect [default: .]")]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Args, Clone)]
struct Target {
    #[arg(value_name = "PATH", help = "Repository to inspect [default: .]")]
    path: Option<PathBuf>,
}

#[derive(Subcommand, Clone)]
enum Command {
    /// Print the major version, e.g. v1
    Major(Target),
    /// Print the minor version, e.g. v1.2
    Minor(Target),
    /// Print the patch version, e.g. v1.2.3
    Patch(Target),
}

impl Command {
    fn granularity(&self) -> Granularity {
        match self {
            Command::Major(_) => Granularity::Major,
            Command::Minor(_) => Granularity::Minor,
            Command::Patch(_) => Granularity::Patch,
        }
    }

    fn path(&self) -> Option<&PathBuf> {
        match self {
            Command::Major(target) | Command::Minor(target) | Command::Patch(target) => {
                target.path.as_ref()
            }
        }
    }
}

impl From<Args> for VersionArgs {
    fn from(args: Args) -> Self {
        // no subcommand behaves like `patch`
        let granularity = args
            .command
            .as_ref()
            .map_or(Granularity::Patch, Command::granularity);
        let path = args
            .command
            .as_ref()
            .and_then(Command::path)
            .or(args.path.as_ref())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."));

        VersionArgs {
            path,
            config_path: args.config,
            granularity,
            increment: args.increment,
            branch: args.branch,
            docker: args.docker,
            full: args.full,
            revision: args.revision,
            semver: args.semver,
            master: args.master,
            default_branch: args.default_branch,
        }
    }
}

/// `-v` flags take precedence over `RUST_LOG`, which only applies without them.
fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        _ => EnvFilter::new(default_directive),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version go to stdout and exit successfully
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_logging(args.verbose);

    match run_version_workflow(&args.into()) {
        Ok(version) => println!("{}", version),
        Err(e) => {
            ui::display_error_chain(&e);
            std::process::exit(1);
        }
    }
}
