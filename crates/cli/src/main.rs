mod error;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use policy::{PolicyConfig, PolicySet, Resource, Subject};

use error::Result;

const POLICY_FILE: &str = "warden.toml";

#[derive(Parser)]
#[command(name = "warden")]
#[command(about = "A rule-based access-control decision engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a subject may access a resource
    Check(CheckArgs),
    /// List the active policy's rules in evaluation order
    Rules {
        /// Policy file (defaults to warden.toml, then the baseline policy)
        #[arg(long)]
        policy: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CheckArgs {
    /// Subject identifier
    #[arg(long)]
    subject: String,

    /// Subject department
    #[arg(long)]
    subject_dept: String,

    /// Subject clearance level
    #[arg(long)]
    clearance: u32,

    /// Resource name
    #[arg(long)]
    resource: String,

    /// Resource department
    #[arg(long)]
    resource_dept: String,

    /// Resource sensitivity level
    #[arg(long)]
    sensitivity: u32,

    /// Policy file (defaults to warden.toml, then the baseline policy)
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Print the decision as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => cmd_check(args),
        Commands::Rules { policy } => cmd_rules(policy.as_deref()),
    }
}

fn cmd_check(args: CheckArgs) -> Result<()> {
    let set = load_policy(args.policy.as_deref())?;

    let subject = Subject::new(args.subject, args.subject_dept, args.clearance);
    let resource = Resource::new(args.resource, args.resource_dept, args.sensitivity);

    let decision = set.evaluate(&subject, &resource)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
        return Ok(());
    }

    match decision.failed_rule() {
        None => println!("granted"),
        Some(rule) => println!("denied by {rule}"),
    }

    Ok(())
}

fn cmd_rules(policy_path: Option<&Path>) -> Result<()> {
    let set = load_policy(policy_path)?;

    if set.is_empty() {
        println!("No rules configured. Every request is granted.");
        return Ok(());
    }

    for rule in set.rules_in_order() {
        println!("{}", rule.name());
    }

    Ok(())
}

fn load_policy(path: Option<&Path>) -> Result<PolicySet> {
    match path {
        Some(path) => Ok(PolicyConfig::load(path)?.build()),
        None => {
            let default = Path::new(POLICY_FILE);
            if default.exists() {
                Ok(PolicyConfig::load(default)?.build())
            } else {
                Ok(PolicySet::baseline())
            }
        }
    }
}
