use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use command_args_core::{ArgumentSchema, Signature};

/// CLI output format for `show`.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "argsig")]
#[command(about = "Inspect and validate command argument signatures")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate one or more signature files.
    Validate(ValidateArgs),
    /// Print usage and argument help for a signature file.
    Usage(UsageArgs),
    /// Print a signature file in normalized form.
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Signature files and/or directories containing signature files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Debug, Args)]
struct UsageArgs {
    /// Signature file.
    input: PathBuf,
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Signature file.
    input: PathBuf,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Validate(args) => run_validate(args),
        Command::Usage(args) => run_usage(args),
        Command::Show(args) => run_show(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let paths = collect_signature_paths(&args.inputs)?;
    if paths.is_empty() {
        return Err("No signature files found".to_string());
    }

    let mut failures = Vec::new();
    for path in &paths {
        if let Err(err) = Signature::load(path) {
            failures.push(format!("{}: {err}", path.display()));
        }
    }

    if !failures.is_empty() {
        eprintln!("\nFailures:");
        for failure in &failures {
            eprintln!("  {failure}");
        }
        return Err(format!(
            "{} of {} signature file(s) failed validation",
            failures.len(),
            paths.len()
        ));
    }

    println!("Validated {} signature file(s).", paths.len());
    Ok(())
}

fn run_usage(args: UsageArgs) -> Result<(), String> {
    let signature = load(&args.input)?;

    println!("Usage: {}", signature.usage());
    if let Some(desc) = &signature.description {
        println!("\n{desc}");
    }
    if !signature.arguments.is_empty() {
        println!("\nArguments:");
        for arg in &signature.arguments {
            println!("  {:<16}{}", arg.usage_token(), describe(arg));
        }
    }
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<(), String> {
    let signature = load(&args.input)?;
    let raw = match args.format {
        CliOutputFormat::Json => serde_json::to_string_pretty(&signature)
            .map_err(|e| format!("JSON serialization failed: {e}"))?,
        CliOutputFormat::Yaml => serde_yaml::to_string(&signature)
            .map_err(|e| format!("YAML serialization failed: {e}"))?,
    };
    println!("{raw}");
    Ok(())
}

fn load(path: &Path) -> Result<Signature, String> {
    Signature::load(path).map_err(|err| format!("Failed to load '{}': {err}", path.display()))
}

fn describe(arg: &ArgumentSchema) -> String {
    let mut notes = vec![arg.kind.to_string()];
    if arg.supports_stdin {
        notes.push("stdin".to_string());
    }
    if arg.recursive {
        notes.push("recursive".to_string());
    }
    let notes = notes.join(", ");
    if arg.description.is_empty() {
        format!("({notes})")
    } else {
        format!("{} ({notes})", arg.description)
    }
}

fn collect_signature_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let entries = fs::read_dir(input)
                .map_err(|err| format!("Failed to read '{}': {err}", input.display()))?;
            let mut found: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| is_signature_file(p))
                .collect();
            found.sort();
            paths.extend(found);
        } else {
            paths.push(input.clone());
        }
    }
    Ok(paths)
}

fn is_signature_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("json" | "yaml" | "yml")
    )
}
