use std::fs;
use std::path::Path;

use clap::Parser;

use fixture_guard::checker::{CheckResult, Checker, FixtureChecker};
use fixture_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, ConfigAction, ListArgs};
use fixture_guard::config::{ConfigLoader, FileConfigLoader};
use fixture_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use fixture_guard::registry::FixtureRegistry;
use fixture_guard::{EXIT_CONFIG_ERROR, EXIT_FIXTURE_FAILURE, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::List(args) => run_list(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => match &args.action {
            ConfigAction::Validate { config } => run_config_validate(config),
        },
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> fixture_guard::Result<i32> {
    // 1. Load the fixture registry (builtin or from config)
    let registry = load_registry(args.config.as_deref(), cli.no_config)?;

    // 2. Check each fixture sequentially, in registry order
    let checker = FixtureChecker::new(&args.root);
    let results: Vec<CheckResult> = registry
        .iter()
        .map(|(path, spec)| checker.check(path, spec))
        .collect();

    // 3. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &results, color_mode, cli.verbose)?;

    // 4. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 5. Determine exit code: only missing/unreadable fixtures fail the run,
    //    unless --strict promotes warnings
    let has_failures = results.iter().any(CheckResult::is_failed);
    let has_warnings = results.iter().any(CheckResult::is_warning);

    if has_failures || (args.strict && has_warnings) {
        Ok(EXIT_FIXTURE_FAILURE)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_registry(
    config_path: Option<&Path>,
    no_config: bool,
) -> fixture_guard::Result<FixtureRegistry> {
    if no_config {
        return Ok(FixtureRegistry::builtin());
    }

    let loader = FileConfigLoader::new();
    let config = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    config.build_registry()
}

fn format_output(
    format: OutputFormat,
    results: &[CheckResult],
    color_mode: ColorMode,
    verbose: u8,
) -> fixture_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(results),
        OutputFormat::Json => JsonFormatter.format(results),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> fixture_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_list(args: &ListArgs, cli: &Cli) -> i32 {
    match run_list_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_list_impl(args: &ListArgs, cli: &Cli) -> fixture_guard::Result<String> {
    use std::fmt::Write;

    let registry = load_registry(args.config.as_deref(), cli.no_config)?;

    let mut output = String::new();
    output.push_str("Registered fixtures:\n");
    for (path, spec) in registry.iter() {
        let _ = writeln!(
            output,
            "  {path}  (min {}): {}",
            spec.min_violations, spec.description
        );
    }

    let mut excluded: Vec<_> = registry.excluded_paths().collect();
    excluded.sort_unstable();
    if !excluded.is_empty() {
        output.push_str("\nExcluded from checking:\n");
        for path in excluded {
            let _ = writeln!(output, "  {path}");
        }
    }

    Ok(output)
}

fn run_init(args: &fixture_guard::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &fixture_guard::cli::InitArgs) -> fixture_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(fixture_guard::FixtureGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = generate_config_template();
    fs::write(output_path, template)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn generate_config_template() -> String {
    r#"# fixture-guard configuration file
#
# Registered fixtures replace the built-in table when this section is
# non-empty. Each fixture must keep at least `min_violations` detectable
# accessibility defects; fewer is reported as a warning, a missing or
# unreadable file fails the run.

# [fixtures."page1.html"]
# min_violations = 2
# description = "missing alt text and low-contrast styling"

# [fixtures."auth/login.html"]
# min_violations = 1
# description = "checkbox without an associated label"

# Files that must never be checked. The live page (a11y-scan.html) is always
# excluded, whether listed here or not.
# exclude = ["landing.html"]
"#
    .to_string()
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> fixture_guard::Result<()> {
    let loader = FileConfigLoader::new();
    let config = loader.load_from_path(config_path)?;

    // Building the registry runs the semantic checks (empty paths, paths both
    // registered and excluded, attempts to register the live page).
    config.build_registry()?;

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
