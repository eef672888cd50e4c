//! codepack binary: parse the CLI, run the pipeline, print the summary.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use codepack::paths::display_relative;
use codepack::{stages, ui, Cli, Config};

/// Wire up tracing to stderr. `RUST_LOG` wins over `--log-level`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    init_tracing(&cli.log_level);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("codepack: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut ctx = cli.resolve(config);
    stages::default_registry().run(&mut ctx);

    // Summary mirrors the artifact banner: which files went in, and where.
    let color = ui::use_color();
    let files = ctx.discovered.files();
    println!(
        "\n{}",
        ui::cyan(
            &format!(
                "Saved code from {} files to {}",
                files.len(),
                ctx.output.display()
            ),
            color,
        )
    );
    println!("\n{}", ui::green("Files saved:", color));
    for file in files {
        println!("{}", ui::blue(&format!("- {}", display_relative(file)), color));
    }
    println!();

    if !ctx.errors.is_empty() {
        eprintln!("{}", ui::red("Errors:", color));
        for error in &ctx.errors {
            eprintln!("- {error}");
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
