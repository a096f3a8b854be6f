mod cli;

use trackstrip::{
    config,
    processor::{self, ProcessOptions, Processor},
    scanner::Scanner,
};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Cli;
use trackstrip_av::Toolchain;

fn main() -> Result<()> {
    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "trackstrip=trace,trackstrip_av=trace,trackstrip_core=trace".to_string()
        } else {
            "trackstrip=info,trackstrip_av=info,trackstrip_core=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;

    if cli.check_tools {
        return check_tools(&config);
    }

    // Command-line filters replace the configured defaults as a whole.
    let filters = if cli.has_filters() {
        cli.filter_options().resolve()?
    } else {
        config.filters.resolve()?
    };

    let tools = Toolchain::locate(
        config.tools.ffmpeg.as_deref(),
        config.tools.ffprobe.as_deref(),
    )?;

    let files = Scanner::new(&config.scan).discover(&cli.paths);
    if files.is_empty() {
        anyhow::bail!("No media files found.");
    }
    tracing::debug!("Discovered {} media files", files.len());

    let summary = if cli.list {
        processor::list_tracks(&tools.ffprobe, &files, cli.json)
    } else {
        let mut options = ProcessOptions::from_config(&config);
        if let Some(dir) = cli.output_dir.as_deref() {
            options.output_dir = Some(dir.to_path_buf());
        }
        options.output_dir = options
            .output_dir
            .as_deref()
            .map(processor::resolve_output_dir);
        options.clean_metadata &= !cli.no_clean_metadata;
        options.overwrite = cli.overwrite;
        options.dry_run = cli.dry_run;

        Processor::new(&tools, &filters, options).process_all(&files)
    };

    if !summary.is_success() {
        anyhow::bail!(
            "{} of {} files failed",
            summary.failed,
            summary.failed + summary.succeeded
        );
    }

    Ok(())
}

fn check_tools(config: &config::Config) -> Result<()> {
    println!("Checking external tools...\n");

    let tools = trackstrip_av::check_tools(
        config.tools.ffmpeg.as_deref(),
        config.tools.ffprobe.as_deref(),
    );
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install ffmpeg to use trackstrip.");
    }

    Ok(())
}
