//! `catcare` - CLI for the multi-cat care planner
//!
//! This binary runs a planning session over stdin (or a script file) and
//! prints the reference pages and configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{bail, Context};
use clap::Parser;

use catcare::cli::{AssetsCommand, Cli, Command, ConfigCommand, SessionCommand};
use catcare::config::OutputFormat;
use catcare::content::{FAQ, FERAL_CARE, FERAL_CARE_NOTE};
use catcare::view::Body;
use catcare::{assets, init_logging, shell, Config, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    // Initialize logging from the flags and the [logging] section
    init_logging(cli.verbosity(), &config.logging);

    // Execute the command
    match cli.command {
        Command::Session(session_cmd) => handle_session(&config, session_cmd),
        Command::Faq => handle_page(&config, &Body::Faq { entries: FAQ }),
        Command::FeralCare => handle_page(
            &config,
            &Body::FeralCare {
                sections: FERAL_CARE,
                note: FERAL_CARE_NOTE,
            },
        ),
        Command::Assets(assets_cmd) => handle_assets(&config, &assets_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_session(config: &Config, cmd: SessionCommand) -> anyhow::Result<()> {
    // Missing theme files are reported up front; the session runs regardless.
    for warning in &assets::load(&config.assets).warnings {
        eprintln!("warning: {warning}");
    }

    let format = cmd.format.map_or(config.output.format, OutputFormat::from);
    let mut session = Session::with_config(config);
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match cmd.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            shell::run(&mut session, BufReader::new(file), &mut output, format)?;
        }
        None => shell::run(&mut session, io::stdin().lock(), &mut output, format)?,
    }
    Ok(())
}

fn handle_assets(config: &Config, cmd: &AssetsCommand) -> anyhow::Result<()> {
    let loaded = assets::load(&config.assets);
    for warning in &loaded.warnings {
        eprintln!("warning: {warning}");
    }

    if cmd.check {
        if !loaded.warnings.is_empty() {
            bail!("{} asset(s) could not be loaded", loaded.warnings.len());
        }
        println!("All configured assets loaded.");
        return Ok(());
    }

    let stdout = io::stdout();
    let written = loaded
        .emit_css(cmd.out.as_deref(), &mut stdout.lock())
        .context("failed to write CSS")?;
    if !written {
        eprintln!("No assets loaded; nothing to write.");
    }
    Ok(())
}

fn handle_page(config: &Config, body: &Body<'_>) -> anyhow::Result<()> {
    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(body)?),
        OutputFormat::Plain => print!("{body}"),
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                let show = |value: Option<&std::path::Path>| {
                    value.map_or_else(|| "(none)".to_string(), |p| p.display().to_string())
                };
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Session]");
                println!("  Default cat type:   {}", config.session.default_cat_type);
                println!();
                println!("[Navigation]");
                println!("  Feral care page:    {}", config.navigation.show_feral_care);
                println!();
                println!("[Assets]");
                println!("  Enabled:            {}", config.assets.enabled);
                println!("  Base directory:     {}", show(config.assets.base_dir.as_deref()));
                println!("  Stylesheet:         {}", show(config.assets.stylesheet.as_deref()));
                println!(
                    "  Background image:   {}",
                    show(config.assets.background_image.as_deref())
                );
                println!();
                println!("[Output]");
                println!("  Format:             {:?}", config.output.format);
                println!();
                println!("[Logging]");
                println!("  Style:              {:?}", config.logging.style);
                println!("  Timestamps:         {}", config.logging.timestamps);
                println!(
                    "  Color:              {}",
                    config
                        .logging
                        .color
                        .map_or_else(|| "auto".to_string(), |c| c.to_string())
                );
                println!("  Directives:         {}", config.logging.directives.join(", "));
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
