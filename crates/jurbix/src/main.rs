//! jurbix CLI
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use jurbix::{Cli, Commands, commands, observability};
use jurbix_core::config::ConfigLoader;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = camino::Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = camino::Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let _guard = observability::init_observability(
        &obs_config,
        observability::console_filter(cli.quiet, cli.verbose),
        observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str()),
    )
    .context("failed to initialize logging/tracing")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        "CLI initialized"
    );

    let max_input = if config.disable_input_limit {
        None
    } else {
        config
            .max_input_bytes
            .or(Some(jurbix_core::DEFAULT_MAX_INPUT_BYTES))
    };

    let profile_id = cli
        .profile
        .clone()
        .unwrap_or_else(|| config.profile_id().to_string());
    let store = config.profile_store();
    let profile = commands::resolve_profile(&store, &profile_id);
    let lexicon = || config.load_lexicon().context("failed to load lexicon");

    let result = match command {
        Commands::Metrics(args) => commands::metrics::cmd_metrics(args, cli.json, max_input),
        Commands::Readability(args) => commands::readability::cmd_readability(
            args,
            cli.json,
            profile,
            &lexicon()?,
            max_input,
        ),
        Commands::Style(args) => {
            commands::style::cmd_style(args, cli.json, profile, &lexicon()?, max_input)
        }
        Commands::Accessibility(args) => {
            commands::accessibility::cmd_accessibility(args, cli.json, profile, max_input)
        }
        Commands::Seo(args) => {
            commands::seo::cmd_seo(args, cli.json, profile, &lexicon()?, max_input)
        }
        Commands::Analyze(args) => {
            commands::analyze::cmd_analyze(args, cli.json, profile, &lexicon()?, max_input)
        }
        Commands::Prompt(args) => {
            commands::prompt::cmd_prompt(args, cli.json, profile, &lexicon()?, max_input)
        }
        Commands::Profiles(args) => {
            commands::profiles::cmd_profiles(args, cli.json, &store, &profile.id)
        }
        Commands::Info(args) => commands::info::cmd_info(
            args,
            cli.json,
            &config,
            &config_sources,
            &profile.id,
            max_input,
        ),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new()
                .context("failed to create async runtime for MCP server")?;
            let profile_id = profile.id.clone();
            rt.block_on(commands::serve::cmd_serve(args, config.clone(), profile_id, max_input))
        }
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
