use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use dotnet_ibm_installer::app::{InstallOptions, Installer};
use dotnet_ibm_installer::config::{InstallerConfig, data_dir, log_path};
use dotnet_ibm_installer::install::Arch;

#[derive(Parser)]
#[command(name = "dotnet-ibm-installer")]
#[command(
    version,
    about = "Install the .NET SDK for IBM architectures (s390x, ppc64le)",
    long_about = "Install the .NET SDK for IBM architectures (s390x, ppc64le).\n\n\
                  Use --tag to install a specific version directly (non-interactive).\n\
                  Use --filter to narrow down choices in interactive mode."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    install: InstallArgs,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct InstallArgs {
    /// Install a specific tag version (e.g., v9.0.100). Runs interactively if omitted.
    #[arg(long)]
    tag: Option<String>,

    /// Filter tags in interactive mode (e.g., 9.0 or v8 or 9.*). Ignored with --tag.
    #[arg(long)]
    filter: Option<String>,

    /// Directory to extract the SDK into
    #[arg(long)]
    install_dir: Option<PathBuf>,

    /// Profile script exporting DOTNET_ROOT and PATH
    #[arg(long)]
    profile_script: Option<PathBuf>,

    /// Target architecture (s390x or ppc64le); detected when omitted
    #[arg(long)]
    arch: Option<String>,

    /// Skip running `dotnet --info` after installation
    #[arg(long)]
    no_verify: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List available tags, newest first
    List {
        /// Wildcard filter (e.g., 9.0 or 9.*)
        #[arg(long)]
        filter: Option<String>,
    },
    /// Print the tag that would be installed for a version, without installing
    Resolve {
        /// Requested version (e.g., v9.0.100)
        tag: String,
    },
}

fn init_logging() -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = std::fs::create_dir_all(data_dir()).and_then(|_| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path())
    });

    match file {
        Ok(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!("Failed to open log file {:?}: {}", log_path(), e);
            None
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = InstallerConfig::load(cli.config.as_deref())?;
    let args = cli.install;
    if let Some(install_dir) = args.install_dir {
        config.install.install_dir = install_dir;
    }
    if let Some(profile_script) = args.profile_script {
        config.install.profile_script = profile_script;
    }

    let installer = Installer::from_config(config);

    match cli.command {
        Some(Command::List { filter }) => {
            for tag in installer.list(filter.as_deref()).await? {
                println!("{}", tag);
            }
        }
        Some(Command::Resolve { tag }) => {
            let resolution = installer.resolve(&tag).await?;
            println!("{}", resolution.tag);
        }
        None => {
            let arch = args.arch.as_deref().map(str::parse::<Arch>).transpose()?;
            let options = InstallOptions {
                tag: args.tag,
                filter: args.filter,
                arch,
                skip_verify: args.no_verify,
            };
            let report = installer.install(&options).await?;
            tracing::info!(
                "Installed {} ({}) into {:?}",
                report.tag,
                report.asset,
                report.install_dir
            );
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}
