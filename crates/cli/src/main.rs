use clap::Parser;
use ferrous_synth_domain::CliOverrides;
use ferrous_synth_infrastructure::dns::SynthRequestHandler;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-synth")]
#[command(version)]
#[command(about = "Ferrous Synth - authoritative DNS responder with synthesized answers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Synth v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config_source(cli.config.as_deref());

    let services = di::Services::new(&config)?;
    server::spawn_reload_on_sighup(services.reload.clone(), cli.config.clone());

    let bind_ip: IpAddr = config.server.bind_address.parse()?;
    let dns_addr = SocketAddr::new(bind_ip, config.server.dns_port);
    let handler = SynthRequestHandler::new(services.handler);
    let tcp_timeout = Duration::from_secs(config.server.tcp_timeout_secs);

    tokio::select! {
        result = server::start_dns_server(dns_addr, handler, tcp_timeout) => {
            if let Err(e) = &result {
                error!(error = %e, "DNS server error");
            }
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
