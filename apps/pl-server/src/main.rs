use clap::Parser;
use pl_app::{AppResult, DEFAULT_BIND, DEFAULT_PORT, ServerConfig};
use std::net::IpAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pl-server")]
#[command(about = "Phaseline - liquid/vapor specific volume from pressure over HTTP", long_about = None)]
struct Cli {
    /// Address to bind
    #[arg(short, long, default_value_t = DEFAULT_BIND)]
    bind: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Calibration YAML with two points per phase (built-in points when omitted)
    #[arg(short, long)]
    calibration: Option<PathBuf>,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        ServerConfig {
            bind: cli.bind,
            port: cli.port,
            calibration: cli.calibration,
        }
    }
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig::from(Cli::parse());
    let diagram = config.load_diagram().inspect_err(|e| {
        tracing::error!("Invalid calibration: {e}");
    })?;

    pl_app::serve(&config, diagram).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_server_config() {
        let cli = Cli::try_parse_from(["pl-server"]).unwrap();
        assert_eq!(ServerConfig::from(cli), ServerConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "pl-server",
            "--bind",
            "127.0.0.1",
            "--port",
            "9090",
            "--calibration",
            "points.yaml",
        ])
        .unwrap();
        let config = ServerConfig::from(cli);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
        assert_eq!(config.calibration, Some(PathBuf::from("points.yaml")));
    }

    #[test]
    fn reject_bad_port() {
        assert!(Cli::try_parse_from(["pl-server", "--port", "http"]).is_err());
    }
}
