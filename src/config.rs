use clap::Parser;
use log::warn;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// OpenWeatherMap API key. Without one the app still starts, but every
    /// lookup fails at the provider.
    #[arg(long, env = "API_KEY")]
    api_key: Option<String>,

    /// Port to listen on.
    // Taken as a raw string so that an unparsable value can fall back to the
    // default instead of aborting startup.
    #[arg(short, long, env = "PORT")]
    port: Option<String>,
}

/// Process-wide configuration, built once in main and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub port: u16,
}

impl Config {
    pub fn from_args(args: Args) -> Config {
        let port = match args.port.as_deref() {
            None => DEFAULT_PORT,
            Some(raw) => match raw.parse() {
                Ok(port) => port,
                Err(_) => {
                    warn!("cannot parse port {raw:?}, using {DEFAULT_PORT}");
                    DEFAULT_PORT
                }
            },
        };

        let api_key = args.api_key.unwrap_or_default();
        if api_key.is_empty() {
            warn!("no API key configured, weather lookups will fail");
        }

        Config { api_key, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let args = Args::try_parse_from(["cityweather"]).expect("parsing should succeed");
        let config = Config::from_args(args);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.api_key, "");
    }

    #[test]
    fn flags_override_the_defaults() {
        let args = Args::try_parse_from(["cityweather", "--port", "8080", "--api-key", "KEY"])
            .expect("parsing should succeed");
        let config = Config::from_args(args);
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_key, "KEY");
    }

    #[test]
    fn unparsable_port_falls_back_to_the_default() {
        let args = Args::try_parse_from(["cityweather", "--port", "not-a-port"])
            .expect("parsing should succeed");
        let config = Config::from_args(args);
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
