use clap::Parser;
use std::time::Duration;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "contact-gateway")]
#[command(about = "Rate limited contact form endpoint")]
pub struct Args {
    // Address to bind
    #[arg(long, env = "CONTACT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, env = "CONTACT_PORT", default_value_t = 8080)]
    pub port: u16,

    // Rate limit max requests per window, per client
    #[arg(
        long,
        env = "CONTACT_RATE_LIMIT",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub rate_limit: u32,

    // Rate limit window in milliseconds
    #[arg(
        long,
        env = "CONTACT_RATE_WINDOW_MS",
        default_value_t = 60_000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub rate_window_ms: u64,

    // How often expired rate limit entries are dropped, in seconds
    #[arg(
        long,
        env = "CONTACT_SWEEP_INTERVAL",
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub sweep_interval: u64,

    // Emit logs as JSON lines
    #[arg(long, env = "CONTACT_LOG_JSON")]
    pub log_json: bool,
}

impl Args {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn rate_window(&self) -> Duration {
        Duration::from_millis(self.rate_window_ms)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contact_policy() {
        let args = Args::try_parse_from(["contact-gateway"]).unwrap();
        assert_eq!(args.port, 8080);
        assert_eq!(args.rate_limit, 5);
        assert_eq!(args.rate_window(), Duration::from_secs(60));
        assert_eq!(args.sweep_interval(), Duration::from_secs(60));
        assert_eq!(args.bind_addr(), "0.0.0.0:8080");
        assert!(!args.log_json);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "contact-gateway",
            "--host",
            "127.0.0.1",
            "-p",
            "3000",
            "--rate-limit",
            "10",
            "--rate-window-ms",
            "1500",
            "--log-json",
        ])
        .unwrap();
        assert_eq!(args.bind_addr(), "127.0.0.1:3000");
        assert_eq!(args.rate_limit, 10);
        assert_eq!(args.rate_window(), Duration::from_millis(1500));
        assert!(args.log_json);
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(Args::try_parse_from(["contact-gateway", "--rate-limit", "0"]).is_err());
        assert!(Args::try_parse_from(["contact-gateway", "--rate-window-ms", "0"]).is_err());
    }
}
