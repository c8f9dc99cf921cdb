//! Tail command - stream API request logs to the console

use anyhow::Result;
use clap::Args;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use apitail_logtailing::{Config, LogFilters, OutputFormat, Tailer};

/// Tail command arguments
#[derive(Args, Debug)]
pub struct TailArgs {
    /// Base API endpoint
    #[arg(long, default_value = "https://api.stripe.com/subscribe")]
    api_base: String,

    /// API key used to authenticate the session
    #[arg(long)]
    api_key: String,

    /// Device name sent to help identify this client
    #[arg(long, default_value = "apitail")]
    device_name: String,

    /// Filter by account (can be repeated)
    #[arg(long = "filter-account", value_name = "ID")]
    filter_account: Vec<String>,

    /// Filter by source IP address (can be repeated)
    #[arg(long = "filter-ip-address", value_name = "IP")]
    filter_ip_address: Vec<String>,

    /// Filter by HTTP method (can be repeated)
    #[arg(long = "filter-http-method", value_name = "METHOD")]
    filter_http_method: Vec<String>,

    /// Filter by request path (can be repeated)
    #[arg(long = "filter-request-path", value_name = "PATH")]
    filter_request_path: Vec<String>,

    /// Filter by request status: succeeded, failed (can be repeated)
    #[arg(long = "filter-request-status", value_name = "STATUS")]
    filter_request_status: Vec<String>,

    /// Filter by source: api, dashboard (can be repeated)
    #[arg(long = "filter-source", value_name = "SOURCE")]
    filter_source: Vec<String>,

    /// Filter by HTTP status code (can be repeated)
    #[arg(long = "filter-status-code", value_name = "CODE")]
    filter_status_code: Vec<String>,

    /// Filter by status code class: 2XX, 4XX, 5XX (can be repeated)
    #[arg(long = "filter-status-code-type", value_name = "CLASS")]
    filter_status_code_type: Vec<String>,

    /// Output format: human (default), json
    #[arg(short = 'o', long = "format", default_value = "human")]
    format: String,

    /// Force unencrypted ws:// instead of wss://
    #[arg(long, hide = true)]
    no_wss: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Verbose output (show debug info)
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,
}

/// Run the tail command
pub async fn run(args: TailArgs) -> Result<()> {
    // Diagnostics go to stderr; rendered events own stdout.
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else if args.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();

    let use_color = atty::is(atty::Stream::Stdout) && !args.no_color;

    let cfg = Config {
        api_base: args.api_base,
        api_key: args.api_key,
        device_name: args.device_name,
        filters: LogFilters {
            account: args.filter_account,
            ip_address: args.filter_ip_address,
            http_method: args.filter_http_method,
            request_path: args.filter_request_path,
            request_status: args.filter_request_status,
            source: args.filter_source,
            status_code: args.filter_status_code,
            status_code_type: args.filter_status_code_type,
        },
        no_wss: args.no_wss,
        format: OutputFormat::from_str(&args.format),
        color: use_color,
        websocket_feature: "request-logs".to_string(),
    };

    let tailer = Tailer::new(cfg);
    tailer.run(CancellationToken::new()).await?;

    Ok(())
}
