//! unitconv stdio host
//!
//! Runs one conversion session over stdin/stdout. Each input line is a JSON
//! request `{"id": .., "method": .., "params": {..}}`; each response is one
//! JSON line on stdout. Logs go to stderr.
//!
//! Environment:
//! - UNITCONV_PRECISION: decimal places for displayed results (default 2)
//! - RUST_LOG: log filter (default "info")

mod config;
mod handler;

use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use config::{Config, LOG_VAR, PRECISION_VAR};
use handler::{Handler, Response};

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .init();
}

fn write_response(stdout: &mut impl Write, response: &Response) -> io::Result<()> {
    let line = serde_json::to_string(response)?;
    writeln!(stdout, "{}", line)?;
    stdout.flush()
}

fn main() {
    let config = Config::from_env();
    init_logging(&config);

    info!(version = SERVER_VERSION, precision = config.precision, "unitconv session started");
    if let Some(raw) = config.rejected_precision() {
        warn!(var = PRECISION_VAR, value = raw, used = config.precision, "ignoring invalid precision");
    }
    if let Some(raw) = config.rejected_log_filter() {
        warn!(var = LOG_VAR, value = raw, used = %config.log_filter, "ignoring invalid log filter");
    }
    info!(stdin_terminal = io::stdin().is_terminal(), "waiting for requests");

    let mut handler = Handler::new(&config);
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("end of input");
                break;
            }
            Ok(_) => {
                let Some(response) = handler.handle_line(&line) else {
                    continue;
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = write_response(&mut stdout, &response) {
                    error!(error = %e, "failed to write response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!(conversions = handler.session().history().len(), "session ended");
}
