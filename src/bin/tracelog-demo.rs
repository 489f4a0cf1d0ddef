//! Demo binary exercising the logging and tracing pipeline end to end.

use std::process::ExitCode;

use clap::Parser;
use serde_json::json;

use tracelog::logging::{self, Attr};
use tracelog::transaction::{self, Context};

#[derive(Parser)]
#[command(name = "tracelog-demo")]
#[command(about = "Runs a simulated transaction through the logging pipeline", long_about = None)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, default_value = "log-config.yml")]
    config: String,

    /// Minimum log level. Options: error | warn | info | debug
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = tracelog::setup::init_from_file(&cli.config) {
        eprintln!(
            "load config {:?}: {} (using built-in defaults)",
            cli.config, err
        );
    }

    let logger = logging::default_logger()
        .with_attrs(&[Attr::new("server", "demo"), Attr::new("env", "dev")]);
    let logger = match logger.with_level(&cli.log_level) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("create logger: {}", err);
            return ExitCode::FAILURE;
        }
    };
    logging::set_default_logger(logger);

    let tracer = transaction::default_tracer();
    let (mut tx, ctx) = tracer.start_transaction(
        &Context::new(),
        "demo-order",
        "request",
        &[Attr::new("order_id", 1042)],
    );

    logging::info(&ctx, "processing order", &[json!("items"), json!(3)]);
    logging::debug(&ctx, "reserving inventory", &[json!("warehouse"), json!("eu-1")]);
    charge_payment(&ctx);

    tx.end();
    logging::info(
        &ctx,
        "order processed",
        &[json!("duration_ms"), json!(tx.duration().as_millis() as u64)],
    );

    ExitCode::SUCCESS
}

fn charge_payment(ctx: &Context) {
    logging::warn(ctx, "payment provider slow", &[json!("elapsed_ms"), json!(187)]);
}
