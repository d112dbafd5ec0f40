use clap::Parser;
use grpcdebug::cli::Cli;
use grpcdebug::output;
use grpcdebug::render::Output;
use std::error::Error as _;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn trace_init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,grpcdebug=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let sub = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(sub);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    trace_init(cli.verbose);

    let output = match cli.run().await {
        Ok(output) => output,
        Err(err) => {
            eprintln!("Error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            return ExitCode::FAILURE;
        }
    };

    if let Output::Report(report) = &output {
        for skipped in &report.skipped {
            tracing::info!(entity = %skipped.entity, "skipped: {}", skipped.reason);
        }
    }
    if let Err(err) = output::write_output(&mut std::io::stdout().lock(), &output) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
