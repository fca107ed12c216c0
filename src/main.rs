use checkout_return::application::flow::CallbackFlow;
use checkout_return::domain::interpreter::{GatewayInterpreter, interpret};
use checkout_return::infrastructure::console::{ConsoleNavigator, ConsoleNotifier};
use checkout_return::interfaces::query;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Redirect URL (or bare query string) received from the payment gateway
    redirect: String,

    /// Print the interpreted outcome as JSON instead of running the flow
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = query::parse_redirect(&cli.redirect);

    if cli.json {
        let outcome = interpret(&params);
        let rendered = serde_json::to_string_pretty(&outcome).into_diagnostic()?;
        println!("{rendered}");
        return Ok(());
    }

    let mut flow = CallbackFlow::new(
        Box::new(GatewayInterpreter::new()),
        Arc::new(ConsoleNavigator),
        Arc::new(ConsoleNotifier),
    );
    flow.start(&params);

    // Keep the process alive until the scheduled navigation has fired.
    flow.wait().await;

    Ok(())
}
