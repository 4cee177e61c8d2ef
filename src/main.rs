use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bagbook")]
#[command(about = "Multi-step booking form for Cody's Cookie Store")]
struct Cli {
    /// Price per bag of cookies
    #[arg(long, default_value_t = bagbook::DEFAULT_PRICE)]
    price: f64,

    /// Currency symbol appended to totals
    #[arg(long, default_value = bagbook::DEFAULT_CURRENCY)]
    currency: String,

    /// Directory holding the persisted form state
    #[arg(long, value_name = "DIR", default_value = ".bagbook")]
    data_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose {
        "bagbook=debug"
    } else {
        "bagbook=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    #[cfg(feature = "gui")]
    {
        bagbook::gui::run(bagbook::gui::GuiConfig {
            data_dir: args.data_dir,
            price: args.price,
            currency: args.currency,
        })
    }

    #[cfg(not(feature = "gui"))]
    {
        let _ = args;
        Err(anyhow::anyhow!("bagbook was built without the gui feature"))
    }
}
