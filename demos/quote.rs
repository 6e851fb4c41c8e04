use clap::Parser;
use correios_client_rs::{Config, CorreiosClient, Error, ServiceCode};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "correios-quote",
    about = "Ask the Correios calculator for price and delivery time",
    arg_required_else_help = true
)]
struct Cli {
    #[arg(long, help = "Origin CEP (8 digits)")]
    from: String,

    #[arg(long, help = "Destination CEP (8 digits)")]
    to: String,

    #[arg(long, help = "Weight in kg (0.3, or 1 to 30)")]
    weight: Decimal,

    #[arg(long, default_value_t = 16)]
    length: u32,

    #[arg(long, default_value_t = 2)]
    height: u32,

    #[arg(long, default_value_t = 11)]
    width: u32,

    #[arg(
        long = "service",
        default_value = "SEDEX",
        help = "SEDEX, SEDEX10, SEDEX_COD, PAC or a numeric code; repeat for several"
    )]
    services: Vec<ServiceCode>,

    #[arg(long, help = "Declared value, for cash on delivery")]
    declared_value: Option<Decimal>,

    #[arg(long, help = "Calculator URL override")]
    url: Option<String>,

    #[arg(long, help = "Proxy URL (optional)")]
    proxy: Option<String>,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = build_config(cli.proxy.clone());

    let mut client = CorreiosClient::new(config)?;
    client
        .params_mut()
        .set_origin(&cli.from)
        .set_destination(&cli.to)
        .set_weight_kg(cli.weight)
        .set_dimensions(cli.length, cli.height, cli.width)
        .set_services(&cli.services);
    if let Some(value) = cli.declared_value {
        client.params_mut().set_declared_value(value);
    }
    if let Some(url) = &cli.url {
        client.apply_overrides([("url", url)]);
    }

    tracing::info!(
        endpoint = client.endpoint(),
        timeout = ?client.config().timeout,
        "requesting quotes"
    );
    for quote in client.request_all()? {
        let json = serde_json::to_string_pretty(&quote)
            .map_err(|e| Error::Parse(e.to_string()))?;
        println!("{json}");
        if quote.is_error() {
            eprintln!(
                "service {} reported error {}: {}",
                quote.service_code.unwrap_or_default(),
                quote.error_code,
                quote.error_message.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}

fn build_config(proxy: Option<String>) -> Option<Config> {
    let mut cfg = Config::default();
    cfg.proxy_url = proxy;
    Some(cfg)
}
