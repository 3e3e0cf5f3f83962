use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use deeplinker::converter::convert_link;
use deeplinker::models::{AppState, Platform};
use deeplinker::settings::{init_settings, update_settings};
use deeplinker::web_handlers::interfaces;
use deeplinker::Settings;

/// Convert e-commerce marketing links into app deep links
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address (e.g., 127.0.0.1 or 0.0.0.0)
    #[arg(short, long, value_name = "ADDRESS")]
    address: Option<String>,

    /// Listen port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u32>,

    /// Single link to convert directly instead of starting the server
    #[arg(long, value_name = "LINK")]
    link: Option<String>,

    /// Platform for direct conversion (taobao, alipay, tmall, jd, pdd, meituan, xianyu)
    #[arg(long, value_name = "PLATFORM")]
    platform: Option<String>,

    /// Emit a universal link instead of a raw scheme URI (taobao only)
    #[arg(long)]
    universal: bool,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    // Check that direct mode gets both of its arguments
    if args.link.is_some() != args.platform.is_some() {
        eprintln!("Error: --link and --platform must be used together");
        std::process::exit(1);
    }

    if let Err(e) = init_settings(args.config.as_deref().unwrap_or("")) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Create app state with the conversion capabilities
    let app_state = Arc::new(AppState::new());

    // Check if a link is provided for direct processing
    if let Some(link) = args.link {
        let platform_str = args.platform.as_deref().unwrap_or_default();
        let platform = match Platform::from_str(platform_str) {
            Some(platform) => platform,
            None => {
                eprintln!("Error: unknown platform '{}'", platform_str);
                std::process::exit(1);
            }
        };
        match convert_link(link.trim(), platform, args.universal, &app_state.context).await {
            Ok(outcome) => println!("{}", outcome.into_link()),
            Err(e) => {
                error!("Conversion failed: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // Proceed with starting the web server
    let listen_address = {
        let mut settings = (*Settings::current()).clone();

        // Override settings with command line arguments if provided
        if let Some(address) = args.address {
            settings.listen_address = address;
        }
        if let Some(port) = args.port {
            settings.listen_port = port;
        }
        let address = if settings.listen_address.trim().is_empty() {
            error!("Empty listen_address in settings, defaulting to 127.0.0.1");
            format!("127.0.0.1:{}", settings.listen_port)
        } else if settings.listen_address.contains(':') {
            // Already has a port, use as is
            settings.listen_address.clone()
        } else {
            format!("{}:{}", settings.listen_address, settings.listen_port)
        };
        update_settings(settings);
        address
    };

    info!("Deeplinker starting on {}", listen_address);

    HttpServer::new(move || {
        App::new()
            // Add app state
            .app_data(web::Data::new(Arc::clone(&app_state)))
            // Register web handlers
            .configure(interfaces::config)
            // For health check
            .route("/", web::get().to(|| async { "Deeplinker is running!" }))
    })
    .bind(listen_address)?
    .run()
    .await
}
