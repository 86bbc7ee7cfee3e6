use std::{fs::OpenOptions, process};

use actix_web::{web, App, HttpServer};
use tracing::{error, info, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{filter, fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use attendance_pay::{config, pages};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();

    let log_file = std::env::var("LOG_FILE").unwrap_or_else(|_| "trace.log".to_string());
    let log_file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(log_file)?;

    let subscriber = Registry::default()
        .with(
            fmt::layer()
                .with_ansi(true)
                .with_line_number(true)
                .with_filter(EnvFilter::from_default_env())
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(log_file)
                .with_filter(filter::LevelFilter::from_level(Level::TRACE))
        );

    tracing::subscriber::set_global_default(subscriber).expect("Unable to install tracing subscriber");

    let config::Config {
        host_address,
        policy,
    } = match config::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            process::exit(1);
        }
    };

    info!(?policy, %host_address, "Starting server");

    let policy = web::Data::new(policy);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(policy.clone())
            .wrap(TracingLogger::default())
            .configure(pages::config)
    });

    server
        .bind(host_address)?
        .run().await
}
