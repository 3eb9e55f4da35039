//! Delete telemetry for a ThingsBoard device within a date/time range.
//!
//! Usage:
//!   cargo run --bin delete_telemetry -- \
//!     --device-name 20090231 --start-date 03/06/2021 --end-date 23/06/2021

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use telemetry_cleaner::commands::delete_telemetry::{self, DeleteRequest};
use telemetry_cleaner::timerange::{DAY_END, DAY_START};
use telemetry_cleaner::ThingsBoardClient;

#[derive(Parser, Debug)]
#[command(name = "delete_telemetry")]
#[command(about = "Delete telemetry data for a device within a time range")]
struct Args {
    /// Name of the device to delete telemetry from
    #[arg(long)]
    device_name: String,

    /// Start date for deletion (DD/MM/YYYY)
    #[arg(long)]
    start_date: String,

    /// End date for deletion (DD/MM/YYYY)
    #[arg(long)]
    end_date: String,

    /// Start time for deletion (HH:MM, 24-hour format)
    #[arg(long, default_value = DAY_START)]
    start_time: String,

    /// End time for deletion (HH:MM, 24-hour format)
    #[arg(long, default_value = DAY_END)]
    end_time: String,

    /// Resolve the device and compute the range without deleting
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let client = ThingsBoardClient::from_env()?;

    let outcome = delete_telemetry::run(
        &client,
        DeleteRequest {
            device_name: &args.device_name,
            start_date: &args.start_date,
            start_time: &args.start_time,
            end_date: &args.end_date,
            end_time: &args.end_time,
            dry_run: args.dry_run,
        },
    )
    .await?;

    if outcome.deleted {
        println!(
            "✅ Telemetry data for device '{}' deleted successfully.",
            args.device_name
        );
    } else {
        println!(
            "🔍 Dry run: telemetry for device '{}' ({}) was left untouched.",
            args.device_name, outcome.device_id
        );
    }
    println!("Deletion range: {}", outcome.window);

    Ok(())
}
