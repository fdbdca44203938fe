use clap::{Parser, Subcommand};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::{Style, Term};
use tracing_subscriber::EnvFilter;

use braket_cost_core::{
    api::{PricingClient, BRAKET_SERVICE_CODE, DEFAULT_PRICING_REGION},
    device::{self, DEVICES},
    estimate,
};

// ── Palette ──────────────────────────────────────────────────────────

fn s_header() -> Style { Style::new().color256(252).bold() }  // bright gray, bold
fn s_dim() -> Style    { Style::new().color256(248) }         // light gray
fn s_tree() -> Style   { Style::new().color256(245) }         // mid gray
fn s_label() -> Style  { Style::new().color256(146) }         // muted lavender
fn s_price() -> Style  { Style::new().color256(109) }         // teal
fn s_bold() -> Style   { Style::new().bold() }

fn sep(width: usize) -> String {
    s_tree().apply_to("\u{2500}".repeat(width)).to_string()
}

// ── CLI Args ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "braket-cost",
    about = "Estimate the cost of quantum tasks on AWS Braket devices from the live price list",
    version,
    after_help = "examples:\n  \
        braket-cost estimate sv1 --tasks 100\n  \
        braket-cost estimate advantage-4 --tasks 10 --shots 10000\n  \
        braket-cost estimate arn:aws:braket:::device/qpu/ionq/ionQdevice -t 3 -s 1000\n  \
        braket-cost catalog\n  \
        braket-cost devices"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the cost of running tasks on a device.
    Estimate {
        /// Device ARN, or a short key / ARN fragment from `devices`
        device: String,
        /// Number of tasks to submit
        #[arg(long, short, default_value_t = 1)]
        tasks: i64,
        /// Shots per task
        #[arg(long, short, default_value_t = 1000)]
        shots: i64,
        #[arg(long, default_value = BRAKET_SERVICE_CODE)]
        service_code: String,
        #[arg(long, default_value = DEFAULT_PRICING_REGION)]
        region: String,
        #[arg(long, short)]
        json: bool,
    },
    /// List task and shot prices from the live price list.
    Catalog {
        #[arg(long, default_value = BRAKET_SERVICE_CODE)]
        service_code: String,
        #[arg(long, default_value = DEFAULT_PRICING_REGION)]
        region: String,
        #[arg(long, short)]
        json: bool,
    },
    /// List known devices.
    Devices,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Estimate {
            device,
            tasks,
            shots,
            service_code,
            region,
            json,
        } => {
            cmd_estimate(&device, tasks, shots, &service_code, &region, json).await?;
        }
        Commands::Catalog {
            service_code,
            region,
            json,
        } => {
            cmd_catalog(&service_code, &region, json).await?;
        }
        Commands::Devices => {
            cmd_devices();
        }
    }
    Ok(())
}

// ── Estimate ─────────────────────────────────────────────────────────

async fn cmd_estimate(
    device: &str,
    tasks: i64,
    shots: i64,
    service_code: &str,
    region: &str,
    json: bool,
) -> anyhow::Result<()> {
    // Short keys and ARN fragments go through the registry; anything else
    // is treated as a full identifier.
    let (name, identifier) = match device::find_device(device) {
        Some(entry) => (entry.display_name, entry.arn),
        None => (device, device),
    };

    let term = Term::stderr();
    term.write_line(&format!("{}", s_dim().apply_to("fetching price list...")))?;
    let client = PricingClient::new(region).await;
    let catalog = client.fetch_catalog(service_code).await?;
    term.clear_last_lines(1)?;

    let prices = device::resolve(identifier, &catalog)?;
    let est = estimate::estimate(&prices, tasks, shots)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "device": identifier,
                "tasks": tasks,
                "shots_per_task": shots,
                "task_price": est.task_price,
                "shot_price": est.shot_price,
                "total_usd": est.total_usd,
            }))?
        );
        return Ok(());
    }

    let missing = "\u{2500}".to_string();
    println!();
    println!("  {}", s_header().apply_to(name));
    println!("  {}", sep(56));
    println!("  {} {}", s_label().apply_to("device      "), s_dim().apply_to(identifier));
    println!("  {} {}", s_label().apply_to("tasks       "), tasks);
    println!("  {} {}", s_label().apply_to("shots/task  "), shots);
    println!(
        "  {} {}",
        s_label().apply_to("price/task  "),
        s_price().apply_to(format!("${}", est.task_price))
    );
    println!(
        "  {} {}",
        s_label().apply_to("price/shot  "),
        match est.shot_price {
            Some(p) => s_price().apply_to(format!("${p}")).to_string(),
            None => s_dim().apply_to(&missing).to_string(),
        }
    );
    println!(
        "  {} {}",
        s_label().apply_to("total       "),
        s_bold().apply_to(format!("${}", est.total_usd))
    );
    println!();
    Ok(())
}

// ── Catalog ──────────────────────────────────────────────────────────

async fn cmd_catalog(service_code: &str, region: &str, json: bool) -> anyhow::Result<()> {
    let term = Term::stderr();
    term.write_line(&format!("{}", s_dim().apply_to("fetching price list...")))?;
    let client = PricingClient::new(region).await;
    let catalog = client.fetch_catalog(service_code).await?;
    term.clear_last_lines(1)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!();
    println!("  {}", s_header().apply_to(format!("{service_code} task and shot prices")));
    println!("  {}", sep(48));

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("  Usage type").fg(Color::AnsiValue(243)),
        Cell::new("$/unit").fg(Color::AnsiValue(243)),
    ]);
    for (usage_type, price) in catalog.iter() {
        table.add_row(vec![
            Cell::new(format!("  {usage_type}")).fg(Color::AnsiValue(252)),
            Cell::new(format!("{price}")).fg(Color::AnsiValue(109)),
        ]);
    }
    println!("{table}");
    println!();
    Ok(())
}

// ── Devices ──────────────────────────────────────────────────────────

fn cmd_devices() {
    println!();
    println!("  {}", s_header().apply_to("known devices"));
    println!("  {}", sep(72));

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("  Key").fg(Color::AnsiValue(243)),
        Cell::new("Device").fg(Color::AnsiValue(243)),
        Cell::new("Vendor").fg(Color::AnsiValue(243)),
        Cell::new("ARN").fg(Color::AnsiValue(243)),
    ]);
    for d in DEVICES {
        table.add_row(vec![
            Cell::new(format!("  {}", d.key)).fg(Color::AnsiValue(252)),
            Cell::new(d.display_name),
            Cell::new(d.vendor.display_name()).fg(Color::AnsiValue(146)),
            Cell::new(d.arn).fg(Color::AnsiValue(248)),
        ]);
    }
    println!("{table}");
    println!();
}
