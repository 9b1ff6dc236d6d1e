mod config;
mod error;

use clap::{Parser, Subcommand};
use config::Config;
use error::CliResult;
use gt_core::units::k;
use gt_relations::Gas;
use gt_tables::{InterpolatedRow, Query, QueryOutput, TableStore, query};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gt-cli")]
#[command(about = "Gas tables - isentropic and normal shock relations with table lookup", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Table store (JSON); generated in memory when the file is missing
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    /// Specific heat ratio, overrides the configured gas
    #[arg(long, global = true)]
    gamma: Option<f64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available tables
    Tables,
    /// List the columns of a table
    Columns {
        /// Table name (Isentropic or Shock)
        table: String,
    },
    /// Interpolate a table at a key value
    Lookup {
        /// Table name (Isentropic or Shock)
        table: String,
        /// Key column, e.g. M, AAstar, M1
        key: String,
        /// Key value to interpolate at
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Print only this column
        #[arg(short, long)]
        column: Option<String>,
    },
    /// Isentropic ratios at a Mach number
    Isentropic {
        /// Mach number
        mach: f64,
    },
    /// Normal shock jump conditions for an upstream Mach number
    Shock {
        /// Upstream Mach number (>= 1)
        mach1: f64,
    },
    /// Local speed of sound
    SoundSpeed {
        /// Static temperature in kelvin
        temperature_k: f64,
    },
    /// Generate tables from the configured gas and write the store
    Generate {
        /// Output path (defaults to the configured store)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Highest tabulated Mach number
        #[arg(long)]
        mach_max: Option<f64>,
        /// Rows per unit Mach number
        #[arg(long)]
        rows_per_unit_mach: Option<u32>,
    },
    /// Import flat text tables (files or directories of pages) into a store
    Import {
        /// Isentropic table file or directory
        isentropic: PathBuf,
        /// Shock table file or directory
        shock: PathBuf,
        /// Output path (defaults to the configured store)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Tables => cmd_query(&config, Query::Tables),
        Commands::Columns { table } => cmd_query(&config, Query::Columns { table: &table }),
        Commands::Lookup {
            table,
            key,
            value,
            column,
        } => cmd_query(
            &config,
            Query::Lookup {
                table: &table,
                key: &key,
                value: Some(value),
                column: column.as_deref(),
            },
        ),
        Commands::Isentropic { mach } => cmd_isentropic(&config.gas, mach),
        Commands::Shock { mach1 } => cmd_shock(&config.gas, mach1),
        Commands::SoundSpeed { temperature_k } => cmd_sound_speed(&config.gas, temperature_k),
        Commands::Generate {
            out,
            mach_max,
            rows_per_unit_mach,
        } => {
            let mut grid = config.generate;
            if let Some(m) = mach_max {
                grid.mach_max = m;
            }
            if let Some(n) = rows_per_unit_mach {
                grid.rows_per_unit_mach = n;
            }
            let store = TableStore::generate(&config.gas, &grid)?;
            save_store(&store, out.as_deref().unwrap_or(config.store.as_path()))
        }
        Commands::Import {
            isentropic,
            shock,
            out,
        } => {
            let store = if isentropic.is_dir() && shock.is_dir() {
                TableStore::import_flat_dirs(&isentropic, &shock)?
            } else {
                TableStore::import_flat_files(&isentropic, &shock)?
            };
            save_store(&store, out.as_deref().unwrap_or(config.store.as_path()))
        }
    }
}

fn resolve_config(cli: &Cli) -> CliResult<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_yaml(path)?,
        None => Config::default(),
    };
    if let Some(store) = &cli.store {
        config.store = store.clone();
    }
    if let Some(gamma) = cli.gamma {
        config.gas = Gas::new(gamma, config.gas.gas_constant)?;
    }
    Ok(config)
}

fn load_store(config: &Config) -> CliResult<TableStore> {
    if config.store.exists() {
        return Ok(TableStore::open(&config.store)?);
    }
    info!(
        store = %config.store.display(),
        gamma = config.gas.gamma,
        "store not found, generating tables in memory"
    );
    Ok(TableStore::generate(&config.gas, &config.generate)?)
}

fn save_store(store: &TableStore, path: &Path) -> CliResult<()> {
    store.save(path)?;
    println!("✓ Wrote table store to {}", path.display());
    Ok(())
}

fn cmd_query(config: &Config, q: Query<'_>) -> CliResult<()> {
    let store = load_store(config)?;
    let multi_branch = matches!(q, Query::Lookup { table, key, .. }
        if gt_tables::TableKind::parse(table)
            .and_then(|kind| kind.column_index(key).map(|col| kind.splits_branches(col)))
            .unwrap_or(false));

    match query(&store, q)? {
        QueryOutput::Tables(names) | QueryOutput::Columns(names) => {
            for name in names {
                println!("{name}");
            }
        }
        QueryOutput::Rows(rows) => {
            for (i, row) in rows.iter().enumerate() {
                println!("{}{}", branch_label(multi_branch, i), format_row(row));
            }
        }
        QueryOutput::Values(values) => {
            for (i, v) in values.iter().enumerate() {
                println!("{}{v:.6}", branch_label(multi_branch, i));
            }
        }
    }
    Ok(())
}

fn branch_label(multi_branch: bool, index: usize) -> &'static str {
    match (multi_branch, index) {
        (false, _) => "",
        (true, 0) => "supersonic: ",
        (true, _) => "subsonic:   ",
    }
}

fn format_row(row: &InterpolatedRow) -> String {
    let mut line = row
        .iter()
        .map(|(name, v)| format!("{name}={v:.6}"))
        .collect::<Vec<_>>()
        .join("  ");
    if row.is_clamped() {
        line.push_str("  (clamped to table end)");
    }
    line
}

fn cmd_isentropic(gas: &Gas, mach: f64) -> CliResult<()> {
    let st = gas.isentropic(mach)?;
    println!("Isentropic flow, M = {:.4}, gamma = {}", st.mach, gas.gamma);
    println!("  P0/P    = {:.6}", st.pressure_ratio);
    println!("  rho0/rho = {:.6}", st.density_ratio);
    println!("  T0/T    = {:.6}", st.temperature_ratio);
    println!("  A/A*    = {:.6}", st.area_ratio);
    Ok(())
}

fn cmd_shock(gas: &Gas, mach1: f64) -> CliResult<()> {
    let ns = gas.normal_shock(mach1)?;
    println!("Normal shock, M1 = {:.4}, gamma = {}", ns.mach1, gas.gamma);
    println!("  M2        = {:.6}", ns.mach2);
    println!("  P2/P1     = {:.6}", ns.pressure_ratio);
    println!("  rho2/rho1 = {:.6}", ns.density_ratio);
    println!("  T2/T1     = {:.6}", ns.temperature_ratio);
    println!("  P02/P01   = {:.6}", ns.stagnation_pressure_ratio);
    println!("  P02/P1    = {:.6}", ns.pitot_pressure_ratio);
    Ok(())
}

fn cmd_sound_speed(gas: &Gas, temperature_k: f64) -> CliResult<()> {
    let a = gas.sound_speed(k(temperature_k))?;
    println!("a = {:.3} m/s", a.value);
    Ok(())
}
