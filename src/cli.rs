//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::sqlite_ledger::SqliteLedger;
use crate::domain::equity::{compute_equity_curve, curve_series};
use crate::domain::error::JournalError;
use crate::domain::trade::Trade;
use crate::ports::config_port::ConfigPort;
use crate::ports::ledger_port::LedgerPort;

pub const DEFAULT_LEDGER_PATH: &str = "journal.db";

#[derive(Parser, Debug)]
#[command(name = "tradejournal", about = "Personal trading journal")]
pub struct Cli {
    /// INI config file (sections: [ledger], [web])
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Ledger database path (overrides config)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the ledger, apply the schema and seed it if empty
    Init {
        /// Seed dataset CSV (overrides config)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
    /// Record one trade
    Add {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        ticker: String,
        #[arg(long)]
        quantity: f64,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        entry: Option<f64>,
        #[arg(long)]
        exit: Option<f64>,
        #[arg(long)]
        strategy: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Print all trades ordered by date
    List,
    /// Print the equity curve as date,equity CSV lines
    Curve,
    /// Start the web dashboard
    Serve {
        /// Seed dataset CSV applied when the ledger is empty
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let config = match cli.config.as_ref() {
        Some(path) => match load_config(path) {
            Ok(c) => Some(c),
            Err(code) => return code,
        },
        None => None,
    };
    let config_ref = config.as_ref().map(|c| c as &dyn ConfigPort);
    let ledger_path = resolve_ledger_path(cli.db.as_ref(), config_ref);

    match cli.command {
        Command::Init { seed } => {
            let seed_path = resolve_seed_path(seed.as_ref(), config_ref);
            run_init(&ledger_path, seed_path.as_ref())
        }
        Command::Add {
            date,
            ticker,
            quantity,
            price,
            entry,
            exit,
            strategy,
            notes,
        } => {
            let trade = Trade {
                date,
                ticker: ticker.trim().to_uppercase(),
                entry,
                exit,
                quantity,
                price,
                strategy: strategy.unwrap_or_default(),
                notes: notes.unwrap_or_default(),
            };
            run_add(&ledger_path, &trade)
        }
        Command::List => run_list(&ledger_path),
        Command::Curve => run_curve(&ledger_path),
        Command::Serve { seed } => {
            let seed_path = resolve_seed_path(seed.as_ref(), config_ref);
            run_serve(&ledger_path, seed_path.as_ref(), config_ref)
        }
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = JournalError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Ledger path precedence: `--db` flag, then config `[ledger] path`, then
/// the fixed default in the working directory.
pub fn resolve_ledger_path(db: Option<&PathBuf>, config: Option<&dyn ConfigPort>) -> PathBuf {
    if let Some(path) = db {
        return path.clone();
    }
    if let Some(path) = config.and_then(|c| c.get_string("ledger", "path")) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_LEDGER_PATH)
}

/// Seed path precedence: `--seed` flag, then config `[ledger] seed`. No
/// default: seeding is skipped entirely when neither is given.
pub fn resolve_seed_path(
    seed: Option<&PathBuf>,
    config: Option<&dyn ConfigPort>,
) -> Option<PathBuf> {
    if let Some(path) = seed {
        return Some(path.clone());
    }
    config
        .and_then(|c| c.get_string("ledger", "seed"))
        .map(PathBuf::from)
}

fn open_ledger(path: &PathBuf) -> Result<SqliteLedger, ExitCode> {
    SqliteLedger::open(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

fn run_init(ledger_path: &PathBuf, seed_path: Option<&PathBuf>) -> ExitCode {
    eprintln!("Opening ledger at {}", ledger_path.display());
    let ledger = match open_ledger(ledger_path) {
        Ok(l) => l,
        Err(code) => return code,
    };

    match ledger.initialize_and_seed(seed_path.map(|p| p.as_path())) {
        Ok(0) => {}
        Ok(n) => eprintln!("Seeded {n} trades"),
        Err(e @ JournalError::Seed { .. }) => {
            eprintln!("warning: {e}; continuing with an empty ledger");
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(&e);
        }
    }

    match ledger.count_trades() {
        Ok(count) => {
            eprintln!("Ledger ready: {count} trades");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(&e)
        }
    }
}

fn run_add(ledger_path: &PathBuf, trade: &Trade) -> ExitCode {
    let ledger = match open_ledger(ledger_path) {
        Ok(l) => l,
        Err(code) => return code,
    };

    if let Err(e) = ledger.apply_schema() {
        eprintln!("error: {e}");
        return ExitCode::from(&e);
    }

    match ledger.insert_trade(trade) {
        Ok(()) => {
            eprintln!(
                "Recorded {} {} x {:.2} on {}",
                trade.ticker, trade.quantity, trade.price, trade.date
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(&e)
        }
    }
}

fn load_trades(ledger_path: &PathBuf) -> Result<Vec<Trade>, ExitCode> {
    let ledger = open_ledger(ledger_path)?;

    ledger.apply_schema().map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })?;

    ledger.list_trades().map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

fn run_list(ledger_path: &PathBuf) -> ExitCode {
    let trades = match load_trades(ledger_path) {
        Ok(t) => t,
        Err(code) => return code,
    };

    println!(
        "{:<12} {:<8} {:>10} {:>10} {:>10} {:>10}  {:<12} {}",
        "date", "ticker", "entry", "exit", "quantity", "price", "strategy", "notes"
    );
    for trade in &trades {
        let entry = trade.entry.map_or(String::new(), |v| format!("{v:.2}"));
        let exit = trade.exit.map_or(String::new(), |v| format!("{v:.2}"));
        println!(
            "{:<12} {:<8} {:>10} {:>10} {:>10} {:>10.2}  {:<12} {}",
            trade.date, trade.ticker, entry, exit, trade.quantity, trade.price,
            trade.strategy, trade.notes
        );
    }
    eprintln!("{} trades", trades.len());
    ExitCode::SUCCESS
}

fn run_curve(ledger_path: &PathBuf) -> ExitCode {
    let trades = match load_trades(ledger_path) {
        Ok(t) => t,
        Err(code) => return code,
    };

    let curve = compute_equity_curve(&trades);
    let (dates, values) = curve_series(&curve);

    println!("date,equity");
    for (date, equity) in dates.iter().zip(values.iter()) {
        println!("{date},{equity:.2}");
    }
    ExitCode::SUCCESS
}

fn run_serve(
    ledger_path: &PathBuf,
    seed_path: Option<&PathBuf>,
    config: Option<&dyn ConfigPort>,
) -> ExitCode {
    #[cfg(feature = "web")]
    {
        use crate::adapters::web::{AppState, build_router};
        use std::net::SocketAddr;
        use std::sync::Arc;

        eprintln!("Opening ledger at {}", ledger_path.display());
        let ledger = match open_ledger(ledger_path) {
            Ok(l) => l,
            Err(code) => return code,
        };

        match ledger.initialize_and_seed(seed_path.map(|p| p.as_path())) {
            Ok(0) => {}
            Ok(n) => eprintln!("Seeded {n} trades"),
            Err(e @ JournalError::Seed { .. }) => {
                eprintln!("warning: {e}; continuing with an empty ledger");
            }
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::from(&e);
            }
        }

        let addr: SocketAddr = config
            .and_then(|c| c.get_string("web", "listen"))
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse()
            .unwrap_or_else(|_| "127.0.0.1:3000".parse().unwrap());

        eprintln!("Starting dashboard on http://{addr}");

        let state = AppState {
            ledger: Arc::new(ledger),
        };
        let router = build_router(state);

        tokio::runtime::Runtime::new().unwrap().block_on(async {
            let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
            axum::serve(listener, router).await.unwrap();
        });

        ExitCode::SUCCESS
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = (ledger_path, seed_path, config);
        eprintln!("error: web feature is required for serve");
        ExitCode::from(1)
    }
}
