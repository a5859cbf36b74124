//! tally-sql CLI
//!
//! Renders SQL statements for the tally schema and prints them to stdout.
//! Records and condition lists are read as JSON, inline or from a file.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use tally_sql_core::builder::{self, Condition};
use tally_sql_core::{Record, Table, generator};

/// Schema-checked SQL statements for the tally voting site.
#[derive(Parser)]
#[command(name = "tally-sql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, env = "TALLY_SQL_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a SELECT by id.
    Get {
        /// Table name.
        #[arg(short, long)]
        table: String,

        /// Row id.
        #[arg(short, long)]
        id: String,
    },

    /// Render a DELETE by id.
    Delete {
        /// Table name.
        #[arg(short, long)]
        table: String,

        /// Row id.
        #[arg(short, long)]
        id: String,
    },

    /// Render an INSERT from a JSON record.
    Insert {
        /// Table name.
        #[arg(short, long)]
        table: String,

        #[command(flatten)]
        input: JsonInput,
    },

    /// Render an UPDATE from a JSON record.
    Update {
        /// Table name.
        #[arg(short, long)]
        table: String,

        #[command(flatten)]
        input: JsonInput,
    },

    /// Render a SELECT from a JSON array of conditions.
    Query {
        /// Table name.
        #[arg(short, long)]
        table: String,

        #[command(flatten)]
        input: JsonInput,

        /// Field to order by.
        #[arg(long, requires = "direction")]
        order_by: Option<String>,

        /// Sort direction (ASC, DESC, asc or desc).
        #[arg(long, requires = "order_by")]
        direction: Option<String>,

        /// Maximum number of rows.
        #[arg(short, long)]
        limit: Option<String>,
    },

    /// Render a LIMIT fragment.
    Limit {
        /// Row count.
        value: String,
    },

    /// Render an ORDER BY fragment.
    OrderBy {
        /// Table name.
        #[arg(short, long)]
        table: String,

        /// Field to order by.
        #[arg(short, long)]
        field: String,

        /// Sort direction (ASC, DESC, asc or desc).
        #[arg(short, long, default_value = "ASC")]
        direction: String,
    },

    /// List the known tables and their fields.
    Tables,

    /// Generate random row ids.
    GenerateId {
        /// Number of ids to generate.
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
}

/// JSON given inline or read from a file (`-` for stdin).
#[derive(Args)]
struct JsonInput {
    /// Inline JSON.
    #[arg(long, conflicts_with = "file")]
    json: Option<String>,

    /// Path to a JSON file, or `-` for stdin.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl JsonInput {
    /// Reads and parses the JSON, if any was given.
    fn read(&self) -> anyhow::Result<Option<Value>> {
        let text = match (&self.json, &self.file) {
            (Some(json), _) => json.clone(),
            (None, Some(path)) if path.as_os_str() == "-" => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read JSON from stdin")?;
                buf
            }
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            (None, None) => return Ok(None),
        };
        let value = serde_json::from_str(&text).context("input is not valid JSON")?;
        Ok(Some(value))
    }

    fn record(&self) -> anyhow::Result<Record> {
        let Some(value) = self.read()? else {
            bail!("a JSON record is required (use --json or --file)");
        };
        Ok(Record::from_json(value)?)
    }

    fn conditions(&self) -> anyhow::Result<Vec<Option<Condition>>> {
        match self.read()? {
            Some(value) => {
                serde_json::from_value(value).context("conditions must be a JSON array")
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Renders the output of a command.
fn render(command: &Commands) -> anyhow::Result<String> {
    let output = match command {
        Commands::Get { table, id } => builder::get(table, id.as_str())?,
        Commands::Delete { table, id } => builder::delete(table, id.as_str())?,
        Commands::Insert { table, input } => builder::insert(table, &input.record()?)?,
        Commands::Update { table, input } => builder::update(table, &input.record()?)?,
        Commands::Query {
            table,
            input,
            order_by,
            direction,
            limit,
        } => {
            let conditions = input.conditions()?;
            debug!(count = conditions.len(), "rendering query");
            let mut sql = builder::query(table, conditions.iter().map(Option::as_ref))?;
            if let (Some(field), Some(direction)) = (order_by, direction) {
                sql.push(' ');
                sql.push_str(&builder::escape_order_by(table, field, direction)?);
            }
            if let Some(limit) = limit {
                sql.push(' ');
                sql.push_str(&builder::escape_limit(limit.as_str()));
            }
            sql
        }
        Commands::Limit { value } => builder::escape_limit(value.as_str()),
        Commands::OrderBy {
            table,
            field,
            direction,
        } => builder::escape_order_by(table, field, direction)?,
        Commands::Tables => Table::ALL
            .iter()
            .map(|t| format!("{t}: {}", t.fields().join(", ")))
            .collect::<Vec<_>>()
            .join("\n"),
        Commands::GenerateId { count } => (0..*count)
            .map(|_| generator::generate())
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let output = render(&cli.command)?;
    info!(bytes = output.len(), "rendered");
    println!("{output}");

    Ok(())
}
