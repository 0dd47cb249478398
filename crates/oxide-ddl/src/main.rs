//! oxide-ddl CLI
//!
//! Prints the SQL a platform generates for JSON schema and diff documents.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use oxide_ddl::config::{EngineConfig, parse_document};
use oxide_ddl::prelude::*;
use oxide_query_cache::{ParamTypes, QueryCacheProfile, QueryParams};

/// Dialect-aware DDL generation.
#[derive(Parser)]
#[command(name = "oxide-ddl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target platform (mysql, postgresql, sqlite, sqlserver).
    #[arg(short, long, env = "OXIDE_DDL_PLATFORM", default_value = "postgresql")]
    platform: PlatformKind,

    /// JSON engine configuration; overrides --platform.
    #[arg(short, long, env = "OXIDE_DDL_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print CREATE TABLE statements for a table document.
    CreateTable {
        /// Path to the table JSON document.
        file: PathBuf,
    },

    /// Print ALTER TABLE statements for a diff document.
    AlterTable {
        /// Path to the diff JSON document.
        file: PathBuf,
    },

    /// Print a DROP TABLE statement.
    DropTable {
        /// Table name, optionally schema-qualified.
        name: String,
    },

    /// Print a statement emptying a table.
    TruncateTable {
        /// Table name, optionally schema-qualified.
        name: String,

        /// Truncate referencing tables too, where supported.
        #[arg(long)]
        cascade: bool,
    },

    /// Quote an identifier.
    Quote {
        /// Identifier, optionally schema-qualified.
        identifier: String,

        /// Quote only where the platform requires it.
        #[arg(long)]
        if_needed: bool,
    },

    /// Print the declaration of a column type.
    TypeDecl {
        /// Type kind or registered alias.
        kind: String,

        /// Length for string and binary types.
        #[arg(long)]
        length: Option<u32>,

        /// Precision for decimal types.
        #[arg(long)]
        precision: Option<u32>,

        /// Scale for decimal types.
        #[arg(long)]
        scale: Option<u32>,

        /// Fixed-width string or binary.
        #[arg(long)]
        fixed: bool,
    },

    /// Reserved keyword lookups.
    Keywords {
        /// Word to check; exits with status 1 if it is reserved.
        #[arg(long)]
        check: String,
    },

    /// Print the short and long cache keys of a query.
    CacheKey {
        /// SQL text of the query.
        sql: String,

        /// Parameters as a JSON array or object.
        #[arg(long, default_value = "[]")]
        params: String,

        /// Parameter types as a JSON array or object.
        #[arg(long, default_value = "[]")]
        types: String,

        /// Connection parameters as a JSON object.
        #[arg(long, default_value = "{}")]
        connection: String,

        /// Explicit cache key.
        #[arg(long)]
        key: Option<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

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

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::new(cli.platform),
    };
    let platform = config.build()?;
    debug!(platform = platform.name(), "Platform ready");

    match cli.command {
        Commands::CreateTable { file } => {
            let table: Table = parse_document(&platform, &read(&file)?)?;
            print_statements(&platform.create_table_sql(&table)?);
        }

        Commands::AlterTable { file } => {
            let diff: TableDiff = parse_document(&platform, &read(&file)?)?;
            let sql = platform.alter_table_sql(&diff)?;
            if sql.is_empty() {
                info!("Diff is empty, nothing to do.");
            }
            print_statements(&sql);
        }

        Commands::DropTable { name } => {
            print_statements(&[platform.drop_table_sql(&Identifier::new(name))]);
        }

        Commands::TruncateTable { name, cascade } => {
            print_statements(&[platform.truncate_table_sql(&Identifier::new(name), cascade)]);
        }

        Commands::Quote {
            identifier,
            if_needed,
        } => {
            let quoted = if if_needed {
                platform.quote_if_needed(&Identifier::new(&identifier))
            } else {
                platform.quote_identifier(&identifier)
            };
            println!("{quoted}");
        }

        Commands::TypeDecl {
            kind,
            length,
            precision,
            scale,
            fixed,
        } => {
            let options = TypeOptions {
                length,
                precision,
                scale,
                fixed,
                ..TypeOptions::default()
            };
            let kind = platform.resolve_type(&kind)?;
            println!("{}", platform.type_declaration_sql(kind, &options)?);
        }

        Commands::Keywords { check } => {
            if platform.is_reserved_keyword(&check) {
                println!("'{check}' is a reserved keyword on {}", platform.name());
                return Ok(ExitCode::FAILURE);
            }
            println!("'{check}' is not reserved on {}", platform.name());
        }

        Commands::CacheKey {
            sql,
            params,
            types,
            connection,
            key,
        } => {
            let params: QueryParams =
                serde_json::from_str(&params).context("--params must be a JSON array or object")?;
            let types: ParamTypes =
                serde_json::from_str(&types).context("--types must be a JSON array or object")?;
            let connection: Value =
                serde_json::from_str(&connection).context("--connection must be a JSON object")?;
            let connection: BTreeMap<String, Value> = match connection {
                Value::Object(map) => map.into_iter().collect(),
                _ => anyhow::bail!("--connection must be a JSON object"),
            };

            let mut profile = QueryCacheProfile::new();
            if let Some(key) = key {
                profile = profile.with_cache_key(key);
            }
            let (short_key, long_key) =
                profile.generate_cache_keys(&sql, &params, &types, &connection)?;
            println!("{short_key}");
            println!("{long_key}");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))
}

fn print_statements<S: AsRef<str>>(statements: &[S]) {
    for statement in statements {
        println!("{};", statement.as_ref());
    }
}
