// # todo-cli - line-oriented todo store driver
//
// This binary is a THIN integration layer. It does not contain store logic;
// everything it does goes through the `TodoService` trait of todo-core.
//
// The binary is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing tracing
// 3. Building the store through the generator registry
// 4. Executing commands read from stdin until EOF, `quit` or Ctrl-C
//
// ## Configuration
//
// - `TODO_ID_GENERATOR`: Id generator type (incremental, uuid)
// - `TODO_ID_START`: First id for the incremental generator
// - `TODO_LOG_LEVEL`: trace, debug, info, warn, error
//
// ## Example
//
// ```bash
// export TODO_ID_GENERATOR=incremental
// printf 'create buy milk\nget 0\ndone 0\nget 0\ndelete 0\nget 0\n' | todo-cli
// ```

use anyhow::{Context, Result};
use std::env;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use todo_core::{
    GeneratorRegistry, IdGeneratorConfig, InMemoryTodoService, Todo, TodoConfig, TodoService,
    TracedTodoService, is_todo_not_found,
};

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy)]
enum TodoExitCode {
    /// Clean shutdown (EOF, `quit` or Ctrl-C)
    CleanShutdown = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error (unexpected)
    RuntimeError = 2,
}

impl From<TodoExitCode> for ExitCode {
    fn from(code: TodoExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    id_generator: String,
    id_start: Option<u64>,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Ok(Self {
            id_generator: env::var("TODO_ID_GENERATOR")
                .unwrap_or_else(|_| "incremental".to_string()),
            id_start: env::var("TODO_ID_START")
                .ok()
                .map(|s| s.trim().parse::<u64>())
                .transpose()
                .context("TODO_ID_START must be a non-negative integer")?,
            log_level: env::var("TODO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        match self.id_generator.as_str() {
            "incremental" | "uuid" => {}
            _ => anyhow::bail!(
                "TODO_ID_GENERATOR '{}' is not supported. \
                Supported generators: incremental, uuid",
                self.id_generator
            ),
        }

        if self.id_generator != "incremental" && self.id_start.is_some() {
            anyhow::bail!("TODO_ID_START is only valid when TODO_ID_GENERATOR=incremental");
        }

        if self.log_level().is_none() {
            anyhow::bail!(
                "TODO_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            );
        }

        Ok(())
    }

    fn log_level(&self) -> Option<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }

    /// Translate into the core store configuration
    fn store_config(&self) -> TodoConfig {
        let id_generator = match self.id_generator.as_str() {
            "uuid" => IdGeneratorConfig::Uuid,
            _ => IdGeneratorConfig::Incremental {
                start: self.id_start.unwrap_or(0),
            },
        };
        TodoConfig::new().with_id_generator(id_generator)
    }
}

/// A single line of input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Create(String),
    Get(String),
    SetDone(String, bool),
    Update(String, String),
    Upsert(String, String),
    Delete(String),
    Help,
    Quit,
}

const USAGE: &str = "commands: create <description> | get <id> | done <id> | undo <id> | \
update <id> <description> | upsert <id> <description> | delete <id> | help | quit";

impl Command {
    /// Parse one input line; `Ok(None)` for blank lines
    fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb {
            "create" => Command::Create(rest.to_string()),
            "get" => Command::Get(single_id(verb, rest)?),
            "done" => Command::SetDone(single_id(verb, rest)?, true),
            "undo" => Command::SetDone(single_id(verb, rest)?, false),
            "update" => {
                let (id, description) = id_and_description(verb, rest)?;
                Command::Update(id, description)
            }
            "upsert" => {
                let (id, description) = id_and_description(verb, rest)?;
                Command::Upsert(id, description)
            }
            "delete" => Command::Delete(single_id(verb, rest)?),
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => anyhow::bail!("unknown command '{}'", verb),
        };

        Ok(Some(command))
    }
}

fn single_id(verb: &str, rest: &str) -> Result<String> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        anyhow::bail!("'{}' expects exactly one id", verb);
    }
    Ok(rest.to_string())
}

fn id_and_description(verb: &str, rest: &str) -> Result<(String, String)> {
    let (id, description) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    if id.is_empty() {
        anyhow::bail!("'{}' expects an id followed by a description", verb);
    }
    Ok((id.to_string(), description.trim().to_string()))
}

/// Run one command against the service and render its outcome
fn execute<S: TodoService>(service: &S, command: &Command) -> Result<String> {
    let outcome = match command {
        Command::Create(description) => service.create(Todo::new(description.as_str())),
        Command::Get(id) => service
            .get(id)
            .map(|todo| serde_json::json!({ "id": id, "todo": todo }).to_string()),
        Command::SetDone(id, is_done) => service.get(id).and_then(|todo| {
            service
                .update(id, todo.with_done(*is_done), false)
                .map(|()| "ok".to_string())
        }),
        Command::Update(id, description) => service
            .update(id, Todo::new(description.as_str()), false)
            .map(|()| "ok".to_string()),
        Command::Upsert(id, description) => service
            .update(id, Todo::new(description.as_str()), true)
            .map(|()| "ok".to_string()),
        Command::Delete(id) => service.delete(id).map(|()| "ok".to_string()),
        Command::Help => return Ok(USAGE.to_string()),
        Command::Quit => return Ok(String::new()),
    };

    match outcome {
        Ok(output) => Ok(output),
        Err(err) => match is_todo_not_found(&err) {
            Some(id) => Ok(format!("not found: {}", id)),
            None => Err(err.into()),
        },
    }
}

fn main() -> ExitCode {
    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return TodoExitCode::ConfigError.into();
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return TodoExitCode::ConfigError.into();
    }

    // Initialize tracing; stdout is reserved for command output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level().unwrap_or(Level::INFO))
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return TodoExitCode::ConfigError.into();
    }

    let registry = GeneratorRegistry::with_builtins();
    let service = match InMemoryTodoService::from_config(&config.store_config(), &registry) {
        Ok(store) => TracedTodoService::new(store),
        Err(e) => {
            error!("Failed to build todo store: {}", e);
            return TodoExitCode::ConfigError.into();
        }
    };

    info!(generator = %config.id_generator, "Starting todo-cli");

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return TodoExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        if let Err(e) = run(&service).await {
            error!("Runtime error: {:#}", e);
            TodoExitCode::RuntimeError
        } else {
            TodoExitCode::CleanShutdown
        }
    });

    result.into()
}

/// Read commands from stdin until EOF, `quit` or Ctrl-C
async fn run<S: TodoService>(service: &S) -> Result<()> {
    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            line = lines.next() => line,
            _ = &mut shutdown => {
                info!("Received Ctrl-C, shutting down");
                return Ok(());
            }
        };

        let Some(line) = line else {
            info!("End of input, shutting down");
            return Ok(());
        };
        let line = line.context("Failed to read stdin")?;

        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => {
                info!("Quit requested, shutting down");
                return Ok(());
            }
            Ok(Some(command)) => println!("{}", execute(service, &command)?),
            Err(e) => {
                warn!("Rejected input line: {}", e);
                println!("error: {}\n{}", e, USAGE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryTodoService<todo_core::IncrementalIdGenerator> {
        InMemoryTodoService::with_default_generator()
    }

    fn config(id_generator: &str, id_start: Option<u64>, log_level: &str) -> Config {
        Config {
            id_generator: id_generator.to_string(),
            id_start,
            log_level: log_level.to_string(),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("create  buy milk ").unwrap(),
            Some(Command::Create("buy milk".to_string()))
        );
        assert_eq!(
            Command::parse("done 3").unwrap(),
            Some(Command::SetDone("3".to_string(), true))
        );
        assert_eq!(
            Command::parse("upsert a1 call mom").unwrap(),
            Some(Command::Upsert("a1".to_string(), "call mom".to_string()))
        );
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Command::parse("get").is_err());
        assert!(Command::parse("get 1 2").is_err());
        assert!(Command::parse("update").is_err());
        assert!(Command::parse("frobnicate 1").is_err());
    }

    #[test]
    fn test_execute_buy_milk_session() {
        let service = store();
        let run = |line: &str| execute(&service, &Command::parse(line).unwrap().unwrap()).unwrap();

        assert_eq!(run("create buy milk"), "0");
        assert_eq!(
            run("get 0"),
            r#"{"id":"0","todo":{"description":"buy milk","is_done":false}}"#
        );
        assert_eq!(run("done 0"), "ok");
        assert!(service.get("0").unwrap().is_done);
        assert_eq!(run("delete 0"), "ok");
        assert_eq!(run("get 0"), "not found: 0");
        assert_eq!(run("done 0"), "not found: 0");
        assert_eq!(run("update 0 nothing"), "not found: 0");
        assert_eq!(run("upsert 0 again"), "ok");
        assert_eq!(service.get("0").unwrap(), Todo::new("again"));
    }

    #[test]
    fn test_config_validation() {
        assert!(config("incremental", Some(5), "info").validate().is_ok());
        assert!(config("uuid", None, "DEBUG").validate().is_ok());
        assert!(config("snowflake", None, "info").validate().is_err());
        assert!(config("uuid", Some(1), "info").validate().is_err());
        assert!(config("incremental", None, "loud").validate().is_err());
    }

    #[test]
    fn test_store_config_from_env_settings() {
        assert_eq!(
            config("incremental", Some(9), "info").store_config().id_generator,
            IdGeneratorConfig::Incremental { start: 9 }
        );
        assert_eq!(
            config("uuid", None, "info").store_config().id_generator,
            IdGeneratorConfig::Uuid
        );
    }
}
