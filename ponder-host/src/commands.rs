//! Command dispatch for plugin subcommands.
//!
//! Plugins register [`Command`] implementations with a [`CommandInterpreter`].
//! The host hands the interpreter pre-split arguments, where the first argument
//! selects the subcommand (`/plugin <subcommand> args...`). Lookup is
//! case-insensitive and covers every alias a command declares.

use async_trait::async_trait;
use ponder_core::{ColorResolver, Persistable};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::storage::StorageService;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("You don't have permission to do that ({0})")]
    PermissionDenied(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Command failed: {0}")]
    Failed(String),
}

/// Lines of feedback sent back to whoever issued the command.
pub type CommandOutput = Vec<String>;

// ============================================================================
// CommandSender
// ============================================================================

/// Whoever issued a command: the console or a named player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSender {
    name: String,
    operator: bool,
    permissions: HashSet<String>,
}

impl CommandSender {
    /// The server console, which holds every permission.
    pub fn console() -> Self {
        Self {
            name: "CONSOLE".to_string(),
            operator: true,
            permissions: HashSet::new(),
        }
    }

    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operator: false,
            permissions: HashSet::new(),
        }
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.insert(permission.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.operator || self.permissions.contains(permission)
    }
}

// ============================================================================
// Command Trait
// ============================================================================

#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name first, then aliases.
    fn names(&self) -> &[&'static str];

    /// Permission node required to run the command, if any.
    fn permission(&self) -> Option<&str> {
        None
    }

    /// One-line usage hint shown on bad input.
    fn usage(&self) -> &str {
        ""
    }

    async fn execute(
        &self,
        sender: &CommandSender,
        args: &[String],
    ) -> Result<CommandOutput, CommandError>;
}

// ============================================================================
// CommandInterpreter
// ============================================================================

/// Routes subcommand labels to registered commands.
#[derive(Default)]
pub struct CommandInterpreter {
    commands: Vec<Arc<dyn Command>>,
    by_name: HashMap<String, usize>,
    default_command: Option<usize>,
}

impl CommandInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under all of its names.
    ///
    /// A name already taken by an earlier command now points at this one.
    pub fn register<C>(&mut self, command: C)
    where
        C: Command + 'static,
    {
        let index = self.commands.len();
        for name in command.names() {
            self.by_name.insert(name.to_lowercase(), index);
        }
        self.commands.push(Arc::new(command));
    }

    /// Run `label`'s command when no subcommand is given.
    pub fn set_default(&mut self, label: &str) -> Result<(), CommandError> {
        let index = self
            .lookup(label)
            .ok_or_else(|| CommandError::UnknownCommand(label.to_string()))?;
        self.default_command = Some(index);
        Ok(())
    }

    fn lookup(&self, label: &str) -> Option<usize> {
        self.by_name.get(&label.to_lowercase()).copied()
    }

    pub fn get(&self, label: &str) -> Option<Arc<dyn Command>> {
        self.lookup(label).map(|i| Arc::clone(&self.commands[i]))
    }

    /// Primary names of all registered commands, sorted.
    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .by_name
            .values()
            .collect::<HashSet<_>>()
            .into_iter()
            .filter_map(|&i| self.commands[i].names().first().copied())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn count(&self) -> usize {
        self.command_names().len()
    }

    /// Dispatch `args` from `sender`.
    ///
    /// `args[0]` selects the command; the rest are passed through.
    pub async fn interpret(
        &self,
        sender: &CommandSender,
        args: &[String],
    ) -> Result<CommandOutput, CommandError> {
        let (index, rest) = match args.split_first() {
            Some((label, rest)) => {
                let index = self
                    .lookup(label)
                    .ok_or_else(|| CommandError::UnknownCommand(label.clone()))?;
                (index, rest)
            }
            None => match self.default_command {
                Some(index) => (index, args),
                None => {
                    return Err(CommandError::Usage(format!(
                        "<{}>",
                        self.command_names().join("|")
                    )))
                }
            },
        };

        let command = &self.commands[index];
        if let Some(permission) = command.permission() {
            if !sender.has_permission(permission) {
                return Err(CommandError::PermissionDenied(permission.to_string()));
            }
        }

        debug!(
            sender = %sender.name(),
            command = command.names().first().copied().unwrap_or_default(),
            "Executing command"
        );
        command.execute(sender, rest).await
    }
}

// ============================================================================
// Built-in Commands
// ============================================================================

/// `save` - flush a storage service immediately.
pub struct SaveCommand<E> {
    storage: Arc<StorageService<E>>,
    permission: String,
}

impl<E> SaveCommand<E> {
    pub fn new(storage: Arc<StorageService<E>>, permission: impl Into<String>) -> Self {
        Self {
            storage,
            permission: permission.into(),
        }
    }
}

#[async_trait]
impl<E> Command for SaveCommand<E>
where
    E: Persistable + Default + Send + Sync + 'static,
{
    fn names(&self) -> &[&'static str] {
        &["save", "s"]
    }

    fn permission(&self) -> Option<&str> {
        Some(self.permission.as_str())
    }

    async fn execute(
        &self,
        _sender: &CommandSender,
        _args: &[String],
    ) -> Result<CommandOutput, CommandError> {
        let report = self
            .storage
            .save()
            .map_err(|e| CommandError::Failed(e.to_string()))?;
        Ok(vec![format!(
            "Saved {} record(s) to '{}'",
            report.saved,
            self.storage.name()
        )])
    }
}

/// `color <name...>` - show the hex value a color name resolves to.
pub struct ColorCommand {
    resolver: ColorResolver,
}

impl ColorCommand {
    pub fn new(resolver: ColorResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl Command for ColorCommand {
    fn names(&self) -> &[&'static str] {
        &["color", "colour"]
    }

    fn usage(&self) -> &str {
        "color <name>"
    }

    async fn execute(
        &self,
        _sender: &CommandSender,
        args: &[String],
    ) -> Result<CommandOutput, CommandError> {
        if args.is_empty() {
            return Err(CommandError::Usage(self.usage().to_string()));
        }

        let input = args.join(" ");
        match self.resolver.resolve(&input) {
            Some(color) => Ok(vec![format!("{input} -> {color}")]),
            None => Err(CommandError::Failed(format!("'{input}' is not a known color"))),
        }
    }
}
