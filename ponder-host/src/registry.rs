//! # Service Registry
//!
//! The single object a plugin holds to reach every host service.
//!
//! The registry is built once at startup and composes the command interpreter,
//! the configuration service, the plugin's storage service and the toolbox.
//! It adds no behavior of its own beyond wiring autosave at startup and a final
//! save at shutdown.

use ponder_core::{ColorResolver, Persistable};
use std::sync::Arc;
use tracing::{debug, info};

use crate::commands::{ColorCommand, CommandInterpreter, SaveCommand};
use crate::config::ConfigService;
use crate::scheduler::{AutosaveScheduler, HostTimer, TaskHandle};
use crate::storage::{RecordStore, SaveReport, StorageError, StorageService};
use crate::toolbox::Toolbox;

/// Registry of the services available to one plugin.
///
/// # Example
///
/// ```no_run
/// use ponder_host::config::{Config, ConfigService};
/// use ponder_host::registry::ServiceRegistry;
/// use ponder_host::scheduler::TokioTimer;
/// use ponder_host::storage::MemoryRecordStore;
/// use ponder_core::Snapshot;
/// use std::sync::Arc;
///
/// # async fn example() -> anyhow::Result<()> {
/// let mut services: ServiceRegistry<Snapshot> = ServiceRegistry::new(
///     ConfigService::new(Config::default()),
///     Arc::new(MemoryRecordStore::new()),
///     Arc::new(TokioTimer::current()?),
/// );
///
/// services.storage_service().load()?;
/// services.start_autosave();
/// let color = services.toolbox().resolve_color("dark red");
/// # Ok(())
/// # }
/// ```
pub struct ServiceRegistry<E> {
    plugin_name: String,
    debug: bool,
    command_interpreter: CommandInterpreter,
    config_service: ConfigService,
    storage_service: Arc<StorageService<E>>,
    toolbox: Toolbox,
    autosave: Option<TaskHandle>,
}

impl<E> ServiceRegistry<E>
where
    E: Persistable + Default + Send + Sync + 'static,
{
    /// Build every service from the loaded configuration.
    pub fn new(
        config_service: ConfigService,
        store: Arc<dyn RecordStore>,
        timer: Arc<dyn HostTimer>,
    ) -> Self {
        let config = config_service.config();
        let plugin_name = config.plugin.name.clone();
        let debug = config.plugin.debug;

        let color_resolver = if config.colors.host_table {
            ColorResolver::new()
        } else {
            ColorResolver::restricted()
        };

        let storage_service = Arc::new(StorageService::new(plugin_name.clone(), store));
        let toolbox = Toolbox::new(color_resolver, AutosaveScheduler::new(timer));

        debug!(plugin = %plugin_name, "Service registry created");

        Self {
            plugin_name,
            debug,
            command_interpreter: CommandInterpreter::new(),
            config_service,
            storage_service,
            toolbox,
            autosave: None,
        }
    }

    /// Register the `save` and `color` commands.
    pub fn register_builtin_commands(&mut self) {
        let permission = format!("{}.save", self.plugin_name);
        self.command_interpreter.register(SaveCommand::new(
            Arc::clone(&self.storage_service),
            permission,
        ));
        self.command_interpreter
            .register(ColorCommand::new(self.toolbox.color_resolver().clone()));
    }

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    pub fn command_interpreter(&self) -> &CommandInterpreter {
        &self.command_interpreter
    }

    pub fn command_interpreter_mut(&mut self) -> &mut CommandInterpreter {
        &mut self.command_interpreter
    }

    pub fn config_service(&self) -> &ConfigService {
        &self.config_service
    }

    pub fn config_service_mut(&mut self) -> &mut ConfigService {
        &mut self.config_service
    }

    pub fn storage_service(&self) -> &Arc<StorageService<E>> {
        &self.storage_service
    }

    pub fn toolbox(&self) -> &Toolbox {
        &self.toolbox
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Schedule the hourly autosave if it is enabled and not already running.
    pub fn start_autosave(&mut self) -> Option<&TaskHandle> {
        if !self.config_service.config().autosave.enabled {
            info!(plugin = %self.plugin_name, "Autosave disabled by configuration");
            return None;
        }

        if self.autosave.is_none() {
            let target = Arc::clone(&self.storage_service);
            self.autosave = Some(self.toolbox.schedule_autosave(target));
        }
        self.autosave.as_ref()
    }

    pub fn autosave_handle(&self) -> Option<&TaskHandle> {
        self.autosave.as_ref()
    }

    /// Stop the autosave and write everything one last time.
    pub fn shutdown(&mut self) -> Result<SaveReport, StorageError> {
        if let Some(handle) = self.autosave.take() {
            handle.cancel();
        }

        info!(plugin = %self.plugin_name, "Saving before shutdown");
        self.storage_service.save()
    }
}
