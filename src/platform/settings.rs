//! System permission settings navigation.

use std::process::Command;

use crate::log;

/// Opens the system's permission settings. Fire-and-forget.
pub trait SettingsNavigator: Send + Sync {
    fn open_permission_settings(&self);
}

/// Spawns a configurable settings command, detached.
pub struct SystemSettings {
    command: Vec<String>,
}

impl SystemSettings {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl SettingsNavigator for SystemSettings {
    fn open_permission_settings(&self) {
        let Some((program, args)) = self.command.split_first() else {
            log::log("no settings command configured");
            return;
        };

        match Command::new(program).args(args).spawn() {
            Ok(_) => log::log_event(&format!("opened settings via {}", program)),
            Err(e) => log::log(&format!("failed to open settings: {}", e)),
        }
    }
}
