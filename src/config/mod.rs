mod defaults;
use crate::constants::{MARKED_FRAME_COLOR, UNMARKED_FRAME_COLOR};
use crossterm::event::KeyCode;
use lazy_static::lazy_static;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
    #[serde(default = "defaults::config_path")]
    pub config_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ui: UiConfig::default(),
            keybindings: KeybindingsConfig::default(),
            config_path: defaults::config_path(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "defaults::ui::scene_list_width")]
    pub scene_list_width: u16,
    #[serde(default = "defaults::ui::marked_frame_color")]
    pub marked_frame_color: String,
    #[serde(default = "defaults::ui::unmarked_frame_color")]
    pub unmarked_frame_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            scene_list_width: defaults::ui::scene_list_width(),
            marked_frame_color: defaults::ui::marked_frame_color(),
            unmarked_frame_color: defaults::ui::unmarked_frame_color(),
        }
    }
}

impl UiConfig {
    /// Resolve the configured marked color, falling back to the built-in
    /// alert color when the string does not name a color.
    pub fn marked_color(&self) -> Color {
        self.marked_frame_color.parse().unwrap_or(MARKED_FRAME_COLOR)
    }

    pub fn unmarked_color(&self) -> Color {
        self.unmarked_frame_color
            .parse()
            .unwrap_or(UNMARKED_FRAME_COLOR)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct KeybindingsConfig {
    #[serde(default = "defaults::keys::enter_command_mode")]
    pub enter_command_mode: KeyCode,

    #[serde(default = "defaults::keys::enter_normal_mode")]
    pub enter_normal_mode: KeyCode,

    #[serde(default = "defaults::keys::execute_command")]
    pub execute_command: KeyCode,

    #[serde(default = "defaults::keys::up")]
    pub up: KeyCode,

    #[serde(default = "defaults::keys::down")]
    pub down: KeyCode,

    #[serde(default = "defaults::keys::step_back")]
    pub step_back: KeyCode,

    #[serde(default = "defaults::keys::step_forward")]
    pub step_forward: KeyCode,

    #[serde(default = "defaults::keys::switch_panel")]
    pub switch_panel: KeyCode,

    #[serde(default = "defaults::keys::add_bookmark")]
    pub add_bookmark: KeyCode,

    #[serde(default = "defaults::keys::remove_checked")]
    pub remove_checked: KeyCode,

    #[serde(default = "defaults::keys::toggle_checked")]
    pub toggle_checked: KeyCode,

    #[serde(default = "defaults::keys::toggle_mark")]
    pub toggle_mark: KeyCode,

    #[serde(default = "defaults::keys::edit_bookmark")]
    pub edit_bookmark: KeyCode,

    #[serde(default = "defaults::keys::recall")]
    pub recall: KeyCode,

    #[serde(default = "defaults::keys::open_finder")]
    pub open_finder: KeyCode,

    #[serde(default = "defaults::keys::help")]
    pub help: KeyCode,

    #[serde(default = "defaults::keys::quit")]
    pub quit: KeyCode,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            enter_command_mode: defaults::keys::enter_command_mode(),
            enter_normal_mode: defaults::keys::enter_normal_mode(),
            execute_command: defaults::keys::execute_command(),
            up: defaults::keys::up(),
            down: defaults::keys::down(),
            step_back: defaults::keys::step_back(),
            step_forward: defaults::keys::step_forward(),
            switch_panel: defaults::keys::switch_panel(),
            add_bookmark: defaults::keys::add_bookmark(),
            remove_checked: defaults::keys::remove_checked(),
            toggle_checked: defaults::keys::toggle_checked(),
            toggle_mark: defaults::keys::toggle_mark(),
            edit_bookmark: defaults::keys::edit_bookmark(),
            recall: defaults::keys::recall(),
            open_finder: defaults::keys::open_finder(),
            help: defaults::keys::help(),
            quit: defaults::keys::quit(),
        }
    }
}

lazy_static! {
    pub static ref CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

/// Loads application configuration from a file.
///
/// Priorities:
/// 1. A specified override path, if provided
/// 2. The default config location (platform config directory)
/// 3. Built-in defaults when no config file exists
///
/// The loaded configuration is stored in the global `CONFIG` static for
/// application-wide access.
pub fn load_config(path_override: Option<String>) -> Result<AppConfig, String> {
    if let Some(override_path) = path_override {
        let path = PathBuf::from(&override_path);
        if !path.exists() {
            return Err(format!(
                "Override config path does not exist: {}",
                path.display()
            ));
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Error reading override config file: {}", e))?;
        let mut loaded_config = toml::from_str::<AppConfig>(&content)
            .map_err(|e| format!("Error parsing override config file: {}", e))?;
        loaded_config.config_path = Some(path);

        let mut global_config = CONFIG.write().unwrap();
        *global_config = loaded_config.clone();
        return Ok(loaded_config);
    }

    if let Some(config_path) = defaults::config_path() {
        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .map_err(|e| format!("Error reading config file: {}", e))?;
            let mut loaded_config = toml::from_str::<AppConfig>(&content)
                .map_err(|e| format!("Error parsing config file: {}", e))?;
            loaded_config.config_path = Some(config_path);

            let mut global_config = CONFIG.write().unwrap();
            *global_config = loaded_config.clone();
            return Ok(loaded_config);
        }
    }

    Ok(load_default_config())
}

// Build an AppConfig::default() and set it as the global CONFIG value. Public
// so unit tests can reset the global state.
pub fn load_default_config() -> AppConfig {
    let default_config = AppConfig::default();
    let mut global_config = CONFIG.write().unwrap();
    *global_config = default_config.clone();
    default_config
}

pub fn read_config() -> AppConfig {
    CONFIG.read().unwrap().clone()
}
