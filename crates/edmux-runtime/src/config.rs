//! TOML config loading: `--config` override or `<config dir>/edmux/config.toml`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use edmux_core::RunnerSettings;
use edmux_tmux::{BufferAddressing, BufferFormat, TmuxExecutor};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tmux_bin: String,
    pub socket_path: Option<String>,
    pub socket_name: Option<String>,
    /// Opaque editor-client spawn line used by `clone`.
    pub client_command: Option<String>,
    pub runner: RunnerSettings,
    pub buffers: BufferSection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmux_bin: "tmux".to_string(),
            socket_path: None,
            socket_name: None,
            client_command: None,
            runner: RunnerSettings::default(),
            buffers: BufferSection::default(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BufferSection {
    /// Whether the server addresses buffers by bare index or by name.
    pub addressing: BufferAddressing,
    /// Custom `list-buffers` line pattern for servers neither stock form
    /// matches.
    pub pattern: Option<String>,
}

impl Config {
    /// Build the executor, CLI socket flags taking precedence over the file.
    pub fn executor(
        &self,
        socket_path_flag: Option<&str>,
        socket_name_flag: Option<&str>,
    ) -> TmuxExecutor {
        let mut exec = TmuxExecutor::new(self.tmux_bin.clone());
        if let Some(path) = socket_path_flag.or(self.socket_path.as_deref()) {
            exec = exec.with_socket_path(path);
        }
        if let Some(name) = socket_name_flag.or(self.socket_name.as_deref()) {
            exec = exec.with_socket_name(name);
        }
        exec
    }

    pub fn buffer_format(&self) -> anyhow::Result<BufferFormat> {
        match &self.buffers.pattern {
            Some(pattern) => BufferFormat::custom(self.buffers.addressing, pattern)
                .context("invalid buffers.pattern in config"),
            None => Ok(BufferFormat::for_addressing(self.buffers.addressing)),
        }
    }
}

pub fn load_config(path_override: Option<&str>) -> anyhow::Result<Config> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        dirs::config_dir,
    )
}

fn load_config_from_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    config_root: FRoot,
) -> anyhow::Result<Config>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let path = match path_override {
        Some(p) => PathBuf::from(p),
        None => match config_root() {
            Some(root) => root.join("edmux").join("config.toml"),
            None => return Ok(Config::default()),
        },
    };

    match read_file(&path) {
        Ok(text) => toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if path_override.is_some() {
                anyhow::bail!("config file {} not found", path.display());
            }
            Ok(Config::default())
        }
        Err(e) => {
            Err(e).with_context(|| format!("failed to read config file {}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edmux_tmux::SplitOrientation;

    fn not_found(_: &Path) -> Result<String, std::io::Error> {
        Err(std::io::Error::from(std::io::ErrorKind::NotFound))
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let config = load_config_from_sources(None, not_found, || Some(PathBuf::from("/cfg")))
            .expect("defaults");
        assert_eq!(config, Config::default());
        assert_eq!(config.tmux_bin, "tmux");
        assert_eq!(config.buffers.addressing, BufferAddressing::Name);
    }

    #[test]
    fn missing_override_file_is_an_error() {
        let err = load_config_from_sources(Some("/nope.toml"), not_found, || None)
            .expect_err("should fail");
        assert!(err.to_string().contains("/nope.toml"));
    }

    #[test]
    fn full_file_parses() {
        let text = r#"
            tmux_bin = "/opt/tmux/bin/tmux"
            socket_name = "edmux"
            client_command = "emacsclient -t"

            [runner]
            orientation = "horizontal"
            height_percent = 35
            prefer_nearest = true

            [buffers]
            addressing = "index"
        "#;
        let config = load_config_from_sources(
            Some("/cfg/edmux/config.toml"),
            |_| Ok(text.to_string()),
            || None,
        )
        .expect("parses");

        assert_eq!(config.tmux_bin, "/opt/tmux/bin/tmux");
        assert_eq!(config.socket_name.as_deref(), Some("edmux"));
        assert_eq!(config.client_command.as_deref(), Some("emacsclient -t"));
        assert_eq!(config.runner.orientation, SplitOrientation::Horizontal);
        assert_eq!(config.runner.height_percent, 35);
        assert!(config.runner.prefer_nearest);
        assert_eq!(config.buffers.addressing, BufferAddressing::Index);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = load_config_from_sources(
            Some("/cfg/edmux/config.toml"),
            |_| Ok("[runner]\nheight_percent = 30\n".to_string()),
            || None,
        )
        .expect("parses");
        assert_eq!(config.runner.height_percent, 30);
        assert_eq!(config.runner.orientation, SplitOrientation::Vertical);
        assert_eq!(config.tmux_bin, "tmux");
    }

    #[test]
    fn custom_buffer_pattern_is_validated() {
        let mut config = Config::default();
        config.buffers.pattern = Some("(unclosed".to_string());
        assert!(config.buffer_format().is_err());

        config.buffers.pattern = Some(r#"^(\d+): (\d+) bytes: "(.*)"$"#.to_string());
        assert!(config.buffer_format().is_ok());
    }
}
