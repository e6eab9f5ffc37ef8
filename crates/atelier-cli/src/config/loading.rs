//! Multi-source configuration loading.

use crate::cli::{BuildArgs, ServeArgs};
use crate::config::{AtelierConfig, CONFIG_FILE, ENV_PREFIX};
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use std::path::Path;

impl AtelierConfig {
    /// Load configuration from defaults, the config file, and environment.
    ///
    /// An explicitly passed `config_path` must exist; the default
    /// `atelier.config.json` is only merged when present.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        let config_file = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Some(path.to_path_buf())
            }
            None => {
                let default_path = Path::new(CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            figment = figment.merge(Json::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        figment.extract().map_err(|e| {
            ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: e.to_string(),
                hint: "Check atelier.config.json syntax and field types".to_string(),
            }
            .into()
        })
    }

    /// Overlay CLI build arguments. Only flags the user actually passed
    /// override lower-priority sources.
    pub fn apply_build_args(&mut self, args: &BuildArgs) {
        if let Some(output) = &args.output {
            self.output = output.clone();
        }
        if let Some(template) = &args.template {
            self.template = Some(template.clone());
        }
        if let Some(root) = &args.templates_root {
            self.templates_root = Some(root.clone());
        }
        self.optimized |= args.optimized;
        self.watch |= args.watch;
    }

    /// Overlay CLI serve arguments.
    pub fn apply_serve_args(&mut self, args: &ServeArgs) {
        if let Some(output) = &args.output {
            self.output = output.clone();
        }
        if let Some(template) = &args.template {
            self.template = Some(template.clone());
        }
        if let Some(root) = &args.templates_root {
            self.templates_root = Some(root.clone());
        }
        self.optimized |= args.optimized;
        self.watch |= args.watch;
        self.ssl |= args.ssl;
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(host) = &args.host {
            self.host = host.clone();
        }
        if let Some(cert) = &args.cert {
            self.cert = Some(cert.clone());
        }
        if let Some(key) = &args.key {
            self.key = Some(key.clone());
        }
    }

    /// Built-in default values.
    pub(crate) fn default_config() -> Self {
        use crate::config::{default_host, default_output, default_port};
        Self {
            output: default_output(),
            template: None,
            optimized: false,
            watch: false,
            port: default_port(),
            host: default_host(),
            ssl: false,
            cert: None,
            key: None,
            templates_root: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let config = AtelierConfig::default_config();
        assert_eq!(config.output, std::path::PathBuf::from("dist"));
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert!(!config.optimized);
        assert!(!config.ssl);
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let err = AtelierConfig::load(Some(Path::new("/definitely/missing.json"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("atelier.config.json");
        fs::write(
            &path,
            r#"{ "output": "public", "template": "react", "optimized": true, "port": 8080 }"#,
        )
        .unwrap();

        let config = AtelierConfig::load(Some(&path)).unwrap();
        assert_eq!(config.output, std::path::PathBuf::from("public"));
        assert_eq!(config.template.as_deref(), Some("react"));
        assert!(config.optimized);
        assert_eq!(config.port, 8080);
        // Untouched fields keep their defaults.
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("atelier.config.json");
        fs::write(&path, r#"{ "outputs": "typo" }"#).unwrap();

        assert!(AtelierConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn cli_args_override_the_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("atelier.config.json");
        fs::write(&path, r#"{ "template": "react", "port": 8080 }"#).unwrap();

        let mut config = AtelierConfig::load(Some(&path)).unwrap();
        let args = crate::cli::ServeArgs {
            input: std::path::PathBuf::from("App.svelte"),
            output: None,
            template: Some("svelte".to_string()),
            optimized: false,
            watch: false,
            port: Some(4000),
            host: None,
            ssl: false,
            cert: None,
            key: None,
            self_signed: false,
            config: Some(path.clone()),
            templates_root: None,
        };
        config.apply_serve_args(&args);

        assert_eq!(config.template.as_deref(), Some("svelte"));
        assert_eq!(config.port, 4000);
    }
}
