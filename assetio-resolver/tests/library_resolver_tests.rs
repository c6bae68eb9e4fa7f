//! End-to-end: default config discovery, the JSON library manager and the
//! filesystem fallback working together.

use assetio_manager::{DEFAULT_CONFIG_ENV_VAR, LibraryManagerFactory};
use assetio_resolver::*;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Studio {
    dir: TempDir,
    config: PathBuf,
}

impl Studio {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/cube.usda"), b"#usda 1.0\ndef Cube {}\n").unwrap();
        fs::write(
            dir.path().join("library.json"),
            r#"{
  "entities": {
    "cube": {
      "traits": {
        "content.LocatableContent": { "location": "file://${library_dir}/assets/cube.usda" }
      }
    },
    "placeholder": { "traits": {} }
  }
}"#,
        )
        .unwrap();
        let config = dir.path().join("assetio.toml");
        fs::write(
            &config,
            "[manager]\nidentifier = \"assetio.manager.library\"\n\n[manager.settings]\nlibrary_path = \"${config_dir}/library.json\"\n",
        )
        .unwrap();
        Self { dir, config }
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    fn resolver(&self) -> ManagedResolver<DefaultResolver> {
        let config = ResolverConfig {
            manager_config: Some(self.config.clone()),
            ..ResolverConfig::default()
        };
        ManagedResolver::from_config(&config, &LibraryManagerFactory, DefaultResolver::from_config(&config))
            .unwrap()
    }
}

fn env(vars: Vec<(&'static str, OsString)>) -> impl Fn(&str) -> Option<OsString> {
    move |key| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone())
}

#[test]
fn resolves_and_reads_library_entity() {
    let studio = Studio::new();
    let resolver = studio.resolver();
    assert_eq!(resolver.manager().identifier(), "assetio.manager.library");

    let id = resolver
        .create_identifier("bal:///cube", &ResolvedPath::empty())
        .unwrap();
    assert_eq!(id, "bal:///cube");

    let resolved = resolver.resolve(&id);
    assert_eq!(resolved.as_str(), "bal:///cube");
    assert_eq!(resolver.get_extension(&id).unwrap(), "usda");
    assert_eq!(
        resolver.get_modification_timestamp(&id, &resolved),
        Timestamp::EPOCH
    );

    let asset = resolver.open_asset(&resolved).unwrap();
    assert_eq!(&*asset.buffer().unwrap(), b"#usda 1.0\ndef Cube {}\n");
}

#[test]
fn relative_path_anchored_to_managed_layer() {
    let studio = Studio::new();
    fs::write(studio.path("assets/material.usda"), b"").unwrap();
    let resolver = studio.resolver();

    let id = resolver
        .create_identifier("./material.usda", &ResolvedPath::new("bal:///cube"))
        .unwrap();
    assert_eq!(Path::new(&id), studio.path("assets/material.usda"));
    assert!(!resolver.resolve(&id).is_empty());
}

#[test]
fn entity_without_location_falls_back_to_reference() {
    let studio = Studio::new();
    let resolver = studio.resolver();

    assert_eq!(resolver.get_extension("bal:///placeholder").unwrap(), "");
    assert!(matches!(
        resolver.open_asset(&ResolvedPath::new("bal:///placeholder")),
        Err(ResolverError::Io { .. })
    ));
}

#[test]
fn unknown_entity_fails_operation() {
    let studio = Studio::new();
    let resolver = studio.resolver();

    let err = resolver.get_extension("bal:///ghost").unwrap_err();
    assert!(matches!(err, ResolverError::Query { .. }));
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn config_built_from_environment_lookup() {
    let studio = Studio::new();
    let config = ResolverConfig::from_lookup(env(vec![(
        DEFAULT_CONFIG_ENV_VAR,
        studio.config.clone().into_os_string(),
    )]))
    .unwrap();

    let resolver =
        ManagedResolver::from_config(&config, &LibraryManagerFactory, DefaultResolver::new()).unwrap();
    assert_eq!(resolver.get_extension("bal:///cube").unwrap(), "usda");
}

// ================================================================
// Construction failures
// ================================================================

#[test]
fn missing_config_is_configuration_error_naming_variable() {
    let err = ManagedResolver::from_config(
        &ResolverConfig::default(),
        &LibraryManagerFactory,
        DefaultResolver::new(),
    )
    .unwrap_err();

    assert!(matches!(err, ResolverError::Configuration { env_var, .. } if env_var == DEFAULT_CONFIG_ENV_VAR));
    assert!(err.to_string().contains("OPENASSETIO_DEFAULT_CONFIG"));
}

#[test]
fn unreadable_config_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let config = ResolverConfig {
        manager_config: Some(dir.path().join("absent.toml")),
        ..ResolverConfig::default()
    };

    let err = ManagedResolver::from_config(&config, &LibraryManagerFactory, DefaultResolver::new())
        .unwrap_err();
    assert!(matches!(err, ResolverError::Configuration { .. }));
}

#[test]
fn unknown_manager_identifier_is_configuration_error() {
    let studio = Studio::new();
    fs::write(&studio.config, "[manager]\nidentifier = \"org.elsewhere\"\n").unwrap();
    let config = ResolverConfig {
        manager_config: Some(studio.config.clone()),
        ..ResolverConfig::default()
    };

    let err = ManagedResolver::from_config(&config, &LibraryManagerFactory, DefaultResolver::new())
        .unwrap_err();
    assert!(err.to_string().contains("org.elsewhere"));
}

#[test]
fn host_interface_identifies_resolver() {
    let host = host_interface();
    assert_eq!(host.identifier, HOST_IDENTIFIER);
    assert_eq!(host.display_name, HOST_DISPLAY_NAME);
}
