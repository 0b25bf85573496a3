use tessera::config::{ENV_ALLOW_EMPTY, ENV_CAPACITY};
use tessera::{EmptyNamePolicy, RegistryConfig, TokenRegistry};

#[test]
fn from_env_reads_process_environment() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    std::env::set_var(ENV_ALLOW_EMPTY, "yes");
    std::env::set_var(ENV_CAPACITY, "256");
    let cfg = RegistryConfig::from_env();
    assert_eq!(cfg.empty_names, EmptyNamePolicy::Allow);
    assert_eq!(cfg.capacity, 256);
    assert!(TokenRegistry::with_config(cfg).get_or_create("").is_ok());

    std::env::set_var(ENV_ALLOW_EMPTY, "0");
    std::env::remove_var(ENV_CAPACITY);
    let cfg = RegistryConfig::from_env();
    assert_eq!(cfg, RegistryConfig::default());
    assert!(TokenRegistry::with_config(cfg).get_or_create("").is_err());
}
