//! Config persistence tests - save/load round trip through a temp config dir

use madam::MirrorConfig;

// These tests redirect the config directory via environment variables, so
// they live alone in this binary and must not run in parallel with each
// other (each one owns the whole process environment while it runs).

fn with_temp_config_dir(test: impl FnOnce()) {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", dir.path());
    std::env::set_var("APPDATA", dir.path());
    test();
}

#[test]
fn test_save_then_load_round_trips() {
    with_temp_config_dir(|| {
        // nothing on disk yet: load falls back to defaults
        let initial = MirrorConfig::load();
        assert_eq!(initial.highlight_class, "highlight");

        let config = MirrorConfig {
            highlight_class: "marked".to_string(),
        };
        config.save().unwrap();

        let loaded = MirrorConfig::load();
        assert_eq!(loaded.highlight_class, "marked");

        // the file landed inside the redirected config dir
        let path = madam::config_paths::config_file().unwrap();
        assert!(path.exists());
    });
}
