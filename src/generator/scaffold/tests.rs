#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::generator::scaffold::{
        create_component_library, save_generated_files, update_core_index,
    };
    use tempfile::TempDir;

    fn workspace_config() -> (Config, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            workspace_path: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        (config, temp_dir)
    }

    #[tokio::test]
    async fn test_create_component_library_without_nx() {
        let (config, _temp_dir) = workspace_config();

        let lib_path = create_component_library(&config, "IconButton", false)
            .await
            .unwrap();

        assert_eq!(lib_path, config.libs_path().join("icon-button"));
        assert!(lib_path.join("src").join("lib").is_dir());

        let vite_config = std::fs::read_to_string(lib_path.join("vite.config.ts")).unwrap();
        assert!(vite_config.contains("name: 'GDSIconButton'"));
        assert!(vite_config.contains("customElement: true"));
        assert!(vite_config.contains("formats: ['es', 'umd']"));
    }

    #[tokio::test]
    async fn test_create_component_library_reuses_existing() {
        let (config, _temp_dir) = workspace_config();
        let existing = config.libs_path().join("button").join("src").join("lib");
        std::fs::create_dir_all(&existing).unwrap();

        let lib_path = create_component_library(&config, "Button", false)
            .await
            .unwrap();

        assert_eq!(lib_path, config.libs_path().join("button"));
        // 复用已有目录时不会重写vite配置
        assert!(!lib_path.join("vite.config.ts").exists());
    }

    #[test]
    fn test_save_generated_files() {
        let (config, _temp_dir) = workspace_config();
        let lib_path = config.libs_path().join("button");

        save_generated_files(
            &lib_path,
            "Button",
            "<button>ok</button>",
            "export default {};",
            Some("<!DOCTYPE html><html><head></head><body></body></html>"),
        )
        .unwrap();

        let src_dir = lib_path.join("src").join("lib");
        assert_eq!(
            std::fs::read_to_string(src_dir.join("Button.svelte")).unwrap(),
            "<button>ok</button>"
        );
        assert_eq!(
            std::fs::read_to_string(src_dir.join("Button.stories.ts")).unwrap(),
            "export default {};"
        );
        assert!(src_dir.join("Button.showcase.html").exists());
        assert_eq!(
            std::fs::read_to_string(lib_path.join("src").join("index.ts")).unwrap(),
            "export * from './lib/Button';\n"
        );
    }

    #[test]
    fn test_save_generated_files_without_showcase() {
        let (config, _temp_dir) = workspace_config();
        let lib_path = config.libs_path().join("badge");

        save_generated_files(&lib_path, "Badge", "<span/>", "export default {};", None).unwrap();

        let src_dir = lib_path.join("src").join("lib");
        assert!(src_dir.join("Badge.svelte").exists());
        assert!(!src_dir.join("Badge.showcase.html").exists());
    }

    #[test]
    fn test_update_core_index_creates_and_appends() {
        let (config, _temp_dir) = workspace_config();

        update_core_index(&config, "button").unwrap();

        let content = std::fs::read_to_string(config.core_index_file()).unwrap();
        assert!(content.contains("export * from '@gds/button';"));

        update_core_index(&config, "icon-button").unwrap();

        let content = std::fs::read_to_string(config.core_index_file()).unwrap();
        assert!(content.contains("export * from '@gds/button';"));
        assert!(content.contains("export * from '@gds/icon-button';"));
    }

    #[test]
    fn test_update_core_index_is_idempotent() {
        let (config, _temp_dir) = workspace_config();

        update_core_index(&config, "button").unwrap();
        let first = std::fs::read_to_string(config.core_index_file()).unwrap();

        update_core_index(&config, "button").unwrap();
        let second = std::fs::read_to_string(config.core_index_file()).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.matches("@gds/button").count(), 1);
    }

    #[test]
    fn test_update_core_index_preserves_existing_exports() {
        let (config, _temp_dir) = workspace_config();
        let index_path = config.core_index_file();
        std::fs::create_dir_all(index_path.parent().unwrap()).unwrap();
        std::fs::write(&index_path, "export * from '@gds/badge';\n").unwrap();

        update_core_index(&config, "button").unwrap();

        let content = std::fs::read_to_string(&index_path).unwrap();
        assert!(content.starts_with("export * from '@gds/badge';\n"));
        assert!(content.contains("export * from '@gds/button';"));
    }
}
