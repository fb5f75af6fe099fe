
    use super::*;

    fn item(name: &str, program: &str) -> LaunchItem {
        LaunchItem {
            name: name.to_string(),
            program: program.to_string(),
            ..Default::default()
        }
    }

    fn config(items: Vec<LaunchItem>) -> Config {
        Config {
            home_dir: None,
            items,
        }
    }

    #[test]
    fn test_validate_default_config() {
        let result = ConfigValidator::validate(&Config::default());
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_valid_item() {
        let result = ConfigValidator::validate(&config(vec![item("com.example.app", "/bin/app")]));
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_empty_name() {
        let result = ConfigValidator::validate(&config(vec![item("", "/bin/app")]));
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "items[0].name"));
    }

    #[test]
    fn test_validate_name_with_separator() {
        let result = ConfigValidator::validate(&config(vec![item("../evil", "/bin/app")]));
        assert!(!result.is_valid());
        assert!(result.errors[0].message.contains("path separators"));
    }

    #[test]
    fn test_validate_duplicate_names() {
        let result = ConfigValidator::validate(&config(vec![
            item("app", "/bin/app"),
            item("other", "/bin/other"),
            item("app", "/bin/app2"),
        ]));
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "items[2].name"));
    }

    #[test]
    fn test_validate_empty_program() {
        let result = ConfigValidator::validate(&config(vec![item("app", "  ")]));
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.path == "items[0].program"));
    }

    #[test]
    fn test_validate_relative_program_warning() {
        let result = ConfigValidator::validate(&config(vec![item("app", "bin/app")]));
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.path == "items[0].program"));
    }

    #[test]
    fn test_validate_zero_interval_warning() {
        let mut it = item("app", "/bin/app");
        it.start_interval = Some(0);
        let result = ConfigValidator::validate(&config(vec![it]));
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.path == "items[0].start_interval"));
    }

    #[test]
    fn test_validate_empty_home_dir() {
        let cfg = Config {
            home_dir: Some(String::new()),
            items: Vec::new(),
        };
        let result = ConfigValidator::validate(&cfg);
        assert!(result.errors.iter().any(|e| e.path == "home_dir"));
    }

    #[test]
    fn test_into_result() {
        let ok = ConfigValidator::validate(&config(vec![item("app", "bin/app")]));
        assert_eq!(ok.into_result().unwrap().len(), 1);

        let bad = ConfigValidator::validate(&config(vec![item("", "/bin/app")]));
        let err = bad.into_result().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "items[0].name"));
    }
