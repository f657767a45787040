mod support;

use std::sync::Arc;

use marquee::adapter::{FileSystemResourceLoader, StaticMetadata};
use marquee::banner::{BannerPrinter, BannerSelector};
use marquee::config::Config;
use marquee::domain::BannerMode;
use marquee::error::{ConfigError, Error};
use marquee::port::Environment;

use support::{banner_dir, write_file};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn load_reads_flattened_file() {
    let dir = banner_dir(&[]);
    let path = write_file(
        dir.path(),
        "marquee.toml",
        br#"
[spring.banner]
location = "art/banner.txt"
charset = "UTF-8"

[spring.main]
banner-mode = "console"

[logging]
level = "warn"
"#,
    );

    let config = Config::load(&path).expect("valid config");

    assert_eq!(
        config.property("spring.banner.location").as_deref(),
        Some("art/banner.txt")
    );
    assert_eq!(config.banner_mode(), BannerMode::Console);
    assert_eq!(config.logging().level, "warn");
    assert_eq!(config.logging().format, "pretty");
}

#[test]
fn load_missing_file_is_read_error() {
    let dir = banner_dir(&[]);

    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn invalid_banner_mode_is_rejected() {
    let result = Config::parse_toml_with("[spring.main]\nbanner-mode = \"loud\"\n", no_env);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "spring.main.banner-mode",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid banner mode error, got {err}"),
        Ok(_) => panic!("Expected invalid banner mode error, got Ok"),
    }
}

#[test]
fn config_drives_banner_selection() {
    let dir = banner_dir(&[
        ("banner.txt", b"default"),
        ("art/custom.txt", b"Hello ${greeting.target}"),
    ]);
    let config = Config::parse_toml_with(
        r#"
[spring.banner]
location = "art/custom.txt"

[spring.output.ansi]
enabled = "never"

[greeting]
target = "world"
"#,
        no_env,
    )
    .expect("valid config");
    let printer = BannerPrinter::new(BannerSelector::new(
        Arc::new(FileSystemResourceLoader::new(dir.path())),
        Arc::new(StaticMetadata::new()),
    ));
    let mut out = Vec::new();

    printer.print_to(&config, None, &mut out);

    assert_eq!(String::from_utf8(out).unwrap(), "Hello world\n");
}

#[test]
fn environment_variable_overrides_location() {
    let config = Config::parse_toml_with("spring.banner.location = \"file.txt\"", |name| {
        (name == "SPRING_BANNER_LOCATION").then(|| "env.txt".to_string())
    })
    .expect("valid config");

    assert_eq!(config.property("spring.banner.location").as_deref(), Some("env.txt"));
}
