#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use marquee::adapter::MapEnvironment;
use marquee::domain::SourceClass;
use marquee::port::{Banner, Environment};
use tempfile::TempDir;

/// Directory holding the given banner files, relative paths created as needed.
pub fn banner_dir(files: &[(&str, &[u8])]) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    for (name, content) in files {
        write_file(dir.path(), name, content);
    }
    dir
}

pub fn write_file(base: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = base.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, content).expect("write file");
    path
}

/// Environment with ANSI output disabled.
pub fn plain_env() -> MapEnvironment {
    MapEnvironment::new().with("spring.output.ansi.enabled", "never")
}

pub fn render(banner: &dyn Banner, env: &dyn Environment, source: Option<&SourceClass>) -> String {
    let mut out = Vec::new();
    banner.render(env, source, &mut out);
    String::from_utf8(out).expect("utf-8 output")
}
