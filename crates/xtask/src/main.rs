use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates that make code platform- or I/O-bound
const FORBIDDEN_IN_DOMAIN: &[&str] = &[
    "dioxus",
    "dioxus-desktop",
    "reqwest",
    "gloo-net",
    "web-sys",
    "wasm-bindgen",
    "tokio",
];

const DOMAIN_PACKAGE: &str = "pokeform-domain";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

/// The domain crate stays pure: no UI, HTTP or runtime dependencies in its
/// manifest and no imports of them in its sources.
fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_PACKAGE)
        .with_context(|| format!("package {DOMAIN_PACKAGE} not found"))?;

    let mut violations = manifest_violations(domain);

    let src = domain
        .manifest_path
        .parent()
        .map(|dir| dir.join("src"))
        .context("domain manifest has no parent directory")?;
    violations.extend(source_violations(&src)?);

    if violations.is_empty() {
        println!("arch-check: {DOMAIN_PACKAGE} is clean");
        return Ok(());
    }

    for v in &violations {
        eprintln!("arch-check: {v}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn manifest_violations(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        // dev-dependencies only reach tests
        .filter(|d| d.kind.as_deref() != Some("dev"))
        .filter(|d| FORBIDDEN_IN_DOMAIN.contains(&d.name.as_str()))
        .map(|d| format!("{} depends on {}", package.name, d.name))
        .collect()
}

fn source_violations(dir: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = FORBIDDEN_IN_DOMAIN
        .iter()
        .map(|name| name.replace('-', "_"))
        .collect::<Vec<_>>()
        .join("|");
    let import = regex_lite::Regex::new(&format!(r"\b(?:use\s+|extern\s+crate\s+)(?:::)?({pattern})\b"))
        .context("building import pattern")?;

    let mut violations = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries =
            std::fs::read_dir(&dir).with_context(|| format!("reading {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            for (line_no, line) in text.lines().enumerate() {
                if let Some(caps) = import.captures(line) {
                    violations.push(format!(
                        "{}:{} imports {}",
                        path.display(),
                        line_no + 1,
                        &caps[1]
                    ));
                }
            }
        }
    }
    violations.sort();
    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(name: &str, kind: Option<&str>) -> Dependency {
        Dependency {
            name: name.to_string(),
            kind: kind.map(str::to_string),
        }
    }

    #[test]
    fn runtime_ui_dependency_is_flagged_but_dev_dependency_is_not() {
        let package = Package {
            name: DOMAIN_PACKAGE.to_string(),
            manifest_path: PathBuf::from("crates/domain/Cargo.toml"),
            dependencies: vec![
                dep("serde", None),
                dep("dioxus", None),
                dep("tokio", Some("dev")),
            ],
        };
        assert_eq!(
            manifest_violations(&package),
            vec!["pokeform-domain depends on dioxus".to_string()]
        );
    }

    #[test]
    fn metadata_json_parses() {
        let json = r#"{"packages":[{"name":"pokeform-domain","manifest_path":"/w/crates/domain/Cargo.toml",
            "dependencies":[{"name":"thiserror","kind":null},{"name":"rand","kind":"dev"}]}]}"#;
        let metadata: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.packages[0].dependencies.len(), 2);
        assert!(manifest_violations(&metadata.packages[0]).is_empty());
    }
}
