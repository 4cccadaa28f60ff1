//! Workspace-wide quality checks.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use xshell::{Shell, cmd};

/// Library crates held to the Layer 0 standard.
const KERNEL_CRATES: &[(&str, &str)] = &[
    ("rig-roll", "rig/rig-roll"),
    ("mesh-wrinkle", "mesh/mesh-wrinkle"),
    ("deform-kernel", "crates/deform-kernel"),
];

/// Crates that must never appear in a kernel dependency tree.
const FORBIDDEN_DEPS: &[&str] = &["bevy", "wgpu", "winit", "pyo3", "tokio"];

type Step = (&'static str, fn(&Shell) -> Result<()>);

const STEPS: &[Step] = &[
    ("Formatting", run_fmt_check),
    ("Clippy", run_clippy),
    ("Tests", run_tests),
    ("Documentation", run_doc_check),
    ("Safety", run_safety_scan),
    ("Layer 0", run_layer0_check),
];

/// Run all checks (non-CI mode - failures are reported but don't fail)
pub fn run(ci_mode: bool) -> Result<()> {
    let sh = workspace_shell()?;

    println!();
    println!("{}", "Deform Kernel Quality Check".bold());
    println!("{}", "===========================".bold());
    println!();

    let mut all_passed = true;
    for (name, step) in STEPS {
        println!("{}", format!("Checking {}...", name.to_lowercase()).dimmed());
        let result = step(&sh);
        report_result(name, &result);
        all_passed &= result.is_ok();
    }

    println!();

    if all_passed {
        println!("{}", "✓ All checks passed!".green().bold());
        Ok(())
    } else if ci_mode {
        println!("{}", "✗ Some checks failed.".red().bold());
        std::process::exit(1);
    } else {
        println!("{}", "⚠ Some checks failed. Fix before committing.".yellow());
        Ok(())
    }
}

/// Run full CI suite
pub fn run_ci() -> Result<()> {
    let sh = workspace_shell()?;

    println!();
    println!("{}", "Deform Kernel CI Suite".bold());
    println!("{}", "======================".bold());
    println!();

    let mut failures = Vec::new();
    let total = STEPS.len();

    for (i, (name, step)) in STEPS.iter().enumerate() {
        println!("{}", format!("Step {}/{total}: {name}...", i + 1).cyan());
        if let Err(e) = step(&sh) {
            failures.push(format!("{name}: {e}"));
            println!("  {} {name} failed", "✗".red());
        } else {
            println!("  {} {name} OK", "✓".green());
        }
    }

    println!();

    if failures.is_empty() {
        println!("{}", "═══════════════════════════════════════".green());
        println!("{}", "  ✓ CI PASSED - Ready to push".green().bold());
        println!("{}", "═══════════════════════════════════════".green());
        Ok(())
    } else {
        println!("{}", "═══════════════════════════════════════".red());
        println!("{}", "  ✗ CI FAILED".red().bold());
        println!("{}", "═══════════════════════════════════════".red());
        println!();
        println!("Failures:");
        for f in &failures {
            println!("  - {}", f.red());
        }
        std::process::exit(1);
    }
}

/// Run only the Layer 0 dependency check
pub fn run_layer0() -> Result<()> {
    let sh = workspace_shell()?;
    let result = run_layer0_check(&sh);
    report_result("Layer 0", &result);
    result
}

fn workspace_shell() -> Result<Shell> {
    let sh = Shell::new()?;
    let root = workspace_root();
    sh.change_dir(&root);
    Ok(sh)
}

/// The directory holding the workspace Cargo.toml (xtask's parent).
fn workspace_root() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .map_or_else(|| manifest.clone(), Path::to_path_buf)
}

fn report_result(name: &str, result: &Result<()>) {
    match result {
        Ok(()) => println!("  {} {}", "✓".green(), name),
        Err(e) => println!("  {} {} - {}", "✗".red(), name, e),
    }
}

fn run_fmt_check(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo fmt --all -- --check")
        .run()
        .context("Formatting check failed")?;
    Ok(())
}

fn run_clippy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo clippy --workspace --all-targets --all-features -- -D warnings")
        .run()
        .context("Clippy check failed")?;
    Ok(())
}

fn run_tests(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo test --workspace --all-features")
        .run()
        .context("Tests failed")?;
    Ok(())
}

fn run_doc_check(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo doc --workspace --no-deps --all-features")
        .env("RUSTDOCFLAGS", "-D warnings")
        .run()
        .context("Documentation build failed")?;
    Ok(())
}

/// Count unwrap/expect calls in library code.
///
/// Everything from the first `#[cfg(test)]` of a file onwards is test code,
/// and comment lines (including doc examples) are skipped.
fn run_safety_scan(sh: &Shell) -> Result<()> {
    let mut violations = Vec::new();

    for (_, dir) in KERNEL_CRATES {
        let src = sh.current_dir().join(dir).join("src");
        for file in rust_files(&src)? {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            for (line_no, line) in text.lines().enumerate() {
                let trimmed = line.trim();
                if trimmed.starts_with("#[cfg(test)]") {
                    break;
                }
                if trimmed.starts_with("//") {
                    continue;
                }
                if trimmed.contains(".unwrap()") || trimmed.contains(".expect(") {
                    violations.push(format!("{}:{}", file.display(), line_no + 1));
                }
            }
        }
    }

    if !violations.is_empty() {
        for v in &violations {
            println!("    {}", v.dimmed());
        }
        bail!(
            "Found {} unwrap/expect calls in library code",
            violations.len()
        );
    }

    Ok(())
}

fn rust_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Matches a forbidden crate and its `-`/`_` suffixed family (`bevy_ecs`).
fn is_forbidden(dep: &str) -> bool {
    FORBIDDEN_DEPS.iter().any(|forbidden| {
        dep.strip_prefix(forbidden)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(['-', '_']))
    })
}

/// Every kernel crate's normal dependency tree must be free of host crates.
fn run_layer0_check(sh: &Shell) -> Result<()> {
    let mut offenders = Vec::new();

    for (name, _) in KERNEL_CRATES {
        let tree = cmd!(sh, "cargo tree -p {name} -e normal --prefix none")
            .read()
            .with_context(|| format!("cargo tree failed for {name}"))?;

        for line in tree.lines() {
            let dep = line.split_whitespace().next().unwrap_or_default();
            if is_forbidden(dep) {
                offenders.push(format!("{name} -> {dep}"));
            }
        }
    }

    offenders.sort();
    offenders.dedup();

    if !offenders.is_empty() {
        bail!("Host dependencies found: {}", offenders.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_family_matches() {
        assert!(is_forbidden("bevy"));
        assert!(is_forbidden("bevy_ecs"));
        assert!(is_forbidden("tokio-util"));
        assert!(!is_forbidden("bevyx"));
        assert!(!is_forbidden("nalgebra"));
    }
}
