use std::fs;

use drivemap_core::InteropProbe;
use drivemap_core::TextRewriter;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn probe_in(dir: &TempDir) -> InteropProbe {
    InteropProbe {
        kernel_version: dir.path().join("version"),
        kernel_release: dir.path().join("osrelease"),
        mount_root: dir.path().join("mnt"),
        markers: vec!["microsoft".to_string()],
    }
}

#[test]
fn probe_drives_the_rewriter() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let probe = probe_in(&dir);

    let untouched = TextRewriter::new(&probe).rewrite(r"open C:\x");
    assert_eq!(untouched.text, r"open C:\x");
    assert!(!untouched.interop);

    fs::write(dir.path().join("osrelease"), "5.15.0-microsoft-standard")?;
    let rewritten = TextRewriter::new(&probe).rewrite(r"open C:\x");
    assert_eq!(rewritten.text, "open /mnt/c/x");
    assert!(rewritten.interop);
    Ok(())
}

#[test]
fn missing_probe_files_are_not_an_error() {
    let dir = TempDir::new().expect("tempdir");
    assert!(!probe_in(&dir).detect());
}
