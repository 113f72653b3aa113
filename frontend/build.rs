// Desktop builds on Linux link against libxdo and webkit2gtk; fail early with install hints.

fn main() {
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_DESKTOP");
    let is_desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let is_linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if !(is_desktop && is_linux) {
        return;
    }

    let missing: Vec<(&str, &str, &str)> = [
        ("libxdo", "libxdo-devel", "libxdo-dev"),
        ("webkit2gtk-4.1", "webkit2gtk4.1-devel", "libwebkit2gtk-4.1-dev"),
    ]
    .into_iter()
    .filter(|(lib, _, _)| !system_lib_present(lib))
    .collect();

    if missing.is_empty() {
        return;
    }
    eprintln!();
    eprintln!("  error: the evently desktop build is missing system libraries:");
    for (lib, fedora, debian) in &missing {
        eprintln!("    {:<16} Fedora/RHEL: sudo dnf install {}   Debian/Ubuntu: sudo apt install {}", lib, fedora, debian);
    }
    eprintln!();
    eprintln!("  Or run in the browser instead: dx serve");
    eprintln!();
    std::process::exit(1);
}

/// pkg-config first; libxdo often ships without a .pc file, so fall back to ldconfig.
fn system_lib_present(lib: &str) -> bool {
    std::process::Command::new("pkg-config")
        .args(["--exists", lib])
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
        || std::process::Command::new("ldconfig")
            .arg("-p")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains(lib))
            .unwrap_or(false)
}
