// File: crates/clock-core/build.rs
// Summary: Build script to link Windows system libraries required by Skia's font manager.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's default font manager reads the registry (RegOpenKeyExW, RegQueryInfoKeyW).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
