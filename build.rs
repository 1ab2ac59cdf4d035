use std::env;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=config.toml");

    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        return Ok(());
    }

    // Copy config.toml next to the built executable
    let out_dir = env::var("OUT_DIR")?;
    let dest_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .ok_or("unexpected OUT_DIR layout")?;

    fs::copy(config_path, dest_dir.join("config.toml"))?;
    Ok(())
}
