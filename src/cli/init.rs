use anyhow::Result;
use console::style;
use pharmqa_core::PharmQaConfig;
use std::path::Path;
use tracing::info;

/// Write a default `pharmqa.toml` into `workspace`.
pub fn handle_init_command(workspace: &Path, force: bool) -> Result<()> {
    let path = PharmQaConfig::bootstrap_project(workspace, force)?;
    info!(path = %path.display(), "configuration written");
    println!(
        "{} {}",
        style("Created").green().bold(),
        style(path.display()).bold()
    );
    println!("Set GOOGLE_API_KEY in your environment or a .env file, then run `pharmqa`.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        handle_init_command(dir.path(), false).unwrap();
        assert!(handle_init_command(dir.path(), false).is_err());
        handle_init_command(dir.path(), true).unwrap();
    }
}
