//! Shell profile setup and post-install verification

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use crate::install::error::InstallError;

/// Contents of the profile script exporting `DOTNET_ROOT` and `PATH`
pub fn render_profile_script(install_dir: &Path) -> String {
    format!(
        "export DOTNET_ROOT=\"{}\"\nexport PATH=\"$DOTNET_ROOT:$PATH\"\n",
        install_dir.display()
    )
}

/// Write the profile script, creating its directory, with mode 0755 on unix
pub fn write_profile_script(script_path: &Path, install_dir: &Path) -> Result<(), InstallError> {
    if let Some(parent) = script_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(script_path, render_profile_script(install_dir))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(script_path, std::fs::Permissions::from_mode(0o755))?;
    }

    info!("Wrote profile script {:?}", script_path);
    Ok(())
}

/// Search path with `install_dir` in front of `path_var`
fn search_path(install_dir: &Path, path_var: Option<OsString>) -> OsString {
    let mut dirs = vec![install_dir.to_path_buf()];
    if let Some(path_var) = path_var {
        dirs.extend(std::env::split_paths(&path_var));
    }
    // Only fails if a directory contains the separator; fall back to the install dir alone
    std::env::join_paths(&dirs).unwrap_or_else(|_| install_dir.as_os_str().to_os_string())
}

/// Locate the `dotnet` executable, preferring `install_dir`
pub fn locate_dotnet(install_dir: &Path, path_var: Option<OsString>) -> Result<PathBuf, InstallError> {
    let paths = search_path(install_dir, path_var);
    which::which_in("dotnet", Some(paths), install_dir)
        .map_err(|_| InstallError::DotnetNotFound(install_dir.to_path_buf()))
}

/// Check that `dotnet` is runnable and print `dotnet --info`
pub fn verify_installation(install_dir: &Path) -> Result<PathBuf, InstallError> {
    let path_var = std::env::var_os("PATH");
    let dotnet = locate_dotnet(install_dir, path_var.clone())?;

    println!("\n--- dotnet --info ---");
    let status = Command::new(&dotnet)
        .arg("--info")
        .env("DOTNET_ROOT", install_dir)
        .env("PATH", search_path(install_dir, path_var))
        .status()?;
    println!("---------------------");

    if !status.success() {
        warn!("dotnet --info exited with {}", status);
    }
    Ok(dotnet)
}
