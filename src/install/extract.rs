//! Tarball extraction

use std::fs::File;
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::info;

use crate::install::error::InstallError;

/// Extract a `.tar.gz` archive into `dest`, creating it if needed.
///
/// Blocking; run it on a blocking thread from async code.
pub fn extract_tarball(archive_path: &Path, dest: &Path) -> Result<(), InstallError> {
    let invalid = |source: std::io::Error| InstallError::InvalidArchive {
        path: archive_path.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(dest)?;
    let file = File::open(archive_path)?;
    let mut archive = Archive::new(GzDecoder::new(file));
    archive.set_preserve_permissions(true);
    archive.unpack(dest).map_err(invalid)?;

    info!("Extracted {:?} to {:?}", archive_path, dest);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use tempfile::TempDir;

    fn write_tarball(path: &Path, files: &[(&str, &[u8])]) {
        let encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, contents) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(contents.len() as u64);
            header.set_mode(0o755);
            header.set_cksum();
            builder.append_data(&mut header, name, *contents).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap();
    }

    #[test]
    fn extract_tarball_unpacks_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("sdk.tar.gz");
        write_tarball(
            &archive,
            &[
                ("dotnet", b"#!/bin/sh\n".as_slice()),
                ("sdk/9.0.100/dotnet.dll", b"dll".as_slice()),
            ],
        );
        let dest = temp_dir.path().join("install");

        extract_tarball(&archive, &dest).unwrap();

        assert_eq!(std::fs::read(dest.join("dotnet")).unwrap(), b"#!/bin/sh\n");
        assert_eq!(
            std::fs::read(dest.join("sdk/9.0.100/dotnet.dll")).unwrap(),
            b"dll"
        );
    }

    #[test]
    fn extract_tarball_rejects_non_archives() {
        let temp_dir = TempDir::new().unwrap();
        let archive = temp_dir.path().join("sdk.tar.gz");
        std::fs::write(&archive, "<html>not a tarball</html>").unwrap();

        let result = extract_tarball(&archive, &temp_dir.path().join("install"));

        assert!(matches!(result, Err(InstallError::InvalidArchive { .. })));
    }
}
