//! SDK asset selection

use crate::install::arch::Arch;
use crate::version::types::Asset;

/// First `dotnet-sdk-*{arch}*.tar.gz` asset of a release
pub fn select_sdk_asset(assets: &[Asset], arch: Arch) -> Option<&Asset> {
    assets.iter().find(|asset| {
        asset.name.starts_with("dotnet-sdk-")
            && asset.name.contains(arch.as_str())
            && asset.name.ends_with(".tar.gz")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str) -> Asset {
        Asset {
            name: name.to_string(),
            download_url: format!("https://example.com/{}", name),
        }
    }

    #[test]
    fn select_sdk_asset_matches_arch_and_extension() {
        let assets = vec![
            asset("dotnet-runtime-9.0.0-linux-s390x.tar.gz"),
            asset("dotnet-sdk-9.0.100-linux-ppc64le.tar.gz"),
            asset("dotnet-sdk-9.0.100-linux-s390x.tar.gz.sha512"),
            asset("dotnet-sdk-9.0.100-linux-s390x.tar.gz"),
        ];

        assert_eq!(
            select_sdk_asset(&assets, Arch::S390x).map(|a| a.name.as_str()),
            Some("dotnet-sdk-9.0.100-linux-s390x.tar.gz")
        );
        assert_eq!(
            select_sdk_asset(&assets, Arch::Ppc64le).map(|a| a.name.as_str()),
            Some("dotnet-sdk-9.0.100-linux-ppc64le.tar.gz")
        );
    }

    #[test]
    fn select_sdk_asset_returns_none_without_sdk() {
        let assets = vec![asset("dotnet-runtime-9.0.0-linux-s390x.tar.gz")];

        assert!(select_sdk_asset(&assets, Arch::S390x).is_none());
    }
}
