//! Fixtures shared by integration tests

#![allow(dead_code)]

pub mod server;

use dotnet_ibm_installer::version::types::RawTag;

/// Tags without assets, in the given order
pub fn catalog(names: &[&str]) -> Vec<RawTag> {
    names.iter().map(|name| RawTag::new(*name)).collect()
}

/// A realistic slice of the IBM mirror's release list, newest first
pub fn mirror_catalog() -> Vec<RawTag> {
    catalog(&[
        "v10.0.100-preview.1.25080.5",
        "v9.0.102",
        "v9.0.101",
        "v9.0.100",
        "v9.0.100-rc.2.24474.11",
        "v9.0.100-rc.1.24452.12",
        "v9.0.100-preview.7.24407.12",
        "v9.0.100-rtm.24503.15",
        "v8.0.404",
        "v8.0.100",
        "nightly-build",
        "",
    ])
}
