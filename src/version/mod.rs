//! Version layer for .NET SDK release selection
//!
//! This module turns raw tag strings into comparable versions and provides
//! clients for the two catalogs that publish them: the IBM GitHub build
//! mirror and the NuGet registry.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registries │────▶│    Types    │────▶│  Normalize  │
//! │ GitHub,NuGet│     │ (RawTag...) │     │(NuGet keys) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │    Retry    │                         │     Sdk     │
//! │  (backoff)  │                         │(parse, cmp) │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`sdk`]: `Version` parsing, rendering and ordering
//! - [`normalize`]: NuGet-comparable keys and the registry membership set
//! - [`registry`]: Traits for fetching releases and registry versions
//! - [`registries`]: Concrete GitHub and NuGet implementations
//! - [`retry`]: Retry-with-backoff policy for registry calls
//! - [`error`]: Error types for parsing, resolution and registry operations
//! - [`types`]: Common types like `RawTag` and `PackageVersions`

pub mod error;
pub mod normalize;
pub mod registries;
pub mod registry;
pub mod retry;
pub mod sdk;
pub mod types;
