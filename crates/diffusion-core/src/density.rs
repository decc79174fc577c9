//! Occupancy densities for a 1-D chain of sites.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::errors::{DiffusionError, ErrorInfo};

/// Per-site particle counts along a 1-D chain.
///
/// Elements are unsigned, so negative or fractional occupancies and nested
/// data are unrepresentable; only the domain constraints (enough sites,
/// at least one particle) remain to check, and those are enforced by
/// [`Density::for_sampling`]. [`Density::new`] accepts any shape, including
/// the empty chain, which is a legal input for energy evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density {
    sites: Vec<u32>,
}

impl Density {
    /// Wraps raw occupancy counts without sampler-grade validation.
    pub fn new(sites: Vec<u32>) -> Self {
        Self { sites }
    }

    /// Validates occupancy counts for use as a sampler's configuration.
    ///
    /// A chain with fewer than two sites has nowhere to hop, and a chain
    /// with zero particles has nothing to move; both are rejected here
    /// rather than discovered mid-run.
    pub fn for_sampling(sites: Vec<u32>) -> Result<Self, DiffusionError> {
        if sites.len() < 2 {
            return Err(DiffusionError::Density(
                ErrorInfo::new("density-too-short", "density needs at least two sites")
                    .with_context("len", sites.len().to_string()),
            ));
        }
        let density = Self { sites };
        if density.total() == 0 {
            return Err(DiffusionError::Density(
                ErrorInfo::new("density-empty", "density holds no particles")
                    .with_context("len", density.len().to_string())
                    .with_hint("supply at least one site with non-zero occupancy"),
            ));
        }
        Ok(density)
    }

    /// Returns the occupancy counts as a slice.
    pub fn sites(&self) -> &[u32] {
        &self.sites
    }

    /// Number of sites in the chain.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether the chain has no sites at all.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Total particle count across all sites.
    pub fn total(&self) -> u64 {
        self.sites.iter().map(|&n| u64::from(n)).sum()
    }

    /// Consumes the density and returns the raw counts.
    pub fn into_inner(self) -> Vec<u32> {
        self.sites
    }
}

impl Index<usize> for Density {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.sites[index]
    }
}

impl From<Vec<u32>> for Density {
    fn from(sites: Vec<u32>) -> Self {
        Self::new(sites)
    }
}

impl AsRef<[u32]> for Density {
    fn as_ref(&self) -> &[u32] {
        &self.sites
    }
}
