//! Route table
//!
//! A route table is a sequence of route entries with associated metadata.

use super::entry::RouteEntry;
use serde::{Deserialize, Serialize};

/// A compiled route table ready for installation into a host router
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTable {
    /// The synthesized routes, in service/action declaration order
    pub entries: Vec<RouteEntry>,

    /// Table metadata
    pub metadata: RouteTableMetadata,
}

/// Metadata associated with a route table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTableMetadata {
    /// Number of services the table was compiled from
    pub service_count: usize,

    /// Number of synthesized routes
    pub entry_count: usize,

    /// Version of the compiler that generated this table
    pub compiler_version: String,
}

impl RouteTable {
    /// Create a new route table
    pub fn new(entries: Vec<RouteEntry>, metadata: RouteTableMetadata) -> Self {
        RouteTable { entries, metadata }
    }

    /// Create an empty route table (synthesis disabled)
    pub fn empty() -> Self {
        RouteTable {
            entries: Vec::new(),
            metadata: RouteTableMetadata::new(0, 0),
        }
    }

    /// Number of routes in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the routes
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Routes synthesized from a given service, in declaration order
    pub fn entries_for_service<'a>(
        &'a self,
        service: &'a str,
    ) -> impl Iterator<Item = &'a RouteEntry> {
        self.entries.iter().filter(move |e| e.service == service)
    }
}

impl RouteTableMetadata {
    /// Create metadata for a table compiled from `service_count` services
    pub fn new(service_count: usize, entry_count: usize) -> Self {
        RouteTableMetadata {
            service_count,
            entry_count,
            compiler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
