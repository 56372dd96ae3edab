//! EPSG code registry
//!
//! Definitions for the coordinate reference systems this crate knows about
//! are kept in an embedded TOML file and parsed once at startup.

use std::collections::HashMap;
use lazy_static::lazy_static;
use crate::coordinate::errors::{ProjectionError, ProjResult};

// Path to the EPSG definitions file, relative to the crate root
const EPSG_DEFINITIONS_FILE: &str = "epsg_codes.toml";

lazy_static! {
    // Parse the TOML file at startup
    static ref EPSG_DEFINITIONS: EpsgDefinitions = {
        let content = include_str!("../../epsg_codes.toml");
        EpsgDefinitions::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse EPSG definitions from {}: {}",
                      EPSG_DEFINITIONS_FILE, e);
            EpsgDefinitions::default()
        })
    };
}

/// Container for EPSG code definitions
#[derive(Debug, Default)]
pub struct EpsgDefinitions {
    // Maps EPSG codes to CRS names
    pub names: HashMap<u32, String>,
    // Maps EPSG codes to "geographic" or "projected"
    pub kinds: HashMap<u32, String>,
    // Maps EPSG codes to unit names
    pub units: HashMap<u32, String>,
    // Maps deprecated codes to their canonical replacement
    pub aliases: HashMap<u32, u32>,
}

impl EpsgDefinitions {
    /// Parse EPSG definitions from a TOML string
    pub fn from_str(content: &str) -> ProjResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(ProjectionError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut defs = EpsgDefinitions::default();

        Self::parse_string_table(&toml_value, "names", &mut defs.names);
        Self::parse_string_table(&toml_value, "kinds", &mut defs.kinds);
        Self::parse_string_table(&toml_value, "units", &mut defs.units);

        // Aliases map codes to codes rather than to strings
        if let Some(table) = toml_value.get("aliases").and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let (Ok(code), Some(canonical)) = (k.parse::<u32>(), v.as_integer()) {
                    defs.aliases.insert(code, canonical as u32);
                }
            }
        }

        Ok(defs)
    }

    /// Helper to parse code-to-string tables from TOML
    fn parse_string_table(toml_value: &toml::Value, table_name: &str, target: &mut HashMap<u32, String>) {
        if let Some(table) = toml_value.get(table_name).and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let (Ok(code), Some(name)) = (k.parse::<u32>(), v.as_str()) {
                    target.insert(code, name.to_string());
                }
            }
        }
    }

    /// Resolve a possibly-deprecated code to its canonical form
    pub fn canonical_code(&self, epsg: u32) -> u32 {
        self.aliases.get(&epsg).copied().unwrap_or(epsg)
    }

    /// Check whether a code (after alias resolution) is registered
    pub fn is_registered(&self, epsg: u32) -> bool {
        self.names.contains_key(&self.canonical_code(epsg))
    }

    /// Get a CRS name by code
    pub fn get_name(&self, epsg: u32) -> String {
        self.names.get(&self.canonical_code(epsg))
            .cloned()
            .unwrap_or_else(|| format!("EPSG:{}", epsg))
    }

    /// Get the kind ("geographic" or "projected") of a CRS
    pub fn get_kind(&self, epsg: u32) -> Option<String> {
        self.kinds.get(&self.canonical_code(epsg)).cloned()
    }

    /// Get the unit name of a CRS
    pub fn get_unit(&self, epsg: u32) -> Option<String> {
        self.units.get(&self.canonical_code(epsg)).cloned()
    }
}

/// Resolve a possibly-deprecated EPSG code to its canonical form
pub fn canonical_code(epsg: u32) -> u32 {
    EPSG_DEFINITIONS.canonical_code(epsg)
}

/// Check whether an EPSG code is registered
pub fn is_registered(epsg: u32) -> bool {
    EPSG_DEFINITIONS.is_registered(epsg)
}

/// Get the name of a registered CRS, or "EPSG:<code>" if unknown
pub fn get_crs_name(epsg: u32) -> String {
    EPSG_DEFINITIONS.get_name(epsg)
}

/// Get the kind of a registered CRS
pub fn get_crs_kind(epsg: u32) -> Option<String> {
    EPSG_DEFINITIONS.get_kind(epsg)
}

/// Get the unit of a registered CRS
pub fn get_crs_unit(epsg: u32) -> Option<String> {
    EPSG_DEFINITIONS.get_unit(epsg)
}
