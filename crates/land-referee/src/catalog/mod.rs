//! Read-only property catalog backing every evaluation request.
//!
//! The catalog is loaded once at startup, either from the built-in sample
//! portfolio or from an operator-supplied CSV export, and is only read
//! afterwards.

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Qualitative intensity of an area signal around a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AreaLevel {
    Low,
    Medium,
    High,
}

impl AreaLevel {
    /// Ordinal used by the scoring formulas.
    pub const fn ordinal(self) -> f64 {
        match self {
            AreaLevel::Low => 1.0,
            AreaLevel::Medium => 2.0,
            AreaLevel::High => 3.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AreaLevel::Low => "Low",
            AreaLevel::Medium => "Medium",
            AreaLevel::High => "High",
        }
    }
}

/// One surveyed plot together with the area signals the scorer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub property_id: String,
    pub location: String,
    pub plot_size_sqft: f64,
    pub footfall: AreaLevel,
    pub residential_density: AreaLevel,
    pub commercial_activity: AreaLevel,
}

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRecord { row: usize, reason: String },
    Empty,
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog file: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::InvalidRecord { row, reason } => {
                write!(f, "catalog row {} rejected: {}", row, reason)
            }
            CatalogImportError::Empty => write!(f, "catalog contains no property records"),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::InvalidRecord { .. } | CatalogImportError::Empty => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Immutable collection of candidate plots.
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    records: Vec<PropertyRecord>,
}

impl PropertyCatalog {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self { records }
    }

    /// Surveyed Bangalore plots shipped with the service for demos and tests.
    pub fn sample_portfolio() -> Self {
        use AreaLevel::{High, Low, Medium};

        let records = vec![
            sample("BLR-IND-OSM-001", "Indiranagar, Bangalore", 2400.0, High, High, High),
            sample("BLR-MG-OSM-002", "MG Road, Bangalore", 1800.0, Medium, Medium, High),
            sample("BLR-KR-OSM-003", "Koramangala, Bangalore", 3000.0, High, High, Medium),
            sample("BLR-RT-OSM-004", "Whitefield, Bangalore", 4000.0, Low, Medium, Medium),
            sample("BLR-JP-OSM-005", "JP Nagar, Bangalore", 2200.0, Medium, High, Low),
            sample("BLR-EJ-OSM-006", "Electronic City, Bangalore", 5000.0, Low, Low, High),
            sample("BLR-RJ-OSM-007", "Rajajinagar, Bangalore", 2000.0, Medium, High, Medium),
            sample("BLR-BN-OSM-008", "Banashankari, Bangalore", 2500.0, Low, High, Low),
            sample("BLR-HB-OSM-009", "HSR Layout, Bangalore", 2700.0, Medium, High, Medium),
            sample("BLR-RTN-OSM-010", "RT Nagar, Bangalore", 1900.0, Medium, Medium, Medium),
        ];
        Self { records }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse a headered CSV export into a catalog.
    ///
    /// Expected columns: `property_id`, `location`, `plot_size_sqft`,
    /// `footfall`, `residential_density`, `commercial_activity`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<PropertyRecord>().enumerate() {
            let record = row?;
            if !(record.plot_size_sqft > 0.0) {
                return Err(CatalogImportError::InvalidRecord {
                    row: index + 1,
                    reason: format!(
                        "plot_size_sqft must be positive, got {}",
                        record.plot_size_sqft
                    ),
                });
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(CatalogImportError::Empty);
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted, de-duplicated location names for area pickers.
    pub fn locations(&self) -> Vec<String> {
        let mut locations: Vec<String> = self
            .records
            .iter()
            .map(|record| record.location.clone())
            .collect();
        locations.sort();
        locations.dedup();
        locations
    }

    /// Records whose location exactly matches `filter`, or every record when
    /// no filter applies.
    pub fn matching(&self, filter: Option<&str>) -> Vec<&PropertyRecord> {
        match filter {
            Some(location) => self
                .records
                .iter()
                .filter(|record| record.location == location)
                .collect(),
            None => self.records.iter().collect(),
        }
    }
}

fn sample(
    property_id: &str,
    location: &str,
    plot_size_sqft: f64,
    footfall: AreaLevel,
    residential_density: AreaLevel,
    commercial_activity: AreaLevel,
) -> PropertyRecord {
    PropertyRecord {
        property_id: property_id.to_string(),
        location: location.to_string(),
        plot_size_sqft,
        footfall,
        residential_density,
        commercial_activity,
    }
}
