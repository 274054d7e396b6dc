use serde::Serialize;
use std::path::PathBuf;

/// One cleaned real-estate listing. `price_per_sqm` stays `None` until the
/// aggregation stage fills the derived column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub price: f64,
    pub square_meters: f64,
    pub location: Option<String>,
    pub price_per_sqm: Option<f64>,
}

impl Listing {
    pub fn new(price: f64, square_meters: f64, location: Option<String>) -> Self {
        Self {
            price,
            square_meters,
            location,
            price_per_sqm: None,
        }
    }
}

/// Ordered collection of listings for one run. Rows keep file order within a
/// file and discovery order across files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    listings: Vec<Listing>,
}

impl Dataset {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn push(&mut self, listing: Listing) {
        self.listings.push(listing);
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn listings_mut(&mut self) -> &mut [Listing] {
        &mut self.listings
    }
}

/// Aggregate statistics for one run, rendered into the markdown report.
#[derive(Debug, Clone, Serialize)]
pub struct MarketReport {
    pub average_price: f64,
    pub average_price_per_sqm: f64,
    pub property_count: usize,
    pub most_expensive: Listing,
    pub cheapest: Listing,
    pub median_price: f64,
    pub price_range: f64,
}

/// Paths of the files a run produced, returned so the entry point can tell
/// the user what was written.
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    pub scatter_path: PathBuf,
    pub histogram_path: PathBuf,
    pub report_path: PathBuf,
}
