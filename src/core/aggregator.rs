use crate::domain::model::{Dataset, Listing, MarketReport};
use crate::utils::error::{EtlError, Result};

/// Fills the derived price/m² column and computes the run's statistics in one
/// pass. Fails fast on an empty dataset instead of letting a zero-row mean
/// produce NaN.
pub fn aggregate(mut dataset: Dataset) -> Result<(Dataset, MarketReport)> {
    if dataset.is_empty() {
        return Err(EtlError::EmptyDataset);
    }

    for listing in dataset.listings_mut() {
        listing.price_per_sqm = Some(listing.price / listing.square_meters);
    }

    let listings = dataset.listings();
    let count = listings.len();

    let mut price_sum = 0.0;
    let mut ratio_sum = 0.0;
    let mut max_idx = 0usize;
    let mut min_idx = 0usize;
    for (i, listing) in listings.iter().enumerate() {
        price_sum += listing.price;
        ratio_sum += listing.price / listing.square_meters;
        // strict comparisons keep the first occurrence on ties
        if listing.price > listings[max_idx].price {
            max_idx = i;
        }
        if listing.price < listings[min_idx].price {
            min_idx = i;
        }
    }

    let report = MarketReport {
        average_price: price_sum / count as f64,
        average_price_per_sqm: ratio_sum / count as f64,
        property_count: count,
        most_expensive: listings[max_idx].clone(),
        cheapest: listings[min_idx].clone(),
        median_price: median_price(listings),
        price_range: listings[max_idx].price - listings[min_idx].price,
    };

    Ok((dataset, report))
}

fn median_price(listings: &[Listing]) -> f64 {
    let mut prices: Vec<f64> = listings.iter().map(|l| l.price).collect();
    prices.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = prices.len() / 2;
    if prices.len() % 2 == 0 {
        (prices[mid - 1] + prices[mid]) / 2.0
    } else {
        prices[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(price: f64, square_meters: f64, location: &str) -> Listing {
        Listing::new(price, square_meters, Some(location.to_string()))
    }

    fn dataset(prices: &[(f64, f64, &str)]) -> Dataset {
        Dataset::new(
            prices
                .iter()
                .map(|&(p, s, loc)| listing(p, s, loc))
                .collect(),
        )
    }

    #[test]
    fn empty_dataset_fails_fast() {
        let result = aggregate(Dataset::default());
        assert!(matches!(result, Err(EtlError::EmptyDataset)));
    }

    #[test]
    fn fills_derived_column_for_every_row() {
        let (dataset, _) = aggregate(dataset(&[
            (100000.0, 50.0, "A"),
            (300000.0, 100.0, "B"),
        ]))
        .unwrap();

        let ratios: Vec<f64> = dataset
            .listings()
            .iter()
            .map(|l| l.price_per_sqm.unwrap())
            .collect();
        assert_eq!(ratios, vec![2000.0, 3000.0]);
    }

    #[test]
    fn median_averages_two_middle_values_for_even_counts() {
        let (_, report) = aggregate(dataset(&[
            (100000.0, 50.0, "A"),
            (150000.0, 75.0, "B"),
            (200000.0, 100.0, "C"),
            (250000.0, 125.0, "D"),
        ]))
        .unwrap();
        assert_eq!(report.median_price, 175000.0);
    }

    #[test]
    fn median_takes_middle_value_for_odd_counts() {
        let (_, report) = aggregate(dataset(&[
            (300000.0, 100.0, "A"),
            (100000.0, 50.0, "B"),
            (200000.0, 80.0, "C"),
        ]))
        .unwrap();
        assert_eq!(report.median_price, 200000.0);
    }

    #[test]
    fn price_range_is_max_minus_min() {
        let (_, report) = aggregate(dataset(&[
            (120000.0, 60.0, "A"),
            (480000.0, 160.0, "B"),
            (240000.0, 90.0, "C"),
        ]))
        .unwrap();
        assert_eq!(report.price_range, 360000.0);
        assert_eq!(report.most_expensive.price, 480000.0);
        assert_eq!(report.cheapest.price, 120000.0);
    }

    #[test]
    fn ties_resolve_to_first_occurrence_in_load_order() {
        let (_, report) = aggregate(dataset(&[
            (200000.0, 100.0, "first-max"),
            (200000.0, 80.0, "second-max"),
            (100000.0, 40.0, "first-min"),
            (100000.0, 50.0, "second-min"),
        ]))
        .unwrap();
        assert_eq!(report.most_expensive.location.as_deref(), Some("first-max"));
        assert_eq!(report.cheapest.location.as_deref(), Some("first-min"));
    }

    #[test]
    fn averages_cover_price_and_derived_ratio() {
        let (_, report) = aggregate(dataset(&[
            (100000.0, 50.0, "A"),
            (200000.0, 100.0, "B"),
            (150000.0, 75.0, "C"),
            (250000.0, 125.0, "D"),
        ]))
        .unwrap();
        assert_eq!(report.average_price, 175000.0);
        assert_eq!(report.average_price_per_sqm, 2000.0);
        assert_eq!(report.property_count, 4);
    }
}
