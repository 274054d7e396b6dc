use crate::domain::model::{Dataset, Listing, MarketReport};
use crate::utils::error::{EtlError, Result};
use crate::utils::format::thousands;
use chrono::Local;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::{Path, PathBuf};

pub const SCATTER_FILE: &str = "price_vs_sqm.png";
pub const HISTOGRAM_FILE: &str = "price_per_sqm_distribution.png";
pub const REPORT_FILE: &str = "real-estate-report.md";

const HISTOGRAM_BINS: usize = 20;
const CHART_SIZE: (u32, u32) = (1000, 600);

fn render_error(artifact: &str, err: impl Display) -> EtlError {
    EtlError::Render {
        artifact: artifact.to_string(),
        message: err.to_string(),
    }
}

/// Draws the scatter and histogram charts into `out_dir` under their fixed
/// file names, overwriting previous runs. Never mutates the dataset.
pub fn render_charts(dataset: &Dataset, out_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let scatter_path = out_dir.join(SCATTER_FILE);
    let histogram_path = out_dir.join(HISTOGRAM_FILE);
    draw_scatter(dataset, &scatter_path)?;
    draw_histogram(dataset, &histogram_path)?;
    Ok((scatter_path, histogram_path))
}

fn draw_scatter(dataset: &Dataset, path: &Path) -> Result<()> {
    let x_max = dataset
        .listings()
        .iter()
        .map(|l| l.square_meters)
        .fold(0.0f64, f64::max)
        * 1.05;
    let y_max = dataset
        .listings()
        .iter()
        .map(|l| l.price)
        .fold(0.0f64, f64::max)
        * 1.05;
    let x_max = x_max.max(1.0);
    let y_max = y_max.max(1.0);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(SCATTER_FILE, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Price vs. Size: The Dream Home Finder", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(85)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(|e| render_error(SCATTER_FILE, e))?;

    chart
        .configure_mesh()
        .x_desc("Size (m²)")
        .y_desc("Price (€)")
        .draw()
        .map_err(|e| render_error(SCATTER_FILE, e))?;

    chart
        .draw_series(
            dataset
                .listings()
                .iter()
                .map(|l| Circle::new((l.square_meters, l.price), 4, BLUE.mix(0.6).filled())),
        )
        .map_err(|e| render_error(SCATTER_FILE, e))?;

    root.present().map_err(|e| render_error(SCATTER_FILE, e))?;
    Ok(())
}

fn draw_histogram(dataset: &Dataset, path: &Path) -> Result<()> {
    let ratios: Vec<f64> = dataset
        .listings()
        .iter()
        .map(|l| l.price_per_sqm.unwrap_or(l.price / l.square_meters))
        .collect();

    let lo = ratios.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = ratios.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // single-value datasets collapse to one bin; widen artificially
    let (lo, span) = if hi - lo > 0.0 {
        (lo, hi - lo)
    } else {
        (lo - 0.5, 1.0)
    };
    let bin_width = span / HISTOGRAM_BINS as f64;

    let mut counts = [0u32; HISTOGRAM_BINS];
    for ratio in &ratios {
        let bin = (((ratio - lo) / bin_width) as usize).min(HISTOGRAM_BINS - 1);
        counts[bin] += 1;
    }
    let y_max = counts.iter().copied().max().unwrap_or(1).max(1);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(HISTOGRAM_FILE, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Price per m²: How Much Bang for Your Buck?", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(lo..lo + span, 0u32..y_max + y_max / 10 + 1)
        .map_err(|e| render_error(HISTOGRAM_FILE, e))?;

    chart
        .configure_mesh()
        .x_desc("Price per m² (€)")
        .y_desc("Frequency")
        .draw()
        .map_err(|e| render_error(HISTOGRAM_FILE, e))?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, &count)| {
            let x0 = lo + i as f64 * bin_width;
            let x1 = x0 + bin_width;
            Rectangle::new([(x0, 0), (x1, count)], BLUE.mix(0.5).filled())
        }))
        .map_err(|e| render_error(HISTOGRAM_FILE, e))?;

    root.present().map_err(|e| render_error(HISTOGRAM_FILE, e))?;
    Ok(())
}

/// Renders the markdown report. Field labels and ordering follow the
/// established report layout, so changes here break byte-compatibility with
/// previously generated reports.
pub fn render_report(report: &MarketReport) -> String {
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        "# Real Estate Market Analysis Report 🏘️📊\n\
         Generated on: {generated}\n\
         \n\
         ## Market Overview 🌆\n\
         - Total properties analyzed: {count} 🏠\n\
         - Average property price: {average_price} € 💰\n\
         - Average price per m²: {average_price_per_sqm} €/m² 📏\n\
         - Median property price: {median_price} € (perfectly balanced, as all things should be)\n\
         - Price range: {price_range} € (from \"first home\" to \"lottery win\")\n\
         \n\
         ## Property Extremes 🎢\n\
         ### Most Expensive Property 🏰💎\n\
         {most_expensive}\
         \n\
         ### Most Affordable Property 🏠💡\n\
         {cheapest}\
         \n\
         ## Market Visualizations 📈🖼️\n\
         ![Price vs. Size: The Dream Home Finder]({scatter})\n\
         ![Price per m²: How Much Bang for Your Buck?]({histogram})\n",
        generated = generated,
        count = report.property_count,
        average_price = thousands(report.average_price),
        average_price_per_sqm = thousands(report.average_price_per_sqm),
        median_price = thousands(report.median_price),
        price_range = thousands(report.price_range),
        most_expensive = listing_block(&report.most_expensive),
        cheapest = listing_block(&report.cheapest),
        scatter = SCATTER_FILE,
        histogram = HISTOGRAM_FILE,
    )
}

fn listing_block(listing: &Listing) -> String {
    format!(
        "- Price: {} €\n- Size: {} m²\n- Location: {}\n",
        thousands(listing.price),
        thousands(listing.square_meters),
        listing.location.as_deref().unwrap_or("unknown"),
    )
}
