//! Count plot of books per first-publication year.

mod theme;

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::config::CHART_SIZE;
use crate::error_handling::VisualizeError;
use crate::models::BookTable;

/// Number of books per `first_publish_year`, ascending by year.
pub fn year_counts(table: &BookTable) -> Vec<(i64, usize)> {
    let mut counts = BTreeMap::new();
    for book in table {
        *counts.entry(book.first_publish_year).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Renders the count plot to a fixed PNG path.
#[derive(Debug, Clone)]
pub struct BookVisualizer {
    output_path: PathBuf,
}

impl BookVisualizer {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Draws one bar per publication year and writes the PNG, overwriting any
    /// previous chart. An empty table yields the titled axes with no bars.
    ///
    /// # Errors
    ///
    /// - `VisualizeError::Io` if the output directory cannot be created
    /// - `VisualizeError::DrawError` if the drawing backend fails
    pub fn render(&self, table: &BookTable) -> Result<PathBuf, VisualizeError> {
        info!("Visualizing data...");
        let counts = year_counts(table);

        if let Some(parent) = self.output_path.parent() {
            fs::create_dir_all(parent).map_err(|source| VisualizeError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        draw_countplot(&self.output_path, &counts)
            .map_err(|e| VisualizeError::DrawError(e.to_string()))?;

        info!("Countplot saved to {}", self.output_path.display());
        Ok(self.output_path.clone())
    }
}

fn draw_countplot(path: &Path, counts: &[(i64, usize)]) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&theme::BACKGROUND)?;

    let max_count = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
    // At least one x segment, so an empty table still gets a drawable axis
    let slots = counts.len().max(1);
    let year_label = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(i) => counts
            .get(*i)
            .map(|(year, _)| year.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Number of Books Published by Year",
            (theme::FONT, 40).into_font().color(&theme::TEXT),
        )
        .margin(30)
        .x_label_area_size(90)
        .y_label_area_size(80)
        .build_cartesian_2d((0..slots).into_segmented(), 0..max_count + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(theme::GRID.stroke_width(1))
        .light_line_style(theme::BACKGROUND.stroke_width(1))
        .axis_style(theme::GRID.stroke_width(1))
        .x_labels(slots)
        .x_label_formatter(&year_label)
        .x_label_style(
            (theme::FONT, 16)
                .into_font()
                .transform(FontTransform::Rotate90)
                .color(&theme::TEXT),
        )
        .y_label_style((theme::FONT, 18).into_font().color(&theme::TEXT))
        .x_desc("Year")
        .y_desc("Number of Books")
        .axis_desc_style((theme::FONT, 24).into_font().color(&theme::TEXT))
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, (_, count))| {
        let color = theme::PALETTE[i % theme::PALETTE.len()];
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0),
                (SegmentValue::Exact(i + 1), *count),
            ],
            color.filled(),
        );
        bar.set_margin(0, 0, 3, 3);
        bar
    }))?;

    root.present()?;
    Ok(())
}
