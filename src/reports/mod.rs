use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use readability::config::HighlightSettings;
use readability::error::ReadResult;
use readability::highlight::Highlight;
use readability::scorer::{Formula, UnitScore};
use serde::Serialize;
use std::io::Write;
use strum::IntoEnumIterator;

const EXCERPT_CHARS: usize = 40;

/// One row per unit, flat so it can go straight into CSV.
#[derive(Debug, Clone, Serialize)]
pub struct UnitRow {
    pub file: String,
    pub unit: String,
    pub excerpt: String,
    pub words: usize,
    pub sentences: usize,
    pub ari: Option<f64>,
    pub coleman_liau: Option<f64>,
    pub dale_chall: Option<f64>,
    pub flesch: Option<f64>,
    pub gunning_fog: Option<f64>,
    pub smog: Option<f64>,
    pub spache: Option<f64>,
    pub aggregate: Option<f64>,
    pub hue: Option<f64>,
}

impl UnitRow {
    fn new(file: &str, unit: String, text: &str, score: &UnitScore) -> Self {
        let age = |f: Formula| score.scores.map(|s| s.age(f));
        Self {
            file: file.to_string(),
            unit,
            excerpt: excerpt(text),
            words: score.stats.word_count,
            sentences: score.stats.sentence_count,
            ari: age(Formula::AutomatedReadability),
            coleman_liau: age(Formula::ColemanLiau),
            dale_chall: age(Formula::DaleChall),
            flesch: age(Formula::Flesch),
            gunning_fog: age(Formula::GunningFog),
            smog: age(Formula::Smog),
            spache: age(Formula::Spache),
            aggregate: score.aggregate_age,
            hue: score.hue(),
        }
    }

    fn ages(&self) -> [Option<f64>; 7] {
        [
            self.ari,
            self.coleman_liau,
            self.dale_chall,
            self.flesch,
            self.gunning_fog,
            self.smog,
            self.spache,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub units: Vec<UnitRow>,
    pub summary: UnitRow,
}

impl FileReport {
    pub fn new(file: String, highlight: &Highlight, summary: &UnitScore) -> Self {
        let units = highlight
            .units()
            .enumerate()
            .map(|(i, unit)| {
                UnitRow::new(
                    &file,
                    format!("{} {}", unit.granularity, i + 1),
                    &unit.text(),
                    &unit.score,
                )
            })
            .collect();
        let summary = UnitRow::new(&file, "document".to_string(), &highlight.text(), summary);
        Self {
            file,
            units,
            summary,
        }
    }
}

/// First few characters of a unit with whitespace collapsed.
fn excerpt(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= EXCERPT_CHARS {
        flat
    } else {
        let cut: String = flat.chars().take(EXCERPT_CHARS - 1).collect();
        format!("{}…", cut)
    }
}

fn age_cell(age: Option<f64>, target: f64) -> Cell {
    match age {
        None => Cell::new("-"),
        Some(a) if a > target => Cell::new(format!("{:.0}", a)).fg(Color::Red),
        Some(a) => Cell::new(format!("{:.0}", a)),
    }
}

fn hue_cell(hue: Option<f64>) -> Cell {
    match hue {
        None => Cell::new("-"),
        Some(h) if h <= 40.0 => Cell::new(format!("{:.0}", h)).fg(Color::Red),
        Some(h) if h < 120.0 => Cell::new(format!("{:.0}", h)).fg(Color::Yellow),
        Some(h) => Cell::new(format!("{:.0}", h)).fg(Color::Green),
    }
}

fn row_cells(row: &UnitRow, target: f64) -> Vec<Cell> {
    let mut cells = vec![
        Cell::new(&row.unit).add_attribute(Attribute::Bold),
        Cell::new(&row.excerpt),
        Cell::new(row.words),
        Cell::new(row.sentences),
    ];
    cells.extend(row.ages().iter().map(|&a| age_cell(a, target)));
    cells.push(match row.aggregate {
        Some(a) => Cell::new(format!("{:.1}", a)).fg(Color::Cyan),
        None => Cell::new("-"),
    });
    cells.push(hue_cell(row.hue));
    cells
}

pub fn print_unit_table(report: &FileReport, settings: &HighlightSettings) {
    println!(
        "\n📄 {} (target age {}, {}, {})",
        report.file, settings.target_age, settings.average, settings.granularity
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Unit").add_attribute(Attribute::Bold),
        Cell::new("Text"),
        Cell::new("Words"),
        Cell::new("Sent"),
    ];
    header.extend(Formula::iter().map(|f| Cell::new(f.short_name())));
    header.push(Cell::new("Age").fg(Color::Cyan));
    header.push(Cell::new("Hue"));
    table.set_header(header);

    for i in 2..=13 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let target = f64::from(settings.target_age);
    for row in &report.units {
        table.add_row(row_cells(row, target));
    }
    table.add_row(row_cells(&report.summary, target));

    println!("{}", table);
}

pub fn write_csv<W: Write>(reports: &[FileReport], writer: W) -> ReadResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for report in reports {
        for row in report.units.iter().chain(std::iter::once(&report.summary)) {
            wtr.serialize(row)?;
        }
    }
    wtr.flush()?;
    Ok(())
}
