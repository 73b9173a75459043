use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use reuse_checkr::matcher::normalize;
use reuse_checkr::models::{ReuseSource, ScanReport};

/// Render a colored terminal report.
pub fn render(report: &ScanReport, verbose: bool, quiet: bool) -> Result<()> {
    let with_data = report.files.len();
    let without_data = report.files_scanned.saturating_sub(with_data);
    let count = |source: ReuseSource| report.files.iter().filter(|f| f.source == source).count();

    if quiet {
        println!(
            "Files: {}  With data: {}  Without: {}  Licenses: {}",
            report.files_scanned,
            with_data.to_string().green(),
            without_data.to_string().yellow(),
            report.combined.license_identifiers.len(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "reuse-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanning: {}\n", report.root.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Files scanned      : {}", report.files_scanned)
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  With data       : {:>4}  [inline {}, sidecar {}, dep5 {}]",
            "✓".green(),
            with_data,
            count(ReuseSource::Inline),
            count(ReuseSource::Sidecar),
            count(ReuseSource::Dep5),
        )
    );
    println!(
        " │  {:<48} │",
        format!("{}  Without data    : {:>4}", "⚠".yellow(), without_data)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    println!(" {} Licenses:\n", "[LICENSE]".cyan().bold());
    for license in &report.combined.license_identifiers {
        println!("   {}", license);
    }
    println!();

    println!(" {} Copyright statements:\n", "[COPYRIGHT]".cyan().bold());
    for statement in &report.combined.copyright_statements {
        println!("   {}", statement);
    }
    println!();

    if verbose && with_data > 0 {
        println!(" {} Per-file results:\n", "[FILES]".green().bold());
        render_table(report);
        println!();
    }

    Ok(())
}

fn render_table(report: &ScanReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Path").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Licenses").add_attribute(Attribute::Bold),
            Cell::new("Copyright").add_attribute(Attribute::Bold),
        ]);

    for file in &report.files {
        let path = file.path.strip_prefix(&report.root).unwrap_or(&file.path);
        let source_color = match file.source {
            ReuseSource::Inline => Color::Green,
            ReuseSource::Sidecar => Color::Cyan,
            ReuseSource::Dep5 => Color::Yellow,
        };

        table.add_row(vec![
            Cell::new(normalize(path)),
            Cell::new(file.source.to_string()).fg(source_color),
            Cell::new(file.license_identifiers.join("\n")),
            Cell::new(file.copyright_statements.join("\n")),
        ]);
    }

    println!("{}", table);
}
