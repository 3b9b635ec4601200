use super::input::{ConversionInput, load_input};
use super::ui;
use crate::core::config::AppConfig;
use crate::core::{Conversion, Edge, RateGraph, SearchState, convert, round_dp};
use anyhow::{Context, Result};
use comfy_table::Cell;
use std::path::Path;
use tracing::debug;

pub fn run(input_path: &Path, config: &AppConfig, diagnostics: bool) -> Result<()> {
    let input = load_input(input_path)?;
    debug!(
        path = %input_path.display(),
        rates = input.rates.len(),
        "Loaded conversion input"
    );

    let graph = RateGraph::build(&input.rates).context("Failed to build rate graph")?;
    let conversion = convert(&graph, &input.request).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            input.request.source(),
            input.request.destination()
        )
    })?;

    if diagnostics {
        println!("{}", render_diagnostics(&input, &graph, &conversion, config));
        ui::print_separator();
    }
    println!(
        "{}",
        format_result(&conversion, config.display_precision, diagnostics)
    );
    Ok(())
}

/// Formats an amount rounded to `places`, without trailing zeros.
pub fn format_amount(amount: f64, places: u32) -> String {
    round_dp(amount, places).to_string()
}

fn format_result(conversion: &Conversion, places: u32, styled: bool) -> String {
    let amount = format_amount(conversion.amount, places);
    let currency = conversion.request.destination();
    if styled {
        format!(
            "Converted amount: {} {}",
            ui::style_text(&amount, ui::StyleType::TotalValue),
            ui::style_text(currency, ui::StyleType::TotalLabel)
        )
    } else {
        format!("{amount} {currency}")
    }
}

pub fn render_diagnostics(
    input: &ConversionInput,
    graph: &RateGraph,
    conversion: &Conversion,
    config: &AppConfig,
) -> String {
    let request = &input.request;
    let mut output = format!(
        "Expected conversion: {} {} to {}\n",
        request.amount(),
        ui::style_text(request.source(), ui::StyleType::TotalLabel),
        ui::style_text(request.destination(), ui::StyleType::TotalLabel)
    );
    output.push_str(&format!(
        "Number of exchange rates: {}\n\n",
        input.declared_rates
    ));

    output.push_str(&section("Exchange rates", render_rates(graph)));
    match &conversion.search {
        Some(search) => output.push_str(&section("Search", render_search(graph, search))),
        None => output.push_str(&format!(
            "{}\n\n",
            ui::style_text("Same currency, no search needed", ui::StyleType::Subtle)
        )),
    }
    output.push_str(&section(
        "Shortest conversion path",
        render_path(conversion.path.edges()),
    ));
    output.push_str(&format!(
        "Conversion multiplier: {}",
        format_amount(conversion.multiplier, config.display_precision.max(8))
    ));
    output
}

fn section(title: &str, body: String) -> String {
    format!("{}\n{}\n\n", ui::style_text(title, ui::StyleType::Title), body)
}

pub fn render_rates(graph: &RateGraph) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("From"),
        ui::header_cell("To"),
        ui::header_cell("Rate"),
        ui::header_cell("Kind"),
    ]);

    let declared = graph.declared_edges().iter().map(|e| (e, "declared"));
    let inverse = graph.inverse_edges().iter().map(|e| (e, "inverse"));
    for (edge, kind) in declared.chain(inverse) {
        table.add_row(vec![
            Cell::new(&edge.from),
            Cell::new(&edge.to),
            ui::number_cell(edge.rate),
            Cell::new(ui::style_text(kind, ui::StyleType::Subtle)),
        ]);
    }
    table.to_string()
}

pub fn render_search(graph: &RateGraph, search: &SearchState) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Hops"),
        ui::header_cell("Previous"),
    ]);

    let mut currencies: Vec<&str> = graph.currencies().iter().map(String::as_str).collect();
    if !graph.contains(search.origin()) {
        currencies.insert(0, search.origin());
    }
    for currency in currencies {
        table.add_row(vec![
            Cell::new(currency),
            ui::format_optional_cell(search.hops(currency), |h| h.to_string()),
            Cell::new(search.predecessor(currency).unwrap_or("-")),
        ]);
    }
    table.to_string()
}

/// Renders the path edges in conversion order, origin first.
pub fn render_path(edges: &[Edge]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Step"),
        ui::header_cell("From"),
        ui::header_cell("To"),
        ui::header_cell("Rate"),
    ]);
    for (step, edge) in edges.iter().rev().enumerate() {
        table.add_row(vec![
            ui::number_cell(step + 1),
            Cell::new(&edge.from),
            Cell::new(&edge.to),
            ui::number_cell(edge.rate),
        ]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::input::parse_input;

    const SAMPLE: &str = "EUR;100;AUD\n4\nEUR;CAD;1.12\nCAD;JPY;119\nCAD;AUD;0.98\nAUD;USD;1.28\n";

    fn sample_conversion() -> (ConversionInput, RateGraph, Conversion) {
        let input = parse_input(SAMPLE).unwrap();
        let graph = RateGraph::build(&input.rates).unwrap();
        let conversion = convert(&graph, &input.request).unwrap();
        (input, graph, conversion)
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(109.76000000000001, 4), "109.76");
        assert_eq!(format_amount(45.555758, 4), "45.5558");
        assert_eq!(format_amount(0.0, 4), "0");
        assert_eq!(format_amount(45.555758, 2), "45.56");
    }

    #[test]
    fn test_format_result_plain() {
        let (_, _, conversion) = sample_conversion();
        assert_eq!(format_result(&conversion, 4, false), "109.76 AUD");
    }

    #[test]
    fn test_render_rates_lists_declared_and_inverse() {
        let (_, graph, _) = sample_conversion();
        let table = render_rates(&graph);
        assert!(table.contains("declared"));
        assert!(table.contains("inverse"));
        assert!(table.contains("0.8929"));
        assert!(table.contains("1.0204"));
    }

    #[test]
    fn test_render_path_in_conversion_order() {
        let (_, _, conversion) = sample_conversion();
        let table = render_path(conversion.path.edges());
        let eur = table.find("EUR").unwrap();
        let aud = table.find("AUD").unwrap();
        assert!(eur < aud);
        assert!(table.contains("1.12"));
        assert!(table.contains("0.98"));
    }

    #[test]
    fn test_render_diagnostics_sections() {
        let (input, graph, conversion) = sample_conversion();
        let output = render_diagnostics(&input, &graph, &conversion, &AppConfig::default());
        assert!(output.contains("Exchange rates"));
        assert!(output.contains("Search"));
        assert!(output.contains("Shortest conversion path"));
        assert!(output.contains("Conversion multiplier: 1.0976"));
    }
}
