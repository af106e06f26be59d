//! Terminal rendering of resolved recommendations

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;

use crate::pathway::levels::LEVEL_REFERENCE;
use crate::pathway::{Answers, CountryBlock, Guidance, RecommendationView};

/// Render the full recommendation report to the terminal.
pub fn render_report(answers: &Answers, view: &RecommendationView) {
    render_profile(answers);

    println!();
    println!(
        "    {} {}",
        style("\u{1f393}").cyan(),
        style("YOUR RECOMMENDED PATHWAYS").white().bold()
    );
    println!("    {}", style("\u{2500}".repeat(60)).dim());
    println!();
    println!("    {}", view.headline);

    if view.used_default_destinations {
        println!(
            "    {}",
            style("No destination chosen, so here are three popular starting points.").dim()
        );
    }

    for block in &view.blocks {
        render_country_block(block);
    }

    println!();
    println!(
        "    {} {}",
        style("\u{1f4a1}").yellow(),
        style("Helpful Tips").yellow().bold()
    );
    for tip in &view.tips {
        println!("      {} {}", style("\u{2022}").dim(), tip);
    }
}

fn render_profile(answers: &Answers) {
    let fmt = |value: Option<String>| value.unwrap_or_else(|| "\u{2014}".to_string());

    println!();
    println!(
        "    {} {}",
        style("\u{1f4cb}").cyan(),
        style("YOUR PROFILE").white().bold()
    );
    println!("    {}", style("\u{2500}".repeat(60)).dim());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.add_row(vec![
        Cell::new("Home country"),
        Cell::new(fmt(answers.home_country.map(|v| v.label().to_string()))),
    ]);
    table.add_row(vec![
        Cell::new("Current level"),
        Cell::new(fmt(answers.current_level.map(|v| v.label().to_string()))),
    ]);
    table.add_row(vec![
        Cell::new("Study mode"),
        Cell::new(fmt(answers.study_mode.map(|v| v.label().to_string()))),
    ]);
    table.add_row(vec![
        Cell::new("Funding"),
        Cell::new(fmt(answers.funding.map(|v| v.label().to_string()))),
    ]);
    table.add_row(vec![
        Cell::new("Cost preference"),
        Cell::new(fmt(answers.cost.map(|v| v.label().to_string()))),
    ]);
    let interests: Vec<&str> = answers.interests.iter().map(|s| s.label()).collect();
    table.add_row(vec![
        Cell::new("Interests"),
        Cell::new(if interests.is_empty() {
            "\u{2014}".to_string()
        } else {
            interests.join(", ")
        }),
    ]);

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

fn render_country_block(block: &CountryBlock) {
    println!();
    println!(
        "    {} {}",
        style("\u{25b8}").cyan().bold(),
        style(block.country.label()).white().bold()
    );
    println!("      {}", style(block.cost_of_living).dim());

    match &block.guidance {
        Guidance::Bundle(bundle) => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL_CONDENSED);
            table.set_header(vec![
                Cell::new("Category").add_attribute(Attribute::Bold),
                Cell::new("Guidance").add_attribute(Attribute::Bold),
            ]);
            let categories: [(&str, &Vec<String>); 6] = [
                ("Qualification routes", &bundle.qualification_routes),
                ("Accommodation", &bundle.accommodation),
                ("Work & study", &bundle.work_and_study),
                ("EU funding", &bundle.eu_funding),
                ("National funding", &bundle.national_funding),
                ("Low-income support", &bundle.low_income_support),
            ];
            for (name, items) in categories {
                table.add_row(vec![Cell::new(name), Cell::new(items.join("\n"))]);
            }
            for line in table.to_string().lines() {
                println!("      {}", line);
            }
            if let Some(note) = &bundle.note {
                println!("      {} {}", style("Note:").yellow(), note);
            }
        }
        Guidance::Unavailable(message) => {
            println!("      {}", style(message).yellow());
        }
    }
}

/// Render the qualification-levels reference table (the `levels` subcommand).
pub fn render_levels_table(filter: Option<&str>) {
    println!();
    println!(
        "    {} {}",
        style("\u{1f4d6}").cyan(),
        style("QUALIFICATION LEVELS").white().bold()
    );
    println!("    {}", style("\u{2500}".repeat(60)).dim());

    let needle = filter.map(|f| f.to_lowercase());
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Level").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
        Cell::new("Examples").add_attribute(Attribute::Bold),
    ]);

    let mut shown = 0usize;
    for entry in &LEVEL_REFERENCE {
        if let Some(needle) = &needle {
            let haystack = format!(
                "{} {} {}",
                entry.title,
                entry.description,
                entry.examples.join(" ")
            )
            .to_lowercase();
            if !haystack.contains(needle.as_str()) {
                continue;
            }
        }
        table.add_row(vec![
            Cell::new(entry.title),
            Cell::new(entry.description),
            Cell::new(entry.examples.join("\n")),
        ]);
        shown += 1;
    }

    if shown == 0 {
        println!("    No levels match that filter.");
        return;
    }
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}
