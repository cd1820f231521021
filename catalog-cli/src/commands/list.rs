use crate::output;

use std::io::IsTerminal;

use clap::Args;
use color_eyre::Result;
use unicode_width::UnicodeWidthStr;

use catalog_service::{
    Catalog, EnrichedProduct, Explorer, Query, Sex, Sort, SortColumn, SortDirection,
    NO_MATCHES_MESSAGE,
};

/// List products matching the given filters
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only products owned by this user (id or name)
    #[arg(long, short = 'u', value_name = "USER")]
    pub owner: Option<String>,

    /// Case-insensitive product name fragment
    #[arg(long, short = 'n', value_name = "TEXT", default_value = "")]
    pub name: String,

    /// Only products in this category (id or title); repeat for several
    #[arg(long, short = 'c', value_name = "CATEGORY")]
    pub category: Vec<String>,

    /// Sort by column: id, product, category, user
    #[arg(long, short = 's', value_name = "COLUMN")]
    pub sort: Option<SortColumn>,

    /// Sort in descending order
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Print matching rows as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Translate the flags into a query against `catalog`
    pub fn query(&self, catalog: &Catalog) -> Result<Query> {
        let owner = match &self.owner {
            Some(selector) => Some(catalog.resolve_user(selector)?.id),
            None => None,
        };

        let mut query = Query::new()
            .select_owner(owner)
            .set_product_name(self.name.as_str());

        for selector in &self.category {
            let id = catalog.resolve_category(selector)?.id;
            if !query.is_category_selected(id) {
                query = query.toggle_category(id);
            }
        }
        Ok(query)
    }

    pub fn sort(&self) -> Option<Sort> {
        let direction = if self.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.sort.map(|column| Sort::new(column, direction))
    }
}

pub fn execute(args: ListArgs, catalog: Catalog) -> Result<()> {
    let query = args.query(&catalog)?;
    let explorer = Explorer::new(catalog)?
        .with_query(query)
        .with_sort(args.sort());
    let visible = explorer.visible();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("{}", NO_MATCHES_MESSAGE);
        return Ok(());
    }

    let color = std::io::stdout().is_terminal();
    for line in render_table(&visible, color) {
        println!("{}", line);
    }
    output::dim(&format!(
        "{} of {} products",
        visible.len(),
        explorer.rows().len()
    ));
    Ok(())
}

/// Format rows as aligned text lines, header first
pub fn render_table(rows: &[&EnrichedProduct], color: bool) -> Vec<String> {
    let headings = SortColumn::ALL.map(|column| column.title().to_string());
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.id.to_string(),
                row.name.clone(),
                row.category_label(),
                row.user.name.clone(),
            ]
        })
        .collect();

    let mut widths = headings.clone().map(|heading| heading.width());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 1);
    lines.push(join_cells(&headings, &widths).trim_end().to_string());

    for (row, product) in cells.iter().zip(rows) {
        let line = join_cells(&row[..3], &widths[..3]);
        let owner_code = match product.user.sex {
            Sex::Male => "34",
            Sex::Female => "31",
        };
        lines.push(format!("{}{}", line, output::paint(&row[3], owner_code, color)));
    }
    lines
}

fn join_cells(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{}  ", output::pad(cell, *width)))
        .collect()
}
