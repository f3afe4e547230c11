//! Terminal tables for the mapping report and the cleaned-row preview.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use stp_model::{MAILING_ADDRESS_HEADER, OWNER_NAME_HEADER, OutputTable, Role, RoleMapping};

/// One row per role: matched column, the synonym that matched, its score.
pub fn mapping_table(mapping: &RoleMapping) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Column"),
        header_cell("Synonym"),
        header_cell("Score"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    for role in Role::ALL {
        let row = match mapping.get(role) {
            Some(resolution) => vec![
                Cell::new(role.code()),
                Cell::new(&resolution.column).fg(Color::Green),
                Cell::new(&resolution.synonym),
                Cell::new(format!("{:.3}", resolution.score)),
                required_cell(role),
            ],
            None if role.is_required() => vec![
                Cell::new(role.code()).add_attribute(Attribute::Bold),
                Cell::new("missing").fg(Color::Red),
                dim_cell("-"),
                dim_cell("-"),
                required_cell(role),
            ],
            None => vec![
                Cell::new(role.code()),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                required_cell(role),
            ],
        };
        table.add_row(row);
    }
    table
}

/// The first `limit` cleaned rows.
pub fn preview_table(output: &OutputTable, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell(OWNER_NAME_HEADER),
        header_cell(MAILING_ADDRESS_HEADER),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, record) in output.head(limit).iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&record.owner_name),
            Cell::new(&record.mailing_address),
        ]);
    }
    table
}

pub fn print_mapping(mapping: &RoleMapping) {
    println!("{}", mapping_table(mapping));
}

pub fn print_preview(output: &OutputTable, limit: usize) {
    if limit == 0 || output.is_empty() {
        return;
    }
    println!(
        "Preview ({} of {} rows):",
        limit.min(output.len()),
        output.len()
    );
    println!("{}", preview_table(output, limit));
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn required_cell(role: Role) -> Cell {
    if role.is_required() {
        Cell::new("yes")
    } else {
        dim_cell("no")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
