use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, Table};
use readability::samples::all_samples;

pub fn run() {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Title"),
        Cell::new("Words"),
    ]);

    for sample in all_samples() {
        let words = readability::tree::parse(sample.body()).words().count();
        table.add_row(vec![
            Cell::new(sample.to_string()).add_attribute(Attribute::Bold),
            Cell::new(sample.title()),
            Cell::new(words),
        ]);
    }
    println!("{}", table);
}
