use crate::core::characters::CharacterSet;
use crate::core::color::{Rgb, rgb_to_hex};
use crate::storage::config::Config;
use crate::utils::text::limit_width;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};

const MAX_VALUE_WIDTH: usize = 64;

pub struct TableDisplay {
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(color)
        } else {
            Cell::new(text)
        }
    }

    fn base_table(&self, headers: &[(&str, Color)]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(
                headers
                    .iter()
                    .map(|(text, color)| self.bold_header(text, *color))
                    .collect::<Vec<_>>(),
            );
        table
    }

    /// One row per character set with its size and contents.
    pub fn render_character_sets(&self, sets: &[CharacterSet]) -> String {
        let mut table = self.base_table(&[
            ("Set", Color::Cyan),
            ("Size", Color::Yellow),
            ("Characters", Color::Green),
        ]);
        for set in sets {
            table.add_row(vec![
                Cell::new(set.name()),
                Cell::new(set.chars().len()),
                Cell::new(set.as_str()),
            ]);
        }
        table.to_string()
    }

    /// HEX and RGB forms of each color side by side.
    pub fn render_colors(&self, colors: &[Rgb]) -> String {
        let mut table = self.base_table(&[("HEX", Color::Cyan), ("RGB", Color::Green)]);
        for rgb in colors {
            let hex_cell = if self.use_colors {
                Cell::new(rgb_to_hex(*rgb)).fg(Color::Rgb {
                    r: rgb.red,
                    g: rgb.green,
                    b: rgb.blue,
                })
            } else {
                Cell::new(rgb_to_hex(*rgb))
            };
            table.add_row(vec![hex_cell, Cell::new(rgb.to_string())]);
        }
        table.to_string()
    }

    /// Effective configuration values and where the file lives.
    pub fn render_config(&self, config: &Config, path: &str) -> String {
        let mut table = self.base_table(&[("Setting", Color::Cyan), ("Value", Color::Green)]);
        table.add_row(vec![Cell::new("config file"), Cell::new(limit_width(path, MAX_VALUE_WIDTH))]);
        table.add_row(vec![
            Cell::new("decimals"),
            Cell::new(config.get_decimals()),
        ]);
        table.add_row(vec![
            Cell::new("date_format"),
            Cell::new(limit_width(&config.get_date_format(), MAX_VALUE_WIDTH)),
        ]);
        table.to_string()
    }
}
