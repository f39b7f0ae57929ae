use crate::error::Result;
use crate::table::TabulaRecta;

/// The tabula recta as a grid of letters or a JSON row list
pub fn show_table(json: bool) -> Result<String> {
    let table = TabulaRecta::new();
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&table)?))
    } else {
        let mut output = String::new();
        output.push_str("Tabula Recta\n");
        output.push_str("============\n\n");
        output.push_str(&table.render());
        Ok(output)
    }
}
