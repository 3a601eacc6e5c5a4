use mountain_query::FieldCatalog;
use tabular::{Row, Table};

pub fn handle_fields_command() -> anyhow::Result<()> {
    let catalog = FieldCatalog::mountains();
    let mut table = Table::new("{:<}  {:<}  {:<}  {:<}").with_row(Row::from_cells(
        ["Field Name", "Stored As", "Type", "Details"].iter().cloned(),
    ));
    for field in catalog.iter() {
        table.add_row(
            Row::new()
                .with_cell(field.display)
                .with_cell(field.key)
                .with_cell(field.kind)
                .with_cell(field.detail),
        );
    }
    print!("{}", table);
    Ok(())
}
