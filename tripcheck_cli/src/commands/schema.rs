use anyhow::Result;
use tripcheck_core::EXPECTED_COLUMNS;

pub fn execute() -> Result<()> {
    println!("Expected trip dataset columns ({}):", EXPECTED_COLUMNS.len());
    for name in EXPECTED_COLUMNS {
        println!("  {}", name);
    }
    Ok(())
}
