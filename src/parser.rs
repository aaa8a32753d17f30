use csv::ReaderBuilder;
use std::path::Path;
use tracing::info;
use crate::error::AppError;

/// Loads a roster from a CSV file.
///
/// If the first row has a column whose header contains "name", that column is
/// used and the row is skipped. Otherwise the first column is read and the
/// first row counts as a player. Blank cells are skipped, order is kept, and
/// duplicates are left in place for the scheduler to reject.
pub fn load_roster<P: AsRef<Path>>(csv_path: P) -> Result<Vec<String>, AppError> {
    let path = csv_path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = reader.records();
    let mut players = Vec::new();

    let first = match records.next() {
        Some(record) => record?,
        None => return Err(AppError::EmptyRoster { path: path.display().to_string() }),
    };

    let name_col = first
        .iter()
        .position(|h| h.to_lowercase().contains("name"));
    let col = match name_col {
        Some(col) => col,
        None => {
            if let Some(name) = first.get(0).filter(|n| !n.is_empty()) {
                players.push(name.to_string());
            }
            0
        }
    };

    for result in records {
        let record = result?;
        if let Some(name) = record.get(col).filter(|n| !n.is_empty()) {
            players.push(name.to_string());
        }
    }

    if players.is_empty() {
        return Err(AppError::EmptyRoster { path: path.display().to_string() });
    }

    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// Splits a comma-separated list of names
pub fn parse_player_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}
