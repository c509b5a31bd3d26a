use crate::errors::{AppError, AppResult};
use crate::models::event::PottyEvent;
use crate::ui::messages::success;
use clap::ValueEnum;
use csv::Writer;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        events: &[PottyEvent],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        if Path::new(file).exists() && !force {
            return Err(AppError::Export(format!(
                "File '{}' already exists (use --force to overwrite)",
                file
            )));
        }

        // export chronologically, oldest first
        let mut sorted = events.to_vec();
        sorted.sort_by_key(|e| e.timestamp);

        match format {
            ExportFormat::Csv => write_csv(file, &sorted)?,
            ExportFormat::Json => write_json(file, &sorted)?,
        }

        success(format!("{} export completed: {}", format.as_str(), file));
        Ok(())
    }
}

fn write_csv(path: &str, events: &[PottyEvent]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(["id", "timestamp", "kind", "location", "accident", "notes"])
        .map_err(|e| AppError::Export(e.to_string()))?;

    for ev in events {
        wtr.write_record(&[
            ev.id.to_string(),
            ev.timestamp.to_rfc3339(),
            ev.kind.as_str().to_string(),
            ev.location.clone(),
            ev.is_accident.to_string(),
            ev.notes.clone(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_json(path: &str, events: &[PottyEvent]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(events)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
