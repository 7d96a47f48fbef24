//! Excel export functionality

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use shindan_store::EvaluationRecord;
use shindan_types::{Error, Result};

/// Export evaluation history to an Excel file
pub fn export_to_excel(records: &[&EvaluationRecord], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, records)?;

    let details_sheet = workbook.add_worksheet();
    write_details_sheet(details_sheet, records)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, records: &[&EvaluationRecord]) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Shindan Checker Evaluation Report", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Total evaluations:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(2, 1, records.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Status distribution
    sheet
        .write_string_with_format(4, 0, "Status Distribution", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let mut status_counts = std::collections::HashMap::new();
    for record in records {
        *status_counts.entry(record.status.label()).or_insert(0) += 1;
    }

    let mut row = 5;
    for (status, count) in &status_counts {
        sheet
            .write_string(row, 0, *status)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, *count as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    Ok(())
}

fn write_details_sheet(sheet: &mut Worksheet, records: &[&EvaluationRecord]) -> Result<()> {
    sheet
        .set_name("Details")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Recorded At",
        "Voltage (V)",
        "Headlights",
        "Blower",
        "Defroster",
        "Status",
        "Notes",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet
            .write_string(row, 0, record.recorded_at.to_rfc3339())
            .map_err(|e| Error::Excel(e.to_string()))?;
        match record.measurement.voltage {
            Some(v) => sheet
                .write_number(row, 1, v)
                .map_err(|e| Error::Excel(e.to_string()))?,
            None => sheet
                .write_string(row, 1, "-")
                .map_err(|e| Error::Excel(e.to_string()))?,
        };
        let on_off = |flag: bool| if flag { "on" } else { "off" };
        sheet
            .write_string(row, 2, on_off(record.measurement.headlights_on))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 3, on_off(record.measurement.blower_on))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 4, on_off(record.measurement.rear_defroster_on))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 5, record.status.label())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 6, record.notes.as_deref().unwrap_or(""))
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}
