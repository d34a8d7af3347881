use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::error::AppError;

/// The two cell encodings the pipeline cares about. Dates and times arrive
/// either as spreadsheet serial numbers or as plain text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

#[derive(Debug, Clone)]
pub struct ScheduleRow {
    pub division: String,
    pub date: Cell,
    pub time: Cell,
    pub home: String,
    pub visitor: String,
    pub location: String,
    pub match_code: String,
}

struct Columns {
    division: usize,
    date: usize,
    time: usize,
    home: usize,
    visitor: usize,
    location: Option<usize>,
    match_code: Option<usize>,
}

const DIVISION_HEADERS: &[&str] = &["division", "poule", "pool"];
const DATE_HEADERS: &[&str] = &["date"];
const TIME_HEADERS: &[&str] = &["heure", "time"];
const HOME_HEADERS: &[&str] = &["equipe 1", "équipe 1", "team 1", "domicile"];
const VISITOR_HEADERS: &[&str] = &["equipe 2", "équipe 2", "team 2", "visiteur"];
const LOCATION_HEADERS: &[&str] = &["lieu", "salle", "location"];
const CODE_HEADERS: &[&str] = &["code"];

/// Parse the first worksheet of an uploaded spreadsheet into schedule rows.
/// The first row must carry the column headers; headers are matched
/// case-insensitively by substring.
pub fn parse_schedule(bytes: &[u8]) -> Result<Vec<ScheduleRow>, AppError> {
    let cursor = Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| AppError::SpreadsheetError(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::SpreadsheetError("workbook has no sheets".to_string()))?
        .map_err(|e| AppError::SpreadsheetError(e.to_string()))?;

    let mut rows = range.rows();
    let header_row = rows
        .next()
        .ok_or_else(|| AppError::BadRequest("spreadsheet is empty".to_string()))?;
    let columns = resolve_columns(header_row)?;

    Ok(rows
        .map(|row| ScheduleRow {
            division: cell_text(row.get(columns.division)),
            date: cell_value(row.get(columns.date)),
            time: cell_value(row.get(columns.time)),
            home: cell_text(row.get(columns.home)),
            visitor: cell_text(row.get(columns.visitor)),
            location: columns
                .location
                .map(|i| cell_text(row.get(i)))
                .unwrap_or_default(),
            match_code: columns
                .match_code
                .map(|i| cell_text(row.get(i)))
                .unwrap_or_default(),
        })
        .collect())
}

fn resolve_columns(header_row: &[Data]) -> Result<Columns, AppError> {
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_text(Some(cell)).to_lowercase())
        .collect();

    let find = |candidates: &[&str]| {
        headers
            .iter()
            .position(|header| candidates.iter().any(|c| header.contains(c)))
    };

    let mut missing = Vec::new();
    let division = find(DIVISION_HEADERS);
    let date = find(DATE_HEADERS);
    let time = find(TIME_HEADERS);
    let home = find(HOME_HEADERS);
    let visitor = find(VISITOR_HEADERS);

    if division.is_none() {
        missing.push("division/poule");
    }
    if date.is_none() {
        missing.push("date");
    }
    if time.is_none() {
        missing.push("heure");
    }
    if home.is_none() {
        missing.push("equipe 1");
    }
    if visitor.is_none() {
        missing.push("equipe 2");
    }
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Missing required columns: {}",
            missing.join(", ")
        )));
    }

    Ok(Columns {
        division: division.unwrap(),
        date: date.unwrap(),
        time: time.unwrap(),
        home: home.unwrap(),
        visitor: visitor.unwrap(),
        location: find(LOCATION_HEADERS),
        match_code: find(CODE_HEADERS),
    })
}

fn cell_value(cell: Option<&Data>) -> Cell {
    match cell {
        Some(Data::Float(f)) => Cell::Number(*f),
        Some(Data::Int(i)) => Cell::Number(*i as f64),
        Some(Data::DateTime(dt)) => Cell::Number(dt.as_f64()),
        Some(Data::String(s)) if !s.trim().is_empty() => Cell::Text(s.trim().to_string()),
        _ => Cell::Empty,
    }
}

fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Float(f)) if f.fract() == 0.0 => format!("{}", *f as i64),
        Some(Data::Float(f)) => f.to_string(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
