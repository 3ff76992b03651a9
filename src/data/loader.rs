use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;

use super::error::DatasetLoadError;
use super::model::Game;
use super::recommender::GameRecommender;

/// Number of columns every data row must carry.
const FIELD_COUNT: usize = 6;

// ---------------------------------------------------------------------------
// Load options
// ---------------------------------------------------------------------------

/// How to read the delimited text format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// `chrono` format strings tried in order for the release date column.
    pub date_formats: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            date_formats: vec!["%Y-%m-%d".to_string(), "%B %d, %Y".to_string()],
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – header line, then `name,platform,date,user,meta,summary`
/// * `.json`         – `[{ "name": ..., "platform": ..., ... }, ...]`
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<GameRecommender, DatasetLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" | "txt" => GameRecommender::from_reader(File::open(path)?, options),
        "json" => GameRecommender::from_json_reader(File::open(path)?),
        other => Err(DatasetLoadError::UnsupportedExtension(other.to_string())),
    }
}

impl GameRecommender {
    /// Parse delimited text into a store.
    ///
    /// The first line is a header and is dropped without being interpreted.
    /// Every following line must hold exactly six fields; quoted fields may
    /// contain the delimiter. Blank lines between rows are skipped. `reader`
    /// is consumed and dropped before this returns, whether parsing succeeds
    /// or not.
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self, DatasetLoadError> {
        let mut reader = BufReader::new(reader);
        let mut header = Vec::new();
        reader.read_until(b'\n', &mut header)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        // csv counts lines from the start of what it sees, which is line 2.
        let mut games = Vec::new();
        let mut record = csv::StringRecord::new();
        loop {
            match csv_reader.read_record(&mut record) {
                Ok(true) => {
                    let line = record.position().map_or(0, |p| p.line()) + 1;
                    games.push(parse_row(&record, line, options)?);
                }
                Ok(false) => break,
                Err(source) => {
                    let line = source
                        .position()
                        .map_or_else(|| csv_reader.position().line(), |p| p.line())
                        + 1;
                    return Err(DatasetLoadError::Csv { line, source });
                }
            }
        }

        log::debug!("parsed {} games", games.len());
        Ok(Self::from_games(games))
    }

    /// Parse a JSON array of game objects into a store.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DatasetLoadError> {
        let games: Vec<Game> = serde_json::from_reader(BufReader::new(reader))?;
        log::debug!("parsed {} games from JSON", games.len());
        Ok(Self::from_games(games))
    }
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn parse_row(
    record: &csv::StringRecord,
    line: u64,
    options: &LoadOptions,
) -> Result<Game, DatasetLoadError> {
    if record.len() != FIELD_COUNT {
        return Err(DatasetLoadError::FieldCount {
            line,
            found: record.len(),
        });
    }

    let release_date = parse_date(&record[2], line, &options.date_formats)?;
    let user_review = parse_field::<f64>(&record[3], line, "user review")?;
    if !user_review.is_finite() {
        return Err(DatasetLoadError::InvalidField {
            line,
            field: "user review",
            value: record[3].to_string(),
            reason: "score must be a finite number".to_string(),
        });
    }
    let meta_score = parse_field::<i32>(&record[4], line, "meta score")?;

    Ok(Game::new(
        &record[0],
        &record[1],
        release_date,
        user_review,
        meta_score,
        &record[5],
    ))
}

fn parse_field<T>(value: &str, line: u64, field: &'static str) -> Result<T, DatasetLoadError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| DatasetLoadError::InvalidField {
        line,
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_date(value: &str, line: u64, formats: &[String]) -> Result<NaiveDate, DatasetLoadError> {
    let mut last_error = None;
    for format in formats {
        match NaiveDate::parse_from_str(value, format) {
            Ok(date) => return Ok(date),
            Err(e) => last_error = Some(e),
        }
    }

    Err(DatasetLoadError::InvalidField {
        line,
        field: "release date",
        value: value.to_string(),
        reason: last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no date formats configured".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    const HEADER: &str = "name,platform,release_date,user_review,meta_score,summary\n";

    fn load(text: &str) -> Result<GameRecommender, DatasetLoadError> {
        GameRecommender::from_reader(text.as_bytes(), &LoadOptions::default())
    }

    #[test]
    fn header_only_gives_empty_store() {
        assert!(load(HEADER).unwrap().is_empty());
        assert!(load("").unwrap().is_empty());
    }

    #[test]
    fn parses_rows_in_order() {
        let text = format!(
            "{HEADER}Game A,PC,2020-01-01,8.5,90,great open world\n\
             Game B,PC,2021-06-01,9.0,95,great story\n"
        );
        let rec = load(&text).unwrap();
        let games = rec.all_games();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].name, "Game A");
        assert_eq!(games[0].release_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(games[1].user_review, 9.0);
        assert_eq!(games[1].meta_score, 95);
        assert_eq!(games[1].summary, "great story");
    }

    #[test]
    fn header_content_is_ignored() {
        let text = "a;b;c;d;e;f\nGame A;PC;2020-01-01;8.5;90;fine\n";
        let options = LoadOptions {
            delimiter: b';',
            ..LoadOptions::default()
        };
        let rec = GameRecommender::from_reader(text.as_bytes(), &options).unwrap();
        assert_eq!(rec.len(), 1);
        assert_eq!(rec.all_games()[0].platform, "PC");
    }

    #[test]
    fn quoted_summary_may_contain_delimiter() {
        let text = format!("{HEADER}Game A,PC,2020-01-01,8.5,90,\"dark, moody, long\"\n");
        let rec = load(&text).unwrap();
        assert_eq!(rec.all_games()[0].summary, "dark, moody, long");
    }

    #[test]
    fn long_form_dates_are_accepted() {
        let text = format!("{HEADER}Game A,PC,\"November 23, 1998\",8.5,90,classic\n");
        let rec = load(&text).unwrap();
        assert_eq!(
            rec.all_games()[0].release_date,
            NaiveDate::from_ymd_opt(1998, 11, 23).unwrap()
        );
    }

    #[test]
    fn bad_date_fails_with_line_number() {
        let text = format!("{HEADER}Game A,PC,2020-01-01,8.5,90,ok\nGame B,PC,someday,9.0,95,bad\n");
        let err = load(&text).unwrap_err();
        match err {
            DatasetLoadError::InvalidField { line, field, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(field, "release date");
                assert_eq!(value, "someday");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bad_numbers_fail() {
        let user = format!("{HEADER}Game A,PC,2020-01-01,tbd,90,ok\n");
        let meta = format!("{HEADER}Game A,PC,2020-01-01,8.5,ninety,ok\n");
        assert!(matches!(
            load(&user).unwrap_err(),
            DatasetLoadError::InvalidField { field: "user review", .. }
        ));
        assert!(matches!(
            load(&meta).unwrap_err(),
            DatasetLoadError::InvalidField { field: "meta score", .. }
        ));
    }

    #[test]
    fn non_finite_user_scores_fail() {
        for score in ["NaN", "inf", "-inf"] {
            let text = format!("{HEADER}Game A,PC,2020-01-01,9.0,90,ok\nGame B,PC,2020-01-01,{score},90,ok\n");
            match load(&text).unwrap_err() {
                DatasetLoadError::InvalidField { line, field, value, .. } => {
                    assert_eq!(line, 3);
                    assert_eq!(field, "user review");
                    assert_eq!(value, score);
                }
                other => panic!("unexpected error for {score}: {other:?}"),
            }
        }
    }

    #[test]
    fn header_with_open_quote_is_still_just_line_one() {
        let text = "\"name,platform\nA,PC,2020-01-01,8.5,90,x\nB,PC,2021-01-01,9.0,90,y\n";
        let rec = load(text).unwrap();
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.all_games()[1].name, "B");
    }

    #[test]
    fn header_is_not_required_to_be_utf8() {
        let mut bytes = b"na\xffme\n".to_vec();
        bytes.extend_from_slice(b"A,PC,2020-01-01,8.5,90,x\n");
        let rec = GameRecommender::from_reader(bytes.as_slice(), &LoadOptions::default()).unwrap();
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn header_without_trailing_newline_gives_empty_store() {
        assert!(load("name,platform").unwrap().is_empty());
    }

    #[test]
    fn blank_lines_between_rows_are_skipped() {
        let text = format!("{HEADER}Game A,PC,2020-01-01,8.5,90,ok\n\nGame B,PC,2021-01-01,9.0,95,ok\n\n");
        let rec = load(&text).unwrap();
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.all_games()[1].name, "Game B");
    }

    #[test]
    fn bad_row_after_blank_line_still_fails() {
        let text = format!("{HEADER}Game A,PC,2020-01-01,8.5,90,ok\n\nGame B,PC,bad,9.0,95,ok\n");
        assert!(matches!(
            load(&text).unwrap_err(),
            DatasetLoadError::InvalidField { field: "release date", .. }
        ));
    }

    #[test]
    fn malformed_json_fails() {
        let err = GameRecommender::from_json_reader(&b"[{\"name\": \"Game A\","[..]).unwrap_err();
        assert!(matches!(err, DatasetLoadError::Json(_)));

        let not_array = GameRecommender::from_json_reader(&b"{}"[..]).unwrap_err();
        assert!(matches!(not_array, DatasetLoadError::Json(_)));
    }

    #[test]
    fn json_with_bad_date_fails() {
        let text = r#"[{"name":"Game A","platform":"PC","release_date":"someday",
                       "user_review":8.5,"meta_score":90,"summary":"ok"}]"#;
        let err = GameRecommender::from_json_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetLoadError::Json(_)));
    }

    #[test]
    fn json_with_missing_field_fails() {
        let text = r#"[{"name":"Game A","platform":"PC","release_date":"2020-01-01"}]"#;
        let err = GameRecommender::from_json_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetLoadError::Json(_)));
    }

    #[test]
    fn wrong_field_count_fails() {
        let text = format!("{HEADER}Game A,PC,2020-01-01,8.5,90\n");
        assert!(matches!(
            load(&text).unwrap_err(),
            DatasetLoadError::FieldCount { line: 2, found: 5 }
        ));
    }

    #[test]
    fn invalid_utf8_fails() {
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"Game \xff,PC,2020-01-01,8.5,90,ok\n");
        let err = GameRecommender::from_reader(bytes.as_slice(), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, DatasetLoadError::Csv { .. }));
    }

    #[test]
    fn load_file_dispatches_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("games.csv");
        let mut f = File::create(&csv_path).unwrap();
        writeln!(f, "{HEADER}Game A,PC,2020-01-01,8.5,90,ok").unwrap();
        assert_eq!(load_file(&csv_path, &LoadOptions::default()).unwrap().len(), 1);

        let json_path = dir.path().join("games.json");
        std::fs::write(
            &json_path,
            r#"[{"name":"Game A","platform":"PC","release_date":"2020-01-01",
                "user_review":8.5,"meta_score":90,"summary":"ok"}]"#,
        )
        .unwrap();
        let rec = load_file(&json_path, &LoadOptions::default()).unwrap();
        assert_eq!(rec.all_games()[0].name, "Game A");

        let err = load_file(&dir.path().join("games.xlsx"), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, DatasetLoadError::UnsupportedExtension(ext) if ext == "xlsx"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.csv"), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, DatasetLoadError::Io(_)));
    }
}
