use crate::core::feed::Snapshot;
use crate::errors::{AppError, AppResult};
use crate::models::{Record, Sheet};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// A directory of `<Sheet>.csv` files.
#[derive(Debug, Clone)]
pub struct Workbook {
    root: PathBuf,
}

impl Workbook {
    /// Open (and create, if needed) the workbook directory.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let root = path.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sheet_path(&self, sheet: Sheet) -> PathBuf {
        self.root.join(sheet.file_name())
    }

    /// Create every missing sheet with its header row. Returns the sheets
    /// that were created.
    pub fn init(&self) -> AppResult<Vec<Sheet>> {
        let mut created = Vec::new();
        for sheet in Sheet::ALL {
            if self.ensure_sheet(sheet)? {
                created.push(sheet);
            }
        }
        Ok(created)
    }

    /// Create the sheet file with its header if missing. `true` if created.
    pub fn ensure_sheet(&self, sheet: Sheet) -> AppResult<bool> {
        let path = self.sheet_path(sheet);
        if path.exists() {
            return Ok(false);
        }

        let mut wtr = WriterBuilder::new().from_path(&path)?;
        wtr.write_record(sheet.columns())?;
        wtr.flush()?;
        Ok(true)
    }

    /// Header row as stored; the sheet's default columns if the file is missing.
    pub fn headers(&self, sheet: Sheet) -> AppResult<Vec<String>> {
        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Ok(sheet.columns().iter().map(|c| c.to_string()).collect());
        }

        let mut rdr = ReaderBuilder::new().flexible(true).from_path(&path)?;
        Ok(rdr.headers()?.iter().map(str::to_string).collect())
    }

    /// All rows in file order. A missing sheet reads as empty.
    pub fn read(&self, sheet: Sheet) -> AppResult<Vec<Record>> {
        let path = self.sheet_path(sheet);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = ReaderBuilder::new().flexible(true).from_path(&path)?;
        let headers = rdr.headers()?.clone();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let row = result?;
            // short rows just omit their trailing cells
            rows.push(Record::from_pairs(headers.iter().zip(row.iter())));
        }

        Ok(rows)
    }

    /// Append a row, writing cells in header order. Returns its 1-based row number.
    pub fn append(&self, sheet: Sheet, record: &Record) -> AppResult<usize> {
        self.ensure_sheet(sheet)?;
        let headers = self.headers(sheet)?;
        let existing = self.read(sheet)?.len();

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(self.sheet_path(sheet))?;

        // an externally edited sheet may lack the final newline
        if file.seek(SeekFrom::End(0))? > 0 {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1))?;
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                file.write_all(b"\n")?;
            }
        }

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record(&to_row(&headers, record))?;
        wtr.flush()?;

        Ok(existing + 1)
    }

    /// Overwrite the given cells of one row, leaving the others untouched.
    pub fn update(&self, sheet: Sheet, row: usize, fields: &Record) -> AppResult<Record> {
        let mut rows = self.read(sheet)?;
        let idx = row_index(sheet, row, rows.len())?;

        for (column, value) in fields.iter() {
            rows[idx].set(column, value);
        }

        let updated = rows[idx].clone();
        self.rewrite(sheet, &rows)?;
        Ok(updated)
    }

    /// Remove one row and return it.
    pub fn delete(&self, sheet: Sheet, row: usize) -> AppResult<Record> {
        let mut rows = self.read(sheet)?;
        let idx = row_index(sheet, row, rows.len())?;

        let removed = rows.remove(idx);
        self.rewrite(sheet, &rows)?;
        Ok(removed)
    }

    /// Read all content sheets at once.
    pub fn snapshot(&self) -> AppResult<Snapshot> {
        Ok(Snapshot {
            notes: self.read(Sheet::Notes)?,
            bucket: self.read(Sheet::BucketList)?,
            calendar: self.read(Sheet::Calendar)?,
            moods: self.read(Sheet::Moods)?,
        })
    }

    /// Replace the sheet contents through a temp file + rename.
    fn rewrite(&self, sheet: Sheet, rows: &[Record]) -> AppResult<()> {
        let headers = self.headers(sheet)?;
        let path = self.sheet_path(sheet);
        let tmp = path.with_extension("csv.tmp");

        {
            let mut wtr = WriterBuilder::new().from_path(&tmp)?;
            wtr.write_record(&headers)?;
            for r in rows {
                wtr.write_record(&to_row(&headers, r))?;
            }
            wtr.flush()?;
        }

        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn to_row(headers: &[String], record: &Record) -> StringRecord {
    headers
        .iter()
        .map(|h| record.get(h).unwrap_or(""))
        .collect()
}

fn row_index(sheet: Sheet, row: usize, len: usize) -> AppResult<usize> {
    if row == 0 || row > len {
        return Err(AppError::InvalidRow {
            sheet: sheet.name().to_string(),
            row,
        });
    }
    Ok(row - 1)
}
