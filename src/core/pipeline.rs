use crate::core::{
    ConfigProvider, Contact, LoadSummary, Pipeline, RawRow, Storage, TransformResult,
};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::is_valid_email;
use std::collections::HashSet;

pub struct ContactPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ContactPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn input_read_error(&self, reason: impl ToString) -> EtlError {
        EtlError::InputReadError {
            path: self.config.input_path().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ContactPipeline<S, C> {
    /// Reads the input as headerless CSV, skipping the configured count of
    /// leading banner/header rows, and yields the two meaningful columns
    /// of each data row in file order.
    fn extract(&self) -> Result<Vec<RawRow>> {
        let path = self.config.input_path();
        tracing::debug!("Reading input file: {}", path);

        let bytes = self
            .storage
            .read_file(path)
            .map_err(|e| self.input_read_error(e))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| self.input_read_error(e))?;

            if index < self.config.skip_rows() {
                continue;
            }

            // Completely blank rows (trailing newlines in hand-edited
            // exports) are not data.
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }

            match (record.get(0), record.get(1)) {
                (Some(full_name), Some(email)) => rows.push(RawRow {
                    full_name: full_name.to_string(),
                    email: email.to_string(),
                }),
                _ => {
                    return Err(self.input_read_error(format!(
                        "row {} has {} column(s), expected at least 2",
                        index + 1,
                        record.len()
                    )))
                }
            }
        }

        tracing::debug!("Extracted {} data rows", rows.len());
        Ok(rows)
    }

    /// Normalizes every row, then partitions out records with invalid
    /// emails, then drops repeated emails keeping the first occurrence.
    /// Survivor order is first-seen input order. Only a malformed combined
    /// name is an error; filtered records are reported, never fatal.
    fn transform(&self, rows: Vec<RawRow>) -> Result<TransformResult> {
        let original_count = rows.len();

        let mut normalized = Vec::with_capacity(rows.len());
        for row in &rows {
            normalized.push(Contact::from_raw(row)?);
        }

        let mut valid = Vec::with_capacity(normalized.len());
        let mut invalid = Vec::new();
        for contact in normalized {
            if is_valid_email(&contact.email) {
                valid.push(contact);
            } else {
                tracing::debug!("Rejecting invalid email: {}", contact.email);
                invalid.push(contact);
            }
        }

        let mut seen = HashSet::new();
        let mut contacts = Vec::with_capacity(valid.len());
        let mut duplicates = Vec::new();
        for contact in valid {
            if seen.insert(contact.email.clone()) {
                contacts.push(contact);
            } else {
                tracing::debug!("Dropping duplicate email: {}", contact.email);
                duplicates.push(contact);
            }
        }

        Ok(TransformResult {
            original_count,
            contacts,
            invalid,
            duplicates,
        })
    }

    /// Splits the cleaned sequence into fixed-size batches and writes each
    /// one as its own CSV file, 1-based index in the file name. Zero
    /// contacts means zero files. A write failure aborts, but batches
    /// already written stay on disk.
    fn load(&self, result: TransformResult) -> Result<LoadSummary> {
        let batch_size = self.config.batch_size();
        if batch_size == 0 {
            return Err(EtlError::InvalidConfigValueError {
                field: "batch_size".to_string(),
                value: batch_size.to_string(),
                reason: "Value must be at least 1".to_string(),
            });
        }
        let total_contacts = result.contacts.len();
        let mut batch_files = Vec::new();

        for (index, chunk) in result.contacts.chunks(batch_size).enumerate() {
            let file_name = format!("contactos_lote_{}.csv", index + 1);

            let mut writer = csv::Writer::from_writer(Vec::new());
            for contact in chunk {
                writer.serialize(contact).map_err(|e| EtlError::OutputWriteError {
                    path: file_name.clone(),
                    reason: e.to_string(),
                })?;
            }
            let data = writer.into_inner().map_err(|e| EtlError::OutputWriteError {
                path: file_name.clone(),
                reason: e.to_string(),
            })?;

            self.storage
                .write_file(&file_name, &data)
                .map_err(|e| EtlError::OutputWriteError {
                    path: format!("{}/{}", self.config.output_path(), file_name),
                    reason: e.to_string(),
                })?;

            tracing::info!("Batch {} saved: {} ({} records)", index + 1, file_name, chunk.len());
            println!(
                "Batch {} saved: {}/{} ({} records)",
                index + 1,
                self.config.output_path(),
                file_name,
                chunk.len()
            );
            batch_files.push(file_name);
        }

        Ok(LoadSummary {
            output_path: self.config.output_path().to_string(),
            batch_files,
            total_contacts,
        })
    }
}
