use crate::core::Pipeline;
use crate::domain::model::LoadSummary;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load to completion, printing the
    /// operator report between stages. Any stage error aborts the run;
    /// batches already written stay on disk.
    pub fn run(&self) -> Result<LoadSummary> {
        tracing::info!("Starting contact cleaning pipeline");

        let raw_rows = self.pipeline.extract()?;
        println!("Original records: {}", raw_rows.len());

        let result = self.pipeline.transform(raw_rows)?;

        if !result.invalid.is_empty() {
            println!("\nInvalid emails found:");
            for contact in &result.invalid {
                println!(
                    "  {} ({}, {})",
                    contact.email, contact.last_name, contact.first_name
                );
            }
        }

        if !result.duplicates.is_empty() {
            println!("\nDuplicate emails found (first occurrence kept):");
            for contact in &result.duplicates {
                println!(
                    "  {} ({}, {})",
                    contact.email, contact.last_name, contact.first_name
                );
            }
        }

        println!("\nRecords after cleaning: {}", result.contacts.len());

        let summary = self.pipeline.load(result)?;
        tracing::info!(
            "Pipeline finished: {} contacts in {} batch file(s)",
            summary.total_contacts,
            summary.batch_files.len()
        );
        Ok(summary)
    }
}
