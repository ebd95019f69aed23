use crate::config::toml_config::OutputFilenames;
use crate::core::service::{ExportFormat, ExportService};
use crate::domain::model::parse_employees;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// 讀取員工 JSON、產生各格式並交給 storage 寫出
pub struct ExportEngine<S: Storage> {
    storage: S,
    service: ExportService,
    filenames: OutputFilenames,
}

impl<S: Storage> ExportEngine<S> {
    pub fn new(storage: S, service: ExportService, filenames: OutputFilenames) -> Self {
        Self {
            storage,
            service,
            filenames,
        }
    }

    pub fn run(&self, input: &[u8], formats: &[ExportFormat]) -> Result<Vec<String>> {
        tracing::info!("Starting employee export");

        let employees = parse_employees(input)?;
        tracing::info!("Decoded {} employees", employees.len());

        let mut written = Vec::with_capacity(formats.len());
        for &format in formats {
            let data = self.service.generate(format, &employees)?;
            let path = self
                .storage
                .write_file(self.filenames.for_format(format), &data)?;
            tracing::info!("Wrote {:?} export ({} bytes) to {}", format, data.len(), path);
            written.push(path);
        }

        Ok(written)
    }
}
