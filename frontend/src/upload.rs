use crate::error::UploadError;

pub fn is_csv(file_name: &str, mime_type: &str) -> bool {
    mime_type == "text/csv" || file_name.ends_with(".csv")
}

/// Busy flag for the CSV import. Files are checked before anything is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadGuard {
    busy: bool,
}

impl UploadGuard {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn begin(self, file_name: &str, mime_type: &str) -> Result<UploadGuard, UploadError> {
        if self.busy {
            return Err(UploadError::Busy);
        }
        if !is_csv(file_name, mime_type) {
            return Err(UploadError::NotCsv(file_name.to_string()));
        }
        Ok(UploadGuard { busy: true })
    }

    pub fn finish(self) -> UploadGuard {
        UploadGuard { busy: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_file_is_rejected_before_upload() {
        let guard = UploadGuard::default();
        assert_eq!(
            guard.begin("data.txt", "text/plain"),
            Err(UploadError::NotCsv("data.txt".to_string()))
        );
        assert!(!guard.is_busy());
    }

    #[test]
    fn csv_is_accepted_by_name_or_mime() {
        assert!(UploadGuard::default().begin("data.csv", "").unwrap().is_busy());
        assert!(UploadGuard::default().begin("export", "text/csv").is_ok());
    }

    #[test]
    fn second_upload_waits_for_the_first() {
        let busy = UploadGuard::default().begin("a.csv", "text/csv").unwrap();
        assert_eq!(busy.begin("b.csv", "text/csv"), Err(UploadError::Busy));
        assert!(busy.finish().begin("b.csv", "text/csv").is_ok());
    }
}
