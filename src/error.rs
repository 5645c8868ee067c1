use std::path::PathBuf;
use thiserror::Error;

pub type ScanResult<T> = Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl ScanError {
    /// True for failures raised while opening or reading the file itself
    /// (missing, locked, permission denied), as opposed to its contents.
    pub fn is_io(&self) -> bool {
        matches!(self, ScanError::Io(_) | ScanError::FileNotFound(_))
    }
}

impl From<calamine::Error> for ScanError {
    fn from(err: calamine::Error) -> Self {
        use calamine::{Error, OdsError, XlsError, XlsbError, XlsxError};

        match err {
            Error::Io(e)
            | Error::Xlsx(XlsxError::Io(e))
            | Error::Xlsb(XlsbError::Io(e))
            | Error::Xls(XlsError::Io(e))
            | Error::Ods(OdsError::Io(e)) => ScanError::Io(e),
            other => ScanError::Workbook(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn locked() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "locked")
    }

    #[test]
    fn test_calamine_io_maps_to_io() {
        let errors = [
            ("plain", calamine::Error::Io(locked())),
            ("xlsx", calamine::Error::Xlsx(calamine::XlsxError::Io(locked()))),
            ("xlsb", calamine::Error::Xlsb(calamine::XlsbError::Io(locked()))),
            ("xls", calamine::Error::Xls(calamine::XlsError::Io(locked()))),
            ("ods", calamine::Error::Ods(calamine::OdsError::Io(locked()))),
        ];

        for (kind, err) in errors {
            let scan_err: ScanError = err.into();
            assert!(scan_err.is_io(), "{kind}: expected IO error, got {scan_err:?}");
            assert_eq!(scan_err.to_string(), "IO error: locked", "{kind}");
        }
    }

    #[test]
    fn test_calamine_msg_maps_to_workbook() {
        let err = calamine::Error::Msg("Cannot detect file format");
        let scan_err: ScanError = err.into();
        assert!(!scan_err.is_io());
        assert!(matches!(scan_err, ScanError::Workbook(_)));
    }

    #[test]
    fn test_file_not_found_display() {
        let err = ScanError::FileNotFound(PathBuf::from("missing.xlsx"));
        assert_eq!(err.to_string(), "File not found: missing.xlsx");
    }
}
