use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("No CSV files found in '{dir}'")]
    NoInputFiles { dir: String },

    #[error("Required column '{column}' missing from every input file")]
    MissingColumn { column: &'static str },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No listings left after cleaning, nothing to aggregate")]
    EmptyDataset,

    #[error("Failed to render '{artifact}': {message}")]
    Render { artifact: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl EtlError {
    /// Documented exit-code contract: config=1, data source=2,
    /// empty dataset=3, render=4.
    pub fn exit_code(&self) -> i32 {
        match self {
            EtlError::Config { .. } => 1,
            EtlError::NoInputFiles { .. }
            | EtlError::MissingColumn { .. }
            | EtlError::Csv(_)
            | EtlError::Io(_) => 2,
            EtlError::EmptyDataset => 3,
            EtlError::Render { .. } => 4,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::NoInputFiles { .. } => {
                "Check that the input folder exists and contains .csv listing files"
            }
            EtlError::MissingColumn { .. } => {
                "Input files need 'Price' and 'SquareMeters' header columns (case-sensitive)"
            }
            EtlError::Csv(_) | EtlError::Io(_) => {
                "Verify the input files are readable, well-formed CSV"
            }
            EtlError::EmptyDataset => {
                "Every row was dropped during cleaning; check that Price and SquareMeters hold numbers"
            }
            EtlError::Render { .. } => {
                "Check write permissions and free space in the output directory"
            }
            EtlError::Config { .. } => "Review the command-line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_the_documented_contract() {
        let no_files = EtlError::NoInputFiles { dir: "input".into() };
        assert_eq!(no_files.exit_code(), 2);
        assert_eq!(EtlError::MissingColumn { column: "Price" }.exit_code(), 2);
        assert_eq!(EtlError::EmptyDataset.exit_code(), 3);
        let render = EtlError::Render {
            artifact: "price_vs_sqm.png".into(),
            message: "disk full".into(),
        };
        assert_eq!(render.exit_code(), 4);
        assert_eq!(EtlError::Config { message: "empty path".into() }.exit_code(), 1);
    }
}
