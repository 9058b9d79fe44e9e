use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("no image files found in the input folder")]
    NoImageFiles,

    #[error("no file matched the naming rule")]
    NoMatchingFiles,

    #[error("copy failed while processing group {group}: {source}")]
    Copy {
        group: u64,
        #[source]
        source: std::io::Error,
    },
}
