use std::io;

use thiserror::Error;

/// Error building a DNS message
#[derive(Debug, Error)]
pub enum Error {
    #[error("zone section is empty")]
    ZoneNotInitialized,
    #[error("meta class or type can't be used as record data")]
    MetaValueInSection,
    #[error("type {0} is invalid")]
    InvalidType(u16),
    #[error("class {0} is invalid")]
    InvalidClass(u16),
    #[error("domain name has an empty label")]
    EmptyLabel,
    #[error("label in domain name is longer than 63 bytes")]
    LabelTooLong,
    #[error("domain name is longer than 255 bytes")]
    NameTooLong,
    #[error("invalid characters encountered while reading label")]
    LabelIsNotAscii,
    #[error("record data is longer than 65535 bytes")]
    RdataTooLong,
    #[error("section has more than 65535 entries")]
    SectionOverflow,
    #[error("message of {size} bytes exceeds the limit of {max_size} bytes")]
    Truncated { size: usize, max_size: usize },
    #[error("writing packet failed")]
    Io(#[from] io::Error),
}
