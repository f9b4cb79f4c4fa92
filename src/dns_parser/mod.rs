//! The generic DNS message layer: names, record data, headers and the wire
//! builder

mod builder;
mod enums;
mod error;
mod header;
mod name;
mod rrdata;
mod structs;

pub use self::builder::{Additional, Builder, MoveTo, Prerequisites, Updates, Zone};
pub use self::enums::{Class, Opcode, RecordClass, RecordType, ResponseCode, Type};
pub use self::error::Error;
pub use self::header::Header;
pub use self::name::Name;
pub use self::rrdata::RRData;
pub use self::structs::{Message, Question, Record, ResourceRecord, RrHeader};
