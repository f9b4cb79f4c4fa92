//! Construction of DNS dynamic update messages (RFC 2136)
//!
//! ```
//! use std::net::Ipv4Addr;
//!
//! use dnsupdate::dns_parser::{Class, Name, RRData, ResourceRecord};
//! use dnsupdate::UpdateMessage;
//!
//! let mut update = UpdateMessage::new(Name::from_str("example.com")?, Class::IN);
//! update.name_is_not_in_use(vec![ResourceRecord::new(
//!     Name::from_str("host.example.com")?,
//!     Class::IN,
//!     300,
//!     RRData::A(Ipv4Addr::new(192, 0, 2, 10)),
//! )]);
//! let packet = update.to_wire()?;
//! assert_eq!(packet[2] >> 3, 5);
//! # Ok::<(), dnsupdate::dns_parser::Error>(())
//! ```

pub mod dns_parser;
pub mod prerequisite;
mod update;

pub use crate::dns_parser::Error;
pub use crate::update::UpdateMessage;
