//! Prerequisite encoding, RFC 2136 section 2.4
//!
//! Every prerequisite is an ordinary resource record whose CLASS, TYPE and
//! RDATA carry the meaning (RFC 2136 3.2.4):
//!
//! ```text
//!   CLASS    TYPE     RDATA    Meaning
//!   ------------------------------------------------------------
//!   ANY      ANY      empty    Name is in use
//!   ANY      rrset    empty    RRset exists (value independent)
//!   NONE     ANY      empty    Name is not in use
//!   NONE     rrset    empty    RRset does not exist
//!   zone     rrset    rr       RRset exists (value dependent)
//! ```
//!
//! TTL is always zero. The free functions turn one record into its
//! prerequisite form, the `UpdateMessage` methods replace the whole
//! prerequisite section.

use log::debug;

use crate::dns_parser::{Class, Error, Record, RecordClass, RecordType, ResourceRecord};
use crate::update::UpdateMessage;

/// "Name is in use", RFC 2136 2.4.4
pub fn name_is_in_use<R: Record>(rr: &R) -> ResourceRecord {
    ResourceRecord::empty(rr.name().clone(), RecordType::Any, RecordClass::Any, 0)
}

/// "Name is not in use", RFC 2136 2.4.5
pub fn name_is_not_in_use<R: Record>(rr: &R) -> ResourceRecord {
    ResourceRecord::empty(rr.name().clone(), RecordType::Any, RecordClass::None, 0)
}

/// "RRset exists (value independent)", RFC 2136 2.4.1
///
/// Keeps owner name and type, the data is dropped. A record of type ANY
/// turns into "name is in use".
pub fn rrset_exists<R: Record>(rr: R) -> ResourceRecord {
    without_rdata(rr, RecordClass::Any)
}

/// "RRset exists (value dependent)", RFC 2136 2.4.2
///
/// The record keeps its data, its class becomes the class of the zone.
pub fn rrset_exists_with_value<R: Record>(rr: R, zone_class: Class) -> ResourceRecord {
    let (mut header, data) = rr.into_parts();
    header.cls = RecordClass::Class(zone_class);
    header.ttl = 0;
    ResourceRecord {
        header: header,
        data: data,
    }
}

/// "RRset does not exist", RFC 2136 2.4.3
///
/// Keeps owner name and type, the data is dropped. A record of type ANY
/// turns into "name is not in use".
pub fn rrset_does_not_exist<R: Record>(rr: R) -> ResourceRecord {
    without_rdata(rr, RecordClass::None)
}

fn without_rdata<R: Record>(rr: R, cls: RecordClass) -> ResourceRecord {
    let (mut header, _) = rr.into_parts();
    if header.typ.is_meta() {
        debug!(
            "{} with type {} encodes a name prerequisite, not an RRset one",
            header.name, header.typ
        );
    }
    header.cls = cls;
    header.ttl = 0;
    ResourceRecord {
        header: header,
        data: None,
    }
}

/// Each method replaces the prerequisite section with one prerequisite
/// per given record, in the same order.
impl UpdateMessage {
    pub fn name_is_in_use<I, R>(&mut self, records: I)
    where
        I: IntoIterator<Item = R>,
        R: Record,
    {
        self.set_prerequisites(records.into_iter().map(|rr| name_is_in_use(&rr)));
    }

    pub fn name_is_not_in_use<I, R>(&mut self, records: I)
    where
        I: IntoIterator<Item = R>,
        R: Record,
    {
        self.set_prerequisites(records.into_iter().map(|rr| name_is_not_in_use(&rr)));
    }

    pub fn rrset_exists<I, R>(&mut self, records: I)
    where
        I: IntoIterator<Item = R>,
        R: Record,
    {
        self.set_prerequisites(records.into_iter().map(rrset_exists));
    }

    /// Fails with `Error::ZoneNotInitialized` when the zone section is
    /// empty, the prerequisites are left untouched then.
    pub fn rrset_exists_with_value<I, R>(&mut self, records: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = R>,
        R: Record,
    {
        let zone_class = self.zone_class().ok_or(Error::ZoneNotInitialized)?;
        self.set_prerequisites(
            records
                .into_iter()
                .map(|rr| rrset_exists_with_value(rr, zone_class)),
        );
        Ok(())
    }

    pub fn rrset_does_not_exist<I, R>(&mut self, records: I)
    where
        I: IntoIterator<Item = R>,
        R: Record,
    {
        self.set_prerequisites(records.into_iter().map(rrset_does_not_exist));
    }

    fn set_prerequisites<I>(&mut self, prerequisites: I)
    where
        I: Iterator<Item = ResourceRecord>,
    {
        self.msg.answers = prerequisites.collect();
        debug!(
            "update {}: {} prerequisites set",
            self.msg.header.id,
            self.msg.answers.len()
        );
    }
}
