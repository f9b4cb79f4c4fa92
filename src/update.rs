use log::trace;

use crate::dns_parser::{
    self, Class, Error, Header, Message, Name, Opcode, Question, ResourceRecord, Type,
};

/// A DNS dynamic update message (RFC 2136)
///
/// The generic message sections are relabeled: the question section holds
/// the zone, answers are prerequisites, the authority section carries the
/// updates and the additional section stays as it is.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateMessage {
    pub(crate) msg: Message,
    max_size: Option<usize>,
}

impl UpdateMessage {
    /// Creates an update for `zone` with a random message id
    ///
    /// The zone section gets a single `zone SOA class` entry.
    pub fn new(zone: Name, class: Class) -> UpdateMessage {
        UpdateMessage::from_zone(Message::with_random_id(Opcode::Update), zone, class)
    }

    pub fn with_id(id: u16, zone: Name, class: Class) -> UpdateMessage {
        UpdateMessage::from_zone(Message::new(id, Opcode::Update), zone, class)
    }

    fn from_zone(mut msg: Message, zone: Name, class: Class) -> UpdateMessage {
        trace!("new update for zone {} class {:?}", zone, class);
        msg.questions.push(Question {
            qname: zone,
            qtype: Type::SOA,
            qclass: class,
        });
        UpdateMessage::from_message(msg)
    }

    /// Treats an existing message as an update
    ///
    /// The opcode is set to UPDATE, the sections are kept as they are.
    pub fn from_message(mut msg: Message) -> UpdateMessage {
        msg.header.opcode = Opcode::Update;
        UpdateMessage {
            msg: msg,
            max_size: Some(512),
        }
    }

    pub fn into_message(self) -> Message {
        self.msg
    }

    pub fn message(&self) -> &Message {
        &self.msg
    }

    pub fn header(&self) -> &Header {
        &self.msg.header
    }

    pub fn id(&self) -> u16 {
        self.msg.header.id
    }

    pub fn zone(&self) -> &[Question] {
        &self.msg.questions
    }

    /// Class of the first zone entry, `None` for an empty zone section
    pub fn zone_class(&self) -> Option<Class> {
        self.msg.questions.first().map(|zone| zone.qclass)
    }

    pub fn prerequisites(&self) -> &[ResourceRecord] {
        &self.msg.answers
    }

    pub fn updates(&self) -> &[ResourceRecord] {
        &self.msg.nameservers
    }

    pub fn additional(&self) -> &[ResourceRecord] {
        &self.msg.additional
    }

    /// Appends a record to the update section verbatim
    ///
    /// Records with a meta class or type are refused.
    pub fn push_update(&mut self, rr: ResourceRecord) -> Result<(), Error> {
        if rr.has_meta_value() {
            return Err(Error::MetaValueInSection);
        }
        self.msg.nameservers.push(rr);
        Ok(())
    }

    /// Appends a record to the additional section verbatim
    ///
    /// Records with a meta class or type are refused.
    pub fn push_additional(&mut self, rr: ResourceRecord) -> Result<(), Error> {
        if rr.has_meta_value() {
            return Err(Error::MetaValueInSection);
        }
        self.msg.additional.push(rr);
        Ok(())
    }

    /// Limit for `to_wire`, 512 by default. Use `None` for TCP.
    pub fn set_max_size(&mut self, max_size: Option<usize>) {
        self.max_size = max_size;
    }

    /// Encodes the message in wire format
    ///
    /// An update can't be truncated, a message over the size limit is
    /// reported as `Error::Truncated`.
    pub fn to_wire(&self) -> Result<Vec<u8>, Error> {
        let mut builder = dns_parser::Builder::new(&self.msg.header);
        builder.set_max_size(self.max_size);
        for zone in &self.msg.questions {
            builder = builder.add_zone(zone)?;
        }
        let mut builder = builder.move_to::<dns_parser::Prerequisites>();
        for rr in &self.msg.answers {
            builder = builder.add_prerequisite(rr)?;
        }
        let mut builder = builder.move_to::<dns_parser::Updates>();
        for rr in &self.msg.nameservers {
            builder = builder.add_update(rr)?;
        }
        let mut builder = builder.move_to::<dns_parser::Additional>();
        for rr in &self.msg.additional {
            builder = builder.add_additional(rr)?;
        }

        match builder.build() {
            Ok(packet) => {
                trace!("encoded update {} in {} bytes", self.id(), packet.len());
                Ok(packet)
            }
            Err(packet) => Err(Error::Truncated {
                size: packet.len(),
                max_size: self.max_size.unwrap_or(packet.len()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;
    use crate::dns_parser::{RRData, RecordClass, RecordType};

    fn example_com() -> Name {
        Name::from_str("example.com").unwrap()
    }

    fn a_record(name: &str, ttl: u32) -> ResourceRecord {
        ResourceRecord::new(
            Name::from_str(name.to_owned()).unwrap(),
            Class::IN,
            ttl,
            RRData::A(Ipv4Addr::new(192, 0, 2, 1)),
        )
    }

    #[test]
    fn zone_shape() {
        for &class in [Class::IN, Class::CH, Class::HS].iter() {
            let update = UpdateMessage::new(example_com(), class);
            assert_eq!(update.header().opcode, Opcode::Update);
            assert!(update.header().query);
            assert_eq!(
                update.zone(),
                &[Question {
                    qname: example_com(),
                    qtype: Type::SOA,
                    qclass: class,
                }][..]
            );
            assert_eq!(update.zone_class(), Some(class));
            assert!(update.prerequisites().is_empty());
            assert!(update.updates().is_empty());
            assert!(update.additional().is_empty());
        }
    }

    #[test]
    fn zone_from_class_code() {
        let update = UpdateMessage::with_id(7, example_com(), Class::parse(3).unwrap());
        assert_eq!(update.id(), 7);
        assert_eq!(update.zone_class(), Some(Class::CH));
    }

    #[test]
    fn from_message_sets_opcode() {
        let msg = Message::new(1, Opcode::StandardQuery);
        let update = UpdateMessage::from_message(msg);
        assert_eq!(update.header().opcode, Opcode::Update);
        assert!(update.zone().is_empty());
        assert_eq!(update.zone_class(), None);
    }

    #[test]
    fn push_sections() {
        let mut update = UpdateMessage::new(example_com(), Class::IN);
        update.push_update(a_record("www.example.com", 300)).unwrap();
        update
            .push_additional(a_record("ns.example.com", 3600))
            .unwrap();
        assert_eq!(update.updates(), &[a_record("www.example.com", 300)][..]);
        assert_eq!(
            update.additional(),
            &[a_record("ns.example.com", 3600)][..]
        );
    }

    #[test]
    fn push_refuses_meta_values() {
        let mut update = UpdateMessage::new(example_com(), Class::IN);
        let any_class = ResourceRecord::empty(
            Name::from_str("www.example.com").unwrap(),
            RecordType::Type(Type::A),
            RecordClass::Any,
            0,
        );
        let any_type = ResourceRecord::empty(
            Name::from_str("www.example.com").unwrap(),
            RecordType::Any,
            RecordClass::Class(Class::IN),
            0,
        );
        assert!(matches!(
            update.push_update(any_class.clone()),
            Err(Error::MetaValueInSection)
        ));
        assert!(matches!(
            update.push_additional(any_class),
            Err(Error::MetaValueInSection)
        ));
        assert!(matches!(
            update.push_update(any_type),
            Err(Error::MetaValueInSection)
        ));
        assert!(update.updates().is_empty());
        assert!(update.additional().is_empty());
    }

    #[test]
    fn to_wire() {
        let mut update = UpdateMessage::with_id(0xbeef, example_com(), Class::IN);
        update.push_update(a_record("www.example.com", 300)).unwrap();
        let packet = update.to_wire().unwrap();
        let result = b"\xbe\xef\x28\x00\x00\x01\x00\x00\x00\x01\x00\x00\
                      \x07example\x03com\x00\x00\x06\x00\x01\
                      \x03www\x07example\x03com\x00\x00\x01\x00\x01\
                      \x00\x00\x01\x2c\x00\x04\xc0\x00\x02\x01";
        assert_eq!(&packet[..], &result[..]);
    }

    #[test]
    fn to_wire_over_limit() {
        let mut update = UpdateMessage::new(example_com(), Class::IN);
        for _ in 0..40 {
            update.push_update(a_record("www.example.com", 300)).unwrap();
        }
        match update.to_wire() {
            Err(Error::Truncated { size, max_size }) => {
                assert_eq!(max_size, 512);
                assert!(size > 512);
            }
            other => panic!("expected truncation, got {:?}", other),
        }

        update.set_max_size(None);
        assert!(update.to_wire().unwrap().len() > 512);
    }
}
