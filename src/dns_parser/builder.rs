use std::marker::PhantomData;

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

use super::{Error, Header, Question, ResourceRecord};

pub enum Zone {}
pub enum Prerequisites {}
pub enum Updates {}
pub enum Additional {}

pub trait MoveTo<T> {}
impl<T> MoveTo<T> for T {}

impl MoveTo<Prerequisites> for Zone {}

impl MoveTo<Updates> for Zone {}
impl MoveTo<Updates> for Prerequisites {}

impl MoveTo<Additional> for Zone {}
impl MoveTo<Additional> for Prerequisites {}
impl MoveTo<Additional> for Updates {}

/// Allows to build an update packet
///
/// Sections have to be filled in wire order: zone, prerequisites, updates
/// and additional data. The type parameter tracks the current section so
/// going back to an earlier one doesn't compile. Names are written
/// uncompressed.
pub struct Builder<S> {
    buf: Vec<u8>,
    max_size: Option<usize>,
    _state: PhantomData<S>,
}

impl Builder<Zone> {
    /// Starts a packet with the given header
    ///
    /// The section counters and the truncation flag of `header` are
    /// ignored, they are maintained by the builder.
    pub fn new(header: &Header) -> Builder<Zone> {
        let head = Header {
            truncated: false,
            questions: 0,
            answers: 0,
            nameservers: 0,
            additional: 0,
            ..*header
        };
        let mut head_buf = [0u8; Header::SIZE];
        head.write(&mut head_buf);

        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&head_buf);
        Builder {
            buf: buf,
            max_size: Some(512),
            _state: PhantomData,
        }
    }
}

impl<T> Builder<T> {
    fn write_rr(&mut self, rr: &ResourceRecord) -> Result<(), Error> {
        let header = &rr.header;
        header.name.write_to(&mut self.buf)?;
        self.buf.write_u16::<BigEndian>(header.typ.code())?;
        self.buf.write_u16::<BigEndian>(header.cls.code())?;
        self.buf.write_u32::<BigEndian>(header.ttl)?;

        let size_offset = self.buf.len();
        self.buf.write_u16::<BigEndian>(0)?;

        let data_offset = self.buf.len();
        if let Some(ref data) = rr.data {
            data.write_to(&mut self.buf)?;
        }
        let data_size = self.buf.len() - data_offset;
        if data_size > usize::from(u16::MAX) {
            return Err(Error::RdataTooLong);
        }

        BigEndian::write_u16(
            &mut self.buf[size_offset..size_offset + 2],
            data_size as u16,
        );
        Ok(())
    }

    /// Returns the final packet
    ///
    /// When packet is not truncated method returns `Ok(packet)`. If
    /// packet is larger than the maximum size the method returns
    /// `Err(packet)` with the TC bit set.
    ///
    /// A server drops a truncated update, so callers normally resend it
    /// over TCP with `set_max_size(None)`.
    pub fn build(mut self) -> Result<Vec<u8>, Vec<u8>> {
        match self.max_size {
            Some(max_size) if self.buf.len() > max_size => {
                Header::set_truncated(&mut self.buf[..Header::SIZE]);
                Err(self.buf)
            }
            _ => Ok(self.buf),
        }
    }

    pub fn move_to<U>(self) -> Builder<U>
    where
        T: MoveTo<U>,
    {
        Builder {
            buf: self.buf,
            max_size: self.max_size,
            _state: PhantomData,
        }
    }

    pub fn set_max_size(&mut self, max_size: Option<usize>) {
        self.max_size = max_size;
    }

    pub fn is_empty(&self) -> bool {
        Header::question_count(&self.buf) == 0
            && Header::answer_count(&self.buf) == 0
            && Header::nameserver_count(&self.buf) == 0
            && Header::additional_count(&self.buf) == 0
    }
}

impl<T: MoveTo<Zone>> Builder<T> {
    /// Adds an entry to the zone section
    pub fn add_zone(self, zone: &Question) -> Result<Builder<Zone>, Error> {
        let mut builder = self.move_to::<Zone>();

        zone.qname.write_to(&mut builder.buf)?;
        builder.buf.write_u16::<BigEndian>(zone.qtype.code())?;
        builder.buf.write_u16::<BigEndian>(zone.qclass.code())?;
        Header::inc_questions(&mut builder.buf).ok_or(Error::SectionOverflow)?;
        Ok(builder)
    }
}

impl<T: MoveTo<Prerequisites>> Builder<T> {
    pub fn add_prerequisite(self, rr: &ResourceRecord) -> Result<Builder<Prerequisites>, Error> {
        let mut builder = self.move_to::<Prerequisites>();

        builder.write_rr(rr)?;
        Header::inc_answers(&mut builder.buf).ok_or(Error::SectionOverflow)?;
        Ok(builder)
    }
}

impl<T: MoveTo<Updates>> Builder<T> {
    pub fn add_update(self, rr: &ResourceRecord) -> Result<Builder<Updates>, Error> {
        let mut builder = self.move_to::<Updates>();

        builder.write_rr(rr)?;
        Header::inc_nameservers(&mut builder.buf).ok_or(Error::SectionOverflow)?;
        Ok(builder)
    }
}

impl Builder<Additional> {
    pub fn add_additional(mut self, rr: &ResourceRecord) -> Result<Builder<Additional>, Error> {
        self.write_rr(rr)?;
        Header::inc_additional(&mut self.buf).ok_or(Error::SectionOverflow)?;
        Ok(self)
    }
}

#[cfg(test)]
mod test {
    use std::net::Ipv4Addr;

    use super::super::{
        Class, Message, Name, Opcode, RRData, RecordClass, RecordType, ResourceRecord, Type,
    };
    use super::*;

    fn zone() -> Question {
        Question {
            qname: Name::from_str("example.com").unwrap(),
            qtype: Type::SOA,
            qclass: Class::IN,
        }
    }

    #[test]
    fn build_zone_only() {
        let msg = Message::new(1573, Opcode::Update);
        let bld = Builder::new(&msg.header).add_zone(&zone()).unwrap();
        let result = b"\x06%\x28\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                      \x07example\x03com\x00\x00\x06\x00\x01";
        assert_eq!(&bld.build().unwrap()[..], &result[..]);
    }

    #[test]
    fn build_prerequisite_without_rdata() {
        let msg = Message::new(0, Opcode::Update);
        let prereq = ResourceRecord::empty(
            Name::from_str("host.example.com").unwrap(),
            RecordType::Any,
            RecordClass::None,
            0,
        );
        let bld = Builder::new(&msg.header)
            .add_zone(&zone())
            .unwrap()
            .add_prerequisite(&prereq)
            .unwrap();
        let result = b"\x00\x00\x28\x00\x00\x01\x00\x01\x00\x00\x00\x00\
                      \x07example\x03com\x00\x00\x06\x00\x01\
                      \x04host\x07example\x03com\x00\x00\xff\x00\xfe\
                      \x00\x00\x00\x00\x00\x00";
        assert_eq!(&bld.build().unwrap()[..], &result[..]);
    }

    #[test]
    fn counts_each_section() {
        let msg = Message::new(0, Opcode::Update);
        let rr = ResourceRecord::new(
            Name::from_str("www.example.com").unwrap(),
            Class::IN,
            300,
            RRData::A(Ipv4Addr::new(192, 0, 2, 1)),
        );
        let packet = Builder::new(&msg.header)
            .add_zone(&zone())
            .unwrap()
            .add_update(&rr)
            .unwrap()
            .move_to::<Additional>()
            .add_additional(&rr)
            .unwrap()
            .add_additional(&rr)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(Header::question_count(&packet), 1);
        assert_eq!(Header::answer_count(&packet), 0);
        assert_eq!(Header::nameserver_count(&packet), 1);
        assert_eq!(Header::additional_count(&packet), 2);
    }

    #[test]
    fn truncates_oversize_packet() {
        let msg = Message::new(0, Opcode::Update);
        let mut bld = Builder::new(&msg.header).add_zone(&zone()).unwrap();
        bld.set_max_size(Some(20));
        let packet = bld.build().unwrap_err();
        assert_eq!(packet[2] & 0x02, 0x02);
    }

    #[test]
    fn rdata_over_length_limit() {
        let msg = Message::new(0, Opcode::Update);
        let rr = ResourceRecord::new(
            Name::from_str("big.example.com").unwrap(),
            Class::IN,
            0,
            RRData::TXT(vec![0; 70000]),
        );
        let result = Builder::new(&msg.header)
            .add_zone(&zone())
            .unwrap()
            .add_update(&rr);
        assert!(matches!(result, Err(Error::RdataTooLong)));
    }

    #[test]
    fn section_counter_overflow() {
        let msg = Message::new(0, Opcode::Update);
        let prereq = ResourceRecord::empty(Name::root(), RecordType::Any, RecordClass::Any, 0);
        let mut bld = Builder::new(&msg.header).move_to::<Prerequisites>();
        bld.set_max_size(None);
        for _ in 0..u16::MAX {
            bld = bld.add_prerequisite(&prereq).unwrap();
        }
        assert!(matches!(
            bld.add_prerequisite(&prereq),
            Err(Error::SectionOverflow)
        ));
    }

    #[test]
    fn empty_builder() {
        let msg = Message::new(0, Opcode::Update);
        assert!(Builder::new(&msg.header).is_empty());
    }
}
