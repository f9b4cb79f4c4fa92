use rand::random;

use super::{Class, Header, Name, Opcode, RRData, RecordClass, RecordType, ResponseCode, Type};

/// A DNS message with its four sections
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub nameservers: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

/// A chunk of data in the Query section of the packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub qname: Name,
    pub qtype: Type,
    pub qclass: Class,
}

/// The fixed part of a resource record preceding RDATA
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RrHeader {
    pub name: Name,
    pub typ: RecordType,
    pub cls: RecordClass,
    pub ttl: u32,
}

/// A single DNS record
///
/// `data` is `None` for records sent with an empty RDATA, which RFC 2136
/// uses for most prerequisites and for RRset deletions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub header: RrHeader,
    pub data: Option<RRData>,
}

/// Header-level access to a resource record
///
/// The record payload stays opaque, it can only be handed over whole with
/// `into_parts`.
pub trait Record {
    fn header(&self) -> &RrHeader;

    fn header_mut(&mut self) -> &mut RrHeader;

    fn into_parts(self) -> (RrHeader, Option<RRData>);

    fn name(&self) -> &Name {
        &self.header().name
    }
}

impl Message {
    /// Creates an empty query with the given opcode
    pub fn new(id: u16, opcode: Opcode) -> Message {
        Message {
            header: Header {
                id: id,
                query: true,
                opcode: opcode,
                authoritative: false,
                truncated: false,
                recursion_desired: false,
                recursion_available: false,
                response_code: ResponseCode::NoError,
                questions: 0,
                answers: 0,
                nameservers: 0,
                additional: 0,
            },
            questions: Vec::new(),
            answers: Vec::new(),
            nameservers: Vec::new(),
            additional: Vec::new(),
        }
    }

    /// Same as `new` with a random id
    pub fn with_random_id(opcode: Opcode) -> Message {
        Message::new(random(), opcode)
    }
}

impl ResourceRecord {
    /// A record holding data, the type is taken from `data`
    pub fn new(name: Name, cls: Class, ttl: u32, data: RRData) -> ResourceRecord {
        ResourceRecord {
            header: RrHeader {
                name: name,
                typ: RecordType::Type(data.typ()),
                cls: RecordClass::Class(cls),
                ttl: ttl,
            },
            data: Some(data),
        }
    }

    /// A record with no RDATA
    pub fn empty(name: Name, typ: RecordType, cls: RecordClass, ttl: u32) -> ResourceRecord {
        ResourceRecord {
            header: RrHeader {
                name: name,
                typ: typ,
                cls: cls,
                ttl: ttl,
            },
            data: None,
        }
    }

    /// Returns true when the class or type is an RFC 2136 meta value
    pub fn has_meta_value(&self) -> bool {
        self.header.typ.is_meta() || self.header.cls.is_meta()
    }
}

impl Record for ResourceRecord {
    fn header(&self) -> &RrHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut RrHeader {
        &mut self.header
    }

    fn into_parts(self) -> (RrHeader, Option<RRData>) {
        (self.header, self.data)
    }
}
