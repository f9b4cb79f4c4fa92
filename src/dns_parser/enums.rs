use std::fmt;

use super::Error;

/// The TYPE value of a resource record holding real data
///
/// The meta type ANY is not part of this enumeration, see [`RecordType`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Type {
    /// a host address
    A,
    /// an authoritative name server
    NS,
    /// the canonical name for an alias
    CNAME,
    /// marks the start of a zone of authority
    SOA,
    /// a null RR (EXPERIMENTAL)
    NULL,
    /// a domain name pointer
    PTR,
    /// host information
    HINFO,
    /// mail exchange
    MX,
    /// text strings
    TXT,
    /// IPv6 address
    AAAA,
    /// service record
    SRV,
    /// delegation name
    DNAME,
    /// certification authority restriction
    CAA,
    /// any other type code, written as `TYPE<code>`
    Unknown(u16),
}

/// The CLASS value of a resource record holding real data
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Class {
    /// the Internet
    IN,
    /// the CSNET class (Obsolete - used only for examples in some obsolete
    /// RFCs)
    CS,
    /// the CHAOS class
    CH,
    /// Hesiod [Dyer 87]
    HS,
    /// any other class code, written as `CLASS<code>`
    Unknown(u16),
}

/// The TYPE field as it appears in a record header
///
/// RFC 2136 reuses the query type ANY as a record type inside the
/// prerequisite and update sections.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum RecordType {
    Type(Type),
    Any,
}

/// The CLASS field as it appears in a record header
///
/// `Any` and `None` are the RFC 2136 meta classes. They never denote
/// real zone data.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum RecordClass {
    Class(Class),
    None,
    Any,
}

/// The OPCODE value according to RFC 1035 and RFC 2136
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Opcode {
    StandardQuery,
    InverseQuery,
    ServerStatusRequest,
    Notify,
    Update,
    Reserved(u8),
}

/// The RCODE value according to RFC 1035 and RFC 2136
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    /// some name that ought not to exist, does exist
    YXDomain,
    /// some RRset that ought not to exist, does exist
    YXRRSet,
    /// some RRset that ought to exist, does not exist
    NXRRSet,
    /// the server is not authoritative for the zone named in the zone
    /// section
    NotAuth,
    /// a name used in the prerequisite or update section is not within
    /// the zone denoted by the zone section
    NotZone,
    Reserved(u8),
}

const TYPE_ANY: u16 = 255;
const CLASS_NONE: u16 = 254;
const CLASS_ANY: u16 = 255;

impl Type {
    /// Parse a type code
    ///
    /// Codes without a variant become `Unknown`. Zero and the meta type
    /// ANY are rejected.
    pub fn parse(code: u16) -> Result<Type, Error> {
        use self::Type::*;
        match code {
            1 => Ok(A),
            2 => Ok(NS),
            5 => Ok(CNAME),
            6 => Ok(SOA),
            10 => Ok(NULL),
            12 => Ok(PTR),
            13 => Ok(HINFO),
            15 => Ok(MX),
            16 => Ok(TXT),
            28 => Ok(AAAA),
            33 => Ok(SRV),
            39 => Ok(DNAME),
            257 => Ok(CAA),
            0 | TYPE_ANY => Err(Error::InvalidType(code)),
            x => Ok(Unknown(x)),
        }
    }

    pub fn code(self) -> u16 {
        use self::Type::*;
        match self {
            A => 1,
            NS => 2,
            CNAME => 5,
            SOA => 6,
            NULL => 10,
            PTR => 12,
            HINFO => 13,
            MX => 15,
            TXT => 16,
            AAAA => 28,
            SRV => 33,
            DNAME => 39,
            CAA => 257,
            Unknown(x) => x,
        }
    }
}

impl Class {
    /// Parse a class code
    ///
    /// Codes without a variant become `Unknown`. Zero and the meta classes
    /// ANY and NONE are rejected, they can't name the class of a zone.
    pub fn parse(code: u16) -> Result<Class, Error> {
        use self::Class::*;
        match code {
            1 => Ok(IN),
            2 => Ok(CS),
            3 => Ok(CH),
            4 => Ok(HS),
            0 | CLASS_NONE | CLASS_ANY => Err(Error::InvalidClass(code)),
            x => Ok(Unknown(x)),
        }
    }

    pub fn code(self) -> u16 {
        use self::Class::*;
        match self {
            IN => 1,
            CS => 2,
            CH => 3,
            HS => 4,
            Unknown(x) => x,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Type::Unknown(code) => write!(fmt, "TYPE{}", code),
            t => write!(fmt, "{:?}", t),
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Class::Unknown(code) => write!(fmt, "CLASS{}", code),
            c => write!(fmt, "{:?}", c),
        }
    }
}

impl RecordType {
    pub fn code(self) -> u16 {
        match self {
            RecordType::Type(t) => t.code(),
            RecordType::Any => TYPE_ANY,
        }
    }

    /// Also true for an `Unknown` type carrying the ANY code
    pub fn is_meta(self) -> bool {
        self.code() == TYPE_ANY
    }
}

impl RecordClass {
    pub fn code(self) -> u16 {
        match self {
            RecordClass::Class(c) => c.code(),
            RecordClass::None => CLASS_NONE,
            RecordClass::Any => CLASS_ANY,
        }
    }

    /// Also true for an `Unknown` class carrying the ANY or NONE code
    pub fn is_meta(self) -> bool {
        match self.code() {
            CLASS_NONE | CLASS_ANY => true,
            _ => false,
        }
    }
}

impl From<Type> for RecordType {
    fn from(typ: Type) -> RecordType {
        RecordType::Type(typ)
    }
}

impl From<Class> for RecordClass {
    fn from(cls: Class) -> RecordClass {
        RecordClass::Class(cls)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordType::Type(t) => fmt::Display::fmt(&t, fmt),
            RecordType::Any => fmt.write_str("ANY"),
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordClass::Class(c) => fmt::Display::fmt(&c, fmt),
            RecordClass::None => fmt.write_str("NONE"),
            RecordClass::Any => fmt.write_str("ANY"),
        }
    }
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Opcode {
        use self::Opcode::*;
        match code {
            0 => StandardQuery,
            1 => InverseQuery,
            2 => ServerStatusRequest,
            4 => Notify,
            5 => Update,
            x => Reserved(x),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> u8 {
        use self::Opcode::*;
        match op {
            StandardQuery => 0,
            InverseQuery => 1,
            ServerStatusRequest => 2,
            Notify => 4,
            Update => 5,
            Reserved(x) => x,
        }
    }
}

impl From<u8> for ResponseCode {
    fn from(code: u8) -> ResponseCode {
        use self::ResponseCode::*;
        match code {
            0 => NoError,
            1 => FormatError,
            2 => ServerFailure,
            3 => NameError,
            4 => NotImplemented,
            5 => Refused,
            6 => YXDomain,
            7 => YXRRSet,
            8 => NXRRSet,
            9 => NotAuth,
            10 => NotZone,
            x => Reserved(x),
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(r: ResponseCode) -> u8 {
        use self::ResponseCode::*;
        match r {
            NoError => 0,
            FormatError => 1,
            ServerFailure => 2,
            NameError => 3,
            NotImplemented => 4,
            Refused => 5,
            YXDomain => 6,
            YXRRSet => 7,
            NXRRSet => 8,
            NotAuth => 9,
            NotZone => 10,
            Reserved(x) => x,
        }
    }
}
