use std::io;
use std::net::{Ipv4Addr, Ipv6Addr};

use byteorder::{BigEndian, WriteBytesExt};

use super::{Name, Type};

/// The enumeration that represents known types of DNS resource records data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RRData {
    CNAME(Name),
    NS(Name),
    PTR(Name),
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: Name,
    },
    MX {
        preference: u16,
        exchange: Name,
    },
    SOA {
        primary_ns: Name,
        mailbox: Name,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum_ttl: u32,
    },
    /// Already encoded character-strings
    TXT(Vec<u8>),
    // Anything that we have no structure for
    Unknown {
        typ: Type,
        data: Vec<u8>,
    },
}

impl RRData {
    pub fn typ(&self) -> Type {
        match *self {
            RRData::CNAME(..) => Type::CNAME,
            RRData::NS(..) => Type::NS,
            RRData::PTR(..) => Type::PTR,
            RRData::A(..) => Type::A,
            RRData::AAAA(..) => Type::AAAA,
            RRData::SRV { .. } => Type::SRV,
            RRData::MX { .. } => Type::MX,
            RRData::SOA { .. } => Type::SOA,
            RRData::TXT(..) => Type::TXT,
            RRData::Unknown { typ, .. } => typ,
        }
    }

    /// Builds TXT data from a list of strings
    ///
    /// Each entry becomes one length-prefixed character-string, entries
    /// longer than 255 bytes are cut.
    pub fn txt<S: AsRef<str>>(entries: &[S]) -> RRData {
        let mut data = Vec::new();
        for entry in entries {
            let entry = entry.as_ref().as_bytes();
            let entry = &entry[..entry.len().min(255)];
            data.push(entry.len() as u8);
            data.extend_from_slice(entry);
        }
        RRData::TXT(data)
    }

    pub fn write_to<T: io::Write>(&self, writer: &mut T) -> io::Result<()> {
        match *self {
            RRData::CNAME(ref name) | RRData::NS(ref name) | RRData::PTR(ref name) => {
                name.write_to(writer)
            }

            RRData::A(ip) => writer.write_u32::<BigEndian>(ip.into()),

            RRData::AAAA(ip) => {
                for segment in ip.segments().iter() {
                    writer.write_u16::<BigEndian>(*segment)?;
                }
                Ok(())
            }
            RRData::SRV {
                priority,
                weight,
                port,
                ref target,
            } => {
                writer.write_u16::<BigEndian>(priority)?;
                writer.write_u16::<BigEndian>(weight)?;
                writer.write_u16::<BigEndian>(port)?;
                target.write_to(writer)
            }
            RRData::MX {
                preference,
                ref exchange,
            } => {
                writer.write_u16::<BigEndian>(preference)?;
                exchange.write_to(writer)
            }
            RRData::SOA {
                ref primary_ns,
                ref mailbox,
                serial,
                refresh,
                retry,
                expire,
                minimum_ttl,
            } => {
                primary_ns.write_to(writer)?;
                mailbox.write_to(writer)?;
                for value in [serial, refresh, retry, expire, minimum_ttl].iter() {
                    writer.write_u32::<BigEndian>(*value)?;
                }
                Ok(())
            }
            RRData::TXT(ref data) => writer.write_all(data),
            RRData::Unknown { ref data, .. } => writer.write_all(data),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn wire(data: &RRData) -> Vec<u8> {
        let mut buf = Vec::new();
        data.write_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn write_a() {
        let data = RRData::A(Ipv4Addr::new(192, 0, 2, 1));
        assert_eq!(data.typ(), Type::A);
        assert_eq!(&wire(&data)[..], &b"\xc0\x00\x02\x01"[..]);
    }

    #[test]
    fn write_mx() {
        let data = RRData::MX {
            preference: 10,
            exchange: Name::from_str("mail.example.com").unwrap(),
        };
        assert_eq!(
            &wire(&data)[..],
            &b"\x00\x0a\x04mail\x07example\x03com\x00"[..]
        );
    }

    #[test]
    fn txt_entries() {
        let data = RRData::txt(&["path=/", ""]);
        assert_eq!(data, RRData::TXT(b"\x06path=/\x00".to_vec()));
    }
}
