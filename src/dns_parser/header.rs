use byteorder::{BigEndian, ByteOrder};

use super::{Opcode, ResponseCode};

mod flag {
    pub const QUERY: u16 = 0b1000_0000_0000_0000;
    pub const OPCODE_MASK: u16 = 0b0111_1000_0000_0000;
    pub const AUTHORITATIVE: u16 = 0b0000_0100_0000_0000;
    pub const TRUNCATED: u16 = 0b0000_0010_0000_0000;
    pub const RECURSION_DESIRED: u16 = 0b0000_0001_0000_0000;
    pub const RECURSION_AVAILABLE: u16 = 0b0000_0000_1000_0000;
    pub const RESPONSE_CODE_MASK: u16 = 0b0000_0000_0000_1111;
}

/// Represents parsed header of the packet
///
/// In an update message the four counters are named ZOCOUNT, PRCOUNT,
/// UPCOUNT and ADCOUNT.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Header {
    pub id: u16,
    pub query: bool,
    pub opcode: Opcode,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub response_code: ResponseCode,
    pub questions: u16,
    pub answers: u16,
    pub nameservers: u16,
    pub additional: u16,
}

impl Header {
    pub const SIZE: usize = 12;

    /// Write the header to a buffer
    pub fn write(&self, data: &mut [u8; Header::SIZE]) {
        let mut flags = 0u16;
        flags |= (u16::from(u8::from(self.opcode)) << flag::OPCODE_MASK.trailing_zeros())
            & flag::OPCODE_MASK;
        flags |= u16::from(u8::from(self.response_code)) & flag::RESPONSE_CODE_MASK;
        if !self.query {
            flags |= flag::QUERY;
        }
        if self.authoritative {
            flags |= flag::AUTHORITATIVE;
        }
        if self.recursion_desired {
            flags |= flag::RECURSION_DESIRED;
        }
        if self.recursion_available {
            flags |= flag::RECURSION_AVAILABLE;
        }
        if self.truncated {
            flags |= flag::TRUNCATED;
        }
        BigEndian::write_u16(&mut data[..2], self.id);
        BigEndian::write_u16(&mut data[2..4], flags);
        BigEndian::write_u16(&mut data[4..6], self.questions);
        BigEndian::write_u16(&mut data[6..8], self.answers);
        BigEndian::write_u16(&mut data[8..10], self.nameservers);
        BigEndian::write_u16(&mut data[10..12], self.additional);
    }

    pub fn set_truncated(data: &mut [u8]) {
        let flags = BigEndian::read_u16(&data[2..4]);
        BigEndian::write_u16(&mut data[2..4], flags | flag::TRUNCATED);
    }

    pub fn question_count(data: &[u8]) -> u16 {
        BigEndian::read_u16(&data[4..6])
    }

    pub fn answer_count(data: &[u8]) -> u16 {
        BigEndian::read_u16(&data[6..8])
    }

    pub fn nameserver_count(data: &[u8]) -> u16 {
        BigEndian::read_u16(&data[8..10])
    }

    pub fn additional_count(data: &[u8]) -> u16 {
        BigEndian::read_u16(&data[10..12])
    }

    /// Returns `None` when the counter would overflow
    pub fn inc_questions(data: &mut [u8]) -> Option<u16> {
        Header::inc_counter(&mut data[4..6])
    }

    pub fn inc_answers(data: &mut [u8]) -> Option<u16> {
        Header::inc_counter(&mut data[6..8])
    }

    pub fn inc_nameservers(data: &mut [u8]) -> Option<u16> {
        Header::inc_counter(&mut data[8..10])
    }

    pub fn inc_additional(data: &mut [u8]) -> Option<u16> {
        Header::inc_counter(&mut data[10..12])
    }

    fn inc_counter(counter: &mut [u8]) -> Option<u16> {
        let count = BigEndian::read_u16(counter).checked_add(1)?;
        BigEndian::write_u16(counter, count);
        Some(count)
    }
}
