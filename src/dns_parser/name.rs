use std::borrow::Cow;
use std::fmt;
use std::hash;
use std::io;

use byteorder::WriteBytesExt;

use super::Error;

const MAX_LABEL_LENGTH: usize = 63;
const MAX_NAME_LENGTH: usize = 255;

/// A domain name
///
/// The name is kept in its textual form without the trailing dot and
/// written uncompressed. Comparison is ASCII case-insensitive.
/// You may turn this into a string using `.to_string()`
#[derive(Debug, Clone)]
pub struct Name {
    name: Cow<'static, str>,
}

impl Name {
    /// The root name, `.`
    pub fn root() -> Name {
        Name {
            name: Cow::Borrowed(""),
        }
    }

    /// Checks label syntax and lengths, one trailing dot is accepted
    pub fn from_str<T: Into<Cow<'static, str>>>(name: T) -> Result<Name, Error> {
        let mut name = name.into();
        if name.ends_with('.') {
            let trimmed = name[..name.len() - 1].to_owned();
            name = Cow::Owned(trimmed);
        }
        if name.is_empty() {
            return Ok(Name::root());
        }

        // length octet per label plus the terminating zero
        let mut wire_len = 1;
        for label in name.split('.') {
            if label.is_empty() {
                return Err(Error::EmptyLabel);
            }
            if label.len() > MAX_LABEL_LENGTH {
                return Err(Error::LabelTooLong);
            }
            if !label.is_ascii() {
                return Err(Error::LabelIsNotAscii);
            }
            wire_len += label.len() + 1;
        }
        if wire_len > MAX_NAME_LENGTH {
            return Err(Error::NameTooLong);
        }

        Ok(Name { name: name })
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.name.split('.').filter(|label| !label.is_empty())
    }

    /// Writes the uncompressed wire form
    pub fn write_to<T: io::Write>(&self, writer: &mut T) -> io::Result<()> {
        for label in self.labels() {
            writer.write_u8(label.len() as u8)?;
            writer.write_all(label.as_bytes())?;
        }
        writer.write_u8(0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            fmt.write_str(".")
        } else {
            fmt.write_str(&self.name)
        }
    }
}

impl hash::Hash for Name {
    fn hash<H>(&self, state: &mut H)
    where
        H: hash::Hasher,
    {
        for byte in self.name.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Name) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for Name {}
