use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 254;

/// A syntactically valid, fully qualified domain name.
///
/// Always stored with a trailing dot. The root name is `"."`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn root() -> Self {
        Self(".".into())
    }

    pub fn parse(name: &str) -> Result<Self, DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidDomainName("empty name".to_string()));
        }
        if name == "." {
            return Ok(Self::root());
        }

        let relative = name.strip_suffix('.').unwrap_or(name);
        for label in relative.split('.') {
            validate_label(name, label)?;
        }

        let fqdn = format!("{}.", relative);
        if fqdn.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' exceeds {} characters",
                name, MAX_NAME_LEN
            )));
        }

        Ok(Self(fqdn.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        &*self.0 == "."
    }

    /// Returns `<label>.<self>`, e.g. `_udp.foo.example.org.`.
    pub fn with_prefix_label(&self, label: &str) -> Result<Self, DomainError> {
        if self.is_root() {
            Self::parse(&format!("{}.", label))
        } else {
            Self::parse(&format!("{}.{}", label, self.0))
        }
    }
}

fn validate_label(name: &str, label: &str) -> Result<(), DomainError> {
    if label.is_empty() {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' contains an empty label",
            name
        )));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "label '{}' exceeds {} characters",
            label, MAX_LABEL_LEN
        )));
    }
    if let Some(c) = label
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '*')))
    {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' contains invalid character '{}'",
            name, c
        )));
    }
    Ok(())
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
