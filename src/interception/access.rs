use serde::Deserialize;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Privilege {
    ReadCoordinates,
    WriteCoordinates,
    AddPoints,
    GetDistance,
}

impl Display for Privilege {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Privilege::ReadCoordinates => "readCoordinates",
            Privilege::WriteCoordinates => "writeCoordinates",
            Privilege::AddPoints => "addPoints",
            Privilege::GetDistance => "getDistance",
        };
        write!(f, "{}", name)
    }
}

/// The privileges held by a caller, checked on every gated call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grants {
    privileges: HashSet<Privilege>,
}

impl Grants {
    #[cfg(test)]
    pub fn none() -> Self {
        Grants::default()
    }

    #[cfg(test)]
    pub fn all() -> Self {
        Grants::from_iter([
            Privilege::ReadCoordinates,
            Privilege::WriteCoordinates,
            Privilege::AddPoints,
            Privilege::GetDistance,
        ])
    }

    pub fn has(&self, privilege: Privilege) -> bool {
        self.privileges.contains(&privilege)
    }

    #[cfg(test)]
    pub fn without(mut self, privilege: Privilege) -> Self {
        self.privileges.remove(&privilege);
        self
    }

    /// Fails with the first privilege in `required` the caller does not hold.
    pub fn require(&self, owner: &'static str, member: &'static str, required: &[Privilege]) -> Result<(), AccessError> {
        match required.iter().find(|privilege| !self.has(**privilege)) {
            Some(privilege) => Err(AccessError::MissingPrivilege {
                owner,
                member,
                privilege: *privilege,
            }),
            None => Ok(()),
        }
    }
}

impl FromIterator<Privilege> for Grants {
    fn from_iter<T: IntoIterator<Item = Privilege>>(iter: T) -> Self {
        Grants {
            privileges: iter.into_iter().collect(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    #[error("'{owner}.{member}' requires the '{privilege}' privilege")]
    MissingPrivilege {
        owner: &'static str,
        member: &'static str,
        privilege: Privilege,
    },
}
