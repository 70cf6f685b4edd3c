use anyhow::{bail, Result};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModType {
    SixMA,
    FiveMC,
    FourMC,
}

impl ModType {
    pub fn from_str(mod_type: &str) -> Result<Self> {
        match mod_type {
            "a" => Ok(ModType::SixMA),
            "m" => Ok(ModType::FiveMC),
            "21839" => Ok(ModType::FourMC),
            _ => bail!("Unsupported mod type: {}", mod_type),
        }
    }

    pub fn to_pileup_code(&self) -> &'static str {
        match self {
            ModType::SixMA => "a",
            ModType::FiveMC => "m",
            ModType::FourMC => "21839",
        }
    }
}

impl fmt::Display for ModType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModType::SixMA => write!(f, "6mA (a)"),
            ModType::FiveMC => write!(f, "5mC (m)"),
            ModType::FourMC => write!(f, "4mC (21839)"),
        }
    }
}

impl<'de> Deserialize<'de> for ModType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        match ModType::from_str(&s) {
            Ok(mod_type) => Ok(mod_type),
            Err(e) => Err(de::Error::custom(e.to_string())),
        }
    }
}

impl Serialize for ModType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_pileup_code())
    }
}
