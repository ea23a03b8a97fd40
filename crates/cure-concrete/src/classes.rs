//! Strength and development class labels.

use std::fmt;
use thiserror::Error;

/// Label that does not name any known class.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown class label '{0}'")]
pub struct UnknownLabel(pub String);

/// Compressive strength classes `C<cylinder>/<cube>`.
///
/// Which of them a given edition tabulates is decided by that edition's
/// [`StandardTable`](crate::tables::StandardTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum StrengthClass {
    C12_15,
    C16_20,
    C20_25,
    C25_30,
    C30_37,
    C35_45,
    C40_50,
    C45_55,
    C50_60,
    C55_67,
    C60_75,
    C70_85,
    C80_95,
    C90_105,
    C100_115,
}

impl StrengthClass {
    pub const ALL: [StrengthClass; 15] = [
        StrengthClass::C12_15,
        StrengthClass::C16_20,
        StrengthClass::C20_25,
        StrengthClass::C25_30,
        StrengthClass::C30_37,
        StrengthClass::C35_45,
        StrengthClass::C40_50,
        StrengthClass::C45_55,
        StrengthClass::C50_60,
        StrengthClass::C55_67,
        StrengthClass::C60_75,
        StrengthClass::C70_85,
        StrengthClass::C80_95,
        StrengthClass::C90_105,
        StrengthClass::C100_115,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StrengthClass::C12_15 => "C12/15",
            StrengthClass::C16_20 => "C16/20",
            StrengthClass::C20_25 => "C20/25",
            StrengthClass::C25_30 => "C25/30",
            StrengthClass::C30_37 => "C30/37",
            StrengthClass::C35_45 => "C35/45",
            StrengthClass::C40_50 => "C40/50",
            StrengthClass::C45_55 => "C45/55",
            StrengthClass::C50_60 => "C50/60",
            StrengthClass::C55_67 => "C55/67",
            StrengthClass::C60_75 => "C60/75",
            StrengthClass::C70_85 => "C70/85",
            StrengthClass::C80_95 => "C80/95",
            StrengthClass::C90_105 => "C90/105",
            StrengthClass::C100_115 => "C100/115",
        }
    }
}

impl std::str::FromStr for StrengthClass {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_uppercase();
        StrengthClass::ALL
            .into_iter()
            .find(|class| class.key() == label)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

impl fmt::Display for StrengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<String> for StrengthClass {
    type Error = UnknownLabel;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<StrengthClass> for String {
    fn from(class: StrengthClass) -> Self {
        class.key().to_string()
    }
}

/// Strength development classes.
///
/// The 2004 edition groups by cement class (`S`, `N`, `R`); the 2023 edition
/// by strength development class of the concrete (`CS`, `CN`, `CR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum DevelopmentClass {
    /// Slow cement (2004)
    S,
    /// Normal cement (2004)
    N,
    /// Rapid cement (2004)
    R,
    /// Slow strength development (2023)
    CS,
    /// Normal strength development (2023)
    CN,
    /// Rapid strength development (2023)
    CR,
}

impl DevelopmentClass {
    pub const ALL: [DevelopmentClass; 6] = [
        DevelopmentClass::S,
        DevelopmentClass::N,
        DevelopmentClass::R,
        DevelopmentClass::CS,
        DevelopmentClass::CN,
        DevelopmentClass::CR,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DevelopmentClass::S => "S",
            DevelopmentClass::N => "N",
            DevelopmentClass::R => "R",
            DevelopmentClass::CS => "CS",
            DevelopmentClass::CN => "CN",
            DevelopmentClass::CR => "CR",
        }
    }
}

impl std::str::FromStr for DevelopmentClass {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_uppercase();
        DevelopmentClass::ALL
            .into_iter()
            .find(|class| class.key() == label)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

impl fmt::Display for DevelopmentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<String> for DevelopmentClass {
    type Error = UnknownLabel;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DevelopmentClass> for String {
    fn from(class: DevelopmentClass) -> Self {
        class.key().to_string()
    }
}

/// Characteristic strength bins used by the 2023 s_C table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBin {
    /// f_ck <= 35 MPa
    Low,
    /// 35 < f_ck < 60 MPa
    Medium,
    /// f_ck >= 60 MPa
    High,
}

impl StrengthBin {
    /// Bin for a characteristic strength at the reference age [MPa].
    pub fn for_fck(f_ck: f64) -> Self {
        if f_ck <= 35.0 {
            StrengthBin::Low
        } else if f_ck < 60.0 {
            StrengthBin::Medium
        } else {
            StrengthBin::High
        }
    }

    pub fn index(self) -> usize {
        match self {
            StrengthBin::Low => 0,
            StrengthBin::Medium => 1,
            StrengthBin::High => 2,
        }
    }
}
