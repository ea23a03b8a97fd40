//! Immutable lookup tables per edition.
//!
//! 2004: Table 3.1 (f_ck) and 3.1.2(6) (s per cement class).
//! 2023: 5.1.3 (f_ck, adds C100/115) and Table B.2 (s_C per development class
//! and strength bin).

use crate::classes::{DevelopmentClass, StrengthBin, StrengthClass};
use crate::error::{ConcreteError, ConcreteResult};
use crate::standard::Edition;
use cure_core::Real;

/// Development coefficients, either one per class or one per class and bin.
#[derive(Debug)]
pub enum DevelopmentTable {
    PerClass(&'static [(DevelopmentClass, Real)]),
    PerClassAndBin(&'static [(DevelopmentClass, [Real; 3])]),
}

/// Read-only tables of one edition. Safe to share between threads.
#[derive(Debug)]
pub struct StandardTable {
    pub edition: Edition,
    strength: &'static [(StrengthClass, Real)],
    development: DevelopmentTable,
}

const FCK_COMMON: [(StrengthClass, Real); 14] = [
    (StrengthClass::C12_15, 12.0),
    (StrengthClass::C16_20, 16.0),
    (StrengthClass::C20_25, 20.0),
    (StrengthClass::C25_30, 25.0),
    (StrengthClass::C30_37, 30.0),
    (StrengthClass::C35_45, 35.0),
    (StrengthClass::C40_50, 40.0),
    (StrengthClass::C45_55, 45.0),
    (StrengthClass::C50_60, 50.0),
    (StrengthClass::C55_67, 55.0),
    (StrengthClass::C60_75, 60.0),
    (StrengthClass::C70_85, 70.0),
    (StrengthClass::C80_95, 80.0),
    (StrengthClass::C90_105, 90.0),
];

const FCK_2023: [(StrengthClass, Real); 15] = [
    FCK_COMMON[0],
    FCK_COMMON[1],
    FCK_COMMON[2],
    FCK_COMMON[3],
    FCK_COMMON[4],
    FCK_COMMON[5],
    FCK_COMMON[6],
    FCK_COMMON[7],
    FCK_COMMON[8],
    FCK_COMMON[9],
    FCK_COMMON[10],
    FCK_COMMON[11],
    FCK_COMMON[12],
    FCK_COMMON[13],
    (StrengthClass::C100_115, 100.0),
];

const S_2004: [(DevelopmentClass, Real); 3] = [
    (DevelopmentClass::S, 0.38),
    (DevelopmentClass::N, 0.25),
    (DevelopmentClass::R, 0.20),
];

const S_C_2023: [(DevelopmentClass, [Real; 3]); 3] = [
    (DevelopmentClass::CS, [0.6, 0.5, 0.4]),
    (DevelopmentClass::CN, [0.5, 0.4, 0.3]),
    (DevelopmentClass::CR, [0.3, 0.2, 0.1]),
];

pub static EN2004_TABLE: StandardTable = StandardTable {
    edition: Edition::En2004,
    strength: &FCK_COMMON,
    development: DevelopmentTable::PerClass(&S_2004),
};

pub static EN2023_TABLE: StandardTable = StandardTable {
    edition: Edition::En2023,
    strength: &FCK_2023,
    development: DevelopmentTable::PerClassAndBin(&S_C_2023),
};

impl StandardTable {
    /// Characteristic compressive strength f_ck [MPa] of a strength class.
    pub fn lookup_fck(&self, class: StrengthClass) -> ConcreteResult<Real> {
        self.strength
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, f_ck)| *f_ck)
            .ok_or_else(|| ConcreteError::UnknownStrengthClass {
                label: class.key().to_string(),
                edition: self.edition,
            })
    }

    /// Development coefficient (s or s_C) for a class and strength bin.
    ///
    /// The bin is ignored by tables with a single coefficient per class.
    pub fn lookup_development_coefficient(
        &self,
        class: DevelopmentClass,
        bin: StrengthBin,
    ) -> ConcreteResult<Real> {
        let found = match &self.development {
            DevelopmentTable::PerClass(rows) => rows
                .iter()
                .find(|(c, _)| *c == class)
                .map(|(_, s)| *s),
            DevelopmentTable::PerClassAndBin(rows) => rows
                .iter()
                .find(|(c, _)| *c == class)
                .map(|(_, s)| s[bin.index()]),
        };
        found.ok_or_else(|| ConcreteError::UnknownDevelopmentClass {
            label: class.key().to_string(),
            edition: self.edition,
        })
    }

    /// Tabulated strength classes in ascending order.
    pub fn strength_classes(&self) -> impl Iterator<Item = StrengthClass> + '_ {
        self.strength.iter().map(|(c, _)| *c)
    }

    /// Tabulated development classes, slowest first.
    pub fn development_classes(&self) -> Vec<DevelopmentClass> {
        match &self.development {
            DevelopmentTable::PerClass(rows) => rows.iter().map(|(c, _)| *c).collect(),
            DevelopmentTable::PerClassAndBin(rows) => rows.iter().map(|(c, _)| *c).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fck_lookup() {
        assert_eq!(EN2004_TABLE.lookup_fck(StrengthClass::C30_37).unwrap(), 30.0);
        assert_eq!(EN2023_TABLE.lookup_fck(StrengthClass::C100_115).unwrap(), 100.0);
    }

    #[test]
    fn c100_is_2023_only() {
        let err = EN2004_TABLE.lookup_fck(StrengthClass::C100_115).unwrap_err();
        assert!(matches!(
            err,
            ConcreteError::UnknownStrengthClass {
                edition: Edition::En2004,
                ..
            }
        ));
        assert_eq!(EN2004_TABLE.strength_classes().count(), 14);
        assert_eq!(EN2023_TABLE.strength_classes().count(), 15);
    }

    #[test]
    fn cement_class_ignores_bin() {
        for bin in [StrengthBin::Low, StrengthBin::Medium, StrengthBin::High] {
            let s = EN2004_TABLE
                .lookup_development_coefficient(DevelopmentClass::N, bin)
                .unwrap();
            assert_eq!(s, 0.25);
        }
    }

    #[test]
    fn development_class_per_bin() {
        let lookup = |class, bin| {
            EN2023_TABLE
                .lookup_development_coefficient(class, bin)
                .unwrap()
        };
        assert_eq!(lookup(DevelopmentClass::CS, StrengthBin::Low), 0.6);
        assert_eq!(lookup(DevelopmentClass::CN, StrengthBin::Medium), 0.4);
        assert_eq!(lookup(DevelopmentClass::CR, StrengthBin::High), 0.1);
    }

    #[test]
    fn development_classes_do_not_cross_editions() {
        assert!(
            EN2004_TABLE
                .lookup_development_coefficient(DevelopmentClass::CN, StrengthBin::Low)
                .is_err()
        );
        assert!(matches!(
            EN2023_TABLE.lookup_development_coefficient(DevelopmentClass::R, StrengthBin::Low),
            Err(ConcreteError::UnknownDevelopmentClass { .. })
        ));
        assert_eq!(
            EN2023_TABLE.development_classes(),
            vec![DevelopmentClass::CS, DevelopmentClass::CN, DevelopmentClass::CR]
        );
    }
}
