//! Classful addressing.

use serde::Serialize;
use std::net::Ipv4Addr;

/// Historic address class, decided by the first octet only.
///
/// First octets 0, 127 and 255 fall outside the A-E ranges and map to
/// [`IpClass::Unclassified`].
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IpClass {
    A,
    B,
    C,
    D,
    E,
    #[serde(rename = "unclassified")]
    Unclassified,
}

impl IpClass {
    /// Classify an address.
    ///
    /// # Examples
    /// ```
    /// use cidr_calc::models::IpClass;
    /// use std::net::Ipv4Addr;
    /// assert_eq!(IpClass::of(Ipv4Addr::new(91, 124, 230, 205)), IpClass::A);
    /// assert_eq!(IpClass::of(Ipv4Addr::new(127, 0, 0, 1)), IpClass::Unclassified);
    /// ```
    pub fn of(addr: Ipv4Addr) -> IpClass {
        match addr.octets()[0] {
            1..=126 => IpClass::A,
            128..=191 => IpClass::B,
            192..=223 => IpClass::C,
            224..=239 => IpClass::D,
            240..=254 => IpClass::E,
            0 | 127 | 255 => IpClass::Unclassified,
        }
    }
}

impl std::fmt::Display for IpClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D",
            IpClass::E => "E",
            IpClass::Unclassified => "unclassified",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_boundaries() {
        let class = |first: u8| IpClass::of(Ipv4Addr::new(first, 0, 0, 0));
        assert_eq!(class(0), IpClass::Unclassified);
        assert_eq!(class(1), IpClass::A);
        assert_eq!(class(126), IpClass::A);
        assert_eq!(class(127), IpClass::Unclassified);
        assert_eq!(class(128), IpClass::B);
        assert_eq!(class(191), IpClass::B);
        assert_eq!(class(192), IpClass::C);
        assert_eq!(class(223), IpClass::C);
        assert_eq!(class(224), IpClass::D);
        assert_eq!(class(239), IpClass::D);
        assert_eq!(class(240), IpClass::E);
        assert_eq!(class(254), IpClass::E);
        assert_eq!(class(255), IpClass::Unclassified);
    }

    #[test]
    fn test_class_ignores_other_octets() {
        assert_eq!(
            IpClass::of(Ipv4Addr::new(172, 16, 0, 1)),
            IpClass::of(Ipv4Addr::new(172, 255, 255, 255))
        );
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(IpClass::C.to_string(), "C");
        assert_eq!(IpClass::Unclassified.to_string(), "unclassified");
        assert_eq!(serde_json::to_string(&IpClass::A).unwrap(), r#""A""#);
        assert_eq!(
            serde_json::to_string(&IpClass::Unclassified).unwrap(),
            r#""unclassified""#
        );
    }
}
