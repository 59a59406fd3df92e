//! Bookable services offered by the shop.
//!
//! The catalog is static data created once at startup. It is read-only and can
//! only be queried by service id.

use std::fmt;

/// A bookable offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Service {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Display string, e.g. "30 min".
    pub duration: &'static str,
    /// Display string, e.g. "R$ 50,00".
    pub price: &'static str,
}

impl Service {
    /// First letter of the name, used as a placeholder thumbnail.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

const SERVICES: &[Service] = &[
    Service {
        id: 1,
        name: "Corte de Cabelo",
        description: "Corte de cabelo personalizado com as técnicas mais modernas",
        duration: "30 min",
        price: "R$ 50,00",
    },
    Service {
        id: 2,
        name: "Barba",
        description: "Barba feita com navalha e produtos de qualidade",
        duration: "20 min",
        price: "R$ 30,00",
    },
    Service {
        id: 3,
        name: "Corte + Barba",
        description: "Pacote completo com corte de cabelo e barba",
        duration: "50 min",
        price: "R$ 70,00",
    },
    Service {
        id: 4,
        name: "Hidratação",
        description: "Hidratação profunda para cabelo e barba",
        duration: "15 min",
        price: "R$ 25,00",
    },
    Service {
        id: 5,
        name: "Pigmentação",
        description: "Pigmentação natural para cabelo e barba",
        duration: "30 min",
        price: "R$ 40,00",
    },
];

/// Ordered, immutable list of services.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    services: &'static [Service],
}

impl Catalog {
    pub const fn new(services: &'static [Service]) -> Self {
        Self { services }
    }

    /// The shop's reference catalog.
    pub const fn standard() -> Self {
        Self::new(SERVICES)
    }

    pub const fn services(&self) -> &'static [Service] {
        self.services
    }

    pub fn find(&self, id: u32) -> Option<&'static Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub const fn len(&self) -> usize {
        self.services.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 5);

        let ids: HashSet<u32> = catalog.services().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::standard();
        let barba = catalog.find(2).unwrap();
        assert_eq!(barba.name, "Barba");
        assert_eq!(barba.duration, "20 min");
        assert_eq!(barba.price, "R$ 30,00");

        assert!(catalog.find(42).is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(&[]);
        assert!(catalog.is_empty());
        assert!(catalog.find(1).is_none());
    }

    #[test]
    fn test_initial() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.find(4).unwrap().initial(), 'H');
    }
}
