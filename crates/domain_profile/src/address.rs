//! Address value object

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_optional, normalize_text};

/// A postal address owned by a customer
///
/// Addresses have no identity of their own: two addresses are the same
/// address when every field matches, which is what the derived `PartialEq`
/// expresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Address {
    /// Creates a new address without complement or reference
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
            neighborhood: neighborhood.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
            complement: None,
            reference: None,
        }
    }

    /// Sets the complement (apartment, block, ...)
    pub fn with_complement(mut self, complement: impl Into<String>) -> Self {
        self.complement = Some(complement.into());
        self
    }

    /// Sets a reference point to help locate the address
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Trims every field and drops blank optional fields
    ///
    /// Applied once at the wire boundary so that structural equality is not
    /// defeated by stray whitespace.
    pub fn normalized(self) -> Self {
        Self {
            street: normalize_text(&self.street),
            number: normalize_text(&self.number),
            neighborhood: normalize_text(&self.neighborhood),
            city: normalize_text(&self.city),
            state: normalize_text(&self.state),
            zip_code: normalize_text(&self.zip_code),
            complement: normalize_optional(self.complement),
            reference: normalize_optional(self.reference),
        }
    }

    /// Compares every field ignoring ASCII and Unicode case
    pub fn eq_ignore_case(&self, other: &Address) -> bool {
        fn same(a: &str, b: &str) -> bool {
            a.to_lowercase() == b.to_lowercase()
        }
        fn same_optional(a: &Option<String>, b: &Option<String>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => same(a, b),
                (None, None) => true,
                _ => false,
            }
        }

        same(&self.street, &other.street)
            && same(&self.number, &other.number)
            && same(&self.neighborhood, &other.neighborhood)
            && same(&self.city, &other.city)
            && same(&self.state, &other.state)
            && same(&self.zip_code, &other.zip_code)
            && same_optional(&self.complement, &other.complement)
            && same_optional(&self.reference, &other.reference)
    }

    /// Formats address for display
    pub fn format(&self) -> String {
        let mut line = format!("{}, {}", self.street, self.number);
        if let Some(complement) = &self.complement {
            line.push_str(&format!(" ({})", complement));
        }
        if !self.neighborhood.is_empty() {
            line.push_str(&format!(" - {}", self.neighborhood));
        }
        format!("{}\n{}/{} {}", line, self.city, self.state, self.zip_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address::new("Avenida Paulista", "1578", "Bela Vista", "São Paulo", "SP", "01310-200")
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(sample(), sample());
        assert_ne!(sample(), sample().with_complement("Apto 12"));
    }

    #[test]
    fn test_normalized_drops_blank_optionals() {
        let address = Address {
            street: "  Avenida Paulista ".to_string(),
            complement: Some("   ".to_string()),
            reference: Some(" near MASP ".to_string()),
            ..sample()
        }
        .normalized();

        assert_eq!(address.street, "Avenida Paulista");
        assert_eq!(address.complement, None);
        assert_eq!(address.reference.as_deref(), Some("near MASP"));
    }

    #[test]
    fn test_eq_ignore_case() {
        let shouted = Address::new("AVENIDA PAULISTA", "1578", "BELA VISTA", "SÃO PAULO", "sp", "01310-200");
        assert!(sample().eq_ignore_case(&shouted));
        assert!(!sample().eq_ignore_case(&shouted.with_reference("x")));
    }

    #[test]
    fn test_format() {
        let formatted = sample().with_complement("Apto 12").format();
        assert_eq!(formatted, "Avenida Paulista, 1578 (Apto 12) - Bela Vista\nSão Paulo/SP 01310-200");
    }
}
