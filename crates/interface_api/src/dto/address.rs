//! Address DTOs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use domain_profile::validation::{validate_required, validate_zip_code};
use domain_profile::Address;

/// An address as sent by clients
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressRequest {
    #[validate(custom(function = "validate_required"))]
    pub street: String,

    #[validate(custom(function = "validate_required"))]
    pub number: String,

    pub neighborhood: String,

    #[validate(custom(function = "validate_required"))]
    pub city: String,

    #[validate(custom(function = "validate_required"))]
    pub state: String,

    #[validate(custom(function = "validate_zip_code"))]
    pub zip_code: String,

    pub complement: Option<String>,
    pub reference: Option<String>,
}

impl AddressRequest {
    /// Normalized domain address
    pub fn to_address(&self) -> Address {
        Address {
            street: self.street.clone(),
            number: self.number.clone(),
            neighborhood: self.neighborhood.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            complement: self.complement.clone(),
            reference: self.reference.clone(),
        }
        .normalized()
    }
}

impl From<&Address> for AddressRequest {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            number: address.number.clone(),
            neighborhood: address.neighborhood.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip_code: address.zip_code.clone(),
            complement: address.complement.clone(),
            reference: address.reference.clone(),
        }
    }
}

/// Body of `PUT /customers/{id}/addresses`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_distinct_addresses"))]
pub struct EditAddressRequest {
    #[validate(nested)]
    pub target: AddressRequest,

    #[validate(nested)]
    pub replacement: AddressRequest,
}

/// The replacement must differ from the target in at least one field
fn validate_distinct_addresses(request: &EditAddressRequest) -> Result<(), ValidationError> {
    let target = request.target.to_address();
    let replacement = request.replacement.to_address();

    if target.eq_ignore_case(&replacement) {
        let mut error = ValidationError::new("distinct_addresses");
        error.message = Some("The replacement address must differ from the target address.".into());
        return Err(error);
    }
    Ok(())
}

/// Body of `DELETE /customers/{id}/addresses`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DeleteAddressRequest {
    #[validate(nested)]
    pub target: AddressRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paulista() -> AddressRequest {
        AddressRequest {
            street: "Avenida Paulista ".into(),
            number: "1578".into(),
            neighborhood: "Bela Vista".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
            zip_code: "01310-200".into(),
            complement: Some("  ".into()),
            reference: None,
        }
    }

    #[test]
    fn test_to_address_normalizes() {
        let address = paulista().to_address();
        assert_eq!(address.street, "Avenida Paulista");
        assert_eq!(address.complement, None);
    }

    #[test]
    fn test_invalid_zip_code() {
        let request = AddressRequest {
            zip_code: "1234".into(),
            ..paulista()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("zip_code"));
    }

    #[test]
    fn test_replacement_must_differ_ignoring_case() {
        let request = EditAddressRequest {
            target: paulista(),
            replacement: AddressRequest {
                street: "AVENIDA PAULISTA".into(),
                ..paulista()
            },
        };
        assert!(request.validate().is_err());

        let request = EditAddressRequest {
            target: paulista(),
            replacement: AddressRequest {
                number: "1000".into(),
                ..paulista()
            },
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_nested_errors_are_reported() {
        let request = EditAddressRequest {
            target: paulista(),
            replacement: AddressRequest {
                city: String::new(),
                ..paulista()
            },
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("replacement"));
    }
}
