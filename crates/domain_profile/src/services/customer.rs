use tracing::info;

use core_kernel::CustomerId;

use crate::address::Address;
use crate::customer::Customer;
use crate::error::ProfileError;

use super::ProfileService;

/// Address book of a customer
impl ProfileService<Customer> {
    /// Lists the addresses of an active customer
    pub async fn fetch_addresses(&self, id: CustomerId) -> Result<Vec<Address>, ProfileError> {
        let customer = self.load_active(id).await?;
        Ok(customer.addresses)
    }

    /// Adds an address to an active customer
    ///
    /// # Errors
    ///
    /// * `CustomerDoesNotExist` if no active customer has this identifier
    /// * `AddressAlreadyAssigned` if an equal address is already assigned
    pub async fn assign_address(
        &self,
        id: CustomerId,
        address: Address,
    ) -> Result<Address, ProfileError> {
        let mut customer = self.load_active(id).await?;
        customer.assign_address(address.clone())?;
        self.profiles.update(&customer).await?;

        info!(customer_id = %id, "Address assigned");
        Ok(address)
    }

    /// Replaces one of the addresses of an active customer
    ///
    /// # Errors
    ///
    /// * `CustomerDoesNotExist` if no active customer has this identifier
    /// * `AddressDoesNotExist` if `target` is not assigned
    /// * `AddressAlreadyAssigned` if `replacement` is already assigned
    pub async fn edit_address(
        &self,
        id: CustomerId,
        target: Address,
        replacement: Address,
    ) -> Result<Address, ProfileError> {
        let mut customer = self.load_active(id).await?;
        customer.replace_address(&target, replacement.clone())?;
        self.profiles.update(&customer).await?;

        info!(customer_id = %id, "Address replaced");
        Ok(replacement)
    }

    /// Removes an address from an active customer
    ///
    /// # Errors
    ///
    /// * `CustomerDoesNotExist` if no active customer has this identifier
    /// * `AddressDoesNotExist` if `target` is not assigned
    pub async fn delete_address(
        &self,
        id: CustomerId,
        target: Address,
    ) -> Result<(), ProfileError> {
        let mut customer = self.load_active(id).await?;
        customer.remove_address(&target)?;
        self.profiles.update(&customer).await?;

        info!(customer_id = %id, "Address removed");
        Ok(())
    }
}
