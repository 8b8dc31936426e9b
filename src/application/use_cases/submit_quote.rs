use crate::application::dto::{ContactInfo, QuoteReceipt, QuoteRequest};
use crate::application::store::Slice;
use crate::catalog::domain::QuoteCart;
use crate::ports::outbound::{NoticeReporter, QuoteGateway};
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// SubmitQuoteUseCase - validates and submits the cart as a quote request
///
/// Validation failures block the submission with a user-facing error.
/// A successful submission clears the cart slice (visible to every
/// subscribed surface); a failed one leaves the cart intact and prompts
/// the user to retry. There is no automatic retry.
///
/// # Type Parameters
/// * `QG` - QuoteGateway implementation
/// * `NR` - NoticeReporter implementation
pub struct SubmitQuoteUseCase<QG, NR> {
    gateway: QG,
    notice_reporter: NR,
}

impl<QG, NR> SubmitQuoteUseCase<QG, NR>
where
    QG: QuoteGateway,
    NR: NoticeReporter,
{
    pub fn new(gateway: QG, notice_reporter: NR) -> Self {
        Self {
            gateway,
            notice_reporter,
        }
    }

    /// Submits the current cart.
    ///
    /// # Errors
    /// `CatalogError::Validation` if the contact info is incomplete or
    /// the cart is empty (submission not attempted);
    /// `CatalogError::QuoteSubmission` if the gateway call fails.
    pub async fn execute(
        &self,
        contact: ContactInfo,
        notes: Option<String>,
        cart: &Slice<QuoteCart>,
    ) -> Result<QuoteReceipt> {
        if let Err(e) = validate_contact(&contact) {
            self.notice_reporter.error(&e.to_string());
            return Err(e.into());
        }

        let items = cart.get().items;
        if items.is_empty() {
            let e = CatalogError::validation(
                "The quote cart is empty; add products before requesting a quote",
            );
            self.notice_reporter.error(&e.to_string());
            return Err(e.into());
        }

        let request = QuoteRequest::new(contact, items, notes);
        match self.gateway.submit(&request).await {
            Ok(receipt) => {
                cart.set(|cart| cart.clear())?;
                self.notice_reporter
                    .notice(&format!("Quote request submitted: {}", receipt.message));
                Ok(receipt)
            }
            Err(e) => {
                self.notice_reporter.warn(
                    "Quote request failed; your cart is unchanged, please try again",
                );
                Err(e)
            }
        }
    }
}

fn validate_contact(contact: &ContactInfo) -> std::result::Result<(), CatalogError> {
    if contact.name.trim().is_empty() {
        return Err(CatalogError::validation("Contact name is required"));
    }
    let email = contact.email.trim();
    if email.is_empty() {
        return Err(CatalogError::validation("Contact email is required"));
    }
    // shallow shape check; real verification happens on the server
    let valid_shape = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid_shape {
        return Err(CatalogError::validation(format!(
            "'{}' does not look like an email address",
            email
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str) -> ContactInfo {
        ContactInfo {
            name: name.to_string(),
            email: email.to_string(),
            company: None,
            phone: None,
        }
    }

    #[test]
    fn test_validate_contact_accepts_plain_address() {
        assert!(validate_contact(&contact("Kim", "kim@example.com")).is_ok());
    }

    #[test]
    fn test_validate_contact_rejects_blanks_and_bad_shapes() {
        for (name, email) in [
            ("", "kim@example.com"),
            ("Kim", ""),
            ("Kim", "not-an-email"),
            ("Kim", "@example.com"),
            ("Kim", "kim@nodot"),
        ] {
            assert!(
                validate_contact(&contact(name, email)).is_err(),
                "expected rejection for {:?}/{:?}",
                name,
                email
            );
        }
    }
}
