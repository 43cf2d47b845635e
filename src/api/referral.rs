//! Referral rules, credit redemption, and credit balances.

use reqwest::Method;
use serde_json::Value;

use crate::api::BranchClient;
use crate::error::Result;

impl BranchClient {
    /// Create a server-side referral rule governing reward-triggering
    /// events.
    ///
    /// Returns the raw response mapping.
    ///
    /// # Errors
    /// Transport and API failures are propagated.
    pub async fn create_referral_rule(
        &self,
        details: &serde_json::Map<String, Value>,
    ) -> Result<Value> {
        let mut body = details.clone();
        body.extend(self.credentials().body_fields()?);

        self.send(self.request(Method::POST, "/eventresponse").json(&body))
            .await
    }

    /// Redeem `amount` credits from `bucket` for an identity.
    ///
    /// # Errors
    /// Transport and API failures are propagated.
    pub async fn redeem(&self, identity: &str, amount: u64, bucket: &str) -> Result<Value> {
        let mut body = self.credentials().body_fields()?;
        body.insert("identity".to_string(), identity.into());
        body.insert("amount".to_string(), amount.into());
        body.insert("bucket".to_string(), bucket.into());

        self.send(self.request(Method::POST, "/redeem").json(&body))
            .await
    }

    /// Fetch the credit balances recorded for an identity.
    ///
    /// # Errors
    /// Transport and API failures are propagated.
    pub async fn credits(&self, identity: &str) -> Result<Value> {
        let query = [("identity", identity), self.credentials().id_param()];
        self.send(self.request(Method::GET, "/credits").query(&query))
            .await
    }
}
