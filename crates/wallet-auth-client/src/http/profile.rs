/*
[INPUT]:  Profile update payloads and the session cookie jar
[OUTPUT]: User/profile records and mutation results
[POS]:    HTTP layer - profile endpoints (require an authenticated session)
[UPDATE]: When profile endpoints or the UserData shape change
*/

use reqwest::Method;

use crate::http::{AuthApiClient, Result};
use crate::types::{ProfileUpdate, UserData};

impl AuthApiClient {
    /// Fetch the authenticated user's record and optional profile as one unit
    ///
    /// GET /api/a/profile
    pub async fn fetch_user_data(&self) -> Result<UserData> {
        let builder = self.request(Method::GET, "/api/a/profile")?;
        self.send_json(builder).await
    }

    /// Create or partially update the profile
    ///
    /// POST /api/a/profile - `None` fields are omitted from the body; the
    /// caller decides which fields to include.
    pub async fn upsert_profile(&self, update: &ProfileUpdate) -> Result<()> {
        let builder = self.request(Method::POST, "/api/a/profile")?;
        self.send_unit(builder.json(update)).await
    }

    /// Delete the profile (the user record itself is untouched)
    ///
    /// DELETE /api/a/profile
    pub async fn delete_profile(&self) -> Result<()> {
        let builder = self.request(Method::DELETE, "/api/a/profile")?;
        self.send_unit(builder).await
    }
}
