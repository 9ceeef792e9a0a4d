//! Typed wrappers over [`ApiClient::execute`] for every operation the UI
//! consumes. Each one forwards its query verbatim, so filtering behaves the
//! same whichever world answers.

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::*;
use crate::model::{Business, Category, City, Review};
use crate::session::Session;

impl ApiClient {
    pub fn categories(&self) -> Result<Vec<Category>> {
        let d = self.execute(&RequestDescriptor::get("/categories"))?;
        parse_list(d.payload).context("parse categories")
    }

    pub fn cities(&self) -> Result<Vec<City>> {
        let d = self.execute(&RequestDescriptor::get("/cities"))?;
        parse_list(d.payload).context("parse cities")
    }

    pub fn businesses(&self, query: &BusinessQuery) -> Result<Vec<Business>> {
        let mut desc = RequestDescriptor::get("/businesses");
        desc.query = query.to_pairs();
        let d = self.execute(&desc)?;
        parse_list(d.payload).context("parse businesses")
    }

    pub fn business(&self, id: i64) -> Result<Option<Business>> {
        let d = self.execute(&RequestDescriptor::get(format!("/businesses/{}", id)))?;
        if d.payload.is_null() {
            return Ok(None);
        }
        serde_json::from_value(d.payload)
            .map(Some)
            .context("parse business")
    }

    pub fn businesses_nearby(
        &self,
        lat: f64,
        lng: f64,
        radius_km: Option<f64>,
    ) -> Result<Vec<Business>> {
        let mut desc = RequestDescriptor::get("/businesses/nearby")
            .query("lat", lat)
            .query("lng", lng);
        if let Some(radius) = radius_km {
            desc = desc.query("radius", radius);
        }
        let d = self.execute(&desc)?;
        parse_list(d.payload).context("parse nearby businesses")
    }

    pub fn register(&self, request: &RegisterRequest) -> Result<Ack> {
        let body = serde_json::to_value(request).context("serialize register request")?;
        let d = self.execute(&RequestDescriptor::post("/register", body))?;
        Ok(Ack::from_dispatched(&d))
    }

    /// Authenticates and stores the returned credential for later calls.
    /// Offline, this comes back unauthenticated with `persisted: false`.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.login_at("/login", email, password)
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    pub fn dashboard(&self) -> Result<Value> {
        let d = self.execute(&RequestDescriptor::get("/dashboard"))?;
        Ok(d.payload)
    }

    pub fn reviews(&self, business_id: i64) -> Result<Vec<Review>> {
        let d = self.execute(&RequestDescriptor::get(format!("/reviews/{}", business_id)))?;
        parse_list(d.payload).context("parse reviews")
    }

    pub fn create_review(&self, review: &NewReview) -> Result<Ack> {
        let body = serde_json::to_value(review).context("serialize review")?;
        let d = self.execute(&RequestDescriptor::post("/reviews", body))?;
        Ok(Ack::from_dispatched(&d))
    }

    pub fn admin_login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.login_at("/admin/login", email, password)
    }

    pub fn admin_dashboard(&self) -> Result<Value> {
        let d = self.execute(&RequestDescriptor::get("/admin/dashboard"))?;
        Ok(d.payload)
    }

    pub fn admin_list(&self, resource: &str) -> Result<Value> {
        let d = self.execute(&RequestDescriptor::get(format!("/admin/{}", resource)))?;
        Ok(d.payload)
    }

    pub fn admin_create(&self, resource: &str, body: Value) -> Result<Ack> {
        let d = self.execute(&RequestDescriptor::post(format!("/admin/{}", resource), body))?;
        Ok(Ack::from_dispatched(&d))
    }

    pub fn admin_update(&self, resource: &str, id: i64, body: Value) -> Result<Ack> {
        let d = self.execute(&RequestDescriptor::put(
            format!("/admin/{}/{}", resource, id),
            body,
        ))?;
        Ok(Ack::from_dispatched(&d))
    }

    pub fn admin_delete(&self, resource: &str, id: i64) -> Result<Ack> {
        let d = self.execute(&RequestDescriptor::delete(format!(
            "/admin/{}/{}",
            resource, id
        )))?;
        Ok(Ack::from_dispatched(&d))
    }

    fn login_at(&self, path: &str, email: &str, password: &str) -> Result<LoginResponse> {
        let d = self.execute(&RequestDescriptor::post(
            path,
            json!({ "email": email, "password": password }),
        ))?;
        let resp: LoginResponse =
            serde_json::from_value(d.payload).context("parse login response")?;
        if let Some(token) = &resp.access_token {
            self.session.store(Session {
                token: token.clone(),
                user_id: resp.user_id,
                business_name: resp.business_name.clone(),
                email: resp.email.clone(),
            });
        }
        Ok(resp)
    }
}

fn parse_list<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>> {
    serde_json::from_value(payload).map_err(Into::into)
}
