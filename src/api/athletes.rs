use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use dto::athlete::{Athlete, AthleteDetails};
use reqwest::Method;

impl ApiClient {
    pub async fn get_athletes(&self) -> Result<Vec<Athlete>, ApiError> {
        let request = self.request(Method::GET, "/athlete/get");
        self.send_json(request, "Can't retrieve athletes").await
    }

    pub async fn get_athlete(&self, id: &str) -> Result<Athlete, ApiError> {
        let request = self.request(Method::GET, &format!("/athlete/get/{id}"));
        self.send_json(request, "Can't retrieve athlete").await
    }

    pub async fn add_athlete(&self, athlete: &AthleteDetails) -> Result<Athlete, ApiError> {
        let request = self.request(Method::POST, "/athlete/post").json(athlete);
        self.send_json(request, "Can't add athlete").await
    }

    pub async fn edit_athlete(&self, id: &str, athlete: &AthleteDetails) -> Result<Athlete, ApiError> {
        let request = self
            .request(Method::PUT, &format!("/athlete/edit/{id}"))
            .json(athlete);
        self.send_json(request, "Can't edit athlete").await
    }

    pub async fn delete_athlete(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("/athlete/delete/{id}"));
        self.send_empty(request, "Can't delete athlete").await
    }
}
