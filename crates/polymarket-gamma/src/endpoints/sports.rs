//! Sports endpoints
//!
//! - GET /teams
//! - GET /sports

use serde::Serialize;

use super::PageParams;
use crate::error::Result;
use crate::types::{Sport, Team};
use crate::GammaClient;

#[derive(Clone, Debug, Default, Serialize)]
pub struct ListTeamsParams {
    #[serde(flatten)]
    pub page: PageParams,
    pub league: Vec<String>,
    pub name: Vec<String>,
    pub abbreviation: Vec<String>,
}

impl GammaClient {
    pub async fn list_teams(&self, params: &ListTeamsParams) -> Result<Vec<Team>> {
        self.get_typed("/teams", params).await
    }

    pub async fn list_sports(&self) -> Result<Vec<Sport>> {
        self.get_typed("/sports", &()).await
    }
}
