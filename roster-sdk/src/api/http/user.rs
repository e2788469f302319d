use gloo_net::http::Request;
use serde::Serialize;

use crate::api::user::UserApi;
use crate::config::ApiConfig;
use crate::model::user::{NewUser, Role, UserRecord};
use crate::Result;

use super::RespStatus;

pub struct UserHttp {
    config: ApiConfig,
}

impl UserHttp {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

/// full replacement body for PUT
#[derive(Serialize, Debug)]
struct UserReplace<'a> {
    id: u64,
    username: &'a str,
    email: &'a str,
    role: &'a Role,
}

#[async_trait::async_trait(?Send)]
impl UserApi for UserHttp {
    async fn list(&self) -> Result<Vec<UserRecord>> {
        let url = self.config.users_url();
        log::debug!("fetch users from {}", url);
        let users = Request::get(&url)
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(users)
    }

    async fn create(&self, candidate: NewUser) -> Result<UserRecord> {
        let url = self.config.users_url();
        log::debug!("add user {:?}", candidate);
        let user = Request::post(&url)
            .json(&candidate)?
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(user)
    }

    async fn update(&self, id: u64, candidate: NewUser) -> Result<UserRecord> {
        let url = self.config.user_url(id);
        log::debug!("edit user {}: {:?}", id, candidate);
        let body = UserReplace {
            id,
            username: &candidate.username,
            email: &candidate.email,
            role: &candidate.role,
        };
        let user = Request::put(&url)
            .json(&body)?
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(user)
    }

    async fn remove(&self, id: u64) -> Result<()> {
        let url = self.config.user_url(id);
        log::debug!("delete user {}", id);
        Request::delete(&url).send().await?.success().await?;
        Ok(())
    }
}
